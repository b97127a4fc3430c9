use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::quiz::{QuestionFeedback, ScoreResult, Tier};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(result) = app.result() else {
        return;
    };

    let chunks = Layout::vertical([Constraint::Length(7), Constraint::Fill(1)])
        .margin(1)
        .split(area);

    render_score_summary(frame, chunks[0], result);
    render_question_breakdown(frame, chunks[1], result, app.result_scroll());
}

fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Excellent => Color::Green,
        Tier::Good => Color::Cyan,
        Tier::NeedsImprovement => Color::Yellow,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, result: &ScoreResult) {
    let color = tier_color(result.tier);
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUIZ RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} / {}  ({:.1}%)",
                result.correct_count, result.total_count, result.percentage
            ),
            Style::default().fg(color).bold(),
        )),
        Line::from(vec![
            Span::styled(
                format!("{} ", result.tier.headline()),
                Style::default().fg(color).bold(),
            ),
            Span::styled(result.tier.advice(), Style::default().fg(Color::Gray)),
        ]),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(frame: &mut Frame, area: Rect, result: &ScoreResult, scroll: usize) {
    let lines: Vec<Line> = result
        .per_question
        .iter()
        .skip(scroll)
        .flat_map(feedback_lines)
        .collect();

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn feedback_lines(feedback: &QuestionFeedback) -> Vec<Line<'_>> {
    let number = feedback.index + 1;

    let mut lines = if feedback.is_correct {
        vec![Line::from(vec![
            Span::styled(" + ", Style::default().fg(Color::Green)),
            Span::styled(
                format!("Q{}: Correct!", number),
                Style::default().fg(Color::Green).bold(),
            ),
        ])]
    } else {
        vec![
            Line::from(vec![
                Span::styled(" - ", Style::default().fg(Color::Red)),
                Span::styled(
                    format!("Q{}: Incorrect.", number),
                    Style::default().fg(Color::Red).bold(),
                ),
            ]),
            Line::from(vec![
                Span::styled("   Your answer: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    feedback.user_answer.as_deref().unwrap_or("(none)"),
                    Style::default().fg(Color::Gray),
                ),
            ]),
            Line::from(vec![
                Span::styled("   Correct answer: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    feedback.correct_answer.as_str(),
                    Style::default().fg(Color::White).bold(),
                ),
            ]),
        ]
    };

    lines.push(Line::from(Span::styled(
        format!("   {}", feedback.explanation),
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(""));
    lines
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use crate::app::tests::test_app;
    use crate::models::Page;

    fn rendered_text(app: &crate::app::App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| crate::ui::render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_review_shows_score_and_feedback() {
        let mut app = test_app();
        app.go_to(Page::Quiz);
        app.select_next_option();
        app.choose_highlighted();
        app.submit_quiz();

        let text = rendered_text(&app);
        assert!(text.contains("QUIZ RESULTS"));
        assert!(text.contains("1 / 10"));
        assert!(text.contains("Q1: Correct!"));
        assert!(text.contains("Q2: Incorrect."));
        assert!(text.contains("Keep learning!"));
    }
}
