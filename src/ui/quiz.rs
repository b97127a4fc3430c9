use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;

const OPTION_LABELS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let question = app.current_question();
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
    ])
    .margin(2)
    .split(area);

    render_title(frame, chunks[0], app);
    render_progress(frame, chunks[1], app);
    render_question_text(frame, chunks[2], app.current_question_number(), &question.prompt);

    let stored = app.session().answers().get(app.current_question_index());
    render_options(
        frame,
        chunks[3],
        &question.options,
        app.highlighted_option(),
        stored,
    );
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let widget = Paragraph::new(app.labels().quiz_title)
        .fg(Color::Cyan)
        .bold();
    frame.render_widget(widget, area);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let mut progress = format!(
        "{}/{}  ·  answered {}",
        app.current_question_number(),
        app.total_questions(),
        app.session().answers().answered_count()
    );
    if app.session().is_submitted() {
        progress.push_str("  ·  submitted");
    }
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, number: usize, text: &str) {
    let widget = Paragraph::new(format!("{}. {}", number, text))
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    options: &[String],
    highlighted: usize,
    stored: Option<&str>,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_highlighted = index == highlighted;
        let is_chosen = stored == Some(option.as_str());
        let style = if is_highlighted {
            Style::default().fg(Color::Cyan).bold()
        } else if is_chosen {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_highlighted { ">" } else { " " };
        let radio = if is_chosen { "(•)" } else { "( )" };
        let label = OPTION_LABELS.get(index).copied().unwrap_or('?');

        lines.push(Line::from(vec![
            Span::styled(format!(" {} {} ", marker, radio), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
