use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::myths::NO_MATCH_HINT;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Fill(1)])
        .margin(1)
        .split(area);

    render_search_box(frame, chunks[0], app);
    render_cards(frame, chunks[1], app);
}

fn render_search_box(frame: &mut Frame, area: Rect, app: &App) {
    let content = if app.myth_query().is_empty() {
        Line::from("Search keywords (e.g., cost, evm, federal)...".fg(Color::DarkGray))
    } else {
        Line::from(vec![
            Span::styled(app.myth_query(), Style::default().fg(Color::White)),
            Span::styled("_", Style::default().fg(Color::Cyan)),
        ])
    };

    let widget = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::Cyan)
            .title(format!(" {} ", app.labels().check_btn)),
    );
    frame.render_widget(widget, area);
}

fn render_cards(frame: &mut Frame, area: Rect, app: &App) {
    let matches = app.matching_facts();

    let lines: Vec<Line> = if matches.is_empty() {
        vec![Line::from(NO_MATCH_HINT.fg(Color::Yellow))]
    } else {
        let source_label = app.labels().source;
        matches
            .iter()
            .flat_map(|entry| {
                [
                    Line::from(vec![
                        Span::styled("MYTH: ", Style::default().fg(Color::Red).bold()),
                        Span::styled(entry.myth.as_str(), Style::default().fg(Color::White)),
                    ]),
                    Line::from(vec![
                        Span::styled("FACT: ", Style::default().fg(Color::Green).bold()),
                        Span::styled(entry.fact.as_str(), Style::default().fg(Color::Gray)),
                    ]),
                    Line::from(
                        format!("{}: {}", source_label, entry.source).fg(Color::DarkGray),
                    ),
                    Line::from(""),
                ]
            })
            .collect()
    };

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}
