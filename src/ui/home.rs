use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::data::ExplainerPoint;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(9),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_intro(frame, chunks[0], app);

    let columns = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    let labels = app.labels();
    let explainer = app.explainer();
    render_points(frame, columns[0], labels.pros, &explainer.benefits, Color::Green);
    render_points(frame, columns[1], labels.cons, &explainer.challenges, Color::Red);

    let sources = vec![
        Line::from(explainer.sources.as_str().fg(Color::DarkGray)),
        Line::from(explainer.disclaimer.as_str().fg(Color::DarkGray).italic()),
    ];
    frame.render_widget(
        Paragraph::new(sources).alignment(Alignment::Center),
        chunks[2],
    );
}

fn render_intro(frame: &mut Frame, area: Rect, app: &App) {
    let labels = app.labels();
    let explainer = app.explainer();

    let columns = Layout::horizontal([Constraint::Fill(2), Constraint::Fill(1)]).split(area);

    let content = vec![
        Line::from(Span::styled(
            labels.welcome,
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(labels.subtitle.fg(Color::DarkGray)),
        Line::from(""),
        Line::from(labels.intro),
        Line::from(""),
        Line::from(explainer.summary.as_str().fg(Color::Gray)),
    ];
    frame.render_widget(
        Paragraph::new(content).wrap(Wrap { trim: true }),
        columns[0],
    );

    let metric = vec![
        Line::from("Total Voters in India (2024)".fg(Color::DarkGray)),
        Line::from(""),
        Line::from(Span::styled(
            explainer.total_voters.as_str(),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(explainer.total_voters_change.as_str().fg(Color::Green)),
    ];
    let widget = Paragraph::new(metric).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::vertical(1)),
    );
    frame.render_widget(widget, columns[1]);
}

fn render_points(
    frame: &mut Frame,
    area: Rect,
    heading: &str,
    points: &[ExplainerPoint],
    color: Color,
) {
    let lines: Vec<Line> = points
        .iter()
        .map(|point| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(color)),
                Span::styled(format!("{}: ", point.title), Style::default().fg(color).bold()),
                Span::styled(point.detail.as_str(), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(color)
            .title(Span::styled(
                format!(" {} ", heading),
                Style::default().fg(color).bold(),
            ))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}
