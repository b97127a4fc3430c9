mod home;
mod myths;
mod quiz;
mod result;
mod simulator;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::app::{App, QuizView};
use crate::models::Page;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_tabs(frame, chunks[0], app);

    match app.page {
        Page::Home => home::render(frame, chunks[1], app),
        Page::Simulator => simulator::render(frame, chunks[1], app),
        Page::Myths => myths::render(frame, chunks[1], app),
        Page::Quiz => match app.quiz_view() {
            QuizView::Answering => quiz::render(frame, chunks[1], app),
            QuizView::Review => result::render(frame, chunks[1], app),
        },
    }

    render_footer(frame, chunks[2], app);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let labels = app.labels();
    let titles: Vec<&str> = Page::ALL.iter().map(|p| labels.page_title(*p)).collect();

    let widget = Tabs::new(titles)
        .select(app.page.position())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::Cyan).bold())
        .divider("·")
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Color::DarkGray)
                .title(Span::styled(
                    format!(" {} ", labels.title),
                    Style::default().fg(Color::Green).bold(),
                )),
        );
    frame.render_widget(widget, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let text = match app.status() {
        Some(status) => Line::from(status.to_string().fg(Color::Yellow)),
        None => Line::from(controls_hint(app).fg(Color::DarkGray)),
    };
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn controls_hint(app: &App) -> &'static str {
    match (app.page, app.quiz_view()) {
        (Page::Home, _) => "tab next page  ·  F2 language  ·  q quit",
        (Page::Simulator, _) => "j/k state  ·  h/l turnout  ·  x export  ·  tab next page  ·  q quit",
        (Page::Myths, _) => "type to search  ·  backspace delete  ·  tab next page  ·  esc quit",
        (Page::Quiz, QuizView::Answering) => {
            "j/k navigate  ·  enter select  ·  c clear  ·  h/l question  ·  s submit  ·  q quit"
        }
        (Page::Quiz, QuizView::Review) => "j/k scroll  ·  e edit answers  ·  r restart  ·  q quit",
    }
}
