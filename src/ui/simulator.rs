use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::simulator::{Simulation, TURNOUT_CHANGE_MAX, TURNOUT_CHANGE_MIN};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let labels = app.labels();

    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Fill(1)])
        .margin(1)
        .split(area);

    let heading = vec![
        Line::from(Span::styled(
            labels.sim_title,
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(labels.sim_desc.fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(heading).wrap(Wrap { trim: true }), chunks[0]);

    let columns =
        Layout::horizontal([Constraint::Length(30), Constraint::Fill(1)]).split(chunks[1]);
    render_parameters(frame, columns[0], app);

    if let Some(simulation) = app.simulation() {
        render_analysis(frame, columns[1], app, &simulation);
    }
}

fn render_parameters(frame: &mut Frame, area: Rect, app: &App) {
    let labels = app.labels();
    let mut lines = vec![
        Line::from(Span::styled(
            labels.state_sel,
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
    ];

    for (index, state) in app.states().iter().enumerate() {
        let is_selected = index == app.selected_state_index();
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };
        lines.push(Line::from(Span::styled(
            format!(" {} {}", marker, state.name),
            style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        labels.turnout_sel,
        Style::default().fg(Color::White).bold(),
    )));
    lines.push(Line::from(vec![
        Span::styled(format!("{} ", TURNOUT_CHANGE_MIN), Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("< {:+} >", app.turnout_change()),
            Style::default().fg(Color::Cyan).bold(),
        ),
        Span::styled(format!(" {:+}", TURNOUT_CHANGE_MAX), Style::default().fg(Color::DarkGray)),
    ]));

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(" Parameters ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_analysis(frame: &mut Frame, area: Rect, app: &App, simulation: &Simulation) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Color::DarkGray)
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("Analysis for {}", simulation.state),
            Style::default().fg(Color::White).bold(),
        ))),
        rows[0],
    );

    let bars = [
        cost_bar("Current (5 Yrs)", simulation.current_cost_crore, Color::LightRed),
        cost_bar("ONOE (5 Yrs)", simulation.onoe_cost_crore, Color::LightGreen),
    ];
    let chart = BarChart::default()
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, rows[1]);

    let summary = vec![
        Line::from(Span::styled(
            app.labels().calc_save,
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(vec![
            Span::styled("Est. Savings (5 Yrs)   ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("₹{} Cr", simulation.savings_display()),
                Style::default().fg(Color::Green).bold(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Projected Turnout      ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.1}%", simulation.projected_turnout_percent),
                Style::default().fg(Color::Cyan).bold(),
            ),
            Span::styled(
                format!("  ({:+}%)", simulation.turnout_change),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(summary), rows[3]);
}

fn cost_bar(label: &'static str, crore: f64, color: Color) -> Bar<'static> {
    Bar::default()
        .label(Line::from(label))
        .value(crore.round() as u64)
        .text_value(format!("₹{:.0} Cr", crore))
        .style(Style::default().fg(color))
        .value_style(Style::default().fg(Color::Black).bg(color))
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
    fn test_analysis_charts_both_costs() {
        let mut app = test_app();
        app.go_to(Page::Simulator);
        let simulation = app.simulation().unwrap();

        let text = rendered_text(&app);
        assert!(text.contains(&format!("Analysis for {}", simulation.state)));
        assert!(text.contains("Current (5 Yrs)"));
        assert!(text.contains("ONOE (5 Yrs)"));
        assert!(text.contains(&format!("₹{:.0} Cr", simulation.onoe_cost_crore)));
        assert!(text.contains(&format!("₹{} Cr", simulation.savings_display())));
    }
}
