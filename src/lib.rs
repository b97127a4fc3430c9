//! # onoe-hub
//!
//! A terminal voter-education dashboard about the "One Nation One Election"
//! proposal: explainer, cost simulator, myth buster and a scored quiz.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use onoe_hub::{Hub, HubConfig, HubError};
//!
//! fn main() -> Result<(), HubError> {
//!     let config = HubConfig::default();
//!     let hub = Hub::new(&config)?;
//!
//!     // Take over the terminal until the user quits
//!     hub.run()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The quiz engine can also be driven without a terminal:
//!
//! ```rust
//! use onoe_hub::data::reference_questions;
//! use onoe_hub::quiz::{QuizSession, Tier, TierThresholds};
//!
//! let bank = reference_questions().unwrap();
//! let mut session = QuizSession::new(bank, TierThresholds::default());
//! session.record_answer(0, "Election Commission of India").unwrap();
//!
//! let result = session.submit();
//! assert_eq!(result.correct_count, 1);
//! assert_eq!(result.tier, Tier::NeedsImprovement);
//! ```

mod app;
pub mod config;
pub mod data;
pub mod export;
pub mod i18n;
pub mod models;
pub mod myths;
pub mod quiz;
pub mod simulator;
pub mod terminal;
mod ui;

use std::io;
use std::path::PathBuf;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;

pub use app::{App, Content, QuizView};
pub use config::{ConfigError, HubConfig};
pub use data::LoadError;
pub use export::ExportError;
pub use models::Page;
pub use quiz::QuizError;

/// Error type for dashboard operations.
#[derive(Debug, Error)]
pub enum HubError {
    #[error("failed to load data: {0}")]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error("export failed: {0}")]
    Export(#[from] ExportError),

    #[error("invalid answers file {}: {source}", .path.display())]
    Answers {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown state: {0}")]
    UnknownState(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// The interactive dashboard.
pub struct Hub {
    app: App,
}

impl Hub {
    /// Load the question bank and bundled content named by `config`.
    pub fn new(config: &HubConfig) -> Result<Self, HubError> {
        let bank = config.question_bank()?;
        let thresholds = config.thresholds(bank.len());
        let content = Content::bundled()?;

        Ok(Self {
            app: App::new(bank, thresholds, content, config.language),
        })
    }

    /// Run the dashboard in the terminal.
    ///
    /// This will take over the terminal and return when the user quits.
    pub fn run(mut self) -> Result<(), HubError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }
}

fn run_event_loop(terminal: &mut terminal::HubTerminal, app: &mut App) -> Result<(), HubError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                tracing::info!("quit requested");
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Esc => return true,
        KeyCode::Tab => {
            app.next_page();
            return false;
        }
        KeyCode::BackTab => {
            app.previous_page();
            return false;
        }
        KeyCode::F(2) => {
            app.toggle_language();
            return false;
        }
        _ => {}
    }

    match app.page {
        Page::Home => is_quit(key),
        Page::Simulator => handle_simulator_input(app, key),
        Page::Myths => handle_myths_input(app, key),
        Page::Quiz => match app.quiz_view() {
            QuizView::Answering => handle_quiz_input(app, key),
            QuizView::Review => handle_review_input(app, key),
        },
    }
}

fn is_quit(key: KeyCode) -> bool {
    matches!(key, KeyCode::Char('q') | KeyCode::Char('Q'))
}

fn handle_simulator_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_state(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_state(),
        KeyCode::Left | KeyCode::Char('h') => app.decrease_turnout_change(),
        KeyCode::Right | KeyCode::Char('l') => app.increase_turnout_change(),
        KeyCode::Char('x') | KeyCode::Char('X') => {
            app.export_simulation();
        }
        key => return is_quit(key),
    }
    false
}

/// Every printable key edits the search box, so only Esc quits here.
fn handle_myths_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char(c) => app.push_query_char(c),
        KeyCode::Backspace => app.pop_query_char(),
        _ => {}
    }
    false
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Left | KeyCode::Char('h') => app.previous_question(),
        KeyCode::Right | KeyCode::Char('l') => app.next_question(),
        KeyCode::Enter | KeyCode::Char(' ') => app.choose_highlighted(),
        KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Backspace => {
            app.clear_current_answer()
        }
        KeyCode::Char('s') | KeyCode::Char('S') => app.submit_quiz(),
        key => return is_quit(key),
    }
    false
}

fn handle_review_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('e') | KeyCode::Char('E') => app.edit_answers(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart_quiz(),
        key => return is_quit(key),
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;

    fn press(app: &mut App, keys: &[KeyCode]) -> bool {
        keys.iter().any(|key| handle_input(app, *key))
    }

    #[test]
    fn test_tab_cycles_pages() {
        let mut app = test_app();
        assert!(!press(&mut app, &[KeyCode::Tab, KeyCode::Tab]));
        assert_eq!(app.page, Page::Myths);
        press(&mut app, &[KeyCode::BackTab]);
        assert_eq!(app.page, Page::Simulator);
    }

    #[test]
    fn test_q_types_into_myth_search() {
        let mut app = test_app();
        app.go_to(Page::Myths);
        assert!(!press(&mut app, &[KeyCode::Char('q')]));
        assert_eq!(app.myth_query(), "q");
        assert!(press(&mut app, &[KeyCode::Esc]));
    }

    #[test]
    fn test_q_quits_elsewhere() {
        let mut app = test_app();
        assert!(press(&mut app, &[KeyCode::Char('q')]));
        app.go_to(Page::Simulator);
        assert!(press(&mut app, &[KeyCode::Char('Q')]));
    }

    #[test]
    fn test_quiz_flow_through_keys() {
        let mut app = test_app();
        app.go_to(Page::Quiz);
        press(
            &mut app,
            &[KeyCode::Down, KeyCode::Enter, KeyCode::Char('s')],
        );

        assert_eq!(app.quiz_view(), QuizView::Review);
        assert_eq!(app.result().map(|r| r.correct_count), Some(1));

        press(&mut app, &[KeyCode::Char('r')]);
        assert_eq!(app.quiz_view(), QuizView::Answering);
        assert!(app.result().is_none());
    }

    #[test]
    fn test_clear_key_unanswers_current_question() {
        let mut app = test_app();
        app.go_to(Page::Quiz);
        press(
            &mut app,
            &[KeyCode::Down, KeyCode::Enter, KeyCode::Left, KeyCode::Char('c'), KeyCode::Char('s')],
        );

        assert_eq!(app.session().answers().get(0), None);
        assert_eq!(app.result().map(|r| r.correct_count), Some(0));
    }

    #[test]
    fn test_f2_toggles_language() {
        let mut app = test_app();
        press(&mut app, &[KeyCode::F(2)]);
        assert_eq!(app.language, i18n::Language::Hindi);
    }

    #[test]
    fn test_simulator_keys() {
        let mut app = test_app();
        app.go_to(Page::Simulator);
        press(&mut app, &[KeyCode::Down, KeyCode::Right, KeyCode::Right]);
        assert_eq!(app.selected_state_index(), 1);
        assert_eq!(
            app.turnout_change(),
            simulator::DEFAULT_TURNOUT_CHANGE + 2
        );
    }
}
