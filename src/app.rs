use std::path::PathBuf;

use crate::data::{self, Explainer, LoadError};
use crate::export::{self, SimulationReport};
use crate::i18n::{Labels, Language};
use crate::models::{Page, QuestionBank, QuestionRecord};
use crate::myths::{self, FactEntry};
use crate::quiz::{QuizSession, ScoreResult, TierThresholds};
use crate::simulator::{self, Simulation, StateStats};

/// Which half of the quiz page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizView {
    #[default]
    Answering,
    Review,
}

/// Reference data shown by the non-quiz pages.
pub struct Content {
    pub explainer: Explainer,
    pub facts: Vec<FactEntry>,
    pub states: Vec<StateStats>,
}

impl Content {
    pub fn bundled() -> Result<Self, LoadError> {
        Ok(Self {
            explainer: data::explainer()?,
            facts: data::facts()?,
            states: data::states()?,
        })
    }
}

pub struct App {
    pub page: Page,
    pub language: Language,
    content: Content,
    session: QuizSession,
    quiz_view: QuizView,
    current_question_index: usize,
    highlighted_option: usize,
    result_scroll: usize,
    selected_state: usize,
    turnout_change: i32,
    myth_query: String,
    status: Option<String>,
}

impl App {
    pub fn new(
        bank: QuestionBank,
        thresholds: TierThresholds,
        content: Content,
        language: Language,
    ) -> Self {
        Self {
            page: Page::Home,
            language,
            content,
            session: QuizSession::new(bank, thresholds),
            quiz_view: QuizView::Answering,
            current_question_index: 0,
            highlighted_option: 0,
            result_scroll: 0,
            selected_state: 0,
            turnout_change: simulator::DEFAULT_TURNOUT_CHANGE,
            myth_query: String::new(),
            status: None,
        }
    }

    pub fn labels(&self) -> &'static Labels {
        self.language.labels()
    }

    pub fn explainer(&self) -> &Explainer {
        &self.content.explainer
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggle();
    }

    // Navigation

    pub fn next_page(&mut self) {
        self.go_to(self.page.next());
    }

    pub fn previous_page(&mut self) {
        self.go_to(self.page.previous());
    }

    /// Switch pages. Leaving the quiz discards its session.
    pub fn go_to(&mut self, page: Page) {
        if self.page == Page::Quiz && page != Page::Quiz {
            self.restart_quiz();
        }
        self.page = page;
        self.status = None;
    }

    // Quiz

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn quiz_view(&self) -> QuizView {
        self.quiz_view
    }

    pub fn current_question(&self) -> &QuestionRecord {
        &self.session.bank()[self.current_question_index]
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    pub fn current_question_number(&self) -> usize {
        self.current_question_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.session.bank().len()
    }

    pub fn highlighted_option(&self) -> usize {
        self.highlighted_option
    }

    pub fn result(&self) -> Option<&ScoreResult> {
        self.session.result()
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn select_next_option(&mut self) {
        let count = self.current_question().options.len();
        self.highlighted_option = (self.highlighted_option + 1) % count;
    }

    pub fn select_previous_option(&mut self) {
        let count = self.current_question().options.len();
        self.highlighted_option = (self.highlighted_option + count - 1) % count;
    }

    pub fn next_question(&mut self) {
        if self.current_question_index + 1 < self.total_questions() {
            self.current_question_index += 1;
            self.sync_highlight();
        }
    }

    pub fn previous_question(&mut self) {
        if self.current_question_index > 0 {
            self.current_question_index -= 1;
            self.sync_highlight();
        }
    }

    /// Record the highlighted option for the current question and move on.
    pub fn choose_highlighted(&mut self) {
        let index = self.current_question_index;
        let option = self.current_question().options[self.highlighted_option].clone();
        if let Err(err) = self.session.record_answer(index, option) {
            tracing::warn!(%err, "answer rejected");
            self.status = Some(err.to_string());
            return;
        }
        self.next_question();
    }

    /// Drop the answer to the current question without moving on.
    pub fn clear_current_answer(&mut self) {
        if let Err(err) = self.session.clear_answer(self.current_question_index) {
            tracing::warn!(%err, "clear rejected");
            self.status = Some(err.to_string());
        }
    }

    pub fn submit_quiz(&mut self) {
        let result = self.session.submit();
        self.status = Some(format!(
            "Final score: {}/{}",
            result.correct_count, result.total_count
        ));
        self.quiz_view = QuizView::Review;
        self.result_scroll = 0;
    }

    /// Go back to the questions, keeping the answers and the last result.
    pub fn edit_answers(&mut self) {
        self.quiz_view = QuizView::Answering;
        self.status = None;
    }

    pub fn restart_quiz(&mut self) {
        self.session.reset();
        self.quiz_view = QuizView::Answering;
        self.current_question_index = 0;
        self.highlighted_option = 0;
        self.result_scroll = 0;
        self.status = None;
    }

    pub fn scroll_results_down(&mut self) {
        if self.result_scroll + 1 < self.total_questions() {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    /// Point the highlight at the stored answer, if any.
    fn sync_highlight(&mut self) {
        let question = self.current_question();
        let stored = self
            .session
            .answers()
            .get(self.current_question_index)
            .and_then(|answer| question.options.iter().position(|o| o == answer));
        self.highlighted_option = stored.unwrap_or(0);
    }

    // Simulator

    pub fn states(&self) -> &[StateStats] {
        &self.content.states
    }

    pub fn selected_state_index(&self) -> usize {
        self.selected_state
    }

    pub fn turnout_change(&self) -> i32 {
        self.turnout_change
    }

    pub fn select_next_state(&mut self) {
        if !self.content.states.is_empty() {
            self.selected_state = (self.selected_state + 1) % self.content.states.len();
        }
    }

    pub fn select_previous_state(&mut self) {
        let count = self.content.states.len();
        if count > 0 {
            self.selected_state = (self.selected_state + count - 1) % count;
        }
    }

    pub fn increase_turnout_change(&mut self) {
        self.turnout_change = simulator::clamp_turnout_change(self.turnout_change + 1);
    }

    pub fn decrease_turnout_change(&mut self) {
        self.turnout_change = simulator::clamp_turnout_change(self.turnout_change - 1);
    }

    pub fn simulation(&self) -> Option<Simulation> {
        self.content
            .states
            .get(self.selected_state)
            .map(|state| simulator::simulate(state, self.turnout_change))
    }

    /// Write the current projection next to the working directory.
    pub fn export_simulation(&mut self) -> Option<PathBuf> {
        let simulation = self.simulation()?;
        let path = export::default_file_name(&simulation.state);
        let report = SimulationReport {
            simulation: &simulation,
            states: &self.content.states,
        };

        match export::write_report(&path, &report) {
            Ok(()) => {
                self.status = Some(format!("Report saved to {}", path.display()));
                Some(path)
            }
            Err(err) => {
                tracing::error!(%err, "export failed");
                self.status = Some(err.to_string());
                None
            }
        }
    }

    // Myth Buster

    pub fn myth_query(&self) -> &str {
        &self.myth_query
    }

    pub fn push_query_char(&mut self, c: char) {
        self.myth_query.push(c);
    }

    pub fn pop_query_char(&mut self) {
        self.myth_query.pop();
    }

    pub fn matching_facts(&self) -> Vec<&FactEntry> {
        myths::search(&self.content.facts, &self.myth_query)
    }
}
