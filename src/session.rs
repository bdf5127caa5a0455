use crate::grader::grade;
use crate::logger;
use crate::models::{OptionLabel, Phase, QuestionRecord, QuizSession};
use crate::shuffle::shuffle_with;
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;

/// What the event loop should do after a key was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

impl QuizSession {
    pub fn new(questions: Vec<QuestionRecord>, deck_name: impl Into<String>) -> Self {
        let selections = vec![None; questions.len()];
        Self {
            questions,
            selections,
            report: None,
            deck_name: deck_name.into(),
            current_index: 0,
            option_cursor: 0,
            scroll_y: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.report.is_some() {
            Phase::Reviewing
        } else {
            Phase::Answering
        }
    }

    pub fn questions_answered(&self) -> usize {
        self.selections.iter().filter(|s| s.is_some()).count()
    }

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.questions.get(self.current_index)
    }

    /// Labels of the present options of the focused question, in order.
    fn current_labels(&self) -> Vec<OptionLabel> {
        self.current_question()
            .map(|q| q.present_options().map(|(label, _)| label).collect())
            .unwrap_or_default()
    }

    pub fn focused_label(&self) -> Option<OptionLabel> {
        self.current_labels().get(self.option_cursor).copied()
    }

    /// Picks `label` for the focused question. Absent options and the review
    /// phase leave the selection untouched.
    pub fn select(&mut self, label: OptionLabel) {
        if self.phase() == Phase::Reviewing {
            return;
        }
        let Some(question) = self.current_question() else {
            return;
        };
        if question.option(label).is_none() {
            return;
        }
        if let Some(position) = self.current_labels().iter().position(|l| *l == label) {
            self.option_cursor = position;
        }
        self.selections[self.current_index] = Some(label);
    }

    pub fn clear_selection(&mut self) {
        if self.phase() == Phase::Answering
            && let Some(selection) = self.selections.get_mut(self.current_index)
        {
            *selection = None;
        }
    }

    pub fn next_question(&mut self) {
        if self.current_index < self.questions.len().saturating_sub(1) {
            self.current_index += 1;
            self.sync_option_cursor();
        }
    }

    pub fn previous_question(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
            self.sync_option_cursor();
        }
    }

    pub fn next_option(&mut self) {
        let count = self.current_labels().len();
        if self.option_cursor + 1 < count {
            self.option_cursor += 1;
        }
    }

    pub fn previous_option(&mut self) {
        self.option_cursor = self.option_cursor.saturating_sub(1);
    }

    /// Puts the option cursor on the current selection, or the first option.
    fn sync_option_cursor(&mut self) {
        let labels = self.current_labels();
        self.option_cursor = self
            .selections
            .get(self.current_index)
            .copied()
            .flatten()
            .and_then(|selected| labels.iter().position(|l| *l == selected))
            .unwrap_or(0);
    }

    /// Grades the current selections. Has no effect once a report exists.
    pub fn submit(&mut self) {
        if self.phase() == Phase::Reviewing {
            return;
        }
        let report = grade(&self.questions, &self.selections);
        logger::log(&format!(
            "Submitted {}: {}/{} ({}%), {} missed",
            self.deck_name,
            report.score,
            report.total,
            report.percentage(),
            report.missed.len()
        ));
        self.report = Some(report);
        self.scroll_y = 0;
    }

    /// Clears selections and grading, keeping the question order.
    pub fn retry(&mut self) {
        if self.phase() == Phase::Answering {
            return;
        }
        logger::log("Retry requested");
        self.reset_attempt();
    }

    pub fn reshuffle(&mut self) {
        self.reshuffle_with(&mut rand::thread_rng());
    }

    /// New random order with a fresh attempt. Not available while reviewing.
    pub fn reshuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.phase() == Phase::Reviewing {
            return;
        }
        shuffle_with(&mut self.questions, rng);
        logger::log(&format!("Reshuffled {} questions", self.questions.len()));
        self.reset_attempt();
    }

    fn reset_attempt(&mut self) {
        self.selections = vec![None; self.questions.len()];
        self.report = None;
        self.current_index = 0;
        self.option_cursor = 0;
        self.scroll_y = 0;
    }
}

pub fn handle_quiz_input(session: &mut QuizSession, key: KeyEvent) -> Action {
    match session.phase() {
        Phase::Answering => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Action::Quit,
            KeyCode::Down | KeyCode::Char('j') => session.next_question(),
            KeyCode::Up | KeyCode::Char('k') => session.previous_question(),
            KeyCode::Right | KeyCode::Char('l') => session.next_option(),
            KeyCode::Left | KeyCode::Char('h') => session.previous_option(),
            KeyCode::Char(' ') => {
                if let Some(label) = session.focused_label() {
                    session.select(label);
                }
            }
            KeyCode::Char(c @ ('a'..='d' | 'A'..='D')) => {
                if let Some(label) = OptionLabel::parse(&c.to_string()) {
                    session.select(label);
                }
            }
            KeyCode::Backspace | KeyCode::Delete => session.clear_selection(),
            KeyCode::Enter | KeyCode::Char('s') => session.submit(),
            KeyCode::Char('x') => session.reshuffle(),
            _ => {}
        },
        Phase::Reviewing => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Action::Quit,
            KeyCode::Down | KeyCode::Char('j') => {
                session.scroll_y = session.scroll_y.saturating_add(1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                session.scroll_y = session.scroll_y.saturating_sub(1);
            }
            KeyCode::PageDown => session.scroll_y = session.scroll_y.saturating_add(10),
            KeyCode::PageUp => session.scroll_y = session.scroll_y.saturating_sub(10),
            KeyCode::Char('r') => session.retry(),
            _ => {}
        },
    }
    Action::Continue
}
