use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
}

impl OptionLabel {
    pub const ALL: [OptionLabel; 4] = [OptionLabel::A, OptionLabel::B, OptionLabel::C, OptionLabel::D];

    pub fn index(self) -> usize {
        match self {
            OptionLabel::A => 0,
            OptionLabel::B => 1,
            OptionLabel::C => 2,
            OptionLabel::D => 3,
        }
    }

    /// Case-insensitive, ignores surrounding whitespace.
    pub fn parse(raw: &str) -> Option<OptionLabel> {
        match raw.trim().to_uppercase().as_str() {
            "A" => Some(OptionLabel::A),
            "B" => Some(OptionLabel::B),
            "C" => Some(OptionLabel::C),
            "D" => Some(OptionLabel::D),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            OptionLabel::A => 'A',
            OptionLabel::B => 'B',
            OptionLabel::C => 'C',
            OptionLabel::D => 'D',
        }
    }
}

impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    /// 1-based row in the source file, header excluded.
    pub id: usize,
    pub question: String,
    pub options: [Option<String>; 4],
    pub correct: OptionLabel,
}

impl QuestionRecord {
    pub fn option(&self, label: OptionLabel) -> Option<&str> {
        self.options[label.index()].as_deref()
    }

    /// Present options in label order.
    pub fn present_options(&self) -> impl Iterator<Item = (OptionLabel, &str)> {
        OptionLabel::ALL
            .into_iter()
            .filter_map(|label| self.option(label).map(|text| (label, text)))
    }

    pub fn correct_text(&self) -> &str {
        self.option(self.correct).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissedItem {
    /// 1-based position in the order the question was shown.
    pub number: usize,
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionOutcome {
    Correct,
    Wrong { selected: OptionLabel },
    Unanswered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeReport {
    pub score: usize,
    pub total: usize,
    /// Parallel to the question order at grading time.
    pub outcomes: Vec<QuestionOutcome>,
    pub missed: Vec<MissedItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Retry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Answering,
    Reviewing,
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Quiz,
    LoadFailed(String),
}

#[derive(Debug)]
pub struct QuizSession {
    pub questions: Vec<QuestionRecord>,
    pub selections: Vec<Option<OptionLabel>>,
    pub report: Option<GradeReport>,
    pub deck_name: String,
    pub current_index: usize,
    pub option_cursor: usize,
    pub scroll_y: u16,
}
