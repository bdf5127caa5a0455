use clap::Parser;
use std::path::PathBuf;

/// Percentage at or above which a graded attempt counts as passed.
pub const PASS_THRESHOLD_PERCENT: u32 = 80;

/// question, four option slots, answer label.
pub const MIN_FIELDS: usize = 6;

/// Stands in for the user's answer in the review when nothing was picked.
pub const NO_ANSWER_TEXT: &str = "No Answer Selected";

pub const PASS_MESSAGE: &str = "Great job! You passed.";
pub const RETRY_MESSAGE: &str = "Keep studying and try again.";

pub const DEFAULT_QUESTIONS_FILE: &str = "questions.csv";
pub const DEFAULT_LOG_FILE: &str = "quiz_debug.log";

#[derive(Debug, Clone, Parser)]
#[command(name = "quiz-review", version, about = "Multiple-choice quiz in the terminal")]
pub struct Cli {
    /// Question bank (header line, then question,A,B,C,D,answer rows)
    #[arg(default_value = DEFAULT_QUESTIONS_FILE)]
    pub questions: PathBuf,

    /// Where debug output is appended
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Keep file order on startup instead of shuffling
    #[arg(long)]
    pub no_shuffle: bool,
}
