pub mod config;
pub mod csv;
pub mod error;
pub mod grader;
pub mod logger;
pub mod models;
pub mod session;
pub mod shuffle;
pub mod ui;
pub mod utils;
pub mod view;


// Re-exports for convenience
pub use config::Cli;
pub use csv::{load_questions, parse_csv_line, parse_questions};
pub use error::QuizError;
pub use grader::grade;
pub use models::{
    AppState, GradeReport, MissedItem, OptionLabel, Phase, QuestionOutcome, QuestionRecord,
    QuizSession, Verdict,
};
pub use session::{Action, handle_quiz_input};
pub use shuffle::shuffle;
pub use ui::{draw_load_error, draw_quiz};
pub use view::{QuizView, render_quiz};

/// Loads, parses and (unless disabled) shuffles the question bank once.
pub fn open_session(cli: &Cli) -> Result<QuizSession, QuizError> {
    let mut questions = load_questions(&cli.questions)?;
    if !cli.no_shuffle {
        shuffle(&mut questions);
    }
    let deck_name = cli
        .questions
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| "questions".to_string());
    Ok(QuizSession::new(questions, deck_name))
}
