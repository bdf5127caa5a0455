use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("could not read questions from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl QuizError {
    /// Text shown in place of the question list when loading failed.
    pub fn user_message(&self) -> String {
        match self {
            QuizError::Io { path, .. } => format!(
                "Error loading questions. Please ensure {} exists and is readable.",
                path.display()
            ),
        }
    }
}
