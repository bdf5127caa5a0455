use crate::config::MIN_FIELDS;
use crate::error::QuizError;
use crate::logger;
use crate::models::{OptionLabel, QuestionRecord};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Why a data row did not become a question. Never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowRejection {
    #[error("expected at least {min} fields, found {0}", min = MIN_FIELDS)]
    TooFewFields(usize),
    #[error("question text is empty")]
    EmptyQuestion,
    #[error("every option is empty")]
    NoOptions,
    #[error("answer {0:?} is not one of A-D")]
    UnknownAnswer(String),
    #[error("answer {0} points at an empty option")]
    AnswerOptionMissing(OptionLabel),
}

pub fn load_questions(path: &Path) -> Result<Vec<QuestionRecord>, QuizError> {
    let content = fs::read_to_string(path).map_err(|source| QuizError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let questions = parse_questions(&content);
    logger::log(&format!(
        "Loaded {} questions from {}",
        questions.len(),
        path.display()
    ));
    Ok(questions)
}

/// First line is the header. Rows keep their 1-based line id even when
/// earlier rows were blank or rejected.
pub fn parse_questions(text: &str) -> Vec<QuestionRecord> {
    let mut questions = Vec::new();

    for (id, line) in text.trim().lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        match parse_row(id, line) {
            Ok(record) => questions.push(record),
            Err(reason) => logger::log(&format!("Skipping row {}: {}", id, reason)),
        }
    }

    questions
}

pub fn parse_row(id: usize, line: &str) -> Result<QuestionRecord, RowRejection> {
    let fields = parse_csv_line(line);
    if fields.len() < MIN_FIELDS {
        return Err(RowRejection::TooFewFields(fields.len()));
    }

    let mut fields = fields.into_iter();
    let question = fields.next().unwrap_or_default();
    let options: [Option<String>; 4] = std::array::from_fn(|_| {
        fields.next().filter(|text| !text.is_empty())
    });
    let answer = fields.next().unwrap_or_default();

    if question.is_empty() {
        return Err(RowRejection::EmptyQuestion);
    }
    if options.iter().all(Option::is_none) {
        return Err(RowRejection::NoOptions);
    }
    let correct = OptionLabel::parse(&answer).ok_or(RowRejection::UnknownAnswer(answer))?;
    if options[correct.index()].is_none() {
        return Err(RowRejection::AnswerOptionMissing(correct));
    }

    Ok(QuestionRecord {
        id,
        question,
        options,
        correct,
    })
}

/// Splits one line on commas. A field opening with `"` may contain commas,
/// `""` inside it becomes `"`. Wrapping quotes are dropped and every field is trimmed.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current_field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current_field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if current_field.trim().is_empty() => {
                current_field.clear();
                in_quotes = true;
            }
            ',' if !in_quotes => {
                fields.push(current_field.trim().to_string());
                current_field.clear();
            }
            _ => {
                current_field.push(c);
            }
        }
    }
    fields.push(current_field.trim().to_string());

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_csv_simple() {
        let fields = parse_csv_line("What is 2+2?,3,4,5,6,B");
        assert_eq!(fields, vec!["What is 2+2?", "3", "4", "5", "6", "B"]);
    }

    #[test]
    fn test_parse_csv_with_commas_in_option() {
        let fields = parse_csv_line("Pick one,\"opt, with comma\",b,c,d,A");
        assert_eq!(fields[1], "opt, with comma");
        assert_eq!(fields.len(), 6);
    }

    #[test]
    fn test_parse_csv_with_escaped_quotes() {
        let fields = parse_csv_line("\"She said \"\"hi\"\"\",x,y,z,w,A");
        assert_eq!(fields[0], "She said \"hi\"");
    }

    #[test]
    fn test_parse_csv_trims_fields() {
        let fields = parse_csv_line("  Q  , a ,\" b \",c,d, b ");
        assert_eq!(fields, vec!["Q", "a", "b", "c", "d", "b"]);
    }

    #[test]
    fn test_parse_csv_empty_fields() {
        let fields = parse_csv_line(",,");
        assert_eq!(fields, vec!["", "", ""]);
    }

    #[test]
    fn test_parse_csv_quote_inside_unquoted_field_is_literal() {
        let fields = parse_csv_line("5\" screws,a,b,c,d,A");
        assert_eq!(fields[0], "5\" screws");
    }

    #[test]
    fn test_parse_csv_empty_quoted_field() {
        let fields = parse_csv_line("Q,\"\",b,c,d,B");
        assert_eq!(fields[1], "");
        assert_eq!(fields.len(), 6);
    }

    #[test]
    fn test_parse_questions_end_to_end_example() {
        let questions = parse_questions("question,a,b,c,d,answer\nWhat is 2+2?,3,4,5,6,B");
        assert_eq!(questions.len(), 1);
        let q = &questions[0];
        assert_eq!(q.id, 1);
        assert_eq!(q.question, "What is 2+2?");
        assert_eq!(q.option(OptionLabel::A), Some("3"));
        assert_eq!(q.option(OptionLabel::B), Some("4"));
        assert_eq!(q.option(OptionLabel::C), Some("5"));
        assert_eq!(q.option(OptionLabel::D), Some("6"));
        assert_eq!(q.correct, OptionLabel::B);
    }

    #[test]
    fn test_parse_questions_skipped_rows_consume_ids() {
        let text = "q,a,b,c,d,ans\n\
                    Q1,a,b,c,d,A\n\
                    \n\
                    too,short\n\
                    Q4,a,b,c,d,C\n";
        let questions = parse_questions(text);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id, 1);
        assert_eq!(questions[1].id, 4);
        assert_eq!(questions[1].question, "Q4");
    }

    #[test]
    fn test_parse_questions_answer_case_normalized() {
        let text = "h\nQ1,a,b,c,d,b\nQ2,a,b,c,d,B\nQ3,a,b,c,d, b ";
        let questions = parse_questions(text);
        assert_eq!(questions.len(), 3);
        assert!(questions.iter().all(|q| q.correct == OptionLabel::B));
    }

    #[test]
    fn test_parse_questions_extra_fields_ignored() {
        let questions = parse_questions("h\nQ,a,b,c,d,D,explanation,extra");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct, OptionLabel::D);
    }

    #[test]
    fn test_parse_questions_header_only() {
        assert!(parse_questions("question,a,b,c,d,answer\n").is_empty());
        assert!(parse_questions("").is_empty());
    }

    #[test]
    fn test_parse_questions_handles_crlf() {
        let questions = parse_questions("h\r\nQ1,a,b,c,d,A\r\nQ2,a,b,c,d,D\r\n");
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].option(OptionLabel::D), Some("d"));
    }

    #[test]
    fn test_parse_row_absent_option() {
        let record = parse_row(3, "True or false?,True,False,,,a").unwrap();
        assert_eq!(record.id, 3);
        assert_eq!(record.option(OptionLabel::C), None);
        assert_eq!(record.option(OptionLabel::D), None);
        assert_eq!(record.present_options().count(), 2);
    }

    #[test]
    fn test_parse_row_rejections() {
        assert_eq!(
            parse_row(1, "Q,a,b,c,d"),
            Err(RowRejection::TooFewFields(5))
        );
        assert_eq!(parse_row(1, ",a,b,c,d,A"), Err(RowRejection::EmptyQuestion));
        assert_eq!(parse_row(1, "Q,,,,,A"), Err(RowRejection::NoOptions));
        assert_eq!(
            parse_row(1, "Q,a,b,c,d,E"),
            Err(RowRejection::UnknownAnswer("E".to_string()))
        );
        assert_eq!(
            parse_row(1, "Q,a,b,c,,D"),
            Err(RowRejection::AnswerOptionMissing(OptionLabel::D))
        );
    }

    #[test]
    fn test_load_questions_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "question,A,B,C,D,answer").unwrap();
        writeln!(file, "\"Capital of France, briefly?\",Paris,Rome,Berlin,Madrid,a").unwrap();
        let questions = load_questions(file.path()).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "Capital of France, briefly?");
        assert_eq!(questions[0].correct, OptionLabel::A);
    }

    #[test]
    fn test_load_questions_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        match load_questions(&path) {
            Err(QuizError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
