use crate::config::{NO_ANSWER_TEXT, PASS_MESSAGE, PASS_THRESHOLD_PERCENT, RETRY_MESSAGE};
use crate::models::{GradeReport, MissedItem, OptionLabel, QuestionOutcome, QuestionRecord, Verdict};

/// Single pass over the questions in display order. `selections` is parallel
/// to `questions`; missing entries count as unanswered.
pub fn grade(questions: &[QuestionRecord], selections: &[Option<OptionLabel>]) -> GradeReport {
    let mut score = 0;
    let mut outcomes = Vec::with_capacity(questions.len());
    let mut missed = Vec::new();

    for (index, question) in questions.iter().enumerate() {
        let selected = selections.get(index).copied().flatten();
        let outcome = match selected {
            Some(label) if label == question.correct => {
                score += 1;
                QuestionOutcome::Correct
            }
            Some(label) => {
                missed.push(MissedItem {
                    number: index + 1,
                    question: question.question.clone(),
                    user_answer: question.option(label).unwrap_or_default().to_string(),
                    correct_answer: question.correct_text().to_string(),
                });
                QuestionOutcome::Wrong { selected: label }
            }
            None => {
                missed.push(MissedItem {
                    number: index + 1,
                    question: question.question.clone(),
                    user_answer: NO_ANSWER_TEXT.to_string(),
                    correct_answer: question.correct_text().to_string(),
                });
                QuestionOutcome::Unanswered
            }
        };
        outcomes.push(outcome);
    }

    GradeReport {
        score,
        total: questions.len(),
        outcomes,
        missed,
    }
}

/// Feedback line shown under a question, `None` when it was answered correctly.
pub fn feedback_message(outcome: QuestionOutcome, correct: OptionLabel) -> Option<String> {
    match outcome {
        QuestionOutcome::Correct => None,
        QuestionOutcome::Wrong { .. } => {
            Some(format!("Incorrect. The correct answer is {}.", correct))
        }
        QuestionOutcome::Unanswered => Some(format!(
            "You didn't answer this question. Correct answer: {}",
            correct
        )),
    }
}

impl GradeReport {
    /// Rounded to the nearest whole percent. An empty quiz scores 0.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.score as f64 / self.total as f64) * 100.0).round() as u32
    }

    pub fn verdict(&self) -> Verdict {
        if self.percentage() >= PASS_THRESHOLD_PERCENT {
            Verdict::Pass
        } else {
            Verdict::Retry
        }
    }

    pub fn passed(&self) -> bool {
        self.verdict() == Verdict::Pass
    }

    pub fn has_missed(&self) -> bool {
        !self.missed.is_empty()
    }
}

impl Verdict {
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Pass => PASS_MESSAGE,
            Verdict::Retry => RETRY_MESSAGE,
        }
    }
}
