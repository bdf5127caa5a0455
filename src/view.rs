//! Pure projection of a [`QuizSession`] into what the terminal shows.
//!
//! Nothing here touches the terminal. Every frame is rebuilt from the session,
//! so a reshuffle or retry needs no per-control cleanup.

use crate::grader::feedback_message;
use crate::models::{MissedItem, OptionLabel, Phase, QuestionOutcome, QuestionRecord, QuizSession, Verdict};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Correct,
    Wrong,
}

/// One selectable option. `(number, label)` identifies it within a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionControl {
    pub label: OptionLabel,
    pub text: String,
    pub selected: bool,
    pub focused: bool,
    pub mark: Option<Mark>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCard {
    /// 1-based display position.
    pub number: usize,
    pub question: String,
    pub options: Vec<OptionControl>,
    pub feedback: Option<String>,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreView {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub verdict: Verdict,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub submit: bool,
    pub retry: bool,
    pub reshuffle: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizView {
    pub cards: Vec<QuestionCard>,
    pub controls: Controls,
    /// `None` hides the score region.
    pub score: Option<ScoreView>,
    /// `None` hides the missed-items region, including after a perfect score.
    pub missed: Option<Vec<MissedItem>>,
}

pub fn render_quiz(session: &QuizSession) -> QuizView {
    let answering = session.phase() == Phase::Answering;

    let cards = session
        .questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let selected = session.selections.get(index).copied().flatten();
            let outcome = session
                .report
                .as_ref()
                .and_then(|report| report.outcomes.get(index).copied());
            let focused = answering && index == session.current_index;
            let option_cursor = focused.then_some(session.option_cursor);
            render_card(index + 1, question, selected, outcome, option_cursor)
        })
        .collect();

    let score = session.report.as_ref().map(|report| {
        let verdict = report.verdict();
        ScoreView {
            score: report.score,
            total: report.total,
            percentage: report.percentage(),
            verdict,
            message: verdict.message(),
        }
    });

    let missed = session
        .report
        .as_ref()
        .filter(|report| report.has_missed())
        .map(|report| report.missed.clone());

    QuizView {
        cards,
        controls: Controls {
            submit: answering,
            retry: !answering,
            reshuffle: answering,
        },
        score,
        missed,
    }
}

fn render_card(
    number: usize,
    question: &QuestionRecord,
    selected: Option<OptionLabel>,
    outcome: Option<QuestionOutcome>,
    option_cursor: Option<usize>,
) -> QuestionCard {
    let options = question
        .present_options()
        .enumerate()
        .map(|(position, (label, text))| OptionControl {
            label,
            text: text.to_string(),
            selected: selected == Some(label),
            focused: option_cursor == Some(position),
            mark: outcome.and_then(|outcome| mark_for(outcome, label, question.correct)),
        })
        .collect();

    QuestionCard {
        number,
        question: question.question.clone(),
        options,
        feedback: outcome.and_then(|outcome| feedback_message(outcome, question.correct)),
        focused: option_cursor.is_some(),
    }
}

fn mark_for(outcome: QuestionOutcome, label: OptionLabel, correct: OptionLabel) -> Option<Mark> {
    match outcome {
        QuestionOutcome::Wrong { selected } if label == selected => Some(Mark::Wrong),
        _ if label == correct => Some(Mark::Correct),
        _ => None,
    }
}
