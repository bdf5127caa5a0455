use crate::models::{Phase, QuizSession, Verdict};
use crate::ui::layout::calculate_quiz_chunks;
use crate::ui::summary::draw_review;
use crate::utils::{calculate_max_scroll, scroll_to_keep_visible, wrapped_line_count};
use crate::view::{Controls, Mark, QuestionCard, QuizView, render_quiz};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub(crate) fn key_span(key: &'static str) -> Span<'static> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

pub fn draw_quiz(f: &mut Frame, session: &mut QuizSession) {
    let view = render_quiz(session);
    let layout = calculate_quiz_chunks(f.area(), view.missed.is_some());

    draw_header(f, layout.header_area, session, &view);

    let text_width = layout.question_area.width.saturating_sub(2) as usize;
    let visible_height = layout.question_area.height.saturating_sub(2) as usize;
    let questions = build_question_text(&view.cards, text_width);

    let requested = session.scroll_y;
    let question_max = calculate_max_scroll(questions.height, visible_height);
    let scroll_y = match session.phase() {
        Phase::Answering => questions
            .focused_rows
            .map(|(start, end)| scroll_to_keep_visible(start, end, requested, visible_height))
            .unwrap_or(0),
        Phase::Reviewing => requested.min(question_max),
    };

    let question_list = Paragraph::new(questions.text)
        .wrap(Wrap { trim: false })
        .scroll((scroll_y, 0))
        .block(Block::default().borders(Borders::ALL).title("Questions"));
    f.render_widget(question_list, layout.question_area);

    let review_max = match (layout.review_area, view.missed.as_deref()) {
        (Some(area), Some(missed)) => draw_review(f, area, missed, requested),
        _ => 0,
    };

    // Store the offset actually in use so scrolling back up responds at once.
    session.scroll_y = match session.phase() {
        Phase::Answering => scroll_y,
        Phase::Reviewing => requested.min(question_max.max(review_max)),
    };

    draw_help(f, layout.help_area, view.controls);
}

struct QuestionText {
    text: Text<'static>,
    height: usize,
    focused_rows: Option<(usize, usize)>,
}

fn build_question_text(cards: &[QuestionCard], width: usize) -> QuestionText {
    let mut text = Text::default();
    let mut height = 0;
    let mut focused_rows = None;

    if cards.is_empty() {
        text.push_line(Line::from(Span::styled(
            "No questions available.",
            Style::default().fg(Color::DarkGray),
        )));
        return QuestionText {
            text,
            height: 1,
            focused_rows,
        };
    }

    for card in cards {
        let start = height;

        let question_line = format!("{}. {}", card.number, card.question);
        height += wrapped_line_count(&question_line, width);
        let question_style = if card.focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        text.push_line(Line::from(Span::styled(question_line, question_style)));

        for option in &card.options {
            let cursor = if option.focused { "> " } else { "  " };
            let radio = if option.selected { "(*)" } else { "( )" };
            let suffix = match option.mark {
                Some(Mark::Correct) => "  [correct]",
                Some(Mark::Wrong) => "  [wrong]",
                None => "",
            };
            let line = format!("{}{} {}. {}{}", cursor, radio, option.label, option.text, suffix);
            height += wrapped_line_count(&line, width);

            let style = match option.mark {
                Some(Mark::Correct) => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                Some(Mark::Wrong) => Style::default().fg(Color::Red),
                None if option.focused => Style::default().fg(Color::Yellow),
                None => Style::default(),
            };
            text.push_line(Line::from(Span::styled(line, style)));
        }

        if let Some(feedback) = &card.feedback {
            height += wrapped_line_count(feedback, width);
            text.push_line(Line::from(Span::styled(
                feedback.clone(),
                Style::default().fg(Color::Red),
            )));
        }

        if card.focused {
            focused_rows = Some((start, height));
        }

        text.push_line(Line::from(""));
        height += 1;
    }

    QuestionText {
        text,
        height,
        focused_rows,
    }
}

fn draw_header(f: &mut Frame, area: Rect, session: &QuizSession, view: &QuizView) {
    let mut lines = Vec::new();

    match &view.score {
        Some(score) => {
            lines.push(Line::from(Span::styled(
                format!(
                    "Score: {}% ({} / {}) - {}",
                    score.percentage, score.score, score.total, session.deck_name
                ),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
            let colour = match score.verdict {
                Verdict::Pass => Color::Green,
                Verdict::Retry => Color::Red,
            };
            lines.push(Line::from(Span::styled(
                score.message,
                Style::default().fg(colour).add_modifier(Modifier::BOLD),
            )));
        }
        None => {
            lines.push(Line::from(Span::styled(
                format!("Quiz - {}", session.deck_name),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(format!(
                "Answered {} / {}",
                session.questions_answered(),
                session.questions.len()
            )));
        }
    }

    let header = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_help(f: &mut Frame, area: Rect, controls: Controls) {
    let mut spans = Vec::new();
    if controls.submit {
        spans.extend([
            key_span("↑/↓"),
            Span::from(" Question  "),
            key_span("←/→"),
            Span::from(" Option  "),
            key_span("Space/a-d"),
            Span::from(" Select  "),
            key_span("Enter"),
            Span::from(" Submit  "),
        ]);
    } else {
        spans.extend([
            key_span("↑/↓"),
            Span::from(" Scroll  "),
            key_span("PgUp/PgDn"),
            Span::from(" Page  "),
        ]);
    }
    if controls.reshuffle {
        spans.extend([key_span("x"), Span::from(" Reshuffle  ")]);
    }
    if controls.retry {
        spans.extend([key_span("r"), Span::from(" Retry  ")]);
    }
    spans.extend([key_span("q"), Span::from(" Quit")]);

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}
