use crate::models::MissedItem;
use crate::utils::{calculate_max_scroll, truncate_string, wrapped_line_count};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Draws the missed-items review and returns the largest useful scroll offset.
pub fn draw_review(f: &mut Frame, area: Rect, missed: &[MissedItem], scroll_y: u16) -> u16 {
    let text_width = area.width.saturating_sub(2) as usize;
    let visible_height = area.height.saturating_sub(2) as usize;

    let mut text = Text::default();
    let mut height = 0;

    for item in missed {
        // Titles stay on one row; the answers below carry the detail.
        let question = truncate_string(&format!("Q{}: {}", item.number, item.question), text_width);
        let user_answer = format!("Your Answer: {}", item.user_answer);
        let correct_answer = format!("Correct Answer: {}", item.correct_answer);
        height += 1
            + wrapped_line_count(&user_answer, text_width)
            + wrapped_line_count(&correct_answer, text_width)
            + 1;

        text.push_line(Line::from(Span::styled(
            question,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        text.push_line(Line::from(Span::styled(
            user_answer,
            Style::default().fg(Color::Red),
        )));
        text.push_line(Line::from(Span::styled(
            correct_answer,
            Style::default().fg(Color::Green),
        )));
        text.push_line(Line::from(""));
    }

    let max_scroll = calculate_max_scroll(height, visible_height);
    let review = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .scroll((scroll_y.min(max_scroll), 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Missed Questions ({})", missed.len())),
        );
    f.render_widget(review, area);

    max_scroll
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn missed_item(question: &str) -> MissedItem {
        MissedItem {
            number: 3,
            question: question.to_string(),
            user_answer: "Bob".to_string(),
            correct_answer: "Ann".to_string(),
        }
    }

    fn rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    #[test]
    fn test_long_question_title_is_clipped() {
        let long_question = "Which of the following statements about the transport layer is accurate?";
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        let area = Rect::new(0, 0, 40, 12);
        terminal
            .draw(|f| {
                draw_review(f, area, &[missed_item(long_question)], 0);
            })
            .unwrap();

        let rows = rows(&terminal);
        // border row, then the title row
        assert!(rows[1].contains("Q3: Which of the following"));
        assert!(rows[1].contains("..."));
        assert!(rows[2].contains("Your Answer: Bob"));
        assert!(rows[3].contains("Correct Answer: Ann"));
    }

    #[test]
    fn test_short_question_title_kept_whole() {
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        let area = Rect::new(0, 0, 40, 12);
        terminal
            .draw(|f| {
                draw_review(f, area, &[missed_item("Who?")], 0);
            })
            .unwrap();

        let rows = rows(&terminal);
        assert!(rows[1].contains("Q3: Who?"));
        assert!(!rows[1].contains("..."));
    }
}
