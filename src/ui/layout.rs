use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct QuizLayout {
    pub header_area: Rect,
    pub question_area: Rect,
    /// Only present while the missed-items review is shown.
    pub review_area: Option<Rect>,
    pub help_area: Rect,
}

pub fn calculate_quiz_chunks(area: Rect, show_review: bool) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    let (question_area, review_area) = if show_review {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);
        (body[0], Some(body[1]))
    } else {
        (chunks[1], None)
    };

    QuizLayout {
        header_area: chunks[0],
        question_area,
        review_area,
        help_area: chunks[2],
    }
}
