use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use quiz_review::{
    Action, AppState, Cli, QuizSession, draw_load_error, draw_quiz, handle_quiz_input, logger,
    open_session,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    logger::init(&cli.log_file);

    let (mut app_state, mut quiz_session) = match open_session(&cli) {
        Ok(session) => (AppState::Quiz, Some(session)),
        Err(e) => {
            logger::log(&format!("Failed to load questions: {}", e));
            (AppState::LoadFailed(e.user_message()), None)
        }
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app_state, quiz_session.as_mut());

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    mut quiz_session: Option<&mut QuizSession>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| match app_state {
            AppState::Quiz => {
                if let Some(session) = quiz_session.as_deref_mut() {
                    draw_quiz(f, session);
                }
            }
            AppState::LoadFailed(message) => draw_load_error(f, message),
        })?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(());
        }

        match app_state {
            AppState::Quiz => {
                if let Some(session) = quiz_session.as_deref_mut()
                    && handle_quiz_input(session, key) == Action::Quit
                {
                    return Ok(());
                }
            }
            AppState::LoadFailed(_) => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    return Ok(());
                }
            }
        }
    }
}
