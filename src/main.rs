use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use doc_flashcards::{
    document_files, draw_flashcards, draw_menu, draw_quiz, handle_flashcard_input,
    handle_quiz_input, logger, AppConfig, AppState, Session,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

fn main() -> io::Result<()> {
    logger::init();
    let config = AppConfig::from_env();
    logger::log(&format!(
        "Starting with documents from {}",
        config.documents_dir.display()
    ));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        logger::log(&format!("Terminal error: {}", e));
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &AppConfig,
) -> io::Result<()> {
    let mut app_state = AppState::Menu;
    let mut documents = document_files(&config.documents_dir);
    let mut selected_index: usize = 0;
    let mut session: Option<Session> = None;
    let mut menu_notice: Option<String> = None;

    loop {
        terminal.draw(|f| match (app_state, &session) {
            (AppState::Flashcards, Some(session)) => draw_flashcards(f, session),
            (AppState::Quiz, Some(session)) => draw_quiz(f, session),
            _ => draw_menu(
                f,
                &documents,
                selected_index,
                &config.documents_dir,
                menu_notice.as_deref(),
            ),
        })?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            break;
        }

        match app_state {
            AppState::Menu => match key.code {
                KeyCode::Up => {
                    selected_index = selected_index.saturating_sub(1);
                }
                KeyCode::Down => {
                    if selected_index < documents.len().saturating_sub(1) {
                        selected_index += 1;
                    }
                }
                KeyCode::Char('r') => {
                    documents = document_files(&config.documents_dir);
                    selected_index = selected_index.min(documents.len().saturating_sub(1));
                    menu_notice = None;
                }
                KeyCode::Enter => {
                    if let Some(path) = documents.get(selected_index) {
                        let opened = Session::open(path, config);
                        menu_notice = opened.load_error().map(str::to_string);
                        session = Some(opened);
                        app_state = AppState::Flashcards;
                    }
                }
                KeyCode::Char('q') | KeyCode::Esc => break,
                _ => {}
            },
            AppState::Flashcards => {
                if let Some(session) = &mut session {
                    let _ = handle_flashcard_input(session, key, &mut app_state);
                }
            }
            AppState::Quiz => {
                if let Some(session) = &mut session {
                    let _ = handle_quiz_input(session, key, &mut app_state);
                }
            }
        }

        if app_state == AppState::Menu {
            session = None;
        }
    }

    Ok(())
}
