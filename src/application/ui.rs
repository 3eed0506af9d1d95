use std::io;
use std::time::Duration;
use std::time::Instant;

use anyhow::Result;
use crossterm::cursor;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::Backend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::services::events::EventsService;
use crate::domain::services::render;
use crate::domain::services::AppState;

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);
    tx.send(Action::HealthCheck())?;

    loop {
        terminal.draw(|frame| render(frame, app_state))?;

        match events.next().await? {
            Event::StartResponse(generation, res) => {
                app_state.handle_start_response(generation, res);
            }
            Event::StartFailed(generation, err) => {
                app_state.handle_start_failed(generation, err);
            }
            Event::AnswerResponse(generation, res) => {
                app_state.handle_answer_response(generation, res);
            }
            Event::AnswerFailed(generation, err) => {
                app_state.handle_answer_failed(generation, err);
            }
            Event::HealthCheckFailed(err) => {
                app_state.handle_health_check_failed(err);
            }
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardEnter() => {
                app_state.handle_enter(&tx)?;
            }
            Event::KeyboardCharInput(Input {
                key: Key::Char(key),
                ctrl: false,
                alt: false,
                ..
            }) => {
                if app_state.handle_key(key, &tx)? {
                    break;
                }
            }
            Event::KeyboardCharInput(_) => (),
            Event::UIResize() => {
                terminal.autoresize()?;
            }
            Event::UITick() => {
                app_state.tick(Instant::now());
            }
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut app_state = AppState::new(Duration::from_millis(Config::get_millis(
        ConfigKey::NotificationDuration,
    )?));

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let res = start_loop(&mut terminal, &mut app_state, tx, rx).await;

    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    return res;
}
