//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Error showing**: polls every ~100ms so the notice dismisses on time.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! Related-title selection is dispatched here, once, against whatever the
//! current state holds at the time of the keypress. There is no per-render
//! handler registration.

mod event;
mod ui;

use log::{info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::widgets::ListState;

use crate::api::{ArticleService, RestArticleClient};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Text editing in the search box. Esc switches to Browse.
    Input,
    /// Navigate related titles with arrow keys. Typing auto-switches to
    /// Input.
    Browse,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_buffer: String,
    pub input_mode: InputMode,
    pub selected_related: usize,
    pub related_list: ListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_buffer: String::new(),
            input_mode: InputMode::Input, // User expects to type immediately
            selected_related: 0,
            related_list: ListState::default(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let service: Arc<dyn ArticleService> = Arc::new(RestArticleClient::new(
        config.base_url.clone(),
        Duration::from_secs(config.timeout_secs),
    ));
    let mut app = App::new(service);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for completion actions from background fetch tasks
    let (tx, rx) = mpsc::channel();

    // Abort handles for the in-flight chain (a new trigger invalidates it)
    let mut active_abort_handles: Vec<tokio::task::AbortHandle> = Vec::new();

    // Animation timer
    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    let mut should_quit = false;
    loop {
        let animating = app.is_loading;
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating, moderate while an
        // error notice is counting down, long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else if app.error.is_some() {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                let effect = update(&mut app, Action::Quit);
                if effect == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Ctrl+R fetches a random article in either mode
            if matches!(event, TuiEvent::Random) {
                let effect = update(&mut app, Action::FetchRandom);
                execute_effect(effect, &app, &tx, &mut active_abort_handles);
                continue;
            }

            // Up/Down move the related selection in either mode
            if matches!(event, TuiEvent::CursorUp | TuiEvent::CursorDown) {
                if !app.related.is_empty() {
                    let last = app.related.len() - 1;
                    tui.selected_related = match event {
                        TuiEvent::CursorUp => tui.selected_related.saturating_sub(1),
                        _ => (tui.selected_related + 1).min(last),
                    };
                    tui.input_mode = InputMode::Browse;
                }
                continue;
            }

            // Modal event dispatch
            match tui.input_mode {
                InputMode::Input => match event {
                    TuiEvent::Escape => {
                        tui.input_mode = InputMode::Browse;
                    }
                    TuiEvent::InputChar(c) => {
                        tui.input_buffer.push(c);
                    }
                    TuiEvent::Backspace => {
                        tui.input_buffer.pop();
                    }
                    TuiEvent::Submit => {
                        let effect =
                            update(&mut app, Action::SubmitSearch(tui.input_buffer.clone()));
                        tui.selected_related = 0;
                        execute_effect(effect, &app, &tx, &mut active_abort_handles);
                    }
                    _ => {}
                },
                InputMode::Browse => match event {
                    // Enter opens the selected related title; the title's
                    // display spaces go back to underscores in the reducer.
                    TuiEvent::Submit => {
                        let effect = update(&mut app, Action::FollowRelated(tui.selected_related));
                        tui.selected_related = 0;
                        execute_effect(effect, &app, &tx, &mut active_abort_handles);
                    }
                    // Typing auto-switches to Input mode and forwards the key
                    TuiEvent::InputChar(c) => {
                        tui.input_mode = InputMode::Input;
                        tui.input_buffer.push(c);
                    }
                    TuiEvent::Backspace => {
                        tui.input_mode = InputMode::Input;
                        tui.input_buffer.pop();
                    }
                    TuiEvent::Escape => {}
                    _ => {}
                },
            }
        }

        // Expire the error notice
        let had_error = app.error.is_some();
        update(&mut app, Action::Tick(Instant::now()));
        if had_error && app.error.is_none() {
            needs_redraw = true;
        }

        // Handle completion actions from background fetch tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            let effect = update(&mut app, action);
            execute_effect(effect, &app, &tx, &mut active_abort_handles);
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Performs the I/O an `Effect` asks for. Spawn effects abort whatever
/// chain was previously in flight; its completions would be dropped as
/// stale by the reducer anyway, but there is no point letting them finish.
fn execute_effect(
    effect: Effect,
    app: &App,
    tx: &mpsc::Sender<Action>,
    active_abort_handles: &mut Vec<tokio::task::AbortHandle>,
) {
    match effect {
        Effect::None | Effect::Quit => {}
        Effect::SpawnRandom { generation } => {
            abort_all(active_abort_handles);
            active_abort_handles.push(spawn_random(app.service.clone(), generation, tx.clone()));
        }
        Effect::SpawnSearch { generation, query } => {
            abort_all(active_abort_handles);
            active_abort_handles.push(spawn_search(
                app.service.clone(),
                generation,
                query,
                tx.clone(),
            ));
        }
        Effect::SpawnRelated { generation, query } => {
            active_abort_handles.push(spawn_related(
                app.service.clone(),
                generation,
                query,
                tx.clone(),
            ));
        }
    }
}

fn abort_all(handles: &mut Vec<tokio::task::AbortHandle>) {
    for handle in handles.drain(..) {
        handle.abort();
    }
}

fn spawn_random(
    service: Arc<dyn ArticleService>,
    generation: u64,
    tx: mpsc::Sender<Action>,
) -> tokio::task::AbortHandle {
    info!("Spawning random-summary fetch (gen {})", generation);
    let handle = tokio::spawn(async move {
        let result = service.fetch_random_summary().await;
        if tx.send(Action::RandomLoaded { generation, result }).is_err() {
            warn!("Failed to send RandomLoaded: receiver dropped");
        }
    });
    handle.abort_handle()
}

fn spawn_search(
    service: Arc<dyn ArticleService>,
    generation: u64,
    query: String,
    tx: mpsc::Sender<Action>,
) -> tokio::task::AbortHandle {
    info!("Spawning summary fetch for '{}' (gen {})", query, generation);
    let handle = tokio::spawn(async move {
        let result = service.fetch_summary(&query).await;
        let action = Action::SearchLoaded {
            generation,
            query,
            result,
        };
        if tx.send(action).is_err() {
            warn!("Failed to send SearchLoaded: receiver dropped");
        }
    });
    handle.abort_handle()
}

fn spawn_related(
    service: Arc<dyn ArticleService>,
    generation: u64,
    query: String,
    tx: mpsc::Sender<Action>,
) -> tokio::task::AbortHandle {
    info!("Spawning related fetch for '{}' (gen {})", query, generation);
    let handle = tokio::spawn(async move {
        let result = service.fetch_related(&query).await;
        if tx.send(Action::RelatedLoaded { generation, result }).is_err() {
            warn!("Failed to send RelatedLoaded: receiver dropped");
        }
    });
    handle.abort_handle()
}
