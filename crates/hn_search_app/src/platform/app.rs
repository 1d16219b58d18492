use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, Event};
use hn_search_core::{init, update, AppState, Msg};
use search_logging::{search_debug, search_info};

use super::config::load_config;
use super::effects::EffectRunner;
use super::logging::{self, LOG_FILENAME};
use super::ui::input::{handle_key, handle_paste};
use super::ui::render::draw;
use super::ui::state::UiState;
use super::ui::terminal_guard::setup_terminal;

/// How long the loop waits for input before checking the engine again.
const TICK: Duration = Duration::from_millis(75);

pub fn run_app() -> anyhow::Result<()> {
    let work_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let (config, status) = load_config(&work_dir);
    logging::initialize(config.log_destination, &work_dir.join(LOG_FILENAME));
    status.log();

    let runner = EffectRunner::new(config.fetch_settings()).context("starting fetch engine")?;

    let (mut state, effects) = init(&config.search_settings());
    runner.enqueue(effects);

    let (mut terminal, guard) = setup_terminal().context("preparing terminal")?;
    let mut view = state.view();
    let mut ui = UiState::default();

    search_info!("hn_search started with base url {}", config.base_url);

    // Every message is applied on this thread, one at a time.
    loop {
        terminal.draw(|frame| draw(frame, &view, &ui))?;
        if ui.should_quit() {
            break;
        }

        for msg in runner.drain() {
            state = dispatch(state, msg, &runner);
        }
        if state.consume_dirty() {
            view = state.view();
        }

        let msg = if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) => handle_key(&mut ui, &view, key),
                Event::Paste(text) => handle_paste(&ui, &view, &text),
                _ => None,
            }
        } else {
            Some(Msg::Tick)
        };

        if let Some(msg) = msg {
            state = dispatch(state, msg, &runner);
            if state.consume_dirty() {
                view = state.view();
            }
        }
    }

    drop(guard);
    search_info!("hn_search exiting");
    Ok(())
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    if !matches!(msg, Msg::Tick | Msg::FetchCompleted { .. }) {
        search_debug!("dispatch {:?}", msg);
    }
    let (state, effects) = update(state, msg);
    runner.enqueue(effects);
    state
}
