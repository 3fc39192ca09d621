use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use crate::cli::Cli;
use crate::config::ConfigStore;
use crate::feed::{FeedAction, FeedPhase, FeedState, FeedStore};
use crate::fetch::HttpSectionSource;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the terminal UI until the user quits.
///
/// Must be called from within a tokio runtime: fetches are spawned on it
/// while this loop owns the feed store and applies completions between
/// frames.
pub fn run(config: ConfigStore, cli: &Cli) -> anyhow::Result<()> {
    let settings = config.get();
    let source = HttpSectionSource::from_config(&settings.feed)?;
    let mut store = FeedStore::new(Arc::new(source), settings.feed.url.clone());

    let (state_tx, state_rx) = mpsc::channel::<FeedState>();
    store.subscribe(move |state| {
        let _ = state_tx.send(state.clone());
    });
    store.subscribe(log_phase);

    let tick_rate = Duration::from_millis(settings.ui.tick_rate_ms);
    let mut app = App::new(settings.ui.image_scale, settings.feed.url);

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    store.send(FeedAction::Load);

    loop {
        store.drain_completions();
        while let Ok(state) = state_rx.try_recv() {
            app.apply_state(&state);
        }

        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if handle_key(&mut app, key) == InputAction::Reload {
                    reload(&config, cli, &mut store, &mut app);
                }
            }
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

/// Re-read the config file, re-apply CLI overrides and load again.
fn reload(config: &ConfigStore, cli: &Cli, store: &mut FeedStore, app: &mut App) {
    if let Err(err) = config.reload_with(|c| cli.apply_overrides(c)) {
        tracing::warn!(
            path = %config.path().display(),
            error = %err,
            "Config reload failed, keeping previous config"
        );
    }

    let settings = config.get();
    store.set_url(settings.feed.url.clone());
    app.set_feed_url(settings.feed.url);
    app.set_image_scale(settings.ui.image_scale);
    store.send(FeedAction::Load);
}

fn log_phase(state: &FeedState) {
    match state.phase() {
        FeedPhase::Loaded => tracing::info!(
            sections = state.sections().len(),
            ticket = state.latest_ticket(),
            "Sections loaded"
        ),
        FeedPhase::Error(message) => tracing::error!(
            ticket = state.latest_ticket(),
            error = %message,
            "Section load failed"
        ),
        FeedPhase::Initial | FeedPhase::Loading => {}
    }
}
