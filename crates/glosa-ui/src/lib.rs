use std::io::Write;

use glosa_config::ui::UiConfig;
use glosa_types::AppEvent;
use kanal::AsyncReceiver;

pub mod events;
pub mod paint;
pub mod state;

use events::{UiOutcome, handle_events};
use paint::Painter;
use state::UiState;

/// Terminal UI loop: applies backend events to the UI state and prints them.
pub async fn ui_loop(app_to_ui_rx: AsyncReceiver<AppEvent>, config: UiConfig) -> anyhow::Result<()> {
    let is_tty = atty::is(atty::Stream::Stdout);
    let mut state = UiState::new(config.theme);
    let painter = Painter::new(config, is_tty);

    tracing::info!("[UI] Starting UI loop (tty: {})", is_tty);
    while let Ok(event) = app_to_ui_rx.recv().await {
        match handle_events(event, &mut state, &painter) {
            UiOutcome::Draw(text) => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(text.as_bytes())?;
                stdout.flush()?;
            }
            UiOutcome::Nothing => {}
            UiOutcome::Close => break,
        }
    }

    tracing::info!("[UI] UI loop stopped");
    Ok(())
}
