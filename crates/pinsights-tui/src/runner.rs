//! Main TUI runner - entry point and event loop

use pinsights_app::{Engine, Message};
use pinsights_client::AnalysisBackend;
use pinsights_core::Result;
use tracing::{debug, info};

use crate::{event, render, terminal};

/// Run the interactive UI until the user quits.
///
/// When `initial_url` is given the field is pre-filled and submitted
/// before the first frame, as if the user had typed it and pressed Enter.
pub async fn run_tui<B>(mut engine: Engine<B>, initial_url: Option<String>) -> Result<()>
where
    B: AnalysisBackend + Send + Sync + 'static,
{
    terminal::install_panic_hook();

    info!(endpoint = engine.endpoint(), "Starting TUI");

    if let Some(url) = initial_url {
        engine.process_message(Message::SetUrl(url));
        engine.process_message(Message::Submit);
    }

    let mut term = ratatui::init();

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown().await;
    ratatui::restore();
    debug!("Terminal restored");

    result
}

/// Main event loop: drain channel messages, draw, then poll the terminal
fn run_loop<B>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<B>) -> Result<()>
where
    B: AnalysisBackend + Send + Sync + 'static,
{
    while !engine.should_quit() {
        // Completed analyses and signal-handler quits arrive here
        engine.drain_pending_messages();

        if engine.should_quit() {
            break;
        }

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
