//! Headless mode runner - analysis loop without TUI
//!
//! With a URL, one analysis runs and the process exit status reports the
//! outcome. Without one, URLs are read from stdin one per line until `q`,
//! `quit` or end of input.

use std::io::Write;

use tokio::sync::{broadcast, mpsc};

use pinsights_app::{Engine, EngineEvent};
use pinsights_client::AnalysisBackend;
use pinsights_core::prelude::*;
use pinsights_core::RequestState;

use super::HeadlessEvent;

/// A line read from stdin
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StdinCommand {
    Analyze(String),
    Quit,
}

impl StdinCommand {
    /// Parse one input line. Blank lines yield `None`.
    ///
    /// Whitespace is only ignored when recognizing commands; a URL is passed
    /// on exactly as typed, so `" https://x"` fails validation.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "" => None,
            "q" | "quit" => Some(StdinCommand::Quit),
            _ => Some(StdinCommand::Analyze(line.to_string())),
        }
    }
}

/// Run in headless mode, writing NDJSON events to stdout.
///
/// Returns `true` when every analysis that ran succeeded.
pub async fn run_headless<B>(mut engine: Engine<B>, url: Option<String>) -> Result<bool>
where
    B: AnalysisBackend + Send + Sync + 'static,
{
    info!("Privacy Insights starting in HEADLESS mode");
    info!("Endpoint: {}", engine.endpoint());

    let mut stdout = std::io::stdout();

    let result = match url {
        Some(url) => run_single(&mut engine, &url, &mut stdout).await,
        None => {
            let (stdin_tx, stdin_rx) = mpsc::channel::<StdinCommand>(16);
            std::thread::spawn(move || read_stdin_blocking(stdin_tx));
            run_stream(&mut engine, stdin_rx, &mut stdout).await
        }
    };

    engine.shutdown().await;

    info!("Privacy Insights headless mode exiting");
    result
}

/// Analyze a single URL and report whether it succeeded
pub async fn run_single<B, W>(engine: &mut Engine<B>, url: &str, out: &mut W) -> Result<bool>
where
    B: AnalysisBackend + Send + Sync + 'static,
    W: Write,
{
    if url.is_empty() {
        warn!("Headless run started with an empty URL");
        HeadlessEvent::error("No URL given", false).write_to(out)?;
        return Ok(false);
    }

    let mut events = engine.subscribe();
    let outcome = engine.analyze(url).await;
    flush_events(&mut events, out)?;
    Ok(matches!(outcome, RequestState::Success(_)))
}

/// Analyze URLs as they arrive until a quit command, end of input or a quit
/// message from the signal handler
pub async fn run_stream<B, W>(
    engine: &mut Engine<B>,
    mut commands: mpsc::Receiver<StdinCommand>,
    out: &mut W,
) -> Result<bool>
where
    B: AnalysisBackend + Send + Sync + 'static,
    W: Write,
{
    let mut events = engine.subscribe();
    let mut all_succeeded = true;

    while !engine.should_quit() {
        tokio::select! {
            command = commands.recv() => match command {
                Some(StdinCommand::Analyze(url)) => {
                    let outcome = engine.analyze(&url).await;
                    all_succeeded &= matches!(outcome, RequestState::Success(_));
                }
                Some(StdinCommand::Quit) | None => {
                    info!("Input finished");
                    break;
                }
            },
            message = engine.next_message() => match message {
                Some(message) => engine.process_message(message),
                None => {
                    info!("Message channel closed");
                    break;
                }
            },
        }

        flush_events(&mut events, out)?;
    }

    flush_events(&mut events, out)?;
    Ok(all_succeeded)
}

/// Write every buffered engine event that has a headless form
fn flush_events<W: Write>(events: &mut broadcast::Receiver<EngineEvent>, out: &mut W) -> Result<()> {
    loop {
        match events.try_recv() {
            Ok(event) => {
                if let Some(headless) = HeadlessEvent::from_engine_event(&event) {
                    headless.write_to(out)?;
                }
            }
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Headless output skipped {} engine events", skipped);
                HeadlessEvent::error(format!("{} events were dropped", skipped), false)
                    .write_to(out)?;
            }
            Err(_) => return Ok(()),
        }
    }
}

/// Read stdin lines and forward them as commands (blocking, own thread)
fn read_stdin_blocking(tx: mpsc::Sender<StdinCommand>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        };

        let Some(command) = StdinCommand::parse(&line) else {
            continue;
        };
        let quit = command == StdinCommand::Quit;
        if tx.blocking_send(command).is_err() || quit {
            break;
        }
    }

    info!("Stdin reader exiting");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinsights_app::config::Settings;
    use pinsights_client::test_utils::{sample_result, FakeBackend};
    use pinsights_core::AnalysisError;

    fn lines(out: &[u8]) -> Vec<serde_json::Value> {
        String::from_utf8_lossy(out)
            .lines()
            .map(|l| serde_json::from_str(l).expect("invalid JSON line"))
            .collect()
    }

    #[test]
    fn test_parse_stdin_commands() {
        assert_eq!(StdinCommand::parse("   "), None);
        assert_eq!(StdinCommand::parse("q"), Some(StdinCommand::Quit));
        assert_eq!(StdinCommand::parse(" quit "), Some(StdinCommand::Quit));
        assert_eq!(
            StdinCommand::parse("https://example.com"),
            Some(StdinCommand::Analyze("https://example.com".to_string()))
        );
    }

    #[test]
    fn test_parse_keeps_url_whitespace() {
        assert_eq!(
            StdinCommand::parse(" https://example.com"),
            Some(StdinCommand::Analyze(" https://example.com".to_string()))
        );
    }

    #[tokio::test]
    async fn test_stream_leading_space_fails_validation() {
        let backend = FakeBackend::always(Ok(sample_result()));
        let mut engine = Engine::new(backend.clone(), Settings::default());
        let (tx, rx) = mpsc::channel(8);
        let mut out = Vec::new();

        let command = StdinCommand::parse(" https://example.com").expect("command");
        tx.send(command).await.expect("send");
        drop(tx);

        let ok = run_stream(&mut engine, rx, &mut out)
            .await
            .expect("run failed");

        assert!(!ok);
        assert_eq!(backend.call_count(), 0);
        let events = lines(&out);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["event"], "analysis_failed");
        assert_eq!(events[0]["kind"], "validation");
        assert_eq!(events[0]["url"], " https://example.com");
    }

    #[tokio::test]
    async fn test_single_empty_url_reports_error() {
        let backend = FakeBackend::always(Ok(sample_result()));
        let mut engine = Engine::new(backend.clone(), Settings::default());
        let mut out = Vec::new();

        let ok = run_single(&mut engine, "", &mut out)
            .await
            .expect("run failed");

        assert!(!ok);
        assert_eq!(backend.call_count(), 0);
        let events = lines(&out);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["event"], "error");
        assert_eq!(events[0]["fatal"], false);
    }

    #[tokio::test]
    async fn test_single_success() {
        let backend = FakeBackend::always(Ok(sample_result()));
        let mut engine = Engine::new(backend, Settings::default());
        let mut out = Vec::new();

        let ok = run_single(&mut engine, "https://example.com", &mut out)
            .await
            .expect("run failed");

        assert!(ok);
        let events = lines(&out);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["event"], "analysis_started");
        assert_eq!(events[0]["endpoint"], "fake://analysis");
        assert_eq!(events[1]["event"], "analysis_succeeded");
        assert_eq!(events[1]["result"]["trackers"], 3);
    }

    #[tokio::test]
    async fn test_single_invalid_url_never_reaches_backend() {
        let backend = FakeBackend::always(Ok(sample_result()));
        let mut engine = Engine::new(backend.clone(), Settings::default());
        let mut out = Vec::new();

        let ok = run_single(&mut engine, "example.com", &mut out)
            .await
            .expect("run failed");

        assert!(!ok);
        assert_eq!(backend.call_count(), 0);
        let events = lines(&out);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["kind"], "validation");
    }

    #[tokio::test]
    async fn test_single_backend_failure() {
        let backend = FakeBackend::always(Err(AnalysisError::backend(502, "Bad gateway")));
        let mut engine = Engine::new(backend, Settings::default());
        let mut out = Vec::new();

        let ok = run_single(&mut engine, "https://example.com", &mut out)
            .await
            .expect("run failed");

        assert!(!ok);
        let events = lines(&out);
        assert_eq!(events.last().expect("event")["event"], "analysis_failed");
        assert_eq!(events.last().expect("event")["message"], "Bad gateway");
    }

    #[tokio::test]
    async fn test_stream_analyzes_each_line_until_quit() {
        let backend = FakeBackend::always(Ok(sample_result()));
        let mut engine = Engine::new(backend.clone(), Settings::default());
        let (tx, rx) = mpsc::channel(8);
        let mut out = Vec::new();

        tx.send(StdinCommand::Analyze("https://a.example".to_string()))
            .await
            .expect("send");
        tx.send(StdinCommand::Analyze("https://b.example".to_string()))
            .await
            .expect("send");
        tx.send(StdinCommand::Quit).await.expect("send");
        tx.send(StdinCommand::Analyze("https://c.example".to_string()))
            .await
            .expect("send");

        let ok = run_stream(&mut engine, rx, &mut out)
            .await
            .expect("run failed");

        assert!(ok);
        assert_eq!(
            backend.calls(),
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
        let succeeded = lines(&out)
            .into_iter()
            .filter(|e| e["event"] == "analysis_succeeded")
            .count();
        assert_eq!(succeeded, 2);
    }

    #[tokio::test]
    async fn test_stream_ends_on_closed_input_and_reports_failure() {
        let backend = FakeBackend::always(Ok(sample_result()));
        let mut engine = Engine::new(backend, Settings::default());
        let (tx, rx) = mpsc::channel(8);
        let mut out = Vec::new();

        tx.send(StdinCommand::Analyze("not a url".to_string()))
            .await
            .expect("send");
        drop(tx);

        let ok = run_stream(&mut engine, rx, &mut out)
            .await
            .expect("run failed");

        assert!(!ok);
        assert_eq!(lines(&out)[0]["event"], "analysis_failed");
    }
}
