//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use pinsights_core::{AnalysisError, AnalysisResult, RequestId};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Replace the URL field content verbatim
    SetUrl(String),

    /// Validate the current URL and start an analysis
    Submit,

    /// Abort the in-flight analysis, if any
    CancelAnalysis,

    /// An analysis task finished (sent exactly once per dispatched request)
    AnalysisCompleted {
        request_id: RequestId,
        result: Result<AnalysisResult, AnalysisError>,
    },

    // ─────────────────────────────────────────────────────────
    // View toggles
    // ─────────────────────────────────────────────────────────
    /// Show or hide card tooltips
    ToggleTips,

    /// Expand or collapse the "Learn More" section of the About panel
    ToggleAbout,

    /// Tick event for the loading animation
    Tick,

    /// Quit the application (Ctrl+C, Ctrl+Q, signal handler)
    Quit,
}
