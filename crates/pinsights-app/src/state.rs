//! Application state (Model in TEA pattern)

use pinsights_core::{is_valid_url, AppPhase, RequestId, RequestState};

use crate::config::Settings;

/// The request currently awaiting a backend response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InFlight {
    pub id: RequestId,
    pub url: String,
}

/// The URL and request of the most recent terminal outcome.
///
/// `request_id` is `None` for validation failures, which never dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub request_id: Option<RequestId>,
    pub url: String,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Raw URL field content, never trimmed or normalized
    pub url: String,

    /// Cursor position in the URL field, in chars
    pub cursor: usize,

    /// Lifecycle of the current analysis
    pub request: RequestState,

    /// Set while `request` is `Loading`
    pub in_flight: Option<InFlight>,

    /// Most recent Success/Failed transition
    pub last_outcome: Option<Outcome>,

    /// Number of Success/Failed transitions so far
    pub outcome_count: u64,

    last_request_id: RequestId,

    pub phase: AppPhase,

    /// Card tooltips visible
    pub show_tips: bool,

    /// "Learn More" section of the About panel expanded
    pub show_about_details: bool,

    /// Loading animation frame
    pub animation_frame: u64,

    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            url: String::new(),
            cursor: 0,
            request: RequestState::Idle,
            in_flight: None,
            last_outcome: None,
            outcome_count: 0,
            last_request_id: RequestId::default(),
            phase: AppPhase::Running,
            show_tips: settings.ui.show_tips,
            show_about_details: false,
            animation_frame: 0,
            settings,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Replace the field content and move the cursor to the end
    pub fn set_url(&mut self, url: String) {
        self.cursor = url.chars().count();
        self.url = url;
    }

    /// Allocate the id for the next dispatched request
    pub fn next_request_id(&mut self) -> RequestId {
        self.last_request_id = self.last_request_id.next();
        self.last_request_id
    }

    /// Record a Success/Failed transition
    pub fn record_outcome(&mut self, request_id: Option<RequestId>, url: String) {
        self.last_outcome = Some(Outcome { request_id, url });
        self.outcome_count += 1;
    }

    /// The field is flagged invalid while an error is showing and the
    /// current text would fail validation.
    pub fn input_invalid(&self) -> bool {
        matches!(self.request, RequestState::Failed(_)) && !is_valid_url(&self.url)
    }

    /// Submitting is possible when idle and the field is not empty
    pub fn can_submit(&self) -> bool {
        !self.request.is_loading() && !self.url.is_empty()
    }

    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    // ─────────────────────────────────────────────────────────
    // URL field editing
    // ─────────────────────────────────────────────────────────

    fn byte_index(&self, char_index: usize) -> usize {
        self.url
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.url.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.url.insert(at, c);
        self.cursor += 1;
    }

    pub fn delete_before_cursor(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_index(self.cursor - 1);
        self.url.remove(at);
        self.cursor -= 1;
    }

    pub fn delete_at_cursor(&mut self) {
        if self.cursor < self.url.chars().count() {
            let at = self.byte_index(self.cursor);
            self.url.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.url.chars().count());
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.url.chars().count();
    }

    pub fn clear_url(&mut self) {
        self.url.clear();
        self.cursor = 0;
    }
}
