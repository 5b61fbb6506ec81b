//! Scripted analysis backend for tests
//!
//! Available to other crates through the `test-helpers` feature.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use pinsights_core::{AnalysisError, AnalysisResult, VirusTotalResult};

use crate::client::AnalysisBackend;

/// The result used across the test suites: 3 trackers, 12 cookies,
/// 7 third-party requests, fingerprinting detected, scan "Clean".
pub fn sample_result() -> AnalysisResult {
    AnalysisResult {
        trackers: 3,
        cookies: 12,
        third_party_requests: 7,
        fingerprinting: true,
        virus_total: VirusTotalResult {
            score: "Clean".to_string(),
            details: None,
        },
    }
}

#[derive(Debug, Clone)]
struct Scripted {
    outcome: Result<AnalysisResult, AnalysisError>,
    delay: Option<Duration>,
}

#[derive(Debug, Default)]
struct FakeInner {
    script: VecDeque<Scripted>,
    fallback: Option<Result<AnalysisResult, AnalysisError>>,
    calls: Vec<String>,
}

/// Backend that answers from a script and records every URL it was asked
/// to analyze. Clones share the same script and call log.
#[derive(Debug, Clone, Default)]
pub struct FakeBackend {
    inner: Arc<Mutex<FakeInner>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always answer with `outcome` once the script is exhausted
    pub fn always(outcome: Result<AnalysisResult, AnalysisError>) -> Self {
        let backend = Self::new();
        backend.lock().fallback = Some(outcome);
        backend
    }

    /// Queue one answer
    pub fn push(&self, outcome: Result<AnalysisResult, AnalysisError>) -> &Self {
        self.lock().script.push_back(Scripted {
            outcome,
            delay: None,
        });
        self
    }

    /// Queue one answer that arrives after `delay`
    pub fn push_delayed(
        &self,
        outcome: Result<AnalysisResult, AnalysisError>,
        delay: Duration,
    ) -> &Self {
        self.lock().script.push_back(Scripted {
            outcome,
            delay: Some(delay),
        });
        self
    }

    /// URLs analyzed so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn next(&self, url: &str) -> Scripted {
        let mut inner = self.lock();
        inner.calls.push(url.to_string());
        inner.script.pop_front().unwrap_or_else(|| Scripted {
            outcome: inner.fallback.clone().unwrap_or_else(|| {
                Err(AnalysisError::transport("FakeBackend has no scripted response"))
            }),
            delay: None,
        })
    }
}

impl AnalysisBackend for FakeBackend {
    async fn analyze(&self, url: &str) -> Result<AnalysisResult, AnalysisError> {
        let scripted = self.next(url);
        if let Some(delay) = scripted.delay {
            tokio::time::sleep(delay).await;
        }
        scripted.outcome
    }

    fn endpoint(&self) -> String {
        "fake://analysis".to_string()
    }
}
