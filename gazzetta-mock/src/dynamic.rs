use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use gazzetta_core::{GazzettaError, NewsAdapter, RawArticle};

/// Instruction for how `fetch` should behave for a given query.
#[derive(Clone)]
pub enum MockBehavior {
    /// Return the provided records immediately (truncated to `limit`).
    Return(Vec<RawArticle>),
    /// Return the provided records after sleeping.
    Delayed(Duration, Vec<RawArticle>),
    /// Fail immediately with the provided error.
    Fail(GazzettaError),
    /// Hang indefinitely (simulate a stalled provider).
    Hang,
    /// Panic with the provided message.
    Panic(String),
}

#[derive(Default)]
struct InternalState {
    rules: HashMap<String, MockBehavior>,
    fallback: Option<MockBehavior>,
    requests: Vec<(String, usize)>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
#[derive(Clone)]
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `fetch` calls with a specific query.
    pub async fn set_behavior(&self, query: impl Into<String>, behavior: MockBehavior) {
        let mut guard = self.state.lock().await;
        guard.rules.insert(query.into(), behavior);
    }

    /// Set the behavior used for queries without a specific rule.
    pub async fn set_fallback(&self, behavior: MockBehavior) {
        let mut guard = self.state.lock().await;
        guard.fallback = Some(behavior);
    }

    /// Number of `fetch` calls received so far.
    pub async fn calls(&self) -> usize {
        self.state.lock().await.requests.len()
    }

    /// Return a copy of the `(query, limit)` request log.
    pub async fn requests(&self) -> Vec<(String, usize)> {
        self.state.lock().await.requests.clone()
    }

    /// Clear all configured behaviors and the request log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.rules.clear();
        guard.fallback = None;
        guard.requests.clear();
    }
}

/// An adapter that defers all behavior to an external controller.
///
/// Queries with neither a rule nor a fallback return no records.
pub struct DynamicMockAdapter {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockAdapter {
    /// Create a new dynamic mock adapter and its controller.
    #[must_use]
    pub fn new_with_controller(name: &'static str) -> (Arc<dyn NewsAdapter>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn NewsAdapter>, controller)
    }
}

#[async_trait]
impl NewsAdapter for DynamicMockAdapter {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    async fn fetch(&self, query: &str, limit: usize) -> Result<Vec<RawArticle>, GazzettaError> {
        // Snapshot the behavior without holding the lock across await points
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.requests.push((query.to_string(), limit));
            guard
                .rules
                .get(query)
                .cloned()
                .or_else(|| guard.fallback.clone())
        };

        match behavior {
            Some(MockBehavior::Return(mut records)) => {
                records.truncate(limit);
                Ok(records)
            }
            Some(MockBehavior::Delayed(delay, mut records)) => {
                tokio::time::sleep(delay).await;
                records.truncate(limit);
                Ok(records)
            }
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            Some(MockBehavior::Panic(msg)) => panic!("{}: {msg}", self.name),
            None => Ok(Vec::new()),
        }
    }
}
