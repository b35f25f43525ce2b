//! Mock chat backend for deterministic testing.
//!
//! Provides a [`ChatBackend`] implementation that returns fixtures instead
//! of calling a provider, with a call log for assertions and a failure
//! switch for exercising the degraded path.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use lawbridge_core::{ChatBackend, Error, Result};

/// Mock chat backend.
#[derive(Clone)]
pub struct MockChatBackend {
    config: Arc<MockConfig>,
    call_log: Arc<Mutex<Vec<MockCall>>>,
}

#[derive(Debug, Clone)]
struct MockConfig {
    response: String,
    fail: bool,
}

/// One recorded call to the mock.
#[derive(Debug, Clone)]
pub struct MockCall {
    pub system_prompt: String,
    pub user_prompt: String,
}

impl MockChatBackend {
    /// Create a mock that answers with a default summary.
    pub fn new() -> Self {
        Self {
            config: Arc::new(MockConfig {
                response: "Mock summary [1]".to_string(),
                fail: false,
            }),
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the fixed completion text (may be empty to simulate an empty
    /// model response).
    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.config).response = response.into();
        self
    }

    /// Make every call fail, simulating an unreachable provider.
    pub fn with_failure(mut self) -> Self {
        Arc::make_mut(&mut self.config).fail = true;
        self
    }

    /// Get all logged calls for assertion.
    pub fn calls(&self) -> Vec<MockCall> {
        self.call_log.lock().unwrap().clone()
    }

    /// Number of completion calls made.
    pub fn call_count(&self) -> usize {
        self.call_log.lock().unwrap().len()
    }
}

impl Default for MockChatBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatBackend for MockChatBackend {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        self.call_log.lock().unwrap().push(MockCall {
            system_prompt: system_prompt.to_string(),
            user_prompt: user_prompt.to_string(),
        });

        if self.config.fail {
            return Err(Error::Generation("Simulated provider failure".to_string()));
        }

        Ok(self.config.response.clone())
    }
}
