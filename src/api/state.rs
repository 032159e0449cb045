//! Application state for the Payroll Validator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::validation::ValidationEngine;

/// Shared application state.
///
/// The engine is immutable, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<ValidationEngine>,
}

impl AppState {
    /// Creates a new application state around the given engine.
    pub fn new(engine: ValidationEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Returns a reference to the validation engine.
    pub fn engine(&self) -> &ValidationEngine {
        &self.engine
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ValidationEngine::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone_and_send() {
        // Required for axum state
        fn assert_state<T: Clone + Send + Sync + 'static>() {}
        assert_state::<AppState>();
    }

    #[test]
    fn test_default_state_uses_default_policy() {
        let state = AppState::default();
        assert!(state.engine().policy().is_default());
    }
}
