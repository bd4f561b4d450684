//! Run context for provisioning operations.
//!
//! Provides run tracking for logging and CI log correlation. One context is
//! created per provisioning run and threaded through provider calls.

use uuid::Uuid;

/// Context for a single provisioning run.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Unique identifier for this run
    pub run_id: String,
}

impl RunContext {
    /// Create a new run context with a specific run ID.
    pub fn new(run_id: String) -> Self {
        Self { run_id }
    }

    /// Create a new run context with a generated run ID.
    pub fn with_generated_id() -> Self {
        Self {
            run_id: Uuid::new_v4().to_string(),
        }
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::with_generated_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct() {
        let a = RunContext::with_generated_id();
        let b = RunContext::with_generated_id();
        assert_ne!(a.run_id, b.run_id);
    }
}
