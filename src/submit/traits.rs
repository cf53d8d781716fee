//! Trait abstraction for the submit collaborator to enable mocking in tests

use crate::error::SubmitError;
use crate::state::FormValues;
use async_trait::async_trait;

/// Receives the values of a form that passed validation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitHandler: Send + Sync {
    /// Deliver the values; any failure leaves the form untouched
    async fn submit(&self, values: FormValues) -> Result<(), SubmitError>;
}
