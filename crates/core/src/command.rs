//! Command dispatch seam.
//!
//! Each command type declares its output, and exactly one
//! [`CommandHandler`] is registered for it in application state. Endpoints
//! call the handler directly; there is no runtime lookup.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::CoreError;

/// A request to change persistent state.
///
/// Commands own all their data so they can cross task boundaries.
pub trait Command: std::fmt::Debug + Send + 'static {
    /// Value returned once the command has been applied.
    type Output: Send;
}

/// Executes one command type against persistent state.
#[async_trait]
pub trait CommandHandler<C: Command>: Send + Sync {
    /// Apply `command`, aborting promptly if `cancel` fires first.
    async fn handle(&self, command: C, cancel: CancellationToken) -> Result<C::Output, CoreError>;
}
