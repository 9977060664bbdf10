//! Platform location capability seam.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;

/// Permission state reported by the platform, where available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    Prompt,
}

/// Options for a single-shot position query.
#[derive(Debug, Clone, Copy)]
pub struct PositionRequest {
    pub high_accuracy: bool,
    pub timeout: Duration,
    /// Maximum acceptable age of a cached position. Zero means the source
    /// must produce a fresh fix.
    pub maximum_age: Duration,
}

impl Default for PositionRequest {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::ZERO,
        }
    }
}

/// A resolved device position.
#[derive(Debug, Clone, Copy)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy_meters: Option<f64>,
}

/// Failure modes of a position query.
#[derive(Debug, thiserror::Error)]
pub enum PositionError {
    #[error("permission denied")]
    PermissionDenied,
    #[error("position unavailable")]
    Unavailable,
    #[error("request timed out")]
    Timeout,
    #[error("{0}")]
    Other(String),
}

/// Abstraction over the platform's geolocation capability.
///
/// Implementations serve one fresh position per query; the resolver owns
/// timeout enforcement and all user-facing state.
pub trait PositionSource: Send + Sync {
    /// Whether the platform exposes a location capability at all.
    fn is_available(&self) -> bool;

    /// Issue a single-shot position query honoring `request`.
    fn query_position(
        &self,
        request: PositionRequest,
    ) -> impl Future<Output = Result<Position, PositionError>> + Send;

    /// Current permission status, if the platform exposes one.
    fn permission_status(&self) -> Option<PermissionStatus> {
        None
    }

    /// Permission status-change notifications, if the platform exposes them.
    fn watch_permission(&self) -> Option<watch::Receiver<PermissionStatus>> {
        None
    }
}

/// Source for platforms without a location capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedPositionSource;

impl PositionSource for UnsupportedPositionSource {
    fn is_available(&self) -> bool {
        false
    }

    fn query_position(
        &self,
        _request: PositionRequest,
    ) -> impl Future<Output = Result<Position, PositionError>> + Send {
        async { Err(PositionError::Unavailable) }
    }
}
