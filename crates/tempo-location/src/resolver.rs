//! Geolocation request/permission state machine.
//!
//! State is published on a watch channel; every mutation goes through the
//! resolver's own operations. Failures are terminal for the attempt; the
//! caller re-invokes [`GeolocationResolver::request_location`] to retry.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use tempo_districts::Coordinates;

use crate::source::{PermissionStatus, PositionError, PositionRequest, PositionSource};

const NOT_SUPPORTED_MESSAGE: &str = "Geolocation is not supported on this device";
const PERMISSION_DENIED_MESSAGE: &str = "Location access denied by user";
const PERMISSION_BLOCKED_MESSAGE: &str =
    "Location access is blocked. Enable location for this app in your settings, then retry.";
const POSITION_UNAVAILABLE_MESSAGE: &str = "Location information unavailable";
const TIMEOUT_MESSAGE: &str = "Location request timed out";
const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Keeps the loading indicator visible long enough to be perceptible before
/// a permission denial is surfaced.
const DENIED_SURFACE_DELAY: Duration = Duration::from_millis(300);

/// Observable geolocation state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeolocationState {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub error: Option<String>,
    pub is_loading: bool,
    pub permission_denied: bool,
}

impl GeolocationState {
    /// Resolved device coordinates, once both components are present.
    pub fn coordinates(&self) -> Option<Coordinates> {
        Some(Coordinates::new(self.latitude?, self.longitude?))
    }
}

pub struct GeolocationResolver<S> {
    source: S,
    state: watch::Sender<GeolocationState>,
    activated: AtomicBool,
}

impl<S: PositionSource> GeolocationResolver<S> {
    pub fn new(source: S) -> Self {
        let (state, _) = watch::channel(GeolocationState::default());
        Self { source, state, activated: AtomicBool::new(false) }
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<GeolocationState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> GeolocationState {
        self.state.borrow().clone()
    }

    /// Issue one fresh location query and publish the outcome.
    ///
    /// A request already in flight is left alone; failures never retry on
    /// their own.
    pub async fn request_location(&self) {
        if !self.source.is_available() {
            self.state.send_modify(|s| {
                s.error = Some(NOT_SUPPORTED_MESSAGE.to_string());
                s.is_loading = false;
            });
            return;
        }

        if self.state.borrow().is_loading {
            tracing::debug!("Location request already in flight, ignoring");
            return;
        }

        self.state.send_modify(|s| {
            s.is_loading = true;
            s.error = None;
            s.permission_denied = false;
        });

        let request = PositionRequest::default();
        // The source is expected to honor the request timeout itself; the
        // outer timeout covers sources that don't.
        let outcome =
            tokio::time::timeout(request.timeout, self.source.query_position(request)).await;

        match outcome {
            Ok(Ok(position)) => {
                tracing::info!(
                    "Got location: {:.4}, {:.4}",
                    position.latitude,
                    position.longitude
                );
                self.state.send_modify(|s| {
                    s.latitude = Some(position.latitude);
                    s.longitude = Some(position.longitude);
                    s.error = None;
                    s.is_loading = false;
                });
            }
            Ok(Err(PositionError::PermissionDenied)) => self.surface_denied().await,
            Ok(Err(PositionError::Unavailable)) => self.fail(POSITION_UNAVAILABLE_MESSAGE),
            Ok(Err(PositionError::Timeout)) | Err(_) => self.fail(TIMEOUT_MESSAGE),
            Ok(Err(PositionError::Other(e))) => {
                tracing::warn!("Location query failed: {}", e);
                self.fail(UNKNOWN_ERROR_MESSAGE);
            }
        }
    }

    /// One-time passive permission observation: reflect the current status
    /// and follow status changes for the component's lifetime. A transition
    /// to granted auto-requests a location; a transition to denied only
    /// records the denial.
    pub fn activate(self: Arc<Self>)
    where
        S: 'static,
    {
        if self.activated.swap(true, Ordering::SeqCst) {
            return;
        }

        match self.source.permission_status() {
            Some(PermissionStatus::Granted) => self.state.send_modify(|s| {
                s.error = None;
                s.permission_denied = false;
            }),
            Some(PermissionStatus::Denied) => self.mark_denied(PERMISSION_BLOCKED_MESSAGE),
            Some(PermissionStatus::Prompt) | None => {}
        }

        let Some(mut permission) = self.source.watch_permission() else {
            return;
        };

        let resolver = self;
        tokio::spawn(async move {
            while permission.changed().await.is_ok() {
                let status = *permission.borrow_and_update();
                match status {
                    PermissionStatus::Granted => {
                        tracing::info!("Location permission granted, requesting location");
                        resolver.state.send_modify(|s| {
                            s.error = None;
                            s.permission_denied = false;
                        });
                        resolver.request_location().await;
                    }
                    PermissionStatus::Denied => {
                        resolver.mark_denied(PERMISSION_BLOCKED_MESSAGE);
                    }
                    PermissionStatus::Prompt => {}
                }
            }
        });
    }

    async fn surface_denied(&self) {
        // Prefer the actionable message when the platform can confirm the
        // permission is hard-blocked.
        let message = match self.source.permission_status() {
            Some(PermissionStatus::Denied) => PERMISSION_BLOCKED_MESSAGE,
            _ => PERMISSION_DENIED_MESSAGE,
        };

        tokio::time::sleep(DENIED_SURFACE_DELAY).await;
        self.mark_denied(message);
    }

    fn mark_denied(&self, message: &str) {
        self.state.send_modify(|s| {
            s.error = Some(message.to_string());
            s.permission_denied = true;
            s.is_loading = false;
        });
    }

    fn fail(&self, message: &str) {
        self.state.send_modify(|s| {
            s.error = Some(message.to_string());
            s.is_loading = false;
        });
    }
}
