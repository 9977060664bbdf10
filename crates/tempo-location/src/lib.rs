//! Location resolution for Tempo
//!
//! Wraps the platform location capability behind [`PositionSource`], tracks
//! the request/permission state machine, and picks the effective
//! coordinates to query weather for.

pub mod coords;
pub mod resolver;
pub mod source;

pub use coords::{resolve_coordinates, FALLBACK_COORDINATES};
pub use resolver::{GeolocationResolver, GeolocationState};
pub use source::{
    PermissionStatus, Position, PositionError, PositionRequest, PositionSource,
    UnsupportedPositionSource,
};
