//! Maps service errors to `tempo_core::AppError` for consistent
//! user-facing messages.

use tempo_core::{error, AppError};

/// Map a position-source failure.
pub fn position_error(e: &tempo_location::PositionError) -> AppError {
    use tempo_location::PositionError;

    let mapped = match e {
        PositionError::PermissionDenied => error::LocationError::PermissionDenied,
        PositionError::Unavailable => error::LocationError::PositionUnavailable,
        PositionError::Timeout => error::LocationError::Timeout,
        PositionError::Other(message) => error::LocationError::Unknown(message.clone()),
    };
    AppError::Location(mapped)
}

/// Map a weather client failure.
pub fn weather_error(e: &tempo_weather::WeatherError) -> AppError {
    use tempo_weather::WeatherError;

    let mapped = match e {
        WeatherError::Http { status, status_text } => error::WeatherError::Api {
            status: *status,
            message: status_text.clone(),
        },
        WeatherError::Network(source) if source.is_decode() => {
            error::WeatherError::Parse(source.to_string())
        }
        WeatherError::Network(source) => error::WeatherError::Network(source.to_string()),
    };
    AppError::Weather(mapped)
}

/// Map a favorites persistence failure.
pub fn storage_error(e: &tempo_favorites::StorageError) -> AppError {
    use tempo_favorites::StorageError;

    let mapped = match e {
        StorageError::Read { source, .. } => error::StorageError::ReadFailed(source.to_string()),
        StorageError::Write { source, .. } => error::StorageError::WriteFailed(source.to_string()),
    };
    AppError::Storage(mapped)
}
