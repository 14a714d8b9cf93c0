use tracing::{debug, error, info, warn};

/// Logs an incoming calculation request with consistent format
pub fn log_request_start(route: &str, raw_year: Option<&str>) {
    match raw_year {
        Some(y) => info!("REQUEST: {} year={:?}", route, y),
        None => info!("REQUEST: {} without year", route),
    }
}

/// Logs validation errors with consistent format
pub fn log_validation_error(field: &str, value: &str, error: &str) {
    warn!(
        "VALIDATION_ERROR: field '{}' invalid: {:?} - {}",
        field, value, error
    );
}

/// Logs a successful calculation with consistent format
pub fn log_calculation(year: i64, datetime: &str) {
    debug!("CALC: year {} -> {}", year, datetime);
}

/// Logs a calculation that produced no representable timestamp
pub fn log_calculation_error(year: i64) {
    error!("CALC_ERROR: year {} has no representable result", year);
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
