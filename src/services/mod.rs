/// Liveness and health endpoints
pub mod health;
/// The piloted New Year calculation
pub mod pilot;
/// The fixed zone results are expressed in
pub mod timezone;
