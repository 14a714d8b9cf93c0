/// Timestamp formatting for responses and the page
pub mod datetime;
/// Consistent-format log helpers
pub mod logging;
/// Parsing of client-supplied values
pub mod validation;
