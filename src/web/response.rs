use axum::response::{IntoResponse, Json, Response};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::services::pilot::PilotResult;

/// Outcome of a calculation request.
///
/// Serializes to an object tagged by a boolean `ok` field:
/// `{"ok":true,"year":..,"datetime":..,"display_time":..,"timezone":..}` or
/// `{"ok":false,"error":..}`. Both variants are sent with 200; clients
/// branch on `ok`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearResponse {
    /// The year was valid and a timestamp was computed
    Success(PilotResult),
    /// The input was rejected
    Failure {
        /// Human-readable reason
        error: String,
    },
}

impl YearResponse {
    /// Failure with the given message
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure { error: error.into() }
    }

    /// Whether this is the success variant
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl Serialize for YearResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success(result) => {
                let mut state = serializer.serialize_struct("YearResponse", 5)?;
                state.serialize_field("ok", &true)?;
                state.serialize_field("year", &result.year)?;
                state.serialize_field("datetime", &result.datetime_string())?;
                state.serialize_field("display_time", &result.display_time())?;
                state.serialize_field("timezone", result.timezone())?;
                state.end()
            }
            Self::Failure { error } => {
                let mut state = serializer.serialize_struct("YearResponse", 2)?;
                state.serialize_field("ok", &false)?;
                state.serialize_field("error", error)?;
                state.end()
            }
        }
    }
}

impl IntoResponse for YearResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
