use axum::extract::{rejection::FormRejection, Form};
use tracing::warn;

use crate::services::pilot::PilotResult;
use crate::utils::logging::{
    log_calculation, log_calculation_error, log_request_start, log_validation_error,
};
use crate::utils::validation::validate_year;
use crate::web::response::YearResponse;

/// Form body of `POST /` as raw name/value pairs, in request order
pub type FormPairs = Vec<(String, String)>;

const YEAR_FIELD: &str = "year";

/// `POST /`: validates the submitted year and runs the calculation
pub async fn calculate(form: Result<Form<FormPairs>, FormRejection>) -> YearResponse {
    match form {
        Ok(Form(pairs)) => respond_to_year(last_value(&pairs, YEAR_FIELD)),
        Err(rejection) => {
            warn!("Rejected calculation request body: {}", rejection);
            YearResponse::failure("Не удалось прочитать форму: ожидается поле 'year'.")
        }
    }
}

/// Value of the last occurrence of `name`; a repeated field overrides earlier ones
pub fn last_value<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .rev()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// Builds the response for a raw `year` value
pub fn respond_to_year(raw_year: Option<&str>) -> YearResponse {
    log_request_start("POST /", raw_year);

    let year = match validate_year(raw_year) {
        Ok(year) => year,
        Err(e) => {
            let message = e.to_string();
            log_validation_error("year", raw_year.unwrap_or_default(), &message);
            return YearResponse::failure(message);
        }
    };

    match PilotResult::compute(year) {
        Some(result) => {
            log_calculation(year, &result.datetime_string());
            YearResponse::Success(result)
        }
        None => {
            log_calculation_error(year);
            YearResponse::failure(format!("Не удалось вычислить дату для года {}.", year))
        }
    }
}
