use axum::response::Html;
use chrono::DateTime;
use chrono_tz::Tz;

use crate::services::timezone::now_in_zone;
use crate::utils::datetime::format_page_time;

const INDEX_TEMPLATE: &str = include_str!("../../static/index.html");
const CURRENT_TIME_SLOT: &str = "{{current_time}}";

/// Every non-POST request to `/` gets the page
pub async fn index_page() -> Html<String> {
    Html(render_index(&now_in_zone()))
}

/// Fills the page template for the given server time
pub fn render_index(now: &DateTime<Tz>) -> String {
    INDEX_TEMPLATE.replace(CURRENT_TIME_SLOT, &format_page_time(now))
}
