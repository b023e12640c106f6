//! CSV fetch client
//!
//! Each family's file is fetched once at startup and parsed with the shared
//! loader. Errors are stringly typed here; the caller only logs them.

use fuelscope::dataset::{Family, Series, SeriesLoader};
use gloo_net::http::Request;

/// Fetch and parse one family's CSV file
pub async fn fetch_series(family: Family) -> Result<Series, String> {
    let url = format!("/data/{}", family.file_name());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("GET {}: {}", url, e))?;

    if !response.ok() {
        return Err(format!("GET {}: HTTP {}", url, response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("GET {}: {}", url, e))?;

    let report = SeriesLoader::new()
        .load_reader(family, body.as_bytes())
        .map_err(|e| format!("{}: {}", family.file_name(), e))?;

    if report.rows_skipped > 0 {
        web_sys::console::warn_1(
            &format!(
                "{}: skipped {} malformed rows",
                family.file_name(),
                report.rows_skipped
            )
            .into(),
        );
    }

    Ok(report.series)
}
