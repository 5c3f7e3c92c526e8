use crate::shared::api_utils::api_url;
use contracts::dashboards::d402_parts_tracking::PartsResponse;
use gloo_net::http::Request;

const PARTS_API: &str = "/api/parts";
const RESPONSIBLE_FORM_API: &str = "/admin/part/change_responsible_form";

pub fn parts_path(product_designation: &str) -> String {
    format!("{}/{}", PARTS_API, urlencoding::encode(product_designation))
}

pub fn responsible_form_path(part_id: &str) -> String {
    format!("{}/{}", RESPONSIBLE_FORM_API, urlencoding::encode(part_id))
}

/// Получить детали изделия
pub async fn fetch_parts(product_designation: &str) -> Result<PartsResponse, String> {
    let url = api_url(&parts_path(product_designation));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error! status: {}", response.status()));
    }

    response
        .json::<PartsResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Получить HTML-форму смены ответственного за деталь
pub async fn fetch_responsible_form(part_id: &str) -> Result<String, String> {
    let url = api_url(&responsible_form_path(part_id));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error! status: {}", response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}
