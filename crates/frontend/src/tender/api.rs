//! API-клиент поиска закупок

use contracts::tender::{suggested_download_name, SearchRequest, SearchResponse, REPORT_FILENAME};
use wasm_bindgen::JsCast;
use web_sys::{window, FormData, RequestInit, RequestMode, Response};

use crate::shared::api_utils::api_url;
use crate::shared::download::download_url;

/// Отправляет форму поиска на backend.
///
/// Backend отвечает JSON и на 4xx/5xx (поле error в теле), поэтому тело
/// разбирается до проверки статуса; на статус опираемся только когда
/// JSON разобрать не удалось.
pub async fn search_tenders(request: &SearchRequest) -> Result<SearchResponse, String> {
    let window = window().ok_or("No window object")?;

    let form = FormData::new().map_err(|e| format!("Failed to create form data: {:?}", e))?;
    for (name, value) in request.to_form_entries() {
        form.append_with_str(&name, &value)
            .map_err(|e| format!("Failed to append form field: {:?}", e))?;
    }

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    // Content-Type не выставляем: границу multipart проставит браузер
    opts.set_body(form.as_ref());

    let http_request =
        web_sys::Request::new_with_str_and_init(&api_url("/tender/searchTenders"), &opts)
            .map_err(|e| format!("Failed to create request: {:?}", e))?;

    let response_value =
        wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&http_request))
            .await
            .map_err(|e| format!("Fetch failed: {:?}", e))?;

    let response: Response = response_value
        .dyn_into()
        .map_err(|_| "Not a Response".to_string())?;

    let status = response.status();
    let ok = response.ok();

    let json = match response.json() {
        Ok(promise) => wasm_bindgen_futures::JsFuture::from(promise).await.ok(),
        Err(_) => None,
    };
    let parsed =
        json.and_then(|value| serde_wasm_bindgen::from_value::<SearchResponse>(value).ok());

    match parsed {
        Some(body) => Ok(body),
        None if !ok => Err(format!("HTTP error: {}", status)),
        None => Err("Malformed response body".to_string()),
    }
}

/// Скачивает готовый файл отчёта. Параметр t нужен только
/// чтобы обойти кэш браузера.
pub fn download_report(filename: Option<&str>) -> Result<(), String> {
    let remote_name = filename.unwrap_or(REPORT_FILENAME);
    let url = api_url(&format!(
        "/tender/download?filename={}&t={}",
        urlencoding::encode(remote_name),
        js_sys::Date::now() as u64
    ));
    let local_name = suggested_download_name(chrono::Local::now().date_naive());
    download_url(&url, &local_name)
}
