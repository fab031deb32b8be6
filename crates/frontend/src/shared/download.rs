/// Скачивание файла по прямой ссылке через временный anchor-элемент
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

/// Инициирует скачивание URL браузером под указанным локальным именем
pub fn download_url(url: &str, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    // Создаем временную ссылку для скачивания
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "Not an anchor element".to_string())?;

    anchor.set_href(url);
    anchor.set_download(filename);

    // Добавляем в DOM, кликаем и удаляем
    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Ok(())
}
