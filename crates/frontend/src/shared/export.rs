//! Экспорт записей в CSV и скачивание через браузер

use chrono::Utc;
use contracts::shared::csv::{export_filename, to_csv, CsvCell};
use indexmap::IndexMap;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::config::ExportConfig;

/// Экспортирует записи в CSV файл `{stem}_{YYYY-MM-DD}.csv` и инициирует скачивание.
/// Возвращает имя файла.
pub fn export_records<V: CsvCell>(
    records: &[IndexMap<String, V>],
    stem: &str,
    config: &ExportConfig,
) -> Result<String, String> {
    if records.is_empty() {
        return Err("No data to export".to_string());
    }

    let content = csv_content(records, config.include_bom);
    let filename = export_filename(stem, Utc::now().date_naive());

    download_text(&content, &filename, &config.mime_type)?;
    log::info!("exported {} rows to {}", records.len(), filename);

    Ok(filename)
}

/// Скачивает готовый CSV текст, например шаблон загрузки
pub fn download_text(content: &str, filename: &str, mime_type: &str) -> Result<(), String> {
    let blob = create_blob(content, mime_type)?;
    download_blob(&blob, filename)
}

fn csv_content<V: CsvCell>(records: &[IndexMap<String, V>], include_bom: bool) -> String {
    let mut content = String::new();
    // UTF-8 BOM для корректного отображения в Excel
    if include_bom {
        content.push('\u{FEFF}');
    }
    content.push_str(&to_csv(records));
    content
}

/// Создает Blob объект с CSV данными
fn create_blob(content: &str, mime_type: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime_type);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Инициирует скачивание Blob через временную скрытую ссылку
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    // Добавляем в DOM, кликаем и удаляем
    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    // Освобождаем URL
    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}
