use wasm_bindgen_futures::JsFuture;

/// Reads a user-selected file as UTF-8 text
pub async fn read_file_text(file: &web_sys::File) -> Result<String, String> {
    let text = JsFuture::from(file.text())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;

    text.as_string()
        .ok_or_else(|| format!("File {} did not produce text", file.name()))
}
