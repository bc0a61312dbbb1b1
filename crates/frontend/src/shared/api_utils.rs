//! API utilities for frontend-backend communication

/// Origin of the page serving the app, e.g. "https://crm.example.com".
/// Empty string if window is not available.
pub fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Full API URL for a configured endpoint.
/// Absolute URLs are used as they are; relative ones go to the page origin.
pub fn api_url(endpoint: &str) -> String {
    if is_absolute(endpoint) {
        endpoint.to_string()
    } else {
        resolve_endpoint(&page_origin(), endpoint)
    }
}

fn is_absolute(endpoint: &str) -> bool {
    endpoint.starts_with("http://") || endpoint.starts_with("https://")
}

/// Joins a relative endpoint onto an origin. With no origin the endpoint
/// stays relative and the browser resolves it against the page.
fn resolve_endpoint(origin: &str, endpoint: &str) -> String {
    let path = endpoint.trim_start_matches('/');
    if origin.is_empty() {
        return format!("/{}", path);
    }
    format!("{}/{}", origin.trim_end_matches('/'), path)
}
