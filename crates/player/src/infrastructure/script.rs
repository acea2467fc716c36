//! Helpers for building and running page scripts

use crate::infrastructure::spawn_task;

/// Quote `value` as a JavaScript string literal.
pub(crate) fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Run `js` in the page, logging bridge failures.
pub(crate) fn run_script(js: String) {
    spawn_task(async move {
        if let Err(e) = dioxus::document::eval(&js).await {
            tracing::warn!("Page script failed: {:?}", e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_and_escapes() {
        assert_eq!(js_string("bg-music"), "\"bg-music\"");
        assert_eq!(js_string("it's \"here\""), "\"it's \\\"here\\\"\"");
    }
}
