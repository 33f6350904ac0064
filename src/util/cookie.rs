//! Cookie lookup for the anti-forgery token.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use percent_encoding::percent_decode_str;

/// Find `name` in a `document.cookie` style header and URL-decode its value.
///
/// Matching is by exact name, so `csrftoken` never matches `xcsrftoken`.
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key != name {
            return None;
        }
        Some(percent_decode_str(value).decode_utf8_lossy().into_owned())
    })
}

/// Read a cookie from the current document.
pub fn read_cookie(name: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let header = web_sys::window()?
            .document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()?
            .cookie()
            .ok()?;
        find_cookie(&header, name)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = name;
        None
    }
}
