//! Small DOM utilities shared across components: toast notifications and
//! triggering a browser download for generated bytes.

use gloo_file::Blob;
use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, HtmlElement, Url};

/// Displays a temporary notification in the top-right corner. The toast
/// removes itself after a few seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("top", "20px").ok();
                style.set_property("right", "20px").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Offers `bytes` as a file download named `filename` by clicking a
/// transient object-URL anchor. Best effort; a failure is silent.
pub fn save_file(bytes: Vec<u8>, filename: &str, mime_type: &str) {
    let blob = Blob::new_with_options(bytes.as_slice(), Some(mime_type));
    let url = match Url::create_object_url_with_blob(blob.as_ref()) {
        Ok(url) => url,
        Err(_) => return,
    };

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let (Ok(anchor), Some(body)) = (document.create_element("a"), document.body()) {
            let anchor: HtmlAnchorElement = anchor.unchecked_into();
            anchor.set_href(&url);
            anchor.set_download(filename);
            if body.append_child(&anchor).is_ok() {
                anchor.click();
                body.remove_child(&anchor).ok();
            }
        }
    }
    Url::revoke_object_url(&url).ok();
}
