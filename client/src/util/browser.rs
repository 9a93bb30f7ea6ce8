//! Browser glue used by the shell and pages.
//!
//! TRADE-OFFS
//! ==========
//! These helpers are csr-only behavior; native builds no-op or report
//! unavailability so the rest of the crate stays testable on the host.

/// Full-page navigation to `path`, discarding all in-memory app state.
pub fn hard_redirect(path: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
    }
}

/// A file picked by the user, read fully into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Read the first file selected in a file `<input>` change event.
///
/// # Errors
///
/// Returns an error string if no file was selected or reading failed.
#[cfg(feature = "csr")]
pub async fn read_picked_file(ev: &leptos::ev::Event) -> Result<PickedFile, String> {
    use wasm_bindgen::JsCast;

    let input = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .ok_or_else(|| "not a file input".to_owned())?;
    let file = input
        .files()
        .and_then(|list| list.get(0))
        .ok_or_else(|| "no file selected".to_owned())?;
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    Ok(PickedFile {
        name: file.name(),
        content_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}
