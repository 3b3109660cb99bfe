//! Small browser helpers for pages: confirmation prompts and file inputs.
//!
//! Hydrate builds talk to `web-sys`; SSR builds answer with inert defaults
//! so server rendering stays deterministic.

use crate::net::api::ImageUpload;

/// Native `confirm()` dialog. Always `false` outside the browser.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// First file picked in the `<input type="file">` that fired `ev`.
pub fn picked_image(ev: &leptos::ev::Event) -> Option<ImageUpload> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
        let file = input.files()?.get(0)?;
        Some(ImageUpload::from_file(file))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        None
    }
}

/// Object URL previewing a picked image.
pub fn preview_url(image: &ImageUpload) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        image.preview_url()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = image;
        None
    }
}
