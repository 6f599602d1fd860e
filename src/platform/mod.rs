//! Browser bindings (WASM only)
//!
//! - `timer`: `setTimeout` and `requestAnimationFrame` as futures
//! - `fetch`: locale documents over the Fetch API
//! - `dom`: the reveal [`Stage`](crate::reveal::Stage) over page elements

pub mod dom;
pub mod fetch;
pub mod timer;

pub use dom::DomStage;
pub use fetch::HttpSource;

/// Locale reported by the browser, e.g. `ko-KR`
pub fn browser_locale() -> Option<String> {
    web_sys::window()?.navigator().language()
}
