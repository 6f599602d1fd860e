//! Timer futures

use js_sys::{Function, Promise};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

fn resolve_now(resolve: &Function) {
    let _ = resolve.call0(&JsValue::NULL);
}

/// Resolve after `ms` milliseconds. Resolves immediately without a window.
pub async fn sleep(ms: u32) {
    let promise = Promise::new(&mut |resolve, _reject| match web_sys::window() {
        Some(window) => {
            let scheduled = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32);
            if scheduled.is_err() {
                resolve_now(&resolve);
            }
        }
        None => resolve_now(&resolve),
    });
    let _ = JsFuture::from(promise).await;
}

/// Wait for the next animation frame and return its timestamp (ms)
pub async fn next_frame() -> Option<f64> {
    let promise = Promise::new(&mut |resolve, _reject| match web_sys::window() {
        Some(window) => {
            if window.request_animation_frame(&resolve).is_err() {
                resolve_now(&resolve);
            }
        }
        None => resolve_now(&resolve),
    });
    JsFuture::from(promise).await.ok()?.as_f64()
}
