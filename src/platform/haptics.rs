//! Best-effort haptic feedback
//!
//! `navigator.vibrate` returning false or being absent is not an error;
//! the pulse just doesn't happen.

#[cfg(target_arch = "wasm32")]
pub fn pulse(duration_ms: u32) {
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().vibrate_with_duration(duration_ms);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn pulse(_duration_ms: u32) {
    // No haptics off the device
}
