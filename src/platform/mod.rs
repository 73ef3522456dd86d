//! Browser capability wrappers
//!
//! Every capability degrades gracefully: storage that is absent reads as
//! empty, haptics and share calls that fail are ignored or fall back. The
//! core never branches on environment detection directly.

pub mod haptics;
#[cfg(target_arch = "wasm32")]
pub mod scheduler;
pub mod share;
pub mod storage;

/// Whether the user asked the platform for reduced motion
#[cfg(target_arch = "wasm32")]
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn prefers_reduced_motion() -> bool {
    false
}
