//! Best-effort score sharing
//!
//! Web Share where the browser offers it, clipboard copy otherwise, and a
//! visible outcome either way so the page can confirm what happened.

/// How the share attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed off to the native share sheet
    Shared,
    /// Copied to the clipboard instead
    Copied,
    /// Neither capability worked; nothing left the page
    Unavailable,
}

pub fn share_text(score: u32) -> String {
    format!("I scored {} on the buffet dash, catch me at the wedding! 🍰", score)
}

/// Kick off a share of the given score. `on_done` fires once with the
/// outcome; failures degrade share → clipboard → `Unavailable`.
#[cfg(target_arch = "wasm32")]
pub fn share_score(score: u32, on_done: impl FnOnce(ShareOutcome) + 'static) {
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = share_or_copy(share_text(score)).await;
        if outcome == ShareOutcome::Unavailable {
            log::warn!("share and clipboard both unavailable");
        }
        on_done(outcome);
    });
}

#[cfg(target_arch = "wasm32")]
async fn share_or_copy(text: String) -> ShareOutcome {
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;

    let Some(window) = web_sys::window() else {
        return ShareOutcome::Unavailable;
    };
    let navigator = window.navigator();

    // Feature-detect Web Share; some desktop browsers omit it entirely
    let has_share = js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("share"))
        .unwrap_or(false);
    if has_share {
        let data = web_sys::ShareData::new();
        data.set_title("Aisle Dash");
        data.set_text(&text);
        if JsFuture::from(navigator.share_with_data(&data)).await.is_ok() {
            return ShareOutcome::Shared;
        }
        // User dismissal and unsupported payloads land here; fall through
    }

    let clipboard = navigator.clipboard();
    match JsFuture::from(clipboard.write_text(&text)).await {
        Ok(_) => ShareOutcome::Copied,
        Err(_) => ShareOutcome::Unavailable,
    }
}

/// Native stub
#[cfg(not(target_arch = "wasm32"))]
pub fn share_score(score: u32, on_done: impl FnOnce(ShareOutcome) + 'static) {
    log::info!("share requested for score {} (no share target natively)", score);
    on_done(ShareOutcome::Unavailable);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_text_mentions_score() {
        assert!(share_text(42).contains("42"));
    }

    #[test]
    fn test_native_share_reports_unavailable() {
        use std::cell::Cell;
        use std::rc::Rc;

        let seen = Rc::new(Cell::new(None));
        let sink = seen.clone();
        share_score(7, move |outcome| sink.set(Some(outcome)));
        assert_eq!(seen.get(), Some(ShareOutcome::Unavailable));
    }
}
