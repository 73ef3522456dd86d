//! Scroll-position to active-section mapping
//!
//! The page nav highlights whichever section's center sits closest to the
//! viewport center. Selection is a pure function over viewport-relative
//! rects so it tests natively; the DOM glue is wasm-only.

/// Viewport-relative bounding box of a registered section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub height: f64,
}

impl SectionRect {
    pub fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Index of the section whose center is nearest the viewport center.
/// Ties go to the lowest index; `None` only when no sections are registered.
pub fn active_section(sections: &[SectionRect], viewport_height: f64) -> Option<usize> {
    let target = viewport_height / 2.0;
    sections
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            (a.center() - target)
                .abs()
                .total_cmp(&(b.center() - target).abs())
        })
        .map(|(i, _)| i)
}

/// Collect the rects of registered section elements, in document order
#[cfg(target_arch = "wasm32")]
pub fn section_rects(sections: &[web_sys::Element]) -> Vec<SectionRect> {
    sections
        .iter()
        .map(|el| {
            let rect = el.get_bounding_client_rect();
            SectionRect {
                top: rect.top(),
                height: rect.height(),
            }
        })
        .collect()
}

/// Smooth-scroll a section's top to the container's scroll origin
#[cfg(target_arch = "wasm32")]
pub fn scroll_to_section(el: &web_sys::Element) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked(heights: &[f64], scroll_top: f64) -> Vec<SectionRect> {
        // Sections laid out one after another, shifted up by the scroll
        let mut top = -scroll_top;
        heights
            .iter()
            .map(|&height| {
                let rect = SectionRect { top, height };
                top += height;
                rect
            })
            .collect()
    }

    #[test]
    fn test_no_sections() {
        assert_eq!(active_section(&[], 800.0), None);
    }

    #[test]
    fn test_top_of_page_selects_first() {
        let sections = stacked(&[600.0, 600.0, 600.0], 0.0);
        assert_eq!(active_section(&sections, 800.0), Some(0));
    }

    #[test]
    fn test_scrolled_to_middle_selects_middle() {
        // Scrolled so the second section fills the viewport
        let sections = stacked(&[600.0, 600.0, 600.0], 500.0);
        assert_eq!(active_section(&sections, 800.0), Some(1));
    }

    #[test]
    fn test_scrolled_to_bottom_selects_last() {
        let sections = stacked(&[600.0, 600.0, 600.0], 1_000.0);
        assert_eq!(active_section(&sections, 800.0), Some(2));
    }

    #[test]
    fn test_tie_breaks_to_lowest_index() {
        // Two section centers equidistant from the viewport center
        let sections = [
            SectionRect { top: 0.0, height: 300.0 },   // center 150, distance 250
            SectionRect { top: 500.0, height: 300.0 }, // center 650, distance 250
        ];
        assert_eq!(active_section(&sections, 800.0), Some(0));
    }

    #[test]
    fn test_uneven_sections() {
        let sections = [
            SectionRect { top: -900.0, height: 1_000.0 }, // center -400
            SectionRect { top: 100.0, height: 200.0 },    // center 200
            SectionRect { top: 300.0, height: 2_000.0 },  // center 1300
        ];
        // Viewport center 400 is nearest the small middle section
        assert_eq!(active_section(&sections, 800.0), Some(1));
    }
}
