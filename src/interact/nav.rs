//! Smooth-scroll navigation and active-section highlighting

use std::collections::HashMap;

/// Fraction of the viewport height, measured from the top, where the
/// highlight band sits (root margin `-20% 0px -80% 0px`).
pub const HIGHLIGHT_BAND: f64 = 0.2;

/// Vertical geometry needed to compute scroll targets
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub header_height: i64,
    /// Document offset of each section, keyed by section id
    pub section_tops: HashMap<String, i64>,
}

/// Tracks which nav link is highlighted.
///
/// The highlighted section is whichever section was most recently reported
/// as crossing the highlight band. Reports are applied in the order they
/// arrive, so of two sections reported together the last one wins.
#[derive(Debug, Clone)]
pub struct NavHighlighter {
    links: Vec<String>,
    sections: Vec<String>,
    active: Option<usize>,
    current: Option<String>,
}

impl NavHighlighter {
    /// `links` are the nav link hrefs in document order, `sections` the ids
    /// of the observed sections.
    pub fn new(links: Vec<String>, sections: Vec<String>) -> Self {
        Self {
            links,
            sections,
            active: None,
            current: None,
        }
    }

    /// Start with the given link highlighted, as marked up in the page.
    pub fn with_active(mut self, index: Option<usize>) -> Self {
        self.active = index.filter(|i| *i < self.links.len());
        self
    }

    pub fn links(&self) -> &[String] {
        &self.links
    }

    /// Href of the highlighted link
    pub fn active_link(&self) -> Option<&str> {
        self.active.map(|i| self.links[i].as_str())
    }

    /// Section most recently reported as intersecting
    pub fn current_section(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Apply an intersection-enter report for `section_id`. Clears every
    /// highlight and sets the one on the link targeting `#section_id`, if any.
    /// Ids that are not observed sections are ignored.
    pub fn section_entered(&mut self, section_id: &str) -> Option<&str> {
        if !self.sections.iter().any(|s| s == section_id) {
            log::debug!("ignoring intersection for unobserved section `{}`", section_id);
            return self.active_link();
        }
        let target = format!("#{}", section_id);
        self.active = self.links.iter().position(|l| *l == target);
        self.current = Some(section_id.to_string());
        self.active_link()
    }

    /// Whether a section with the given viewport-relative top and height
    /// crosses the highlight band of a viewport `viewport_height` tall.
    pub fn crosses_band(top: f64, height: f64, viewport_height: f64) -> bool {
        let band = viewport_height * HIGHLIGHT_BAND;
        top <= band && top + height > band
    }
}

/// Scroll offset for a nav link click: the target section's top minus the
/// header height. Returns `None` when the href names no known section.
pub fn scroll_target(href: &str, layout: &PageLayout) -> Option<i64> {
    let id = href.strip_prefix('#')?;
    layout
        .section_tops
        .get(id)
        .map(|top| top - layout.header_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> NavHighlighter {
        NavHighlighter::new(
            vec!["#home".into(), "#about".into(), "#projects".into()],
            vec!["home".into(), "about".into(), "projects".into(), "contact".into()],
        )
    }

    #[test]
    fn entering_section_moves_highlight() {
        let mut n = nav().with_active(Some(0));
        assert_eq!(n.active_link(), Some("#home"));
        assert_eq!(n.section_entered("projects"), Some("#projects"));
        assert_eq!(n.current_section(), Some("projects"));
    }

    #[test]
    fn last_report_wins() {
        let mut n = nav();
        n.section_entered("about");
        n.section_entered("home");
        assert_eq!(n.active_link(), Some("#home"));
    }

    #[test]
    fn section_without_link_clears_highlight() {
        let mut n = nav().with_active(Some(1));
        assert_eq!(n.section_entered("contact"), None);
        assert_eq!(n.current_section(), Some("contact"));
    }

    #[test]
    fn unobserved_section_is_ignored() {
        let mut n = nav().with_active(Some(1));
        assert_eq!(n.section_entered("footer"), Some("#about"));
        assert_eq!(n.current_section(), None);
    }

    #[test]
    fn band_crossing() {
        assert!(NavHighlighter::crosses_band(-100.0, 400.0, 1000.0));
        assert!(!NavHighlighter::crosses_band(300.0, 400.0, 1000.0));
        assert!(!NavHighlighter::crosses_band(-500.0, 400.0, 1000.0));
    }

    #[test]
    fn scroll_target_subtracts_header() {
        let mut layout = PageLayout {
            header_height: 70,
            ..Default::default()
        };
        layout.section_tops.insert("about".into(), 900);
        assert_eq!(scroll_target("#about", &layout), Some(830));
        assert_eq!(scroll_target("#missing", &layout), None);
        assert_eq!(scroll_target("about", &layout), None);
    }
}
