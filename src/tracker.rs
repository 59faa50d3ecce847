use crate::content::SectionId;

/// Pixel thresholds and timer windows for the scroll tracker. These are
/// presentation tuning constants; nothing downstream depends on the exact
/// values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerConfig {
    /// Height of the sticky header, subtracted from every section top so a
    /// section counts as active once it clears the header.
    pub header_offset: f64,
    /// Below this scroll offset the header is always shown.
    pub top_grace: f64,
    /// Scrolling down past this offset hides the header.
    pub hide_threshold: f64,
    /// Within this distance of the document bottom the last section wins.
    pub bottom_snap: f64,
    /// Trailing-edge coalescing window for resize-triggered recomputes.
    pub resize_debounce_ms: i32,
    /// Coalescing window for scroll ticks.
    pub scroll_throttle_ms: i32,
    /// Delay before scrolling after the mobile nav overlay closes.
    pub nav_close_delay_ms: i32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            header_offset: 90.0,
            top_grace: 50.0,
            hide_threshold: 100.0,
            bottom_snap: 50.0,
            resize_debounce_ms: 100,
            scroll_throttle_ms: 10,
            nav_close_delay_ms: 300,
        }
    }
}

/// Cached vertical pixel range of one section, header offset already
/// subtracted. Recomputed wholesale on resize, never patched in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub section: SectionId,
    pub top: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    Visible,
    Hidden,
}

/// Result of one scroll tick. `active` is `None` when the tick gives no
/// reason to change the current highlight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollUpdate {
    pub active: Option<SectionId>,
    pub header: HeaderState,
    pub progress: f64,
}

/// Classifies scroll offsets into an active section and drives the
/// header show/hide state machine. Holds no DOM handles; bounds are fed
/// in by the watcher.
pub struct ScrollTracker {
    config: TrackerConfig,
    bounds: Vec<SectionBounds>,
    last_offset: f64,
    header: HeaderState,
}

impl ScrollTracker {
    pub fn new(config: TrackerConfig) -> Self {
        ScrollTracker {
            config,
            bounds: Vec::new(),
            last_offset: 0.0,
            header: HeaderState::Visible,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Replace the cached bounds after a layout change. Sections whose
    /// anchors were missing from the DOM are simply absent; the tracker
    /// degrades to classifying over fewer sections.
    pub fn set_bounds(&mut self, bounds: Vec<SectionBounds>) {
        self.bounds = bounds;
    }

    /// Process one scroll tick. Active section and header visibility are
    /// both derived from the same `offset` read.
    pub fn on_scroll(&mut self, offset: f64, viewport: f64, doc_height: f64) -> ScrollUpdate {
        let active = self.classify(offset, viewport, doc_height);
        let header = self.update_header(offset);
        self.last_offset = offset;
        ScrollUpdate {
            active,
            header,
            progress: progress(offset, viewport, doc_height),
        }
    }

    /// First matching entry in document order wins; ties cannot happen
    /// when bounds are contiguous, but first-match avoids flicker when a
    /// recompute lags the layout.
    fn classify(&self, offset: f64, viewport: f64, doc_height: f64) -> Option<SectionId> {
        let first = self.bounds.first()?;
        let last = self.bounds.last()?;

        if offset <= 0.0 {
            return Some(first.section);
        }
        if doc_height > 0.0 && offset + viewport >= doc_height - self.config.bottom_snap {
            return Some(last.section);
        }
        if offset < first.top {
            return Some(first.section);
        }
        self.bounds
            .iter()
            .find(|b| b.top <= offset && offset < b.bottom)
            .map(|b| b.section)
    }

    fn update_header(&mut self, offset: f64) -> HeaderState {
        if offset <= self.config.top_grace {
            self.header = HeaderState::Visible;
        } else if offset < self.last_offset {
            self.header = HeaderState::Visible;
        } else if offset > self.config.hide_threshold && offset > self.last_offset {
            self.header = HeaderState::Hidden;
        }
        self.header
    }
}

/// Fraction of the scrollable range consumed, clamped to [0, 1]. A page
/// shorter than the viewport reports 0.
fn progress(offset: f64, viewport: f64, doc_height: f64) -> f64 {
    let scrollable = doc_height - viewport;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (offset / scrollable).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Five contiguous 500px sections starting at 0, header offset baked in.
    fn full_bounds() -> Vec<SectionBounds> {
        SectionId::ALL
            .iter()
            .enumerate()
            .map(|(i, &section)| SectionBounds {
                section,
                top: i as f64 * 500.0,
                bottom: (i + 1) as f64 * 500.0,
            })
            .collect()
    }

    fn tracker_with(bounds: Vec<SectionBounds>) -> ScrollTracker {
        let mut t = ScrollTracker::new(TrackerConfig::default());
        t.set_bounds(bounds);
        t
    }

    // Tall document so the bottom-snap rule stays out of the way.
    const DOC: f64 = 10_000.0;
    const VIEWPORT: f64 = 800.0;

    #[test]
    fn test_offset_between_tops_selects_earlier_section() {
        let mut t = tracker_with(full_bounds());
        // Strictly between the tops of About (500) and Experience (1000).
        for offset in [501.0, 700.0, 999.0] {
            let update = t.on_scroll(offset, VIEWPORT, DOC);
            assert_eq!(update.active, Some(SectionId::About), "offset {}", offset);
        }
    }

    #[test]
    fn test_offset_zero_is_home() {
        // Even with bounds that start below zero offset, and even on a
        // short page where the bottom-snap rule would otherwise fire.
        let mut t = tracker_with(full_bounds());
        let update = t.on_scroll(0.0, VIEWPORT, 700.0);
        assert_eq!(update.active, Some(SectionId::Home));
    }

    #[test]
    fn test_above_first_top_defaults_to_first() {
        let mut bounds = full_bounds();
        for b in &mut bounds {
            b.top += 200.0;
            b.bottom += 200.0;
        }
        let mut t = tracker_with(bounds);
        let update = t.on_scroll(100.0, VIEWPORT, DOC);
        assert_eq!(update.active, Some(SectionId::Home));
    }

    #[test]
    fn test_near_document_bottom_snaps_to_last() {
        let mut t = tracker_with(full_bounds());
        // offset + viewport = 9960, within 50px of the 10000px document,
        // even though the bounds entry at this offset is Skills.
        let update = t.on_scroll(1960.0, 8000.0, 10_000.0);
        assert_eq!(update.active, Some(SectionId::Contact));
    }

    #[test]
    fn test_gap_past_last_section_without_bottom_proximity_keeps_active() {
        let mut t = tracker_with(full_bounds());
        // Past the last bound (2500) but not near the document bottom.
        let update = t.on_scroll(3000.0, VIEWPORT, DOC);
        assert_eq!(update.active, None);
    }

    #[test]
    fn test_missing_anchors_degrade_to_fewer_sections() {
        // Home and Contact anchors absent from the DOM.
        let bounds = vec![
            SectionBounds {
                section: SectionId::About,
                top: 0.0,
                bottom: 500.0,
            },
            SectionBounds {
                section: SectionId::Experience,
                top: 500.0,
                bottom: 1000.0,
            },
            SectionBounds {
                section: SectionId::Skills,
                top: 1000.0,
                bottom: 1500.0,
            },
        ];
        let mut t = tracker_with(bounds);
        assert_eq!(
            t.on_scroll(0.0, VIEWPORT, DOC).active,
            Some(SectionId::About)
        );
        assert_eq!(
            t.on_scroll(750.0, VIEWPORT, DOC).active,
            Some(SectionId::Experience)
        );
    }

    #[test]
    fn test_empty_bounds_never_selects() {
        let mut t = tracker_with(Vec::new());
        let update = t.on_scroll(400.0, VIEWPORT, DOC);
        assert_eq!(update.active, None);
    }

    #[test]
    fn test_first_match_wins_on_overlapping_bounds() {
        let bounds = vec![
            SectionBounds {
                section: SectionId::Home,
                top: 0.0,
                bottom: 600.0,
            },
            // Stale entry overlapping the first.
            SectionBounds {
                section: SectionId::About,
                top: 400.0,
                bottom: 1000.0,
            },
        ];
        let mut t = tracker_with(bounds);
        let update = t.on_scroll(500.0, VIEWPORT, DOC);
        assert_eq!(update.active, Some(SectionId::Home));
    }

    #[test]
    fn test_header_hides_exactly_once_on_monotonic_scroll_down() {
        let mut t = tracker_with(full_bounds());
        let offsets = [0.0, 30.0, 60.0, 90.0, 120.0, 200.0, 400.0];
        let mut transitions = 0;
        let mut prev = HeaderState::Visible;
        for offset in offsets {
            let header = t.on_scroll(offset, VIEWPORT, DOC).header;
            if header != prev {
                transitions += 1;
                prev = header;
            }
        }
        assert_eq!(prev, HeaderState::Hidden);
        assert_eq!(transitions, 1);
    }

    #[test]
    fn test_header_visible_in_top_grace_zone_regardless_of_history() {
        let mut t = tracker_with(full_bounds());
        t.on_scroll(300.0, VIEWPORT, DOC);
        t.on_scroll(600.0, VIEWPORT, DOC);
        assert_eq!(t.on_scroll(40.0, VIEWPORT, DOC).header, HeaderState::Visible);
    }

    #[test]
    fn test_header_reappears_on_scroll_up() {
        let mut t = tracker_with(full_bounds());
        t.on_scroll(200.0, VIEWPORT, DOC);
        assert_eq!(t.on_scroll(400.0, VIEWPORT, DOC).header, HeaderState::Hidden);
        assert_eq!(
            t.on_scroll(390.0, VIEWPORT, DOC).header,
            HeaderState::Visible
        );
    }

    #[test]
    fn test_header_unchanged_between_grace_and_threshold() {
        let mut t = tracker_with(full_bounds());
        // Scrolling down at 80px: past the grace zone, below the hide
        // threshold. State stays whatever it was.
        assert_eq!(t.on_scroll(80.0, VIEWPORT, DOC).header, HeaderState::Visible);
        t.on_scroll(400.0, VIEWPORT, DOC);
        t.on_scroll(600.0, VIEWPORT, DOC); // now Hidden
        t.on_scroll(90.0, VIEWPORT, DOC); // scrolling up -> Visible
        assert_eq!(t.on_scroll(95.0, VIEWPORT, DOC).header, HeaderState::Visible);
    }

    #[test]
    fn test_progress_clamped_to_unit_range() {
        let mut t = tracker_with(full_bounds());
        assert_eq!(t.on_scroll(0.0, 800.0, 2000.0).progress, 0.0);
        assert_eq!(t.on_scroll(1200.0, 800.0, 2000.0).progress, 1.0);
        assert_eq!(t.on_scroll(2400.0, 800.0, 2000.0).progress, 1.0);
        let halfway = t.on_scroll(600.0, 800.0, 2000.0).progress;
        assert!((halfway - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_zero_when_page_fits_viewport() {
        let mut t = tracker_with(full_bounds());
        assert_eq!(t.on_scroll(10.0, 800.0, 600.0).progress, 0.0);
    }
}
