/// Category carousel component - cyclic window over the category catalog
use jobdeck_core::types::Category;
use std::time::{Duration, Instant};

/// How long the "searching ..." notice stays on screen after a select.
pub const NOTICE_LIFETIME: Duration = Duration::from_millis(2000);

/// Card counts per terminal-width breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Wide,
    Medium,
    Narrow,
}

impl Breakpoint {
    pub fn for_width(width: u16) -> Self {
        if width >= 96 {
            Breakpoint::Wide
        } else if width >= 64 {
            Breakpoint::Medium
        } else {
            Breakpoint::Narrow
        }
    }

    pub fn cards(&self) -> usize {
        match self {
            Breakpoint::Wide => 3,
            Breakpoint::Medium => 2,
            Breakpoint::Narrow => 1,
        }
    }
}

/// Transient select feedback; replaced whole on every select, so at most one
/// deadline is ever pending per carousel.
#[derive(Debug, Clone)]
pub struct SelectionNotice {
    pub category: String,
    pub deadline: Instant,
}

#[derive(Debug, Clone)]
pub struct CarouselState {
    categories: Vec<Category>,
    current: usize,
    notice: Option<SelectionNotice>,
}

impl CarouselState {
    /// The catalog is fixed and non-empty by construction; an empty one is a
    /// misconfiguration and the caller must not render navigation for it.
    pub fn new(categories: Vec<Category>) -> Self {
        debug_assert!(!categories.is_empty());
        Self {
            categories,
            current: 0,
            notice: None,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.len();
    }

    pub fn prev(&mut self) {
        self.current = (self.current + self.len() - 1) % self.len();
    }

    /// Jump to a dot indicator. `index` must address an existing category;
    /// the indicator row is derived from the catalog, so anything else is a
    /// caller bug.
    pub fn go_to(&mut self, index: usize) {
        debug_assert!(index < self.len());
        self.current = index;
    }

    /// The visible card window for a breakpoint, as `(catalog index,
    /// emphasized)` pairs in display order. Pure; wraps past the end of the
    /// catalog. On wide terminals the middle card is emphasized.
    pub fn visible_window(&self, breakpoint: Breakpoint) -> Vec<(usize, bool)> {
        (0..breakpoint.cards())
            .map(|offset| {
                let index = (self.current + offset) % self.len();
                (index, breakpoint == Breakpoint::Wide && offset == 1)
            })
            .collect()
    }

    /// Register a category selection: shows the transient search notice for
    /// [`NOTICE_LIFETIME`]. Re-selecting replaces the pending notice. Does
    /// not move `current`; the actual search handoff is owned elsewhere.
    pub fn select(&mut self, name: impl Into<String>, now: Instant) {
        self.notice = Some(SelectionNotice {
            category: name.into(),
            deadline: now + NOTICE_LIFETIME,
        });
    }

    /// Select the category under the cursor; returns its name.
    pub fn select_current(&mut self, now: Instant) -> &'static str {
        let name = self.categories[self.current].name;
        self.select(name, now);
        name
    }

    pub fn notice(&self) -> Option<&SelectionNotice> {
        self.notice.as_ref()
    }

    /// Clear the notice once its deadline has passed; called every event-loop
    /// iteration.
    pub fn tick(&mut self, now: Instant) {
        if self.notice.as_ref().map_or(false, |n| now >= n.deadline) {
            self.notice = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobdeck_core::types::default_categories;

    fn carousel() -> CarouselState {
        CarouselState::new(default_categories())
    }

    #[test]
    fn test_next_prev_wrap_and_round_trip() {
        let mut state = carousel();
        let n = state.len();

        for _ in 0..(2 * n + 3) {
            state.next();
            assert!(state.current() < n);
        }

        let start = state.current();
        state.next();
        state.prev();
        assert_eq!(state.current(), start);

        state.prev();
        state.next();
        assert_eq!(state.current(), start);
    }

    #[test]
    fn test_prev_from_zero_wraps_to_last() {
        let mut state = carousel();
        state.prev();
        assert_eq!(state.current(), state.len() - 1);
    }

    #[test]
    fn test_wide_window_wraps_with_middle_emphasis() {
        let mut state = carousel();
        state.go_to(4);

        let window = state.visible_window(Breakpoint::Wide);
        assert_eq!(
            window,
            vec![(4, false), (0, true), (1, false)],
            "window at the end of a 5-item catalog wraps to [4,0,1]"
        );
    }

    #[test]
    fn test_medium_and_narrow_windows() {
        let mut state = carousel();
        state.go_to(3);

        assert_eq!(
            state.visible_window(Breakpoint::Medium),
            vec![(3, false), (4, false)]
        );
        assert_eq!(state.visible_window(Breakpoint::Narrow), vec![(3, false)]);
    }

    #[test]
    fn test_select_sets_notice_without_moving_cursor() {
        let mut state = carousel();
        state.go_to(2);
        let now = Instant::now();

        let name = state.select_current(now);
        assert_eq!(name, state.categories()[2].name);
        assert_eq!(state.current(), 2);
        assert_eq!(state.notice().unwrap().category, name);
    }

    #[test]
    fn test_notice_clears_after_lifetime() {
        let mut state = carousel();
        let now = Instant::now();
        state.select("Data Science", now);

        state.tick(now + NOTICE_LIFETIME - Duration::from_millis(1));
        assert!(state.notice().is_some());

        state.tick(now + NOTICE_LIFETIME);
        assert!(state.notice().is_none());
    }

    #[test]
    fn test_reselect_resets_the_deadline() {
        let mut state = carousel();
        let now = Instant::now();
        state.select("Data Science", now);

        // A second select half-way through replaces the pending notice.
        let later = now + Duration::from_millis(1500);
        state.select("Backend Developer", later);

        state.tick(now + NOTICE_LIFETIME);
        let notice = state.notice().expect("replaced notice still pending");
        assert_eq!(notice.category, "Backend Developer");

        state.tick(later + NOTICE_LIFETIME);
        assert!(state.notice().is_none());
    }

    #[test]
    fn test_breakpoint_from_width() {
        assert_eq!(Breakpoint::for_width(120), Breakpoint::Wide);
        assert_eq!(Breakpoint::for_width(80), Breakpoint::Medium);
        assert_eq!(Breakpoint::for_width(40), Breakpoint::Narrow);
    }
}
