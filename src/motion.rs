//! Animation state machines for the page sections.
//!
//! Everything here is pure state: the component layer owns the actual
//! timers and observers and drives these models from their callbacks, so
//! the sequencing rules stay testable without a browser.

use std::collections::HashSet;

/// Schedule for a section's staged entrance animation.
///
/// A plan pairs the intersection settings for the tracked region with an
/// ordered list of `(stage token, delay)` activations. The delays are
/// relative to the moment the section first intersects the viewport.
#[derive(Debug, Clone)]
pub struct RevealPlan {
    threshold: f64,
    root_margin: &'static str,
    stages: Vec<(String, u64)>,
}

impl RevealPlan {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            root_margin: "0px",
            stages: Vec::new(),
        }
    }

    pub fn root_margin(mut self, margin: &'static str) -> Self {
        self.root_margin = margin;
        self
    }

    /// Adds a single named stage firing `delay_ms` after first intersection.
    pub fn stage(mut self, token: &str, delay_ms: u64) -> Self {
        self.stages.push((token.to_string(), delay_ms));
        self
    }

    /// Adds `count` indexed stages (`prefix-0`, `prefix-1`, ...) starting at
    /// `base_ms` and spaced `step_ms` apart.
    pub fn staggered(mut self, prefix: &str, count: usize, base_ms: u64, step_ms: u64) -> Self {
        for i in 0..count {
            self.stages
                .push((format!("{prefix}-{i}"), base_ms + i as u64 * step_ms));
        }
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn margin(&self) -> &'static str {
        self.root_margin
    }

    pub fn stages(&self) -> impl Iterator<Item = (&str, u64)> {
        self.stages.iter().map(|(t, d)| (t.as_str(), *d))
    }
}

/// The set of stages a section has revealed so far.
///
/// Grow-only: activating an already-present stage is a no-op and nothing
/// ever removes a token. A section that is never scrolled into view keeps
/// an empty state and its content stays in the hidden initial position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealState(HashSet<String>);

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn activate(&mut self, token: &str) {
        self.0.insert(token.to_string());
    }

    /// Degraded path: activates every stage of the plan at once, used when
    /// staged timers cannot be scheduled so content is never stuck hidden.
    pub fn reveal_all(&mut self, plan: &RevealPlan) {
        for (token, _) in plan.stages() {
            self.activate(token);
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Character-by-character reveal of a fixed string.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    shown: usize,
}

/// Delay before the first character appears.
pub const TYPEWRITER_START_DELAY_MS: u64 = 1000;
/// Delay between characters.
pub const TYPEWRITER_TICK_MS: u64 = 50;

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            shown: 0,
        }
    }

    /// Reveals the next character. Returns `false` once the full string is
    /// visible, at which point further ticks change nothing.
    pub fn tick(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.shown += 1;
        // advance to the next char boundary
        while self.shown < self.text.len() && !self.text.is_char_boundary(self.shown) {
            self.shown += 1;
        }
        true
    }

    pub fn visible(&self) -> &str {
        &self.text[..self.shown]
    }

    pub fn is_complete(&self) -> bool {
        self.shown >= self.text.len()
    }
}

/// Duration of a full counter run.
pub const COUNTER_DURATION_MS: f64 = 2000.0;

/// Integer counter animated from 0 to a target over a fixed duration.
///
/// The accumulator advances by `target / duration` per elapsed millisecond,
/// which is the per-tick rule `target / (duration / tick)` generalized to
/// variable frame deltas. Displayed values are `floor(acc)` capped at the
/// target, so the emitted sequence never decreases and never overshoots.
#[derive(Debug, Clone, Copy)]
pub struct Counter {
    target: u64,
    rate: f64,
    acc: f64,
}

impl Counter {
    pub fn new(target: u64) -> Self {
        Self::with_duration(target, COUNTER_DURATION_MS)
    }

    pub fn with_duration(target: u64, duration_ms: f64) -> Self {
        Self {
            target,
            rate: target as f64 / duration_ms,
            acc: 0.0,
        }
    }

    /// Advances by an elapsed frame delta and returns the value to display.
    pub fn advance(&mut self, delta_ms: f64) -> u64 {
        self.acc += self.rate * delta_ms.max(0.0);
        self.value()
    }

    pub fn value(&self) -> u64 {
        (self.acc.floor() as u64).min(self.target)
    }

    pub fn is_done(&self) -> bool {
        self.acc >= self.target as f64
    }

    pub fn target(&self) -> u64 {
        self.target
    }
}

/// Autoplay period for the testimonial carousel.
pub const CAROUSEL_INTERVAL_MS: u64 = 5000;

/// Current-testimonial selection with wrap-around navigation and a
/// suppressible autoplay flag.
///
/// The recurring timer calls [`Carousel::tick`]; while autoplay is
/// suspended (hover over any navigation control) ticks are ignored, so no
/// surprise transition happens during interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    autoplay: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "carousel needs at least one entry");
        Self {
            len,
            index: 0,
            autoplay: true,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    pub fn suspend_autoplay(&mut self) {
        self.autoplay = false;
    }

    pub fn resume_autoplay(&mut self) {
        self.autoplay = true;
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    /// Timer callback: advances only while autoplay is enabled.
    pub fn tick(&mut self) {
        if self.autoplay {
            self.next();
        }
    }

    /// Progress indicator width in percent.
    pub fn progress(&self) -> f64 {
        (self.index + 1) as f64 / self.len as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_plan() -> RevealPlan {
        RevealPlan::new(0.3)
            .stage("title", 100)
            .stage("content", 300)
            .staggered("card", 3, 300, 100)
    }

    #[test]
    fn reveal_plan_orders_stages() {
        let plan = demo_plan();
        let stages: Vec<_> = plan.stages().collect();
        assert_eq!(
            stages,
            vec![
                ("title", 100),
                ("content", 300),
                ("card-0", 300),
                ("card-1", 400),
                ("card-2", 500),
            ]
        );
        assert_eq!(plan.threshold(), 0.3);
        assert_eq!(plan.margin(), "0px");
    }

    #[test]
    fn reveal_state_grows_monotonically() {
        let mut state = RevealState::new();
        assert!(state.is_empty());

        state.activate("title");
        assert!(state.contains("title"));

        state.activate("content");
        assert!(state.contains("title"), "earlier stages must survive");
        assert!(state.contains("content"));
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn reveal_activation_is_idempotent() {
        let mut state = RevealState::new();
        state.activate("title");
        state.activate("title");
        state.activate("title");
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn reveal_all_covers_the_plan() {
        let plan = demo_plan();
        let mut state = RevealState::new();
        state.reveal_all(&plan);
        for (token, _) in plan.stages() {
            assert!(state.contains(token), "missing stage {token}");
        }
    }

    #[test]
    fn typewriter_reveals_one_char_per_tick() {
        let mut tw = Typewriter::new("abc");
        assert_eq!(tw.visible(), "");
        assert!(!tw.is_complete());

        assert!(tw.tick());
        assert_eq!(tw.visible(), "a");
        assert!(tw.tick());
        assert!(tw.tick());
        assert_eq!(tw.visible(), "abc");
        assert!(tw.is_complete());
    }

    #[test]
    fn typewriter_completion_latches() {
        let mut tw = Typewriter::new("hi");
        while tw.tick() {}
        assert!(tw.is_complete());
        assert!(!tw.tick(), "ticking past the end must be a no-op");
        assert_eq!(tw.visible(), "hi");
    }

    #[test]
    fn typewriter_handles_multibyte_text() {
        let mut tw = Typewriter::new("café ☕");
        let mut steps = 0;
        while tw.tick() {
            steps += 1;
            // every intermediate buffer is valid utf-8 by construction
            let _ = tw.visible();
        }
        assert_eq!(tw.visible(), "café ☕");
        assert_eq!(steps, "café ☕".chars().count());
    }

    #[test]
    fn counter_emits_nondecreasing_values_and_lands_exactly() {
        let mut counter = Counter::new(4_000_000);
        let mut last = 0;
        let mut elapsed = 0.0;
        while !counter.is_done() {
            let shown = counter.advance(16.0);
            assert!(shown >= last, "displayed value went backwards");
            assert!(shown <= counter.target(), "displayed value overshot");
            last = shown;
            elapsed += 16.0;
            assert!(elapsed <= COUNTER_DURATION_MS + 32.0, "counter never finished");
        }
        assert_eq!(counter.value(), 4_000_000);
    }

    #[test]
    fn counter_survives_irregular_frame_deltas() {
        let mut counter = Counter::with_duration(500, 2000.0);
        let mut last = 0;
        for delta in [16.0, 48.0, 3.0, 200.0, 0.0, 1000.0, 1000.0] {
            let shown = counter.advance(delta);
            assert!(shown >= last);
            last = shown;
        }
        assert!(counter.is_done());
        assert_eq!(counter.value(), 500);
    }

    #[test]
    fn counter_with_zero_target_is_immediately_done() {
        let mut counter = Counter::new(0);
        assert_eq!(counter.advance(16.0), 0);
        assert!(counter.is_done());
    }

    #[test]
    fn carousel_next_wraps_back_to_start() {
        let mut c = Carousel::new(4);
        c.go_to(2);
        for _ in 0..4 {
            c.next();
        }
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn carousel_prev_from_zero_wraps_to_last() {
        let mut c = Carousel::new(4);
        c.prev();
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn carousel_go_to_ignores_out_of_range() {
        let mut c = Carousel::new(4);
        c.go_to(3);
        c.go_to(9);
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn carousel_autoplay_advances_once_per_tick() {
        // 4 testimonials, 15s elapsed => 3 ticks => (start + 3) mod 4
        let mut c = Carousel::new(4);
        for _ in 0..3 {
            c.tick();
        }
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn carousel_hover_suppresses_autoplay() {
        let mut c = Carousel::new(4);
        c.suspend_autoplay();
        for _ in 0..3 {
            c.tick();
        }
        assert_eq!(c.index(), 0, "no transition may fire while suppressed");

        c.resume_autoplay();
        c.tick();
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn resuming_autoplay_waits_for_the_next_full_period() {
        let mut c = Carousel::new(4);
        c.tick();
        assert_eq!(c.index(), 1);

        c.suspend_autoplay();
        // a period elapsing mid-hover is discarded, not banked
        c.tick();
        c.resume_autoplay();
        assert_eq!(c.index(), 1, "resuming must not advance by itself");

        c.tick();
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn carousel_progress_spans_the_list() {
        let mut c = Carousel::new(4);
        assert_eq!(c.progress(), 25.0);
        c.go_to(3);
        assert_eq!(c.progress(), 100.0);
    }
}
