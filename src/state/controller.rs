use std::num::NonZeroUsize;
use std::time::Duration;

use super::data::{Focus, Indicator, Intro, Site, Slide};
use super::settings::Timing;
use crate::error::{Error, Result};

/// Keyboard actions the controller understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Right,
    Left,
    Cancel,
}

/// Second half of a reveal or dismiss, applied after a delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStep {
    /// Take the faded-out intro out of the layout
    CollapseIntro,
    /// Fade the intro back in and expose it to assistive technology
    ShowIntro,
}

/// Work the controller asks the application to carry out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Deliver `step` back through `Controller::finish` after `delay`
    Schedule {
        delay: Duration,
        step: TransitionStep,
        epoch: u64,
    },
    /// Scroll the view back to the top
    ScrollToTop,
    /// Pull keyboard focus out of any text field onto the slide stage
    FocusStage,
}

/// The presentation controller.
///
/// Owns the navigation state (`current`, `revealed`) and every
/// presentation record. Event handlers call the navigation methods;
/// `render` is the only place slide and indicator flags are written.
#[derive(Debug, Clone)]
pub struct Controller {
    len: NonZeroUsize,
    current: usize,
    revealed: bool,
    slides: Vec<Slide>,
    indicators: Vec<Indicator>,
    intro: Intro,
    site: Site,
    focus: Focus,
    /// Bumped on every reveal/dismiss; deferred steps from older epochs are dropped
    epoch: u64,
    timing: Timing,
}

impl Controller {
    /// Build the controller over a fixed slide sequence: create one
    /// indicator per slide, then render slide 0.
    pub fn new(slides: Vec<Slide>, timing: Timing) -> Result<Self> {
        let len = NonZeroUsize::new(slides.len()).ok_or(Error::NoSlides)?;

        let mut controller = Self {
            len,
            current: 0,
            revealed: false,
            slides,
            indicators: Vec::new(),
            intro: Intro::default(),
            site: Site::default(),
            focus: Focus::Nothing,
            epoch: 0,
            timing,
        };
        controller.build_indicators();
        controller.render();

        Ok(controller)
    }

    fn build_indicators(&mut self) {
        self.indicators = (0..self.len.get())
            .map(|index| Indicator {
                index,
                active: false,
            })
            .collect();
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    pub fn intro(&self) -> Intro {
        self.intro
    }

    pub fn site(&self) -> Site {
        self.site
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Navigate to `index`, wrapping circularly in both directions
    pub fn go_to(&mut self, index: isize) {
        let len = self.len.get() as isize;
        self.current = index.rem_euclid(len) as usize;
        self.render();
    }

    pub fn next(&mut self) {
        self.go_to(self.current as isize + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.current as isize - 1);
    }

    /// Write the active/hidden flags of every slide and indicator from
    /// `current`, then move focus to the active slide if it accepts focus.
    pub fn render(&mut self) {
        let current = self.current;

        for slide in &mut self.slides {
            slide.active = slide.index == current;
            slide.aria_hidden = !slide.active;
        }
        for indicator in &mut self.indicators {
            indicator.active = indicator.index == current;
        }

        self.focus_current();
    }

    fn focus_current(&mut self) {
        if let Some(slide) = self.slides.get(self.current) {
            if slide.focusable {
                self.focus = Focus::Slide(slide.index);
            }
        }
    }

    /// Hide the intro and show the slideshow. The intro fades at once but
    /// keeps its layout space until the returned timer fires.
    pub fn reveal(&mut self) -> Vec<Effect> {
        self.epoch += 1;
        self.revealed = true;

        self.intro.hidden = true;
        self.intro.aria_hidden = true;
        self.site.ready = true;
        self.site.aria_hidden = false;
        self.focus_current();

        log::info!("🎬 Presentation revealed at slide {}", self.current + 1);

        vec![Effect::Schedule {
            delay: self.timing.reveal_delay,
            step: TransitionStep::CollapseIntro,
            epoch: self.epoch,
        }]
    }

    /// Return to the intro screen. Layout is restored immediately; the
    /// intro fades back in once the returned timer fires.
    pub fn dismiss(&mut self) -> Vec<Effect> {
        self.epoch += 1;
        self.revealed = false;

        self.intro.displayed = true;
        self.site.ready = false;
        self.site.aria_hidden = true;

        log::info!("↩️  Back to intro");

        vec![
            Effect::Schedule {
                delay: self.timing.dismiss_delay,
                step: TransitionStep::ShowIntro,
                epoch: self.epoch,
            },
            Effect::ScrollToTop,
        ]
    }

    /// Apply a deferred transition step. Returns `false` when the step
    /// was superseded by a later reveal/dismiss and nothing changed.
    pub fn finish(&mut self, step: TransitionStep, epoch: u64) -> bool {
        if epoch != self.epoch {
            log::debug!(
                "Dropping stale {:?} (epoch {} superseded by {})",
                step,
                epoch,
                self.epoch
            );
            return false;
        }

        match step {
            TransitionStep::CollapseIntro => {
                self.intro.displayed = false;
            }
            TransitionStep::ShowIntro => {
                self.intro.hidden = false;
                self.intro.aria_hidden = false;
            }
        }
        true
    }

    /// Submit the "go to slide" field. `input` is a 1-based slide number;
    /// anything else leaves the position alone. Either way the field gives
    /// up keyboard focus so the arrow keys reach the slides again.
    pub fn jump(&mut self, input: &str) -> Vec<Effect> {
        match input.trim().parse::<isize>() {
            Ok(number) => self.go_to(number.saturating_sub(1)),
            Err(_) => log::warn!("Not a slide number: {:?}", input),
        }
        vec![Effect::FocusStage]
    }

    /// Handle a navigation key. Keys pressed while a text-entry widget
    /// has focus are ignored.
    pub fn key(&mut self, key: NavKey, in_text_entry: bool) -> Vec<Effect> {
        if in_text_entry {
            log::debug!("Ignoring {:?}: focus is in a text field", key);
            return Vec::new();
        }

        match key {
            NavKey::Right => {
                self.next();
                Vec::new()
            }
            NavKey::Left => {
                self.prev();
                Vec::new()
            }
            NavKey::Cancel => self.dismiss(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn controller(n: usize) -> Controller {
        let slides = (0..n).map(|i| Slide::new(i, true)).collect();
        Controller::new(slides, Timing::default()).unwrap()
    }

    fn active_slides(c: &Controller) -> Vec<usize> {
        c.slides().iter().filter(|s| s.active).map(|s| s.index).collect()
    }

    fn active_indicators(c: &Controller) -> Vec<usize> {
        c.indicators().iter().filter(|d| d.active).map(|d| d.index).collect()
    }

    fn scheduled(effects: &[Effect]) -> (TransitionStep, u64, Duration) {
        effects
            .iter()
            .find_map(|e| match *e {
                Effect::Schedule { delay, step, epoch } => Some((step, epoch, delay)),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_initial_render() {
        let c = controller(4);
        assert_eq!(c.current(), 0);
        assert!(!c.revealed());
        assert_eq!(c.indicators().len(), 4);
        assert_eq!(active_slides(&c), vec![0]);
        assert_eq!(active_indicators(&c), vec![0]);
        assert!(!c.slides()[0].aria_hidden);
        assert!(c.slides()[1..].iter().all(|s| s.aria_hidden));
        assert_eq!(c.focus(), Focus::Slide(0));
        assert_eq!(c.intro(), Intro::default());
        assert_eq!(c.site(), Site::default());
    }

    #[test]
    fn test_empty_sequence_is_rejected() {
        let result = Controller::new(Vec::new(), Timing::default());
        assert!(matches!(result, Err(Error::NoSlides)));
    }

    #[test]
    fn test_wraparound_scenario() {
        let mut c = controller(3);
        c.next();
        assert_eq!(c.current(), 1);
        c.next();
        assert_eq!(c.current(), 2);
        c.next();
        assert_eq!(c.current(), 0);
        c.prev();
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn test_single_slide_wraps_to_itself() {
        let mut c = controller(1);
        c.next();
        assert_eq!(c.current(), 0);
        c.prev();
        assert_eq!(c.current(), 0);
        assert_eq!(active_slides(&c), vec![0]);
    }

    #[test]
    fn test_indicator_selects_slide_directly() {
        let mut c = controller(5);
        c.go_to(2);
        assert_eq!(c.current(), 2);
        assert_eq!(active_indicators(&c), vec![2]);
        assert_eq!(c.focus(), Focus::Slide(2));
    }

    #[test]
    fn test_go_to_current_changes_nothing() {
        let mut c = controller(4);
        c.go_to(3);
        let before = c.clone();
        c.go_to(c.current() as isize);
        assert_eq!(c.current(), before.current());
        assert_eq!(c.slides(), before.slides());
        assert_eq!(c.indicators(), before.indicators());
        assert_eq!(c.focus(), before.focus());
    }

    #[test]
    fn test_unfocusable_slide_keeps_previous_focus() {
        let slides = vec![Slide::new(0, true), Slide::new(1, false), Slide::new(2, true)];
        let mut c = Controller::new(slides, Timing::default()).unwrap();

        c.next();
        assert_eq!(c.current(), 1);
        assert_eq!(c.focus(), Focus::Slide(0));

        c.next();
        assert_eq!(c.focus(), Focus::Slide(2));
    }

    #[test]
    fn test_unfocusable_first_slide_leaves_focus_empty() {
        let slides = vec![Slide::new(0, false), Slide::new(1, true)];
        let c = Controller::new(slides, Timing::default()).unwrap();
        assert_eq!(c.focus(), Focus::Nothing);
    }

    #[test]
    fn test_reveal_then_collapse() {
        let mut c = controller(3);
        let effects = c.reveal();

        assert!(c.revealed());
        assert!(c.site().ready);
        assert!(!c.site().aria_hidden);
        assert!(c.intro().hidden);
        assert!(c.intro().aria_hidden);
        // Still occupying space until the timer fires
        assert!(c.intro().displayed);

        let (step, epoch, delay) = scheduled(&effects);
        assert_eq!(step, TransitionStep::CollapseIntro);
        assert_eq!(delay, Duration::from_millis(500));

        assert!(c.finish(step, epoch));
        assert!(!c.intro().displayed);
    }

    #[test]
    fn test_reveal_twice_is_harmless() {
        let mut c = controller(3);
        c.next();
        let first = c.reveal();
        let (step, epoch, _) = scheduled(&first);
        c.finish(step, epoch);

        let second = c.reveal();
        let (step, epoch, _) = scheduled(&second);
        assert!(c.finish(step, epoch));

        assert!(c.revealed());
        assert_eq!(c.current(), 1);
        assert!(!c.intro().displayed);
        assert!(c.site().ready);
    }

    #[test]
    fn test_dismiss_restores_intro() {
        let mut c = controller(3);
        let (step, epoch, _) = scheduled(&c.reveal());
        c.finish(step, epoch);

        let effects = c.dismiss();
        assert!(effects.contains(&Effect::ScrollToTop));
        assert!(!c.revealed());
        assert!(!c.site().ready);
        assert!(c.site().aria_hidden);
        assert!(c.intro().displayed);
        // Fade-in waits for the short delay
        assert!(c.intro().hidden);

        let (step, epoch, delay) = scheduled(&effects);
        assert_eq!(step, TransitionStep::ShowIntro);
        assert_eq!(delay, Duration::from_millis(10));

        assert!(c.finish(step, epoch));
        assert_eq!(c.intro(), Intro::default());
    }

    #[test]
    fn test_rapid_reveal_dismiss_drops_stale_collapse() {
        let mut c = controller(3);
        let (collapse, collapse_epoch, _) = scheduled(&c.reveal());
        let (show, show_epoch, _) = scheduled(&c.dismiss());

        // The short dismiss timer fires first, then the stale reveal timer
        assert!(c.finish(show, show_epoch));
        assert!(!c.finish(collapse, collapse_epoch));

        assert!(c.intro().displayed);
        assert!(!c.intro().hidden);
        assert!(!c.revealed());
    }

    #[test]
    fn test_rapid_dismiss_reveal_drops_stale_show() {
        let mut c = controller(3);
        let (show, show_epoch, _) = scheduled(&c.dismiss());
        let (collapse, collapse_epoch, _) = scheduled(&c.reveal());

        assert!(!c.finish(show, show_epoch));
        assert!(c.intro().hidden);
        assert!(c.finish(collapse, collapse_epoch));
        assert!(!c.intro().displayed);
    }

    #[test]
    fn test_keys_navigate() {
        let mut c = controller(3);
        assert!(c.key(NavKey::Right, false).is_empty());
        assert_eq!(c.current(), 1);
        assert!(c.key(NavKey::Left, false).is_empty());
        assert!(c.key(NavKey::Left, false).is_empty());
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn test_keys_ignored_in_text_entry() {
        let mut c = controller(3);
        c.reveal();
        let before = c.clone();

        for key in [NavKey::Right, NavKey::Left, NavKey::Cancel] {
            assert!(c.key(key, true).is_empty());
        }

        assert_eq!(c.current(), before.current());
        assert!(c.revealed());
        assert_eq!(c.site(), before.site());
        assert_eq!(c.intro(), before.intro());
    }

    #[test]
    fn test_cancel_key_dismisses() {
        let mut c = controller(3);
        c.reveal();
        let effects = c.key(NavKey::Cancel, false);
        assert!(!c.revealed());
        assert!(effects.contains(&Effect::ScrollToTop));
    }

    #[test]
    fn test_jump_releases_text_focus() {
        let mut c = controller(5);
        assert_eq!(c.jump(" 4 "), vec![Effect::FocusStage]);
        assert_eq!(c.current(), 3);
        assert_eq!(c.focus(), Focus::Slide(3));

        // Wraparound applies to typed numbers too
        c.jump("0");
        assert_eq!(c.current(), 4);

        assert_eq!(c.jump("four"), vec![Effect::FocusStage]);
        assert_eq!(c.current(), 4);
    }

    #[test]
    fn test_indicator_labels() {
        let c = controller(3);
        assert_eq!(c.indicators()[0].label(), "Go to slide 1");
        assert_eq!(c.indicators()[2].label(), "Go to slide 3");
    }

    proptest! {
        #[test]
        fn prop_go_to_wraps(n in 1usize..20, i in -1000isize..1000) {
            let mut c = controller(n);
            c.go_to(i);
            let n = n as isize;
            prop_assert_eq!(c.current() as isize, ((i % n) + n) % n);
        }

        #[test]
        fn prop_next_prev_round_trip(n in 1usize..20, start in 0usize..20) {
            let mut c = controller(n);
            c.go_to(start as isize);
            let before = c.current();
            c.next();
            c.prev();
            prop_assert_eq!(c.current(), before);
        }

        #[test]
        fn prop_exactly_one_active(n in 1usize..20, moves in proptest::collection::vec(-3isize..4, 0..30)) {
            let mut c = controller(n);
            for m in moves {
                c.go_to(c.current() as isize + m);
                prop_assert_eq!(active_slides(&c), vec![c.current()]);
                prop_assert_eq!(active_indicators(&c), vec![c.current()]);
                prop_assert!(c.slides().iter().all(|s| s.aria_hidden != s.active));
            }
        }
    }
}
