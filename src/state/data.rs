/// Presentation records for the slideshow
///
/// These structs are what the view layer reads. They are written only by
/// `Controller::render` and the reveal/dismiss transitions, never by the
/// widgets themselves.

/// Presentation state of one slide container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    /// Position in the ordered sequence (0-based)
    pub index: usize,
    /// Whether this slide is the one on screen
    pub active: bool,
    /// Hidden from assistive technology; always the inverse of `active`
    pub aria_hidden: bool,
    /// Whether the container can take keyboard focus
    pub focusable: bool,
}

impl Slide {
    /// An inactive slide, as it exists before the first render
    pub fn new(index: usize, focusable: bool) -> Self {
        Self {
            index,
            active: false,
            aria_hidden: true,
            focusable,
        }
    }
}

/// Clickable proxy for one slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    /// Index of the slide this dot selects
    pub index: usize,
    /// Mirrors the associated slide's `active` flag
    pub active: bool,
}

impl Indicator {
    /// Accessible label, 1-based for humans
    pub fn label(&self) -> String {
        format!("Go to slide {}", self.index + 1)
    }
}

/// The intro splash screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intro {
    /// Transition flag: the intro is fading out (visually hidden)
    pub hidden: bool,
    /// Still occupies layout space
    pub displayed: bool,
    pub aria_hidden: bool,
}

impl Default for Intro {
    fn default() -> Self {
        Self {
            hidden: false,
            displayed: true,
            aria_hidden: false,
        }
    }
}

/// The main slideshow area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Site {
    pub ready: bool,
    pub aria_hidden: bool,
}

impl Default for Site {
    fn default() -> Self {
        Self {
            ready: false,
            aria_hidden: true,
        }
    }
}

/// Where keyboard focus currently sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Nothing,
    Slide(usize),
}
