use serde::Deserialize;

use super::data::Slide;
use crate::error::{Error, Result};

/// The deck shipped with the application
const BUILTIN_DECK: &str = include_str!("../../assets/deck.json");

/// Content of one slide container
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SlideContent {
    pub title: String,
    pub body: String,
    /// Containers are focusable unless the deck says otherwise
    #[serde(default = "default_focusable")]
    pub focusable: bool,
}

fn default_focusable() -> bool {
    true
}

/// The fixed document structure the presentation runs over.
/// The slide order and count never change after it is loaded.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Deck {
    /// Heading on the intro screen
    pub title: String,
    /// Line under the heading
    #[serde(default)]
    pub tagline: String,
    /// Caption of the start control
    #[serde(default = "default_start_label")]
    pub start_label: String,
    pub slides: Vec<SlideContent>,
}

fn default_start_label() -> String {
    "Start".to_string()
}

impl Deck {
    /// Load the deck compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_DECK)
    }

    /// Parse a deck document. A deck with no slides is rejected here so
    /// navigation never has to deal with an empty sequence.
    pub fn from_json(json: &str) -> Result<Self> {
        let deck: Deck = serde_json::from_str(json).map_err(Error::Deck)?;
        if deck.slides.is_empty() {
            return Err(Error::NoSlides);
        }
        Ok(deck)
    }

    /// Number of slides
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Initial (inactive) presentation records, one per container
    pub fn slide_states(&self) -> Vec<Slide> {
        self.slides
            .iter()
            .enumerate()
            .map(|(index, content)| Slide::new(index, content.focusable))
            .collect()
    }

    pub fn slide(&self, index: usize) -> Option<&SlideContent> {
        self.slides.get(index)
    }
}
