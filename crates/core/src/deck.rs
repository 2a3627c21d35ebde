//! The deck: a fixed, ordered catalogue of slides.

use crate::error::{Error, Result};
use crate::slide::SlideDefinition;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// An ordered, non-empty collection of slides in presentation order.
///
/// The catalogue is fixed at construction; indices stay valid for the
/// lifetime of the deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deck {
    /// Presentation title.
    title: String,

    /// Slides in presentation order.
    slides: Vec<SlideDefinition>,
}

/// On-disk shape of a deck file, before invariants are checked.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DeckFile {
    #[serde(default)]
    title: String,
    slides: Vec<SlideDefinition>,
}

impl Deck {
    /// Create a deck from its slides.
    ///
    /// Fails with [`Error::EmptyDeck`] when `slides` is empty and with
    /// [`Error::InvalidDeck`] when two slides share an id.
    pub fn new(title: impl Into<String>, slides: Vec<SlideDefinition>) -> Result<Self> {
        if slides.is_empty() {
            return Err(Error::EmptyDeck);
        }

        validate_ids(&slides)?;

        let deck = Self {
            title: title.into(),
            slides,
        };
        log::debug!("Built deck '{}' with {} slides", deck.title, deck.slides.len());
        Ok(deck)
    }

    /// Parse a deck from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: DeckFile = serde_json::from_str(json)?;
        Self::new(file.title, file.slides)
    }

    /// Load a deck from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        log::debug!("Loading deck from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize the deck to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of slides; always at least one.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get the slide at `index`.
    pub fn slide_at(&self, index: usize) -> Result<&SlideDefinition> {
        self.slides.get(index).ok_or(Error::OutOfRange {
            index,
            len: self.slides.len(),
        })
    }

    /// Index of the slide with the given id, if any.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.slides.iter().position(|s| s.id() == id)
    }

    /// All slides in presentation order.
    pub fn slides(&self) -> &[SlideDefinition] {
        &self.slides
    }

    /// Iterate over slides in presentation order.
    pub fn iter(&self) -> std::slice::Iter<'_, SlideDefinition> {
        self.slides.iter()
    }
}

fn validate_ids(slides: &[SlideDefinition]) -> Result<()> {
    let mut seen = HashSet::new();
    for slide in slides {
        if slide.id().trim().is_empty() {
            return Err(Error::InvalidDeck("slide id must not be empty".to_string()));
        }
        if !seen.insert(slide.id()) {
            return Err(Error::InvalidDeck(format!(
                "duplicate slide id '{}'",
                slide.id()
            )));
        }
    }
    Ok(())
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a SlideDefinition;
    type IntoIter = std::slice::Iter<'a, SlideDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
