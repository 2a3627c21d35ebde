//! WASM wrapper around the deck navigator.
//!
//! This crate exposes a [`Presenter`] to JavaScript so a browser page can
//! paint the current slide's visual tree and forward key presses and clicks
//! as navigation calls.

use deck_core::{Deck, Navigator, TextRenderer};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Summary of one slide, for building a slide picker.
#[derive(Debug, Serialize, Deserialize)]
pub struct SlideSummary {
    /// 0-based position in the deck.
    pub index: usize,
    /// Slide id.
    pub id: String,
    /// Slide heading.
    pub title: String,
}

/// A navigator bound to a deck, driven from JavaScript.
#[wasm_bindgen]
pub struct Presenter {
    navigator: Navigator,
}

#[wasm_bindgen]
impl Presenter {
    /// Create a presenter for a JSON deck, or for the built-in proposal deck
    /// when `deck_json` is omitted.
    ///
    /// Throws if the deck JSON is malformed or violates deck invariants.
    #[wasm_bindgen(constructor)]
    pub fn new(deck_json: Option<String>) -> Result<Presenter, JsValue> {
        let deck = load_deck(deck_json.as_deref()).map_err(|e| JsValue::from_str(&e))?;
        Ok(Presenter {
            navigator: Navigator::new(deck),
        })
    }

    /// Advance one slide. Returns whether the slide changed.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        self.navigator.next()
    }

    /// Go back one slide. Returns whether the slide changed.
    pub fn previous(&mut self) -> bool {
        self.navigator.previous()
    }

    pub fn first(&mut self) {
        self.navigator.first();
    }

    pub fn last(&mut self) {
        self.navigator.last();
    }

    /// Jump to a 0-based slide index. Throws when out of range; the current
    /// slide is left unchanged.
    #[wasm_bindgen(js_name = jumpTo)]
    pub fn jump_to(&mut self, index: usize) -> Result<(), JsValue> {
        self.navigator
            .jump_to(index)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter, js_name = currentIndex)]
    pub fn current_index(&self) -> usize {
        self.navigator.current_index()
    }

    #[wasm_bindgen(getter, js_name = slideCount)]
    pub fn slide_count(&self) -> usize {
        self.navigator.deck().slide_count()
    }

    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.navigator.deck().title().to_string()
    }

    /// The current slide's visual tree as a plain JavaScript object.
    pub fn current(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.navigator.render_current())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// The current slide rendered as plain text at the given width.
    #[wasm_bindgen(js_name = currentText)]
    pub fn current_text(&self, width: usize) -> String {
        TextRenderer::new()
            .with_width(width)
            .render_slide(self.navigator.current())
    }

    /// Speaker notes of the current slide, if any.
    pub fn notes(&self) -> Option<String> {
        self.navigator.current().notes().map(str::to_string)
    }

    /// Id, title and index of every slide.
    pub fn slides(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&slide_summaries(self.navigator.deck()))
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

fn load_deck(deck_json: Option<&str>) -> Result<Deck, String> {
    match deck_json {
        Some(json) => Deck::from_json(json).map_err(|e| e.to_string()),
        None => deck_core::proposal::deck().map_err(|e| e.to_string()),
    }
}

fn slide_summaries(deck: &Deck) -> Vec<SlideSummary> {
    deck.iter()
        .enumerate()
        .map(|(index, slide)| SlideSummary {
            index,
            id: slide.id().to_string(),
            title: slide.title().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_builtin_deck() {
        let deck = load_deck(None).unwrap();
        assert_eq!(deck.slide_count(), 2);
    }

    #[test]
    fn test_load_deck_json_errors_are_messages() {
        let err = load_deck(Some(r#"{"slides": []}"#)).unwrap_err();
        assert_eq!(err, "Deck contains no slides");

        assert!(load_deck(Some("not json")).is_err());
    }

    #[test]
    fn test_slide_summaries() {
        let deck = load_deck(None).unwrap();
        let summaries = slide_summaries(&deck);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[1].index, 1);
        assert_eq!(summaries[1].id, "work-pathways");
        assert_eq!(summaries[1].title, "Work Pathways");
    }
}
