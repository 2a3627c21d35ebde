//! Core types for slide-deck presentation: the visual tree, slide
//! definitions, the deck catalogue, the navigator, and a plain-text
//! renderer for terminal hosts.

pub mod deck;
pub mod error;
pub mod navigator;
pub mod proposal;
pub mod render;
pub mod slide;
pub mod tree;

pub use deck::Deck;
pub use error::{Error, Result};
pub use navigator::{Command, Navigator};
pub use render::TextRenderer;
pub use slide::{Pillar, SlideDefinition, SlideLayout};
pub use tree::{Layout, Node, Shape, Style, TextRole};
