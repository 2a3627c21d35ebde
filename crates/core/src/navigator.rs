//! Cursor over a deck.
//!
//! Movement is clamped at both ends: `next` on the last slide and
//! `previous` on the first slide are no-ops. There is no wrap-around.

use crate::deck::Deck;
use crate::error::{Error, Result};
use crate::slide::SlideDefinition;
use crate::tree::Node;

/// A navigation request forwarded by a display host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    First,
    Last,
    /// Jump to a 0-based slide index.
    JumpTo(usize),
}

/// Tracks the currently visible slide of a deck.
#[derive(Debug, Clone)]
pub struct Navigator {
    deck: Deck,

    /// Invariant: `current < deck.slide_count()`.
    current: usize,
}

impl Navigator {
    /// Start a presentation on the first slide.
    pub fn new(deck: Deck) -> Self {
        Self { deck, current: 0 }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// 0-based index of the visible slide.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The visible slide.
    pub fn current(&self) -> &SlideDefinition {
        &self.deck.slides()[self.current]
    }

    /// Render the visible slide.
    pub fn render_current(&self) -> Node {
        self.current().render()
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.deck.slide_count()
    }

    /// 1-based position and total slide count, for progress display.
    pub fn progress(&self) -> (usize, usize) {
        (self.current + 1, self.deck.slide_count())
    }

    /// Advance one slide. Returns whether the cursor moved.
    // Not an iterator: the cursor clamps at the last slide instead of ending.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current += 1;
        log::debug!("next -> slide {}", self.current);
        true
    }

    /// Go back one slide. Returns whether the cursor moved.
    pub fn previous(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current -= 1;
        log::debug!("previous -> slide {}", self.current);
        true
    }

    pub fn first(&mut self) {
        self.current = 0;
    }

    pub fn last(&mut self) {
        self.current = self.deck.slide_count() - 1;
    }

    /// Jump to a 0-based index. On error the cursor is unchanged.
    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        let len = self.deck.slide_count();
        if index >= len {
            log::warn!("Rejected jump to slide {} (deck has {} slides)", index, len);
            return Err(Error::OutOfRange { index, len });
        }
        self.current = index;
        log::debug!("jump -> slide {}", self.current);
        Ok(())
    }

    /// Jump to the slide with the given id, returning its index.
    pub fn jump_to_id(&mut self, id: &str) -> Result<usize> {
        let index = self
            .deck
            .position_of(id)
            .ok_or_else(|| Error::UnknownSlide(id.to_string()))?;
        self.current = index;
        Ok(index)
    }

    /// Apply a host command. Only `JumpTo` can fail.
    pub fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Next => {
                self.next();
            }
            Command::Previous => {
                self.previous();
            }
            Command::First => self.first(),
            Command::Last => self.last(),
            Command::JumpTo(index) => self.jump_to(index)?,
        }
        Ok(())
    }
}
