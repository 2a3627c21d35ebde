//! Plain-text rendering of visual trees for terminal display.
//!
//! Block containers separate their children with a blank line, lists use
//! hanging indents, and any node carrying the `text-center` utility class is
//! centered within the available width.

use crate::deck::Deck;
use crate::slide::SlideDefinition;
use crate::tree::{Layout, Node, Shape, TextRole};
use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Regex to collapse runs of whitespace (including newlines) into one space.
static WHITESPACE_COLLAPSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Utility class that centers a node's lines.
const CENTER_CLASS: &str = "text-center";

/// Narrowest supported render width.
pub const MIN_WIDTH: usize = 20;

/// Renders visual trees into lines of terminal text.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    /// Maximum line width in characters.
    width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { width: 72 }
    }
}

impl TextRenderer {
    /// Create a renderer with the default 72-column width.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line width. Values below [`MIN_WIDTH`] are raised to it.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(MIN_WIDTH);
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Render a tree into lines.
    pub fn render(&self, node: &Node) -> Vec<String> {
        let mut lines = Vec::new();
        self.render_node(node, self.width, &mut lines);
        lines
    }

    /// Render a slide's tree as a single string.
    pub fn render_slide(&self, slide: &SlideDefinition) -> String {
        self.render(&slide.render()).join("\n")
    }

    /// Render every slide of a deck, each under a `[n/total] id` header.
    ///
    /// # Example output
    /// ```text
    /// [1/2] title
    /// ...
    ///
    /// [2/2] work-pathways
    /// ...
    /// ```
    pub fn render_deck(&self, deck: &Deck) -> String {
        let total = deck.slide_count();
        let slides: Vec<String> = deck
            .iter()
            .enumerate()
            .map(|(i, slide)| {
                format!("[{}/{}] {}\n{}", i + 1, total, slide.id(), self.render_slide(slide))
            })
            .collect();

        format!("{}\n", slides.join("\n\n"))
    }

    fn render_node(&self, node: &Node, width: usize, out: &mut Vec<String>) {
        let mut lines = Vec::new();

        match node {
            Node::Container {
                layout, children, ..
            } => match layout {
                Layout::List { ordered } => {
                    for (i, child) in children.iter().enumerate() {
                        let marker = if *ordered {
                            format!("{}. ", i + 1)
                        } else {
                            "- ".to_string()
                        };
                        let indent = " ".repeat(marker.chars().count());
                        let inner_width = width.saturating_sub(indent.len()).max(1);

                        let mut item = Vec::new();
                        self.render_node(child, inner_width, &mut item);
                        for (j, line) in item.into_iter().enumerate() {
                            let prefix = if j == 0 { &marker } else { &indent };
                            lines.push(format!("{}{}", prefix, line).trim_end().to_string());
                        }
                    }
                }
                Layout::Stack | Layout::Row | Layout::Grid { .. } => {
                    for child in children {
                        let mut block = Vec::new();
                        self.render_node(child, width, &mut block);
                        if block.is_empty() {
                            continue;
                        }
                        if !lines.is_empty() {
                            lines.push(String::new());
                        }
                        lines.extend(block);
                    }
                }
            },
            Node::Text { role, content, .. } => {
                let text = normalize_text(content);
                if text.is_empty() {
                    return;
                }
                match role {
                    TextRole::Heading { level } => {
                        let text = if *level <= 1 { text.to_uppercase() } else { text };
                        let wrapped = wrap(&text, width);
                        let underline_len = wrapped.iter().map(|l| l.chars().count()).max().unwrap_or(0);
                        let underline = if *level <= 1 { '=' } else { '-' };
                        lines.extend(wrapped);
                        lines.push(underline.to_string().repeat(underline_len));
                    }
                    TextRole::Body => lines.extend(wrap(&text, width)),
                    TextRole::Caption => {
                        let inner = width.saturating_sub(2).max(1);
                        lines.extend(wrap(&text, inner).into_iter().map(|l| format!("  {}", l)));
                    }
                    TextRole::Emphasis => lines.extend(wrap(&format!("*{}*", text), width)),
                }
            }
            Node::Decoration { shape, .. } => match shape {
                Shape::Divider => lines.push("\u{2500}".repeat(width)),
                Shape::Accent => {}
                Shape::Icon { name } => lines.push(format!("[{}]", normalize_text(name))),
            },
        }

        if node.style().has_class(CENTER_CLASS) {
            lines = lines.into_iter().map(|l| center(&l, width)).collect();
        }

        out.extend(lines);
    }
}

/// Normalize text for layout: NFC composition, collapsed whitespace, trimmed.
pub fn normalize_text(text: &str) -> String {
    let composed: String = text.nfc().collect();
    WHITESPACE_COLLAPSE_REGEX
        .replace_all(&composed, " ")
        .trim()
        .to_string()
}

/// Word-wrap normalized text to `width` characters. Words longer than the
/// width are split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split(' ') {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        if word.is_empty() {
            continue;
        }

        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 {
        lines.push(current);
    }

    lines
}

fn center(line: &str, width: usize) -> String {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let len = trimmed.chars().count();
    let pad = width.saturating_sub(len) / 2;
    format!("{}{}", " ".repeat(pad), trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slide::SlideLayout;

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  Hello \t  world\n again "), "Hello world again");
        // Decomposed e + combining acute composes to a single char.
        assert_eq!(normalize_text("Cafe\u{301}"), "Caf\u{e9}");
    }

    #[test]
    fn test_wrap_words() {
        assert_eq!(
            wrap("one two three four", 9),
            vec!["one two", "three", "four"]
        );
        assert_eq!(wrap("short", 20), vec!["short"]);
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap("abcdefghij k", 4), vec!["abcd", "efgh", "ij k"]);
    }

    #[test]
    fn test_width_has_minimum() {
        assert_eq!(TextRenderer::new().with_width(5).width(), MIN_WIDTH);
        assert_eq!(TextRenderer::new().width(), 72);
    }

    #[test]
    fn test_heading_underlines() {
        let renderer = TextRenderer::new();

        assert_eq!(renderer.render(&Node::heading(1, "Our Proposal")), vec!["OUR PROPOSAL", "============"]);
        assert_eq!(renderer.render(&Node::heading(2, "Scope")), vec!["Scope", "-----"]);
    }

    #[test]
    fn test_stack_separates_blocks() {
        let tree = Node::stack(vec![
            Node::accent(),
            Node::body("First"),
            Node::emphasis("Second"),
            Node::caption("Third"),
        ]);
        let lines = TextRenderer::new().render(&tree);

        assert_eq!(lines, vec!["First", "", "*Second*", "", "  Third"]);
    }

    #[test]
    fn test_lists_use_hanging_indent() {
        let renderer = TextRenderer::new().with_width(20);
        let tree = Node::list(
            true,
            vec![Node::body("alpha beta gamma delta"), Node::body("omega")],
        );

        assert_eq!(
            renderer.render(&tree),
            vec!["1. alpha beta gamma", "   delta", "2. omega"]
        );

        let bullets = Node::list(false, vec![Node::body("item")]);
        assert_eq!(renderer.render(&bullets), vec!["- item"]);
    }

    #[test]
    fn test_center_class() {
        let renderer = TextRenderer::new().with_width(20);
        let tree = Node::body("middle").with_class("text-center");

        assert_eq!(renderer.render(&tree), vec!["       middle"]);
    }

    #[test]
    fn test_decorations() {
        let renderer = TextRenderer::new().with_width(20);

        assert_eq!(renderer.render(&Node::divider()), vec!["\u{2500}".repeat(20)]);
        assert!(renderer.render(&Node::accent()).is_empty());
        assert_eq!(renderer.render(&Node::icon("briefcase")), vec!["[briefcase]"]);
    }

    #[test]
    fn test_empty_text_renders_nothing() {
        let tree = Node::stack(vec![Node::body("   "), Node::body("kept")]);
        assert_eq!(TextRenderer::new().render(&tree), vec!["kept"]);
    }

    #[test]
    fn test_render_deck_headers() {
        let slides = vec![
            SlideDefinition::new(
                "a",
                SlideLayout::Bullets {
                    heading: "Alpha".to_string(),
                    intro: None,
                    items: vec![],
                },
            ),
            SlideDefinition::new(
                "b",
                SlideLayout::Custom {
                    root: Node::body("Beta"),
                },
            ),
        ];
        let deck = Deck::new("Deck", slides).unwrap();
        let output = TextRenderer::new().with_width(20).render_deck(&deck);

        let divider = "\u{2500}".repeat(20);
        let expected = format!("[1/2] a\nALPHA\n=====\n\n{}\n\n[2/2] b\nBeta\n", divider);
        assert_eq!(output, expected);
    }
}
