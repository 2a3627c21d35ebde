//! Slide definitions and their rendering into visual trees.
//!
//! Slide content is plain data ([`SlideLayout`]); rendering is a pure
//! function of that data, so calling [`SlideDefinition::render`] twice
//! always yields structurally identical trees.

use crate::tree::{Node, TextRole};
use serde::{Deserialize, Serialize};

/// One column of a pillars slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Pillar {
    /// Pillar heading.
    pub title: String,

    /// Optional icon name shown above the heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Supporting points, in display order.
    #[serde(default)]
    pub points: Vec<String>,
}

impl Pillar {
    /// Create a pillar with the given title and points.
    pub fn new<I, S>(title: impl Into<String>, points: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            icon: None,
            points: points.into_iter().map(Into::into).collect(),
        }
    }

    /// Attach an icon name.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    fn render(&self) -> Node {
        let mut children = Vec::new();
        if let Some(icon) = &self.icon {
            children.push(Node::icon(icon.clone()).with_class("w-8 h-8 text-blue-600 mb-4"));
        }
        children.push(Node::heading(2, self.title.clone()).with_class("text-xl font-semibold mb-3"));
        if !self.points.is_empty() {
            children.push(bullet_list(&self.points, "space-y-2 text-gray-700"));
        }
        Node::stack(children).with_class("bg-white rounded-lg shadow-md p-6")
    }
}

/// The content of a slide, by layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "snake_case", deny_unknown_fields)]
pub enum SlideLayout {
    /// Opening slide: large centered heading with optional subheading.
    Title {
        heading: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subheading: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        presenter: Option<String>,
    },

    /// Heading followed by a bullet list.
    Bullets {
        heading: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        intro: Option<String>,
        #[serde(default)]
        items: Vec<String>,
    },

    /// Heading followed by side-by-side pillar cards.
    Pillars {
        heading: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        intro: Option<String>,
        #[serde(default)]
        pillars: Vec<Pillar>,
    },

    /// A hand-built visual tree, rendered as-is.
    Custom { root: Node },
}

/// A single slide in a deck.
///
/// Immutable once constructed. Speaker notes travel with the slide but are
/// never part of the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideDefinition {
    id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,

    #[serde(flatten)]
    layout: SlideLayout,
}

impl SlideDefinition {
    /// Create a slide with the given id and content.
    pub fn new(id: impl Into<String>, layout: SlideLayout) -> Self {
        Self {
            id: id.into(),
            notes: None,
            layout,
        }
    }

    /// Attach speaker notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Stable identifier of this slide within its deck.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn layout(&self) -> &SlideLayout {
        &self.layout
    }

    /// Human-readable title: the slide heading, or the id when a custom
    /// tree has no heading.
    pub fn title(&self) -> &str {
        match &self.layout {
            SlideLayout::Title { heading, .. }
            | SlideLayout::Bullets { heading, .. }
            | SlideLayout::Pillars { heading, .. } => heading.as_str(),
            SlideLayout::Custom { root } => first_heading(root).unwrap_or(&self.id),
        }
    }

    /// Produce this slide's visual tree.
    pub fn render(&self) -> Node {
        match &self.layout {
            SlideLayout::Title {
                heading,
                subheading,
                presenter,
            } => {
                let mut children = vec![
                    Node::accent().with_class("w-24 h-1 bg-blue-600 mb-8"),
                    Node::heading(1, heading.clone())
                        .with_class("text-5xl font-bold text-gray-900 text-center"),
                ];
                if let Some(subheading) = subheading {
                    children.push(
                        Node::heading(2, subheading.clone())
                            .with_class("text-2xl text-gray-600 mt-4 text-center"),
                    );
                }
                if let Some(presenter) = presenter {
                    children.push(
                        Node::caption(presenter.clone())
                            .with_class("text-lg text-gray-500 mt-12 text-center"),
                    );
                }
                Node::stack(children)
                    .with_class("flex flex-col items-center justify-center h-full")
            }
            SlideLayout::Bullets {
                heading,
                intro,
                items,
            } => {
                let mut children = vec![
                    Node::heading(1, heading.clone()).with_class("text-4xl font-bold mb-4"),
                    Node::divider().with_class("border-blue-600 mb-6"),
                ];
                if let Some(intro) = intro {
                    children.push(Node::body(intro.clone()).with_class("text-xl text-gray-600 mb-6"));
                }
                children.push(bullet_list(items, "space-y-4 text-2xl"));
                Node::stack(children).with_class("p-12 h-full")
            }
            SlideLayout::Pillars {
                heading,
                intro,
                pillars,
            } => {
                let mut children = vec![
                    Node::heading(1, heading.clone()).with_class("text-4xl font-bold mb-4 text-center"),
                ];
                if let Some(intro) = intro {
                    children.push(
                        Node::body(intro.clone()).with_class("text-xl text-gray-600 mb-8 text-center"),
                    );
                }
                children.push(Node::divider().with_class("border-blue-600 mb-8"));
                let cards = pillars.iter().map(Pillar::render).collect();
                children.push(Node::grid(pillars.len().max(1), cards).with_class("gap-8"));
                Node::stack(children).with_class("p-12 h-full bg-gray-50")
            }
            SlideLayout::Custom { root } => root.clone(),
        }
    }
}

fn bullet_list(items: &[String], classes: &str) -> Node {
    Node::list(false, items.iter().map(|item| Node::body(item.clone())).collect())
        .with_class(classes)
}

fn first_heading(node: &Node) -> Option<&str> {
    match node {
        Node::Text {
            role: TextRole::Heading { .. },
            content,
            ..
        } => Some(content.as_str()),
        _ => node.children().iter().find_map(first_heading),
    }
}
