//! The built-in business proposal deck.

use crate::deck::Deck;
use crate::error::Result;
use crate::slide::{Pillar, SlideDefinition, SlideLayout};

pub const DECK_TITLE: &str = "Workforce Partnership Proposal";

/// Opening slide.
pub fn title_slide() -> SlideDefinition {
    SlideDefinition::new(
        "title",
        SlideLayout::Title {
            heading: "Workforce Partnership Proposal".to_string(),
            subheading: Some("Building sustainable pathways into skilled work".to_string()),
            presenter: Some("Prepared for the Regional Employment Board".to_string()),
        },
    )
    .with_notes("Introduce the team and the goal of the partnership.")
}

/// The three pathways the proposal offers.
pub fn work_pathways_slide() -> SlideDefinition {
    SlideDefinition::new(
        "work-pathways",
        SlideLayout::Pillars {
            heading: "Work Pathways".to_string(),
            intro: Some("Three complementary routes from training to employment".to_string()),
            pillars: vec![
                Pillar::new(
                    "Apprenticeships",
                    [
                        "Paid on-the-job training with partner employers",
                        "Nationally recognised qualifications",
                        "Mentoring throughout the placement",
                    ],
                )
                .with_icon("briefcase"),
                Pillar::new(
                    "Upskilling",
                    [
                        "Short courses for in-demand digital skills",
                        "Flexible evening and online delivery",
                        "Credits towards further study",
                    ],
                )
                .with_icon("graduation-cap"),
                Pillar::new(
                    "Direct Placement",
                    [
                        "Matching job-ready candidates to vacancies",
                        "Interview preparation and coaching",
                        "Six months of in-work support",
                    ],
                )
                .with_icon("handshake"),
            ],
        },
    )
    .with_notes("Spend most of the time here; ask which pathway matters most to them.")
}

/// The full proposal deck in presentation order.
pub fn deck() -> Result<Deck> {
    Deck::new(DECK_TITLE, vec![title_slide(), work_pathways_slide()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TextRenderer;

    #[test]
    fn test_deck_order() {
        let deck = deck().unwrap();
        let ids: Vec<&str> = deck.iter().map(|s| s.id()).collect();

        assert_eq!(deck.title(), DECK_TITLE);
        assert_eq!(ids, vec!["title", "work-pathways"]);
    }

    #[test]
    fn test_work_pathways_content() {
        let slide = work_pathways_slide();
        let tree = slide.render();
        let text = tree.text_content();

        assert_eq!(slide.title(), "Work Pathways");
        assert!(text.contains(&"Apprenticeships"));
        assert!(text.contains(&"Upskilling"));
        assert!(text.contains(&"Direct Placement"));
    }

    #[test]
    fn test_title_slide_renders_centered() {
        let renderer = TextRenderer::new().with_width(40);
        let lines = renderer.render(&title_slide().render());

        assert_eq!(lines[0].trim(), "WORKFORCE PARTNERSHIP PROPOSAL");
        assert!(lines[0].starts_with(' '));
    }
}
