use crate::models::{RenderContext, TemplateVariant};
use crate::render::document::{Align, Cell, Ink, Node, Page, TextStyle};
use crate::render::sections::{self, EntryShape, Skin};
use crate::render::variants::SCREEN_WIDTH;
use crate::render::Template;

/// Variant C: header row, then a one-third / two-thirds grid on a fixed-height page.
pub struct Simple;

const PHOTO_SIZE: f32 = 160.0;
const PAGE_HEIGHT: f32 = 1200.0;

fn skin() -> Skin {
    let body = TextStyle::new(14.0, Ink::BaseContent);
    Skin {
        heading: TextStyle::new(18.0, Ink::Primary).bold(),
        heading_rule: Some(Ink::Tint),
        body,
        title: TextStyle::new(18.0, Ink::BaseContent).bold(),
        subtitle: TextStyle::new(14.0, Ink::Primary).bold(),
        dates: TextStyle::new(14.0, Ink::Primary),
        badge_fill: Ink::Tint,
        badge_text: body,
        stars: Some(Ink::Primary),
        accent: Ink::Primary,
        entry: EntryShape::Timeline,
        gap: 12.0,
    }
}

impl Template for Simple {
    fn variant(&self) -> TemplateVariant {
        TemplateVariant::C
    }

    fn compose(&self, ctx: &RenderContext) -> Vec<Page> {
        let skin = skin();
        let details = &ctx.data.personal_details;

        let identity = Node::stack(
            4.0,
            vec![
                sections::full_name(details, TextStyle::new(36.0, Ink::Primary).bold()),
                sections::position(details, TextStyle::new(24.0, Ink::BaseContent)),
                Node::Spacer(12.0),
                Node::flow(24.0, sections::contact_lines(details, &skin)),
            ],
        );

        // The photo frame is drawn even when empty, as a neutral disc.
        let frame = sections::photo(ctx, PHOTO_SIZE, Align::Left).unwrap_or(Node::Marker {
            ink: Ink::Tint,
            size: PHOTO_SIZE,
        });

        let header = Node::row(
            32.0,
            vec![Cell::fixed(PHOTO_SIZE, frame), Cell::new(1.0, identity)],
        );

        let left = Node::stack(
            32.0,
            vec![
                sections::profile(details, &skin, Some("Profil")),
                sections::skills(&ctx.data.skills, &skin, "Compétences"),
                sections::languages(&ctx.data.languages, &skin, "Langues"),
                sections::hobbies(&ctx.data.hobbies, &skin, "Centres d'intérêt"),
            ],
        );
        let right = Node::stack(
            40.0,
            vec![
                sections::experiences(&ctx.data.experiences, &skin, "Expériences"),
                sections::educations(&ctx.data.educations, &skin, "Formations"),
            ],
        );

        let root = Node::stack(
            32.0,
            vec![
                header,
                Node::Rule {
                    ink: Ink::Tint,
                    thickness: 2.0,
                },
                Node::row(32.0, vec![Cell::new(1.0, left), Cell::new(2.0, right)]),
            ],
        );

        vec![Page {
            width: SCREEN_WIDTH,
            min_height: PAGE_HEIGHT,
            padding: 48.0,
            fill: Ink::Base,
            root,
        }]
    }
}
