use crate::models::{RenderContext, TemplateVariant};
use crate::render::document::{Align, Cell, Ink, Node, Page, TextStyle};
use crate::render::sections::{self, EntryShape, Skin};
use crate::render::variants::SCREEN_WIDTH;
use crate::render::Template;

/// Variant B: colored sidebar (photo, identity, contact, badges) beside the
/// profile and timelines.
pub struct Centered;

const PHOTO_SIZE: f32 = 128.0;

fn sidebar_skin() -> Skin {
    let body = TextStyle::new(13.0, Ink::PrimaryContent);
    Skin {
        heading: TextStyle::new(18.0, Ink::PrimaryContent).bold().uppercase(),
        heading_rule: Some(Ink::PrimaryContent),
        body,
        title: body.bold(),
        subtitle: body,
        dates: TextStyle::new(12.0, Ink::PrimaryContent),
        badge_fill: Ink::PrimaryContent,
        badge_text: TextStyle::new(12.0, Ink::Primary),
        stars: None,
        accent: Ink::PrimaryContent,
        entry: EntryShape::Plain,
        gap: 12.0,
    }
}

fn main_skin() -> Skin {
    let body = TextStyle::new(14.0, Ink::BaseContent);
    Skin {
        heading: TextStyle::new(20.0, Ink::Primary).bold().uppercase(),
        heading_rule: Some(Ink::Primary),
        body,
        title: TextStyle::new(16.0, Ink::BaseContent).bold(),
        subtitle: TextStyle::new(14.0, Ink::Muted).bold(),
        dates: TextStyle::new(13.0, Ink::Muted).italic(),
        badge_fill: Ink::Tint,
        badge_text: body,
        stars: None,
        accent: Ink::Primary,
        entry: EntryShape::Bar,
        gap: 12.0,
    }
}

impl Template for Centered {
    fn variant(&self) -> TemplateVariant {
        TemplateVariant::B
    }

    fn compose(&self, ctx: &RenderContext) -> Vec<Page> {
        let side = sidebar_skin();
        let main = main_skin();
        let details = &ctx.data.personal_details;

        let mut sidebar = Vec::new();
        if let Some(photo) = sections::photo(ctx, PHOTO_SIZE, Align::Center) {
            sidebar.push(photo);
        }
        sidebar.extend([
            sections::full_name(
                details,
                TextStyle::new(24.0, Ink::PrimaryContent).bold().uppercase().align(Align::Center),
            ),
            Node::row(
                0.0,
                vec![
                    Cell::new(1.0, Node::Spacer(0.0)),
                    Cell::fixed(64.0, Node::Rule { ink: Ink::PrimaryContent, thickness: 4.0 }),
                    Cell::new(1.0, Node::Spacer(0.0)),
                ],
            ),
            sections::position(
                details,
                TextStyle::new(18.0, Ink::PrimaryContent).uppercase().align(Align::Center),
            ),
            Node::Spacer(16.0),
            sections::contacts(details, &side, Some("Contact")),
            sections::skills(&ctx.data.skills, &side, "Compétences"),
            sections::languages(&ctx.data.languages, &side, "Langues"),
            sections::hobbies(&ctx.data.hobbies, &side, "Loisirs"),
        ]);

        let content = Node::stack(
            32.0,
            vec![
                sections::profile(details, &main, Some("Profil")),
                sections::experiences(&ctx.data.experiences, &main, "Expériences"),
                sections::educations(&ctx.data.educations, &main, "Formations"),
            ],
        );

        let root = Node::row(
            0.0,
            vec![
                Cell::new(1.0, Node::stack(24.0, sidebar)).filled(Ink::Primary, 24.0),
                Cell::new(2.0, content).filled(Ink::Base, 32.0),
            ],
        );

        vec![Page {
            width: SCREEN_WIDTH,
            min_height: 0.0,
            padding: 64.0,
            fill: Ink::Base,
            root,
        }]
    }
}
