use crate::layout::font_metrics::FontFamily;
use crate::models::{RenderContext, TemplateVariant};
use crate::render::document::{Align, Cell, Ink, Node, Page, TextStyle};
use crate::render::sections::{self, EntryShape, Skin};
use crate::render::variants::SCREEN_WIDTH;
use crate::render::Template;

/// Variant A: single column, header band with photo, sections stacked.
pub struct Classic;

const PHOTO_SIZE: f32 = 128.0;

fn skin() -> Skin {
    let body = TextStyle::new(14.0, Ink::BaseContent);
    Skin {
        heading: TextStyle::new(20.0, Ink::Primary).bold().uppercase(),
        heading_rule: Some(Ink::Primary),
        body,
        title: TextStyle::new(16.0, Ink::BaseContent).bold(),
        subtitle: TextStyle::new(14.0, Ink::Primary).bold(),
        dates: TextStyle::new(13.0, Ink::Muted).italic(),
        badge_fill: Ink::Tint,
        badge_text: TextStyle::new(13.0, Ink::BaseContent),
        stars: Some(Ink::Primary),
        accent: Ink::Primary,
        entry: EntryShape::Plain,
        gap: 10.0,
    }
}

impl Template for Classic {
    fn variant(&self) -> TemplateVariant {
        TemplateVariant::A
    }

    fn font(&self) -> FontFamily {
        FontFamily::Serif
    }

    fn compose(&self, ctx: &RenderContext) -> Vec<Page> {
        let skin = skin();
        let details = &ctx.data.personal_details;

        let identity = Node::stack(
            6.0,
            vec![
                sections::full_name(details, TextStyle::new(34.0, Ink::Primary).bold()),
                sections::position(details, TextStyle::new(20.0, Ink::BaseContent)),
                Node::Spacer(6.0),
                sections::contacts(details, &skin, None),
            ],
        );

        let mut header_cells = Vec::new();
        if let Some(photo) = sections::photo(ctx, PHOTO_SIZE, Align::Left) {
            header_cells.push(Cell::fixed(PHOTO_SIZE, photo));
        }
        header_cells.push(Cell::new(1.0, identity));

        let root = Node::stack(
            24.0,
            vec![
                Node::panel(Ink::Tint, 24.0, Node::row(28.0, header_cells)),
                sections::profile(details, &skin, Some("Profil")),
                sections::experiences(&ctx.data.experiences, &skin, "Expériences"),
                sections::educations(&ctx.data.educations, &skin, "Formations"),
                Node::row(
                    28.0,
                    vec![
                        Cell::new(1.0, sections::skills(&ctx.data.skills, &skin, "Compétences")),
                        Cell::new(1.0, sections::languages(&ctx.data.languages, &skin, "Langues")),
                        Cell::new(1.0, sections::hobbies(&ctx.data.hobbies, &skin, "Loisirs")),
                    ],
                ),
            ],
        );

        vec![Page {
            width: SCREEN_WIDTH,
            min_height: 0.0,
            padding: 48.0,
            fill: Ink::Base,
            root,
        }]
    }
}
