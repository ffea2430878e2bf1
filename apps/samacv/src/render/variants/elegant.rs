use crate::models::{RenderContext, TemplateVariant};
use crate::render::document::{Align, Cell, Ink, Node, Page, Role, Section, TextStyle};
use crate::render::sections::{self, EntryShape, Skin};
use crate::render::variants::{A4_HEIGHT, A4_WIDTH};
use crate::render::Template;

/// Variant D: two A4 pages. The first carries identity, sidebar and work
/// history; the second the education grid and a footer.
pub struct Elegant;

const PHOTO_SIZE: f32 = 192.0;
const PADDING: f32 = 40.0;
const EDUCATION_COLUMNS: usize = 2;
const FOOTER: &str = "Généré avec Samacv";

fn sidebar_skin() -> Skin {
    let body = TextStyle::new(13.0, Ink::PrimaryContent);
    Skin {
        heading: TextStyle::new(16.0, Ink::PrimaryContent).bold().uppercase(),
        heading_rule: None,
        body,
        title: body.bold(),
        subtitle: body,
        dates: TextStyle::new(12.0, Ink::PrimaryContent).italic(),
        badge_fill: Ink::PrimaryContent,
        badge_text: TextStyle::new(12.0, Ink::Primary),
        stars: Some(Ink::PrimaryContent),
        accent: Ink::PrimaryContent,
        entry: EntryShape::Plain,
        gap: 10.0,
    }
}

fn main_skin() -> Skin {
    let body = TextStyle::new(13.0, Ink::BaseContent);
    Skin {
        heading: TextStyle::new(22.0, Ink::Primary).bold(),
        heading_rule: Some(Ink::Primary),
        body,
        title: TextStyle::new(16.0, Ink::Primary).bold(),
        subtitle: TextStyle::new(14.0, Ink::BaseContent).bold(),
        dates: TextStyle::new(12.0, Ink::Muted),
        badge_fill: Ink::Tint,
        badge_text: body,
        stars: Some(Ink::Primary),
        accent: Ink::Primary,
        entry: EntryShape::Card,
        gap: 14.0,
    }
}

impl Elegant {
    fn first_page(&self, ctx: &RenderContext) -> Page {
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
                TextStyle::new(28.0, Ink::PrimaryContent).bold().align(Align::Center),
            ),
            Node::row(
                0.0,
                vec![
                    Cell::new(1.0, Node::Spacer(0.0)),
                    Cell::new(
                        4.0,
                        Node::panel(
                            Ink::PrimaryContent,
                            6.0,
                            sections::position(
                                details,
                                TextStyle::new(14.0, Ink::Primary).bold().align(Align::Center),
                            ),
                        ),
                    ),
                    Cell::new(1.0, Node::Spacer(0.0)),
                ],
            ),
            sections::contacts(details, &side, Some("Contact")),
            sections::skills(&ctx.data.skills, &side, "Compétences"),
            sections::languages(&ctx.data.languages, &side, "Langues"),
            sections::hobbies(&ctx.data.hobbies, &side, "Loisirs"),
        ]);

        let mut profile_style = main;
        profile_style.body = main.body.italic();

        let content = Node::stack(
            28.0,
            vec![
                sections::profile(details, &profile_style, Some("Profil")),
                sections::experiences(
                    &ctx.data.experiences,
                    &main,
                    "Expériences Professionnelles",
                ),
            ],
        );

        Page {
            width: A4_WIDTH,
            min_height: A4_HEIGHT,
            padding: PADDING,
            fill: Ink::Base,
            root: Node::row(
                28.0,
                vec![
                    Cell::new(1.0, Node::stack(20.0, sidebar)).filled(Ink::Primary, 20.0),
                    Cell::new(2.0, content),
                ],
            ),
        }
    }

    fn second_page(&self, ctx: &RenderContext) -> Page {
        let main = main_skin();

        // Row-major grid keeps the list order when read left to right.
        let entries = sections::education_entries(&ctx.data.educations, &main);
        let rows: Vec<Node> = entries
            .chunks(EDUCATION_COLUMNS)
            .map(|chunk| {
                let mut cells: Vec<Cell> =
                    chunk.iter().cloned().map(|node| Cell::new(1.0, node)).collect();
                while cells.len() < EDUCATION_COLUMNS {
                    cells.push(Cell::new(1.0, Node::Spacer(0.0)));
                }
                Node::row(20.0, cells)
            })
            .collect();

        let educations = Node::tagged(
            Role::Section(Section::Educations),
            Node::stack(
                main.gap,
                vec![
                    sections::heading("Formations", &main),
                    Node::stack(20.0, rows),
                ],
            ),
        );

        let footer = Node::tagged(
            Role::Footer,
            Node::text(FOOTER, TextStyle::new(11.0, Ink::Muted).italic().align(Align::Right)),
        );

        Page {
            width: A4_WIDTH,
            min_height: A4_HEIGHT,
            padding: PADDING,
            fill: Ink::Base,
            root: Node::stack(40.0, vec![educations, footer]),
        }
    }
}

impl Template for Elegant {
    fn variant(&self) -> TemplateVariant {
        TemplateVariant::D
    }

    fn compose(&self, ctx: &RenderContext) -> Vec<Page> {
        vec![self.first_page(ctx), self.second_page(ctx)]
    }
}
