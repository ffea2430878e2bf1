//! Section builders shared by every template.
//!
//! A template decides where sections go and how they look (through a `Skin`);
//! these builders decide what each section contains. Keeping content here is what
//! makes the variants interchangeable: none of them can drop a field, reorder a
//! list or format a date differently from the others.

use crate::format::{format_date_range, Rating};
use crate::models::resume::{Education, Experience, Hobby, Language, PersonalDetails, Skill};
use crate::models::RenderContext;
use crate::render::document::{Align, Cell, Ink, Node, Role, Section, TextStyle};

/// How entries in a timeline list are decorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryShape {
    Plain,
    /// Colored bar along the left edge.
    Bar,
    /// Dot on a vertical timeline.
    Timeline,
    /// Filled card.
    Card,
}

/// Visual choices a template makes for one region of the page.
#[derive(Debug, Clone, Copy)]
pub struct Skin {
    pub heading: TextStyle,
    /// Underline under section headings.
    pub heading_rule: Option<Ink>,
    pub body: TextStyle,
    pub title: TextStyle,
    pub subtitle: TextStyle,
    pub dates: TextStyle,
    pub badge_fill: Ink,
    pub badge_text: TextStyle,
    /// Star ink for language ratings; `None` hides the star row.
    pub stars: Option<Ink>,
    pub accent: Ink,
    pub entry: EntryShape,
    pub gap: f32,
}

const STAR_SIZE: f32 = 14.0;
const ICON_SIZE: f32 = 8.0;

// ────────────────────────────────────────────────────────────────────────────
// Identity
// ────────────────────────────────────────────────────────────────────────────

/// The profile photo, if the context has one.
pub fn photo(ctx: &RenderContext, size: f32, align: Align) -> Option<Node> {
    ctx.photo.as_ref().map(|handle| {
        Node::tagged(
            Role::Photo,
            Node::Photo {
                handle: handle.clone(),
                size,
                align,
            },
        )
    })
}

pub fn full_name(details: &PersonalDetails, style: TextStyle) -> Node {
    Node::tagged(Role::FullName, Node::text(&details.full_name, style))
}

pub fn position(details: &PersonalDetails, style: TextStyle) -> Node {
    Node::tagged(Role::Position, Node::text(&details.post_seeking, style))
}

/// One line per non-empty contact field. Empty fields produce nothing.
pub fn contact_lines(details: &PersonalDetails, skin: &Skin) -> Vec<Node> {
    details
        .present_contacts()
        .map(|(field, value)| {
            Node::tagged(
                Role::Contact(field),
                Node::row(
                    6.0,
                    vec![
                        Cell::fixed(
                            ICON_SIZE,
                            Node::stack(
                                0.0,
                                vec![
                                    Node::Spacer((skin.body.size * 1.4 - ICON_SIZE) / 2.0),
                                    Node::Marker {
                                        ink: skin.accent,
                                        size: ICON_SIZE,
                                    },
                                ],
                            ),
                        ),
                        Cell::new(1.0, Node::text(value, skin.body)),
                    ],
                ),
            )
        })
        .collect()
}

/// Contact block with an optional heading.
pub fn contacts(details: &PersonalDetails, skin: &Skin, title: Option<&str>) -> Node {
    let mut children = Vec::new();
    if let Some(title) = title {
        children.push(heading(title, skin));
    }
    children.push(Node::stack(skin.gap / 2.0, contact_lines(details, skin)));
    section(Section::Contact, skin, children)
}

/// Free-text profile description.
pub fn profile(details: &PersonalDetails, skin: &Skin, title: Option<&str>) -> Node {
    let text = Node::tagged(Role::Profile, Node::text(&details.description, skin.body));
    match title {
        Some(title) => Node::stack(skin.gap, vec![heading(title, skin), text]),
        None => text,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Badge lists
// ────────────────────────────────────────────────────────────────────────────

pub fn skills(skills: &[Skill], skin: &Skin, title: &str) -> Node {
    let names = skills.iter().map(|s| s.name.as_str());
    badge_section(Section::Skills, Role::Skill, names, skin, title)
}

pub fn hobbies(hobbies: &[Hobby], skin: &Skin, title: &str) -> Node {
    let names = hobbies.iter().map(|h| h.name.as_str());
    badge_section(Section::Hobbies, Role::Hobby, names, skin, title)
}

fn badge_section<'a>(
    kind: Section,
    role: Role,
    names: impl Iterator<Item = &'a str>,
    skin: &Skin,
    title: &str,
) -> Node {
    let badges = names
        .map(|name| {
            Node::tagged(
                role,
                Node::chip(skin.badge_fill, 5.0, Node::text(name, skin.badge_text)),
            )
        })
        .collect();
    section(kind, skin, vec![heading(title, skin), Node::flow(6.0, badges)])
}

// ────────────────────────────────────────────────────────────────────────────
// Languages
// ────────────────────────────────────────────────────────────────────────────

pub fn languages(languages: &[Language], skin: &Skin, title: &str) -> Node {
    let items = languages
        .iter()
        .map(|lang| {
            let mut lines = vec![Node::row(
                8.0,
                vec![
                    Cell::new(1.0, Node::text(&lang.language, skin.title)),
                    Cell::new(
                        1.0,
                        Node::text(lang.proficiency.label(), skin.dates.align(Align::Right)),
                    ),
                ],
            )];
            if let Some(ink) = skin.stars {
                lines.push(Node::Stars {
                    rating: Rating::from_proficiency(lang.proficiency),
                    size: STAR_SIZE,
                    ink,
                });
            }
            Node::tagged(Role::Language, Node::stack(4.0, lines))
        })
        .collect();

    section(
        Section::Languages,
        skin,
        vec![heading(title, skin), Node::stack(skin.gap / 2.0, items)],
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Timelines
// ────────────────────────────────────────────────────────────────────────────

pub fn experiences(list: &[Experience], skin: &Skin, title: &str) -> Node {
    let entries = list
        .iter()
        .map(|e| {
            Node::tagged(
                Role::Experience,
                entry(
                    &e.job_title,
                    &e.company_name,
                    &e.start_date,
                    &e.end_date,
                    &e.description,
                    skin,
                ),
            )
        })
        .collect();
    section(
        Section::Experiences,
        skin,
        vec![heading(title, skin), Node::stack(skin.gap * 1.5, entries)],
    )
}

pub fn educations(list: &[Education], skin: &Skin, title: &str) -> Node {
    section(
        Section::Educations,
        skin,
        vec![heading(title, skin), Node::stack(skin.gap * 1.5, education_entries(list, skin))],
    )
}

/// Education entries without the section wrapper, for templates that grid them.
pub fn education_entries(list: &[Education], skin: &Skin) -> Vec<Node> {
    list.iter()
        .map(|e| {
            Node::tagged(
                Role::Education,
                entry(&e.degree, &e.school, &e.start_date, &e.end_date, &e.description, skin),
            )
        })
        .collect()
}

fn entry(
    title: &str,
    subtitle: &str,
    start: &str,
    end: &str,
    description: &str,
    skin: &Skin,
) -> Node {
    let body = Node::stack(
        3.0,
        vec![
            Node::text(title, skin.title),
            Node::row(
                8.0,
                vec![
                    Cell::new(3.0, Node::text(subtitle, skin.subtitle)),
                    Cell::new(
                        2.0,
                        Node::text(format_date_range(start, end), skin.dates.align(Align::Right)),
                    ),
                ],
            ),
            Node::text(description, skin.body),
        ],
    );

    match skin.entry {
        EntryShape::Plain => body,
        EntryShape::Bar => Node::row(
            10.0,
            vec![
                Cell::fixed(2.0, Node::Spacer(0.0)).filled(skin.accent, 0.0),
                Cell::new(1.0, body),
            ],
        ),
        EntryShape::Timeline => Node::row(
            10.0,
            vec![
                Cell::fixed(
                    12.0,
                    Node::stack(
                        0.0,
                        vec![
                            Node::Spacer(4.0),
                            Node::Marker {
                                ink: skin.accent,
                                size: 12.0,
                            },
                        ],
                    ),
                ),
                Cell::new(1.0, body),
            ],
        ),
        EntryShape::Card => Node::panel(Ink::Surface, 14.0, body),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

pub fn heading(title: &str, skin: &Skin) -> Node {
    let text = Node::text(title, skin.heading);
    match skin.heading_rule {
        Some(ink) => Node::stack(4.0, vec![text, Node::Rule { ink, thickness: 1.0 }]),
        None => text,
    }
}

fn section(kind: Section, skin: &Skin, children: Vec<Node>) -> Node {
    Node::tagged(Role::Section(kind), Node::stack(skin.gap, children))
}
