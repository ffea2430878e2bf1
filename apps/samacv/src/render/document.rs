//! The rendered document tree.
//!
//! Templates produce a `Document`: a stack of pages, each a tree of layout nodes.
//! Nodes refer to palette slots (`Ink`) rather than concrete colors, so the same
//! tree can be painted under any theme. Content-bearing subtrees are wrapped in
//! `Node::Tagged` with a `Role`, which is what callers query to find out what a
//! document shows without caring how it is laid out.

use serde::Serialize;

use crate::format::Rating;
use crate::layout::font_metrics::FontFamily;
use crate::models::resume::ContactField;
use crate::models::theme::Theme;
use crate::models::TemplateVariant;
use crate::photo::PhotoHandle;

// ────────────────────────────────────────────────────────────────────────────
// Styling vocabulary
// ────────────────────────────────────────────────────────────────────────────

/// A palette slot, resolved against the theme at layout time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Ink {
    Primary,
    PrimaryContent,
    Base,
    Surface,
    BaseContent,
    /// Secondary text, a blend of content and base.
    Muted,
    /// Primary at low opacity over the base, for chips and cards.
    Tint,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStyle {
    /// Font size in CSS pixels.
    pub size: f32,
    pub bold: bool,
    pub italic: bool,
    pub uppercase: bool,
    pub ink: Ink,
    pub align: Align,
}

impl TextStyle {
    pub const fn new(size: f32, ink: Ink) -> Self {
        TextStyle {
            size,
            bold: false,
            italic: false,
            uppercase: false,
            ink,
            align: Align::Left,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub const fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }

    pub const fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

/// What a tagged subtree represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    Photo,
    FullName,
    Position,
    Contact(ContactField),
    Profile,
    Section(Section),
    Skill,
    Language,
    Hobby,
    Experience,
    Education,
    Footer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Section {
    Contact,
    Skills,
    Languages,
    Hobbies,
    Experiences,
    Educations,
}

// ────────────────────────────────────────────────────────────────────────────
// Tree
// ────────────────────────────────────────────────────────────────────────────

/// One column of a `Node::Row`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Share of the width left after fixed cells, relative to the other cells.
    pub weight: f32,
    /// Exact width in pixels; `weight` is ignored when set.
    pub fixed: Option<f32>,
    /// Background stretched to the full row height.
    pub fill: Option<Ink>,
    pub padding: f32,
    pub node: Node,
}

impl Cell {
    pub fn new(weight: f32, node: Node) -> Self {
        Cell {
            weight,
            fixed: None,
            fill: None,
            padding: 0.0,
            node,
        }
    }

    pub fn fixed(width: f32, node: Node) -> Self {
        Cell {
            weight: 0.0,
            fixed: Some(width),
            fill: None,
            padding: 0.0,
            node,
        }
    }

    pub fn filled(mut self, ink: Ink, padding: f32) -> Self {
        self.fill = Some(ink);
        self.padding = padding;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Children top to bottom.
    Stack { gap: f32, children: Vec<Node> },
    /// Side-by-side cells sharing the available width.
    Row { gap: f32, cells: Vec<Cell> },
    /// Children left to right at their natural width, wrapping onto new lines.
    Flow { gap: f32, children: Vec<Node> },
    /// Background box around a child. `hug` shrinks the box to the child's width.
    Panel {
        fill: Ink,
        padding: f32,
        hug: bool,
        child: Box<Node>,
    },
    Text { text: String, style: TextStyle },
    Photo { handle: PhotoHandle, size: f32, align: Align },
    Stars { rating: Rating, size: f32, ink: Ink },
    /// A filled dot: list bullets, timeline knots, contact icons.
    Marker { ink: Ink, size: f32 },
    Rule { ink: Ink, thickness: f32 },
    Spacer(f32),
    Tagged { role: Role, child: Box<Node> },
}

impl Node {
    pub fn stack(gap: f32, children: Vec<Node>) -> Node {
        Node::Stack { gap, children }
    }

    pub fn row(gap: f32, cells: Vec<Cell>) -> Node {
        Node::Row { gap, cells }
    }

    pub fn flow(gap: f32, children: Vec<Node>) -> Node {
        Node::Flow { gap, children }
    }

    pub fn text(text: impl Into<String>, style: TextStyle) -> Node {
        Node::Text {
            text: text.into(),
            style,
        }
    }

    pub fn panel(fill: Ink, padding: f32, child: Node) -> Node {
        Node::Panel {
            fill,
            padding,
            hug: false,
            child: Box::new(child),
        }
    }

    pub fn chip(fill: Ink, padding: f32, child: Node) -> Node {
        Node::Panel {
            fill,
            padding,
            hug: true,
            child: Box::new(child),
        }
    }

    pub fn tagged(role: Role, child: Node) -> Node {
        Node::Tagged {
            role,
            child: Box::new(child),
        }
    }

    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Stack { children, .. } | Node::Flow { children, .. } => children.iter().collect(),
            Node::Row { cells, .. } => cells.iter().map(|c| &c.node).collect(),
            Node::Panel { child, .. } | Node::Tagged { child, .. } => vec![child.as_ref()],
            _ => Vec::new(),
        }
    }

    /// Depth-first walk, parents before children.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Node)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    /// All text runs in this subtree, in document order.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |n| {
            if let Node::Text { text, .. } = n {
                out.push(text.as_str());
            }
        });
        out
    }
}

/// A page box. Pages are painted one under the other.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Width in CSS pixels.
    pub width: f32,
    /// The page never gets shorter than this, whatever its content.
    pub min_height: f32,
    pub padding: f32,
    pub fill: Ink,
    pub root: Node,
}

/// Output of a template: every page of the résumé, with the theme it is painted in.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub variant: TemplateVariant,
    pub theme: Theme,
    pub font: FontFamily,
    /// Extra space under the last page (download mode).
    pub bottom_margin: f32,
    pub pages: Vec<Page>,
}

impl Document {
    /// Subtrees tagged with `role`, in document order.
    pub fn tagged(&self, role: Role) -> Vec<&Node> {
        let mut out = Vec::new();
        for page in &self.pages {
            page.root.walk(&mut |n| {
                if let Node::Tagged { role: r, child } = n {
                    if *r == role {
                        out.push(child.as_ref());
                    }
                }
            });
        }
        out
    }

    pub fn count(&self, role: Role) -> usize {
        self.tagged(role).len()
    }

    pub fn has(&self, role: Role) -> bool {
        self.count(role) > 0
    }

    /// Text of each subtree tagged `role`, runs joined with a single space.
    pub fn texts(&self, role: Role) -> Vec<String> {
        self.tagged(role)
            .into_iter()
            .map(|n| n.texts().join(" "))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        let body = TextStyle::new(14.0, Ink::BaseContent);
        Document {
            variant: TemplateVariant::A,
            theme: Theme::default(),
            font: FontFamily::Sans,
            bottom_margin: 0.0,
            pages: vec![Page {
                width: 950.0,
                min_height: 0.0,
                padding: 16.0,
                fill: Ink::Base,
                root: Node::stack(
                    4.0,
                    vec![
                        Node::tagged(Role::FullName, Node::text("Awa", body)),
                        Node::tagged(
                            Role::Experience,
                            Node::stack(
                                0.0,
                                vec![Node::text("Dev", body), Node::text("Orange", body)],
                            ),
                        ),
                        Node::tagged(Role::Experience, Node::text("Stagiaire", body)),
                    ],
                ),
            }],
        }
    }

    #[test]
    fn test_tagged_query_preserves_order() {
        let doc = sample();
        assert_eq!(doc.count(Role::Experience), 2);
        assert_eq!(doc.texts(Role::Experience), vec!["Dev Orange", "Stagiaire"]);
    }

    #[test]
    fn test_missing_role_is_absent() {
        let doc = sample();
        assert!(!doc.has(Role::Photo));
        assert!(doc.has(Role::FullName));
    }

    #[test]
    fn test_text_style_builders() {
        let style = TextStyle::new(12.0, Ink::Primary).bold().uppercase().align(Align::Center);
        assert!(style.bold && style.uppercase && !style.italic);
        assert_eq!(style.align, Align::Center);
    }
}
