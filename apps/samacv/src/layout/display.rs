//! Box layout: `Document` → positioned `DisplayList`.
//!
//! A single top-down pass. Each node is placed at `(x, y)` with an available width
//! and reports the height it consumed. Backgrounds whose size depends on their
//! content (panels, filled row cells, pages) are pushed as placeholders first and
//! patched once the content height is known, so they still paint underneath it.
//! All coordinates are CSS pixels; the rasterizer applies oversampling.

use crate::layout::font_metrics::{get_metrics, FontMetricTable, LINE_HEIGHT};
use crate::models::theme::{Palette, Rgb};
use crate::photo::PhotoHandle;
use crate::render::document::{Align, Document, Ink, Node, TextStyle};

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Area {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Rect {
        area: Area,
        color: Rgb,
    },
    Circle {
        cx: f32,
        cy: f32,
        radius: f32,
        color: Rgb,
    },
    /// One wrapped line. `y` is the top of the glyph box, `width` the measured advance.
    Text {
        x: f32,
        y: f32,
        size: f32,
        width: f32,
        bold: bool,
        color: Rgb,
        text: String,
    },
    Image {
        area: Area,
        photo: PhotoHandle,
    },
}

/// Everything needed to paint a document, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayList {
    pub width: f32,
    pub height: f32,
    pub background: Rgb,
    pub ops: Vec<Paint>,
}

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

/// Stars are drawn as dots spaced by a quarter of their size.
const STAR_GAP: f32 = 0.25;
const STAR_SLOTS: f32 = 5.0;

pub fn lay_out(doc: &Document) -> DisplayList {
    let mut layout = Layout {
        metrics: get_metrics(doc.font),
        palette: *doc.theme.palette(),
        ops: Vec::new(),
    };

    let mut y = 0.0_f32;
    let mut width = 0.0_f32;
    for page in &doc.pages {
        let bg = layout.placeholder(page.fill);
        let inner = (page.width - 2.0 * page.padding).max(0.0);
        let content_h = layout.place(&page.root, page.padding, y + page.padding, inner);
        let page_h = (content_h + 2.0 * page.padding).max(page.min_height);
        layout.patch(
            bg,
            Area {
                x: 0.0,
                y,
                w: page.width,
                h: page_h,
            },
        );
        y += page_h;
        width = width.max(page.width);
    }

    DisplayList {
        width,
        height: y + doc.bottom_margin,
        background: layout.palette.base_100,
        ops: layout.ops,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Layout pass
// ────────────────────────────────────────────────────────────────────────────

struct Layout {
    metrics: &'static FontMetricTable,
    palette: Palette,
    ops: Vec<Paint>,
}

impl Layout {
    fn color(&self, ink: Ink) -> Rgb {
        resolve_ink(&self.palette, ink)
    }

    fn placeholder(&mut self, ink: Ink) -> usize {
        let color = self.color(ink);
        self.ops.push(Paint::Rect {
            area: Area {
                x: 0.0,
                y: 0.0,
                w: 0.0,
                h: 0.0,
            },
            color,
        });
        self.ops.len() - 1
    }

    fn patch(&mut self, index: usize, new_area: Area) {
        if let Some(Paint::Rect { area, .. }) = self.ops.get_mut(index) {
            *area = new_area;
        }
    }

    /// Places `node` and returns the height it occupies.
    fn place(&mut self, node: &Node, x: f32, y: f32, width: f32) -> f32 {
        match node {
            Node::Stack { gap, children } => {
                let mut cursor = 0.0_f32;
                for child in children {
                    let offset = if cursor > 0.0 { *gap } else { 0.0 };
                    let h = self.place(child, x, y + cursor + offset, width);
                    if h > 0.0 {
                        cursor += offset + h;
                    }
                }
                cursor
            }

            Node::Row { gap, cells } => {
                if cells.is_empty() {
                    return 0.0;
                }
                let fixed: f32 = cells.iter().filter_map(|c| c.fixed).sum();
                let total_weight: f32 = cells
                    .iter()
                    .filter(|c| c.fixed.is_none())
                    .map(|c| c.weight.max(0.0))
                    .sum();
                let total_weight = if total_weight > 0.0 { total_weight } else { 1.0 };
                let avail = (width - gap * (cells.len() as f32 - 1.0) - fixed).max(0.0);

                let mut cx = x;
                let mut row_h = 0.0_f32;
                let mut fills = Vec::new();
                for cell in cells {
                    let cw = match cell.fixed {
                        Some(w) => w,
                        None => avail * cell.weight.max(0.0) / total_weight,
                    };
                    if let Some(ink) = cell.fill {
                        fills.push((self.placeholder(ink), cx, cw));
                    }
                    let inner = (cw - 2.0 * cell.padding).max(0.0);
                    let h = self.place(&cell.node, cx + cell.padding, y + cell.padding, inner);
                    row_h = row_h.max(h + 2.0 * cell.padding);
                    cx += cw + gap;
                }
                for (index, fx, fw) in fills {
                    self.patch(
                        index,
                        Area {
                            x: fx,
                            y,
                            w: fw,
                            h: row_h,
                        },
                    );
                }
                row_h
            }

            Node::Flow { gap, children } => {
                let mut line_x = 0.0_f32;
                let mut line_y = 0.0_f32;
                let mut line_h = 0.0_f32;
                for child in children {
                    let cw = self.intrinsic_width(child).min(width);
                    if line_x > 0.0 && line_x + cw > width {
                        line_y += line_h + gap;
                        line_x = 0.0;
                        line_h = 0.0;
                    }
                    let h = self.place(child, x + line_x, y + line_y, cw);
                    line_x += cw + gap;
                    line_h = line_h.max(h);
                }
                if children.is_empty() {
                    0.0
                } else {
                    line_y + line_h
                }
            }

            Node::Panel {
                fill,
                padding,
                hug,
                child,
            } => {
                let bg = self.placeholder(*fill);
                let max_inner = (width - 2.0 * padding).max(0.0);
                let inner = if *hug {
                    self.intrinsic_width(child).min(max_inner)
                } else {
                    max_inner
                };
                let h = self.place(child, x + padding, y + padding, inner);
                let total_h = h + 2.0 * padding;
                self.patch(
                    bg,
                    Area {
                        x,
                        y,
                        w: inner + 2.0 * padding,
                        h: total_h,
                    },
                );
                total_h
            }

            Node::Text { text, style } => self.place_text(text, style, x, y, width),

            Node::Photo {
                handle,
                size,
                align,
            } => {
                let side = size.min(width);
                let px = x + align_offset(*align, width, side);
                self.ops.push(Paint::Image {
                    area: Area {
                        x: px,
                        y,
                        w: side,
                        h: side,
                    },
                    photo: handle.clone(),
                });
                side
            }

            Node::Stars { rating, size, ink } => {
                let step = size * (1.0 + STAR_GAP);
                let radius = size / 2.0;
                let filled = self.color(*ink);
                let empty = self.color(Ink::Muted);
                let slots = (0..rating.filled)
                    .map(|_| filled)
                    .chain((0..rating.empty).map(|_| empty));
                for (i, color) in slots.enumerate() {
                    self.ops.push(Paint::Circle {
                        cx: x + i as f32 * step + radius,
                        cy: y + radius,
                        radius,
                        color,
                    });
                }
                *size
            }

            Node::Marker { ink, size } => {
                let color = self.color(*ink);
                self.ops.push(Paint::Circle {
                    cx: x + size / 2.0,
                    cy: y + size / 2.0,
                    radius: size / 2.0,
                    color,
                });
                *size
            }

            Node::Rule { ink, thickness } => {
                let color = self.color(*ink);
                self.ops.push(Paint::Rect {
                    area: Area {
                        x,
                        y,
                        w: width,
                        h: *thickness,
                    },
                    color,
                });
                *thickness
            }

            Node::Spacer(h) => *h,

            Node::Tagged { child, .. } => self.place(child, x, y, width),
        }
    }

    fn place_text(&mut self, text: &str, style: &TextStyle, x: f32, y: f32, width: f32) -> f32 {
        let shown = display_text(text, style);
        let lines = self.metrics.wrap(&shown, style.size, style.bold, width);
        let line_h = style.size * LINE_HEIGHT;
        let color = self.color(style.ink);
        let count = lines.len();

        for (i, line) in lines.into_iter().enumerate() {
            let line_w = self.metrics.measure_px(&line, style.size, style.bold);
            self.ops.push(Paint::Text {
                x: x + align_offset(style.align, width, line_w),
                y: y + i as f32 * line_h + (line_h - style.size) / 2.0,
                size: style.size,
                width: line_w,
                bold: style.bold,
                color,
                text: line,
            });
        }
        count as f32 * line_h
    }

    /// Natural width of a node when nothing forces it narrower.
    fn intrinsic_width(&self, node: &Node) -> f32 {
        match node {
            Node::Text { text, style } => display_text(text, style)
                .lines()
                .map(|l| {
                    let collapsed = l.split_whitespace().collect::<Vec<_>>().join(" ");
                    self.metrics.measure_px(&collapsed, style.size, style.bold)
                })
                .fold(0.0, f32::max),
            Node::Panel { padding, child, .. } => self.intrinsic_width(child) + 2.0 * padding,
            Node::Stack { children, .. } => children
                .iter()
                .map(|c| self.intrinsic_width(c))
                .fold(0.0, f32::max),
            Node::Row { gap, cells } => {
                cells
                    .iter()
                    .map(|c| {
                        c.fixed
                            .unwrap_or_else(|| self.intrinsic_width(&c.node) + 2.0 * c.padding)
                    })
                    .sum::<f32>()
                    + gap * (cells.len().saturating_sub(1)) as f32
            }
            Node::Flow { gap, children } => {
                children.iter().map(|c| self.intrinsic_width(c)).sum::<f32>()
                    + gap * (children.len().saturating_sub(1)) as f32
            }
            Node::Stars { size, .. } => {
                size * STAR_SLOTS + size * STAR_GAP * (STAR_SLOTS - 1.0)
            }
            Node::Photo { size, .. } | Node::Marker { size, .. } => *size,
            Node::Rule { .. } | Node::Spacer(_) => 0.0,
            Node::Tagged { child, .. } => self.intrinsic_width(child),
        }
    }
}

fn display_text(text: &str, style: &TextStyle) -> String {
    if style.uppercase {
        text.to_uppercase()
    } else {
        text.to_string()
    }
}

fn align_offset(align: Align, available: f32, used: f32) -> f32 {
    match align {
        Align::Left => 0.0,
        Align::Center => ((available - used) / 2.0).max(0.0),
        Align::Right => (available - used).max(0.0),
    }
}

/// Maps a palette slot to a concrete color.
pub fn resolve_ink(palette: &Palette, ink: Ink) -> Rgb {
    match ink {
        Ink::Primary => palette.primary,
        Ink::PrimaryContent => palette.primary_content,
        Ink::Base => palette.base_100,
        Ink::Surface => palette.base_200,
        Ink::BaseContent => palette.base_content,
        Ink::Muted => blend(palette.base_content, palette.base_100, 0.55),
        Ink::Tint => blend(palette.primary, palette.base_100, 0.15),
    }
}

/// `a` over `b` with opacity `alpha`.
fn blend(a: Rgb, b: Rgb, alpha: f32) -> Rgb {
    let mix = |x: u8, y: u8| (x as f32 * alpha + y as f32 * (1.0 - alpha)).round() as u8;
    Rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}
