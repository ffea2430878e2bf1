//! Static font-metric tables for the two résumé font families.
//!
//! Character widths are in em units (relative to font size). They approximate the
//! browser's fonts closely enough to predict where lines wrap and how tall a block
//! gets; the raster is painted from the same measurements, so layout and paint agree
//! even when the glyph font differs.
//! All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Font family enum
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    /// Humanist sans-serif, used by the sidebar and grid templates.
    #[default]
    Sans,
    /// Old-style serif, used by the classic template.
    Serif,
}

/// Line box height as a multiple of the font size.
pub const LINE_HEIGHT: f32 = 1.4;

/// Bold glyphs run this much wider than regular ones.
const BOLD_WIDTH_FACTOR: f32 = 1.06;

/// Absorbs float drift between measuring a string whole and word by word.
const WRAP_TOLERANCE: f32 = 0.01;

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for a font family.
///
/// `widths[i]` = width of ASCII character `(i + 32)` at 1em.
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    pub font: FontFamily,
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters (accented letters mostly).
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Width of `s` in em units. Non-ASCII characters use `average_char_width`.
    pub fn measure_em(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Width of `s` in pixels at `size` px.
    pub fn measure_px(&self, s: &str, size: f32, bold: bool) -> f32 {
        let factor = if bold { BOLD_WIDTH_FACTOR } else { 1.0 };
        self.measure_em(s) * size * factor
    }

    /// Greedy word wrap at `max_width` px. Explicit newlines always break.
    ///
    /// Whitespace runs collapse to a single space, as in HTML. A word wider than
    /// the line gets a line of its own. Empty or blank text yields no lines.
    pub fn wrap(&self, text: &str, size: f32, bold: bool, max_width: f32) -> Vec<String> {
        let space_w = self.measure_px(" ", size, bold);
        let mut lines = Vec::new();

        for paragraph in text.lines() {
            let mut current = String::new();
            let mut current_width = 0.0_f32;

            for word in paragraph.split_whitespace() {
                let word_w = self.measure_px(word, size, bold);
                if current.is_empty() {
                    current.push_str(word);
                    current_width = word_w;
                } else if current_width + space_w + word_w > max_width + WRAP_TOLERANCE {
                    lines.push(std::mem::take(&mut current));
                    current.push_str(word);
                    current_width = word_w;
                } else {
                    current.push(' ');
                    current.push_str(word);
                    current_width += space_w + word_w;
                }
            }

            if !current.is_empty() {
                lines.push(current);
            }
        }
        lines
    }
}

/// Returns the static metric table for a font family.
pub fn get_metrics(font: FontFamily) -> &'static FontMetricTable {
    match font {
        FontFamily::Sans => &SANS_TABLE,
        FontFamily::Serif => &SERIF_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

static SANS_TABLE: FontMetricTable = FontMetricTable {
    font: FontFamily::Sans,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.25, 0.30, 0.38, 0.56, 0.56, 0.89, 0.67, 0.22, 0.33, 0.33, 0.39, 0.59, 0.28, 0.33, 0.28, 0.31,
        // 0     1     2     3     4     5     6     7     8     9
        0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56,
        // :     ;     <     =     >     ?     @
        0.28, 0.28, 0.59, 0.59, 0.59, 0.50, 1.02,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.67, 0.61, 0.61, 0.67, 0.56, 0.50, 0.67, 0.67, 0.25, 0.39, 0.61, 0.53, 0.78,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.67, 0.72, 0.56, 0.72, 0.61, 0.50, 0.56, 0.67, 0.67, 0.89, 0.61, 0.61, 0.56,
        // [     \     ]     ^     _     `
        0.28, 0.31, 0.28, 0.47, 0.56, 0.34,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.56, 0.56, 0.50, 0.56, 0.56, 0.31, 0.56, 0.56, 0.22, 0.22, 0.53, 0.22, 0.83,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.56, 0.56, 0.56, 0.56, 0.33, 0.44, 0.39, 0.56, 0.50, 0.72, 0.50, 0.50, 0.44,
        // {     |     }     ~
        0.33, 0.26, 0.33, 0.59,
    ],
    average_char_width: 0.54,
    space_width: 0.25,
};

static SERIF_TABLE: FontMetricTable = FontMetricTable {
    font: FontFamily::Serif,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.23, 0.28, 0.34, 0.50, 0.50, 0.80, 0.72, 0.18, 0.33, 0.33, 0.42, 0.56, 0.25, 0.33, 0.25, 0.28,
        // 0     1     2     3     4     5     6     7     8     9
        0.50, 0.50, 0.50, 0.50, 0.50, 0.50, 0.50, 0.50, 0.50, 0.50,
        // :     ;     <     =     >     ?     @
        0.25, 0.25, 0.56, 0.56, 0.56, 0.42, 0.88,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.68, 0.62, 0.64, 0.72, 0.60, 0.55, 0.70, 0.74, 0.33, 0.36, 0.70, 0.59, 0.86,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.72, 0.72, 0.56, 0.72, 0.64, 0.52, 0.60, 0.72, 0.68, 0.94, 0.68, 0.64, 0.60,
        // [     \     ]     ^     _     `
        0.33, 0.28, 0.33, 0.47, 0.50, 0.33,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.44, 0.50, 0.42, 0.50, 0.44, 0.31, 0.47, 0.52, 0.26, 0.25, 0.50, 0.26, 0.78,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.52, 0.50, 0.50, 0.50, 0.36, 0.38, 0.30, 0.52, 0.47, 0.70, 0.47, 0.47, 0.42,
        // {     |     }     ~
        0.40, 0.22, 0.40, 0.54,
    ],
    average_char_width: 0.48,
    space_width: 0.23,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_empty_is_zero() {
        assert_eq!(get_metrics(FontFamily::Sans).measure_em(""), 0.0);
    }

    #[test]
    fn test_measure_ascii_word() {
        // "Rust" = R(0.61) + u(0.56) + s(0.44) + t(0.39) = 2.00
        let width = get_metrics(FontFamily::Sans).measure_em("Rust");
        assert!((width - 2.00).abs() < 1e-3, "got {width}");
    }

    #[test]
    fn test_accented_chars_use_average_width() {
        let metrics = get_metrics(FontFamily::Sans);
        assert!((metrics.measure_em("é") - metrics.average_char_width).abs() < 1e-4);
    }

    #[test]
    fn test_measure_px_scales_with_size_and_weight() {
        let metrics = get_metrics(FontFamily::Serif);
        let regular = metrics.measure_px("Formation", 10.0, false);
        assert!((metrics.measure_px("Formation", 20.0, false) - 2.0 * regular).abs() < 1e-3);
        assert!(metrics.measure_px("Formation", 10.0, true) > regular);
    }

    #[test]
    fn test_wrap_short_text_is_one_line() {
        let lines = get_metrics(FontFamily::Sans).wrap("Dakar, Sénégal", 14.0, false, 400.0);
        assert_eq!(lines, vec!["Dakar, Sénégal"]);
    }

    #[test]
    fn test_wrap_breaks_long_text_and_keeps_every_word() {
        let text = "Conception de services de paiement, revue de code et mentorat \
                    de deux développeurs juniors.";
        let lines = get_metrics(FontFamily::Sans).wrap(text, 14.0, false, 200.0);
        assert!(lines.len() > 1, "expected wrapping, got {lines:?}");
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_honors_newlines_and_collapses_spaces() {
        let lines = get_metrics(FontFamily::Sans).wrap("un   deux\ntrois", 14.0, false, 1000.0);
        assert_eq!(lines, vec!["un deux", "trois"]);
    }

    #[test]
    fn test_wrap_blank_text_has_no_lines() {
        assert!(get_metrics(FontFamily::Sans).wrap("  \n ", 14.0, false, 100.0).is_empty());
    }

    #[test]
    fn test_overlong_word_gets_own_line() {
        let lines =
            get_metrics(FontFamily::Sans).wrap("a anticonstitutionnellement b", 14.0, false, 50.0);
        assert_eq!(lines, vec!["a", "anticonstitutionnellement", "b"]);
    }
}
