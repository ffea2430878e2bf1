//! Static theme catalog.
//!
//! The 32 named themes offered by the theme picker. Each maps to a small palette
//! used by the rasterizer; the renderer only refers to palette slots (primary,
//! base, ...), never to concrete colors.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::ModelError;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

const fn hex(v: u32) -> Rgb {
    Rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

/// The palette slots a template can paint with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Rgb,
    pub primary_content: Rgb,
    pub base_100: Rgb,
    pub base_200: Rgb,
    pub base_content: Rgb,
}

/// A selectable visual theme from the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    name: &'static str,
    palette: Palette,
}

const fn theme(
    name: &'static str,
    primary: u32,
    primary_content: u32,
    base_100: u32,
    base_200: u32,
    base_content: u32,
) -> Theme {
    Theme {
        name,
        palette: Palette {
            primary: hex(primary),
            primary_content: hex(primary_content),
            base_100: hex(base_100),
            base_200: hex(base_200),
            base_content: hex(base_content),
        },
    }
}

#[rustfmt::skip]
static CATALOG: [Theme; 32] = [
    //     name          primary   p-content base-100  base-200  base-content
    theme("light",      0x570DF8, 0xE0D2FE, 0xFFFFFF, 0xF2F2F2, 0x1F2937),
    theme("dark",       0x661AE6, 0xD1C1FA, 0x1D232A, 0x191E24, 0xA6ADBB),
    theme("cupcake",    0x65C3C8, 0x051C1D, 0xFAF7F5, 0xEFEAE6, 0x291334),
    theme("bumblebee",  0xF9D72F, 0x181830, 0xFFFFFF, 0xF2F2F2, 0x1F2937),
    theme("emerald",    0x66CC8A, 0x223D30, 0xFFFFFF, 0xE8E8E8, 0x333C4D),
    theme("corporate",  0x4B6BFB, 0x050617, 0xFFFFFF, 0xE5E6E6, 0x181A2A),
    theme("synthwave",  0xE779C1, 0x130510, 0x1A103D, 0x170E37, 0xF9F7FD),
    theme("retro",      0xEF9995, 0x282425, 0xECE3CA, 0xE4D8B4, 0x282425),
    theme("cyberpunk",  0xFF7598, 0x160406, 0xFFEE00, 0xE6D600, 0x161400),
    theme("valentine",  0xE96D7B, 0x130405, 0xFAE7F4, 0xF0C7E2, 0x632C3B),
    theme("halloween",  0xF28C18, 0x140700, 0x212121, 0x1D1D1D, 0xD6D6D6),
    theme("garden",     0x5C7F67, 0xE9E7E7, 0xE9E7E7, 0xD1CFCF, 0x100F0F),
    theme("forest",     0x1EB854, 0x000000, 0x171212, 0x141010, 0xCAC9C9),
    theme("aqua",       0x09ECF3, 0x005355, 0x345DA7, 0x2F5496, 0xC8E1E7),
    theme("lofi",       0x0D0D0D, 0xFFFFFF, 0xFFFFFF, 0xF2F2F2, 0x000000),
    theme("pastel",     0xD1C1D7, 0x100E10, 0xFFFFFF, 0xF9FAFB, 0x161616),
    theme("fantasy",    0x6E0B75, 0xE4D4F4, 0xFFFFFF, 0xF2F2F2, 0x1F2937),
    theme("wireframe",  0xB8B8B8, 0x0D0D0D, 0xFFFFFF, 0xEEEEEE, 0x333333),
    theme("black",      0x373737, 0xD1D1D1, 0x000000, 0x0D0D0D, 0xD6D6D6),
    theme("luxury",     0xFFFFFF, 0x161616, 0x09090B, 0x171618, 0xDCA54C),
    theme("dracula",    0xFF79C6, 0x16050E, 0x282A36, 0x232530, 0xF8F8F2),
    theme("cmyk",       0x45AEEE, 0x020B14, 0xFFFFFF, 0xF2F2F2, 0x1F2937),
    theme("autumn",     0x8C0327, 0xF0D6D6, 0xF1F1F1, 0xDBDBDB, 0x141414),
    theme("business",   0x1C4E80, 0xD1DBE9, 0x202020, 0x1C1C1C, 0xCDCDCD),
    theme("acid",       0xFF00F4, 0x160016, 0xFAFAFA, 0xE5E5E5, 0x161616),
    theme("lemonade",   0x519903, 0x020900, 0xFFFFFF, 0xE8E8E8, 0x161616),
    theme("night",      0x38BDF8, 0x010D15, 0x0F172A, 0x0C1425, 0xC9CBCF),
    theme("coffee",     0xDB924B, 0x110803, 0x261B25, 0x211720, 0x756E63),
    theme("winter",     0x047AFF, 0xFFFFFF, 0xFFFFFF, 0xF2F7FF, 0x394E6A),
    theme("dim",        0x9FE88D, 0x0A1307, 0x2A303C, 0x242933, 0xB2CCD6),
    theme("nord",       0x5E81AC, 0x03060B, 0xECEFF4, 0xE5E9F0, 0x2E3440),
    theme("sunset",     0xFF865B, 0x160603, 0x121C22, 0x0E171E, 0x9FB9D0),
];

impl Theme {
    /// Looks a theme up by its catalog name (case-sensitive, as offered by the picker).
    pub fn from_name(name: &str) -> Result<Theme, ModelError> {
        CATALOG
            .iter()
            .find(|t| t.name == name)
            .copied()
            .ok_or_else(|| ModelError::UnknownTheme(name.to_string()))
    }

    pub fn catalog() -> &'static [Theme] {
        &CATALOG
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

impl Default for Theme {
    /// `cupcake`, the theme the builder opens with.
    fn default() -> Self {
        CATALOG[2]
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Serialize for Theme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Theme::from_name(&name).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_32_unique_names() {
        let mut names: Vec<&str> = Theme::catalog().iter().map(|t| t.name()).collect();
        assert_eq!(names.len(), 32);
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 32, "theme names must be unique");
    }

    #[test]
    fn test_default_theme_is_cupcake() {
        assert_eq!(Theme::default().name(), "cupcake");
    }

    #[test]
    fn test_from_name_unknown_is_error() {
        assert!(matches!(
            Theme::from_name("solarized"),
            Err(ModelError::UnknownTheme(_))
        ));
        assert_eq!(Theme::from_name("nord").unwrap().name(), "nord");
    }

    #[test]
    fn test_hex_unpacks_channels() {
        assert_eq!(hex(0x65C3C8), Rgb(0x65, 0xC3, 0xC8));
    }

    #[test]
    fn test_theme_serde_uses_name() {
        let json = serde_json::to_string(&Theme::from_name("dracula").unwrap()).unwrap();
        assert_eq!(json, "\"dracula\"");
        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name(), "dracula");
    }
}
