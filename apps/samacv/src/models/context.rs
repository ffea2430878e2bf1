use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::models::resume::ResumeData;
use crate::models::theme::Theme;
use crate::photo::PhotoHandle;

/// The four interchangeable layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateVariant {
    /// Single column with a header band.
    #[default]
    A,
    /// Colored sidebar on the left, timeline on the right.
    B,
    /// Header row over a 1/3 – 2/3 grid on a fixed-height page.
    C,
    /// Two A4 pages: profile and experiences, then educations.
    D,
}

impl TemplateVariant {
    pub const ALL: [TemplateVariant; 4] = [
        TemplateVariant::A,
        TemplateVariant::B,
        TemplateVariant::C,
        TemplateVariant::D,
    ];

    /// Name shown in the template picker.
    pub fn label(self) -> &'static str {
        match self {
            TemplateVariant::A => "Modèle Classique",
            TemplateVariant::B => "Modèle Centré",
            TemplateVariant::C => "Modèle Simple",
            TemplateVariant::D => "Modèle Élégant",
        }
    }
}

impl FromStr for TemplateVariant {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(TemplateVariant::A),
            "B" | "b" => Ok(TemplateVariant::B),
            "C" | "c" => Ok(TemplateVariant::C),
            "D" | "d" => Ok(TemplateVariant::D),
            other => Err(ModelError::UnknownTemplate(other.to_string())),
        }
    }
}

impl fmt::Display for TemplateVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self {
            TemplateVariant::A => "A",
            TemplateVariant::B => "B",
            TemplateVariant::C => "C",
            TemplateVariant::D => "D",
        };
        f.write_str(id)
    }
}

/// Snapshot of everything the renderer needs: user data plus presentation choices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    pub data: ResumeData,
    pub theme: Theme,
    pub variant: TemplateVariant,
    pub photo: Option<PhotoHandle>,
}

impl RenderContext {
    pub fn new(data: ResumeData, theme: Theme, variant: TemplateVariant) -> Self {
        Self {
            data,
            theme,
            variant,
            photo: None,
        }
    }

    pub fn with_photo(mut self, photo: PhotoHandle) -> Self {
        self.photo = Some(photo);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_parse() {
        assert_eq!("B".parse::<TemplateVariant>().unwrap(), TemplateVariant::B);
        assert_eq!(" d ".parse::<TemplateVariant>().unwrap(), TemplateVariant::D);
        assert!(matches!(
            "E".parse::<TemplateVariant>(),
            Err(ModelError::UnknownTemplate(_))
        ));
    }

    #[test]
    fn test_variant_display_round_trips_through_parse() {
        for v in TemplateVariant::ALL {
            assert_eq!(v.to_string().parse::<TemplateVariant>().unwrap(), v);
        }
    }

    #[test]
    fn test_default_context_is_variant_a_cupcake() {
        let ctx = RenderContext::default();
        assert_eq!(ctx.variant, TemplateVariant::A);
        assert_eq!(ctx.theme.name(), "cupcake");
        assert!(ctx.photo.is_none());
    }
}
