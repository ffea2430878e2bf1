pub mod context;
pub mod presets;
pub mod resume;
pub mod theme;

pub use context::{RenderContext, TemplateVariant};
pub use resume::{
    ContactField, Education, Experience, Hobby, Language, PersonalDetails, Proficiency, ResumeData,
    Skill,
};
pub use theme::{Palette, Theme};
