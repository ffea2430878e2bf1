use serde::{Deserialize, Serialize};

use crate::models::resume::Proficiency;

/// Number of indicator slots in a language rating.
pub const MAX_RATING: u8 = 5;

impl Proficiency {
    /// Fixed mapping onto the 0–5 scale. Only 0, 1, 3 and 5 occur.
    pub fn rating(self) -> u8 {
        match self {
            Proficiency::Unset => 0,
            Proficiency::Beginner => 1,
            Proficiency::Intermediate => 3,
            Proficiency::Advanced => 5,
        }
    }
}

/// Maps a raw proficiency label to its rating. Unknown labels rate 0.
pub fn proficiency_to_rating(level: &str) -> u8 {
    Proficiency::parse(level).rating()
}

/// A star row: `filled` full indicators followed by `empty` hollow ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub filled: u8,
    pub empty: u8,
}

impl Rating {
    pub fn from_proficiency(level: Proficiency) -> Self {
        let filled = level.rating().min(MAX_RATING);
        Rating {
            filled,
            empty: MAX_RATING - filled,
        }
    }

    pub fn from_level(level: &str) -> Self {
        Rating::from_proficiency(Proficiency::parse(level))
    }
}
