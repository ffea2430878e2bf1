// Display formatting for raw field values.
// Every function here is total: malformed input resolves to a fallback, never an error.

pub mod date;
pub mod rating;

pub use date::{format_date, format_date_range, ONGOING};
pub use rating::{proficiency_to_rating, Rating, MAX_RATING};
