//! Text normalization for street names.
//!
//! - **text**: per-word capitalization
//! - **expand**: direction and street-type abbreviation lookup

pub mod expand;
pub mod text;

pub use expand::{Expansion, expand_direction, expand_road_type, resolve_direction, resolve_road_type};
pub use text::{capitalize, capitalize_word};
