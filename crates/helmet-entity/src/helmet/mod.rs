//! Helmet domain entities.

pub mod input;
pub mod model;
pub mod validation;

pub use input::{HelmetPatch, NewHelmet};
pub use model::{Helmet, SORT_SAFELIST};
pub use validation::{validate_helmet, validate_helmet_at};
