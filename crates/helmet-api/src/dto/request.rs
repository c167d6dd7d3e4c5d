//! Request DTOs.
//!
//! Helmet bodies reuse the entity crate's input shapes, which take the year
//! as an integer and reject unknown fields.

pub use helmet_entity::{HelmetPatch as UpdateHelmetRequest, NewHelmet as CreateHelmetRequest};
