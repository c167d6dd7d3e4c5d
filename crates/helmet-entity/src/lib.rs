//! # helmet-entity
//!
//! Domain entity models for the helmet registry. [`Helmet`] mirrors a row of
//! the `mhelmets` table and derives `sqlx::FromRow`; the input shapes used
//! for creation and partial updates live alongside it.

pub mod helmet;

pub use helmet::{Helmet, HelmetPatch, NewHelmet, SORT_SAFELIST};
