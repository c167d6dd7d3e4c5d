//! Helmet entity model.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use sqlx::FromRow;

/// Sort keys accepted by helmet listings; `-` prefix means descending.
pub const SORT_SAFELIST: &[&str] = &[
    "id",
    "name",
    "year",
    "material",
    "protection",
    "weight",
    "-id",
    "-name",
    "-year",
    "-material",
    "-protection",
    "-weight",
];

/// A motorcycle helmet record.
///
/// On output the release year is rendered as `"<year> year"` (or `""` when
/// unset) and the creation timestamp is omitted. Inputs carry the year as a
/// plain integer; see [`crate::NewHelmet`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, FromRow)]
pub struct Helmet {
    /// Store-assigned identifier.
    pub id: i64,
    /// When the record was inserted.
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
    /// Helmet name.
    pub name: String,
    /// Release year.
    #[serde(serialize_with = "serialize_year")]
    pub year: i32,
    /// Shell material.
    pub material: String,
    /// Whether the helmet has a ventilation system.
    pub ventilation: bool,
    /// Safety certification (e.g. "DOT", "ECE", "Snell").
    pub protection: String,
    /// Weight in kilograms.
    pub weight: f64,
    /// Whether an integrated sun visor is fitted.
    pub sun_protection: bool,
    /// Design description.
    pub design: String,
    /// Inner lining material.
    pub lining_material: String,
    /// Fastening mechanism.
    pub fastening: String,
}

fn serialize_year<S: Serializer>(year: &i32, serializer: S) -> Result<S::Ok, S::Error> {
    if *year == 0 {
        serializer.serialize_str("")
    } else {
        serializer.collect_str(&format_args!("{year} year"))
    }
}
