//! Input shapes for creating and updating helmets.
//!
//! Both accept the release year as a plain integer.

use serde::{Deserialize, Serialize};

use super::model::Helmet;

/// Data required to create (or fully replace) a helmet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewHelmet {
    /// Helmet name.
    #[serde(default)]
    pub name: String,
    /// Release year.
    #[serde(default)]
    pub year: i32,
    /// Shell material.
    #[serde(default)]
    pub material: String,
    /// Ventilation system present.
    #[serde(default)]
    pub ventilation: bool,
    /// Safety certification.
    #[serde(default)]
    pub protection: String,
    /// Weight in kilograms.
    #[serde(default)]
    pub weight: f64,
    /// Integrated sun visor present.
    #[serde(default)]
    pub sun_protection: bool,
    /// Design description.
    #[serde(default)]
    pub design: String,
    /// Inner lining material.
    #[serde(default)]
    pub lining_material: String,
    /// Fastening mechanism.
    #[serde(default)]
    pub fastening: String,
}

impl NewHelmet {
    /// Overwrite every mutable field of `helmet`, keeping its id and timestamp.
    pub fn apply_to(self, helmet: &mut Helmet) {
        helmet.name = self.name;
        helmet.year = self.year;
        helmet.material = self.material;
        helmet.ventilation = self.ventilation;
        helmet.protection = self.protection;
        helmet.weight = self.weight;
        helmet.sun_protection = self.sun_protection;
        helmet.design = self.design;
        helmet.lining_material = self.lining_material;
        helmet.fastening = self.fastening;
    }
}

impl From<NewHelmet> for Helmet {
    fn from(input: NewHelmet) -> Self {
        let mut helmet = Helmet::default();
        input.apply_to(&mut helmet);
        helmet
    }
}

/// Partial update: absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HelmetPatch {
    /// New name.
    pub name: Option<String>,
    /// New release year.
    pub year: Option<i32>,
    /// New shell material.
    pub material: Option<String>,
    /// New ventilation flag.
    pub ventilation: Option<bool>,
    /// New certification.
    pub protection: Option<String>,
    /// New weight.
    pub weight: Option<f64>,
    /// New sun visor flag.
    pub sun_protection: Option<bool>,
    /// New design description.
    pub design: Option<String>,
    /// New lining material.
    pub lining_material: Option<String>,
    /// New fastening mechanism.
    pub fastening: Option<String>,
}

impl HelmetPatch {
    /// Whether the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply present fields onto `helmet`.
    pub fn apply_to(self, helmet: &mut Helmet) {
        if let Some(name) = self.name {
            helmet.name = name;
        }
        if let Some(year) = self.year {
            helmet.year = year;
        }
        if let Some(material) = self.material {
            helmet.material = material;
        }
        if let Some(ventilation) = self.ventilation {
            helmet.ventilation = ventilation;
        }
        if let Some(protection) = self.protection {
            helmet.protection = protection;
        }
        if let Some(weight) = self.weight {
            helmet.weight = weight;
        }
        if let Some(sun_protection) = self.sun_protection {
            helmet.sun_protection = sun_protection;
        }
        if let Some(design) = self.design {
            helmet.design = design;
        }
        if let Some(lining_material) = self.lining_material {
            helmet.lining_material = lining_material;
        }
        if let Some(fastening) = self.fastening {
            helmet.fastening = fastening;
        }
    }
}
