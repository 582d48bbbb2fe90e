//! Physical miniature records

use std::fmt;

use serde::Serialize;

use crate::error::MissingFieldError;

/// What the miniature is cast from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Plastic,
    Metal,
}

impl Material {
    pub fn label(&self) -> &'static str {
        match self {
            Material::Plastic => "plastic",
            Material::Metal => "metal",
        }
    }
}

/// Known paint schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaintScheme {
    Unpainted,
    WolfFromEbay,
    #[serde(rename = "green_and_black_gencon_2018")]
    GreenAndBlackGencon2018,
}

impl PaintScheme {
    pub fn label(&self) -> &'static str {
        match self {
            PaintScheme::Unpainted => "unpainted",
            PaintScheme::WolfFromEbay => "wolf_from_ebay",
            PaintScheme::GreenAndBlackGencon2018 => "green_and_black_gencon_2018",
        }
    }
}

/// Assembly state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Built {
    #[serde(rename = "yes")]
    Yes,
    #[serde(rename = "NO")]
    No,
}

impl Built {
    /// Labels are kept as they have always been printed, including the uppercase `NO`
    pub fn label(&self) -> &'static str {
        match self {
            Built::Yes => "yes",
            Built::No => "NO",
        }
    }
}

macro_rules! display_label {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

display_label!(Material, PaintScheme, Built);

/// A single physical miniature
///
/// All three attributes are mandatory. The catalog assigns kind and key
/// when the record is registered (see [`CatalogEntry`](super::CatalogEntry)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Miniature {
    pub material: Material,
    pub paint: PaintScheme,
    pub built: Built,
}

impl Miniature {
    /// Create a miniature with every attribute supplied
    pub fn new(material: Material, paint: PaintScheme, built: Built) -> Self {
        Self {
            material,
            paint,
            built,
        }
    }

    /// Start building a miniature whose attributes are supplied one at a time
    pub fn builder() -> MiniatureBuilder {
        MiniatureBuilder::default()
    }
}

/// Incremental construction of a [`Miniature`]
///
/// `build` fails on the first missing attribute, checked in the order
/// material, paint, built.
#[derive(Debug, Clone, Default)]
pub struct MiniatureBuilder {
    material: Option<Material>,
    paint: Option<PaintScheme>,
    built: Option<Built>,
}

impl MiniatureBuilder {
    pub fn material(mut self, material: impl Into<Option<Material>>) -> Self {
        self.material = material.into();
        self
    }

    pub fn paint(mut self, paint: impl Into<Option<PaintScheme>>) -> Self {
        self.paint = paint.into();
        self
    }

    pub fn built(mut self, built: impl Into<Option<Built>>) -> Self {
        self.built = built.into();
        self
    }

    pub fn build(self) -> Result<Miniature, MissingFieldError> {
        let material = self.material.ok_or(MissingFieldError::new("material"))?;
        let paint = self.paint.ok_or(MissingFieldError::new("paint"))?;
        let built = self.built.ok_or(MissingFieldError::new("built"))?;
        Ok(Miniature::new(material, paint, built))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_complete() {
        let mini = Miniature::builder()
            .material(Material::Metal)
            .paint(PaintScheme::Unpainted)
            .built(Built::No)
            .build()
            .expect("All fields supplied");
        assert_eq!(
            mini,
            Miniature::new(Material::Metal, PaintScheme::Unpainted, Built::No)
        );
    }

    #[test]
    fn test_builder_missing_built() {
        let err = Miniature::builder()
            .material(Material::Metal)
            .paint(PaintScheme::Unpainted)
            .built(None)
            .build()
            .unwrap_err();
        assert_eq!(err.field, "built");
    }

    #[test]
    fn test_builder_reports_first_missing_field() {
        let err = Miniature::builder().built(Built::Yes).build().unwrap_err();
        assert_eq!(err.field, "material");

        let err = Miniature::builder()
            .material(Material::Plastic)
            .build()
            .unwrap_err();
        assert_eq!(err.field, "paint");
    }

    #[test]
    fn test_labels() {
        assert_eq!(Material::Plastic.to_string(), "plastic");
        assert_eq!(PaintScheme::WolfFromEbay.to_string(), "wolf_from_ebay");
        assert_eq!(
            PaintScheme::GreenAndBlackGencon2018.to_string(),
            "green_and_black_gencon_2018"
        );
        assert_eq!(Built::Yes.to_string(), "yes");
        assert_eq!(Built::No.to_string(), "NO");
    }
}
