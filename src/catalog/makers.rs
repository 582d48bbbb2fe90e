//! The built-in makers, one per miniature model

use std::fmt;

use crate::error::MissingFieldError;

use super::miniature::{Built, Material, Miniature, PaintScheme};

/// Records yielded by a maker, lazily and in order
pub type Produced = Box<dyn Iterator<Item = Result<Miniature, MissingFieldError>>>;

/// A named producer of miniatures
///
/// The name carries the [`MAKER_PREFIX`](super::MAKER_PREFIX) followed by the
/// CamelCase model name; the catalog derives the kind from it.
#[derive(Clone, Copy)]
pub struct Maker {
    pub name: &'static str,
    make: fn() -> Produced,
}

impl Maker {
    pub const fn new(name: &'static str, make: fn() -> Produced) -> Self {
        Self { name, make }
    }

    /// Start a fresh run of this maker
    pub fn produce(&self) -> Produced {
        (self.make)()
    }
}

impl fmt::Debug for Maker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Maker").field("name", &self.name).finish()
    }
}

/// Every maker the default catalog is built from, in declaration order
pub static MAKERS: &[Maker] = &[
    Maker::new("MakeMadCat", make_mad_cat),
    Maker::new("MakeVulture", make_vulture),
];

fn make_mad_cat() -> Produced {
    Box::new(
        [
            Miniature::builder()
                .material(Material::Metal)
                .paint(PaintScheme::Unpainted)
                .built(Built::No),
            Miniature::builder()
                .material(Material::Metal)
                .paint(PaintScheme::GreenAndBlackGencon2018)
                .built(Built::Yes),
        ]
        .into_iter()
        .map(|b| b.build()),
    )
}

fn make_vulture() -> Produced {
    Box::new(std::iter::once_with(|| {
        Miniature::builder()
            .material(Material::Metal)
            .paint(PaintScheme::Unpainted)
            .built(Built::No)
            .build()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_makers_are_prefixed() {
        for maker in MAKERS {
            assert!(maker.name.starts_with(crate::catalog::MAKER_PREFIX), "{:?}", maker);
        }
    }

    #[test]
    fn test_mad_cat_yields_two_complete_records() {
        let minis = make_mad_cat().collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(minis.len(), 2);
        assert_eq!(minis[1].paint, PaintScheme::GreenAndBlackGencon2018);
        assert_eq!(minis[1].built, Built::Yes);
    }

    #[test]
    fn test_produce_restarts_from_scratch() {
        let maker = MAKERS[1];
        assert_eq!(maker.produce().count(), 1);
        assert_eq!(maker.produce().count(), 1);
    }
}
