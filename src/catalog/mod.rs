//! Miniature catalog
//!
//! A registry of physical miniatures. Each [`Maker`] yields zero or more
//! records; the catalog derives a kind from the maker's name and keys each
//! record as `<kind>_<index>`.
//!
//! # Example
//!
//! ```rust
//! use tabletop_catalog::catalog::{minis, Built};
//!
//! let mad_cat = minis().get("mad_cat_0").unwrap();
//! assert_eq!(mad_cat.kind, "mad_cat");
//! assert_eq!(mad_cat.miniature.built, Built::No);
//! ```

mod makers;
mod miniature;
mod naming;
mod registry;

use std::sync::OnceLock;

pub use makers::{Maker, Produced, MAKERS};
pub use miniature::{Built, Material, Miniature, MiniatureBuilder, PaintScheme};
pub use naming::{kind_for_maker, to_snake_case, MAKER_PREFIX};
pub use registry::{entries_to_toml, CatalogEntry, MiniatureDb};

static MINIS: OnceLock<MiniatureDb> = OnceLock::new();

/// The process-wide catalog built from [`MAKERS`]
///
/// Built on first access; every later call returns the same catalog.
pub fn minis() -> &'static MiniatureDb {
    MINIS.get_or_init(|| {
        MiniatureDb::build(MAKERS)
            .expect("Built-in makers should yield complete, uniquely keyed records")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_keys() {
        let keys: Vec<&str> = minis().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["mad_cat_0", "mad_cat_1", "vulture_0"]);
    }

    #[test]
    fn test_default_catalog_is_shared() {
        assert!(std::ptr::eq(minis(), minis()));
    }
}
