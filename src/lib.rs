//! Tabletop Catalog - miniatures and AlphaStrike unit statistics
//!
//! Two independent pieces live here: a catalog of physical miniatures keyed by
//! the maker that produced them, and AlphaStrike stat blocks that inherit unset
//! attributes from shared templates.
//!
//! # Example
//!
//! ```rust
//! use tabletop_catalog::demo_report;
//!
//! let report = demo_report(&Default::default()).unwrap();
//! assert!(report.contains("mad_cat_0"));
//! assert!(report.contains("\"Mad Cat\""));
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod unit;

pub use catalog::{minis, CatalogEntry, MiniatureDb};
pub use config::{ConfigError, DisplayConfig};
pub use error::{CatalogError, MissingFieldError};
pub use unit::{Unit, UnitStats, UnitTemplate};

use thiserror::Error;

/// Errors from the report helpers
#[derive(Debug, Error)]
pub enum ReportError {
    /// Catalog lookup or construction failed
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// A demo unit is missing a required attribute
    #[error("unit error: {0}")]
    Unit(#[from] MissingFieldError),

    /// TOML export failed
    #[error("export error: {0}")]
    Export(#[from] toml::ser::Error),
}

/// Catalog keys printed by the demo report
pub const DEMO_KEYS: [&str; 3] = ["mad_cat_0", "mad_cat_1", "vulture_0"];

/// Format selected catalog entries, one per line
pub fn catalog_report(keys: &[&str], config: &DisplayConfig) -> Result<String, ReportError> {
    let db = minis();
    let lines = keys
        .iter()
        .map(|key| db.get(key).map(|entry| entry.fmt_with(config)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}

/// Export selected catalog entries as TOML
pub fn catalog_toml(keys: &[&str]) -> Result<String, ReportError> {
    let db = minis();
    let entries = keys
        .iter()
        .map(|key| db.get(key))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(catalog::entries_to_toml(entries)?)
}

/// Format the demo roster: each template, then each unit
pub fn roster_report(config: &DisplayConfig) -> Result<String, ReportError> {
    let roster = unit::roster::demo()?;
    let lines: Vec<String> = roster
        .templates
        .iter()
        .map(|t| t.fmt_with(config))
        .chain(roster.units.iter().map(|u| u.fmt_with(config)))
        .collect();
    Ok(lines.join("\n"))
}

/// The full demo output: the [`DEMO_KEYS`] records followed by the roster
pub fn demo_report(config: &DisplayConfig) -> Result<String, ReportError> {
    let catalog = catalog_report(&DEMO_KEYS, config)?;
    let roster = roster_report(config)?;
    Ok(format!("{}\n{}", catalog, roster))
}
