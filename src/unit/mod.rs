//! AlphaStrike unit statistics
//!
//! Units are stat blocks that can inherit any unset attribute from a shared
//! template.
//!
//! # Example
//!
//! ```rust
//! use tabletop_catalog::unit::{specials::{CASE, IF, OMNI}, Unit, UnitStats, UnitTemplate, UnitType};
//!
//! let mad_cat = UnitTemplate::new(
//!     None,
//!     UnitStats::new()
//!         .with_name("Mad Cat")
//!         .with_tp(UnitType::BattleMech)
//!         .with_sz(3)
//!         .with_mv(10)
//!         .with_a(8)
//!         .with_s(4)
//!         .with_specials([CASE, OMNI]),
//! )
//! .shared();
//!
//! let prime = Unit::new(
//!     Some(mad_cat),
//!     UnitStats::new().with_model("Prime").with_pv(54).with_specials([IF(2)]),
//! )
//! .unwrap();
//!
//! assert_eq!(prime.name(), "Mad Cat");
//! assert_eq!(prime.specials(), vec![CASE, OMNI, IF(2)]);
//! ```

pub mod roster;
pub mod specials;
mod template;
mod types;

pub use specials::Special;
pub use template::{Unit, UnitStats, UnitTemplate};
pub use types::{Role, UnitType};
