//! Demo roster of chassis templates and their OmniMech configurations

use std::sync::Arc;

use crate::error::MissingFieldError;

use super::specials::{AMS, CASE, IF, LRM, OMNI, SRM};
use super::template::{Unit, UnitStats, UnitTemplate};
use super::types::{Role, UnitType};

/// Templates and the units built on them
#[derive(Debug, Clone)]
pub struct Roster {
    pub templates: Vec<Arc<UnitTemplate>>,
    pub units: Vec<Unit>,
}

/// Mad Cat chassis: everything the configurations share
pub fn mad_cat() -> Arc<UnitTemplate> {
    UnitTemplate::new(
        None,
        UnitStats::new()
            .with_name("Mad Cat")
            .with_tp(UnitType::BattleMech)
            .with_sz(3)
            .with_mv(10)
            .with_role(Role::Skirmisher)
            .with_a(8)
            .with_s(4)
            .with_specials([CASE, OMNI]),
    )
    .shared()
}

/// Vulture chassis
pub fn vulture() -> Arc<UnitTemplate> {
    UnitTemplate::new(
        None,
        UnitStats::new()
            .with_name("Vulture")
            .with_tp(UnitType::BattleMech)
            .with_sz(3)
            .with_mv(10)
            .with_role(Role::MissileBoat)
            .with_a(5)
            .with_s(3)
            .with_specials([CASE, OMNI]),
    )
    .shared()
}

/// Build the demo roster
pub fn demo() -> Result<Roster, MissingFieldError> {
    let mad_cat = mad_cat();
    let vulture = vulture();

    let units = vec![
        Unit::new(
            Some(mad_cat.clone()),
            UnitStats::new()
                .with_model("Prime")
                .with_pv(54)
                .with_damage(5, 5, 4)
                .with_ov(1)
                .with_specials([IF(2), LRM(1, 1, 2)]),
        )?,
        Unit::new(
            Some(mad_cat.clone()),
            UnitStats::new()
                .with_model("A")
                .with_pv(50)
                .with_damage(6, 6, 2)
                .with_specials([AMS, SRM(1, 1)]),
        )?,
        Unit::new(
            Some(vulture.clone()),
            UnitStats::new()
                .with_model("Prime")
                .with_pv(38)
                .with_damage(3, 4, 3)
                .with_ov(1)
                .with_specials([IF(2), LRM(2, 2, 2)]),
        )?,
    ];

    Ok(Roster {
        templates: vec![mad_cat, vulture],
        units,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_builds() {
        let roster = demo().expect("Demo units are complete");
        assert_eq!(roster.templates.len(), 2);
        assert_eq!(roster.units.len(), 3);
    }

    #[test]
    fn test_demo_units_share_templates() {
        let roster = demo().unwrap();
        let mad_cat = &roster.templates[0];
        // roster.templates plus two Mad Cat units
        assert_eq!(Arc::strong_count(mad_cat), 3);
        assert_eq!(roster.units[1].name(), "Mad Cat");
        assert_eq!(roster.units[1].ov(), 0);
    }
}
