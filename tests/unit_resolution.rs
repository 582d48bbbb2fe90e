//! Integration tests for template/override resolution of unit statistics

use std::sync::Arc;

use pretty_assertions::assert_eq;

use tabletop_catalog::unit::specials::{CASE, IF, LRM, OMNI, SRM};
use tabletop_catalog::unit::{Role, Unit, UnitStats, UnitTemplate, UnitType};
use tabletop_catalog::DisplayConfig;

fn mad_cat_template() -> Arc<UnitTemplate> {
    UnitTemplate::new(
        None,
        UnitStats::new()
            .with_name("Mad Cat")
            .with_tp(UnitType::BattleMech)
            .with_sz(3)
            .with_mv(10)
            .with_a(8)
            .with_s(4)
            .with_specials([CASE, OMNI]),
    )
    .shared()
}

fn mad_cat_prime() -> Unit {
    Unit::new(
        Some(mad_cat_template()),
        UnitStats::new()
            .with_model("Prime")
            .with_pv(54)
            .with_damage(5, 5, 4)
            .with_ov(1)
            .with_specials([IF(2), LRM(1, 1, 2)]),
    )
    .expect("Mad Cat Prime is complete")
}

#[test]
fn test_mad_cat_prime_resolution() {
    let unit = mad_cat_prime();

    assert_eq!(unit.name(), "Mad Cat");
    assert_eq!(unit.model(), "Prime");
    assert_eq!(unit.pv(), 54);
    assert_eq!(unit.tp(), UnitType::BattleMech);
    assert_eq!(unit.sz(), 3);
    assert_eq!(unit.mv(), 10);
    assert_eq!(unit.mvj(), 0);
    assert_eq!(unit.a(), 8);
    assert_eq!(unit.s(), 4);
    assert_eq!(unit.ov(), 1);

    let specials: Vec<String> = unit.specials().iter().map(|s| s.to_string()).collect();
    assert_eq!(specials, vec!["CASE", "OMNI", "IF2", "LRM1/1/2"]);
}

#[test]
fn test_mad_cat_prime_output() {
    insta::assert_snapshot!(
        mad_cat_prime().to_string(),
        @r#"{ name: "Mad Cat", model: "Prime", pv: 54, tp: BM, sz: 3, mv: 10, mvj: 0, role: -, ds: 5, dm: 5, dl: 4, de: -, ov: 1, a: 8, s: 4, specials: [CASE, OMNI, IF2, LRM1/1/2] }"#
    );
}

#[test]
fn test_override_wins_regardless_of_template() {
    let unit = Unit::new(
        Some(mad_cat_template()),
        UnitStats::new()
            .with_name("Timber Wolf")
            .with_model("Prime")
            .with_pv(54)
            .with_mv(12)
            .with_a(9),
    )
    .unwrap();
    assert_eq!(unit.name(), "Timber Wolf");
    assert_eq!(unit.mv(), 12);
    assert_eq!(unit.a(), 9);
    assert_eq!(unit.s(), 4);
}

#[test]
fn test_fallback_and_defaults() {
    let jumper = UnitTemplate::new(
        None,
        UnitStats::new().with_mvj(8).with_role(Role::Striker),
    )
    .shared();
    let child = UnitTemplate::new(Some(jumper), UnitStats::new());
    assert_eq!(child.mvj(), 8);
    assert_eq!(child.role(), Some(Role::Striker));
    assert_eq!(child.ov(), 0);
    assert_eq!(child.ds(), None);
    assert_eq!(child.name(), None);
}

#[test]
fn test_specials_are_template_then_unit() {
    let template = UnitTemplate::new(None, UnitStats::new().with_specials([CASE])).shared();
    let unit = UnitTemplate::new(
        Some(template),
        UnitStats::new().with_specials([OMNI, SRM(2, 2)]),
    );
    assert_eq!(unit.specials(), vec![CASE, OMNI, SRM(2, 2)]);
}

#[test]
fn test_unit_missing_model() {
    let template = UnitTemplate::new(None, UnitStats::new().with_name("Mad Cat")).shared();
    let err = Unit::new(Some(template), UnitStats::new()).unwrap_err();
    assert_eq!(err.field, "model");
}

#[test]
fn test_template_needs_nothing() {
    let template = UnitTemplate::new(None, UnitStats::new());
    assert!(template.specials().is_empty());
}

#[test]
fn test_sparse_template_output() {
    let template = UnitTemplate::new(
        None,
        UnitStats::new().with_name("Mad Cat").with_model("Prime"),
    );
    insta::assert_snapshot!(
        template.to_string(),
        @r#"{ name: "Mad Cat", model: "Prime", pv: -, tp: -, sz: -, mv: -, mvj: 0, role: -, ds: -, dm: -, dl: -, de: -, ov: 0, a: -, s: -, specials: [] }"#
    );

    let config = DisplayConfig::new().with_placeholder("n/a");
    assert!(template.fmt_with(&config).contains("pv: n/a, tp: n/a"));
}
