//! AlphaStrike unit classifications

use std::fmt;

/// Unit type (the `TP` line of a stat card)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitType {
    BattleMech,
    IndustrialMech,
    ProtoMech,
    CombatVehicle,
    SupportVehicle,
    MobileStructure,
    BattleArmor,
    ConventionalInfantry,
    AerospaceFighter,
    ConventionalFighter,
    SmallCraft,
    DropShipSpheroid,
    DropShipAerodyne,
    WarShip,
    JumpShip,
    SpaceStation,
}

impl UnitType {
    pub const ALL: [UnitType; 16] = [
        UnitType::BattleMech,
        UnitType::IndustrialMech,
        UnitType::ProtoMech,
        UnitType::CombatVehicle,
        UnitType::SupportVehicle,
        UnitType::MobileStructure,
        UnitType::BattleArmor,
        UnitType::ConventionalInfantry,
        UnitType::AerospaceFighter,
        UnitType::ConventionalFighter,
        UnitType::SmallCraft,
        UnitType::DropShipSpheroid,
        UnitType::DropShipAerodyne,
        UnitType::WarShip,
        UnitType::JumpShip,
        UnitType::SpaceStation,
    ];

    /// Stat-card abbreviation
    pub fn label(&self) -> &'static str {
        match self {
            UnitType::BattleMech => "BM",
            UnitType::IndustrialMech => "IM",
            UnitType::ProtoMech => "PM",
            UnitType::CombatVehicle => "CV",
            UnitType::SupportVehicle => "SV",
            UnitType::MobileStructure => "MS",
            UnitType::BattleArmor => "BA",
            UnitType::ConventionalInfantry => "CI",
            UnitType::AerospaceFighter => "AF",
            UnitType::ConventionalFighter => "CF",
            UnitType::SmallCraft => "SC",
            UnitType::DropShipSpheroid => "DS",
            UnitType::DropShipAerodyne => "DA",
            UnitType::WarShip => "WS",
            UnitType::JumpShip => "JS",
            UnitType::SpaceStation => "SS",
        }
    }
}

/// Battlefield role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Ambusher,
    Brawler,
    Juggernaut,
    MissileBoat,
    Scout,
    Skirmisher,
    Sniper,
    Striker,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Ambusher => "Ambusher",
            Role::Brawler => "Brawler",
            Role::Juggernaut => "Juggernaut",
            Role::MissileBoat => "Missile Boat",
            Role::Scout => "Scout",
            Role::Skirmisher => "Skirmisher",
            Role::Sniper => "Sniper",
            Role::Striker => "Striker",
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_unit_type_labels_are_unique() {
        let labels: HashSet<&str> = UnitType::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels.len(), UnitType::ALL.len());
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(UnitType::BattleMech.to_string(), "BM");
        assert_eq!(Role::MissileBoat.to_string(), "Missile Boat");
    }
}
