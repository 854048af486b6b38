//! WoW specializations and class mapping
//!
//! Maps the spec id logged in `COMBATANT_INFO` to its class and role. The
//! class decides the meter bar color.

use crate::context::{Color, class_colors};
use phf::phf_map;

/// Role a specialization fills in group content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Tank,
    Healer,
    Dps,
    /// Augmentation
    Support,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    DeathKnight,
    DemonHunter,
    Druid,
    Evoker,
    Hunter,
    Mage,
    Monk,
    Paladin,
    Priest,
    Rogue,
    Shaman,
    Warlock,
    Warrior,
}

impl Class {
    pub const fn name(&self) -> &'static str {
        match self {
            Class::DeathKnight => "Death Knight",
            Class::DemonHunter => "Demon Hunter",
            Class::Druid => "Druid",
            Class::Evoker => "Evoker",
            Class::Hunter => "Hunter",
            Class::Mage => "Mage",
            Class::Monk => "Monk",
            Class::Paladin => "Paladin",
            Class::Priest => "Priest",
            Class::Rogue => "Rogue",
            Class::Shaman => "Shaman",
            Class::Warlock => "Warlock",
            Class::Warrior => "Warrior",
        }
    }

    pub const fn color(&self) -> Color {
        match self {
            Class::DeathKnight => class_colors::DEATH_KNIGHT,
            Class::DemonHunter => class_colors::DEMON_HUNTER,
            Class::Druid => class_colors::DRUID,
            Class::Evoker => class_colors::EVOKER,
            Class::Hunter => class_colors::HUNTER,
            Class::Mage => class_colors::MAGE,
            Class::Monk => class_colors::MONK,
            Class::Paladin => class_colors::PALADIN,
            Class::Priest => class_colors::PRIEST,
            Class::Rogue => class_colors::ROGUE,
            Class::Shaman => class_colors::SHAMAN,
            Class::Warlock => class_colors::WARLOCK,
            Class::Warrior => class_colors::WARRIOR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecInfo {
    pub name: &'static str,
    pub class: Class,
    pub role: Role,
}

const fn spec(name: &'static str, class: Class, role: Role) -> SpecInfo {
    SpecInfo { name, class, role }
}

pub static SPECS: phf::Map<u32, SpecInfo> = phf_map! {
    250u32 => spec("Blood", Class::DeathKnight, Role::Tank),
    251u32 => spec("Frost", Class::DeathKnight, Role::Dps),
    252u32 => spec("Unholy", Class::DeathKnight, Role::Dps),
    577u32 => spec("Havoc", Class::DemonHunter, Role::Dps),
    581u32 => spec("Vengeance", Class::DemonHunter, Role::Tank),
    102u32 => spec("Balance", Class::Druid, Role::Dps),
    103u32 => spec("Feral", Class::Druid, Role::Dps),
    104u32 => spec("Guardian", Class::Druid, Role::Tank),
    105u32 => spec("Restoration", Class::Druid, Role::Healer),
    1467u32 => spec("Devastation", Class::Evoker, Role::Dps),
    1468u32 => spec("Preservation", Class::Evoker, Role::Healer),
    1473u32 => spec("Augmentation", Class::Evoker, Role::Support),
    253u32 => spec("Beast Mastery", Class::Hunter, Role::Dps),
    254u32 => spec("Marksmanship", Class::Hunter, Role::Dps),
    255u32 => spec("Survival", Class::Hunter, Role::Dps),
    62u32 => spec("Arcane", Class::Mage, Role::Dps),
    63u32 => spec("Fire", Class::Mage, Role::Dps),
    64u32 => spec("Frost", Class::Mage, Role::Dps),
    268u32 => spec("Brewmaster", Class::Monk, Role::Tank),
    269u32 => spec("Windwalker", Class::Monk, Role::Dps),
    270u32 => spec("Mistweaver", Class::Monk, Role::Healer),
    65u32 => spec("Holy", Class::Paladin, Role::Healer),
    66u32 => spec("Protection", Class::Paladin, Role::Tank),
    70u32 => spec("Retribution", Class::Paladin, Role::Dps),
    256u32 => spec("Discipline", Class::Priest, Role::Healer),
    257u32 => spec("Holy", Class::Priest, Role::Healer),
    258u32 => spec("Shadow", Class::Priest, Role::Dps),
    259u32 => spec("Assassination", Class::Rogue, Role::Dps),
    260u32 => spec("Outlaw", Class::Rogue, Role::Dps),
    261u32 => spec("Subtlety", Class::Rogue, Role::Dps),
    262u32 => spec("Elemental", Class::Shaman, Role::Dps),
    263u32 => spec("Enhancement", Class::Shaman, Role::Dps),
    264u32 => spec("Restoration", Class::Shaman, Role::Healer),
    265u32 => spec("Affliction", Class::Warlock, Role::Dps),
    266u32 => spec("Demonology", Class::Warlock, Role::Dps),
    267u32 => spec("Destruction", Class::Warlock, Role::Dps),
    71u32 => spec("Arms", Class::Warrior, Role::Dps),
    72u32 => spec("Fury", Class::Warrior, Role::Dps),
    73u32 => spec("Protection", Class::Warrior, Role::Tank),
};

#[inline]
pub fn lookup_spec(spec_id: u32) -> Option<&'static SpecInfo> {
    SPECS.get(&spec_id)
}

/// Bar color for a spec id; `None` renders uncolored.
pub fn spec_color(spec_id: Option<u32>) -> Option<Color> {
    spec_id.and_then(lookup_spec).map(|s| s.class.color())
}
