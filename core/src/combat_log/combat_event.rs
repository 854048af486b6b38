use crate::context::IStr;
use chrono::NaiveDateTime;
use memchr::memmem;

/// Ability name credited for auto-attack swings, which carry no spell columns.
pub const MELEE_ABILITY: &str = "Melee";

/// Every record kind the meter reacts to. Anything else in the log is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    ZoneChange,
    SpellSummon,
    CombatantInfo,
    SpellDamageSupport,
    SpellPeriodicDamageSupport,
    SwingDamageLandedSupport,
    RangeDamageSupport,
    SpellPeriodicDamage,
    SpellDamage,
    SwingDamage,
    RangeDamage,
}

impl EventKind {
    /// Match order for classification. Several tokens are substrings of later
    /// ones (`SPELL_DAMAGE` of `SPELL_DAMAGE_SUPPORT`), so the specific
    /// variants must come first.
    pub const PRIORITY: [EventKind; 11] = [
        EventKind::ZoneChange,
        EventKind::SpellSummon,
        EventKind::CombatantInfo,
        EventKind::SpellDamageSupport,
        EventKind::SpellPeriodicDamageSupport,
        EventKind::SwingDamageLandedSupport,
        EventKind::RangeDamageSupport,
        EventKind::SpellPeriodicDamage,
        EventKind::SpellDamage,
        EventKind::SwingDamage,
        EventKind::RangeDamage,
    ];

    pub const fn token(self) -> &'static str {
        match self {
            EventKind::ZoneChange => "ZONE_CHANGE",
            EventKind::SpellSummon => "SPELL_SUMMON",
            EventKind::CombatantInfo => "COMBATANT_INFO",
            EventKind::SpellDamageSupport => "SPELL_DAMAGE_SUPPORT",
            EventKind::SpellPeriodicDamageSupport => "SPELL_PERIODIC_DAMAGE_SUPPORT",
            EventKind::SwingDamageLandedSupport => "SWING_DAMAGE_LANDED_SUPPORT",
            EventKind::RangeDamageSupport => "RANGE_DAMAGE_SUPPORT",
            EventKind::SpellPeriodicDamage => "SPELL_PERIODIC_DAMAGE",
            EventKind::SpellDamage => "SPELL_DAMAGE",
            EventKind::SwingDamage => "SWING_DAMAGE",
            EventKind::RangeDamage => "RANGE_DAMAGE",
        }
    }

    /// Classify a raw line by substring containment; first match in
    /// [`EventKind::PRIORITY`] wins.
    pub fn classify(line: &str) -> Option<EventKind> {
        let haystack = line.as_bytes();
        Self::PRIORITY
            .into_iter()
            .find(|kind| memmem::find(haystack, kind.token().as_bytes()).is_some())
    }

    pub const fn is_support(self) -> bool {
        matches!(
            self,
            EventKind::SpellDamageSupport
                | EventKind::SpellPeriodicDamageSupport
                | EventKind::SwingDamageLandedSupport
                | EventKind::RangeDamageSupport
        )
    }

    pub const fn is_direct_damage(self) -> bool {
        matches!(
            self,
            EventKind::SpellDamage
                | EventKind::SpellPeriodicDamage
                | EventKind::SwingDamage
                | EventKind::RangeDamage
        )
    }
}

/// Unit classification carried in the GUID prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum EntityKind {
    Player,
    Pet,
    Creature,
    /// Vehicles, game objects, the nil GUID
    #[default]
    Other,
}

impl EntityKind {
    pub fn from_guid(guid: &str) -> Self {
        if guid.starts_with("Player-") {
            EntityKind::Player
        } else if guid.starts_with("Pet-") {
            EntityKind::Pet
        } else if guid.starts_with("Creature-") {
            EntityKind::Creature
        } else {
            EntityKind::Other
        }
    }
}

/// A classified line with the columns its handler needs already extracted.
#[derive(Debug, Clone, PartialEq)]
pub enum CombatRecord {
    ZoneChange {
        zone_name: String,
    },
    Summon {
        caster: IStr,
        summoned: IStr,
    },
    CombatantInfo {
        player: IStr,
        spec_id: u32,
    },
    Damage(DamageRecord),
    Support(SupportRecord),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DamageRecord {
    pub kind: EventKind,
    pub line_number: u64,
    pub timestamp: NaiveDateTime,
    pub source: IStr,
    pub source_kind: EntityKind,
    pub source_name: IStr,
    pub ability: IStr,
    pub amount: i64,
    /// Absorbed or overkill portion, whichever column the schema points at.
    /// Non-positive values mean nothing to subtract.
    pub mitigated: i64,
    /// Owner GUID from the advanced-logging columns, when the layout has one
    /// and the source is a pet.
    pub owner: Option<IStr>,
}

impl DamageRecord {
    pub fn effective(&self) -> i64 {
        effective_amount(self.amount, self.mitigated)
    }
}

/// Damage credited to the buffed player that belongs to the buff's caster.
#[derive(Debug, Clone, PartialEq)]
pub struct SupportRecord {
    pub kind: EventKind,
    pub line_number: u64,
    pub buffed: IStr,
    pub supporter: IStr,
    pub amount: i64,
    pub mitigated: i64,
}

impl SupportRecord {
    pub fn effective(&self) -> i64 {
        effective_amount(self.amount, self.mitigated)
    }
}

#[inline]
fn effective_amount(amount: i64, mitigated: i64) -> i64 {
    if mitigated > 0 {
        amount.saturating_sub(mitigated)
    } else {
        amount
    }
}
