//! Column offsets per event kind.
//!
//! The combat log is positional CSV and Blizzard has shifted suffix columns
//! between client patches, so offsets live in one table per log revision.
//! Column 0 always holds
//! `<timestamp>  <EVENT_NAME>`.

use super::EventKind;
use tally_types::LogFormat;

/// Columns for direct damage records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageColumns {
    pub source: usize,
    pub source_name: usize,
    /// `None` for swings, which have no spell prefix
    pub ability: Option<usize>,
    pub amount: usize,
    pub mitigated: usize,
    /// Owner GUID from the advanced parameters block
    pub owner: Option<usize>,
}

impl DamageColumns {
    pub fn required_len(&self) -> usize {
        [
            Some(self.source),
            Some(self.source_name),
            self.ability,
            Some(self.amount),
            Some(self.mitigated),
            self.owner,
        ]
        .into_iter()
        .flatten()
        .max()
        .unwrap_or(0)
            + 1
    }
}

/// Columns for `_SUPPORT` correction records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportColumns {
    pub buffed: usize,
    pub amount: usize,
    pub mitigated: usize,
    pub supporter: usize,
}

impl SupportColumns {
    pub fn required_len(&self) -> usize {
        self.buffed.max(self.amount).max(self.mitigated).max(self.supporter) + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSchema {
    pub zone_name: usize,
    pub summon_caster: usize,
    pub summon_target: usize,
    pub combatant_player: usize,
    pub combatant_spec: usize,
    pub spell: DamageColumns,
    pub swing: DamageColumns,
    pub range: DamageColumns,
    pub spell_support: SupportColumns,
    pub swing_support: SupportColumns,
    pub range_support: SupportColumns,
}

impl LogSchema {
    /// Current retail layout with advanced combat logging enabled. Damage
    /// suffix is `amount, baseAmount, overkill, school, resisted, blocked,
    /// absorbed, critical, glancing, crushing[, supporterGUID]`.
    pub const RETAIL: LogSchema = LogSchema {
        zone_name: 2,
        summon_caster: 1,
        summon_target: 5,
        combatant_player: 1,
        combatant_spec: 24,
        spell: DamageColumns {
            source: 1,
            source_name: 2,
            ability: Some(10),
            amount: 29,
            mitigated: 31,
            owner: None,
        },
        swing: DamageColumns {
            source: 1,
            source_name: 2,
            ability: None,
            amount: 26,
            mitigated: 28,
            owner: Some(10),
        },
        range: DamageColumns {
            source: 1,
            source_name: 2,
            ability: Some(10),
            amount: 29,
            mitigated: 31,
            owner: Some(13),
        },
        spell_support: SupportColumns {
            buffed: 1,
            amount: 29,
            mitigated: 31,
            supporter: 39,
        },
        // Support records carry the buff's spell prefix even for swings
        swing_support: SupportColumns {
            buffed: 1,
            amount: 29,
            mitigated: 31,
            supporter: 39,
        },
        range_support: SupportColumns {
            buffed: 1,
            amount: 29,
            mitigated: 31,
            supporter: 39,
        },
    };

    /// Layout before `baseAmount` was inserted after the damage amount:
    /// every suffix column from overkill onwards sits one position earlier.
    pub const PRE_BASE_AMOUNT: LogSchema = LogSchema {
        spell: DamageColumns {
            mitigated: 30,
            ..Self::RETAIL.spell
        },
        swing: DamageColumns {
            mitigated: 27,
            ..Self::RETAIL.swing
        },
        range: DamageColumns {
            mitigated: 30,
            ..Self::RETAIL.range
        },
        spell_support: SupportColumns {
            mitigated: 30,
            supporter: 38,
            ..Self::RETAIL.spell_support
        },
        swing_support: SupportColumns {
            mitigated: 30,
            supporter: 38,
            ..Self::RETAIL.swing_support
        },
        range_support: SupportColumns {
            mitigated: 30,
            supporter: 38,
            ..Self::RETAIL.range_support
        },
        ..Self::RETAIL
    };

    pub const fn for_format(format: LogFormat) -> LogSchema {
        match format {
            LogFormat::Retail => Self::RETAIL,
            LogFormat::PreBaseAmount => Self::PRE_BASE_AMOUNT,
        }
    }

    pub fn damage_columns(&self, kind: EventKind) -> Option<&DamageColumns> {
        match kind {
            EventKind::SpellDamage | EventKind::SpellPeriodicDamage => Some(&self.spell),
            EventKind::SwingDamage => Some(&self.swing),
            EventKind::RangeDamage => Some(&self.range),
            _ => None,
        }
    }

    pub fn support_columns(&self, kind: EventKind) -> Option<&SupportColumns> {
        match kind {
            EventKind::SpellDamageSupport | EventKind::SpellPeriodicDamageSupport => {
                Some(&self.spell_support)
            }
            EventKind::SwingDamageLandedSupport => Some(&self.swing_support),
            EventKind::RangeDamageSupport => Some(&self.range_support),
            _ => None,
        }
    }
}

impl Default for LogSchema {
    fn default() -> Self {
        Self::RETAIL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_damage_kind_has_a_layout() {
        let schema = LogSchema::RETAIL;
        for kind in EventKind::PRIORITY {
            assert_eq!(
                kind.is_direct_damage(),
                schema.damage_columns(kind).is_some(),
                "{kind:?}"
            );
            assert_eq!(kind.is_support(), schema.support_columns(kind).is_some(), "{kind:?}");
        }
    }

    #[test]
    fn format_selects_layout() {
        assert_eq!(LogSchema::for_format(LogFormat::Retail), LogSchema::RETAIL);
        assert_eq!(
            LogSchema::for_format(LogFormat::PreBaseAmount),
            LogSchema::PRE_BASE_AMOUNT
        );
        assert_eq!(LogSchema::for_format(LogFormat::default()), LogSchema::default());
    }

    #[test]
    fn required_len_covers_highest_column() {
        assert_eq!(LogSchema::RETAIL.spell.required_len(), 32);
        assert_eq!(LogSchema::RETAIL.swing.required_len(), 29);
        assert_eq!(LogSchema::RETAIL.spell_support.required_len(), 40);
        assert_eq!(LogSchema::RETAIL.swing_support.required_len(), 40);
        assert_eq!(LogSchema::PRE_BASE_AMOUNT.swing_support.required_len(), 39);
    }
}
