//! Builders for full-width retail log lines used across the crate's tests.

use super::LogSchema;

pub(crate) const TS: &str = "4/12/2025 20:15:33.1230-4";

const SCHEMA: LogSchema = LogSchema::RETAIL;

/// Build a line of `len` columns filled with `0`, then overwrite `values`.
pub(crate) fn record(ts: &str, event: &str, len: usize, values: &[(usize, String)]) -> String {
    let mut cols = vec!["0".to_string(); len];
    cols[0] = format!("{ts}  {event}");
    for (idx, value) in values {
        cols[*idx] = value.clone();
    }
    cols.join(",")
}

fn quoted(s: &str) -> String {
    format!("\"{s}\"")
}

pub(crate) fn zone_change(zone: &str) -> String {
    record(
        TS,
        "ZONE_CHANGE",
        4,
        &[(1, "2657".into()), (SCHEMA.zone_name, quoted(zone)), (3, "16".into())],
    )
}

pub(crate) fn combatant_info(player: &str, spec_id: u32) -> String {
    record(
        TS,
        "COMBATANT_INFO",
        33,
        &[
            (SCHEMA.combatant_player, player.into()),
            (SCHEMA.combatant_spec, spec_id.to_string()),
        ],
    )
}

pub(crate) fn summon(caster: &str, summoned: &str) -> String {
    record(
        TS,
        "SPELL_SUMMON",
        12,
        &[
            (SCHEMA.summon_caster, caster.into()),
            (2, quoted("Caster")),
            (SCHEMA.summon_target, summoned.into()),
            (6, quoted("Summoned")),
            (10, quoted("Summon Pet")),
        ],
    )
}

pub(crate) fn spell_event(
    event: &str,
    ts: &str,
    source: &str,
    name: &str,
    ability: &str,
    amount: i64,
    mitigated: i64,
) -> String {
    let cols = SCHEMA.spell;
    record(
        ts,
        event,
        40,
        &[
            (cols.source, source.into()),
            (cols.source_name, quoted(name)),
            (5, "Creature-0-1-2-3-4-5".into()),
            (9, "12345".into()),
            (cols.ability.unwrap_or(10), quoted(ability)),
            (cols.amount, amount.to_string()),
            (cols.mitigated, mitigated.to_string()),
        ],
    )
}

pub(crate) fn spell_damage(
    ts: &str,
    source: &str,
    name: &str,
    ability: &str,
    amount: i64,
    mitigated: i64,
) -> String {
    spell_event("SPELL_DAMAGE", ts, source, name, ability, amount, mitigated)
}

pub(crate) fn swing_event(
    event: &str,
    ts: &str,
    source: &str,
    name: &str,
    owner: &str,
    amount: i64,
    mitigated: i64,
) -> String {
    let cols = SCHEMA.swing;
    record(
        ts,
        event,
        37,
        &[
            (cols.source, source.into()),
            (cols.source_name, quoted(name)),
            (5, "Creature-0-1-2-3-4-5".into()),
            (cols.owner.unwrap_or(10), owner.into()),
            (cols.amount, amount.to_string()),
            (cols.mitigated, mitigated.to_string()),
        ],
    )
}

pub(crate) fn swing_damage(
    ts: &str,
    source: &str,
    owner: &str,
    amount: i64,
    mitigated: i64,
) -> String {
    swing_event("SWING_DAMAGE", ts, source, "Unit", owner, amount, mitigated)
}

pub(crate) fn range_damage(
    ts: &str,
    source: &str,
    name: &str,
    owner: &str,
    amount: i64,
    mitigated: i64,
) -> String {
    let cols = SCHEMA.range;
    record(
        ts,
        "RANGE_DAMAGE",
        40,
        &[
            (cols.source, source.into()),
            (cols.source_name, quoted(name)),
            (cols.ability.unwrap_or(10), quoted("Auto Shot")),
            (cols.owner.unwrap_or(13), owner.into()),
            (cols.amount, amount.to_string()),
            (cols.mitigated, mitigated.to_string()),
        ],
    )
}

/// `_SUPPORT` record for `SPELL_DAMAGE_SUPPORT`,
/// `SPELL_PERIODIC_DAMAGE_SUPPORT` or `RANGE_DAMAGE_SUPPORT`.
pub(crate) fn spell_support(
    event: &str,
    buffed: &str,
    supporter: &str,
    amount: i64,
    mitigated: i64,
) -> String {
    let cols = SCHEMA.spell_support;
    record(
        TS,
        event,
        40,
        &[
            (cols.buffed, buffed.into()),
            (10, quoted("Ebon Might")),
            (cols.amount, amount.to_string()),
            (cols.mitigated, mitigated.to_string()),
            (cols.supporter, supporter.into()),
        ],
    )
}

/// `SWING_DAMAGE_LANDED_SUPPORT`: the buff's spell prefix sits at 9..=11,
/// so the amounts line up with the spell layout. Columns 26 and 36, where a
/// plain swing keeps its amount and advanced fields, hold decoys.
pub(crate) fn swing_support(buffed: &str, supporter: &str, amount: i64, mitigated: i64) -> String {
    let cols = SCHEMA.swing_support;
    record(
        TS,
        "SWING_DAMAGE_LANDED_SUPPORT",
        41,
        &[
            (cols.buffed, buffed.into()),
            (9, "395152".into()),
            (10, quoted("Ebon Might")),
            (11, "0xc".into()),
            (26, "70".into()),
            (36, "Player-1-DECOY".into()),
            (cols.amount, amount.to_string()),
            (cols.mitigated, mitigated.to_string()),
            (cols.supporter, supporter.into()),
        ],
    )
}
