use super::*;
use crate::context::{IStr, intern};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use memchr::memchr2_iter;


/// Turns raw log lines into [`CombatRecord`]s. Pure: safe to share across
/// the reader's worker threads.
#[derive(Debug, Clone)]
pub struct LogParser {
    schema: LogSchema,
    default_year: i32,
}

impl LogParser {
    pub fn new(schema: LogSchema, default_year: i32) -> Self {
        Self {
            schema,
            default_year,
        }
    }

    pub fn schema(&self) -> &LogSchema {
        &self.schema
    }

    pub fn parse_line(&self, line_number: u64, line: &str) -> Result<CombatRecord, ParseError> {
        let kind = EventKind::classify(line).ok_or(ParseError::Unclassified { line_number })?;
        let columns = Columns::split(line_number, line.trim_end());

        match kind {
            EventKind::ZoneChange => Ok(CombatRecord::ZoneChange {
                zone_name: columns.text(self.schema.zone_name)?.to_string(),
            }),
            EventKind::SpellSummon => Ok(CombatRecord::Summon {
                caster: columns.guid(self.schema.summon_caster)?,
                summoned: columns.guid(self.schema.summon_target)?,
            }),
            EventKind::CombatantInfo => {
                let player = columns.guid(self.schema.combatant_player)?;
                let spec_id = columns.number(self.schema.combatant_spec)?;
                Ok(CombatRecord::CombatantInfo {
                    player,
                    spec_id: u32::try_from(spec_id).map_err(|_| ParseError::InvalidNumber {
                        line_number,
                        column: self.schema.combatant_spec,
                        value: spec_id.to_string(),
                    })?,
                })
            }
            kind if kind.is_support() => {
                let Some(layout) = self.schema.support_columns(kind) else {
                    return Err(ParseError::Unclassified { line_number });
                };
                self.parse_support(kind, &columns, layout)
            }
            kind => {
                let Some(layout) = self.schema.damage_columns(kind) else {
                    return Err(ParseError::Unclassified { line_number });
                };
                self.parse_damage(kind, &columns, layout)
            }
        }
    }

    fn parse_damage(
        &self,
        kind: EventKind,
        columns: &Columns<'_>,
        layout: &DamageColumns,
    ) -> Result<CombatRecord, ParseError> {
        columns.require(layout.required_len())?;

        let source_text = columns.text(layout.source)?;
        let source_kind = EntityKind::from_guid(source_text);
        let ability = match layout.ability {
            Some(col) => intern(columns.text(col)?),
            None => intern(MELEE_ABILITY),
        };
        let owner = match layout.owner {
            Some(col) if source_kind == EntityKind::Pet => Some(columns.guid(col)?),
            _ => None,
        };

        Ok(CombatRecord::Damage(DamageRecord {
            kind,
            line_number: columns.line_number,
            timestamp: self.parse_timestamp(columns.line_number, columns.head())?,
            source: intern(source_text),
            source_kind,
            source_name: intern(columns.text(layout.source_name)?),
            ability,
            amount: columns.number(layout.amount)?,
            mitigated: columns.number(layout.mitigated)?,
            owner,
        }))
    }

    fn parse_support(
        &self,
        kind: EventKind,
        columns: &Columns<'_>,
        layout: &SupportColumns,
    ) -> Result<CombatRecord, ParseError> {
        columns.require(layout.required_len())?;

        Ok(CombatRecord::Support(SupportRecord {
            kind,
            line_number: columns.line_number,
            buffed: columns.guid(layout.buffed)?,
            supporter: columns.guid(layout.supporter)?,
            amount: columns.number(layout.amount)?,
            mitigated: columns.number(layout.mitigated)?,
        }))
    }

    /// Accepts `M/D HH:MM:SS.fff` (year from config) and the current
    /// `M/D/YYYY HH:MM:SS.ffff-TZ` form; the timezone suffix is dropped.
    fn parse_timestamp(&self, line_number: u64, head: &str) -> Result<NaiveDateTime, ParseError> {
        let invalid = || ParseError::InvalidTimestamp {
            line_number,
            segment: head.to_string(),
        };

        let segment = head.split_once("  ").map_or(head, |(ts, _)| ts).trim();
        let (date_part, time_part) = segment.split_once(' ').ok_or_else(invalid)?;

        let mut date_fields = date_part.split('/');
        let month: u32 = date_fields.next().and_then(|s| s.parse().ok()).ok_or_else(invalid)?;
        let day: u32 = date_fields.next().and_then(|s| s.parse().ok()).ok_or_else(invalid)?;
        let year: i32 = match date_fields.next() {
            Some(y) => y.parse().map_err(|_| invalid())?,
            None => self.default_year,
        };

        // Strip a trailing UTC offset such as "-4" or "+10"
        let time_part = time_part
            .find(['-', '+'])
            .map_or(time_part, |pos| &time_part[..pos]);

        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;
        let time = NaiveTime::parse_from_str(time_part, "%H:%M:%S%.f").map_err(|_| invalid())?;
        Ok(date.and_time(time))
    }
}

/// Comma-separated columns of one line. Commas inside double quotes do not
/// split, so spell and player names containing commas stay intact.
struct Columns<'a> {
    line_number: u64,
    fields: Vec<&'a str>,
}

impl<'a> Columns<'a> {
    fn split(line_number: u64, line: &'a str) -> Self {
        let bytes = line.as_bytes();
        let mut fields = Vec::with_capacity(48);
        let mut start = 0;
        let mut in_quotes = false;

        for pos in memchr2_iter(b',', b'"', bytes) {
            match bytes[pos] {
                b'"' => in_quotes = !in_quotes,
                _ if !in_quotes => {
                    fields.push(&line[start..pos]);
                    start = pos + 1;
                }
                _ => {}
            }
        }
        fields.push(&line[start..]);

        Self {
            line_number,
            fields,
        }
    }

    fn head(&self) -> &'a str {
        self.fields.first().copied().unwrap_or_default()
    }

    fn require(&self, len: usize) -> Result<(), ParseError> {
        if self.fields.len() < len {
            return Err(ParseError::MissingColumn {
                line_number: self.line_number,
                column: len - 1,
                available: self.fields.len(),
            });
        }
        Ok(())
    }

    fn text(&self, column: usize) -> Result<&'a str, ParseError> {
        self.fields
            .get(column)
            .map(|f| f.trim().trim_matches('"'))
            .ok_or(ParseError::MissingColumn {
                line_number: self.line_number,
                column,
                available: self.fields.len(),
            })
    }

    fn guid(&self, column: usize) -> Result<IStr, ParseError> {
        self.text(column).map(intern)
    }

    /// Integer column. Fractional values are truncated; `inf` and `NaN`
    /// are rejected like any other non-numeric text.
    fn number(&self, column: usize) -> Result<i64, ParseError> {
        let raw = self.text(column)?;
        let invalid = || ParseError::InvalidNumber {
            line_number: self.line_number,
            column,
            value: raw.to_string(),
        };
        if let Ok(value) = raw.parse::<i64>() {
            return Ok(value);
        }
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value as i64),
            _ => Err(invalid()),
        }
    }
}
