//! Ranked damage snapshot over the entity registry.

use super::{EntityRegistry, SessionWindow};
use crate::context::{IStr, resolve};

#[derive(Debug, Clone, PartialEq)]
pub struct AbilityDamage {
    pub ability: IStr,
    pub damage: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardRow {
    pub id: IStr,
    pub name: Option<IStr>,
    pub spec_id: Option<u32>,
    pub total_damage: i64,
    pub percent_of_max: f64,
    /// `None` while the session window has no duration
    pub dps: Option<f64>,
    /// Highest damage first
    pub abilities: Vec<AbilityDamage>,
}

impl LeaderboardRow {
    pub fn display_name(&self) -> &'static str {
        resolve(self.name.unwrap_or(self.id))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Leaderboard {
    /// Nothing registered yet; there is no maximum to scale against.
    NotReady,
    Ready {
        rows: Vec<LeaderboardRow>,
        elapsed_seconds: Option<f64>,
    },
}

impl Leaderboard {
    pub fn is_ready(&self) -> bool {
        matches!(self, Leaderboard::Ready { .. })
    }

    pub fn rows(&self) -> &[LeaderboardRow] {
        match self {
            Leaderboard::NotReady => &[],
            Leaderboard::Ready { rows, .. } => rows,
        }
    }
}

/// Rank every registered entity by total damage, highest first. Ties keep
/// registration order.
pub fn snapshot(registry: &EntityRegistry, window: &SessionWindow) -> Leaderboard {
    if registry.is_empty() {
        return Leaderboard::NotReady;
    }

    let elapsed = window.elapsed_seconds();
    let mut ranked: Vec<_> = registry.iter().collect();
    ranked.sort_by(|a, b| b.total_damage.cmp(&a.total_damage));
    let max = ranked.first().map_or(0, |e| e.total_damage);

    let rows = ranked
        .into_iter()
        .map(|entity| {
            let mut abilities: Vec<AbilityDamage> = entity
                .spell_damage
                .iter()
                .map(|(&ability, &damage)| AbilityDamage { ability, damage })
                .collect();
            abilities.sort_by(|a, b| {
                b.damage
                    .cmp(&a.damage)
                    .then_with(|| resolve(a.ability).cmp(resolve(b.ability)))
            });

            LeaderboardRow {
                id: entity.id,
                name: entity.name,
                spec_id: entity.spec_id,
                total_damage: entity.total_damage,
                percent_of_max: if max > 0 {
                    entity.total_damage as f64 / max as f64 * 100.0
                } else {
                    0.0
                },
                dps: elapsed.map(|secs| entity.total_damage as f64 / secs),
                abilities,
            }
        })
        .collect();

    Leaderboard::Ready {
        rows,
        elapsed_seconds: elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::intern;
    use chrono::NaiveDateTime;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn empty_registry_is_not_ready() {
        let board = snapshot(&EntityRegistry::new(), &SessionWindow::default());
        assert_eq!(board, Leaderboard::NotReady);
        assert!(board.rows().is_empty());
    }

    #[test]
    fn ranks_descending_with_stable_ties() {
        let mut registry = EntityRegistry::new();
        let ability = intern("Smite");
        for (id, dmg) in [("Player-1-M1", 100), ("Player-1-M2", 300), ("Player-1-M3", 100)] {
            registry.get_or_create(intern(id)).credit(ability, dmg);
        }
        let mut window = SessionWindow::default();
        window.observe(ts("2025-04-12 20:00:00"));
        window.observe(ts("2025-04-12 20:00:10"));

        let board = snapshot(&registry, &window);
        let rows = board.rows();
        let order: Vec<&str> = rows.iter().map(|r| resolve(r.id)).collect();
        assert_eq!(order, ["Player-1-M2", "Player-1-M1", "Player-1-M3"]);
        assert_eq!(rows[0].percent_of_max, 100.0);
        assert!((rows[1].percent_of_max - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(rows[0].dps, Some(30.0));
    }

    #[test]
    fn undefined_dps_without_duration() {
        let mut registry = EntityRegistry::new();
        registry.get_or_create(intern("Player-1-M4")).credit(intern("Smite"), 10);
        let board = snapshot(&registry, &SessionWindow::default());
        let Leaderboard::Ready { rows, elapsed_seconds } = board else {
            panic!("expected ready");
        };
        assert_eq!(elapsed_seconds, None);
        assert_eq!(rows[0].dps, None);
    }

    #[test]
    fn non_positive_max_gives_zero_percent() {
        let mut registry = EntityRegistry::new();
        registry.get_or_create(intern("Player-1-M5")).total_damage = -50;
        registry.get_or_create(intern("Player-1-M6"));
        let board = snapshot(&registry, &SessionWindow::default());
        assert!(board.rows().iter().all(|r| r.percent_of_max == 0.0));
    }

    #[test]
    fn abilities_sorted_by_damage() {
        let mut registry = EntityRegistry::new();
        let e = registry.get_or_create(intern("Player-1-M7"));
        e.credit(intern("Wrath"), 10);
        e.credit(intern("Starfire"), 90);
        e.credit(intern("Moonfire"), 40);
        let board = snapshot(&registry, &SessionWindow::default());
        let names: Vec<&str> = board.rows()[0]
            .abilities
            .iter()
            .map(|a| resolve(a.ability))
            .collect();
        assert_eq!(names, ["Starfire", "Moonfire", "Wrath"]);
    }
}
