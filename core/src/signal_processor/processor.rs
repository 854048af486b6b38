use crate::combat_log::{CombatRecord, DamageRecord, EntityKind, EventKind, SupportRecord};
use crate::context::{IStr, resolve};
use crate::signal_processor::signal::GameSignal;
use crate::state::cache::SessionCache;

/// Applies classified records to the session cache and emits signals.
/// This is the attribution state machine; it owns no state of its own so a
/// full replay only needs a reset cache.
#[derive(Debug, Default)]
pub struct EventProcessor;

impl EventProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Process a single record. Updates the cache and returns signals for
    /// the host.
    pub fn process_record(
        &mut self,
        record: CombatRecord,
        cache: &mut SessionCache,
    ) -> Vec<GameSignal> {
        match record {
            CombatRecord::ZoneChange { zone_name } => {
                vec![self.handle_zone_change(zone_name, cache)]
            }
            CombatRecord::Summon { caster, summoned } => {
                self.handle_summon(caster, summoned, cache).into_iter().collect()
            }
            CombatRecord::CombatantInfo { player, spec_id } => self
                .handle_combatant_info(player, spec_id, cache)
                .into_iter()
                .collect(),
            CombatRecord::Damage(damage) => {
                self.handle_damage(&damage, cache).into_iter().collect()
            }
            CombatRecord::Support(support) => {
                self.handle_support(&support, cache);
                Vec::new()
            }
        }
    }

    fn handle_zone_change(&mut self, zone_name: String, cache: &mut SessionCache) -> GameSignal {
        if cache.is_rest_zone(&zone_name) {
            tracing::debug!(zone = %zone_name, "Rest zone entered, keeping session");
            return GameSignal::RestZoneEntered { zone_name };
        }

        tracing::debug!(zone = %zone_name, entities = cache.registry.len(), "Zone change, resetting session");
        cache.reset();
        cache.current_zone.zone_name = zone_name.clone();
        cache.current_zone.generation += 1;
        GameSignal::SessionReset { zone_name }
    }

    fn handle_summon(
        &mut self,
        caster: IStr,
        summoned: IStr,
        cache: &mut SessionCache,
    ) -> Option<GameSignal> {
        cache
            .registry
            .register_pet(caster, summoned)
            .then_some(GameSignal::PetRegistered {
                owner: caster,
                pet: summoned,
            })
    }

    fn handle_combatant_info(
        &mut self,
        player: IStr,
        spec_id: u32,
        cache: &mut SessionCache,
    ) -> Option<GameSignal> {
        if cache.registry.contains(player) {
            return None;
        }
        cache.registry.get_or_create(player).spec_id = Some(spec_id);
        Some(GameSignal::PlayerRegistered { player, spec_id })
    }

    fn handle_damage(
        &mut self,
        damage: &DamageRecord,
        cache: &mut SessionCache,
    ) -> Option<GameSignal> {
        let melee_or_ranged = matches!(damage.kind, EventKind::SwingDamage | EventKind::RangeDamage);
        if melee_or_ranged && damage.source_kind == EntityKind::Creature {
            return None;
        }

        cache.window.observe(damage.timestamp);

        // Swing and range layouts name the pet's owner on every hit
        let signal = damage.owner.and_then(|owner| {
            cache
                .registry
                .register_pet(owner, damage.source)
                .then_some(GameSignal::PetRegistered {
                    owner,
                    pet: damage.source,
                })
        });

        let amount = damage.effective();
        match damage.source_kind {
            EntityKind::Player => {
                if let Some(entity) = cache.registry.get_mut(damage.source)
                    && entity.is_player()
                {
                    entity.credit(damage.ability, amount);
                    entity.set_name_once(damage.source_name);
                }
            }
            EntityKind::Pet | EntityKind::Creature => {
                if let Some(owner) = cache.registry.resolve_creditee(damage.source)
                    && let Some(entity) = cache.registry.get_mut(owner)
                {
                    entity.credit(damage.ability, amount);
                }
            }
            EntityKind::Other => {
                tracing::trace!(
                    line = damage.line_number,
                    source = resolve(damage.source),
                    "Damage from unattributable source"
                );
            }
        }

        signal
    }

    fn handle_support(&mut self, support: &SupportRecord, cache: &mut SessionCache) {
        let amount = support.effective();

        match cache.registry.get_mut(support.buffed) {
            Some(buffed) => buffed.total_damage = buffed.total_damage.saturating_sub(amount),
            None => tracing::trace!(line = support.line_number, "Support target not registered"),
        }
        match cache.registry.get_mut(support.supporter) {
            Some(supporter) => {
                supporter.total_damage = supporter.total_damage.saturating_add(amount)
            }
            None => tracing::trace!(line = support.line_number, "Supporter not registered"),
        }
    }
}
