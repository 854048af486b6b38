use crate::combat_log::EntityKind;
use crate::context::{IStr, resolve};
use hashbrown::{HashMap, HashSet};

/// Accumulated state for one unit GUID seen during the session.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: IStr,
    pub kind: EntityKind,
    /// From `COMBATANT_INFO`; never overwritten once set
    pub spec_id: Option<u32>,
    /// First name seen on a damage line credited to this entity
    pub name: Option<IStr>,
    pub total_damage: i64,
    pub spell_damage: HashMap<IStr, i64>,
    pub pets: HashSet<IStr>,
}

impl Entity {
    pub fn new(id: IStr) -> Self {
        Entity {
            id,
            kind: EntityKind::from_guid(resolve(id)),
            spec_id: None,
            name: None,
            total_damage: 0,
            spell_damage: HashMap::new(),
            pets: HashSet::new(),
        }
    }

    #[inline]
    pub fn is_player(&self) -> bool {
        self.kind == EntityKind::Player
    }

    /// Add damage to the running total and to the ability's bucket.
    pub fn credit(&mut self, ability: IStr, amount: i64) {
        self.total_damage = self.total_damage.saturating_add(amount);
        let bucket = self.spell_damage.entry(ability).or_insert(0);
        *bucket = bucket.saturating_add(amount);
    }

    /// Returns true if the name was set by this call.
    pub fn set_name_once(&mut self, name: IStr) -> bool {
        if self.name.is_some() {
            return false;
        }
        self.name = Some(name);
        true
    }

    /// Display name, falling back to the GUID before any damage named it.
    pub fn display_name(&self) -> &'static str {
        resolve(self.name.unwrap_or(self.id))
    }
}
