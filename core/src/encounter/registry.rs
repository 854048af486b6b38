use super::Entity;
use crate::context::IStr;
use hashbrown::HashMap;

/// GUID → [`Entity`], kept in first-registration order.
///
/// Insertion order matters twice: the leaderboard breaks ties with it and
/// pet ownership resolves to the earliest-registered owner.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    entities: Vec<Entity>,
    index: HashMap<IStr, usize>,
    /// Reverse of every `Entity::pets` set: pet GUID → index of its
    /// earliest-registered owner
    pub(super) pet_owners: HashMap<IStr, usize>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_create(&mut self, id: IStr) -> &mut Entity {
        let idx = match self.index.get(&id) {
            Some(&idx) => idx,
            None => {
                let idx = self.entities.len();
                self.entities.push(Entity::new(id));
                self.index.insert(id, idx);
                idx
            }
        };
        &mut self.entities[idx]
    }

    pub fn get(&self, id: IStr) -> Option<&Entity> {
        self.index.get(&id).map(|&idx| &self.entities[idx])
    }

    pub fn get_mut(&mut self, id: IStr) -> Option<&mut Entity> {
        self.index.get(&id).map(|&idx| &mut self.entities[idx])
    }

    #[inline]
    pub fn contains(&self, id: IStr) -> bool {
        self.index.contains_key(&id)
    }

    pub(super) fn position(&self, id: IStr) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub(super) fn entity_at_mut(&mut self, idx: usize) -> &mut Entity {
        &mut self.entities[idx]
    }

    pub(super) fn entity_at(&self, idx: usize) -> &Entity {
        &self.entities[idx]
    }

    pub fn reset(&mut self) {
        self.entities.clear();
        self.index.clear();
        self.pet_owners.clear();
    }

    /// Entities in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
