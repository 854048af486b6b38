//! Pet ownership and credit resolution.

use super::EntityRegistry;
use crate::context::IStr;

impl EntityRegistry {
    /// Add `pet` to `owner`'s pet set. No-op when the owner is not
    /// registered. Returns true if the pet was newly added to that owner.
    pub fn register_pet(&mut self, owner: IStr, pet: IStr) -> bool {
        let Some(owner_idx) = self.position(owner) else {
            return false;
        };
        if !self.entity_at_mut(owner_idx).pets.insert(pet) {
            return false;
        }
        self.pet_owners
            .entry(pet)
            .and_modify(|idx| *idx = (*idx).min(owner_idx))
            .or_insert(owner_idx);
        true
    }

    /// Earliest-registered entity whose pet set contains `pet`.
    pub fn owner_of(&self, pet: IStr) -> Option<IStr> {
        self.pet_owners
            .get(&pet)
            .map(|&idx| self.entity_at(idx).id)
    }

    /// Who receives credit for damage done by `id`: a registered player
    /// credits itself, anything else credits its owner if one is known.
    pub fn resolve_creditee(&self, id: IStr) -> Option<IStr> {
        match self.get(id) {
            Some(entity) if entity.is_player() => Some(id),
            _ => self.owner_of(id),
        }
    }
}
