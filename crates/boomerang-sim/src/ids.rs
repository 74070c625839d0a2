//! Conversions between hecs entities and stable `ActorId`s.

use hecs::Entity;

use boomerang_core::types::ActorId;

pub fn actor_id(entity: Entity) -> ActorId {
    ActorId(entity.to_bits().get())
}

/// The entity an id was minted from. The generation is part of the id, so a
/// despawned actor's id never resolves to a live entity.
pub fn entity(id: ActorId) -> Option<Entity> {
    Entity::from_bits(id.0)
}
