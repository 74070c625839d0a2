//! Contact classification: what a sweep hit means for a boomerang.

use std::collections::HashSet;

use glam::DVec3;

use boomerang_core::enums::SurfaceCategory;
use boomerang_core::types::ActorId;

/// Nearest blocking result of a swept-sphere move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepHit {
    pub actor: ActorId,
    pub category: SurfaceCategory,
    /// The struck actor is a destructible target.
    pub is_target: bool,
    /// Fraction of the move in [0, 1] at which contact happened.
    pub time_of_impact: f64,
    /// Sphere centre at contact.
    pub location: DVec3,
    pub normal: DVec3,
}

/// Outcome of a single sweep as seen by the flight state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contact {
    NoContact,
    /// Solid surface. Stop here.
    Blocking {
        actor: ActorId,
        location: DVec3,
        normal: DVec3,
    },
    /// Target struck. Destroy it and keep flying.
    PassThrough { target: ActorId },
}

/// Classify a sweep result.
///
/// Ignored actors never count. A target is always pass-through whatever its
/// surface category; any other surface blocks.
pub fn classify(hit: Option<&SweepHit>, ignore: &HashSet<ActorId>) -> Contact {
    let Some(hit) = hit else {
        return Contact::NoContact;
    };
    if ignore.contains(&hit.actor) {
        return Contact::NoContact;
    }
    if hit.is_target {
        return Contact::PassThrough { target: hit.actor };
    }
    Contact::Blocking {
        actor: hit.actor,
        location: hit.location,
        normal: hit.normal,
    }
}
