//! Flight state machine.
//!
//! ```text
//! FollowingPath ──blocking──▶ Settling ──grace elapsed──▶ Terminated
//!       │                        ▲
//!       └──path complete──▶ Terminated
//! PhysicsDriven ──blocking──┘
//! ```
//!
//! `Terminated` is absorbing: every function here leaves a terminated
//! state untouched. Transitions are applied to the `FlightState` in place
//! and reported back so the caller can move the entity and emit events.

use std::collections::HashSet;

use glam::DVec3;

use boomerang_core::components::FlightState;
use boomerang_core::enums::{FlightMode, TerminationCause};
use boomerang_core::types::{ActorId, FlightPath};

use crate::classify::Contact;
use crate::path;

/// Start path-following flight. Refuses a path with fewer than two waypoints.
pub fn launch(path: FlightPath, total_flight_secs: f64) -> Option<FlightState> {
    if !path.is_flyable() {
        return None;
    }
    Some(FlightState {
        mode: FlightMode::FollowingPath,
        path,
        elapsed_secs: 0.0,
        total_flight_secs,
        grace_remaining_secs: 0.0,
        ignore: HashSet::new(),
        termination: None,
    })
}

/// Start a flight driven only by passive physics.
pub fn launch_unguided() -> FlightState {
    FlightState {
        mode: FlightMode::PhysicsDriven,
        path: FlightPath::empty(),
        elapsed_secs: 0.0,
        total_flight_secs: 0.0,
        grace_remaining_secs: 0.0,
        ignore: HashSet::new(),
        termination: None,
    }
}

/// What the flight system must do for a boomerang this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickPlan {
    /// Terminated. Nothing to do.
    Idle,
    /// Sweep from the current position to `desired`.
    Sweep { desired: DVec3, alpha: f64 },
    /// Moved by passive physics this tick (unguided or settling).
    Passive,
    /// The state machine just terminated this tick.
    Terminate(TerminationCause),
}

/// Advance flight clocks by `dt` and decide what happens this tick.
///
/// Path time advances before sampling, so the first tick already moves.
pub fn begin_tick(state: &mut FlightState, dt: f64) -> TickPlan {
    match state.mode {
        FlightMode::Terminated => TickPlan::Idle,
        FlightMode::FollowingPath => {
            state.elapsed_secs += dt;
            match path::desired_position(&state.path, state.elapsed_secs, state.total_flight_secs) {
                Some(s) => TickPlan::Sweep {
                    desired: s.position,
                    alpha: s.alpha,
                },
                None => {
                    terminate(state, TerminationCause::PathComplete);
                    TickPlan::Terminate(TerminationCause::PathComplete)
                }
            }
        }
        FlightMode::PhysicsDriven => TickPlan::Passive,
        FlightMode::Settling => {
            state.grace_remaining_secs -= dt;
            if state.grace_remaining_secs <= 0.0 {
                terminate(state, TerminationCause::SettleTimeout);
                TickPlan::Terminate(TerminationCause::SettleTimeout)
            } else {
                TickPlan::Passive
            }
        }
    }
}

/// A state change caused by a contact or the end of the path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Settling { location: DVec3 },
    Terminated(TerminationCause),
}

/// Result of resolving one path-following sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    /// Where the boomerang ends up this tick.
    pub position: DVec3,
    /// Target to destroy, if one was struck.
    pub destroyed_target: Option<ActorId>,
    pub transition: Option<Transition>,
}

/// Apply the classified sweep result of a `FollowingPath` boomerang.
///
/// A blocking contact is checked before path completion, so a boomerang
/// that hits the ground on its last frame settles instead of returning.
/// Returns `None` when the boomerang is not following a path.
pub fn resolve_sweep(
    state: &mut FlightState,
    desired: DVec3,
    alpha: f64,
    contact: Contact,
    grace_period_secs: f64,
) -> Option<StepOutcome> {
    if state.mode != FlightMode::FollowingPath {
        return None;
    }

    let mut outcome = StepOutcome {
        position: desired,
        destroyed_target: None,
        transition: None,
    };

    match contact {
        Contact::Blocking { location, .. } => {
            enter_settling(state, grace_period_secs);
            outcome.position = location;
            outcome.transition = Some(Transition::Settling { location });
            return Some(outcome);
        }
        Contact::PassThrough { target } => {
            if pass_through(state, target) {
                outcome.destroyed_target = Some(target);
            }
        }
        Contact::NoContact => {}
    }

    if alpha >= 1.0 && terminate(state, TerminationCause::PathComplete) {
        outcome.transition = Some(Transition::Terminated(TerminationCause::PathComplete));
    }
    Some(outcome)
}

/// Result of a passive-physics contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassiveOutcome {
    pub destroyed_target: Option<ActorId>,
    /// The move stopped at the contact point.
    pub blocked: bool,
    pub transition: Option<Transition>,
}

/// Apply the classified sweep result of a physics-moved boomerang.
///
/// Returns `None` unless the boomerang is `PhysicsDriven` or `Settling`.
pub fn resolve_passive(
    state: &mut FlightState,
    contact: Contact,
    grace_period_secs: f64,
) -> Option<PassiveOutcome> {
    if !matches!(state.mode, FlightMode::PhysicsDriven | FlightMode::Settling) {
        return None;
    }

    let mut outcome = PassiveOutcome {
        destroyed_target: None,
        blocked: false,
        transition: None,
    };
    match contact {
        Contact::NoContact => {}
        Contact::PassThrough { target } => {
            if pass_through(state, target) {
                outcome.destroyed_target = Some(target);
            }
        }
        Contact::Blocking { location, .. } => {
            outcome.blocked = true;
            // Any blocking category grounds an unguided flight.
            if state.mode == FlightMode::PhysicsDriven {
                enter_settling(state, grace_period_secs);
                outcome.transition = Some(Transition::Settling { location });
            }
        }
    }
    Some(outcome)
}

/// Remember a struck target so later sweeps pass through it. Returns
/// `true` only the first time a live flight strikes that target.
pub fn pass_through(state: &mut FlightState, target: ActorId) -> bool {
    if state.mode == FlightMode::Terminated {
        return false;
    }
    state.ignore.insert(target)
}

/// Move to `Terminated`, recording the cause. Returns `true` only on the
/// first entry.
pub fn terminate(state: &mut FlightState, cause: TerminationCause) -> bool {
    if state.mode == FlightMode::Terminated {
        return false;
    }
    state.mode = FlightMode::Terminated;
    state.termination = Some(cause);
    true
}

fn enter_settling(state: &mut FlightState, grace_period_secs: f64) {
    state.mode = FlightMode::Settling;
    state.grace_remaining_secs = grace_period_secs;
}

/// Visual spin only turns while the boomerang is airborne.
pub fn spins(mode: FlightMode) -> bool {
    matches!(mode, FlightMode::FollowingPath | FlightMode::PhysicsDriven)
}

/// Advance a spin angle, wrapped to [0, 360).
pub fn advance_spin(yaw_deg: f64, rate_deg_per_sec: f64, dt: f64) -> f64 {
    (yaw_deg + rate_deg_per_sec * dt).rem_euclid(360.0)
}

/// Path progress for display. 0 for unguided flights.
pub fn display_progress(state: &FlightState) -> f64 {
    if state.path.is_flyable() {
        path::progress(state.elapsed_secs, state.total_flight_secs)
    } else {
        0.0
    }
}
