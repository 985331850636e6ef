//! Target acquisition: periodic nearest-enemy search plus a continuous
//! validity check of whatever is currently targeted.

use glam::Vec2;
use log::debug;

use heatbeam_core::constants::ENGAGE_EFFICIENCY_FLOOR;
use heatbeam_core::definition::TurretDefinition;
use heatbeam_core::enums::Team;

use crate::host::{UnitRef, UnitRegistry};
use crate::turret::TurretState;

/// Advance the retarget timer and, when it fires, replace the target with
/// the closest eligible enemy (possibly none). Returns whether a search ran.
pub fn retarget(
    state: &mut TurretState,
    def: &TurretDefinition,
    origin: Vec2,
    team: Team,
    units: &dyn UnitRegistry,
    delta: f32,
) -> bool {
    if !state.retarget.check(delta, def.retarget_time) {
        return false;
    }

    let (air, ground) = (def.target_air, def.target_ground);
    let found = units.closest_enemy(team, origin, def.range, &|u| u.body.check_target(air, ground));
    if found != state.target {
        debug!("retarget: {:?} -> {:?}", state.target, found);
    }
    state.target = found;
    true
}

/// Resolve the current target and check that it may be engaged this tick.
///
/// A target is engaged only if it still exists, is within
/// `range + hit_size/2`, is hostile, passes the capability filter, and the
/// turret's efficiency is above the floor.
pub fn validate(
    state: &TurretState,
    def: &TurretDefinition,
    origin: Vec2,
    team: Team,
    units: &dyn UnitRegistry,
    efficiency: f32,
) -> Option<UnitRef> {
    let target = units.resolve(state.target?)?;

    let in_range = target.position.distance(origin) <= def.range + target.body.hit_size / 2.0;
    let hostile = team.is_hostile_to(target.team);
    let eligible = target.body.check_target(def.target_air, def.target_ground);

    (in_range && hostile && eligible && efficiency > ENGAGE_EFFICIENCY_FLOOR).then_some(target)
}
