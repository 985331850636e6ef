//! Sensor port: exposes heat to logic/automation queries.

use heatbeam_core::enums::SensorKey;

use crate::host::BaseStructure;
use crate::turret::HeatTractorTurret;

impl<B: BaseStructure> HeatTractorTurret<B> {
    /// Heat for [`SensorKey::Heat`]; every other key is answered by the base.
    pub fn sense(&self, key: SensorKey) -> f64 {
        match key {
            SensorKey::Heat => self.state.heat as f64,
            other => self.base.sense(other),
        }
    }
}
