//! Persistence of the turret's thermal state.
//!
//! The base structure owns the front of the stream; the turret appends a
//! single big-endian `f32` for heat after it and reads it back from the same
//! position. Writing or reading out of that order corrupts the base fields.

use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use log::warn;

use heatbeam_core::Result;

use crate::host::BaseStructure;
use crate::turret::HeatTractorTurret;

impl<B: BaseStructure> HeatTractorTurret<B> {
    /// Write base state, then heat.
    pub fn write_state<W: Write>(&self, out: &mut W) -> Result<()> {
        self.base.write_state(&mut *out)?;
        out.write_f32::<BigEndian>(self.state.heat)?;
        Ok(())
    }

    /// Read base state, then heat. The coolant multiplier is not persisted
    /// and restarts at 1 until the next tick draws from the loaded tank.
    pub fn read_state<R: Read>(&mut self, input: &mut R, revision: u8) -> Result<()> {
        self.base.read_state(&mut *input, revision)?;
        self.state.coolant = 1.0;
        let heat = input.read_f32::<BigEndian>()?;
        if !heat.is_finite() {
            warn!("turret {} loaded non-finite heat {}", self.id, heat);
        }
        self.state.heat = heat;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use glam::Vec2;

    use heatbeam_core::definition::{LiquidType, TurretDefinition};
    use heatbeam_core::enums::Team;
    use heatbeam_core::HeatbeamError;

    use crate::base::PoweredBlock;

    use super::*;

    fn turret() -> HeatTractorTurret<PoweredBlock> {
        HeatTractorTurret::new(
            1,
            Arc::new(TurretDefinition::default()),
            PoweredBlock::new(Vec2::new(32.0, 32.0), Team::SHARDED),
        )
    }

    #[test]
    fn heat_round_trips_exactly() {
        for &heat in &[42.5, 0.0, -3.25, 100.0, 1e-7, f32::MAX, f32::MIN_POSITIVE] {
            let mut source = turret();
            source.state.heat = heat;

            let mut bytes = Vec::new();
            source.write_state(&mut bytes).unwrap();

            let mut restored = turret();
            restored.state.heat = 7.0;
            restored.read_state(&mut bytes.as_slice(), 0).unwrap();
            assert_eq!(restored.state.heat.to_bits(), heat.to_bits());
        }
    }

    #[test]
    fn heat_is_appended_after_base_fields() {
        let mut source = turret();
        source.state.heat = 42.5;
        source.base.health = 12.0;
        source.base.tank.add(&LiquidType::water(), 3.0);

        let mut base_only = Vec::new();
        source.base.write_state(&mut base_only).unwrap();

        let mut full = Vec::new();
        source.write_state(&mut full).unwrap();

        assert_eq!(full.len(), base_only.len() + 4);
        assert_eq!(&full[..base_only.len()], base_only.as_slice());
        assert_eq!(&full[base_only.len()..], &42.5f32.to_be_bytes());
    }

    #[test]
    fn base_fields_survive_alongside_heat() {
        let mut source = turret();
        source.state.heat = 13.0;
        source.base.health = 55.5;
        source.base.power = 0.75;
        source.base.tank.add(&LiquidType::cryofluid(), 6.0);

        let mut bytes = Vec::new();
        source.write_state(&mut bytes).unwrap();

        let mut restored = turret();
        restored.read_state(&mut bytes.as_slice(), 0).unwrap();
        assert_eq!(restored.state.heat, 13.0);
        assert_eq!(restored.base.health, 55.5);
        assert_eq!(restored.base.power, 0.75);
        assert_eq!(restored.base.tank.total(), 6.0);
    }

    #[test]
    fn truncated_stream_is_an_io_error() {
        let source = turret();
        let mut bytes = Vec::new();
        source.write_state(&mut bytes).unwrap();
        bytes.truncate(bytes.len() - 2);

        let mut restored = turret();
        let err = restored.read_state(&mut bytes.as_slice(), 0).unwrap_err();
        assert!(matches!(err, HeatbeamError::Io(_)));
    }
}
