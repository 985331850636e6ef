//! Reference base structure: a powered block with a liquid tank.
//!
//! Stands in for the host engine's building so the turret can be run and
//! persisted end to end. Its own byte layout is
//! `health f32 | team u8 | power f32 | tank`, big-endian.

use std::io::{self, Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use glam::Vec2;

use heatbeam_core::definition::LiquidType;
use heatbeam_core::enums::{SensorKey, Team};

use crate::host::{BaseStructure, LiquidReservoir};

/// Multi-liquid storage; the current liquid is the last one added.
#[derive(Debug, Clone, Default)]
pub struct LiquidTank {
    pub capacity: f32,
    contents: Vec<(LiquidType, f32)>,
    current: Option<usize>,
}

impl LiquidTank {
    pub fn new(capacity: f32) -> Self {
        Self {
            capacity,
            ..Default::default()
        }
    }

    /// Add liquid, up to capacity. Returns the amount accepted.
    pub fn add(&mut self, liquid: &LiquidType, amount: f32) -> f32 {
        let space = (self.capacity - self.total()).max(0.0);
        let accepted = amount.clamp(0.0, space);
        let idx = match self.contents.iter().position(|(l, _)| l.name == liquid.name) {
            Some(idx) => idx,
            None => {
                self.contents.push((liquid.clone(), 0.0));
                self.contents.len() - 1
            }
        };
        self.contents[idx].1 += accepted;
        self.current = Some(idx);
        accepted
    }

    pub fn total(&self) -> f32 {
        self.contents.iter().map(|(_, amount)| amount).sum()
    }

    fn write(&self, out: &mut dyn Write) -> std::io::Result<()> {
        out.write_u8(u8::try_from(self.contents.len()).map_err(|_| too_large("liquid count"))?)?;
        for (liquid, amount) in &self.contents {
            let name = liquid.name.as_bytes();
            out.write_u16::<BigEndian>(u16::try_from(name.len()).map_err(|_| too_large("liquid name"))?)?;
            out.write_all(name)?;
            out.write_f32::<BigEndian>(liquid.heat_capacity)?;
            out.write_f32::<BigEndian>(*amount)?;
        }
        let current = match self.current {
            Some(idx) => i8::try_from(idx).map_err(|_| too_large("current liquid index"))?,
            None => -1,
        };
        out.write_i8(current)
    }

    fn read(&mut self, input: &mut dyn Read) -> std::io::Result<()> {
        let count = input.read_u8()?;
        self.contents.clear();
        for _ in 0..count {
            let len = input.read_u16::<BigEndian>()? as usize;
            let mut name = vec![0u8; len];
            input.read_exact(&mut name)?;
            let heat_capacity = input.read_f32::<BigEndian>()?;
            let amount = input.read_f32::<BigEndian>()?;
            let liquid = LiquidType::new(String::from_utf8_lossy(&name), heat_capacity);
            self.contents.push((liquid, amount));
        }
        let current = input.read_i8()?;
        self.current = usize::try_from(current)
            .ok()
            .filter(|&idx| idx < self.contents.len());
        Ok(())
    }
}

fn too_large(what: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, format!("{what} does not fit the tank layout"))
}

impl LiquidReservoir for LiquidTank {
    fn current(&self) -> Option<&LiquidType> {
        self.current.map(|idx| &self.contents[idx].0)
    }

    fn get(&self, liquid: &LiquidType) -> f32 {
        self.contents
            .iter()
            .find(|(l, _)| l.name == liquid.name)
            .map_or(0.0, |(_, amount)| *amount)
    }

    fn remove(&mut self, liquid: &LiquidType, amount: f32) {
        if let Some((_, stored)) = self.contents.iter_mut().find(|(l, _)| l.name == liquid.name) {
            *stored = (*stored - amount).max(0.0);
        }
    }
}

/// A placed, powered block.
#[derive(Debug, Clone)]
pub struct PoweredBlock {
    pub position: Vec2,
    pub team: Team,
    pub health: f32,
    pub max_health: f32,
    /// Power satisfaction in `[0, 1]`.
    pub power: f32,
    pub tank: LiquidTank,
}

impl PoweredBlock {
    pub fn new(position: Vec2, team: Team) -> Self {
        Self {
            position,
            team,
            health: 100.0,
            max_health: 100.0,
            power: 1.0,
            tank: LiquidTank::new(20.0),
        }
    }
}

impl BaseStructure for PoweredBlock {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn team(&self) -> Team {
        self.team
    }

    fn efficiency(&self) -> f32 {
        if self.health <= 0.0 {
            return 0.0;
        }
        self.power.clamp(0.0, 1.0)
    }

    fn liquids_mut(&mut self) -> &mut dyn LiquidReservoir {
        &mut self.tank
    }

    fn write_state(&self, out: &mut dyn Write) -> std::io::Result<()> {
        out.write_f32::<BigEndian>(self.health)?;
        out.write_u8(self.team.0)?;
        out.write_f32::<BigEndian>(self.power)?;
        self.tank.write(out)
    }

    fn read_state(&mut self, input: &mut dyn Read, _revision: u8) -> std::io::Result<()> {
        self.health = input.read_f32::<BigEndian>()?;
        self.team = Team(input.read_u8()?);
        self.power = input.read_f32::<BigEndian>()?;
        self.tank.read(input)
    }

    fn sense(&self, key: SensorKey) -> f64 {
        match key {
            SensorKey::Health => self.health as f64,
            SensorKey::MaxHealth => self.max_health as f64,
            SensorKey::Efficiency => self.efficiency() as f64,
            SensorKey::TotalLiquids => self.tank.total() as f64,
            SensorKey::Team => self.team.0 as f64,
            SensorKey::X => self.position.x as f64,
            SensorKey::Y => self.position.y as f64,
            SensorKey::Heat => f64::NAN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tank_current_is_last_added() {
        let mut tank = LiquidTank::new(50.0);
        tank.add(&LiquidType::water(), 5.0);
        tank.add(&LiquidType::cryofluid(), 5.0);
        assert_eq!(tank.current().map(|l| l.name.as_str()), Some("cryofluid"));
        tank.add(&LiquidType::water(), 1.0);
        assert_eq!(tank.current().map(|l| l.name.as_str()), Some("water"));
        assert_eq!(tank.get(&LiquidType::water()), 6.0);
    }

    #[test]
    fn tank_respects_capacity() {
        let mut tank = LiquidTank::new(10.0);
        assert_eq!(tank.add(&LiquidType::water(), 7.0), 7.0);
        assert_eq!(tank.add(&LiquidType::water(), 7.0), 3.0);
        assert_eq!(tank.total(), 10.0);
    }

    #[test]
    fn tank_remove_never_negative() {
        let mut tank = LiquidTank::new(10.0);
        tank.add(&LiquidType::water(), 2.0);
        tank.remove(&LiquidType::water(), 5.0);
        assert_eq!(tank.get(&LiquidType::water()), 0.0);
    }

    #[test]
    fn block_state_round_trip() {
        let mut block = PoweredBlock::new(Vec2::new(16.0, 24.0), Team::SHARDED);
        block.health = 73.5;
        block.power = 0.25;
        block.tank.add(&LiquidType::cryofluid(), 4.5);

        let mut bytes = Vec::new();
        block.write_state(&mut bytes).unwrap();

        let mut restored = PoweredBlock::new(Vec2::new(16.0, 24.0), Team::DERELICT);
        restored.read_state(&mut bytes.as_slice(), 0).unwrap();
        assert_eq!(restored.health, 73.5);
        assert_eq!(restored.team, Team::SHARDED);
        assert_eq!(restored.power, 0.25);
        assert_eq!(restored.tank.get(&LiquidType::cryofluid()), 4.5);
        assert_eq!(
            restored.tank.current().map(|l| l.name.as_str()),
            Some("cryofluid")
        );
    }

    #[test]
    fn tank_with_out_of_range_current_refuses_to_write() {
        let mut block = PoweredBlock::new(Vec2::ZERO, Team::SHARDED);
        block.tank = LiquidTank::new(1000.0);
        for i in 0..200 {
            block.tank.add(&LiquidType::new(format!("liquid-{i}"), 0.5), 1.0);
        }

        let mut bytes = Vec::new();
        let err = block.write_state(&mut bytes).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn overlong_liquid_name_refuses_to_write() {
        let mut block = PoweredBlock::new(Vec2::ZERO, Team::SHARDED);
        block
            .tank
            .add(&LiquidType::new("x".repeat(usize::from(u16::MAX) + 1), 0.5), 1.0);

        let mut bytes = Vec::new();
        let err = block.write_state(&mut bytes).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn unpowered_block_has_zero_efficiency() {
        let mut block = PoweredBlock::new(Vec2::ZERO, Team::SHARDED);
        block.power = 0.0;
        assert_eq!(block.efficiency(), 0.0);
        assert!(block.sense(SensorKey::Heat).is_nan());
    }
}
