//! Field construction parameters.

use crate::barriers::BarrierRandomizer;

/// Parameters for building a [`Field`](crate::Field) and populating it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldConfig {
    /// Columns in the grid.
    pub width: i32,
    /// Rows in the grid.
    pub height: i32,
    /// Share of all cells the randomizer turns into barriers (0.0–1.0).
    pub barrier_fraction: f64,
    /// Longest straight wall the randomizer lays down in one go.
    pub max_wall_len: usize,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 10,
            barrier_fraction: 0.25,
            max_wall_len: 4,
        }
    }
}

impl FieldConfig {
    /// A randomizer using this configuration's barrier parameters.
    pub fn barrier_randomizer(&self) -> BarrierRandomizer {
        BarrierRandomizer {
            fraction: self.barrier_fraction,
            max_wall_len: self.max_wall_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn randomizer_follows_config() {
        let cfg = FieldConfig {
            barrier_fraction: 0.1,
            max_wall_len: 2,
            ..FieldConfig::default()
        };
        let r = cfg.barrier_randomizer();
        assert_eq!(r.fraction, 0.1);
        assert_eq!(r.max_wall_len, 2);
    }
}
