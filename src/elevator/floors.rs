use crate::shared::{ElevatorError, Floor};
use std::ops::RangeInclusive;

/// The fixed, contiguous set of floors the car serves, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorRegistry {
    lowest: Floor,
    highest: Floor,
}

impl FloorRegistry {
    pub fn new(lowest: Floor, highest: Floor) -> Result<FloorRegistry, ElevatorError> {
        if lowest > highest {
            return Err(ElevatorError::EmptyFloorRange { lowest, highest });
        }
        Ok(FloorRegistry { lowest, highest })
    }

    pub fn lowest(&self) -> Floor {
        self.lowest
    }

    pub fn highest(&self) -> Floor {
        self.highest
    }

    pub fn count(&self) -> usize {
        (self.highest - self.lowest) as usize + 1
    }

    pub fn contains(&self, floor: Floor) -> bool {
        (self.lowest..=self.highest).contains(&floor)
    }

    pub fn iter(&self) -> RangeInclusive<Floor> {
        self.lowest..=self.highest
    }

    pub fn validate(&self, floor: Floor) -> Result<Floor, ElevatorError> {
        if self.contains(floor) {
            Ok(floor)
        } else {
            Err(ElevatorError::InvalidFloor {
                floor,
                lowest: self.lowest,
                highest: self.highest,
            })
        }
    }
}
