use crate::shared::structs::{Direction, Floor};
use thiserror::Error;

/// Everything the scheduler can refuse. A redundant request is not in here:
/// it is absorbed silently and reported as `Ok(false)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ElevatorError {
    #[error("floor {floor} is outside the served range {lowest}..={highest}")]
    InvalidFloor {
        floor: Floor,
        lowest: Floor,
        highest: Floor,
    },

    #[error("floor {floor} has no {direction} call button")]
    InvalidCall { floor: Floor, direction: Direction },

    #[error("floor range {lowest}..={highest} is empty")]
    EmptyFloorRange { lowest: Floor, highest: Floor },
}
