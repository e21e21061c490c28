/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
pub type Floor = u8;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Direction of travel from `from` to `to`, or `None` when they are the same floor.
    pub fn between(from: Floor, to: Floor) -> Option<Direction> {
        if to > from {
            Some(Direction::Up)
        } else if to < from {
            Some(Direction::Down)
        } else {
            None
        }
    }

    /// True when `floor` lies strictly past `reference` when travelling in this direction.
    pub fn is_beyond(&self, floor: Floor, reference: Floor) -> bool {
        match self {
            Direction::Up => floor > reference,
            Direction::Down => floor < reference,
        }
    }

    /// The floor one step away from `floor` in this direction.
    ///
    /// Callers only step towards a valid destination, so this never leaves the served range.
    pub fn step(&self, floor: Floor) -> Floor {
        match self {
            Direction::Up => floor + 1,
            Direction::Down => floor - 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElevatorMode {
    #[serde(rename = "idle")]
    Idle,
    #[serde(rename = "waiting")]
    Waiting,
    #[serde(rename = "movingUp")]
    MovingUp,
    #[serde(rename = "movingDown")]
    MovingDown,
}

impl ElevatorMode {
    /// The only way a mode is ever produced. Nothing stores a mode that could drift
    /// away from the floor and destination it was derived from.
    pub fn derive(floor: Floor, destination: Option<Floor>) -> ElevatorMode {
        match destination {
            None => ElevatorMode::Idle,
            Some(destination) => match Direction::between(floor, destination) {
                None => ElevatorMode::Waiting,
                Some(Direction::Up) => ElevatorMode::MovingUp,
                Some(Direction::Down) => ElevatorMode::MovingDown,
            },
        }
    }
}

impl fmt::Display for ElevatorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElevatorMode::Idle => "idle",
            ElevatorMode::Waiting => "waiting",
            ElevatorMode::MovingUp => "movingUp",
            ElevatorMode::MovingDown => "movingDown",
        };
        write!(f, "{}", name)
    }
}

/// A button press. Hall buttons carry the direction the passenger wants to go,
/// but every call means the same thing to the scheduler: visit `floor`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Call {
    Hall { floor: Floor, direction: Direction },
    Cab { floor: Floor },
}

impl Call {
    pub fn floor(&self) -> Floor {
        match *self {
            Call::Hall { floor, .. } => floor,
            Call::Cab { floor } => floor,
        }
    }
}

/// Read-only view of the elevator handed to the presentation shell.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ElevatorSnapshot {
    pub version: u64,
    pub floor: Floor,
    pub destination: Option<Floor>,
    pub mode: ElevatorMode,
    pub queue: Vec<Floor>,
}

impl fmt::Display for ElevatorSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let destination = match self.destination {
            Some(floor) => floor.to_string(),
            None => "-".to_string(),
        };
        let queue = self
            .queue
            .iter()
            .map(|floor| floor.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        write!(
            f,
            "floor {} | destination {} | mode {} | queue [{}]",
            self.floor, destination, self.mode, queue
        )
    }
}
