/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::floors::FloorRegistry;
use crate::elevator::queue::RequestQueue;
use crate::shared::{Call, Direction, ElevatorError, ElevatorMode, ElevatorSnapshot, Floor};

/***************************************/
/*               Enums                 */
/***************************************/

/// The one timed action owed for a given floor and destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Travel { from: Floor, to: Floor },
    Dwell { floor: Floor },
}

/***************************************/
/*             Public API              */
/***************************************/

/**
 * The car and the queue it serves, without any notion of time.
 *
 * `Car` decides what happens next (`next_step`) and applies it (`apply_step`), while
 * the FSM decides when. The mode is never stored; it is derived from the current
 * floor and the queue head every time it is asked for.
 */
#[derive(Debug, Clone)]
pub struct Car {
    registry: FloorRegistry,
    floor: Floor,
    queue: RequestQueue,
}

impl Car {
    pub fn new(registry: FloorRegistry) -> Car {
        Car {
            registry,
            floor: registry.lowest(),
            queue: RequestQueue::new(),
        }
    }

    pub fn with_floor(registry: FloorRegistry, floor: Floor) -> Result<Car, ElevatorError> {
        let floor = registry.validate(floor)?;
        Ok(Car {
            registry,
            floor,
            queue: RequestQueue::new(),
        })
    }

    pub fn registry(&self) -> &FloorRegistry {
        &self.registry
    }

    pub fn floor(&self) -> Floor {
        self.floor
    }

    pub fn destination(&self) -> Option<Floor> {
        self.queue.peek()
    }

    pub fn mode(&self) -> ElevatorMode {
        ElevatorMode::derive(self.floor, self.destination())
    }

    pub fn queue(&self) -> &[Floor] {
        self.queue.as_slice()
    }

    /// Adds `target` to the queue. `Ok(false)` means the request was redundant.
    pub fn request_floor(&mut self, target: Floor) -> Result<bool, ElevatorError> {
        let target = self.registry.validate(target)?;
        Ok(self.queue.insert(self.floor, target))
    }

    /// Handles a button press. Hall buttons that do not exist are rejected.
    pub fn call(&mut self, call: Call) -> Result<bool, ElevatorError> {
        let floor = self.registry.validate(call.floor())?;

        if let Call::Hall { direction, .. } = call {
            let missing = match direction {
                Direction::Up => floor == self.registry.highest(),
                Direction::Down => floor == self.registry.lowest(),
            };
            if missing {
                return Err(ElevatorError::InvalidCall { floor, direction });
            }
        }

        self.request_floor(floor)
    }

    pub fn next_step(&self) -> Option<Step> {
        let destination = self.destination()?;
        match Direction::between(self.floor, destination) {
            None => Some(Step::Dwell { floor: self.floor }),
            Some(direction) => Some(Step::Travel {
                from: self.floor,
                to: direction.step(self.floor),
            }),
        }
    }

    /// Applies `step` if it is still the step owed. Returns false for a stale step.
    pub fn apply_step(&mut self, step: Step) -> bool {
        if self.next_step() != Some(step) {
            return false;
        }

        match step {
            Step::Travel { to, .. } => self.floor = to,
            Step::Dwell { floor } => {
                self.queue.pop_if_arrived(floor);
            }
        }
        true
    }

    pub fn snapshot(&self, version: u64) -> ElevatorSnapshot {
        ElevatorSnapshot {
            version,
            floor: self.floor,
            destination: self.destination(),
            mode: self.mode(),
            queue: self.queue().to_vec(),
        }
    }
}
