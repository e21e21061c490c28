use crate::shared::{Direction, Floor};

/**
 * Ordered list of pending destinations. The head is the active destination.
 *
 * The queue never holds a floor twice. Its leading entries form the active sweep:
 * the run of floors that lie strictly ahead of the car, each one further along the
 * sweep direction than the one before. Everything after the sweep is served in the
 * order it arrived once the car reverses.
 *
 * While the car dwells at the head, the head equals the current floor. It stays
 * pinned there until `pop_if_arrived` removes it, and the sweep is measured from
 * the entry behind it.
 */
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestQueue {
    floors: Vec<Floor>,
}

impl RequestQueue {
    pub fn new() -> RequestQueue {
        RequestQueue { floors: Vec::new() }
    }

    pub fn peek(&self) -> Option<Floor> {
        self.floors.first().copied()
    }

    pub fn contains(&self, floor: Floor) -> bool {
        self.floors.contains(&floor)
    }

    pub fn len(&self) -> usize {
        self.floors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    pub fn as_slice(&self) -> &[Floor] {
        &self.floors
    }

    /// Direction of the active sweep as seen from `current`, if there is one.
    pub fn sweep_direction(&self, current: Floor) -> Option<Direction> {
        self.floors
            .iter()
            .find_map(|&floor| Direction::between(current, floor))
    }

    /// Merges `target` into the queue. Returns false when the call was redundant.
    pub fn insert(&mut self, current: Floor, target: Floor) -> bool {
        if target == current || self.contains(target) {
            return false;
        }

        let position = match self.sweep_direction(current) {
            Some(direction) if direction.is_beyond(target, current) => {
                let start = self.pinned_len(current);
                let end = start + self.sweep_len(current, direction);
                self.floors[start..end]
                    .iter()
                    .position(|&floor| direction.is_beyond(floor, target))
                    .map_or(end, |offset| start + offset)
            }
            // Behind the car, or nothing to sweep: wait for the turn.
            _ => self.floors.len(),
        };

        self.floors.insert(position, target);
        true
    }

    /// Removes the head if the car has reached it.
    pub fn pop_if_arrived(&mut self, current: Floor) -> Option<Floor> {
        if self.peek() == Some(current) {
            Some(self.floors.remove(0))
        } else {
            None
        }
    }

    fn pinned_len(&self, current: Floor) -> usize {
        usize::from(self.peek() == Some(current))
    }

    fn sweep_len(&self, current: Floor, direction: Direction) -> usize {
        let mut reference = current;
        self.floors[self.pinned_len(current)..]
            .iter()
            .take_while(|&&floor| {
                let ahead = direction.is_beyond(floor, reference);
                reference = floor;
                ahead
            })
            .count()
    }
}
