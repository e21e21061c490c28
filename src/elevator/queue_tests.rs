/*
 * Unit tests for the request queue
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - insertion into empty, upward and downward sweeps
 * - redundant requests
 * - direction lock and arrival-order service after the turn
 * - pinned head while dwelling
 * - property tests for the queue invariants
 *
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod queue_tests {
    use crate::elevator::RequestQueue;
    use crate::shared::{Direction, Floor};
    use proptest::prelude::*;

    fn queue_from(current: Floor, requests: &[Floor]) -> RequestQueue {
        let mut queue = RequestQueue::new();
        for &floor in requests {
            queue.insert(current, floor);
        }
        queue
    }

    #[test]
    fn test_queue_empty_insert() {
        // Arrange
        let mut queue = RequestQueue::new();

        // Act
        let inserted = queue.insert(0, 3);

        // Assert
        assert!(inserted);
        assert_eq!(queue.as_slice(), &[3]);
        assert_eq!(queue.peek(), Some(3));
    }

    #[test]
    fn test_queue_ignores_current_floor() {
        // Arrange
        let mut queue = queue_from(4, &[1]);

        // Act
        let inserted = queue.insert(4, 4);

        // Assert
        assert!(!inserted);
        assert_eq!(queue.as_slice(), &[1]);
    }

    #[test]
    fn test_queue_ignores_duplicates() {
        // Arrange
        let mut queue = queue_from(0, &[3, 5]);

        // Act
        let first = queue.insert(0, 5);
        let second = queue.insert(0, 3);

        // Assert
        assert!(!first);
        assert!(!second);
        assert_eq!(queue.as_slice(), &[3, 5]);
    }

    #[test]
    fn test_queue_upward_sweep_sorted() {
        // Act
        let queue = queue_from(0, &[5, 2, 4, 1]);

        // Assert
        assert_eq!(queue.as_slice(), &[1, 2, 4, 5]);
        assert_eq!(queue.sweep_direction(0), Some(Direction::Up));
    }

    #[test]
    fn test_queue_downward_sweep_sorted() {
        // Act
        let queue = queue_from(5, &[0, 3, 1, 4]);

        // Assert
        assert_eq!(queue.as_slice(), &[4, 3, 1, 0]);
        assert_eq!(queue.sweep_direction(5), Some(Direction::Down));
    }

    #[test]
    fn test_queue_direction_lock() {
        // Arrange: moving up from floor 2 towards 3 and 5
        let mut queue = queue_from(2, &[3, 5]);

        // Act
        queue.insert(2, 1);

        // Assert
        assert_eq!(queue.as_slice(), &[3, 5, 1]);
    }

    #[test]
    fn test_queue_opposite_requests_keep_arrival_order() {
        // Arrange
        let mut queue = queue_from(3, &[5]);

        // Act
        queue.insert(3, 0);
        queue.insert(3, 2);
        queue.insert(3, 1);

        // Assert
        assert_eq!(queue.as_slice(), &[5, 0, 2, 1]);
    }

    #[test]
    fn test_queue_ahead_request_joins_active_sweep() {
        // Arrange
        let mut queue = queue_from(2, &[5, 0]);

        // Act
        queue.insert(2, 4);
        queue.insert(2, 6);

        // Assert
        assert_eq!(queue.as_slice(), &[4, 5, 6, 0]);
    }

    #[test]
    fn test_queue_pinned_head_while_dwelling() {
        // Arrange: the car has arrived at 5 and is dwelling there
        let mut queue = queue_from(4, &[5, 7]);
        let current = 5;

        // Act
        queue.insert(current, 6);
        queue.insert(current, 2);

        // Assert
        assert_eq!(queue.as_slice(), &[5, 6, 7, 2]);
        assert_eq!(queue.sweep_direction(current), Some(Direction::Up));
    }

    #[test]
    fn test_queue_pinned_head_alone() {
        // Arrange
        let mut queue = queue_from(4, &[5]);

        // Act
        queue.insert(5, 3);

        // Assert
        assert_eq!(queue.as_slice(), &[5, 3]);
    }

    #[test]
    fn test_queue_pop_if_arrived() {
        // Arrange
        let mut queue = queue_from(2, &[3, 5, 1]);

        // Act
        let early = queue.pop_if_arrived(2);
        let arrived = queue.pop_if_arrived(3);

        // Assert
        assert_eq!(early, None);
        assert_eq!(arrived, Some(3));
        assert_eq!(queue.as_slice(), &[5, 1]);
    }

    /// The leading run of the queue, minus a pinned head, moving strictly away from `current`.
    fn active_sweep(queue: &RequestQueue, current: Floor) -> Vec<Floor> {
        let floors = queue.as_slice();
        let start = usize::from(floors.first() == Some(&current));
        let direction = match queue.sweep_direction(current) {
            Some(direction) => direction,
            None => return Vec::new(),
        };
        let mut reference = current;
        floors[start..]
            .iter()
            .copied()
            .take_while(|&floor| {
                let ahead = direction.is_beyond(floor, reference);
                reference = floor;
                ahead
            })
            .collect()
    }

    proptest! {
        #[test]
        fn prop_queue_has_no_duplicates_and_never_current(
            current in 0u8..10,
            requests in prop::collection::vec(0u8..10, 0..30),
        ) {
            let queue = queue_from(current, &requests);

            let mut seen = queue.as_slice().to_vec();
            seen.sort_unstable();
            seen.dedup();
            prop_assert_eq!(seen.len(), queue.len());
            prop_assert!(!queue.contains(current));
        }

        #[test]
        fn prop_queue_insert_is_idempotent(
            current in 0u8..10,
            requests in prop::collection::vec(0u8..10, 0..20),
            target in 0u8..10,
        ) {
            let mut once = queue_from(current, &requests);
            once.insert(current, target);
            let mut twice = once.clone();
            let changed = twice.insert(current, target);

            prop_assert!(!changed);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_queue_keeps_every_request_ahead_in_the_sweep(
            current in 0u8..10,
            requests in prop::collection::vec(0u8..10, 1..30),
        ) {
            let queue = queue_from(current, &requests);

            // Every queued floor ahead of the car sits in the active sweep, in order
            if let Some(direction) = queue.sweep_direction(current) {
                let mut ahead = queue
                    .as_slice()
                    .iter()
                    .copied()
                    .filter(|&floor| direction.is_beyond(floor, current))
                    .collect::<Vec<Floor>>();
                ahead.sort_unstable();
                if direction == Direction::Down {
                    ahead.reverse();
                }
                prop_assert_eq!(active_sweep(&queue, current), ahead);
            }
        }
    }
}
