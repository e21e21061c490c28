use crate::config::ElevatorConfig;
use crate::elevator::car::{Car, Step};
use crate::elevator::floors::FloorRegistry;
use crate::shared::{Call, ElevatorError, ElevatorSnapshot};
use crossbeam_channel as cbc;
use log::{debug, info, warn};
use std::time::{Duration, Instant};

/**
 * Drives the car through time.
 *
 * The `ElevatorFSM` (Finite State Machine) is the only owner of the car and its queue.
 * It runs on a single thread, takes calls from the shell, arms one timer for the step
 * the car currently owes and publishes a snapshot after every committed change.
 *
 * # Fields
 * - `call_rx`:         Receives button presses (hall and cab calls).
 * - `state_tx`:        Publishes an `ElevatorSnapshot` after every change.
 * - `terminate_rx`:    Stops the loop immediately. Dropping the sender does not.
 * - `car`:             Current floor and request queue.
 * - `travel_time`:     Time to move one floor.
 * - `wait_time`:       Dwell time at each stop.
 * - `step_timer`:      Fires when the scheduled step is due. `never()` while idle.
 * - `scheduled`:       The step `step_timer` was armed for.
 * - `version`:         Number of committed changes so far.
 * - `draining`:        Set once the call channel closes; the loop exits when idle.
 *
 */

enum Event {
    CallReceived(Call),
    CallsClosed,
    StepDue,
    Terminate,
    TerminateClosed,
}

pub struct ElevatorFSM {
    // Shell channels
    call_rx: cbc::Receiver<Call>,
    state_tx: cbc::Sender<ElevatorSnapshot>,
    terminate_rx: cbc::Receiver<()>,

    // Private fields
    car: Car,
    travel_time: Duration,
    wait_time: Duration,
    step_timer: cbc::Receiver<Instant>,
    scheduled: Option<Step>,
    version: u64,
    draining: bool,
}

impl ElevatorFSM {
    pub fn new(
        config: &ElevatorConfig,
        call_rx: cbc::Receiver<Call>,
        state_tx: cbc::Sender<ElevatorSnapshot>,
        terminate_rx: cbc::Receiver<()>,
    ) -> Result<ElevatorFSM, ElevatorError> {
        let registry = FloorRegistry::new(config.lowest_floor, config.highest_floor)?;
        let car = Car::with_floor(registry, config.initial_floor())?;

        Ok(ElevatorFSM {
            call_rx,
            state_tx,
            terminate_rx,
            car,
            travel_time: config.travel_duration(),
            wait_time: config.wait_duration(),
            step_timer: cbc::never(),
            scheduled: None,
            version: 0,
            draining: false,
        })
    }

    pub fn run(mut self) {
        info!(
            "Elevator ready at floor {} serving floors {}..={}",
            self.car.floor(),
            self.car.registry().lowest(),
            self.car.registry().highest()
        );
        self.publish();

        // Main loop
        loop {
            if self.draining && self.scheduled.is_none() {
                info!("No more calls and nothing queued, stopping");
                break;
            }

            match self.wait_for_event() {
                Event::Terminate => {
                    info!("Elevator terminated");
                    break;
                }
                event => self.handle_event(event),
            }
        }
    }

    fn wait_for_event(&self) -> Event {
        cbc::select! {
            recv(self.call_rx) -> call => match call {
                Ok(call) => Event::CallReceived(call),
                Err(_) => Event::CallsClosed,
            },
            recv(self.step_timer) -> _ => Event::StepDue,
            recv(self.terminate_rx) -> msg => match msg {
                Ok(()) => Event::Terminate,
                Err(_) => Event::TerminateClosed,
            },
        }
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::CallReceived(call) => match self.car.call(call) {
                Ok(true) => {
                    info!("Accepted {:?}, queue is now {:?}", call, self.car.queue());
                    self.commit();
                }
                Ok(false) => debug!("Ignored redundant {:?}", call),
                Err(e) => warn!("Rejected {:?}: {}", call, e),
            },

            Event::CallsClosed => {
                debug!("Call channel closed, finishing queued work");
                self.call_rx = cbc::never();
                self.draining = true;
            }

            Event::TerminateClosed => {
                debug!("Terminate channel closed");
                self.terminate_rx = cbc::never();
            }

            Event::StepDue => {
                let due = self.scheduled.take();
                let applied = match due {
                    Some(step) => self.car.apply_step(step),
                    None => false,
                };

                if !applied {
                    debug!("Dropped stale step {:?}", due);
                    self.schedule();
                    return;
                }

                match due {
                    Some(Step::Dwell { floor }) => info!("Served floor {}", floor),
                    _ if self.car.destination() == Some(self.car.floor()) => {
                        info!("Arrived at floor {}", self.car.floor())
                    }
                    _ => {}
                }
                self.commit();
            }

            Event::Terminate => {}
        }
    }

    // Every committed change is published and gets a fresh schedule
    fn commit(&mut self) {
        self.version += 1;
        self.publish();
        self.schedule();
    }

    fn publish(&self) {
        let _ = self.state_tx.send(self.car.snapshot(self.version));
    }

    // Arms the timer for the owed step. A timer already armed for that step is kept,
    // so a request that only moves the destination never restarts an in-flight move.
    fn schedule(&mut self) {
        let next = self.car.next_step();
        if next == self.scheduled {
            return;
        }

        self.scheduled = next;
        self.step_timer = match next {
            Some(Step::Travel { .. }) => cbc::after(self.travel_time),
            Some(Step::Dwell { .. }) => cbc::after(self.wait_time),
            None => cbc::never(),
        };
        debug!("Scheduled {:?}", next);
    }
}
