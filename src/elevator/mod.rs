pub mod car;
pub mod floors;
pub mod fsm;
pub mod queue;

mod queue_tests;

pub use car::{Car, Step};
pub use floors::FloorRegistry;
pub use fsm::ElevatorFSM;
pub use queue::RequestQueue;
