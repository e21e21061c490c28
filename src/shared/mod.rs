pub mod error;
pub mod macros;
pub mod structs;

pub use error::ElevatorError;
pub use structs::Call;
pub use structs::Direction;
pub use structs::ElevatorMode;
pub use structs::ElevatorSnapshot;
pub use structs::Floor;
