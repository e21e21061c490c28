pub mod display;
pub mod input;


pub use display::{render, run_display};
pub use input::{parse_command, run_input, Command, ShellError};
