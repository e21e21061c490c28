pub mod config;
pub mod elevator;
pub mod shared;
pub mod shell;
