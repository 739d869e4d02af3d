pub mod config;
pub mod macros;
pub mod roster;
