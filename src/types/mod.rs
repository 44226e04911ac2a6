//! Data types for the grid engine.

mod cell;
mod config;
mod selection;

pub use cell::*;
pub use config::*;
pub use selection::*;
