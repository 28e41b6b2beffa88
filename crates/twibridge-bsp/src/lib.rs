#![no_std]
#![doc = include_str!("../README.md")]

// Modules
mod bitclock;
mod board;
mod resources;

// Flatten
pub use bitclock::*;
pub use board::*;
pub use resources::*;
