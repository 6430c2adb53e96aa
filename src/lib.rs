#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
mod bitboard;
mod board;
mod cell;
mod common;
mod config;
#[cfg(feature = "std")]
mod logging;
pub mod overlay;
mod shape;
mod simulation;
#[cfg(feature = "std")]
pub mod ui;

pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level};
pub use overlay::{BoardMask, Origin};
pub use shape::*;
pub use simulation::*;
