//! The library components of the game. They allow building quiz rounds out of a dataset of animals,
//! scoring the answers given to them, and playing the whole thing in a terminal.
//!
//! The logic core lives in [`quiz`], built on top of [`diet`], [`catalog`], [`selector`],
//! [`options`] and [`tracker`]. It never renders anything; the terminal game, started through
//! [`init`], is just one caller of it.

pub mod artwork;
pub mod catalog;
pub mod data;
pub mod diet;
mod game;
mod input;
mod messages;
pub mod options;
pub mod quiz;
pub mod random;
pub mod selector;
pub mod tracker;

pub use game::init;
