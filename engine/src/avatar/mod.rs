//! Avatar Module
//!
//! Per-frame kinematic movement for the controlled store avatar.

pub mod controller;

pub use controller::{AvatarController, MOVEMENT_SPEED};
