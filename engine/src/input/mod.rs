//! Input Module
//!
//! Provides platform-agnostic input handling for keyboard and mouse.
//! This module is decoupled from any specific windowing system (like winit)
//! to allow for flexible integration.
//!
//! # Example
//!
//! ```rust,ignore
//! use storewalk_engine::input::{InputState, KeyCode, MouseButton};
//!
//! let mut input = InputState::new();
//!
//! // Handle keyboard input
//! input.keyboard.handle_key(KeyCode::W, true); // W pressed
//! if input.keyboard.movement.forward {
//!     // Walk forward
//! }
//!
//! // Handle mouse input
//! input.mouse.set_position(100.0, 50.0, 800, 600);
//! input.mouse.set_button(MouseButton::Left, true);
//! if let Some((x, y)) = input.mouse.normalized_position() {
//!     // Use normalized position for display picking
//! }
//! ```

pub mod keyboard;
pub mod mouse;

// Re-export commonly used types at module level
pub use keyboard::{KeyCode, KeyboardState, MovementKeys};
pub use mouse::{ButtonState, MouseButton, MouseState, Position, ScrollDelta};

/// Combined input state for both keyboard and mouse.
///
/// This provides a convenient way to track all input state in a single struct.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub keyboard: KeyboardState,
    pub mouse: MouseState,
}

impl InputState {
    /// Create a new input state with all inputs in their default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all input state to defaults.
    pub fn reset(&mut self) {
        self.keyboard.reset();
        self.mouse.reset();
    }

    /// Check if any movement key is held.
    pub fn is_moving(&self) -> bool {
        self.keyboard.movement.any_pressed()
    }
}
