//! Board-state controller for boardtty.
//!
//! Holds the current position, orientation and square size, and drives
//! a renderer collaborator. Pointer input is translated into controller
//! calls by [`input::InputAdapter`], with vetoing and observation hook
//! points along the way. Nothing in this crate touches a terminal.

pub mod controller;
pub mod hooks;
pub mod input;
pub mod layout;
pub mod renderer;

pub use controller::{BoardController, BoardError, PositionSource};
pub use hooks::{BoardHooks, DragVerdict, DropVerdict, LoggingHooks, NoHooks};
pub use input::{InputAdapter, PointerEvent};
pub use layout::{cell_order, CellDescriptor, Orientation};
pub use renderer::{NullRenderer, Renderer};
