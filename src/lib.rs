//! rlstage library.
//!
//! A minimal game-application framework over raylib: the engine owns the
//! window lifecycle, a stack-based state machine with recursive nesting,
//! and a cache of images, textures and fonts with placeholder fallbacks.
//!
//! - [`config`] – engine settings, validation and INI persistence
//! - [`engine`] – the main loop, quit propagation and teardown ordering
//! - [`error`] – the crate error type
//! - [`resources`] – the name-keyed resource cache
//! - [`stack`] – the LIFO container behind the state stack
//! - [`state`] – the capability set application states implement
//! - [`window`] – the raylib capability surface

pub mod config;
pub mod engine;
pub mod error;
pub mod resources;
pub mod stack;
pub mod state;
pub mod window;

pub use config::Config;
pub use engine::Engine;
pub use error::{Error, Result};
pub use resources::Resources;
pub use stack::Stack;
pub use state::{DefaultState, State};
pub use window::Window;
