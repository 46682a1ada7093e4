//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window, the viewport and the point field.

mod core;
mod event_handler;
mod init;
mod input;
mod shutdown;

pub use core::StardustApp;
