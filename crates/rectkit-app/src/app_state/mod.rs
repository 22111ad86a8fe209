//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop: one window, one render state, one demo scene.

mod core;
mod event_handler;
mod init;

pub use self::core::RectkitApp;
