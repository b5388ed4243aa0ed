//! Typed state container shared by the schemadeck crates.
//!
//! Widgets and business logic keep their state in a [`StateCtx`], a map keyed
//! by type. The UI loop owns the ctx; everything reads and writes through it
//! so widget functions stay free of long-lived borrows of each other.

mod ctx;
mod state;

pub use ctx::StateCtx;
pub use state::State;
