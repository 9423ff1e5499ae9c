//! Command plumbing shared by every command module

pub mod coercion;
pub mod command_helpers;
pub mod logging;
