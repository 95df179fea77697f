//! Backend bridge: command enum and the runtime thread that serves it.

pub mod commands;
pub mod runtime;
