//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Sweep: Removes expired reports at configured intervals

mod sweep;

pub use sweep::spawn_sweep_task;
