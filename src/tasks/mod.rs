//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Purge: drops persisted documents past their collection expiry

mod purge;

pub use purge::spawn_purge_task;
