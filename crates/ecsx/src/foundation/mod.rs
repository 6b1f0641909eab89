//! Foundation module - Core utilities shared by the ECS and the demos
//!
//! Currently this is only the logging setup.

pub mod logging;
