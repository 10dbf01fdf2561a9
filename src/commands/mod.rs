//! Command implementations for graphseek

pub mod dispatch;
pub mod median;
pub mod search;
pub mod targets;
pub mod tree;
