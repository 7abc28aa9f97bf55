//! Developer console on stdin, bridged to the UI thread over a bounded queue.

pub mod commands;
pub mod runtime;
