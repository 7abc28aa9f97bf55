//! Controller layer: viewer events, frame-driven timers, and routing events onto the navigator.

pub mod events;
pub mod orchestration;
pub mod timers;
