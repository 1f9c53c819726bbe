pub mod platform;
pub mod sampler;
pub mod scripted;
pub mod ticks;
