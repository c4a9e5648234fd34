pub mod overlap;
pub mod progress;
pub mod render;
