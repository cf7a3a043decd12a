// Aggregates the model files
pub mod item;

// Re-export so the rest of the crate can use `crate::model::Task`
pub use item::{DISPLAY_FORMAT, INPUT_FORMAT, Task, TaskKind};
