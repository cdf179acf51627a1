/// 視野錐後端函式庫
///
/// 每個模擬 tick 重算觀察者的 2D 視野錐／視野圓多邊形，
/// 並用同一套幾何查詢判定候選目標的可見性
pub mod config;
pub mod spatial;
pub mod target;
pub mod tick;
pub mod vision;

// Re-export commonly used types
pub use crate::config::VisionConfig;
pub use crate::spatial::*;
pub use crate::target::*;
pub use crate::tick::*;
pub use crate::vision::*;
