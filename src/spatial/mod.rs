/// 空間查詢模組
///
/// 碰撞體形狀、射線查詢能力介面，與測試／展示用的靜態世界實作
pub mod query;
pub mod shapes;
pub mod world;

pub use self::{query::*, shapes::*, world::*};
