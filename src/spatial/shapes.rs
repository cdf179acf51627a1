/// 碰撞體形狀定義
use serde::{Deserialize, Serialize};
use vek::Vec2;

use crate::spatial::LayerMask;

/// 碰撞體形狀
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ColliderShape {
    /// 圓形碰撞體
    Circle { radius: f32 },
    /// 軸對齊矩形碰撞體
    Box { width: f32, height: f32 },
    /// 線段碰撞體（牆），端點為相對碰撞體位置的偏移
    Segment { a: Vec2<f32>, b: Vec2<f32> },
}

impl ColliderShape {
    /// 等效半徑，用於內圈包含測試
    ///
    /// 矩形取對角線的一半；不支援當包圍形狀的種類記 log 並回傳 0，
    /// 該目標之後只能靠視錐角度測試，吃不到內圈捷徑
    pub fn half_size(&self) -> f32 {
        match self {
            ColliderShape::Circle { radius } => *radius,
            ColliderShape::Box { width, height } => {
                (width * width + height * height).sqrt() * 0.5
            }
            ColliderShape::Segment { .. } => {
                log::warn!("不支援把 Segment 當作目標包圍形狀，等效半徑以 0 計");
                0.0
            }
        }
    }
}

/// 世界中的靜態碰撞體
#[derive(Debug, Clone)]
pub struct Collider {
    /// 碰撞體 ID（目標碰撞體的 ID 即目標 ID）
    pub id: u64,
    /// 世界座標位置
    pub position: Vec2<f32>,
    /// 形狀
    pub shape: ColliderShape,
    /// 所屬層
    pub layer: LayerMask,
}
