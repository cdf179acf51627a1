/// 目標可見性判定
///
/// 對範圍內的候選目標做三道篩選：環境遮擋、內圈包含、視錐角度
use vek::Vec2;

use crate::config::VisionConfig;
use crate::spatial::{RayHit, SpatialQuery};
use crate::target::{TargetId, TargetRegistry};
use crate::vision::geometry::{ObserverPose, VisionGeometry};

/// 單個觀察者本 tick 的視錐幾何快取
///
/// 視錐邊方向每 tick 只轉一次世界座標，判定階段重複使用
#[derive(Debug, Clone, Copy)]
pub struct ConeFrame {
    /// 視錐起始邊方向（世界座標）
    pub cone_start_dir: Vec2<f32>,
    /// 視錐結束邊方向（世界座標）
    pub cone_end_dir: Vec2<f32>,
    /// 是否為全圓退化模式
    pub full_circle: bool,
}

impl Default for ConeFrame {
    fn default() -> Self {
        Self {
            cone_start_dir: Vec2::unit_x(),
            cone_end_dir: Vec2::unit_x(),
            full_circle: false,
        }
    }
}

/// 判定候選目標的可見性，把可見的目標 ID 寫入 visible
///
/// 不直接改寫註冊表的旗標；多觀察者的結果由 tick 驅動統一做 OR 合併，
/// 避免後寫的觀察者把別人標好的 visible 蓋回 false
pub fn classify_targets<Q: SpatialQuery>(
    config: &VisionConfig,
    pose: &ObserverPose,
    frame: &ConeFrame,
    env: &Q,
    registry: &TargetRegistry,
    candidates: &mut Vec<TargetId>,
    hits: &mut Vec<RayHit>,
    visible: &mut Vec<TargetId>,
) {
    visible.clear();

    // 廣域篩選：只對範圍內的目標做精細判定
    registry.targets_in_range(pose.position, config.broad_phase_radius(), candidates);

    for &id in candidates.iter() {
        let target = match registry.get(id) {
            Some(target) => target,
            None => continue,
        };

        let direction = target.position - pose.position;
        let distance = direction.magnitude();

        // 遮擋測試：中心到目標之間有任何環境命中就直接不可見
        if distance > f32::EPSILON {
            env.cast_ray(
                pose.position,
                direction / distance,
                distance,
                config.env_mask,
                hits,
            );
            if !hits.is_empty() {
                continue;
            }
        }

        // 包含測試：內圈與角度無關，加上目標自身的等效半徑，
        // 擦到內圈也算看到
        let in_circle = distance <= config.inner_radius + target.shape.half_size();

        if !in_circle {
            if frame.full_circle {
                continue; // 全圓模式沒有視錐可以補救
            }

            // 角度測試：起始邊→結束邊的有號角度符號代表「視錐內側在哪一邊」，
            // 三個符號都一致才在視錐角度範圍內，跨 0°/360° 接縫也成立
            let flag = VisionGeometry::angle_sign(frame.cone_start_dir, frame.cone_end_dir);
            let v1 = VisionGeometry::angle_sign(frame.cone_start_dir, direction);
            let v2 = VisionGeometry::angle_sign(direction, frame.cone_end_dir);
            if flag != v1 || flag != v2 {
                continue;
            }
        }

        visible.push(id);
    }
}
