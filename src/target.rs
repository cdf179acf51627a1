/// 目標註冊表
///
/// 明確持有所有候選目標與其可見旗標，
/// 廣域篩選直接對註冊表做範圍查詢，不掃描整個場景
use hashbrown::HashMap;
use vek::Vec2;

use crate::spatial::{ColliderShape, MAX_OVERLAP_RESULTS};

/// 目標 ID
pub type TargetId = u64;

/// 候選目標
#[derive(Debug, Clone)]
pub struct Target {
    /// 世界座標位置
    pub position: Vec2<f32>,
    /// 包圍形狀，決定內圈包含測試的等效半徑
    pub shape: ColliderShape,
    /// 本 tick 是否被任何觀察者看見
    pub visible: bool,
}

/// 目標註冊表
#[derive(Debug, Default)]
pub struct TargetRegistry {
    targets: HashMap<TargetId, Target>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self {
            targets: HashMap::new(),
        }
    }

    /// 註冊目標，初始為不可見
    pub fn insert(&mut self, id: TargetId, position: Vec2<f32>, shape: ColliderShape) {
        self.targets.insert(
            id,
            Target {
                position,
                shape,
                visible: false,
            },
        );
    }

    /// 移除目標
    pub fn remove(&mut self, id: TargetId) {
        self.targets.remove(&id);
    }

    pub fn get(&self, id: TargetId) -> Option<&Target> {
        self.targets.get(&id)
    }

    /// 更新目標位置
    pub fn set_position(&mut self, id: TargetId, position: Vec2<f32>) {
        if let Some(target) = self.targets.get_mut(&id) {
            target.position = position;
        }
    }

    /// 將所有目標重設為不可見
    ///
    /// 每 tick 的判定之前必須對全部觀察者先跑完這一步，
    /// 可見性不跨 tick 保留
    pub fn reset_visibility(&mut self) {
        for target in self.targets.values_mut() {
            target.visible = false;
        }
    }

    /// 以 OR 語義標記可見：已經被別的觀察者標過的不會被蓋回去
    pub fn mark_visible(&mut self, id: TargetId) {
        if let Some(target) = self.targets.get_mut(&id) {
            target.visible = true;
        }
    }

    pub fn is_visible(&self, id: TargetId) -> bool {
        self.targets.get(&id).map(|t| t.visible).unwrap_or(false)
    }

    /// 廣域篩選：中心半徑範圍內的目標 ID 寫入 out
    ///
    /// 範圍測試含目標自身大小（貼到邊也算），結果數上限 MAX_OVERLAP_RESULTS；
    /// 這只是必要非充分的粗篩，精細判定交給分類器
    pub fn targets_in_range(&self, center: Vec2<f32>, range: f32, out: &mut Vec<TargetId>) {
        out.clear();
        for (&id, target) in self.targets.iter() {
            if out.len() >= MAX_OVERLAP_RESULTS {
                break;
            }
            if target.position.distance(center) <= range + target.shape.half_size() {
                out.push(id);
            }
        }
    }

    /// 目前可見的目標 ID（排序後回傳，方便記錄與測試）
    pub fn visible_targets(&self) -> Vec<TargetId> {
        let mut ids: Vec<TargetId> = self
            .targets
            .iter()
            .filter(|(_, t)| t.visible)
            .map(|(&id, _)| id)
            .collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
