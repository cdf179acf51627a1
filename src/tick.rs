/// 視野 tick 驅動
///
/// 每 tick 依序執行：旗標重設 → 各觀察者多邊形重建與可見性判定 → OR 合併
use rayon::prelude::*;

use crate::spatial::SpatialQuery;
use crate::target::{TargetId, TargetRegistry};
use crate::vision::instance::VisionInstance;

/// 視野 tick 系統
#[derive(Debug, Default)]
pub struct VisionTickSystem {
    /// 各觀察者本 tick 的可見目標暫存
    visible_sets: Vec<Vec<TargetId>>,
}

impl VisionTickSystem {
    pub fn new() -> Self {
        Self {
            visible_sets: Vec::new(),
        }
    }

    /// 跑完一個 tick 的完整視野管線
    ///
    /// 重設必須在任何觀察者的判定之前完成；各觀察者持有各自的
    /// 暫存緩衝、彼此獨立，可以平行處理；旗標最後以 OR 合併寫回，
    /// 多個觀察者看到同一目標時不會被後寫者蓋掉
    pub fn run<Q: SpatialQuery + Sync>(
        &mut self,
        instances: &mut [VisionInstance],
        env: &Q,
        registry: &mut TargetRegistry,
    ) {
        registry.reset_visibility();

        if self.visible_sets.len() < instances.len() {
            self.visible_sets.resize_with(instances.len(), Vec::new);
        }

        {
            let registry_ref: &TargetRegistry = registry;
            instances
                .par_iter_mut()
                .zip(self.visible_sets.par_iter_mut())
                .for_each(|(instance, visible)| {
                    instance.update(env);
                    instance.classify(env, registry_ref, visible);
                });
        }

        let mut marked = 0usize;
        for visible in self.visible_sets.iter().take(instances.len()) {
            for &id in visible {
                registry.mark_visible(id);
                marked += 1;
            }
        }
        log::debug!(
            "vision tick: {} 個觀察者，標記 {} 筆可見",
            instances.len(),
            marked
        );
    }
}
