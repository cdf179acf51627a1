/// 視野實例
///
/// 單個觀察者的視野管線：配置、位姿、本 tick 的視錐幾何快取，
/// 與所有逐 tick 重複使用的暫存緩衝都集中在這裡
use vek::Vec2;

use crate::config::VisionConfig;
use crate::spatial::{RayHit, SpatialQuery, MAX_OVERLAP_RESULTS, MAX_RAY_HITS};
use crate::target::{TargetId, TargetRegistry};
use crate::vision::classifier::{classify_targets, ConeFrame};
use crate::vision::geometry::ObserverPose;
use crate::vision::occlusion::clip_samples;
use crate::vision::sample_ring::SampleRing;
use crate::vision::silhouette::refine_silhouette;
use crate::vision::triangulation::fan_indices;

/// 視野實例
///
/// 緩衝容量在建構或重新配置時一次推導完成，tick 之間只重用不重配；
/// 同一個實例不可跨 tick 並行存取，不同實例彼此完全獨立
#[derive(Debug)]
pub struct VisionInstance {
    /// 視野配置
    config: VisionConfig,
    /// 觀察者位姿，由外部每 tick 更新
    pub pose: ObserverPose,
    /// 取樣環
    ring: SampleRing,
    /// 頂點緩衝（index 0 為中心點）
    vertices: Vec<Vec2<f32>>,
    /// 三角形索引緩衝
    indices: Vec<u32>,
    /// 射線命中暫存
    ray_hits: Vec<RayHit>,
    /// 廣域篩選暫存
    candidates: Vec<TargetId>,
    /// 本 tick 的視錐幾何快取
    frame: ConeFrame,
}

impl VisionInstance {
    /// 建立視野實例，緩衝容量由配置一次推導
    pub fn new(config: VisionConfig, pose: ObserverPose) -> Self {
        config.validate();
        let vertex_capacity = config.vertex_capacity();
        Self {
            ring: SampleRing::with_config(&config),
            vertices: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(vertex_capacity * 3),
            ray_hits: Vec::with_capacity(MAX_RAY_HITS),
            candidates: Vec::with_capacity(MAX_OVERLAP_RESULTS),
            frame: ConeFrame::default(),
            config,
            pose,
        }
    }

    /// 更換配置並重新推導緩衝容量
    ///
    /// 容量只能在 tick 之間改變，不可在計算進行中呼叫
    pub fn reconfigure(&mut self, config: VisionConfig) {
        config.validate();
        let vertex_capacity = config.vertex_capacity();
        self.ring = SampleRing::with_config(&config);
        self.vertices = Vec::with_capacity(vertex_capacity);
        self.indices = Vec::with_capacity(vertex_capacity * 3);
        self.config = config;
    }

    /// 是否發布網格（對應外部的開關配置）
    pub fn mesh_enabled(&self) -> bool {
        self.config.open
    }

    /// 逐 tick 重建視野多邊形，回傳頂點數
    ///
    /// 關閉時清空輸出；開啟時依序跑取樣環生成、遮擋裁剪、
    /// 輪廓修補與扇形三角化
    pub fn update<Q: SpatialQuery>(&mut self, env: &Q) -> usize {
        if !self.config.open {
            self.vertices.clear();
            self.indices.clear();
            return 0;
        }

        self.ring.generate(&self.config);

        // 視錐邊方向只在這裡轉一次世界座標，判定階段重用快取
        self.frame = ConeFrame {
            cone_start_dir: self.pose.transform_direction(self.ring.cone_start_local),
            cone_end_dir: self.pose.transform_direction(self.ring.cone_end_local),
            full_circle: self.config.is_full_circle(),
        };

        clip_samples(
            &mut self.ring,
            &self.pose,
            env,
            self.config.env_mask,
            &mut self.ray_hits,
        );
        let vertex_count = refine_silhouette(&self.ring, &mut self.vertices);
        fan_indices(vertex_count, &mut self.indices);
        vertex_count
    }

    /// 判定可見目標，結果寫入 visible；須在同一 tick 的 update 之後呼叫
    pub fn classify<Q: SpatialQuery>(
        &mut self,
        env: &Q,
        registry: &TargetRegistry,
        visible: &mut Vec<TargetId>,
    ) {
        if !self.config.open {
            visible.clear();
            return;
        }
        classify_targets(
            &self.config,
            &self.pose,
            &self.frame,
            env,
            registry,
            &mut self.candidates,
            &mut self.ray_hits,
            visible,
        );
    }

    /// 本 tick 的多邊形頂點（本地座標）
    pub fn vertices(&self) -> &[Vec2<f32>] {
        &self.vertices
    }

    /// 本 tick 的三角形索引
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// 本 tick 的視錐幾何快取
    pub fn frame(&self) -> &ConeFrame {
        &self.frame
    }

    pub fn config(&self) -> &VisionConfig {
        &self.config
    }
}
