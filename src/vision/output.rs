/// 視野網格輸出
///
/// 給渲染層消費的序列化格式；頂點在觀察者本地座標
use serde::{Deserialize, Serialize};
use vek::Vec2;

use crate::vision::instance::VisionInstance;

/// 視野網格資料
///
/// 三角形以扇形索引排列，包含收尾的零面積三角形，
/// 消費端的光柵化器需要容忍零面積三角形
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisionMeshData {
    /// 觀察者世界位置
    pub observer_pos: Vec2<f32>,
    /// 本地座標頂點（index 0 為中心點）
    pub vertices: Vec<Vec2<f32>>,
    /// 三角形索引
    pub indices: Vec<u32>,
    /// 網格是否啟用
    pub enabled: bool,
}

impl VisionMeshData {
    /// 擷取實例本 tick 的網格
    pub fn from_instance(instance: &VisionInstance) -> Self {
        Self {
            observer_pos: instance.pose.position,
            vertices: instance.vertices().to_vec(),
            indices: instance.indices().to_vec(),
            enabled: instance.mesh_enabled(),
        }
    }

    /// 三角形數量
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VisionConfig;
    use crate::spatial::StaticWorld;
    use crate::vision::geometry::ObserverPose;

    #[test]
    fn test_mesh_data_serializes() {
        let world = StaticWorld::new();
        let mut instance = VisionInstance::new(
            VisionConfig::default(),
            ObserverPose::new(Vec2::new(1.0, 2.0), 0.0),
        );
        let vertex_count = instance.update(&world);

        let mesh = VisionMeshData::from_instance(&instance);
        assert_eq!(mesh.vertices.len(), vertex_count);
        assert_eq!(mesh.triangle_count(), vertex_count);
        assert!(mesh.enabled);

        let json = serde_json::to_string(&mesh).expect("網格要能序列化");
        let back: VisionMeshData = serde_json::from_str(&json).expect("網格要能反序列化");
        assert_eq!(back.vertices.len(), mesh.vertices.len());
        assert_eq!(back.observer_pos, mesh.observer_pos);
    }
}
