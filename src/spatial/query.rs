/// 空間射線查詢介面
use vek::Vec2;

/// 層遮罩，與碰撞體的 layer 做位元 AND 過濾
pub type LayerMask = u32;

/// 環境遮擋層
pub const LAYER_ENV: LayerMask = 1 << 0;
/// 目標層
pub const LAYER_TARGET: LayerMask = 1 << 1;

/// 單次射線查詢的命中數上限
pub const MAX_RAY_HITS: usize = 4;
/// 廣域範圍查詢的結果數上限
pub const MAX_OVERLAP_RESULTS: usize = 32;

/// 射線命中結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// 沿射線方向的命中距離
    pub distance: f32,
    /// 命中的碰撞體 ID
    pub collider_id: u64,
}

/// 空間射線查詢能力
///
/// 由外部物理層提供的多重命中射線查詢，核心只消費不實作；
/// 查詢本身可以在內部批次平行化，但對呼叫者是同步的
pub trait SpatialQuery {
    /// 從 origin 沿單位向量 direction 投射射線，命中寫入 hits
    ///
    /// hits 會先被清空，最多寫入 MAX_RAY_HITS 筆，
    /// 只回報距離不超過 max_distance 的命中
    fn cast_ray(
        &self,
        origin: Vec2<f32>,
        direction: Vec2<f32>,
        max_distance: f32,
        mask: LayerMask,
        hits: &mut Vec<RayHit>,
    );
}
