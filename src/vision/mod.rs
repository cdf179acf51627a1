/// 視野計算核心模組
///
/// 管線：取樣環生成 → 遮擋裁剪 → 輪廓修補 → 扇形三角化，
/// 可見性判定與多邊形共用同一套視錐幾何
pub mod classifier;
pub mod geometry;
pub mod instance;
pub mod occlusion;
pub mod output;
pub mod sample_ring;
pub mod silhouette;
pub mod triangulation;

pub use self::{
    classifier::*,
    geometry::*,
    instance::*,
    occlusion::*,
    output::*,
    sample_ring::*,
    silhouette::*,
    triangulation::*,
};
