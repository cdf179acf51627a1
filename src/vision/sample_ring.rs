/// 取樣環生成
///
/// 產生涵蓋「視錐 + 內圈」邊界的有序取樣，
/// 取樣以本地座標的「方向 × 長度」位置向量存放
use vek::Vec2;

use crate::config::VisionConfig;
use crate::vision::geometry::VisionGeometry;

/// 取樣環
///
/// points 與 hit_env 平行；hit_env 由遮擋裁剪階段填寫
#[derive(Debug, Clone)]
pub struct SampleRing {
    /// 取樣位置（本地座標）
    pub points: Vec<Vec2<f32>>,
    /// 各取樣是否命中環境
    pub hit_env: Vec<bool>,
    /// 視錐起始邊單位方向（本地）
    pub cone_start_local: Vec2<f32>,
    /// 視錐結束邊單位方向（本地）
    pub cone_end_local: Vec2<f32>,
}

impl SampleRing {
    /// 依配置預留固定容量
    pub fn with_config(config: &VisionConfig) -> Self {
        let sample_count = config.sample_count();
        Self {
            points: Vec::with_capacity(sample_count),
            hit_env: Vec::with_capacity(sample_count),
            cone_start_local: Vec2::unit_x(),
            cone_end_local: Vec2::unit_x(),
        }
    }

    /// 重新生成整個取樣環
    pub fn generate(&mut self, config: &VisionConfig) {
        self.points.clear();
        self.hit_env.clear();

        let sample_count = config.sample_count();
        let segment_angle = config.segment_angle();

        if config.is_full_circle() {
            // 退化情況：沒有視錐，整個環都用圓弧規則從 0 繞到 360
            for i in 0..sample_count {
                let angle = (i as f32 * segment_angle).min(360.0);
                self.points
                    .push(VisionGeometry::direction_from_deg(angle) * config.inner_radius);
            }
        } else {
            let half_angle = config.cone_half_angle_deg;

            // 視錐邊緣取樣；最後一筆強制落在 +half_angle，
            // 避免浮點累積誤差讓視錐遠邊留下縫隙
            let cone_line_count = (half_angle * 2.0 / segment_angle).floor() as usize + 1;
            for i in 0..cone_line_count {
                let angle = if i != cone_line_count - 1 {
                    -half_angle + i as f32 * segment_angle
                } else {
                    half_angle
                };
                self.points
                    .push(VisionGeometry::direction_from_deg(angle) * config.cone_range);
            }

            self.cone_start_local = self.points[0].normalized();
            self.cone_end_local = self.points[cone_line_count - 1].normalized();

            // 圓弧取樣：從視錐結束邊繞背面回到起始邊，
            // 夾在 360 - half_angle 以內；多出來的取樣疊在同一角度上，
            // 退化的零長度邊不會產生可見破圖
            let circle_line_count = sample_count - cone_line_count;
            for i in 0..circle_line_count {
                let angle = (half_angle + i as f32 * segment_angle).min(360.0 - half_angle);
                self.points
                    .push(VisionGeometry::direction_from_deg(angle) * config.inner_radius);
            }
        }

        self.hit_env.resize(self.points.len(), false);
        debug_assert_eq!(self.points.len(), sample_count);
    }

    /// 取樣數
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
