/// 視野配置
///
/// 每 tick 不變的視野參數，緩衝容量也由這裡推導
use std::fs::File;
use std::io::Read;

use failure::{format_err, Error};
use serde::{Deserialize, Serialize};

use crate::spatial::{LayerMask, LAYER_ENV, LAYER_TARGET};

/// 視野錐配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisionConfig {
    /// 視錐半角（度，0~180；180 以上退化為全圓視野）
    pub cone_half_angle_deg: f32,
    /// 視錐範圍
    pub cone_range: f32,
    /// 內圈感知半徑（這個範圍內不看角度，永遠算看得到）
    pub inner_radius: f32,
    /// 取樣射線的間隔角度（度）
    pub segment_angle_deg: f32,
    /// 環境遮擋層遮罩
    pub env_mask: LayerMask,
    /// 目標層遮罩
    pub target_mask: LayerMask,
    /// 是否開啟視野網格輸出
    pub open: bool,
}

/// TOML 配置檔的外層包裝
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Setting {
    vision: VisionConfig,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            cone_half_angle_deg: 30.0,
            cone_range: 10.0,
            inner_radius: 2.0,
            segment_angle_deg: 10.0,
            env_mask: LAYER_ENV,
            target_mask: LAYER_TARGET,
            open: true,
        }
    }
}

impl VisionConfig {
    /// 從 TOML 檔載入配置
    pub fn from_file(file_path: &str) -> Result<Self, Error> {
        let mut file = File::open(file_path)
            .map_err(|e| format_err!("no such file {} exception:{}", file_path, e))?;
        let mut str_val = String::new();
        file.read_to_string(&mut str_val)
            .map_err(|e| format_err!("Error Reading VisionConfig: {}", e))?;
        let setting: Setting = toml::from_str(&str_val)?;
        Ok(setting.vision)
    }

    /// 檢查配置前置條件，違反時記 log 並照常繼續（不中斷 tick）
    pub fn validate(&self) {
        if !self.is_full_circle() && self.cone_range <= self.inner_radius {
            log::warn!(
                "視野配置不合理：cone_range ({}) 必須大於 inner_radius ({})，輸出幾何可能不正確",
                self.cone_range,
                self.inner_radius
            );
        }
        if self.segment_angle_deg <= 0.0 {
            log::warn!(
                "視野配置不合理：segment_angle_deg ({}) 必須大於 0，改用預設間隔",
                self.segment_angle_deg
            );
        }
        if self.cone_range <= 0.0 {
            log::warn!("視野配置不合理：cone_range ({}) 必須大於 0", self.cone_range);
        }
    }

    /// 取樣間隔角度，配置非法時退回預設值
    pub fn segment_angle(&self) -> f32 {
        if self.segment_angle_deg > 0.0 {
            self.segment_angle_deg
        } else {
            10.0
        }
    }

    /// 是否為全圓退化模式（沒有視錐，只有內圈）
    pub fn is_full_circle(&self) -> bool {
        self.cone_half_angle_deg >= 180.0
    }

    /// 頂點規劃數：多抓 4 個頂點當餘裕，多幾條線沒關係
    pub fn point_amount(&self) -> usize {
        (360.0 / self.segment_angle()).floor() as usize + 4
    }

    /// 取樣數（環上的方向數）
    pub fn sample_count(&self) -> usize {
        self.point_amount() - 1
    }

    /// 頂點緩衝容量：輪廓修補最多讓頂點數長到取樣數的 3 倍
    pub fn vertex_capacity(&self) -> usize {
        3 * self.point_amount()
    }

    /// 廣域篩選半徑；全圓模式下只剩內圈有意義
    pub fn broad_phase_radius(&self) -> f32 {
        if self.is_full_circle() {
            self.inner_radius
        } else {
            self.cone_range
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_amount() {
        let config = VisionConfig::default();
        // floor(360 / 10) + 4 = 40
        assert_eq!(config.point_amount(), 40);
        assert_eq!(config.sample_count(), 39);
        assert_eq!(config.vertex_capacity(), 120);
    }

    #[test]
    fn test_full_circle_degenerate() {
        let mut config = VisionConfig::default();
        assert!(!config.is_full_circle());
        assert_eq!(config.broad_phase_radius(), 10.0);

        config.cone_half_angle_deg = 180.0;
        assert!(config.is_full_circle());
        assert_eq!(config.broad_phase_radius(), 2.0);
    }

    #[test]
    fn test_invalid_segment_angle_falls_back() {
        let mut config = VisionConfig::default();
        config.segment_angle_deg = 0.0;
        // 非法間隔不能讓容量爆掉
        assert_eq!(config.segment_angle(), 10.0);
        assert_eq!(config.point_amount(), 40);
    }

    #[test]
    fn test_load_from_toml() {
        let text = r#"
            [vision]
            cone_half_angle_deg = 45.0
            cone_range = 12.0
            inner_radius = 3.0
            segment_angle_deg = 5.0
            env_mask = 1
            target_mask = 2
            open = true
        "#;
        let setting: Setting = toml::from_str(text).expect("TOML 配置應該能解析");
        assert_eq!(setting.vision.cone_half_angle_deg, 45.0);
        assert_eq!(setting.vision.point_amount(), 76);
    }
}
