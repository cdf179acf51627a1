/// 視野幾何工具
use serde::{Deserialize, Serialize};
use vek::Vec2;

/// 觀察者位姿
///
/// 取樣方向先在本地座標生成（角度從朝向軸起算），再由這裡轉到世界座標
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ObserverPose {
    /// 世界座標位置
    pub position: Vec2<f32>,
    /// 朝向角（弧度，從 +X 軸逆時針）
    pub facing: f32,
}

impl ObserverPose {
    /// 建立位姿
    pub fn new(position: Vec2<f32>, facing: f32) -> Self {
        Self { position, facing }
    }

    /// 將本地向量旋轉到世界座標方向
    pub fn transform_direction(&self, local: Vec2<f32>) -> Vec2<f32> {
        let (sin, cos) = self.facing.sin_cos();
        Vec2::new(local.x * cos - local.y * sin, local.x * sin + local.y * cos)
    }
}

pub struct VisionGeometry;

impl VisionGeometry {
    /// 角度（度）轉成單位方向向量
    pub fn direction_from_deg(angle_deg: f32) -> Vec2<f32> {
        let radian = angle_deg.to_radians();
        Vec2::new(radian.cos(), radian.sin())
    }

    /// 兩向量間的有號角度（弧度，逆時針為正）
    pub fn signed_angle(from: Vec2<f32>, to: Vec2<f32>) -> f32 {
        let cross = from.x * to.y - from.y * to.x;
        let dot = from.dot(to);
        cross.atan2(dot)
    }

    /// 有號角度的符號；零角度視為正，跨 0°/360° 接縫時符號依然穩定
    pub fn angle_sign(from: Vec2<f32>, to: Vec2<f32>) -> f32 {
        if Self::signed_angle(from, to) >= 0.0 {
            1.0
        } else {
            -1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_direction_from_deg() {
        let east = VisionGeometry::direction_from_deg(0.0);
        assert!((east.x - 1.0).abs() < 1e-6 && east.y.abs() < 1e-6);

        let north = VisionGeometry::direction_from_deg(90.0);
        assert!(north.x.abs() < 1e-6 && (north.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_signed_angle() {
        let east = Vec2::new(1.0, 0.0);
        let north = Vec2::new(0.0, 1.0);
        let south = Vec2::new(0.0, -1.0);

        assert!((VisionGeometry::signed_angle(east, north) - FRAC_PI_2).abs() < 1e-6);
        assert!((VisionGeometry::signed_angle(east, south) + FRAC_PI_2).abs() < 1e-6);
        assert!((VisionGeometry::signed_angle(east, -east).abs() - PI).abs() < 1e-6);

        assert_eq!(VisionGeometry::angle_sign(east, north), 1.0);
        assert_eq!(VisionGeometry::angle_sign(east, south), -1.0);
        assert_eq!(VisionGeometry::angle_sign(east, east), 1.0, "零角度視為正");
    }

    #[test]
    fn test_transform_direction() {
        // 朝向 +Y 的觀察者，本地 +X 會轉到世界 +Y
        let pose = ObserverPose::new(Vec2::zero(), FRAC_PI_2);
        let world = pose.transform_direction(Vec2::unit_x());
        assert!(world.x.abs() < 1e-6 && (world.y - 1.0).abs() < 1e-6);
    }
}
