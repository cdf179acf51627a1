/// 靜態世界
///
/// SpatialQuery 的參考實作：對一組靜態碰撞體做暴力射線檢測，
/// 給測試與展示用，正式環境換成外部物理層
use vek::Vec2;

use crate::spatial::{Collider, ColliderShape, LayerMask, RayHit, SpatialQuery, MAX_RAY_HITS};

/// 靜態碰撞體世界
#[derive(Debug, Default)]
pub struct StaticWorld {
    colliders: Vec<Collider>,
}

impl StaticWorld {
    /// 建立空世界
    pub fn new() -> Self {
        Self {
            colliders: Vec::new(),
        }
    }

    /// 加入碰撞體
    pub fn add_collider(&mut self, collider: Collider) {
        self.colliders.push(collider);
    }

    /// 碰撞體數量
    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    /// 射線與單一碰撞體的最近相交距離
    fn ray_collider_intersection(
        origin: Vec2<f32>,
        direction: Vec2<f32>,
        collider: &Collider,
    ) -> Option<f32> {
        match &collider.shape {
            ColliderShape::Circle { radius } => {
                Self::ray_circle_intersection(origin, direction, collider.position, *radius)
            }
            ColliderShape::Box { width, height } => {
                Self::ray_box_intersection(origin, direction, collider.position, *width, *height)
            }
            ColliderShape::Segment { a, b } => Self::ray_segment_intersection(
                origin,
                direction,
                collider.position + *a,
                collider.position + *b,
            ),
        }
    }

    /// 射線與圓形相交檢測
    fn ray_circle_intersection(
        origin: Vec2<f32>,
        direction: Vec2<f32>,
        center: Vec2<f32>,
        radius: f32,
    ) -> Option<f32> {
        let to_center = center - origin;
        let proj_length = to_center.dot(direction);

        // 射線背向圓心
        if proj_length < 0.0 {
            return None;
        }

        let closest_point = origin + direction * proj_length;
        let distance_to_center = center.distance(closest_point);

        // 射線與圓不相交
        if distance_to_center > radius {
            return None;
        }

        let half_chord = (radius * radius - distance_to_center * distance_to_center).sqrt();
        let near = proj_length - half_chord;
        if near >= 0.0 {
            return Some(near);
        }

        // 起點在圓內，取離開圓的交點
        let far = proj_length + half_chord;
        if far >= 0.0 {
            Some(far)
        } else {
            None
        }
    }

    /// 射線與線段相交檢測
    fn ray_segment_intersection(
        ray_origin: Vec2<f32>,
        ray_direction: Vec2<f32>,
        line_start: Vec2<f32>,
        line_end: Vec2<f32>,
    ) -> Option<f32> {
        let line_direction = line_end - line_start;
        let cross = ray_direction.x * line_direction.y - ray_direction.y * line_direction.x;

        if cross.abs() < 1e-6 {
            return None; // 平行
        }

        let to_line_start = line_start - ray_origin;
        let t = (to_line_start.x * line_direction.y - to_line_start.y * line_direction.x) / cross;
        let u = (to_line_start.x * ray_direction.y - to_line_start.y * ray_direction.x) / cross;

        if t >= 0.0 && u >= 0.0 && u <= 1.0 {
            Some(t)
        } else {
            None
        }
    }

    /// 射線與軸對齊矩形相交檢測：對四條邊取最近交點
    fn ray_box_intersection(
        origin: Vec2<f32>,
        direction: Vec2<f32>,
        center: Vec2<f32>,
        width: f32,
        height: f32,
    ) -> Option<f32> {
        let half_w = width * 0.5;
        let half_h = height * 0.5;
        let corners = [
            center + Vec2::new(-half_w, -half_h),
            center + Vec2::new(half_w, -half_h),
            center + Vec2::new(half_w, half_h),
            center + Vec2::new(-half_w, half_h),
        ];

        let mut nearest: Option<f32> = None;
        for i in 0..corners.len() {
            let a = corners[i];
            let b = corners[(i + 1) % corners.len()];
            if let Some(t) = Self::ray_segment_intersection(origin, direction, a, b) {
                nearest = Some(match nearest {
                    Some(current) => current.min(t),
                    None => t,
                });
            }
        }
        nearest
    }
}

impl SpatialQuery for StaticWorld {
    fn cast_ray(
        &self,
        origin: Vec2<f32>,
        direction: Vec2<f32>,
        max_distance: f32,
        mask: LayerMask,
        hits: &mut Vec<RayHit>,
    ) {
        hits.clear();
        for collider in &self.colliders {
            if hits.len() >= MAX_RAY_HITS {
                break;
            }
            if collider.layer & mask == 0 {
                continue;
            }
            if let Some(distance) = Self::ray_collider_intersection(origin, direction, collider) {
                if distance <= max_distance {
                    hits.push(RayHit {
                        distance,
                        collider_id: collider.id,
                    });
                }
            }
        }
    }
}
