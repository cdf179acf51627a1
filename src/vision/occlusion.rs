/// 遮擋裁剪
///
/// 對取樣環的每筆取樣投射環境射線，把取樣縮短到最近的遮擋距離
use ordered_float::OrderedFloat;

use crate::spatial::{LayerMask, RayHit, SpatialQuery};
use crate::vision::geometry::ObserverPose;
use crate::vision::sample_ring::SampleRing;

/// 將取樣環裁剪到最近的環境命中
///
/// 沒有命中的取樣維持原長度（那是「射線到達最大長度」的正常情況），
/// hit_env 只在真的撞到環境時設為 true；hits 是重複使用的命中暫存
pub fn clip_samples<Q: SpatialQuery>(
    ring: &mut SampleRing,
    pose: &ObserverPose,
    env: &Q,
    env_mask: LayerMask,
    hits: &mut Vec<RayHit>,
) {
    for i in 0..ring.points.len() {
        let local = ring.points[i];
        let length = local.magnitude();
        if length <= f32::EPSILON {
            continue; // 生成器不會產生零長度取樣，這裡只防除以零
        }

        let world_direction = pose.transform_direction(local / length);
        env.cast_ray(pose.position, world_direction, length, env_mask, hits);

        if let Some(nearest) = hits.iter().min_by_key(|h| OrderedFloat(h.distance)) {
            ring.points[i] = local / length * nearest.distance;
            ring.hit_env[i] = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VisionConfig;
    use crate::spatial::{Collider, ColliderShape, StaticWorld, LAYER_ENV, MAX_RAY_HITS};
    use vek::Vec2;

    fn wall_world() -> StaticWorld {
        let mut world = StaticWorld::new();
        // 擋在正前方的直牆
        world.add_collider(Collider {
            id: 1,
            position: Vec2::new(4.0, 0.0),
            shape: ColliderShape::Segment {
                a: Vec2::new(0.0, -6.0),
                b: Vec2::new(0.0, 6.0),
            },
            layer: LAYER_ENV,
        });
        world
    }

    #[test]
    fn test_clipping_never_lengthens() {
        let config = VisionConfig::default();
        let world = wall_world();
        let pose = ObserverPose::new(Vec2::zero(), 0.0);

        let mut reference = SampleRing::with_config(&config);
        reference.generate(&config);

        let mut ring = SampleRing::with_config(&config);
        ring.generate(&config);

        let mut hits = Vec::with_capacity(MAX_RAY_HITS);
        clip_samples(&mut ring, &pose, &world, config.env_mask, &mut hits);

        for i in 0..ring.len() {
            let original = reference.points[i].magnitude();
            let clipped = ring.points[i].magnitude();
            assert!(
                clipped <= original + 1e-4,
                "裁剪後長度不能變長：第 {} 筆 {} > {}",
                i,
                clipped,
                original
            );
            if ring.hit_env[i] {
                assert!(clipped < original - 1e-4, "命中的取樣必須被縮短");
            } else {
                assert_eq!(
                    ring.points[i], reference.points[i],
                    "沒命中的取樣要保持原樣"
                );
            }
        }
        assert!(ring.hit_env.iter().any(|&h| h), "牆前方應該有取樣被裁剪");
        assert!(!ring.hit_env.iter().all(|&h| h), "背面的內圈取樣不該被裁剪");
    }

    #[test]
    fn test_clip_keeps_sample_direction() {
        let config = VisionConfig::default();
        let world = wall_world();
        let pose = ObserverPose::new(Vec2::zero(), 0.0);

        let mut ring = SampleRing::with_config(&config);
        ring.generate(&config);
        let directions: Vec<Vec2<f32>> = ring.points.iter().map(|p| p.normalized()).collect();

        let mut hits = Vec::with_capacity(MAX_RAY_HITS);
        clip_samples(&mut ring, &pose, &world, config.env_mask, &mut hits);

        for (i, point) in ring.points.iter().enumerate() {
            let direction = point.normalized();
            assert!(
                direction.dot(directions[i]) > 1.0 - 1e-4,
                "裁剪只縮短長度，不改方向"
            );
        }
    }

    #[test]
    fn test_nearest_hit_wins() {
        let config = VisionConfig::default();
        let pose = ObserverPose::new(Vec2::zero(), 0.0);

        // 同一條射線上兩個遮擋物，取距離較近的
        let mut world = StaticWorld::new();
        world.add_collider(Collider {
            id: 1,
            position: Vec2::new(6.0, 0.0),
            shape: ColliderShape::Circle { radius: 0.5 },
            layer: LAYER_ENV,
        });
        world.add_collider(Collider {
            id: 2,
            position: Vec2::new(3.0, 0.0),
            shape: ColliderShape::Circle { radius: 0.5 },
            layer: LAYER_ENV,
        });

        let mut ring = SampleRing::with_config(&config);
        ring.generate(&config);
        let mut hits = Vec::with_capacity(MAX_RAY_HITS);
        clip_samples(&mut ring, &pose, &world, config.env_mask, &mut hits);

        // 間隔 10 度、半角 30：index 3 是 0 度（正前方）
        let forward = ring.points[3];
        assert!(ring.hit_env[3]);
        assert!(
            (forward.magnitude() - 2.5).abs() < 1e-3,
            "要裁剪到較近遮擋物的表面（距離 2.5），實際 {}",
            forward.magnitude()
        );
    }
}
