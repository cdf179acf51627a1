/// 輪廓修補
///
/// 被遮擋與未被遮擋的相鄰取樣之間會出現一條斜跨空間的長邊，
/// 在交界的角平分方向補兩個頂點，把長斜邊換成近垂直的裙邊
use vek::Vec2;

use crate::vision::sample_ring::SampleRing;

/// 走訪裁剪後的取樣環，輸出以中心點開頭的頂點列表，回傳頂點數
///
/// 成對走訪 (i, i+1)，不回繞；每個遮擋狀態切換正好插入兩個頂點，
/// 都落在兩取樣的角平分方向上，長度分別保留兩側取樣的距離
pub fn refine_silhouette(ring: &SampleRing, vertices: &mut Vec<Vec2<f32>>) -> usize {
    vertices.clear();
    vertices.push(Vec2::zero());

    for i in 0..ring.points.len().saturating_sub(1) {
        let position = ring.points[i];
        vertices.push(position);

        if ring.hit_env[i] == ring.hit_env[i + 1] {
            continue;
        }

        let next_position = ring.points[i + 1];
        let extra_direction = ((position + next_position) * 0.5).normalized();
        vertices.push(extra_direction * position.magnitude());
        vertices.push(extra_direction * next_position.magnitude());
    }

    vertices.len()
}
