/// 扇形三角化
///
/// 把以中心點開頭的頂點列表接成封閉的三角形扇

/// 輸出 n 個 (0, i, (i+1) mod n) 索引三元組
///
/// 模運算讓最後一條邊接回頂點 1；收尾的 (0, n-1, 0) 是零面積三角形，
/// 不做特判，下游的光柵化器需要容忍零面積三角形
pub fn fan_indices(vertex_count: usize, indices: &mut Vec<u32>) {
    indices.clear();
    for i in 0..vertex_count {
        indices.push(0);
        indices.push(i as u32);
        indices.push(((i + 1) % vertex_count) as u32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fan_closure() {
        let n = 7;
        let mut indices = Vec::new();
        fan_indices(n, &mut indices);

        // 正好 n 個三角形
        assert_eq!(indices.len(), n * 3);

        let mut boundary_pairs = Vec::new();
        for triangle in indices.chunks(3) {
            // 每個三元組的第一個索引都是中心點
            assert_eq!(triangle[0], 0);
            boundary_pairs.push((triangle[1], triangle[2]));
        }

        // 每條邊界邊 (i, i+1 mod n) 都恰好出現一次，包含收尾的退化邊
        for i in 0..n as u32 {
            let pair = (i, (i + 1) % n as u32);
            assert_eq!(
                boundary_pairs.iter().filter(|&&p| p == pair).count(),
                1,
                "邊界邊 {:?} 要恰好出現一次",
                pair
            );
        }

        // 最後一個三角形是零面積的 (0, n-1, 0)
        let last = &indices[indices.len() - 3..];
        assert_eq!(last, &[0, n as u32 - 1, 0]);
    }

    #[test]
    fn test_empty_and_single_vertex() {
        let mut indices = Vec::new();
        fan_indices(0, &mut indices);
        assert!(indices.is_empty());

        fan_indices(1, &mut indices);
        assert_eq!(indices, vec![0, 0, 0]);
    }
}
