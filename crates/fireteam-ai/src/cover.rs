//! Nearest-cover lookup.

use glam::Vec3;

/// Nearest candidate strictly closer than `radius`, or `None`.
pub fn find_cover(from: Vec3, candidates: &[Vec3], radius: f32) -> Option<Vec3> {
    let mut best: Option<(Vec3, f32)> = None;
    for &candidate in candidates {
        let distance = from.distance(candidate);
        if distance >= radius {
            continue;
        }
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((candidate, distance));
        }
    }
    best.map(|(pos, _)| pos)
}
