//! Proximity lines between particles.

use glam::Vec2;

/// A line between particles `a` and `b` (indices, `a < b`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub opacity: f32,
}

/// When two particles are close enough to be joined, and how many lines to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionRule {
    /// Pairs must be strictly closer than this many pixels.
    pub max_distance: f32,
    /// Opacity of a zero-length connection; falls off linearly with distance.
    pub max_opacity: f32,
    /// Hard cap on lines per pass.
    pub cap: usize,
}

/// Rebuild `out` from pixel positions.
///
/// Pairs are visited in nested index order (i, then j > i) and the pass
/// stops at the cap, so earlier pairs win over closer later ones.
pub fn find_connections(points: &[Vec2], rule: &ConnectionRule, out: &mut Vec<Connection>) {
    out.clear();
    if rule.cap == 0 || rule.max_distance <= 0.0 {
        return;
    }
    for (i, pa) in points.iter().enumerate() {
        for (j, pb) in points.iter().enumerate().skip(i + 1) {
            let d = pa.distance(*pb);
            if d < rule.max_distance {
                out.push(Connection {
                    a: i,
                    b: j,
                    opacity: (1.0 - d / rule.max_distance) * rule.max_opacity,
                });
                if out.len() >= rule.cap {
                    return;
                }
            }
        }
    }
}
