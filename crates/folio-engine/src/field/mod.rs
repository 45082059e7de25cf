//! Particle field animator: the mouse-reactive background behind the hero.
//!
//! Purely visual. Particles are generated once per viewport size, drawn at
//! positions derived from elapsed time, and joined by proximity lines that
//! are rebuilt on a fixed interval.

mod connection;
mod particle;
mod rng;

pub use connection::{find_connections, Connection, ConnectionRule};
pub use particle::{influence, Particle};
pub use rng::Rng;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::types::ParticleId;
use crate::core::time::IntervalTimer;
use crate::error::{FolioError, Result};

/// Tunables for the field. Defaults reproduce the live page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Viewport widths below this get `small_count` particles.
    pub breakpoint: f32,
    pub small_count: usize,
    pub large_count: usize,
    /// Particle diameter range in pixels, [lo, hi).
    pub size_range: (f32, f32),
    /// Wander loop duration range in seconds, [lo, hi).
    pub duration_range: (f32, f32),
    /// Maximum drift per axis, in percent of the viewport per second.
    pub max_drift: f32,
    /// Pointer influence reaches zero at this many pixels.
    pub influence_radius: f32,
    /// Pairs closer than this many pixels are connected.
    pub connection_distance: f32,
    /// Opacity of the shortest possible connection.
    pub connection_opacity: f32,
    pub max_connections: usize,
    /// Seconds between connection rebuilds.
    pub connection_interval: f32,
    pub seed: u64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            breakpoint: 768.0,
            small_count: 100,
            large_count: 200,
            size_range: (4.0, 12.0),
            duration_range: (15.0, 25.0),
            max_drift: 0.2,
            influence_radius: 200.0,
            connection_distance: 150.0,
            connection_opacity: 0.5,
            max_connections: 50,
            connection_interval: 0.15,
            seed: 42,
        }
    }
}

impl FieldConfig {
    /// Particle count for a viewport `width` pixels wide.
    pub fn particle_count(&self, width: f32) -> usize {
        if width < self.breakpoint {
            self.small_count
        } else {
            self.large_count
        }
    }

    /// Reject tunables the field cannot run with.
    pub fn validate(&self) -> Result<()> {
        let (size_lo, size_hi) = self.size_range;
        let (dur_lo, dur_hi) = self.duration_range;
        let checks = [
            (self.breakpoint > 0.0, "breakpoint must be positive"),
            (size_lo >= 0.0 && size_lo <= size_hi, "size_range must be 0 <= lo <= hi"),
            (dur_lo > 0.0 && dur_lo <= dur_hi, "duration_range must be 0 < lo <= hi"),
            (self.max_drift >= 0.0, "max_drift must not be negative"),
            (self.influence_radius > 0.0, "influence_radius must be positive"),
            (self.connection_distance > 0.0, "connection_distance must be positive"),
            (
                (0.0..=1.0).contains(&self.connection_opacity),
                "connection_opacity must be within [0, 1]",
            ),
            (self.connection_interval > 0.0, "connection_interval must be positive"),
        ];
        // NaN fails every comparison above
        match checks.iter().find(|(ok, _)| !ok) {
            Some((_, reason)) => Err(FolioError::InvalidConfig(format!("field: {reason}"))),
            None => Ok(()),
        }
    }

    fn connection_rule(&self) -> ConnectionRule {
        ConnectionRule {
            max_distance: self.connection_distance,
            max_opacity: self.connection_opacity,
            cap: self.max_connections,
        }
    }
}

pub struct ParticleField {
    config: FieldConfig,
    rng: Rng,
    particles: Vec<Particle>,
    viewport: Vec2,
    pointer: Option<Vec2>,
    tracking_pointer: bool,
    elapsed: f32,
    connections: Vec<Connection>,
    connection_timer: IntervalTimer,
}

impl ParticleField {
    pub fn new(config: FieldConfig) -> Self {
        let rng = Rng::new(config.seed);
        let connection_timer = IntervalTimer::new(config.connection_interval);
        let connections = Vec::with_capacity(config.max_connections);
        Self {
            config,
            rng,
            particles: Vec::new(),
            viewport: Vec2::ZERO,
            pointer: None,
            tracking_pointer: true,
            elapsed: 0.0,
            connections,
            connection_timer,
        }
    }

    /// Generate a fresh particle set for the viewport, replacing any previous one.
    /// Called on mount and on every resize.
    pub fn initialize(&mut self, width: f32, height: f32) {
        let count = self.config.particle_count(width);
        let (size_lo, size_hi) = self.config.size_range;
        let (dur_lo, dur_hi) = self.config.duration_range;
        let drift = self.config.max_drift;

        self.viewport = Vec2::new(width, height);
        self.particles.clear();
        self.particles.reserve(count);
        for i in 0..count {
            let position = Vec2::new(self.rng.range(0.0, 100.0), self.rng.range(0.0, 100.0));
            let size = self.rng.range(size_lo, size_hi);
            let duration = self.rng.range(dur_lo, dur_hi);
            let velocity = Vec2::new(self.rng.range(-drift, drift), self.rng.range(-drift, drift));
            let phase = self.rng.range(0.0, duration);
            self.particles.push(Particle {
                id: ParticleId(i as u32),
                position,
                size,
                duration,
                velocity,
                phase,
            });
        }
        self.connections.clear();
        self.tracking_pointer = true;
        self.connection_timer.restart();
        log::debug!("field: {} particles for {}x{}", count, width, height);
    }

    /// Record the latest pointer position (absolute pixels).
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        if self.tracking_pointer {
            self.pointer = Some(Vec2::new(x, y));
        }
    }

    /// Advance animation time; rebuilds connections when the interval fires.
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
        if self.connection_timer.tick(dt) && !self.particles.is_empty() {
            self.recompute_connections();
        }
    }

    /// Rebuild the connection list from current positions.
    pub fn recompute_connections(&mut self) -> &[Connection] {
        let points = self.pixel_positions();
        find_connections(&points, &self.config.connection_rule(), &mut self.connections);
        &self.connections
    }

    /// Current screen positions of all particles, in index order.
    pub fn pixel_positions(&self) -> Vec<Vec2> {
        self.particles
            .iter()
            .map(|p| p.pixel_position(self.elapsed, self.viewport))
            .collect()
    }

    /// Pointer influence on particle `index`, in [0, 1].
    pub fn influence(&self, index: usize) -> f32 {
        match (self.pointer, self.particles.get(index)) {
            (Some(pointer), Some(p)) => influence(
                p.pixel_position(self.elapsed, self.viewport),
                pointer,
                self.config.influence_radius,
            ),
            _ => 0.0,
        }
    }

    /// Draw scale of particle `index`: 1 at rest, up to 2 under the pointer.
    pub fn scale(&self, index: usize) -> f32 {
        1.0 + self.influence(index)
    }

    /// Drop particles and stop timers and pointer tracking.
    /// The field stays empty until the next `initialize`.
    pub fn teardown(&mut self) {
        self.viewport = Vec2::ZERO;
        self.particles.clear();
        self.connections.clear();
        self.pointer = None;
        self.tracking_pointer = false;
        self.connection_timer.stop();
    }

    /// Replace the tunables. A live field is regenerated with them.
    pub fn set_config(&mut self, config: FieldConfig) {
        self.connection_timer = IntervalTimer::new(config.connection_interval);
        self.rng = Rng::new(config.seed);
        self.config = config;
        if self.viewport != Vec2::ZERO {
            self.initialize(self.viewport.x, self.viewport.y);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn is_tracking_pointer(&self) -> bool {
        self.tracking_pointer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field() -> ParticleField {
        ParticleField::new(FieldConfig::default())
    }

    #[test]
    fn count_follows_breakpoint() {
        let mut f = field();
        f.initialize(767.0, 900.0);
        assert_eq!(f.particles().len(), 100);
        f.initialize(768.0, 900.0);
        assert_eq!(f.particles().len(), 200);
    }

    #[test]
    fn resize_replaces_the_whole_set() {
        let mut f = field();
        f.initialize(1280.0, 800.0);
        let before = f.particles()[0].clone();
        f.initialize(1280.0, 800.0);
        assert_eq!(f.particles().len(), 200);
        assert_ne!(f.particles()[0], before);
        assert_eq!(f.particles()[0].id, ParticleId(0));
    }

    #[test]
    fn same_seed_same_field() {
        let mut a = field();
        let mut b = field();
        a.initialize(1280.0, 800.0);
        b.initialize(1280.0, 800.0);
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn generated_parameters_stay_in_their_ranges() {
        let mut f = field();
        f.initialize(1920.0, 1080.0);
        for p in f.particles() {
            assert!((4.0..12.0).contains(&p.size));
            assert!((15.0..25.0).contains(&p.duration));
            assert!((0.0..p.duration).contains(&p.phase));
            assert!(p.velocity.abs().max_element() <= 0.2);
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert!(FieldConfig::default().validate().is_ok());
    }

    #[test]
    fn unusable_tunables_are_rejected() {
        let bad = [
            FieldConfig { breakpoint: 0.0, ..FieldConfig::default() },
            FieldConfig { size_range: (12.0, 4.0), ..FieldConfig::default() },
            FieldConfig { duration_range: (0.0, 25.0), ..FieldConfig::default() },
            FieldConfig { connection_interval: -0.15, ..FieldConfig::default() },
            FieldConfig { connection_opacity: 2.0, ..FieldConfig::default() },
            FieldConfig { influence_radius: f32::NAN, ..FieldConfig::default() },
        ];
        for config in bad {
            assert!(
                matches!(config.validate(), Err(FolioError::InvalidConfig(_))),
                "{:?}",
                config
            );
        }
    }

    #[test]
    fn pointer_before_init_has_no_effect() {
        let mut f = field();
        f.on_pointer_move(10.0, 10.0);
        assert_eq!(f.influence(0), 0.0);
        assert_eq!(f.scale(0), 1.0);
        f.tick(1.0);
        assert!(f.connections().is_empty());
    }

    #[test]
    fn pointer_on_a_particle_doubles_its_scale() {
        let mut f = field();
        f.initialize(1280.0, 800.0);
        let at = f.pixel_positions()[3];
        f.on_pointer_move(at.x, at.y);
        assert!((f.scale(3) - 2.0).abs() < 1e-4);
    }

    #[test]
    fn far_pointer_has_no_influence() {
        let mut f = field();
        f.initialize(1280.0, 800.0);
        f.on_pointer_move(-10_000.0, -10_000.0);
        for i in 0..f.particles().len() {
            assert_eq!(f.influence(i), 0.0);
        }
    }

    #[test]
    fn interval_rebuilds_connections() {
        let config = FieldConfig {
            connection_distance: 10_000.0,
            ..FieldConfig::default()
        };
        let mut f = ParticleField::new(config);
        f.initialize(1280.0, 800.0);
        f.tick(0.1);
        assert!(f.connections().is_empty());
        f.tick(0.1);
        assert_eq!(f.connections().len(), 50);
    }

    #[test]
    fn teardown_stops_everything() {
        let mut f = field();
        f.initialize(1280.0, 800.0);
        f.recompute_connections();
        f.teardown();
        assert!(f.particles().is_empty());
        assert!(f.connections().is_empty());
        f.on_pointer_move(1.0, 1.0);
        assert_eq!(f.pointer(), None);
        f.tick(1.0);
        assert!(f.connections().is_empty());
    }

    #[test]
    fn new_config_does_not_revive_a_torn_down_field() {
        let mut f = field();
        f.initialize(1280.0, 800.0);
        f.teardown();
        f.set_config(FieldConfig { large_count: 10, ..FieldConfig::default() });
        assert!(f.particles().is_empty());
        assert!(!f.is_tracking_pointer());
        assert_eq!(f.viewport(), Vec2::ZERO);

        f.initialize(1280.0, 800.0);
        assert_eq!(f.particles().len(), 10);
    }

    proptest! {
        #[test]
        fn particles_lie_within_the_viewport_percentages(
            width in 200.0f32..3000.0,
            height in 200.0f32..2000.0,
            seed in any::<u64>(),
        ) {
            let mut f = ParticleField::new(FieldConfig { seed, ..FieldConfig::default() });
            f.initialize(width, height);
            let expected = if width < 768.0 { 100 } else { 200 };
            prop_assert_eq!(f.particles().len(), expected);
            for p in f.particles() {
                prop_assert!((0.0..100.0).contains(&p.position.x));
                prop_assert!((0.0..100.0).contains(&p.position.y));
            }
        }

        #[test]
        fn connections_respect_cap_and_threshold(
            width in 200.0f32..3000.0,
            height in 200.0f32..2000.0,
            seed in any::<u64>(),
            elapsed in 0.0f32..120.0,
        ) {
            let mut f = ParticleField::new(FieldConfig { seed, ..FieldConfig::default() });
            f.initialize(width, height);
            f.tick(elapsed);
            let connections = f.recompute_connections().to_vec();
            prop_assert!(connections.len() <= 50);
            let points = f.pixel_positions();
            for c in connections {
                prop_assert!(c.a < c.b);
                prop_assert!(points[c.a].distance(points[c.b]) < 150.0);
                prop_assert!(c.opacity >= 0.0 && c.opacity <= 0.5);
            }
        }
    }
}
