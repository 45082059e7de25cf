//! Shared memory layout for the renderer.
//! Must stay in sync with TypeScript `protocol.ts`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 8 floats]
//! [Particles: max_particles × 4 floats]
//! [Connections: max_connections × 5 floats]
//! ```
//!
//! Capacities are written once into the header at init.
//! TypeScript reads them from the header to compute offsets dynamically.

use super::instance::{ConnectionInstance, FrameBuffers, ParticleInstance};
use crate::field::FieldConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 8;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_PARTICLES: usize = 2;
pub const HEADER_PARTICLE_COUNT: usize = 3;
pub const HEADER_MAX_CONNECTIONS: usize = 4;
pub const HEADER_CONNECTION_COUNT: usize = 5;
pub const HEADER_VIEWPORT_WIDTH: usize = 6;
pub const HEADER_VIEWPORT_HEIGHT: usize = 7;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_particles: usize,
    pub max_connections: usize,

    /// Size of the particle section in floats.
    pub particle_data_floats: usize,
    /// Size of the connection section in floats.
    pub connection_data_floats: usize,

    /// Offset (in floats) where particle data begins.
    pub particle_data_offset: usize,
    /// Offset (in floats) where connection data begins.
    pub connection_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_particles: usize, max_connections: usize) -> Self {
        let particle_data_floats = max_particles * ParticleInstance::FLOATS;
        let connection_data_floats = max_connections * ConnectionInstance::FLOATS;

        let particle_data_offset = HEADER_FLOATS;
        let connection_data_offset = particle_data_offset + particle_data_floats;

        let buffer_total_floats = connection_data_offset + connection_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_particles,
            max_connections,
            particle_data_floats,
            connection_data_floats,
            particle_data_offset,
            connection_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from the field configuration (largest particle count wins).
    pub fn from_config(config: &FieldConfig) -> Self {
        Self::new(
            config.small_count.max(config.large_count),
            config.max_connections,
        )
    }

    /// Header for the current frame.
    pub fn header(
        &self,
        frame_counter: u32,
        buffers: &FrameBuffers,
        viewport: glam::Vec2,
    ) -> [f32; HEADER_FLOATS] {
        let particles = buffers.particle_count().min(self.max_particles as u32);
        let connections = buffers.connection_count().min(self.max_connections as u32);

        let mut header = [0.0; HEADER_FLOATS];
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header[HEADER_FRAME_COUNTER] = frame_counter as f32;
        header[HEADER_MAX_PARTICLES] = self.max_particles as f32;
        header[HEADER_PARTICLE_COUNT] = particles as f32;
        header[HEADER_MAX_CONNECTIONS] = self.max_connections as f32;
        header[HEADER_CONNECTION_COUNT] = connections as f32;
        header[HEADER_VIEWPORT_WIDTH] = viewport.x;
        header[HEADER_VIEWPORT_HEIGHT] = viewport.y;
        header
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let layout = ProtocolLayout::from_config(&FieldConfig::default());

        assert_eq!(layout.max_particles, 200);
        assert_eq!(layout.max_connections, 50);
        assert_eq!(layout.particle_data_floats, 200 * 4);
        assert_eq!(layout.connection_data_floats, 50 * 5);
        assert_eq!(layout.buffer_total_floats, HEADER_FLOATS + 800 + 250);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn header_reports_counts_and_viewport() {
        let layout = ProtocolLayout::new(10, 5);
        let buffers = FrameBuffers::with_capacity(10, 5);
        let header = layout.header(3, &buffers, glam::Vec2::new(800.0, 600.0));
        assert_eq!(header[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(header[HEADER_FRAME_COUNTER], 3.0);
        assert_eq!(header[HEADER_MAX_PARTICLES], 10.0);
        assert_eq!(header[HEADER_PARTICLE_COUNT], 0.0);
        assert_eq!(header[HEADER_VIEWPORT_WIDTH], 800.0);
        assert_eq!(header[HEADER_VIEWPORT_HEIGHT], 600.0);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(100, 20);

        assert_eq!(layout.particle_data_offset, HEADER_FLOATS);
        assert_eq!(
            layout.connection_data_offset,
            layout.particle_data_offset + layout.particle_data_floats
        );
        assert_eq!(
            layout.buffer_total_floats,
            layout.connection_data_offset + layout.connection_data_floats
        );
    }
}
