use bytemuck::{Pod, Zeroable};

use crate::field::ParticleField;

/// Per-particle draw data read by the JavaScript renderer.
/// Must match the TypeScript protocol: 4 floats = 16 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    /// X position in viewport pixels.
    pub x: f32,
    /// Y position in viewport pixels.
    pub y: f32,
    /// Diameter in pixels.
    pub size: f32,
    /// Pointer boost (1.0 at rest, up to 2.0).
    pub scale: f32,
}

impl ParticleInstance {
    pub const FLOATS: usize = 4;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Per-connection line data: endpoints in viewport pixels plus opacity.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ConnectionInstance {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub opacity: f32,
}

impl ConnectionInstance {
    pub const FLOATS: usize = 5;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Flat buffers rebuilt every frame from the particle field.
pub struct FrameBuffers {
    pub particles: Vec<ParticleInstance>,
    pub connections: Vec<ConnectionInstance>,
}

impl FrameBuffers {
    pub fn with_capacity(max_particles: usize, max_connections: usize) -> Self {
        Self {
            particles: Vec::with_capacity(max_particles),
            connections: Vec::with_capacity(max_connections),
        }
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.connections.clear();
    }

    /// Rewrite both buffers from the field's current state.
    pub fn rebuild(&mut self, field: &ParticleField) {
        self.clear();
        let points = field.pixel_positions();
        for (i, (p, at)) in field.particles().iter().zip(&points).enumerate() {
            self.particles.push(ParticleInstance {
                x: at.x,
                y: at.y,
                size: p.size,
                scale: field.scale(i),
            });
        }
        // Lines follow the particles between rebuilds of the connection list
        for c in field.connections() {
            if let (Some(a), Some(b)) = (points.get(c.a), points.get(c.b)) {
                self.connections.push(ConnectionInstance {
                    x1: a.x,
                    y1: a.y,
                    x2: b.x,
                    y2: b.y,
                    opacity: c.opacity,
                });
            }
        }
    }

    pub fn particle_count(&self) -> u32 {
        self.particles.len() as u32
    }

    pub fn connection_count(&self) -> u32 {
        self.connections.len() as u32
    }

    /// Raw pointer to particle data for direct memory reads from JS.
    pub fn particles_ptr(&self) -> *const f32 {
        self.particles.as_ptr() as *const f32
    }

    pub fn connections_ptr(&self) -> *const f32 {
        self.connections.as_ptr() as *const f32
    }

    /// Particle data as raw floats.
    pub fn particle_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.particles)
    }

    pub fn connection_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.connections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldConfig;

    #[test]
    fn instance_strides() {
        assert_eq!(std::mem::size_of::<ParticleInstance>(), ParticleInstance::STRIDE_BYTES);
        assert_eq!(std::mem::size_of::<ConnectionInstance>(), ConnectionInstance::STRIDE_BYTES);
    }

    #[test]
    fn rebuild_mirrors_the_field() {
        let mut field = ParticleField::new(FieldConfig::default());
        field.initialize(1280.0, 800.0);
        field.recompute_connections();

        let mut buffers = FrameBuffers::with_capacity(200, 50);
        buffers.rebuild(&field);

        assert_eq!(buffers.particle_count(), 200);
        assert_eq!(buffers.connection_count() as usize, field.connections().len());
        assert_eq!(buffers.particle_floats().len(), 200 * ParticleInstance::FLOATS);
        assert_eq!(buffers.particles[0].size, field.particles()[0].size);
    }

    #[test]
    fn rebuild_after_teardown_is_empty() {
        let mut field = ParticleField::new(FieldConfig::default());
        field.initialize(1280.0, 800.0);
        let mut buffers = FrameBuffers::with_capacity(200, 50);
        buffers.rebuild(&field);
        field.teardown();
        buffers.rebuild(&field);
        assert_eq!(buffers.particle_count(), 0);
        assert_eq!(buffers.connection_count(), 0);
    }
}
