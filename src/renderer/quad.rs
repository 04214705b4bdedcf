//! Instance record for batched quad uploads

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use super::Sprite;

/// One textured quad: column-major model matrix plus sprite id
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct QuadInstance {
    pub model: [[f32; 4]; 4],
    pub sprite: u32,
    pub _pad: [u32; 3],
}

impl QuadInstance {
    pub fn new(sprite: Sprite, model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            sprite: sprite as u32,
            _pad: [0; 3],
        }
    }

    pub fn model(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.model)
    }

    pub fn sprite(&self) -> Option<Sprite> {
        Sprite::from_index(self.sprite)
    }
}

/// Raw bytes of an instance list, ready for a vertex/storage buffer
pub fn instance_bytes(instances: &[QuadInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_instance_roundtrip_fields() {
        let model = Mat4::from_translation(Vec3::new(3.0, 4.0, 0.0));
        let instance = QuadInstance::new(Sprite::Barrier, model);
        assert_eq!(instance.model(), model);
        assert_eq!(instance.sprite(), Some(Sprite::Barrier));
    }

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<QuadInstance>(), 80);
        let instances = [QuadInstance::new(Sprite::Body, Mat4::IDENTITY); 3];
        assert_eq!(instance_bytes(&instances).len(), 240);
    }
}
