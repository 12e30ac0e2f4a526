use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4, Vec4Swizzles};

#[repr(C)]
#[derive(Clone, Copy, Default, Pod, Zeroable)]
#[cfg_attr(not(target_arch = "spirv"), derive(Debug))]
pub struct Light {
    /// x - position x
    /// y - position y
    /// z - position z
    /// w - strength
    pub d0: Vec4,

    /// x - shadow-test bias
    /// y - unused
    /// z - unused
    /// w - unused
    pub d1: Vec4,
}

impl Light {
    pub fn point(center: Vec3, strength: f32) -> Self {
        Self {
            d0: center.extend(strength),
            d1: Vec4::ZERO,
        }
    }

    pub fn with_bias(mut self, bias: f32) -> Self {
        self.d1.x = bias;
        self
    }

    pub fn center(&self) -> Vec3 {
        self.d0.xyz()
    }

    pub fn strength(&self) -> f32 {
        self.d0.w
    }

    /// Bias applied during the shadow test; see
    /// [`crate::ShadowAtlas::occlusion()`].
    pub fn bias(&self) -> f32 {
        self.d1.x
    }
}
