use glam::{vec2, Vec2, Vec3};
#[cfg(target_arch = "spirv")]
use spirv_std::num_traits::Float;
use spirv_std::{Image, Sampler};

use crate::{CubeFace, F32Ext};

/// Shadow atlas of a single point light: the six cube faces packed side by
/// side into one horizontal strip, red channel storing the normalized
/// distance from the light to the nearest occluder.
pub struct ShadowAtlas<'a> {
    tex: &'a Image!(2D, type=f32, sampled),
    sampler: &'a Sampler,
}

impl<'a> ShadowAtlas<'a> {
    /// Number of faces packed into the strip.
    pub const FACES: u32 = 6;

    /// Stored distances are normalized by this far plane; it must match the
    /// projection the shadow pass rendered the atlas with.
    pub const FAR_PLANE: f32 = 250.0;

    /// Seam padding: local uvs get squeezed inward by 1/256 per side, so
    /// that filtering near a face boundary can't pick up texels belonging to
    /// the neighboring face.
    pub const PADDING_SCALE: f32 = 0.9921875;
    pub const PADDING_OFFSET: f32 = 0.00390625;

    pub fn new(
        tex: &'a Image!(2D, type=f32, sampled),
        sampler: &'a Sampler,
    ) -> Self {
        Self { tex, sampler }
    }

    /// Returns the atlas uv given direction points at.
    ///
    /// `dir` doesn't have to be normalized, but it must be non-zero.
    pub fn uv(dir: Vec3) -> Vec2 {
        let face = CubeFace::of(dir);

        let uv =
            face.project(dir) * Self::PADDING_SCALE + Self::PADDING_OFFSET;

        vec2((uv.x + face.index() as f32) / (Self::FACES as f32), uv.y)
    }

    /// Returns the occluder distance stored for given direction, in world
    /// units.
    pub fn sample(&self, dir: Vec3) -> f32 {
        let uv = Self::uv(dir);

        self.tex.sample_by_lod(*self.sampler, uv, 0.0).x * Self::FAR_PLANE
    }

    /// Returns how occluded `point` is with respect to a light at
    /// `light_pos`: 0.0 means fully lit, 1.0 means fully in shadow.
    ///
    /// `point` must not be equal to `light_pos`.
    pub fn occlusion(&self, point: Vec3, light_pos: Vec3, bias: f32) -> f32 {
        let to_point = point - light_pos;
        let stored = self.sample(to_point.normalize());

        shadow_occlusion(stored, to_point.length(), bias)
    }
}

/// Compares the occluder distance stored in the atlas against the actual
/// distance between a point and the light.
///
/// `bias` shrinks the difference before clamping, softening self-shadowing
/// at grazing angles; 0.0 leaves the comparison exact.
pub fn shadow_occlusion(stored: f32, actual: f32, bias: f32) -> f32 {
    ((stored - actual).abs() - bias).saturate()
}
