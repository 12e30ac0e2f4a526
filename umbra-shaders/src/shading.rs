//! This pass shades geometry lit by a single shadow-casting point light; the
//! vertex stage is supplied by the host, since it's the host that owns the
//! camera and model matrices.

use umbra_gpu::prelude::*;

#[spirv(fragment)]
pub fn fs(
    // Params
    #[spirv(descriptor_set = 0, binding = 0, uniform)] light: &Light,
    #[spirv(descriptor_set = 1, binding = 0)] atlas_tex: Tex,
    #[spirv(descriptor_set = 1, binding = 1)] atlas_sampler: &Sampler,

    // Inputs
    point: Vec3,

    // Outputs
    frag_color: &mut Vec4,
) {
    let atlas = ShadowAtlas::new(atlas_tex, atlas_sampler);

    let occlusion = atlas.occlusion(point, light.center(), light.bias());
    let brightness = light.strength() * (1.0 - occlusion);

    *frag_color = Vec3::splat(brightness).extend(1.0);
}
