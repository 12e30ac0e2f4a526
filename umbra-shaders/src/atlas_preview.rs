//! This pass blits the shadow atlas onto the screen so that its six faces
//! can be eyeballed; the stored distance lands on all three color channels
//! unmodified.

use umbra_gpu::prelude::*;

#[spirv(vertex)]
pub fn vs(
    #[spirv(vertex_index)] vert_idx: i32,
    #[spirv(position)] output: &mut Vec4,
    output_uv: &mut Vec2,
) {
    let uv = vec2(((vert_idx << 1) & 2) as f32, (vert_idx & 2) as f32);
    let pos = 2.0 * uv - Vec2::ONE;

    *output = pos.extend(0.0).extend(1.0);
    *output_uv = uv;
}

#[spirv(fragment)]
pub fn fs(
    #[spirv(descriptor_set = 0, binding = 0)] atlas_tex: Tex,
    #[spirv(descriptor_set = 0, binding = 1)] atlas_sampler: &Sampler,

    // Inputs
    uv: Vec2,

    // Outputs
    frag_color: &mut Vec4,
) {
    let depth = atlas_tex.sample_by_lod(*atlas_sampler, uv, 0.0).x;

    *frag_color = Vec3::splat(depth).extend(1.0);
}
