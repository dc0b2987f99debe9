//! Point-sprite shader and its uniform block.

use bytemuck::{Pod, Zeroable};

/// Instanced quads, one per particle, textured with the soft disc.
///
/// Quads are expanded in view space so sprites shrink with distance.
pub const POINTS_SHADER: &str = r#"
struct Uniforms {
    view: mat4x4<f32>,
    proj: mat4x4<f32>,
    model: mat4x4<f32>,
    color: vec4<f32>,
    sprite_extent: f32,
    alpha_test: f32,
    fade: f32,
    _padding: f32,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

@group(0) @binding(1)
var sprite: texture_2d<f32>;

@group(0) @binding(2)
var sprite_sampler: sampler;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

@vertex
fn vs_main(
    @builtin(vertex_index) vertex_index: u32,
    @location(0) particle_pos: vec3<f32>,
) -> VertexOutput {
    var quad_vertices = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>( 1.0,  1.0),
    );
    let corner = quad_vertices[vertex_index];

    let view_pos = uniforms.view * uniforms.model * vec4<f32>(particle_pos, 1.0);
    let offset = corner * (uniforms.sprite_extent * 0.5);

    var out: VertexOutput;
    out.clip_position = uniforms.proj * vec4<f32>(view_pos.xy + offset, view_pos.z, view_pos.w);
    out.uv = corner * vec2<f32>(0.5, -0.5) + vec2<f32>(0.5, 0.5);
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let texel = textureSample(sprite, sprite_sampler, in.uv);
    let alpha = texel.a * uniforms.color.a * uniforms.fade;
    if alpha < uniforms.alpha_test {
        discard;
    }
    return vec4<f32>(uniforms.color.rgb * texel.rgb, alpha);
}
"#;

/// CPU mirror of the WGSL `Uniforms` block.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    /// RGB plus opacity.
    pub color: [f32; 4],
    /// World-space edge length of a sprite quad.
    pub sprite_extent: f32,
    pub alpha_test: f32,
    /// Sprite alpha multiplier, `1 - overlay opacity`.
    pub fade: f32,
    pub _padding: f32,
}
