/// WGSL shader for the section meshes: one vertex stage, two material stages.
pub const MESH_SHADER: &str = r#"
struct Globals {
    view_proj: mat4x4<f32>,
    view: mat4x4<f32>,
    points_model: mat4x4<f32>,
    light_dir: vec4<f32>,
    light_radiance: vec4<f32>,
    material_color: vec4<f32>,
    points_color: vec4<f32>,
    points_params: vec4<f32>,
    viewport: vec4<f32>,
};

struct MeshUniform {
    model: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> globals: Globals;
@group(0) @binding(1)
var gradient_tex: texture_2d<f32>;
@group(0) @binding(2)
var gradient_sampler: sampler;

@group(1) @binding(0)
var<uniform> mesh: MeshUniform;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_normal: vec3<f32>,
    @location(1) view_normal: vec3<f32>,
};

@vertex
fn vs_mesh(vertex: VertexInput) -> VertexOutput {
    let world_pos = mesh.model * vec4<f32>(vertex.position, 1.0);
    let world_normal = (mesh.model * vec4<f32>(vertex.normal, 0.0)).xyz;

    var out: VertexOutput;
    out.clip_position = globals.view_proj * world_pos;
    out.world_normal = normalize(world_normal);
    out.view_normal = normalize((globals.view * vec4<f32>(world_normal, 0.0)).xyz);
    return out;
}

const PI: f32 = 3.14159265;

@fragment
fn fs_toon(in: VertexOutput) -> @location(0) vec4<f32> {
    let n = normalize(in.world_normal);
    let ndl = dot(n, globals.light_dir.xyz);
    // The ramp quantizes the half-Lambert term into flat bands.
    let ramp = textureSample(gradient_tex, gradient_sampler, vec2<f32>(ndl * 0.5 + 0.5, 0.5)).r;
    let irradiance = globals.light_radiance.rgb * ramp;
    return vec4<f32>(globals.material_color.rgb * irradiance / PI, 1.0);
}

@fragment
fn fs_normal(in: VertexOutput) -> @location(0) vec4<f32> {
    return vec4<f32>(normalize(in.view_normal) * 0.5 + 0.5, 1.0);
}
"#;

/// WGSL shader for the particle field: instanced screen-facing quads.
pub const POINTS_SHADER: &str = r#"
struct Globals {
    view_proj: mat4x4<f32>,
    view: mat4x4<f32>,
    points_model: mat4x4<f32>,
    light_dir: vec4<f32>,
    light_radiance: vec4<f32>,
    material_color: vec4<f32>,
    points_color: vec4<f32>,
    // x: size, y: 1 when size shrinks with depth
    points_params: vec4<f32>,
    // xy: logical size, zw: render target size in pixels
    viewport: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> globals: Globals;

struct PointsOutput {
    @builtin(position) clip_position: vec4<f32>,
};

@vertex
fn vs_points(@builtin(vertex_index) vi: u32, @location(0) position: vec3<f32>) -> PointsOutput {
    var corners = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>( 1.0,  1.0),
        vec2<f32>(-1.0, -1.0),
        vec2<f32>( 1.0,  1.0),
        vec2<f32>(-1.0,  1.0),
    );

    var clip = globals.view_proj * globals.points_model * vec4<f32>(position, 1.0);
    let size = globals.points_params.x;
    // Sprite height in NDC units.
    var extent = 2.0 * size / globals.viewport.y;
    if (globals.points_params.y > 0.5) {
        extent = size / max(clip.w, 0.0001);
    }
    extent = max(extent, 2.0 / globals.viewport.w);

    let corner = corners[vi] * 0.5 * extent;
    let aspect = globals.viewport.x / globals.viewport.y;
    clip.x += corner.x / aspect * clip.w;
    clip.y += corner.y * clip.w;

    var out: PointsOutput;
    out.clip_position = clip;
    return out;
}

@fragment
fn fs_points(in: PointsOutput) -> @location(0) vec4<f32> {
    return vec4<f32>(globals.points_color.rgb, 1.0);
}
"#;

/// WGSL shader that scales the offscreen scene image onto the surface.
pub const BLIT_SHADER: &str = r#"
@group(0) @binding(0)
var scene_tex: texture_2d<f32>;
@group(0) @binding(1)
var scene_sampler: sampler;

struct BlitOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

// One triangle covering the whole target.
@vertex
fn vs_blit(@builtin(vertex_index) vi: u32) -> BlitOutput {
    let uv = vec2<f32>(f32((vi << 1u) & 2u), f32(vi & 2u));
    var out: BlitOutput;
    out.clip_position = vec4<f32>(uv.x * 2.0 - 1.0, 1.0 - uv.y * 2.0, 0.0, 1.0);
    out.uv = uv;
    return out;
}

@fragment
fn fs_blit(in: BlitOutput) -> @location(0) vec4<f32> {
    return textureSample(scene_tex, scene_sampler, in.uv);
}
"#;
