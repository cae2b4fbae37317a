use crate::shaders;
use crate::texture::GradientMap;
use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use scrollfolio_input::Viewport;
use scrollfolio_scene::{MaterialMode, MeshData, Scene};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    points_model: [[f32; 4]; 4],
    light_dir: [f32; 4],
    light_radiance: [f32; 4],
    material_color: [f32; 4],
    points_color: [f32; 4],
    points_params: [f32; 4],
    viewport: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct MeshUniform {
    model: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Vertex {
    position: [f32; 3],
    normal: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct PointInstance {
    position: [f32; 3],
}

/// Per-section GPU resources.
struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Offscreen color and depth buffers the scene is drawn into, sized by the
/// capped pixel ratio rather than the window.
struct SceneTarget {
    color: wgpu::TextureView,
    depth: wgpu::TextureView,
    blit_bind_group: wgpu::BindGroup,
    size: (u32, u32),
}

fn vec4(v: Vec3, w: f32) -> [f32; 4] {
    [v.x, v.y, v.z, w]
}

fn rgb4(rgb: [f32; 3]) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], 1.0]
}

fn interleave(mesh: &MeshData) -> Vec<Vertex> {
    mesh.positions
        .iter()
        .zip(&mesh.normals)
        .map(|(p, n)| Vertex {
            position: p.to_array(),
            normal: n.to_array(),
        })
        .collect()
}

/// wgpu-based scene renderer.
pub struct WgpuRenderer {
    toon_pipeline: wgpu::RenderPipeline,
    normal_pipeline: wgpu::RenderPipeline,
    points_pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    meshes: Vec<GpuMesh>,
    points_buffer: wgpu::Buffer,
    point_count: u32,
    blit_pipeline: wgpu::RenderPipeline,
    blit_layout: wgpu::BindGroupLayout,
    blit_sampler: wgpu::Sampler,
    target: SceneTarget,
    color_format: wgpu::TextureFormat,
}

impl WgpuRenderer {
    /// `drawing_size` is the scene buffer size in pixels; the image is scaled
    /// to whatever surface `render` is given.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        drawing_size: (u32, u32),
        scene: &Scene,
        gradient: &GradientMap,
    ) -> Self {
        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals_buffer"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let gradient_view = gradient.upload(device, queue);
        let gradient_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("gradient_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let globals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bind_group_layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bind_group"),
            layout: &globals_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: globals_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&gradient_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&gradient_sampler),
                },
            ],
        });

        let mesh_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("mesh_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let mesh_pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mesh_pipeline_layout"),
            bind_group_layouts: &[&globals_layout, &mesh_layout],
            push_constant_ranges: &[],
        });

        let points_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("points_pipeline_layout"),
                bind_group_layouts: &[&globals_layout],
                push_constant_ranges: &[],
            });

        let mesh_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("mesh_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::MESH_SHADER.into()),
        });

        let mesh_pipeline = |label: &str, fragment_entry: &str| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&mesh_pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &mesh_shader,
                    entry_point: Some("vs_mesh"),
                    compilation_options: Default::default(),
                    buffers: &[wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<Vertex>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![
                            0 => Float32x3,
                            1 => Float32x3,
                        ],
                    }],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &mesh_shader,
                    entry_point: Some(fragment_entry),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: surface_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    cull_mode: Some(wgpu::Face::Back),
                    ..Default::default()
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: wgpu::TextureFormat::Depth32Float,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: Default::default(),
                    bias: Default::default(),
                }),
                multisample: Default::default(),
                multiview: None,
                cache: None,
            })
        };
        let toon_pipeline = mesh_pipeline("toon_pipeline", "fs_toon");
        let normal_pipeline = mesh_pipeline("normal_pipeline", "fs_normal");

        let points_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("points_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::POINTS_SHADER.into()),
        });

        let points_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("points_pipeline"),
            layout: Some(&points_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &points_shader,
                entry_point: Some("vs_points"),
                compilation_options: Default::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<PointInstance>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &wgpu::vertex_attr_array![0 => Float32x3],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &points_shader,
                entry_point: Some("fs_points"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        let blit_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("blit_bind_group_layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let blit_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("blit_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let blit_pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("blit_pipeline_layout"),
            bind_group_layouts: &[&blit_layout],
            push_constant_ranges: &[],
        });
        let blit_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("blit_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::BLIT_SHADER.into()),
        });
        let blit_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("blit_pipeline"),
            layout: Some(&blit_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &blit_shader,
                entry_point: Some("vs_blit"),
                compilation_options: Default::default(),
                buffers: &[],
            },
            fragment: Some(wgpu::FragmentState {
                module: &blit_shader,
                entry_point: Some("fs_blit"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: Default::default(),
            depth_stencil: None,
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        // Section meshes
        let meshes = scene
            .sections()
            .iter()
            .map(|section| {
                let data = section.shape.build();
                let vertices = interleave(&data);
                let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("mesh_vertex_buffer"),
                    contents: bytemuck::cast_slice(&vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });
                let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("mesh_index_buffer"),
                    contents: bytemuck::cast_slice(&data.indices),
                    usage: wgpu::BufferUsages::INDEX,
                });
                let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("mesh_uniform_buffer"),
                    contents: bytemuck::bytes_of(&MeshUniform {
                        model: section.transform.matrix().to_cols_array_2d(),
                    }),
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                });
                let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("mesh_bind_group"),
                    layout: &mesh_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform_buffer.as_entire_binding(),
                    }],
                });
                tracing::debug!(
                    mesh = %section.name,
                    vertices = data.vertex_count(),
                    triangles = data.triangle_count(),
                    "uploaded section mesh"
                );
                GpuMesh {
                    vertex_buffer,
                    index_buffer,
                    index_count: data.indices.len() as u32,
                    uniform_buffer,
                    bind_group,
                }
            })
            .collect();

        // Particle field (static positions; rotation comes from the globals)
        let instances: Vec<PointInstance> = scene
            .particles()
            .positions()
            .iter()
            .map(|p| PointInstance {
                position: p.to_array(),
            })
            .collect();
        let points_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("points_instance_buffer"),
            contents: bytemuck::cast_slice(&instances),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let target = Self::create_scene_target(
            device,
            surface_format,
            &blit_layout,
            &blit_sampler,
            drawing_size,
        );

        Self {
            toon_pipeline,
            normal_pipeline,
            points_pipeline,
            globals_buffer,
            globals_bind_group,
            meshes,
            points_buffer,
            point_count: instances.len() as u32,
            blit_pipeline,
            blit_layout,
            blit_sampler,
            target,
            color_format: surface_format,
        }
    }

    /// Reallocate the scene buffers for a new drawing size.
    pub fn resize(&mut self, device: &wgpu::Device, drawing_size: (u32, u32)) {
        let size = clamp_size(drawing_size);
        if size == self.target.size {
            return;
        }
        tracing::debug!(width = size.0, height = size.1, "resizing scene target");
        self.target = Self::create_scene_target(
            device,
            self.color_format,
            &self.blit_layout,
            &self.blit_sampler,
            size,
        );
    }

    /// Render one frame into the scene buffer (section meshes, then particles)
    /// and scale it onto `view`.
    pub fn render(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        view: &wgpu::TextureView,
        scene: &Scene,
        viewport: &Viewport,
    ) {
        let target_size = self.target.size;
        let rig = scene.rig();
        let light = scene.light();
        let particles = scene.particles();
        let globals = Globals {
            view_proj: rig.view_projection().to_cols_array_2d(),
            view: rig.view_matrix().to_cols_array_2d(),
            points_model: particles.transform.matrix().to_cols_array_2d(),
            light_dir: vec4(light.direction(), 0.0),
            light_radiance: vec4(light.radiance(), 0.0),
            material_color: rgb4(scene.toon_material().color.to_linear()),
            points_color: rgb4(particles.material.color.to_linear()),
            points_params: [
                particles.material.size,
                if particles.material.size_attenuation { 1.0 } else { 0.0 },
                0.0,
                0.0,
            ],
            viewport: [
                viewport.width,
                viewport.height,
                target_size.0 as f32,
                target_size.1 as f32,
            ],
        };
        queue.write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        for (gpu_mesh, section) in self.meshes.iter().zip(scene.sections()) {
            queue.write_buffer(
                &gpu_mesh.uniform_buffer,
                0,
                bytemuck::bytes_of(&MeshUniform {
                    model: section.transform.matrix().to_cols_array_2d(),
                }),
            );
        }

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("render_encoder"),
        });

        let [r, g, b] = scene.background().to_linear();
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.target.color,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.target.depth,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            // Draw section meshes
            let pipeline = match scene.material_mode() {
                MaterialMode::Toon => &self.toon_pipeline,
                MaterialMode::Normal => &self.normal_pipeline,
            };
            pass.set_pipeline(pipeline);
            pass.set_bind_group(0, &self.globals_bind_group, &[]);
            for mesh in &self.meshes {
                pass.set_bind_group(1, &mesh.bind_group, &[]);
                pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                pass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }

            // Draw particles
            if self.point_count > 0 {
                pass.set_pipeline(&self.points_pipeline);
                pass.set_bind_group(0, &self.globals_bind_group, &[]);
                pass.set_vertex_buffer(0, self.points_buffer.slice(..));
                pass.draw(0..6, 0..self.point_count);
            }
        }

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("blit_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                ..Default::default()
            });
            pass.set_pipeline(&self.blit_pipeline);
            pass.set_bind_group(0, &self.target.blit_bind_group, &[]);
            pass.draw(0..3, 0..1);
        }

        queue.submit(std::iter::once(encoder.finish()));
    }

    fn create_scene_target(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        blit_layout: &wgpu::BindGroupLayout,
        blit_sampler: &wgpu::Sampler,
        size: (u32, u32),
    ) -> SceneTarget {
        let size = clamp_size(size);
        let extent = wgpu::Extent3d {
            width: size.0,
            height: size.1,
            depth_or_array_layers: 1,
        };
        let color = device
            .create_texture(&wgpu::TextureDescriptor {
                label: Some("scene_color_texture"),
                size: extent,
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: color_format,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT
                    | wgpu::TextureUsages::TEXTURE_BINDING,
                view_formats: &[],
            })
            .create_view(&Default::default());
        let depth = device
            .create_texture(&wgpu::TextureDescriptor {
                label: Some("scene_depth_texture"),
                size: extent,
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Depth32Float,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                view_formats: &[],
            })
            .create_view(&Default::default());
        let blit_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("blit_bind_group"),
            layout: blit_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&color),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(blit_sampler),
                },
            ],
        });
        SceneTarget {
            color,
            depth,
            blit_bind_group,
            size,
        }
    }
}

/// Textures need at least one texel on each side.
fn clamp_size((width, height): (u32, u32)) -> (u32, u32) {
    (width.max(1), height.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollfolio_scene::geometry::cone;

    #[test]
    fn uniform_layouts_match_wgsl() {
        // WGSL uniform structs are 16-byte aligned: 3 mat4 + 6 vec4.
        assert_eq!(std::mem::size_of::<Globals>(), 3 * 64 + 6 * 16);
        assert_eq!(std::mem::size_of::<MeshUniform>(), 64);
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
    }

    #[test]
    fn interleave_keeps_vertex_order() {
        let data = cone(1.0, 2.0, 8);
        let vertices = interleave(&data);
        assert_eq!(vertices.len(), data.vertex_count());
        assert_eq!(vertices[0].position, data.positions[0].to_array());
        assert_eq!(vertices[5].normal, data.normals[5].to_array());
    }

    #[test]
    fn scene_target_size_is_never_empty() {
        assert_eq!(clamp_size((0, 0)), (1, 1));
        assert_eq!(clamp_size((2560, 0)), (2560, 1));
        assert_eq!(clamp_size((1600, 1200)), (1600, 1200));
    }

    #[test]
    fn helpers_pad_to_vec4() {
        assert_eq!(vec4(Vec3::new(1.0, 2.0, 3.0), 0.0), [1.0, 2.0, 3.0, 0.0]);
        assert_eq!(rgb4([0.5, 0.25, 0.0]), [0.5, 0.25, 0.0, 1.0]);
    }
}
