use glam::Mat4;
use wgpu::util::DeviceExt;

use super::context::RenderContext;
use super::mesh::{SphereMesh, SphereVertex};
use crate::camera::CameraUniform;
use crate::engine::{RenderSnapshot, ATMOSPHERE_RADIUS, GLOBE_RADIUS};

/// Longitudinal segments for both sphere meshes.
const SECTORS: u32 = 64;
/// Latitudinal segments for both sphere meshes.
const STACKS: u32 = 64;

/// Ocean blue base color for the globe surface.
const GLOBE_COLOR: [f32; 4] = [0.231, 0.510, 0.965, 1.0];
/// Pale blue halo, mostly transparent.
const ATMOSPHERE_COLOR: [f32; 4] = [0.267, 0.533, 1.0, 0.2];

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Per-object uniform: model matrix plus base color.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct ModelUniform {
    model: [[f32; 4]; 4],
    color: [f32; 4],
}

/// One drawable sphere: its mesh, uniform buffer, and bind group.
struct SceneObject {
    mesh: SphereMesh,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl SceneObject {
    fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        label: &str,
        radius: f32,
        color: [f32; 4],
    ) -> Self {
        let mesh = SphereMesh::new(device, label, radius, SECTORS, STACKS);
        let uniform = ModelUniform {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            color,
        };
        let uniform_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} Uniform")),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });
        let bind_group =
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(&format!("{label} Bind Group")),
                layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                }],
            });
        Self {
            mesh,
            uniform_buffer,
            bind_group,
        }
    }

    fn update(&self, queue: &wgpu::Queue, model: Mat4, color: [f32; 4]) {
        let uniform = ModelUniform {
            model: model.to_cols_array_2d(),
            color,
        };
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::cast_slice(&[uniform]),
        );
    }

    fn draw<'a>(&'a self, rp: &mut wgpu::RenderPass<'a>) {
        rp.set_bind_group(1, &self.bind_group, &[]);
        rp.set_vertex_buffer(0, self.mesh.vertex_buffer.slice(..));
        rp.set_index_buffer(
            self.mesh.index_buffer.slice(..),
            wgpu::IndexFormat::Uint32,
        );
        rp.draw_indexed(0..self.mesh.index_count, 0, 0..1);
    }
}

/// Draws the globe and its atmosphere shell from a per-frame snapshot.
///
/// The globe renders lit and opaque. The shell renders its back faces
/// only, unlit and mostly transparent, after the globe has written
/// depth — so only the ring outside the globe's silhouette survives,
/// reading as a halo.
pub struct GlobeRenderer {
    globe_pipeline: wgpu::RenderPipeline,
    atmosphere_pipeline: wgpu::RenderPipeline,
    camera_uniform: CameraUniform,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    globe: SceneObject,
    atmosphere: SceneObject,
    depth_view: wgpu::TextureView,
}

impl GlobeRenderer {
    /// Build meshes, pipelines, and uniform buffers for the context's
    /// surface format.
    #[must_use]
    pub fn new(context: &RenderContext) -> Self {
        let device = &context.device;

        let shader =
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Sphere Shader"),
                source: wgpu::ShaderSource::Wgsl(
                    include_str!("shaders/sphere.wgsl").into(),
                ),
            });

        let camera_layout = uniform_layout(device, "Camera Layout");
        let model_layout = uniform_layout(device, "Model Layout");

        let camera_uniform = CameraUniform::new();
        let camera_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[camera_uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });
        let camera_bind_group =
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Camera Bind Group"),
                layout: &camera_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                }],
            });

        let pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Sphere Pipeline Layout"),
                bind_group_layouts: &[&camera_layout, &model_layout],
                push_constant_ranges: &[],
            });

        let globe_pipeline = create_sphere_pipeline(
            device,
            "Globe",
            &pipeline_layout,
            &shader,
            "fs_globe",
            context.format(),
            None,
            wgpu::Face::Back,
            true,
        );
        // Back faces only + no depth write, matching a thin transparent
        // shell drawn over the opaque globe.
        let atmosphere_pipeline = create_sphere_pipeline(
            device,
            "Atmosphere",
            &pipeline_layout,
            &shader,
            "fs_atmosphere",
            context.format(),
            Some(wgpu::BlendState::ALPHA_BLENDING),
            wgpu::Face::Front,
            false,
        );

        let globe = SceneObject::new(
            device,
            &model_layout,
            "Globe",
            GLOBE_RADIUS,
            GLOBE_COLOR,
        );
        let atmosphere = SceneObject::new(
            device,
            &model_layout,
            "Atmosphere",
            ATMOSPHERE_RADIUS,
            ATMOSPHERE_COLOR,
        );

        let depth_view = create_depth_view(
            device,
            context.config.width,
            context.config.height,
        );

        Self {
            globe_pipeline,
            atmosphere_pipeline,
            camera_uniform,
            camera_buffer,
            camera_bind_group,
            globe,
            atmosphere,
            depth_view,
        }
    }

    /// Recreate the depth buffer for a new surface size.
    pub fn resize(&mut self, context: &RenderContext) {
        self.depth_view = create_depth_view(
            &context.device,
            context.config.width,
            context.config.height,
        );
    }

    /// Draw one frame into `view` from the engine's snapshot.
    pub fn render(
        &mut self,
        context: &RenderContext,
        view: &wgpu::TextureView,
        snapshot: &RenderSnapshot,
    ) {
        self.camera_uniform.update(snapshot.view_proj, snapshot.eye);
        context.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[self.camera_uniform]),
        );
        self.globe.update(
            &context.queue,
            snapshot.globe_model,
            GLOBE_COLOR,
        );
        self.atmosphere.update(
            &context.queue,
            snapshot.atmosphere_model,
            ATMOSPHERE_COLOR,
        );

        let mut encoder = context.create_encoder();
        {
            let mut rp =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("globe pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: Some(
                        wgpu::RenderPassDepthStencilAttachment {
                            view: &self.depth_view,
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(1.0),
                                store: wgpu::StoreOp::Store,
                            }),
                            stencil_ops: None,
                        },
                    ),
                    ..Default::default()
                });

            rp.set_bind_group(0, &self.camera_bind_group, &[]);
            rp.set_pipeline(&self.globe_pipeline);
            self.globe.draw(&mut rp);
            rp.set_pipeline(&self.atmosphere_pipeline);
            self.atmosphere.draw(&mut rp);
        }
        context.submit(encoder);
    }
}

/// Vertex+fragment visible uniform buffer layout with a single binding.
fn uniform_layout(
    device: &wgpu::Device,
    label: &str,
) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX
                | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    })
}

#[allow(clippy::too_many_arguments)]
fn create_sphere_pipeline(
    device: &wgpu::Device,
    label: &str,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    fs_entry: &str,
    format: wgpu::TextureFormat,
    blend: Option<wgpu::BlendState>,
    cull: wgpu::Face,
    depth_write: bool,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(&format!("{label} Pipeline")),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[SphereVertex::layout()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(fs_entry),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: Some(cull),
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: depth_write,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

/// Depth32Float render-attachment texture view for the given size.
fn create_depth_view(
    device: &wgpu::Device,
    width: u32,
    height: u32,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
