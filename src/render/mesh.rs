use glam::Vec3;
use wgpu::util::DeviceExt;

/// Vertex layout shared by the globe and atmosphere pipelines.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit outward normal.
    pub normal: [f32; 3],
}

impl SphereVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    /// Vertex buffer layout for pipeline creation.
    #[must_use]
    pub const fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// CPU-side UV-sphere tessellation: `sectors` longitudinal slices by
/// `stacks` latitudinal rows, counter-clockwise winding seen from
/// outside. Degenerate pole quads collapse to single triangles.
#[must_use]
pub fn build_sphere(
    radius: f32,
    sectors: u32,
    stacks: u32,
) -> (Vec<SphereVertex>, Vec<u32>) {
    let mut vertices =
        Vec::with_capacity(((sectors + 1) * (stacks + 1)) as usize);
    for stack in 0..=stacks {
        let phi = std::f32::consts::FRAC_PI_2
            - std::f32::consts::PI * stack as f32 / stacks as f32;
        let (y, ring) = phi.sin_cos();
        for sector in 0..=sectors {
            let theta =
                std::f32::consts::TAU * sector as f32 / sectors as f32;
            let normal =
                Vec3::new(ring * theta.cos(), y, ring * theta.sin());
            vertices.push(SphereVertex {
                position: (normal * radius).to_array(),
                normal: normal.to_array(),
            });
        }
    }

    let mut indices =
        Vec::with_capacity((sectors * (stacks - 1) * 6) as usize);
    for stack in 0..stacks {
        for sector in 0..sectors {
            // a/a1 on the upper ring, b/b1 below them.
            let a = stack * (sectors + 1) + sector;
            let a1 = a + 1;
            let b = a + sectors + 1;
            let b1 = b + 1;
            if stack != 0 {
                indices.extend_from_slice(&[a, a1, b]);
            }
            if stack != stacks - 1 {
                indices.extend_from_slice(&[a1, b1, b]);
            }
        }
    }
    (vertices, indices)
}

/// GPU-resident sphere mesh.
pub struct SphereMesh {
    /// Vertex buffer.
    pub vertex_buffer: wgpu::Buffer,
    /// Index buffer (u32 indices).
    pub index_buffer: wgpu::Buffer,
    /// Number of indices to draw.
    pub index_count: u32,
}

impl SphereMesh {
    /// Tessellate a sphere and upload it to the GPU.
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        label: &str,
        radius: f32,
        sectors: u32,
        stacks: u32,
    ) -> Self {
        let (vertices, indices) = build_sphere(radius, sectors, stacks);
        let vertex_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} Vertices")),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} Indices")),
                contents: bytemuck::cast_slice(&indices),
                usage: wgpu::BufferUsages::INDEX,
            });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }
}
