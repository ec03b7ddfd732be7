use super::helpers;
use super::sprite_texture::SpriteTexture;
use crate::core::cloud::PointCloud;
use glam::{Mat4, Vec3, Vec4};
use wgpu;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PointInstance {
    pub(crate) pos: [f32; 3],
    pub(crate) _pad0: f32,
    pub(crate) color: [f32; 3],
    pub(crate) _pad1: f32,
}

impl PointInstance {
    pub(crate) fn new(pos: Vec3, color: Vec3) -> Self {
        Self {
            pos: pos.to_array(),
            _pad0: 0.0,
            color: color.to_array(),
            _pad1: 0.0,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PointUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) tint: [f32; 4],
    pub(crate) params: [f32; 4],
}

/// Per-layer material settings written each frame.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PointMaterial {
    pub(crate) tint: Vec3,
    pub(crate) opacity: f32,
    pub(crate) size: f32,
}

pub(crate) struct PointPipeline {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) bgl: wgpu::BindGroupLayout,
    pub(crate) quad_vb: wgpu::Buffer,
}

/// One instanced draw: a fixed-size instance buffer plus its own uniforms.
pub(crate) struct PointLayer {
    pub(crate) instance_vb: wgpu::Buffer,
    pub(crate) count: u32,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) fn create_point_pipeline(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> PointPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("points_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::POINTS_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("points_bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
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
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
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
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("points_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let vertex_buffers = [
        // slot 0: quad corners
        wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * 2) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 0,
                shader_location: 0,
            }],
        },
        // slot 1: per-point data
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PointInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 1,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 16,
                    shader_location: 2,
                },
            ],
        },
    ];
    let pipeline = helpers::make_additive_pipeline(
        device,
        "points_pipeline",
        &layout,
        &shader,
        &vertex_buffers,
        wgpu::PrimitiveTopology::TriangleList,
        color_format,
    );
    let quad_vertices: [f32; 12] = [
        -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
    ];
    let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("quad_vb"),
        contents: bytemuck::cast_slice(&quad_vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    PointPipeline {
        pipeline,
        bgl,
        quad_vb,
    }
}

pub(crate) fn instances_from_cloud(cloud: &PointCloud) -> Vec<PointInstance> {
    cloud
        .positions
        .iter()
        .enumerate()
        .map(|(i, p)| PointInstance::new(*p, cloud.color_or(i, Vec3::ONE)))
        .collect()
}

pub(crate) fn instances_from_points(points: &[Vec3]) -> Vec<PointInstance> {
    points
        .iter()
        .map(|p| PointInstance::new(*p, Vec3::ONE))
        .collect()
}

impl PointLayer {
    pub(crate) fn new(
        device: &wgpu::Device,
        points: &PointPipeline,
        sprite: &SpriteTexture,
        label: &str,
        instances: &[PointInstance],
    ) -> Self {
        let instance_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(instances),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        let uniform_buffer =
            helpers::create_uniform_buffer(device, label, std::mem::size_of::<PointUniforms>());
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &points.bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&sprite.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&sprite.sampler),
                },
            ],
        });
        Self {
            instance_vb,
            count: instances.len() as u32,
            uniform_buffer,
            bind_group,
        }
    }

    /// Overwrite the instance data in place; the length must not change.
    pub(crate) fn update_instances(&self, queue: &wgpu::Queue, instances: &[PointInstance]) {
        debug_assert_eq!(instances.len() as u32, self.count);
        queue.write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(instances));
    }

    pub(crate) fn write_uniforms(
        &self,
        queue: &wgpu::Queue,
        view_proj: Mat4,
        model: Mat4,
        aspect: f32,
        material: PointMaterial,
    ) {
        let u = PointUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            tint: Vec4::from((material.tint, material.opacity.clamp(0.0, 1.0))).to_array(),
            params: [material.size, 1.0 / aspect.max(1e-6), 0.0, 0.0],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, points: &PointPipeline) {
        if self.count == 0 {
            return;
        }
        rpass.set_pipeline(&points.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, points.quad_vb.slice(..));
        rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
        rpass.draw(0..6, 0..self.count);
    }
}
