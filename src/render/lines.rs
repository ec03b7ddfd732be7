use super::helpers;
use glam::{Mat4, Vec3, Vec4};
use wgpu;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LineUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
}

pub(crate) struct LinePipeline {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) bgl: wgpu::BindGroupLayout,
}

/// A static line strip (constellation outline) with its own color uniform.
pub(crate) struct LineLayer {
    pub(crate) vb: wgpu::Buffer,
    pub(crate) count: u32,
    pub(crate) color: Vec3,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) fn create_line_pipeline(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> LinePipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("lines_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::LINES_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("lines_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("lines_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let vertex_buffers = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vec3>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 0,
        }],
    }];
    let pipeline = helpers::make_additive_pipeline(
        device,
        "lines_pipeline",
        &layout,
        &shader,
        &vertex_buffers,
        wgpu::PrimitiveTopology::LineStrip,
        color_format,
    );
    LinePipeline { pipeline, bgl }
}

impl LineLayer {
    pub(crate) fn new(
        device: &wgpu::Device,
        lines: &LinePipeline,
        label: &str,
        outline: &[Vec3],
        color: Vec3,
    ) -> Self {
        let vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(outline),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let uniform_buffer =
            helpers::create_uniform_buffer(device, label, std::mem::size_of::<LineUniforms>());
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &lines.bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        Self {
            vb,
            count: outline.len() as u32,
            color,
            uniform_buffer,
            bind_group,
        }
    }

    pub(crate) fn write_uniforms(
        &self,
        queue: &wgpu::Queue,
        view_proj: Mat4,
        model: Mat4,
        opacity: f32,
    ) {
        let u = LineUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            color: Vec4::from((self.color, opacity.clamp(0.0, 1.0))).to_array(),
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, lines: &LinePipeline) {
        if self.count < 2 {
            return;
        }
        rpass.set_pipeline(&lines.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vb.slice(..));
        rpass.draw(0..self.count, 0..1);
    }
}
