use crate::core::constants::{rgb_from_hex, GALAXY_CORE_HEX};
use crate::core::scene::{FrameParams, Scene};
use crate::core::sprite;
use glam::Vec3;
use web_sys as web;

mod helpers;
mod lines;
mod points;
mod sprite_texture;

use lines::{LineLayer, LinePipeline};
use points::{PointLayer, PointMaterial, PointPipeline};
use sprite_texture::SpriteTexture;

struct ConstellationLayers {
    stars: PointLayer,
    outline: LineLayer,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    points: PointPipeline,
    lines: LinePipeline,
    _sprite: SpriteTexture,

    background: PointLayer,
    constellations: Vec<ConstellationLayers>,
    arms: PointLayer,
    core: PointLayer,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, scene: &Scene) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} format={:?}", width, height, format);

        let sprite = sprite_texture::upload_sprite(&device, &queue, &sprite::star_sprite());
        let points = points::create_point_pipeline(&device, format);
        let lines = lines::create_line_pipeline(&device, format);

        let background = PointLayer::new(
            &device,
            &points,
            &sprite,
            "background_stars",
            &points::instances_from_cloud(&scene.background),
        );
        let arms = PointLayer::new(
            &device,
            &points,
            &sprite,
            "galaxy_arms",
            &points::instances_from_cloud(&scene.arms),
        );
        let core = PointLayer::new(
            &device,
            &points,
            &sprite,
            "galaxy_core",
            &points::instances_from_cloud(&scene.core),
        );
        let constellations = scene
            .constellations
            .iter()
            .enumerate()
            .map(|(i, c)| ConstellationLayers {
                stars: PointLayer::new(
                    &device,
                    &points,
                    &sprite,
                    &format!("constellation_{i}_stars"),
                    &points::instances_from_points(&c.live),
                ),
                outline: LineLayer::new(
                    &device,
                    &lines,
                    &format!("constellation_{i}_outline"),
                    &c.outline,
                    c.color,
                ),
            })
            .collect();

        Ok(Self {
            surface,
            device,
            queue,
            config,
            points,
            lines,
            _sprite: sprite,
            background,
            constellations,
            arms,
            core,
            width,
            height,
            clear_color: wgpu::Color::BLACK,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            log::info!("[resize] surface {}x{}", width, height);
        }
    }

    /// Re-apply the current configuration after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, scene: &mut Scene, frame: &FrameParams) -> Result<(), wgpu::SurfaceError> {
        let vis = frame.visibility;
        let params = &scene.params;

        self.background.write_uniforms(
            &self.queue,
            frame.view_proj,
            frame.scene_model,
            frame.aspect,
            PointMaterial {
                tint: Vec3::ONE,
                opacity: vis.background,
                size: params.background_size,
            },
        );
        for (layers, c) in self
            .constellations
            .iter()
            .zip(scene.constellations.iter_mut())
        {
            if c.take_dirty() {
                layers
                    .stars
                    .update_instances(&self.queue, &points::instances_from_points(&c.live));
            }
            layers.stars.write_uniforms(
                &self.queue,
                frame.view_proj,
                frame.scene_model,
                frame.aspect,
                PointMaterial {
                    tint: Vec3::ONE,
                    opacity: vis.constellation_points,
                    size: params.constellation_size,
                },
            );
            layers.outline.write_uniforms(
                &self.queue,
                frame.view_proj,
                frame.scene_model,
                vis.constellation_lines,
            );
        }
        self.arms.write_uniforms(
            &self.queue,
            frame.view_proj,
            frame.galaxy_model,
            frame.aspect,
            PointMaterial {
                tint: Vec3::ONE,
                opacity: vis.galaxy_arms,
                size: params.arm_size,
            },
        );
        self.core.write_uniforms(
            &self.queue,
            frame.view_proj,
            frame.galaxy_model,
            frame.aspect,
            PointMaterial {
                tint: rgb_from_hex(GALAXY_CORE_HEX),
                opacity: vis.galaxy_core,
                size: params.core_size,
            },
        );

        let frame_tex = self.surface.get_current_texture()?;
        let view = frame_tex
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            // Fully transparent layers are skipped; additive blending makes order irrelevant.
            if vis.background > 0.0 {
                self.background.draw(&mut rpass, &self.points);
            }
            for layers in &self.constellations {
                if vis.constellation_lines > 0.0 {
                    layers.outline.draw(&mut rpass, &self.lines);
                }
                if vis.constellation_points > 0.0 {
                    layers.stars.draw(&mut rpass, &self.points);
                }
            }
            if vis.galaxy_arms > 0.0 {
                self.arms.draw(&mut rpass, &self.points);
            }
            if vis.galaxy_core > 0.0 {
                self.core.draw(&mut rpass, &self.points);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame_tex.present();
        Ok(())
    }
}
