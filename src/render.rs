use crate::constants::{
    BACKGROUND_COLOR, BAMBOO_COLOR, BAMBOO_SPRITE_SIZE, CUBE_COLOR, OUTLINE_COLOR, PANEL_TINT,
    SPHERE_COLOR,
};
use crate::core::constants::BURST_CUBE_SIZE;
use crate::core::geometry::{
    cube_triangles, hex_to_linear_rgba, plane_quad, sphere_wireframe, srgb_to_linear, MeshVertex,
};
use crate::core::{CameraRig, ImagePanel, SceneComposer, Sphere, SCENE_WGSL};
use glam::{Mat4, Vec3};
use image::RgbaImage;
use web_sys as web;
use wgpu::util::DeviceExt;

mod draws;
mod helpers;
mod targets;
use draws::{CameraUniforms, DrawSlot, DrawUniforms};
use helpers::ScenePipelineDesc;
use targets::{RenderTargets, DEPTH_FORMAT};

/// Textures that arrive asynchronously after startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureSlot {
    Photo,
    LeafSprite,
}

struct MeshBuffer {
    buffer: wgpu::Buffer,
    count: u32,
}

impl MeshBuffer {
    fn new(device: &wgpu::Device, label: &str, vertices: &[MeshVertex]) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self {
            buffer,
            count: vertices.len() as u32,
        }
    }
}

/// Per-instance positions, regrown when the particle count outgrows it.
struct InstanceBuffer {
    buffer: wgpu::Buffer,
    capacity: usize,
    len: u32,
}

impl InstanceBuffer {
    fn sync(
        slot: &mut Option<InstanceBuffer>,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
        positions: &[Vec3],
        dirty: bool,
    ) {
        if positions.is_empty() {
            *slot = None;
            return;
        }
        match slot {
            Some(ib) if ib.capacity >= positions.len() => {
                if dirty {
                    queue.write_buffer(&ib.buffer, 0, bytemuck::cast_slice(positions));
                }
                ib.len = positions.len() as u32;
            }
            _ => {
                let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(label),
                    contents: bytemuck::cast_slice(positions),
                    usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                });
                *slot = Some(InstanceBuffer {
                    buffer,
                    capacity: positions.len(),
                    len: positions.len() as u32,
                });
            }
        }
    }
}

struct ScenePipelines {
    lines: wgpu::RenderPipeline,
    mesh_front: wgpu::RenderPipeline,
    mesh_back: wgpu::RenderPipeline,
    cubes: wgpu::RenderPipeline,
    sprites: wgpu::RenderPipeline,
}

struct LoadedTexture {
    _tex: wgpu::Texture,
    view: wgpu::TextureView,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,

    camera_buffer: wgpu::Buffer,
    camera_bg: wgpu::BindGroup,
    draw_bgl: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    _white: LoadedTexture,
    photo: Option<LoadedTexture>,
    leaf: Option<LoadedTexture>,

    pipelines: ScenePipelines,
    sphere_mesh: MeshBuffer,
    quad_mesh: MeshBuffer,
    cube_mesh: MeshBuffer,
    bamboo_instances: Option<InstanceBuffer>,
    burst_instances: Option<InstanceBuffer>,

    sphere_slot: DrawSlot,
    panel_slot: DrawSlot,
    outline_slot: DrawSlot,
    bamboo_slot: DrawSlot,
    cube_slot: DrawSlot,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, sphere: &Sphere) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

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
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let targets = RenderTargets::new(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });
        let camera_bgl = draws::create_camera_bgl(&device);
        let draw_bgl = draws::create_draw_bgl(&device);
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&camera_bgl, &draw_bgl],
            push_constant_ranges: &[],
        });

        let mesh = [helpers::mesh_layout()];
        let mesh_instanced = [helpers::mesh_layout(), helpers::instance_layout()];
        let instance_only = [helpers::instance_layout()];
        let make = |desc: ScenePipelineDesc<'_>| {
            helpers::make_scene_pipeline(&device, &layout, &shader, format, DEPTH_FORMAT, desc)
        };
        let pipelines = ScenePipelines {
            lines: make(ScenePipelineDesc {
                label: "lines_pipeline",
                vs_entry: "vs_mesh",
                buffers: &mesh,
                topology: wgpu::PrimitiveTopology::LineList,
                cull_mode: None,
                blend: None,
                depth_write: true,
            }),
            mesh_front: make(ScenePipelineDesc {
                label: "mesh_front_pipeline",
                vs_entry: "vs_mesh",
                buffers: &mesh,
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                blend: None,
                depth_write: true,
            }),
            // outline shows only its back side
            mesh_back: make(ScenePipelineDesc {
                label: "mesh_back_pipeline",
                vs_entry: "vs_mesh",
                buffers: &mesh,
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Front),
                blend: None,
                depth_write: true,
            }),
            cubes: make(ScenePipelineDesc {
                label: "cubes_pipeline",
                vs_entry: "vs_instanced",
                buffers: &mesh_instanced,
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                blend: None,
                depth_write: true,
            }),
            sprites: make(ScenePipelineDesc {
                label: "sprites_pipeline",
                vs_entry: "vs_sprite",
                buffers: &instance_only,
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                blend: Some(helpers::ADDITIVE_BLEND),
                depth_write: false,
            }),
        };

        let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("camera_uniforms"),
            size: std::mem::size_of::<CameraUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let camera_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("camera_bg"),
            layout: &camera_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let (white_tex, white_view) =
            helpers::upload_rgba_texture(&device, &queue, "white_tex", 1, 1, &[255, 255, 255, 255]);
        let white = LoadedTexture {
            _tex: white_tex,
            view: white_view,
        };
        let slot = |label: &str| DrawSlot::new(&device, label, &draw_bgl, &white.view, &sampler);
        let sphere_slot = slot("sphere_uniforms");
        let panel_slot = slot("panel_uniforms");
        let outline_slot = slot("outline_uniforms");
        let bamboo_slot = slot("bamboo_uniforms");
        let cube_slot = slot("cube_uniforms");

        let panel = ImagePanel::default();
        let sphere_mesh = MeshBuffer::new(
            &device,
            "sphere_vb",
            &sphere_wireframe(sphere.radius, sphere.segments, sphere.segments),
        );
        let quad_mesh = MeshBuffer::new(&device, "quad_vb", &plane_quad(panel.width, panel.height));
        let cube_mesh = MeshBuffer::new(&device, "cube_vb", &cube_triangles(BURST_CUBE_SIZE));

        let bg = srgb_to_linear_color(BACKGROUND_COLOR);
        log::info!("[render] WebGPU ready {}x{} format={:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            camera_buffer,
            camera_bg,
            draw_bgl,
            sampler,
            _white: white,
            photo: None,
            leaf: None,
            pipelines,
            sphere_mesh,
            quad_mesh,
            cube_mesh,
            bamboo_instances: None,
            burst_instances: None,
            sphere_slot,
            panel_slot,
            outline_slot,
            bamboo_slot,
            cube_slot,
            width,
            height,
            clear_color: bg,
        })
    }

    /// Install a decoded texture and rebind the draws that sample it.
    pub fn upload_texture(&mut self, slot: TextureSlot, img: &RgbaImage) {
        let (w, h) = img.dimensions();
        if w == 0 || h == 0 {
            log::warn!("[render] ignoring empty {:?} texture", slot);
            return;
        }
        let label = match slot {
            TextureSlot::Photo => "photo_tex",
            TextureSlot::LeafSprite => "leaf_tex",
        };
        let (tex, view) =
            helpers::upload_rgba_texture(&self.device, &self.queue, label, w, h, img.as_raw());
        let loaded = LoadedTexture { _tex: tex, view };
        match slot {
            TextureSlot::Photo => {
                self.panel_slot
                    .rebind(&self.device, &self.draw_bgl, &loaded.view, &self.sampler);
                self.photo = Some(loaded);
            }
            TextureSlot::LeafSprite => {
                self.bamboo_slot
                    .rebind(&self.device, &self.draw_bgl, &loaded.view, &self.sampler);
                self.leaf = Some(loaded);
            }
        }
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
            self.targets.recreate(&self.device, width, height);
        }
    }

    /// Draw one frame of `scene` from `camera`. Consumes the particle dirty flags.
    pub fn render(
        &mut self,
        scene: &mut SceneComposer,
        camera: &CameraRig,
    ) -> Result<(), wgpu::SurfaceError> {
        self.write_camera(camera);
        self.write_draws(scene, camera);

        let bamboo_dirty = scene.bamboo.take_dirty();
        InstanceBuffer::sync(
            &mut self.bamboo_instances,
            &self.device,
            &self.queue,
            "bamboo_instances",
            scene.bamboo.positions(),
            bamboo_dirty,
        );
        match scene.burst.as_mut() {
            Some(burst) => {
                let dirty = burst.take_dirty();
                InstanceBuffer::sync(
                    &mut self.burst_instances,
                    &self.device,
                    &self.queue,
                    "burst_instances",
                    burst.positions(),
                    dirty,
                );
            }
            None => self.burst_instances = None,
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
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
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.camera_bg, &[]);

            // Wireframe sphere
            rpass.set_pipeline(&self.pipelines.lines);
            rpass.set_bind_group(1, &self.sphere_slot.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.sphere_mesh.buffer.slice(..));
            rpass.draw(0..self.sphere_mesh.count, 0..1);

            // Photo panel and outline, once the photo has arrived
            if scene.panel.is_some() && self.photo.is_some() {
                rpass.set_vertex_buffer(0, self.quad_mesh.buffer.slice(..));
                rpass.set_pipeline(&self.pipelines.mesh_front);
                rpass.set_bind_group(1, &self.panel_slot.bind_group, &[]);
                rpass.draw(0..self.quad_mesh.count, 0..1);
                rpass.set_pipeline(&self.pipelines.mesh_back);
                rpass.set_bind_group(1, &self.outline_slot.bind_group, &[]);
                rpass.draw(0..self.quad_mesh.count, 0..1);
            }

            if let Some(ib) = &self.burst_instances {
                rpass.set_pipeline(&self.pipelines.cubes);
                rpass.set_bind_group(1, &self.cube_slot.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.cube_mesh.buffer.slice(..));
                rpass.set_vertex_buffer(1, ib.buffer.slice(..));
                rpass.draw(0..self.cube_mesh.count, 0..ib.len);
            }

            // Additive sprites last, without depth writes
            if let Some(ib) = &self.bamboo_instances {
                rpass.set_pipeline(&self.pipelines.sprites);
                rpass.set_bind_group(1, &self.bamboo_slot.bind_group, &[]);
                rpass.set_vertex_buffer(0, ib.buffer.slice(..));
                rpass.draw(0..6, 0..ib.len);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl<'a> GpuState<'a> {
    fn write_camera(&self, camera: &CameraRig) {
        let (right, up) = camera.billboard_axes();
        let u = CameraUniforms {
            view_proj: camera.view_projection().to_cols_array_2d(),
            right: right.extend(0.0).to_array(),
            up: up.extend(0.0).to_array(),
        };
        self.queue
            .write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&u));
    }

    fn write_draws(&self, scene: &SceneComposer, camera: &CameraRig) {
        let flat = |model: Mat4, color: u32| DrawUniforms {
            model: model.to_cols_array_2d(),
            color: hex_to_linear_rgba(color),
            params: [0.0, 0.0, 0.0, 0.0],
        };
        self.sphere_slot.write(
            &self.queue,
            &flat(Mat4::from_rotation_y(scene.sphere.rotation_y), SPHERE_COLOR),
        );
        if let Some(panel) = &scene.panel {
            self.panel_slot.write(
                &self.queue,
                &DrawUniforms {
                    params: [1.0, 0.0, 0.0, 0.0],
                    ..flat(Mat4::from_translation(Vec3::new(0.0, 0.0, panel.z)), PANEL_TINT)
                },
            );
            self.outline_slot.write(
                &self.queue,
                &flat(Mat4::from_scale(Vec3::splat(panel.outline_scale)), OUTLINE_COLOR),
            );
        }
        self.cube_slot
            .write(&self.queue, &flat(Mat4::IDENTITY, CUBE_COLOR));
        let leaf_weight = if self.leaf.is_some() { 1.0 } else { 0.0 };
        let sprite_size = camera.world_sprite_size(BAMBOO_SPRITE_SIZE);
        self.bamboo_slot.write(
            &self.queue,
            &DrawUniforms {
                params: [leaf_weight, sprite_size, 0.0, 0.0],
                ..flat(Mat4::IDENTITY, BAMBOO_COLOR)
            },
        );
    }
}

fn srgb_to_linear_color(hex: u32) -> wgpu::Color {
    let c = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0) as f64;
    wgpu::Color {
        r: c(16),
        g: c(8),
        b: c(0),
        a: 1.0,
    }
}
