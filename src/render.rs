use crate::constants::*;
use crate::texture::CoinFace;
use glam::{EulerRot, Mat4, Vec3};
use std::f32::consts::FRAC_PI_2;
use std::ops::Range;
use web_sys as web;
use wgpu::util::DeviceExt;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Vertex {
    position: [f32; 3],
    normal: [f32; 3],
    uv: [f32; 2],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    light: [f32; 4],
    rim_color: [f32; 4],
}

struct MeshRanges {
    heads: Range<u32>,
    tails: Range<u32>,
    rim: Range<u32>,
}

struct FaceTexture {
    texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,

    face_pipeline: wgpu::RenderPipeline,
    rim_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    heads: FaceTexture,
    tails: FaceTexture,

    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    ranges: MeshRanges,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    cam_eye: Vec3,
    cam_target: Vec3,
    coin_position: Vec3,
    coin_rotation: Vec3,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
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
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let depth_view = create_depth_view(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("coin_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::COIN_WGSL.into()),
        });

        let scene_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
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
        let face_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("face_bgl"),
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

        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2],
        };

        let face_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("face_pl"),
            bind_group_layouts: &[&scene_bgl, &face_bgl],
            push_constant_ranges: &[],
        });
        let rim_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("rim_pl"),
            bind_group_layouts: &[&scene_bgl],
            push_constant_ranges: &[],
        });

        let make_pipeline = |label: &str, layout: &wgpu::PipelineLayout, fs_entry: &str| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[vertex_layout.clone()],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    cull_mode: None,
                    ..Default::default()
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DEPTH_FORMAT,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some(fs_entry),
                    targets: &[Some(wgpu::ColorTargetState {
                        format,
                        blend: None,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                cache: None,
                multiview: None,
            })
        };
        let face_pipeline = make_pipeline("face_pipeline", &face_pl, "fs_face");
        let rim_pipeline = make_pipeline("rim_pipeline", &rim_pl, "fs_rim");

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &scene_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("face_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let heads = create_face_texture(&device, &face_bgl, &sampler, "heads_tex");
        let tails = create_face_texture(&device, &face_bgl, &sampler, "tails_tex");

        let (vertices, indices, ranges) =
            build_coin_mesh(COIN_RADIUS, COIN_DEPTH, COIN_SEGMENTS);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("coin_vertices"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("coin_indices"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_view,
            face_pipeline,
            rim_pipeline,
            uniform_buffer,
            scene_bind_group,
            heads,
            tails,
            vertex_buffer,
            index_buffer,
            ranges,
            width,
            height,
            clear_color: wgpu::Color {
                r: 0.008,
                g: 0.008,
                b: 0.02,
                a: 1.0,
            },
            cam_eye: Vec3::new(0.0, 0.0, crate::core::coin::CAMERA_NEAR_Z),
            cam_target: Vec3::ZERO,
            coin_position: Vec3::ZERO,
            coin_rotation: Vec3::ZERO,
        })
    }

    pub fn set_camera(&mut self, eye: Vec3, target: Vec3) {
        self.cam_eye = eye;
        self.cam_target = target;
    }

    pub fn set_coin(&mut self, position: Vec3, rotation: Vec3) {
        self.coin_position = position;
        self.coin_rotation = rotation;
    }

    /// Replace one face's texture contents with freshly rasterized RGBA
    /// pixels (TEXTURE_SIZE squared).
    pub fn upload_face(&mut self, face: CoinFace, pixels: &[u8]) {
        let target = match face {
            CoinFace::Heads => &self.heads,
            CoinFace::Tails => &self.tails,
        };
        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &target.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * TEXTURE_SIZE),
                rows_per_image: Some(TEXTURE_SIZE),
            },
            wgpu::Extent3d {
                width: TEXTURE_SIZE,
                height: TEXTURE_SIZE,
                depth_or_array_layers: 1,
            },
        );
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
            self.depth_view = create_depth_view(&self.device, width, height);
        }
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let proj = Mat4::perspective_rh(CAMERA_FOV_Y, aspect, CAMERA_Z_NEAR, CAMERA_Z_FAR);
        let view = Mat4::look_at_rh(self.cam_eye, self.cam_target, Vec3::Y);
        // The cylinder is modeled with its axis on Y; the fixed X pre-roll
        // turns the heads cap toward the camera at rotation zero.
        let model = Mat4::from_translation(self.coin_position)
            * Mat4::from_euler(
                EulerRot::XYZ,
                self.coin_rotation.x,
                self.coin_rotation.y,
                self.coin_rotation.z,
            )
            * Mat4::from_rotation_x(FRAC_PI_2);
        let uniforms = SceneUniforms {
            view_proj: (proj * view).to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            light: [LIGHT_DIR[0], LIGHT_DIR[1], LIGHT_DIR[2], AMBIENT_LIGHT],
            rim_color: RIM_COLOR,
        };
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

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
                label: Some("coin_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.set_bind_group(0, &self.scene_bind_group, &[]);

            rpass.set_pipeline(&self.face_pipeline);
            rpass.set_bind_group(1, &self.heads.bind_group, &[]);
            rpass.draw_indexed(self.ranges.heads.clone(), 0, 0..1);
            rpass.set_bind_group(1, &self.tails.bind_group, &[]);
            rpass.draw_indexed(self.ranges.tails.clone(), 0, 0..1);

            rpass.set_pipeline(&self.rim_pipeline);
            rpass.draw_indexed(self.ranges.rim.clone(), 0, 0..1);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth_tex"),
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
    tex.create_view(&wgpu::TextureViewDescriptor::default())
}

fn create_face_texture(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    label: &str,
) -> FaceTexture {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width: TEXTURE_SIZE,
            height: TEXTURE_SIZE,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    });
    FaceTexture {
        texture,
        bind_group,
    }
}

/// Build the coin: a short cylinder on the Y axis split into three index
/// ranges so the caps and the rim can bind different materials.
fn build_coin_mesh(
    radius: f32,
    depth: f32,
    segments: u32,
) -> (Vec<Vertex>, Vec<u32>, MeshRanges) {
    let half = depth / 2.0;
    let mut vertices: Vec<Vertex> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    // Heads cap (+Y), fan around a center vertex.
    let heads_start = indices.len() as u32;
    let center = vertices.len() as u32;
    vertices.push(Vertex {
        position: [0.0, half, 0.0],
        normal: [0.0, 1.0, 0.0],
        uv: [0.5, 0.5],
    });
    for i in 0..=segments {
        let a = i as f32 / segments as f32 * std::f32::consts::TAU;
        let (s, c) = a.sin_cos();
        vertices.push(Vertex {
            position: [c * radius, half, s * radius],
            normal: [0.0, 1.0, 0.0],
            uv: [0.5 + 0.5 * c, 0.5 + 0.5 * s],
        });
    }
    for i in 0..segments {
        indices.extend([center, center + 1 + i, center + 2 + i]);
    }
    let heads = heads_start..indices.len() as u32;

    // Tails cap (-Y); U mirrored so its label is not a mirror image.
    let tails_start = indices.len() as u32;
    let center = vertices.len() as u32;
    vertices.push(Vertex {
        position: [0.0, -half, 0.0],
        normal: [0.0, -1.0, 0.0],
        uv: [0.5, 0.5],
    });
    for i in 0..=segments {
        let a = i as f32 / segments as f32 * std::f32::consts::TAU;
        let (s, c) = a.sin_cos();
        vertices.push(Vertex {
            position: [c * radius, -half, s * radius],
            normal: [0.0, -1.0, 0.0],
            uv: [0.5 - 0.5 * c, 0.5 + 0.5 * s],
        });
    }
    for i in 0..segments {
        indices.extend([center, center + 2 + i, center + 1 + i]);
    }
    let tails = tails_start..indices.len() as u32;

    // Rim: quads between the two cap edges with outward normals.
    let rim_start = indices.len() as u32;
    let ring = vertices.len() as u32;
    for i in 0..=segments {
        let a = i as f32 / segments as f32 * std::f32::consts::TAU;
        let (s, c) = a.sin_cos();
        let u = i as f32 / segments as f32;
        vertices.push(Vertex {
            position: [c * radius, half, s * radius],
            normal: [c, 0.0, s],
            uv: [u, 0.0],
        });
        vertices.push(Vertex {
            position: [c * radius, -half, s * radius],
            normal: [c, 0.0, s],
            uv: [u, 1.0],
        });
    }
    for i in 0..segments {
        let a = ring + i * 2;
        indices.extend([a, a + 1, a + 2, a + 2, a + 1, a + 3]);
    }
    let rim = rim_start..indices.len() as u32;

    (vertices, indices, MeshRanges { heads, tails, rim })
}
