//! Storefront - Walkable 3D Shop Demo
//!
//! Run with: `cargo run --bin storefront [config.json]`
//!
//! Controls:
//! - WASD / arrow keys: Walk
//! - Left mouse drag: Rotate the view around the avatar
//! - Scroll wheel: Zoom (scrubs the promo banner while hovering it)
//! - Left click: Add a hovered product to the cart / toggle the door
//! - E: Toggle the entrance door
//! - C: Check out the cart
//! - R: Reset the camera
//! - ESC: Exit

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode as WinitKey, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use storewalk_engine::camera::{OrbitCamera, get_ray_direction};
use storewalk_engine::input::{InputState, KeyCode, ScrollDelta};
use storewalk_engine::render::{GpuContext, GpuContextConfig, SceneUniforms};
use storewalk_engine::store::{
    CheckoutError, CheckoutOutcome, DemoPaymentProvider, InMemoryBackend, Mesh, Product,
    StoreBackend, StoreConfig, StoreScene,
};

const STORE_SHADER_SOURCE: &str = include_str!("../../shaders/store.wgsl");

/// Clear color behind the store shell (soft daylight).
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.72,
    g: 0.78,
    b: 0.86,
    a: 1.0,
};

// ============================================================================
// GPU RESOURCES
// ============================================================================

/// GPU state for the storefront window: one pipeline, one uniform buffer,
/// a static buffer pair for the store shell and a growable dynamic pair
/// for the per-frame geometry.
struct StoreGpu {
    context: GpuContext,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,

    static_vertex_buffer: wgpu::Buffer,
    static_index_buffer: wgpu::Buffer,
    static_index_count: u32,

    dynamic_vertex_buffer: wgpu::Buffer,
    dynamic_index_buffer: wgpu::Buffer,
    dynamic_vertex_capacity: usize,
    dynamic_index_capacity: usize,
    dynamic_index_count: u32,
}

impl StoreGpu {
    fn new(window: Arc<Window>, static_mesh: &Mesh) -> Self {
        let context = GpuContext::new(window, GpuContextConfig::default());

        let uniforms = SceneUniforms::default();
        let uniform_buffer = context.create_uniform_buffer("Scene Uniforms", &uniforms);

        let bind_group_layout =
            context
                .device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("Scene Bind Group Layout"),
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

        let bind_group = context
            .device
            .create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Scene Bind Group"),
                layout: &bind_group_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                }],
            });

        let pipeline =
            context.create_mesh_pipeline("Store", STORE_SHADER_SOURCE, &bind_group_layout);

        let static_vertex_buffer =
            context.create_vertex_buffer("Static Vertices", &static_mesh.vertices);
        let static_index_buffer =
            context.create_index_buffer("Static Indices", &static_mesh.indices);

        // Initial dynamic capacity; grows if the scene ever outgrows it
        let dynamic_vertex_capacity = 4096;
        let dynamic_index_capacity = 8192;
        let dynamic_vertex_buffer = context.create_dynamic_vertex_buffer(
            "Dynamic Vertices",
            (dynamic_vertex_capacity * std::mem::size_of::<storewalk_engine::store::Vertex>())
                as u64,
        );
        let dynamic_index_buffer = context.create_dynamic_index_buffer(
            "Dynamic Indices",
            (dynamic_index_capacity * std::mem::size_of::<u32>()) as u64,
        );

        Self {
            context,
            pipeline,
            uniform_buffer,
            bind_group,
            static_vertex_buffer,
            static_index_buffer,
            static_index_count: static_mesh.indices.len() as u32,
            dynamic_vertex_buffer,
            dynamic_index_buffer,
            dynamic_vertex_capacity,
            dynamic_index_capacity,
            dynamic_index_count: 0,
        }
    }

    /// Upload the per-frame dynamic mesh, growing the buffers if needed.
    fn upload_dynamic(&mut self, mesh: &Mesh) {
        if mesh.vertices.len() > self.dynamic_vertex_capacity
            || mesh.indices.len() > self.dynamic_index_capacity
        {
            self.dynamic_vertex_capacity = mesh.vertices.len().next_power_of_two();
            self.dynamic_index_capacity = mesh.indices.len().next_power_of_two();
            log::info!(
                "gpu: growing dynamic buffers to {} verts / {} indices",
                self.dynamic_vertex_capacity,
                self.dynamic_index_capacity
            );
            self.dynamic_vertex_buffer = self.context.create_dynamic_vertex_buffer(
                "Dynamic Vertices",
                (self.dynamic_vertex_capacity
                    * std::mem::size_of::<storewalk_engine::store::Vertex>())
                    as u64,
            );
            self.dynamic_index_buffer = self.context.create_dynamic_index_buffer(
                "Dynamic Indices",
                (self.dynamic_index_capacity * std::mem::size_of::<u32>()) as u64,
            );
        }

        self.context
            .write_buffer(&self.dynamic_vertex_buffer, &mesh.vertices);
        self.context
            .write_buffer(&self.dynamic_index_buffer, &mesh.indices);
        self.dynamic_index_count = mesh.indices.len() as u32;
    }
}

// ============================================================================
// APPLICATION
// ============================================================================

/// The storefront application: window, GPU state, input, camera, scene,
/// and the commerce collaborators.
struct StorefrontApp {
    window: Option<Arc<Window>>,
    gpu: Option<StoreGpu>,

    scene: StoreScene,
    camera: OrbitCamera,
    input: InputState,

    payment: DemoPaymentProvider,
    backend: InMemoryBackend,

    start_time: Instant,
    last_frame: Instant,
}

impl StorefrontApp {
    fn new(scene: StoreScene, backend: InMemoryBackend) -> Self {
        Self {
            window: None,
            gpu: None,
            scene,
            camera: OrbitCamera::new(1280.0 / 720.0),
            input: InputState::new(),
            payment: DemoPaymentProvider::approving(),
            backend,
            start_time: Instant::now(),
            last_frame: Instant::now(),
        }
    }

    /// Map a winit key code onto the engine's generic key codes.
    fn map_key(key: WinitKey) -> KeyCode {
        match key {
            WinitKey::KeyW => KeyCode::W,
            WinitKey::KeyA => KeyCode::A,
            WinitKey::KeyS => KeyCode::S,
            WinitKey::KeyD => KeyCode::D,
            WinitKey::ArrowUp => KeyCode::ArrowUp,
            WinitKey::ArrowDown => KeyCode::ArrowDown,
            WinitKey::ArrowLeft => KeyCode::ArrowLeft,
            WinitKey::ArrowRight => KeyCode::ArrowRight,
            WinitKey::KeyE => KeyCode::E,
            WinitKey::KeyC => KeyCode::C,
            WinitKey::KeyR => KeyCode::R,
            WinitKey::Escape => KeyCode::Escape,
            _ => KeyCode::Unknown,
        }
    }

    /// Handle a non-movement action key press.
    fn handle_action_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::E => self.scene.door.toggle(),
            KeyCode::C => self.run_checkout(),
            KeyCode::R => self.camera.reset(),
            _ => {}
        }
    }

    fn run_checkout(&mut self) {
        match self
            .scene
            .checkout(&mut self.payment, &mut self.backend)
        {
            Ok(CheckoutOutcome::Paid) => {
                log::info!("checkout complete; thanks for shopping");
            }
            Ok(CheckoutOutcome::Declined) => {
                log::warn!("payment declined; cart kept");
            }
            Err(CheckoutError::EmptyOrder) => {
                log::info!("cart is empty; click a product display first");
            }
            Err(e) => {
                log::error!("checkout failed: {e}");
            }
        }
    }

    /// Recompute the hover target from the current cursor position.
    fn update_hover(&mut self) {
        let Some(uv) = self.input.mouse.normalized_position() else {
            self.scene.clear_hover();
            return;
        };
        let target = self.scene.avatar.position;
        let origin = self.camera.eye_position(target);
        let dir = get_ray_direction(
            origin,
            target,
            uv,
            self.camera.aspect,
            self.camera.fov.to_radians(),
        );
        self.scene.update_hover(origin, dir);
    }

    /// One frame: advance the scene, refresh hover, upload GPU data, draw.
    fn render_frame(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.scene
            .update(&self.input.keyboard.movement, self.camera.yaw(), dt);
        self.update_hover();

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };

        // Per-frame uniforms
        let target = self.scene.avatar.position;
        let eye = self.camera.eye_position(target);
        let (width, height) = gpu.context.dimensions();
        let uniforms = SceneUniforms {
            view_proj: self.camera.view_projection_matrix(target).to_cols_array_2d(),
            camera_pos: [eye.x, eye.y, eye.z, 1.0],
            time: self.start_time.elapsed().as_secs_f32(),
            _padding: 0.0,
            resolution: [width as f32, height as f32],
        };
        gpu.context
            .queue
            .write_buffer(&gpu.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        gpu.upload_dynamic(&self.scene.dynamic_mesh());

        // Acquire the frame, recovering from a lost/outdated surface
        let output = match gpu.context.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = gpu.context.dimensions();
                gpu.context.resize(w, h);
                return;
            }
            Err(e) => {
                log::warn!("frame skipped: {e}");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder =
            gpu.context
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Store Encoder"),
                });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Store Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &gpu.context.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_pipeline(&gpu.pipeline);
            pass.set_bind_group(0, &gpu.bind_group, &[]);

            pass.set_vertex_buffer(0, gpu.static_vertex_buffer.slice(..));
            pass.set_index_buffer(gpu.static_index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..gpu.static_index_count, 0, 0..1);

            if gpu.dynamic_index_count > 0 {
                pass.set_vertex_buffer(0, gpu.dynamic_vertex_buffer.slice(..));
                pass.set_index_buffer(
                    gpu.dynamic_index_buffer.slice(..),
                    wgpu::IndexFormat::Uint32,
                );
                pass.draw_indexed(0..gpu.dynamic_index_count, 0, 0..1);
            }
        }

        gpu.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

// ============================================================================
// APPLICATION HANDLER
// ============================================================================

impl ApplicationHandler for StorefrontApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = WindowAttributes::default()
                .with_title("Storewalk")
                .with_inner_size(PhysicalSize::new(1280, 720));
            let window = Arc::new(
                event_loop
                    .create_window(attrs)
                    .expect("Failed to create window"),
            );
            self.camera.resize(1280, 720);
            let static_mesh = self.scene.static_mesh();
            self.gpu = Some(StoreGpu::new(Arc::clone(&window), &static_mesh));
            self.window = Some(window);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    let pressed = event.state == ElementState::Pressed;
                    if key == WinitKey::Escape && pressed {
                        event_loop.exit();
                        return;
                    }
                    let mapped = Self::map_key(key);
                    let was_movement = self.input.keyboard.handle_key(mapped, pressed);
                    if !was_movement && pressed && !event.repeat {
                        self.handle_action_key(mapped);
                    }
                }
            }

            // -- Left mouse: interactive targets get first dibs, then the
            //    orbit drag --
            WindowEvent::MouseInput { button, state, .. } => {
                let pressed = state == ElementState::Pressed;
                self.input
                    .mouse
                    .set_button(map_mouse_button(button), pressed);

                if button == MouseButton::Left {
                    if pressed {
                        if self.scene.handle_click().is_none() {
                            self.camera.begin_drag();
                        }
                    } else {
                        self.camera.end_drag();
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let (width, height) = self
                    .gpu
                    .as_ref()
                    .map(|g| g.context.dimensions())
                    .unwrap_or((1280, 720));
                self.input
                    .mouse
                    .set_position(position.x, position.y, width, height);
                self.camera
                    .handle_cursor_move(position.x as f32, position.y as f32);
            }

            WindowEvent::CursorEntered { .. } => self.input.mouse.enter_window(),

            WindowEvent::CursorLeft { .. } => {
                self.input.mouse.leave_window();
                self.camera.end_drag();
                self.scene.clear_hover();
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(x, y) => ScrollDelta::from_lines(x, y),
                    MouseScrollDelta::PixelDelta(pos) => ScrollDelta::from_pixels(pos.x, pos.y),
                };
                // The banner consumes scroll while hovered, like an
                // embedded page; otherwise the wheel zooms
                if self.scene.banner_hovered() {
                    self.scene.banner.scroll(scroll.y);
                } else {
                    self.camera.handle_scroll(scroll.y);
                }
            }

            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.context.resize(new_size.width, new_size.height);
                }
                self.camera.resize(new_size.width, new_size.height);
            }

            WindowEvent::RedrawRequested => {
                self.render_frame();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn map_mouse_button(button: MouseButton) -> storewalk_engine::input::MouseButton {
    match button {
        MouseButton::Left => storewalk_engine::input::MouseButton::Left,
        MouseButton::Middle => storewalk_engine::input::MouseButton::Middle,
        MouseButton::Right => storewalk_engine::input::MouseButton::Right,
        MouseButton::Back => storewalk_engine::input::MouseButton::Other(3),
        MouseButton::Forward => storewalk_engine::input::MouseButton::Other(4),
        MouseButton::Other(n) => storewalk_engine::input::MouseButton::Other(n),
    }
}

// ============================================================================
// MAIN
// ============================================================================

/// Demo catalog standing in for the hosted backend's product table.
fn demo_catalog() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Canvas Sneaker".into(),
            price_cents: 5900,
        },
        Product {
            id: 2,
            name: "Wool Beanie".into(),
            price_cents: 2400,
        },
        Product {
            id: 3,
            name: "Daypack".into(),
            price_cents: 8900,
        },
        Product {
            id: 4,
            name: "Steel Bottle".into(),
            price_cents: 3200,
        },
    ]
}

fn main() {
    env_logger::init();

    println!("===========================================");
    println!("   Storewalk \u{2014} 3D Storefront");
    println!("===========================================");
    println!();
    println!("Controls:");
    println!("  WASD / arrows: Walk");
    println!("  Left mouse drag: Rotate view");
    println!("  Scroll wheel: Zoom (scrubs the promo banner while hovering)");
    println!("  Left click: Add hovered product to cart / toggle door");
    println!("  E: Toggle entrance door");
    println!("  C: Check out");
    println!("  R: Reset camera");
    println!("  ESC: Exit");
    println!();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = StoreConfig::load_or_default(config_path.as_deref());

    let backend = InMemoryBackend::new(demo_catalog());
    let catalog = backend
        .fetch_products()
        .expect("in-memory backend cannot fail");
    let scene = StoreScene::new(config, catalog);

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = StorefrontApp::new(scene, backend);
    event_loop
        .run_app(&mut app)
        .expect("Event loop terminated abnormally");
}
