mod overlay;

use anyhow::{Context, Result};
use clap::Parser;
use egui::Context as EguiContext;
use scrollfolio_anim::Clock;
use scrollfolio_input::{InputAction, InputEffect, InputState, Viewport};
use scrollfolio_render_wgpu::{GradientMap, WgpuRenderer};
use scrollfolio_scene::{DemoConfig, FrameInput, HeaderIntro, Scene};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

/// Logical pixels scrolled per wheel notch.
const LINE_HEIGHT: f32 = 60.0;

#[derive(Parser)]
#[command(name = "scrollfolio-desktop", about = "Scroll-driven 3D portfolio demo")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Demo config (YAML); built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn key_action(key: KeyCode) -> InputAction {
    match key {
        KeyCode::PageDown | KeyCode::ArrowDown => InputAction::ScrollPages(1),
        KeyCode::PageUp | KeyCode::ArrowUp => InputAction::ScrollPages(-1),
        KeyCode::KeyN => InputAction::ToggleNormals,
        KeyCode::F1 => InputAction::ToggleDebugPanel,
        _ => InputAction::Noop,
    }
}

/// Wheel deltas are positive when scrolling up; page scroll grows downward.
fn wheel_action(delta: MouseScrollDelta, scale_factor: f64) -> InputAction {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => InputAction::ScrollBy(-y * LINE_HEIGHT),
        MouseScrollDelta::PixelDelta(pos) => {
            InputAction::ScrollBy(-(pos.y / scale_factor.max(f64::EPSILON)) as f32)
        }
    }
}

/// Application state.
struct AppState {
    scene: Scene,
    input: InputState,
    intro: HeaderIntro,
    clock: Clock,
}

impl AppState {
    fn new(config: &DemoConfig) -> Self {
        let scene = Scene::build(config);
        let viewport = Viewport::default().with_pixel_ratio_cap(config.pixel_ratio_cap);
        let input = InputState::new(viewport, scene.section_count());
        let intro = HeaderIntro::from_config(&config.headers);
        Self {
            scene,
            input,
            intro,
            clock: Clock::start(),
        }
    }

    /// Feed one action through the input state and react to its effects.
    /// Returns true when the viewport changed size.
    fn apply(&mut self, action: InputAction) -> bool {
        let mut resized = false;
        for effect in self.input.apply(action) {
            resized |= self.handle_effect(effect);
        }
        resized
    }

    fn handle_effect(&mut self, effect: InputEffect) -> bool {
        match effect {
            InputEffect::SectionChanged(change) => {
                tracing::info!(from = change.from, to = change.to, "section changed");
                self.scene.start_section_spin(change.to);
            }
            InputEffect::Resized => {
                self.scene.set_aspect(self.input.viewport().aspect());
                return true;
            }
            InputEffect::NormalsToggled(on) => self.scene.set_normals(on),
            InputEffect::DebugPanelToggled(visible) => {
                tracing::debug!(visible, "debug panel toggled");
            }
        }
        false
    }

    fn apply_panel(&mut self, changes: overlay::PanelChanges) {
        if let Some(color) = changes.material_color {
            self.scene.set_material_color(color);
        }
        if let Some(on) = changes.normals {
            if let Some(effect) = self.input.set_normals(on) {
                self.handle_effect(effect);
            }
        }
    }

    /// Scene buffer size: the logical viewport at the capped pixel ratio.
    fn drawing_size(&self) -> (u32, u32) {
        self.input.viewport().drawing_size()
    }

    fn update(&mut self) {
        let time = self.clock.tick();
        let frame = FrameInput::from_input(&self.input);
        self.scene.tick(time.delta, &frame);
        self.intro.advance(time.delta);
    }

    fn draw_ui(&self, ctx: &EguiContext) -> overlay::PanelChanges {
        overlay::draw_headers(ctx, &self.intro, &self.input, self.scene.material_color());
        overlay::draw_debug_panel(ctx, &self.scene, &self.input)
    }
}

/// Window, surface and renderers; created once the event loop resumes.
struct Gpu {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: WgpuRenderer,
    egui_winit: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl Gpu {
    fn new(event_loop: &ActiveEventLoop, state: &AppState, egui_ctx: &EguiContext) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title("Scrollfolio")
            .with_inner_size(LogicalSize::new(1280.0, 720.0));
        let window = Arc::new(event_loop.create_window(attrs)?);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("no compatible GPU adapter")?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("scrollfolio_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .context("surface reports no formats")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let gradient = GradientMap::load_or_builtin(state.scene.toon_material().gradient.as_deref());
        let renderer = WgpuRenderer::new(
            &device,
            &queue,
            surface_format,
            state.drawing_size(),
            &state.scene,
            &gradient,
        );

        let egui_winit = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        tracing::info!(
            backend = adapter.get_info().backend.to_str(),
            format = ?surface_format,
            "GPU initialized"
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            renderer,
            egui_winit,
            egui_renderer,
        })
    }

    /// The surface follows the window; the scene buffer follows the capped
    /// drawing size and is scaled up when the two differ.
    fn resize(&mut self, size: PhysicalSize<u32>, drawing_size: (u32, u32)) {
        self.config.width = size.width.max(1);
        self.config.height = size.height.max(1);
        self.surface.configure(&self.device, &self.config);
        self.renderer.resize(&self.device, drawing_size);
    }

    /// The window's current size as an input action.
    fn resize_action(&self) -> InputAction {
        let scale_factor = self.window.scale_factor();
        let logical: LogicalSize<f32> = self.window.inner_size().to_logical(scale_factor);
        InputAction::Resized {
            width: logical.width,
            height: logical.height,
            scale_factor: scale_factor as f32,
        }
    }

    fn redraw(&mut self, state: &mut AppState, egui_ctx: &EguiContext) {
        let output = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer.render(
            &self.device,
            &self.queue,
            &view,
            &state.scene,
            state.input.viewport(),
        );

        let raw_input = self.egui_winit.take_egui_input(&self.window);
        let mut changes = overlay::PanelChanges::default();
        let full_output = egui_ctx.run(raw_input, |ctx| {
            changes = state.draw_ui(ctx);
        });
        state.apply_panel(changes);

        self.egui_winit
            .handle_platform_output(&self.window, full_output.platform_output);

        let paint_jobs = egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, image_delta);
        }
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("egui_encoder"),
            });
        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();
            self.egui_renderer
                .render(&mut pass, &paint_jobs, &screen_descriptor);
        }
        self.queue.submit(std::iter::once(encoder.finish()));
        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        output.present();
    }
}

struct GpuApp {
    state: AppState,
    gpu: Option<Gpu>,
    egui_ctx: EguiContext,
}

impl GpuApp {
    fn new(config: DemoConfig) -> Self {
        Self {
            state: AppState::new(&config),
            gpu: None,
            egui_ctx: EguiContext::default(),
        }
    }

    fn sync_size(&mut self) {
        let Some(gpu) = &mut self.gpu else {
            return;
        };
        if self.state.apply(gpu.resize_action()) {
            gpu.resize(gpu.window.inner_size(), self.state.drawing_size());
        }
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() {
            return;
        }

        match Gpu::new(event_loop, &self.state, &self.egui_ctx) {
            Ok(gpu) => {
                self.gpu = Some(gpu);
                self.sync_size();
                // Startup time must not count as the first frame.
                self.state.clock = Clock::start();
            }
            Err(e) => {
                tracing::error!("failed to initialize GPU: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(gpu) = &mut self.gpu else {
            return;
        };
        if gpu.egui_winit.on_window_event(&gpu.window, &event).consumed {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                self.sync_size();
            }
            WindowEvent::CursorMoved { position, .. } => {
                let logical: winit::dpi::LogicalPosition<f32> =
                    position.to_logical(gpu.window.scale_factor());
                self.state.apply(InputAction::PointerMoved {
                    x: logical.x,
                    y: logical.y,
                });
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let action = wheel_action(delta, gpu.window.scale_factor());
                self.state.apply(action);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                self.state.apply(key_action(key));
            }
            WindowEvent::RedrawRequested => {
                self.state.update();
                gpu.redraw(&mut self.state, &self.egui_ctx);
                gpu.window.request_redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gpu) = &self.gpu {
            gpu.window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = DemoConfig::load_or_default(cli.config.as_deref())?;
    tracing::info!(sections = config.sections(), "scrollfolio-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(config);
    event_loop.run_app(&mut app)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollfolio_scene::MaterialMode;
    use winit::dpi::PhysicalPosition;

    fn state() -> AppState {
        let mut config = DemoConfig::default();
        config.particles.count = 8;
        AppState::new(&config)
    }

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(key_action(KeyCode::PageDown), InputAction::ScrollPages(1));
        assert_eq!(key_action(KeyCode::ArrowUp), InputAction::ScrollPages(-1));
        assert_eq!(key_action(KeyCode::KeyN), InputAction::ToggleNormals);
        assert_eq!(key_action(KeyCode::F1), InputAction::ToggleDebugPanel);
        assert_eq!(key_action(KeyCode::KeyQ), InputAction::Noop);
    }

    #[test]
    fn wheel_scrolls_down_for_negative_delta() {
        assert_eq!(
            wheel_action(MouseScrollDelta::LineDelta(0.0, -2.0), 1.0),
            InputAction::ScrollBy(120.0)
        );
        assert_eq!(
            wheel_action(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 80.0)), 2.0),
            InputAction::ScrollBy(-40.0)
        );
    }

    #[test]
    fn section_change_spins_target_mesh() {
        let mut state = state();
        state.apply(InputAction::ScrollPages(1));
        assert_eq!(state.input.scroll().section(), 1);
        assert!(state.scene.sections()[1].is_spinning());
        assert!(!state.scene.sections()[0].is_spinning());
    }

    #[test]
    fn resize_updates_camera_aspect() {
        let mut state = state();
        let resized = state.apply(InputAction::Resized {
            width: 800.0,
            height: 400.0,
            scale_factor: 2.0,
        });
        assert!(resized);
        assert_eq!(state.scene.rig().camera.aspect, 2.0);
        assert!(!state.apply(InputAction::ScrollBy(10.0)));
    }

    #[test]
    fn drawing_size_applies_pixel_ratio_cap() {
        let mut state = state();
        state.apply(InputAction::Resized {
            width: 1280.0,
            height: 720.0,
            scale_factor: 3.0,
        });
        assert_eq!(state.drawing_size(), (2560, 1440));

        state.apply(InputAction::Resized {
            width: 1280.0,
            height: 720.0,
            scale_factor: 1.5,
        });
        assert_eq!(state.drawing_size(), (1920, 1080));
    }

    #[test]
    fn configured_cap_limits_drawing_size() {
        let mut config = DemoConfig::default();
        config.particles.count = 8;
        config.pixel_ratio_cap = 1.0;
        let mut state = AppState::new(&config);
        state.apply(InputAction::Resized {
            width: 800.0,
            height: 600.0,
            scale_factor: 2.0,
        });
        assert_eq!(state.drawing_size(), (800, 600));
    }

    #[test]
    fn normals_toggle_from_key_and_panel() {
        let mut state = state();
        state.apply(InputAction::ToggleNormals);
        assert_eq!(state.scene.material_mode(), MaterialMode::Normal);
        state.apply_panel(overlay::PanelChanges {
            material_color: None,
            normals: Some(false),
        });
        assert_eq!(state.scene.material_mode(), MaterialMode::Toon);
        assert!(!state.input.normals_on());
    }
}
