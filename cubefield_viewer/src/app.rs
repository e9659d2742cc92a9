/// Window, event loop and frame pacing.
///
/// The window, device and scene are created on the first `resumed` event.
/// Every event-loop iteration drains pending events into the input state,
/// then `about_to_wait` runs one scene frame.

use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, DeviceId, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{CursorGrabMode, Fullscreen, Window, WindowId};
use cubefield_engine::cubefield::graphics_device::GraphicsDevice;
use cubefield_engine::cubefield::input::{open_head_tracker_or_none, InputState};
use cubefield_engine::cubefield::resource::TextureCache;
use cubefield_engine::cubefield::scene::Scene;
use cubefield_engine::cubefield::{Error, Result};
use cubefield_engine::{engine_debug, engine_err, engine_info, engine_warn};
use cubefield_renderer_wgpu::cubefield::{WgpuConfig, WgpuGraphicsDevice};
use crate::config::ViewerConfig;

const SOURCE: &str = "cubefield::Viewer";

/// Light sky blue background
const CLEAR_COLOR: [f64; 4] = [0.53, 0.75, 0.92, 1.0];

/// Open the window and run until the user quits
///
/// # Errors
///
/// Whatever stopped the viewer: event loop, device or scene construction.
pub fn run(config: ViewerConfig) -> Result<()> {
    let event_loop = EventLoop::new().map_err(|e| {
        engine_err!(SOURCE, Error::InitializationFailed(format!("cannot create event loop: {}", e)))
    })?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app).map_err(|e| {
        engine_err!(SOURCE, Error::BackendError(format!("event loop stopped: {}", e)))
    })?;

    match app.failure.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct App {
    config: ViewerConfig,
    window: Option<Arc<Window>>,
    device: Option<WgpuGraphicsDevice>,
    scene: Option<Scene>,
    input: InputState,
    last_frame: Instant,
    failure: Option<Error>,
}

impl App {
    fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            window: None,
            device: None,
            scene: None,
            input: InputState::new(),
            last_frame: Instant::now(),
            failure: None,
        }
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let scene_config = &self.config.scene;
        let mut attributes = Window::default_attributes()
            .with_title(self.config.title.as_str())
            .with_inner_size(PhysicalSize::new(scene_config.width, scene_config.height));
        if self.config.fullscreen {
            attributes = attributes.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }
        let window = Arc::new(event_loop.create_window(attributes).map_err(|e| {
            engine_err!(SOURCE, Error::InitializationFailed(format!("cannot create window: {}", e)))
        })?);

        let mut device = WgpuGraphicsDevice::new(
            window.clone(),
            WgpuConfig {
                vsync: true,
                clear_color: CLEAR_COLOR,
            },
        )?;

        // Fullscreen windows are not the requested size
        let (width, height) = device.surface_size();
        let mut scene_config = scene_config.clone();
        scene_config.width = width;
        scene_config.height = height;
        let scene = Scene::build(&scene_config, &mut device, TextureCache::new())?;

        grab_cursor(&window);
        self.input.set_head_tracker(open_head_tracker_or_none(self.config.head_tracker));

        engine_info!(
            SOURCE,
            "Viewer running on {} with {} objects, {}x{}",
            device.adapter_name(),
            scene.object_count(),
            width,
            height
        );

        self.window = Some(window);
        self.device = Some(device);
        self.scene = Some(scene);
        self.last_frame = Instant::now();
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: Error) {
        self.failure = Some(err);
        event_loop.exit();
    }

    fn shutdown(&mut self) {
        if let (Some(mut scene), Some(device)) = (self.scene.take(), self.device.as_mut()) {
            scene.destroy(device);
            engine_debug!(SOURCE, "Released scene after {} frames", scene.frame_count());
        }
        self.device = None;
        self.window = None;
    }
}

/// Keep the pointer inside the window and hide it
fn grab_cursor(window: &Window) {
    let grabbed = window
        .set_cursor_grab(CursorGrabMode::Confined)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked));
    if let Err(err) = grabbed {
        engine_warn!(SOURCE, "Cannot grab the cursor: {}", err);
    }
    window.set_cursor_visible(false);
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.start(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if let WindowEvent::Focused(true) = event {
            if let Some(window) = &self.window {
                grab_cursor(window);
            }
        }
        self.input.handle_window_event(&event);
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        self.input.handle_device_event(&event);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.input.should_quit() {
            event_loop.exit();
            return;
        }
        let (Some(window), Some(device), Some(scene)) =
            (self.window.as_ref(), self.device.as_mut(), self.scene.as_mut())
        else {
            return;
        };

        if let Some((width, height)) = self.input.take_resize() {
            device.resize(width, height);
            scene.resize(width, height);
        }

        let now = Instant::now();
        let elapsed = now - self.last_frame;
        self.last_frame = now;

        self.input.poll_head_tracker(elapsed);
        let report = scene.frame(&self.input, device, elapsed);
        if let Some(title) = report.title {
            window.set_title(&title);
        }
        self.input.end_frame();
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}
