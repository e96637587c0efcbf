//! ArtSpace Gallery - First-Person Puzzle Demo
//!
//! Run with: `cargo run --bin gallery`
//!
//! Controls:
//! - WASD: Walk
//! - Mouse: Look around
//! - Shift: Run
//! - K: Rotate closest artwork counterclockwise by one step
//! - L: Rotate closest artwork clockwise by one step
//! - Space: Pull the lever to check your answer
//! - ESC: Exit
//!
//! Win condition: rotate all artworks back to vertical (0 degrees), then
//! pull the lever. A wrong pull flashes the red bulb and the lever drops
//! back; the right pull locks it green and plays out the celebration.
//!
//! This binary is only the host: window, cursor grab, raw input, and the
//! frame loop. All simulation lives in `artspace_engine`; draw calls and
//! audio playback are out of scope here, so the window stays blank and
//! cues land in the log.

use std::time::Instant;

use glam::Vec2;
use log::{error, info};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, DeviceId, ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{CursorGrabMode, Window, WindowAttributes, WindowId};

use artspace_engine::game::config::{GalleryAction, GalleryConfig, InputConfig};
use artspace_engine::game::{GalleryScene, LogSink, RotateDirection, SceneStatus, SoundSink};
use artspace_engine::input::{FrameInput, MovementKeys};

/// Optional layout override next to the executable's working directory.
const CONFIG_PATH: &str = "gallery.json";

struct GalleryApp {
    window: Option<Window>,
    scene: GalleryScene,
    bindings: InputConfig,
    keys: MovementKeys,
    pointer_delta: Vec2,
    last_frame: Instant,
    sound: LogSink,
}

impl GalleryApp {
    fn new(scene: GalleryScene) -> Self {
        Self {
            window: None,
            scene,
            bindings: InputConfig::default(),
            keys: MovementKeys::new(),
            pointer_delta: Vec2::ZERO,
            last_frame: Instant::now(),
            sound: LogSink,
        }
    }

    /// Advance one frame: measure dt, hand the scene its input snapshot,
    /// flush sound cues, and exit once the scene reports itself done.
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        let input = FrameInput {
            look_delta: std::mem::take(&mut self.pointer_delta),
            keys: self.keys,
        };
        self.scene.update(dt, &input);

        for cue in self.scene.drain_sound_cues() {
            self.sound.play(cue);
        }

        if self.scene.status() == SceneStatus::Exited {
            event_loop.exit();
        }
    }

    fn handle_action(
        &mut self,
        action: GalleryAction,
        pressed: bool,
        event_loop: &ActiveEventLoop,
    ) {
        // Held-state movement keys go to the key snapshot
        if let Some(key) = InputConfig::engine_key(action) {
            self.keys.handle_key(key, pressed);
            return;
        }

        // Discrete actions fire on press only
        if !pressed {
            return;
        }
        match action {
            GalleryAction::RotateCcw => {
                self.scene
                    .on_rotate_command(RotateDirection::CounterClockwise);
            }
            GalleryAction::RotateCw => {
                self.scene.on_rotate_command(RotateDirection::Clockwise);
            }
            GalleryAction::ActivateLever => self.scene.on_activate_lever(),
            GalleryAction::Exit => event_loop.exit(),
            _ => {}
        }
    }
}

impl ApplicationHandler for GalleryApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title("ArtSpace - Gallery Puzzle")
            .with_inner_size(PhysicalSize::new(1280, 720));
        match event_loop.create_window(attrs) {
            Ok(window) => {
                // FPS-style look wants a locked pointer; not every
                // platform supports it, confinement is the fallback
                if window.set_cursor_grab(CursorGrabMode::Locked).is_err() {
                    let _ = window.set_cursor_grab(CursorGrabMode::Confined);
                }
                window.set_cursor_visible(false);
                self.window = Some(window);
            }
            Err(err) => {
                error!("window creation failed: {err}");
                event_loop.exit();
            }
        }
        self.last_frame = Instant::now();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                if let PhysicalKey::Code(code) = event.physical_key
                    && let Some(action) = self.bindings.classify_key(code)
                {
                    self.handle_action(action, event.state == ElementState::Pressed, event_loop);
                }
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.pointer_delta += Vec2::new(delta.0 as f32, delta.1 as f32);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.frame(event_loop);
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn print_controls() {
    info!("ArtSpace Room & Camera Demo");
    info!("Controls:");
    info!("  WASD - Move");
    info!("  Mouse - Look around");
    info!("  Shift - Run");
    info!("  K - Rotate closest artwork counterclockwise");
    info!("  L - Rotate closest artwork clockwise");
    info!("  Space - Pull the lever to check your answer");
    info!("  ESC - Exit");
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match GalleryConfig::load_from_path(CONFIG_PATH) {
        Ok(config) => {
            info!("loaded gallery config from {CONFIG_PATH}");
            config
        }
        Err(err) => {
            info!("using built-in gallery layout ({err:#})");
            GalleryConfig::default()
        }
    };

    print_controls();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GalleryApp::new(GalleryScene::new(config));
    event_loop.run_app(&mut app)?;
    Ok(())
}
