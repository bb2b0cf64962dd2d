//! Demo viewer binary for the swivel drag-to-rotate camera controller.

use std::path::Path;
use std::time::Duration;

use swivel::camera::{Orientation, PanoController};
use swivel::input::{InputEvent, InputProcessor};
use swivel::util::SystemClock;
use swivel::{Options, SwivelError};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

/// Redraw cadence while coasting.
const COAST_FRAME: Duration = Duration::from_millis(16);

struct ViewerApp {
    window: Option<Window>,
    input: InputProcessor,
    controller: PanoController<Orientation>,
    error: Option<SwivelError>,
}

impl ViewerApp {
    fn new(options: Options) -> Self {
        Self {
            window: None,
            input: InputProcessor::new(),
            controller: PanoController::new(
                Orientation::default(),
                options,
                SystemClock::new(),
            ),
            error: None,
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn refresh_title(&self) {
        let Some(window) = &self.window else {
            return;
        };
        let o = self.controller.sink();
        window.set_title(&format!(
            "swivel: yaw {:.1}° pitch {:.1}°",
            o.yaw.to_degrees(),
            o.pitch.to_degrees()
        ));
    }

    fn translate(event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(InputEvent::CursorMoved {
                    x: position.x,
                    y: position.y,
                })
            }
            WindowEvent::CursorLeft { .. } => Some(InputEvent::CursorLeft),
            WindowEvent::MouseInput { state, button, .. } => {
                Some(InputEvent::MouseButton {
                    button: (*button).into(),
                    pressed: *state == ElementState::Pressed,
                })
            }
            _ => None,
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = Window::default_attributes().with_title("swivel");
        match event_loop.create_window(attrs) {
            Ok(window) => {
                self.window = Some(window);
                self.refresh_title();
            }
            Err(e) => {
                self.error = Some(SwivelError::Viewer(e.to_string()));
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
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => self.refresh_title(),
            _ => {
                let pointer = Self::translate(&event)
                    .and_then(|input| self.input.handle_event(input));
                if let Some(pointer) = pointer {
                    self.controller.handle_pointer(pointer);
                    self.request_redraw();
                }
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.controller.update() > 0 {
            self.request_redraw();
        }
        if self.controller.is_coasting() {
            event_loop.set_control_flow(ControlFlow::wait_duration(COAST_FRAME));
        } else {
            event_loop.set_control_flow(ControlFlow::Wait);
        }
    }
}

/// Load the preset at `path`, writing the defaults there first if it does
/// not exist yet.
fn load_or_create(path: &Path) -> Result<Options, SwivelError> {
    if let Some(dir) = path.parent().filter(|d| d.is_dir()) {
        let presets = Options::list_presets(dir);
        if !presets.is_empty() {
            log::info!("Presets in '{}': {}", dir.display(), presets.join(", "));
        }
    }

    if path.exists() {
        let options = Options::load(path)?;
        log::info!("Loaded options from '{}'", path.display());
        Ok(options)
    } else {
        let options = Options::default();
        options.save(path)?;
        log::info!("Wrote default options to '{}'", path.display());
        Ok(options)
    }
}

fn run() -> Result<(), SwivelError> {
    let options = match std::env::args().nth(1) {
        Some(path) => load_or_create(Path::new(&path))?,
        None => Options::default(),
    };

    let event_loop =
        EventLoop::new().map_err(|e| SwivelError::Viewer(e.to_string()))?;
    let mut app = ViewerApp::new(options);
    event_loop
        .run_app(&mut app)
        .map_err(|e| SwivelError::Viewer(e.to_string()))?;
    app.error.map_or(Ok(()), Err)
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
