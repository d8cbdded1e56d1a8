use std::collections::HashMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{Key, NamedKey};
use winit::window::{CursorIcon, Window, WindowId, WindowLevel};

use desktop_widgets::commands::{Cmd, PanelCursor};
use desktop_widgets::config::WidgetsConfig;
use desktop_widgets::messages::{AppMsg, Msg, PanelMsg};
use desktop_widgets::model::{AppModel, PanelId};
use desktop_widgets::motion::{PanelSize, Point, ScreenRect};
use desktop_widgets::update::update;

use super::renderer::PanelRenderer;

/// Used when winit reports no monitor at all
const FALLBACK_DISPLAY: ScreenRect = ScreenRect::new(0.0, 0.0, 1920.0, 1080.0);

struct PanelWindow {
    panel: PanelId,
    window: Rc<Window>,
    renderer: PanelRenderer,
    /// Last cursor position inside the window
    cursor: Option<PhysicalPosition<f64>>,
}

pub struct App {
    config: WidgetsConfig,
    model: Option<AppModel>,
    windows: HashMap<WindowId, PanelWindow>,
    panel_windows: HashMap<PanelId, WindowId>,
    context: Option<Context<Rc<Window>>>,
    /// Origin of the monotonic clock handed to the model
    started: Instant,
}

impl App {
    pub fn new(config: WidgetsConfig) -> Self {
        Self {
            config,
            model: None,
            windows: HashMap::new(),
            panel_windows: HashMap::new(),
            context: None,
            started: Instant::now(),
        }
    }

    fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    fn open_window(
        &mut self,
        event_loop: &ActiveEventLoop,
        panel: PanelId,
        title: &str,
        position: Point,
        size: PanelSize,
    ) -> Result<()> {
        let (x, y) = position.to_pixels();
        let attributes = Window::default_attributes()
            .with_title(title)
            .with_decorations(false)
            .with_resizable(false)
            .with_transparent(true)
            .with_window_level(WindowLevel::AlwaysOnTop)
            .with_position(PhysicalPosition::new(x, y))
            .with_inner_size(PhysicalSize::new(size.width as u32, size.height as u32));

        let window = Rc::new(event_loop.create_window(attributes)?);
        window.set_cursor(CursorIcon::Grab);

        if self.context.is_none() {
            let context = Context::new(Rc::clone(&window))
                .map_err(|e| anyhow::anyhow!("Failed to create context: {}", e))?;
            self.context = Some(context);
        }
        let context = self
            .context
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("No graphics context"))?;
        let renderer = PanelRenderer::new(Rc::clone(&window), context)?;

        let window_id = window.id();
        self.panel_windows.insert(panel, window_id);
        self.windows.insert(
            window_id,
            PanelWindow {
                panel,
                window,
                renderer,
                cursor: None,
            },
        );
        tracing::debug!(panel = panel.0, ?window_id, "window created");
        Ok(())
    }

    fn dispatch(&mut self, msg: Msg) {
        let Some(model) = self.model.as_mut() else {
            return;
        };
        if let Some(cmd) = update(model, msg) {
            self.process_cmd(cmd);
        }
    }

    fn process_cmd(&self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::MovePanel { id, position } => {
                if let Some(window) = self.window_for(id) {
                    let (x, y) = position.to_pixels();
                    window.set_outer_position(PhysicalPosition::new(x, y));
                }
            }
            Cmd::PanelSettled { id, position } => {
                tracing::debug!(panel = id.0, x = position.x, y = position.y, "panel at rest");
            }
            Cmd::SetCursor { id, cursor } => {
                if let Some(window) = self.window_for(id) {
                    let icon = match cursor {
                        PanelCursor::Grab => CursorIcon::Grab,
                        PanelCursor::Grabbing => CursorIcon::Grabbing,
                    };
                    window.set_cursor(icon);
                }
            }
            Cmd::Redraw { id } => {
                if let Some(window) = self.window_for(id) {
                    window.request_redraw();
                }
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    fn window_for(&self, id: PanelId) -> Option<&Rc<Window>> {
        self.panel_windows
            .get(&id)
            .and_then(|window_id| self.windows.get(window_id))
            .map(|w| &w.window)
    }

    /// Cursor position inside `window_id` converted to screen coordinates
    fn screen_pointer(&self, window_id: WindowId) -> Option<(PanelId, Point)> {
        let entry = self.windows.get(&window_id)?;
        let local = entry.cursor?;
        let panel = self.model.as_ref()?.panel(entry.panel)?;
        let origin = entry.window.inner_position().ok();
        Some((entry.panel, to_screen(origin, panel.position(), local)))
    }

    fn handle_pointer_button(&mut self, window_id: WindowId, state: ElementState) {
        let Some((panel, pointer)) = self.screen_pointer(window_id) else {
            return;
        };
        let now = self.now_ms();
        let msg = match state {
            ElementState::Pressed => Msg::pointer_down(panel, pointer.x, pointer.y, now),
            ElementState::Released => Msg::pointer_up(panel, pointer.x, pointer.y, now),
        };
        self.dispatch(msg);
    }

    fn refresh_display(&mut self, event_loop: &ActiveEventLoop) {
        let rect = display_rect(event_loop);
        self.dispatch(Msg::App(AppMsg::DisplayGeometryChanged(rect)));
    }

    fn redraw(&mut self, window_id: WindowId) {
        let Some(model) = self.model.as_ref() else {
            return;
        };
        if let Some(entry) = self.windows.get_mut(&window_id) {
            if let Err(e) = entry.renderer.render(&model.theme) {
                tracing::error!(panel = entry.panel.0, "render failed: {}", e);
            }
        }
    }

    #[cfg(debug_assertions)]
    fn dump_state(&self) {
        let Some(model) = self.model.as_ref() else {
            return;
        };
        let dump = crate::debug_dump::StateDump::from_model(model, self.now_ms());
        match dump.save_to_file() {
            Ok(path) => tracing::info!("State dumped to {}", path.display()),
            Err(e) => tracing::error!("Failed to dump state: {}", e),
        }
    }
}

/// Convert a window-local cursor position to screen coordinates
///
/// Cursor positions are relative to where the window really is, which lags
/// behind the model while a `set_outer_position` is pending. The model
/// position is only used when the platform can't report the window's
/// position (Wayland).
fn to_screen(
    window_origin: Option<PhysicalPosition<i32>>,
    model_origin: Point,
    local: PhysicalPosition<f64>,
) -> Point {
    let (x, y) = match window_origin {
        Some(origin) => (origin.x, origin.y),
        None => model_origin.to_pixels(),
    };
    Point::new(x as f64 + local.x, y as f64 + local.y)
}

/// Primary monitor rectangle in physical pixels
fn display_rect(event_loop: &ActiveEventLoop) -> ScreenRect {
    let monitor = event_loop
        .primary_monitor()
        .or_else(|| event_loop.available_monitors().next());

    match monitor {
        Some(monitor) => {
            let position = monitor.position();
            let size = monitor.size();
            ScreenRect::new(
                position.x as f64,
                position.y as f64,
                size.width as f64,
                size.height as f64,
            )
        }
        None => {
            tracing::warn!("No monitor reported, assuming {:?}", FALLBACK_DISPLAY);
            FALLBACK_DISPLAY
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.model.is_some() {
            return;
        }

        let model = AppModel::from_config(&self.config, display_rect(event_loop));
        let panels: Vec<_> = model
            .panels
            .values()
            .map(|p| (p.id, p.title(), p.position(), p.size))
            .collect();
        self.model = Some(model);

        for (id, title, position, size) in panels {
            if let Err(e) = self.open_window(event_loop, id, title, position, size) {
                tracing::error!(panel = id.0, "Failed to open panel window: {}", e);
                if let Some(model) = self.model.as_mut() {
                    model.remove_panel(id);
                }
            }
        }

        if self.windows.is_empty() {
            tracing::error!("No panel windows could be opened");
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                let Some(entry) = self.windows.get_mut(&window_id) else {
                    return;
                };
                entry.cursor = Some(position);
                if let Some((panel, pointer)) = self.screen_pointer(window_id) {
                    let now = self.now_ms();
                    self.dispatch(Msg::pointer_move(panel, pointer.x, pointer.y, now));
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => self.handle_pointer_button(window_id, state),
            WindowEvent::Resized(size) => {
                let Some(entry) = self.windows.get_mut(&window_id) else {
                    return;
                };
                if let Err(e) = entry.renderer.resize(size.width, size.height) {
                    tracing::error!(panel = entry.panel.0, "resize failed: {}", e);
                }
                let panel = entry.panel;
                self.dispatch(Msg::Panel(
                    panel,
                    PanelMsg::Resized {
                        width: size.width as f64,
                        height: size.height as f64,
                    },
                ));
            }
            WindowEvent::ScaleFactorChanged { .. } => self.refresh_display(event_loop),
            WindowEvent::RedrawRequested => self.redraw(window_id),
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match event.logical_key {
                    Key::Named(NamedKey::Escape) => event_loop.exit(),
                    #[cfg(debug_assertions)]
                    Key::Named(NamedKey::F7) => self.dump_state(),
                    _ => {}
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let animating = self.model.as_ref().is_some_and(AppModel::is_animating);
        if animating {
            let now = self.now_ms();
            self.dispatch(Msg::tick(now));
        }

        let flow = match self.model.as_ref().and_then(AppModel::next_deadline_ms) {
            Some(deadline) => {
                let offset = Duration::from_secs_f64(deadline.max(0.0) / 1000.0);
                ControlFlow::WaitUntil(self.started + offset)
            }
            None => ControlFlow::Wait,
        };
        event_loop.set_control_flow(flow);
    }
}
