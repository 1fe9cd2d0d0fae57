use std::rc::Rc;

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::monitor::MonitorHandle;
use winit::window::{CursorIcon, Window, WindowId, WindowLevel};

use pixruler::commands::{Cmd, CursorShape};
use pixruler::config::RulerConfig;
use pixruler::interaction::Controllers;
use pixruler::messages::Msg;
use pixruler::model::{Point, RulerModel};
use pixruler::units::{Ppi, PpiTable, DEFAULT_PPI};
use pixruler::update::update;
use pixruler::view::{load_font, Renderer, TileSet};

use super::input::handle_key;
use super::mouse::MouseTracker;

/// Where a ruler opens when no position was saved
const DEFAULT_ORIGIN: Point = Point::new(100, 100);

pub struct App {
    model: RulerModel,
    config: RulerConfig,
    controllers: Controllers,
    tiles: TileSet,
    mouse: MouseTracker,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    /// Monitors in PPI-table order (table entry `i + 1`)
    monitors: Vec<MonitorHandle>,
    captured: bool,
    quit_requested: bool,
}

impl App {
    pub fn new(config: RulerConfig) -> Self {
        let origin = config
            .window
            .map(|w| Point::new(w.x, w.y))
            .unwrap_or(DEFAULT_ORIGIN);
        let model = RulerModel::new(config.to_settings(), PpiTable::default(), origin);
        let tiles = TileSet::load(&config.tiles);

        Self {
            model,
            config,
            controllers: Controllers::new(),
            tiles,
            mouse: MouseTracker::default(),
            renderer: None,
            window: None,
            context: None,
            monitors: Vec::new(),
            captured: false,
            quit_requested: false,
        }
    }

    /// One entry per monitor after the 96×96 fallback
    fn build_ppi_table(&mut self, event_loop: &ActiveEventLoop) {
        self.monitors = event_loop.available_monitors().collect();
        let fixed = self.config.ppi_override.map(Ppi::from);
        let entries = self.monitors.iter().map(|monitor| {
            fixed.unwrap_or_else(|| {
                let scale = monitor.scale_factor();
                Ppi::new(DEFAULT_PPI * scale, DEFAULT_PPI * scale)
            })
        });
        self.model.ppi = PpiTable::new(Ppi::default(), entries);
        tracing::debug!(
            "PPI table: {} monitors, override {:?}",
            self.monitors.len(),
            self.config.ppi_override
        );
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        self.build_ppi_table(event_loop);

        let rect = self.model.window.rect;
        let level = if self.model.settings.always_on_top {
            WindowLevel::AlwaysOnTop
        } else {
            WindowLevel::Normal
        };
        let window_attributes = Window::default_attributes()
            .with_title("pixruler")
            .with_decorations(false)
            .with_inner_size(PhysicalSize::new(rect.width as u32, rect.height as u32))
            .with_position(PhysicalPosition::new(rect.x, rect.y))
            .with_window_level(level);

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create softbuffer context: {}", e))?;

        let font = load_font(self.config.font_path.as_deref());
        let renderer = Renderer::new(Rc::clone(&window), &context, font, self.config.font_size)?;

        // Wayland never reports the window position
        let tracks_window = window.inner_position().is_ok();
        self.controllers.markers.set_tracks_window(tracks_window);
        if !tracks_window {
            tracing::info!("Window position unavailable; window system moves the ruler");
        }

        self.renderer = Some(renderer);
        self.window = Some(window);
        self.context = Some(context);

        let display_index = self.current_display();
        self.model.display = display_index;
        tracing::info!(
            "Ruler window created at {:?} on display {}",
            rect,
            display_index
        );
        Ok(())
    }

    /// PPI-table index of the monitor the window is on (0 if unknown)
    fn current_display(&self) -> usize {
        self.window
            .as_ref()
            .and_then(|w| w.current_monitor())
            .and_then(|m| self.monitors.iter().position(|known| *known == m))
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    /// Client-area origin in screen pixels
    fn screen_origin(&self) -> Point {
        self.window
            .as_ref()
            .and_then(|w| w.inner_position().ok())
            .map(|p| Point::new(p.x, p.y))
            .unwrap_or_else(|| self.model.window.rect.origin())
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::CloseRequested => update(&mut self.model, Msg::Close),
            WindowEvent::Resized(size) => {
                let maximized = self.window.as_ref().is_some_and(|w| w.is_maximized());
                update(&mut self.model, Msg::SetMaximized(maximized));
                update(
                    &mut self.model,
                    Msg::WindowResized {
                        width: size.width as i32,
                        height: size.height as i32,
                    },
                )
            }
            WindowEvent::Moved(position) => {
                update(
                    &mut self.model,
                    Msg::WindowMoved(Point::new(position.x, position.y)),
                );
                let display_index = self.current_display();
                update(&mut self.model, Msg::DisplayChanged(display_index))
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                let display_index = self.current_display();
                update(&mut self.model, Msg::DisplayChanged(display_index)).or(Some(Cmd::Redraw))
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return None;
                }
                let msg = handle_key(&self.model, &event.logical_key)?;
                update(&mut self.model, msg)
            }
            WindowEvent::CursorMoved { .. }
            | WindowEvent::CursorEntered { .. }
            | WindowEvent::CursorLeft { .. }
            | WindowEvent::MouseInput { .. } => {
                let origin = self.screen_origin();
                let mouse_event = self.mouse.translate(event, origin)?;
                self.controllers
                    .dispatch(&mut self.model, &mouse_event)
                    .into_cmd()
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render error: {}", e);
                }
                None
            }
            _ => None,
        }
    }

    fn render(&mut self) -> Result<()> {
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&self.model, &self.tiles)?;
        }
        Ok(())
    }

    fn save_config(&mut self) {
        self.config
            .capture(&self.model.settings, self.model.window.rect.origin());
        if let Err(e) = self.config.save() {
            tracing::warn!("{}", e);
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::Redraw => {}
            Cmd::SetWindowRect(rect) => {
                let Some(window) = &self.window else { return };
                window.set_outer_position(PhysicalPosition::new(rect.x, rect.y));
                let size = PhysicalSize::new(rect.width.max(1) as u32, rect.height.max(1) as u32);
                if window.inner_size() != size {
                    // None means the resize is applied asynchronously
                    let _ = window.request_inner_size(size);
                }
            }
            Cmd::SetCursor(shape) => {
                let Some(window) = &self.window else { return };
                window.set_cursor(match shape {
                    CursorShape::Default => CursorIcon::Default,
                    CursorShape::ResizeNs => CursorIcon::NsResize,
                    CursorShape::ResizeEw => CursorIcon::EwResize,
                });
            }
            // Pointer events keep arriving while a button is held, so capture
            // is bookkeeping only
            Cmd::CaptureMouse => {
                tracing::debug!("Mouse captured");
                self.captured = true;
            }
            Cmd::ReleaseMouse => {
                tracing::debug!("Mouse released");
                self.captured = false;
            }
            Cmd::DragWindow => {
                let Some(window) = &self.window else { return };
                if let Err(e) = window.drag_window() {
                    tracing::warn!("Failed to start window drag: {}", e);
                }
            }
            Cmd::SetAlwaysOnTop(on_top) => {
                let Some(window) = &self.window else { return };
                window.set_window_level(if on_top {
                    WindowLevel::AlwaysOnTop
                } else {
                    WindowLevel::Normal
                });
            }
            Cmd::ShowContextMenu { x, y } => {
                tracing::info!(
                    "Menu requested at ({}, {}): position {:?}, units {:?}, on top {}. \
                     Use 1-4, P/C/I/A, T, +/- and Q",
                    x,
                    y,
                    self.model.position(),
                    self.model.units(),
                    self.model.always_on_top()
                );
            }
            Cmd::SaveConfig => self.save_config(),
            Cmd::Quit => self.quit_requested = true,
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                tracing::error!("Failed to create ruler window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let is_ours = self.window.as_ref().is_some_and(|w| w.id() == window_id);
        if !is_ours {
            return;
        }

        if let Some(cmd) = self.handle_event(&event) {
            let needs_redraw = cmd.needs_redraw();
            self.process_cmd(cmd);
            if needs_redraw {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
        }

        if self.quit_requested {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if self.captured {
            tracing::debug!("Exiting with the mouse still captured");
        }
        self.save_config();
    }
}
