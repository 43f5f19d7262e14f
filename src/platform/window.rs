//! Native window and frame loop
//!
//! winit callbacks only translate OS events into [`InputEvent`]s; the redraw
//! handler samples the clock, lets the scene drain the queue, and presents.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key as WinitKey, NamedKey};
use winit::window::{Window, WindowId};

use super::time::AnimationClock;
use crate::error::{Error, Result};
use crate::renderer::{RenderState, tessellate};
use crate::scene::Scene;
use crate::settings::Settings;
use crate::sim::{EventQueue, Flow, InputEvent, Key, SimState};

pub const WINDOW_TITLE: &str = "Beach Paradise";

/// Reduce a winit logical key to what the scene reacts to
pub fn map_key(key: &WinitKey) -> Key {
    match key {
        WinitKey::Named(NamedKey::Escape) => Key::Escape,
        WinitKey::Character(s) => s.chars().next().map_or(Key::Other, Key::Char),
        _ => Key::Other,
    }
}

/// Seed that differs between runs; stars are decorative
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

struct App {
    settings: Settings,
    scene: Scene,
    sim: SimState,
    queue: EventQueue,
    clock: AnimationClock,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    button_held: bool,
    error: Option<Error>,
}

impl App {
    fn new(settings: Settings) -> Self {
        let seed = time_seed();
        log::info!("Star seed: {}", seed);
        Self {
            scene: Scene::new(seed, settings.quality),
            sim: SimState::new(&settings, seed.rotate_left(32)),
            queue: EventQueue::new(),
            clock: AnimationClock::new(),
            window: None,
            render_state: None,
            button_held: false,
            error: None,
            settings,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (width, height) = self.settings.window_size();
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(width, height));
        let window = Arc::new(event_loop.create_window(attributes)?);
        log::info!("Window created: {}x{}", width, height);

        let render_state = pollster::block_on(RenderState::new(window.clone(), self.settings.vsync))?;
        let (w, h) = render_state.size;
        self.queue.push(InputEvent::Resize { width: w, height: h });

        self.window = Some(window);
        self.render_state = Some(render_state);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: Error) {
        self.error = Some(err);
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let time = self.clock.tick();
        let (list, flow) = self.scene.frame(&mut self.sim, &mut self.queue, time);
        if flow == Flow::Exit {
            event_loop.exit();
            return;
        }

        let Some(render_state) = self.render_state.as_mut() else {
            return;
        };
        let frame = tessellate(&list, self.sim.view.viewport);
        let Err(err) = render_state.render(&frame) else {
            return;
        };
        match recovery_for(err) {
            Recovery::Reconfigure => {
                log::warn!("Surface lost, reconfiguring");
                render_state.resize(render_state.size.0, render_state.size.1);
            }
            Recovery::Skip(e) => log::warn!("Render error: {:?}", e),
            Recovery::Fatal(err) => self.fail(event_loop, err),
        }
    }
}

/// What the frame loop does after a failed present
#[derive(Debug)]
enum Recovery {
    Reconfigure,
    Skip(wgpu::SurfaceError),
    Fatal(Error),
}

fn recovery_for(err: wgpu::SurfaceError) -> Recovery {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => Recovery::Reconfigure,
        wgpu::SurfaceError::OutOfMemory => Recovery::Fatal(Error::Surface(err)),
        other => Recovery::Skip(other),
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.init_window(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(render_state) = self.render_state.as_mut() {
                    render_state.resize(size.width, size.height);
                }
                self.queue.push(InputEvent::Resize {
                    width: size.width,
                    height: size.height,
                });
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    self.queue.push(InputEvent::Key(map_key(&event.logical_key)));
                }
            }
            WindowEvent::MouseInput { state, .. } => {
                self.button_held = state == ElementState::Pressed;
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.button_held {
                    self.queue.push(InputEvent::Drag {
                        x: position.x as f32,
                        y: position.y as f32,
                    });
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}

/// Open the window and run until escape or close
pub fn run(settings: Settings) -> Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
