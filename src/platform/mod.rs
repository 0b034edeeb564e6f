//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the frame loop via a channel.
//
// Architecture:
// ```text
//  Main Thread (single):
//  ┌──────────────────────────────────────────────────────────┐
//  │  Winit Event Loop                                        │
//  │   ├─ window_event ─> InputProcessor ─> Sender ─┐         │
//  │   │                                            │         │
//  │   └─ about_to_wait                             ↓         │
//  │        FrameClock::poll ──due──> FrameLoop::tick         │
//  │        ControlFlow::WaitUntil(next deadline)             │
//  └──────────────────────────────────────────────────────────┘
//
//  Tick boundary: a due deadline in `about_to_wait`
//    → all events received since the previous tick are applied
//    → draw logic runs, surface presents
// ```
//
// Key Design Decisions:
// - **Lazy window**: the window and surface are created in `resumed()`;
//   events that arrive earlier stay queued in the channel
// - **Close is final**: `CloseRequested` is forwarded and the event loop
//   exits; no further ticks run
// - **Errors are deferred**: window/surface failures stop the event loop
//   and are returned from `Sketch::run`
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so everything runs on the thread that called `Sketch::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_processor;
mod window_surface;

//=== External Crates =====================================================

use std::sync::Arc;
use std::time::Instant;

use crossbeam_channel::{Receiver, Sender};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow},
    window::{Window, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::frame::{Frame, FrameClock, FrameLoop};
use crate::core::input::InputEvent;
use crate::core::platform_bridge::{event_channel, PlatformEvent, TickControl};
use crate::core::render::{Surface, SurfaceSize};
use crate::sketch::{SketchConfig, SketchError, SurfaceFactory};
use input_processor::InputProcessor;

pub use window_surface::{WindowSurface, WindowSurfaceError};

//=== Platform ============================================================

/// Window owner and tick driver.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(config, factory, draw)`
/// 2. **Resume**: creates the window, the surface and the frame loop
/// 3. **Event processing**: Winit events are converted and queued
/// 4. **Ticks**: `about_to_wait` runs due ticks and schedules the next wake
/// 5. **Shutdown**: close, draw-requested exit or a fatal error
pub(crate) struct Platform<S: Surface, D> {
    config: SketchConfig,

    /// OS window handle (None until `resumed()` called).
    window: Option<Arc<Window>>,

    /// Consumed on first resume.
    surface_factory: Option<SurfaceFactory<S>>,

    frame_loop: Option<FrameLoop<S>>,
    clock: Option<FrameClock>,

    event_sender: Sender<PlatformEvent>,

    /// Handed to the frame loop once it exists.
    event_receiver: Option<Receiver<PlatformEvent>>,

    input_processor: InputProcessor,
    draw: D,

    /// First fatal error, returned after the event loop stops.
    error: Option<SketchError>,
}

impl<S, D> Platform<S, D>
where
    S: Surface,
    D: FnMut(&mut Frame<'_, S>),
{
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(config: SketchConfig, surface_factory: SurfaceFactory<S>, draw: D) -> Self {
        let (event_sender, event_receiver) = event_channel();

        info!(target: "platform", "Platform subsystem initialized");
        Self {
            config,
            window: None,
            surface_factory: Some(surface_factory),
            frame_loop: None,
            clock: None,
            event_sender,
            event_receiver: Some(event_receiver),
            input_processor: InputProcessor::new(),
            draw,
            error: None,
        }
    }

    /// Consumes the platform after the event loop returned.
    pub(crate) fn into_result(self) -> Result<(), SketchError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn send(&self, event: PlatformEvent) {
        trace!(target: "platform::input", "Forwarding {:?}", event);
        if self.event_sender.send(event).is_err() {
            warn!(target: "platform::input", "Channel disconnected, dropping event");
        }
    }

    fn send_input(&self, event: InputEvent) {
        self.send(PlatformEvent::Input(event));
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: SketchError) {
        error!(target: "platform", "{}", error);
        if self.error.is_none() {
            self.error = Some(error);
        }
        event_loop.exit();
    }

    /// Creates the window, the surface and the frame loop.
    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<(), SketchError> {
        let (width, height) = self.config.size;
        let attrs = Window::default_attributes()
            .with_title(self.config.title.as_str())
            .with_inner_size(LogicalSize::new(width, height));

        let window = Arc::new(event_loop.create_window(attrs)?);
        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            window.inner_size().width,
            window.inner_size().height,
            window.scale_factor()
        );

        let (Some(factory), Some(receiver)) =
            (self.surface_factory.take(), self.event_receiver.take())
        else {
            return Ok(());
        };

        let surface =
            factory(Arc::clone(&window)).map_err(|e| SketchError::Surface(Box::new(e)))?;

        self.frame_loop = Some(FrameLoop::new(surface, receiver));
        self.clock = Some(FrameClock::new(self.config.fps, Instant::now()));
        self.window = Some(window);
        Ok(())
    }
}

//=== Winit Integration ===================================================

impl<S, D> ApplicationHandler for Platform<S, D>
where
    S: Surface,
    D: FnMut(&mut Frame<'_, S>),
{
    /// Called when app becomes active (startup or mobile resume).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        if let Err(error) = self.start(event_loop) {
            self.fail(event_loop, error);
        }
    }

    /// Handles per-window events.
    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.send(PlatformEvent::CloseRequested);
                event_loop.exit();
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self.input_processor.process_mouse_move(position);
                self.send_input(event);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match self.input_processor.process_key_event(&key_event) {
                    Some(event) => self.send_input(event),
                    None => trace!(target: "platform::input", "Unidentified key ignored"),
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.process_mouse_button(button, state);
                self.send_input(event);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let event = self.input_processor.process_wheel(delta);
                self.send_input(event);
            }

            _ => {
                // Resized is picked up from inner_size() on the next tick
            }
        }
    }

    /// Runs a due tick and schedules the next wake-up.
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(clock), Some(window), Some(frame_loop)) =
            (self.clock.as_mut(), self.window.as_ref(), self.frame_loop.as_mut())
        else {
            return;
        };

        if let Some(delta_seconds) = clock.poll(Instant::now()) {
            let size = window.inner_size();
            let viewport = SurfaceSize::new(size.width, size.height);

            match frame_loop.tick(viewport, delta_seconds, &mut self.draw) {
                Ok(TickControl::Continue) => {}
                Ok(TickControl::Exit) => {
                    info!(target: "platform", "Frame loop finished after {} ticks", frame_loop.frames());
                    event_loop.exit();
                    return;
                }
                Err(e) => {
                    let error = SketchError::Surface(Box::new(e));
                    self.fail(event_loop, error);
                    return;
                }
            }
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(clock.next_deadline()));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
