//=========================================================================
// Frame Loop
//=========================================================================
//
// Headless frame driver. Owns the input state, camera and surface and
// runs one tick at a time; the caller decides when ticks happen (the
// winit platform paces them with `FrameClock`, tests call `tick`
// directly).
//
// Tick order:
// ```text
//   1. EventCollector::collect_into(input)    events since last tick
//   2. surface.resize(viewport)               match the window
//      camera.set_viewport_size(viewport)
//   3. draw(&mut Frame)                       user logic
//   4. input.end_frame()                      clear edges + wheel
//   5. surface.present()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::Receiver;
use glam::DVec2;
use log::{debug, trace};

//=== Internal Dependencies ===============================================

use crate::core::camera::CameraTransform;
use crate::core::input::InputState;
use crate::core::platform_bridge::{EventCollector, PlatformEvent, TickControl};
use crate::core::render::{Painter, Surface, SurfaceSize};

//=== Frame ===============================================================

/// Per-tick context handed to draw logic.
pub struct Frame<'a, S: Surface> {
    input: &'a InputState,
    camera: &'a mut CameraTransform,
    surface: &'a mut S,
    delta_seconds: f64,
    frame_index: u64,
    exit_requested: bool,
}

impl<'a, S: Surface> Frame<'a, S> {
    /// Input recorded since the previous tick.
    pub fn input(&self) -> &InputState {
        self.input
    }

    pub fn camera(&self) -> &CameraTransform {
        &*self.camera
    }

    /// Mutable camera for pan/zoom controls. Changes apply to draw calls
    /// issued afterwards.
    pub fn camera_mut(&mut self) -> &mut CameraTransform {
        &mut *self.camera
    }

    /// World-space drawing through the current camera.
    pub fn painter(&mut self) -> Painter<'_, S> {
        Painter::new(&mut *self.surface, &*self.camera)
    }

    /// Raw screen-space access to the surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut *self.surface
    }

    /// Fixed tick length in seconds (`1 / fps`).
    pub fn delta_seconds(&self) -> f64 {
        self.delta_seconds
    }

    /// Zero-based tick counter.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Cursor position in world coordinates.
    pub fn mouse_world(&self) -> DVec2 {
        let (mx, my) = self.input.mouse_position();
        self.camera.screen_to_world(DVec2::new(mx, my))
    }

    /// Viewport size in pixels.
    pub fn screen_size(&self) -> (f64, f64) {
        self.camera.viewport_size()
    }

    /// Stops the loop after this tick completes.
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }
}

//=== FrameLoop ===========================================================

/// Owns the sketch state and executes ticks.
pub struct FrameLoop<S: Surface> {
    input: InputState,
    camera: CameraTransform,
    surface: S,
    collector: EventCollector,
    frame_index: u64,
}

impl<S: Surface> FrameLoop<S> {
    /// Creates a loop reading events from `events`.
    ///
    /// The camera starts focused on the center of the surface so world
    /// coordinates equal screen coordinates until the user pans or zooms.
    pub fn new(surface: S, events: Receiver<PlatformEvent>) -> Self {
        let (w, h) = surface.size().as_f64();
        let mut camera = CameraTransform::new();
        camera.set_viewport_size(w, h);
        camera.center_on_viewport();

        debug!(target: "sketch::frame", "Frame loop created ({}x{})", w, h);

        Self {
            input: InputState::new(),
            camera,
            surface,
            collector: EventCollector::new(events),
            frame_index: 0,
        }
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn camera(&self) -> &CameraTransform {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut CameraTransform {
        &mut self.camera
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Number of completed ticks.
    pub fn frames(&self) -> u64 {
        self.frame_index
    }

    /// Runs one tick.
    ///
    /// Returns [`TickControl::Exit`] when the platform asked to close, the
    /// event source disconnected, or draw logic called
    /// [`Frame::request_exit`]. A close seen before drawing skips the
    /// draw.
    ///
    /// # Errors
    ///
    /// Propagates surface resize/present failures.
    pub fn tick<F>(
        &mut self,
        viewport: SurfaceSize,
        delta_seconds: f64,
        draw: &mut F,
    ) -> Result<TickControl, S::Error>
    where
        F: FnMut(&mut Frame<'_, S>),
    {
        //--- 1. Apply queued device events -------------------------------
        if self.collector.collect_into(&mut self.input) == TickControl::Exit {
            return Ok(TickControl::Exit);
        }

        //--- 2. Track the surface size -----------------------------------
        if self.surface.size() != viewport {
            debug!(
                target: "sketch::frame",
                "Viewport resized to {}x{}",
                viewport.width,
                viewport.height
            );
        }
        self.surface.resize(viewport)?;
        let (w, h) = viewport.as_f64();
        self.camera.set_viewport_size(w, h);

        //--- 3. User draw logic ------------------------------------------
        let mut frame = Frame {
            input: &self.input,
            camera: &mut self.camera,
            surface: &mut self.surface,
            delta_seconds,
            frame_index: self.frame_index,
            exit_requested: false,
        };
        draw(&mut frame);
        let exit_requested = frame.exit_requested;

        //--- 4. Close the frame ------------------------------------------
        self.input.end_frame();
        self.surface.present()?;
        self.frame_index += 1;

        trace!(target: "sketch::frame", "Tick {} complete", self.frame_index);

        if exit_requested {
            debug!(target: "sketch::frame", "Exit requested by draw logic");
            Ok(TickControl::Exit)
        } else {
            Ok(TickControl::Continue)
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
