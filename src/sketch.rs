//=========================================================================
// Sketch
//
// Public entry point: configure a window, then run draw logic at a fixed
// frame rate until the window closes.
//
// Architecture:
// ```text
//     SketchBuilder  ──build()──────────────>  Sketch<WindowSurface>
//         │          ──build_with_surface()─>  Sketch<S>
//         ├─ with_fps()                            │
//         ├─ with_title()                          └─ run(draw)
//         └─ with_size()                               creates event loop
//                                                      blocks until exit
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::error::Error as StdError;
use std::sync::Arc;

use log::{error, info};
use thiserror::Error;
use winit::error::{EventLoopError, OsError};
use winit::event_loop::EventLoop;
use winit::window::Window;

//=== Internal Dependencies ===============================================

use crate::core::frame::{Frame, MIN_FPS};
use crate::core::render::Surface;
use crate::platform::{Platform, WindowSurface};

//=== Constants ===========================================================

/// Default tick rate.
pub const DEFAULT_FPS: f64 = 60.0;

/// Default window inner size (logical pixels).
pub const DEFAULT_SIZE: (u32, u32) = (800, 600);

/// Default window title.
pub const DEFAULT_TITLE: &str = "sketchpad";

//=== SketchError =========================================================

/// Fatal errors surfaced by [`Sketch::run`].
#[derive(Debug, Error)]
pub enum SketchError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    #[error("Event loop creation failed: {0}")]
    EventLoopCreation(#[source] EventLoopError),

    /// Event loop execution error.
    #[error("Event loop error: {0}")]
    EventLoopExecution(#[source] EventLoopError),

    #[error("Window creation failed: {0}")]
    WindowCreation(#[from] OsError),

    /// The drawing surface could not be created, resized or presented.
    #[error("Surface error: {0}")]
    Surface(#[source] Box<dyn StdError + Send + Sync>),
}

//=== SurfaceFactory ======================================================

/// Builds the drawing surface once the window exists.
pub type SurfaceFactory<S> = Box<dyn FnOnce(Arc<Window>) -> Result<S, <S as Surface>::Error>>;

//=== SketchConfig ========================================================

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SketchConfig {
    pub(crate) fps: f64,
    pub(crate) title: String,
    pub(crate) size: (u32, u32),
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            title: DEFAULT_TITLE.to_owned(),
            size: DEFAULT_SIZE,
        }
    }
}

//=== SketchBuilder =======================================================

/// Builder for configuring and constructing a [`Sketch`].
///
/// # Default Values
///
/// - **FPS**: 60.0
/// - **Title**: "sketchpad"
/// - **Size**: 800x600
///
/// # Examples
///
/// ```no_run
/// use sketchpad::prelude::*;
///
/// SketchBuilder::new()
///     .with_fps(30.0)
///     .with_title("grid")
///     .build()
///     .run(|frame| {
///         let mut painter = frame.painter();
///         painter.fill_color(Color::WHITE);
///         painter.fill_rect(-50.0, -50.0, 100.0, 100.0);
///     })?;
/// # Ok::<(), SketchError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SketchBuilder {
    config: SketchConfig,
}

impl SketchBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: SketchConfig::default(),
        }
    }

    /// Sets the target frames per second.
    ///
    /// Every tick reports a fixed delta of `1 / fps` seconds.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `fps` is not finite or below [`MIN_FPS`].
    pub fn with_fps(mut self, fps: f64) -> Self {
        assert!(
            fps.is_finite() && fps >= MIN_FPS,
            "FPS must be positive and at least {}, got {}",
            MIN_FPS,
            fps
        );
        self.config.fps = fps;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Sets the initial window inner size in logical pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "Window size must be non-zero, got {}x{}",
            width,
            height
        );
        self.config.size = (width, height);
        self
    }

    /// Builds a sketch that rasterizes into the window ([`WindowSurface`]).
    pub fn build(self) -> Sketch<WindowSurface> {
        self.build_with_surface(WindowSurface::new)
    }

    /// Builds a sketch drawing into a custom surface.
    ///
    /// `factory` runs once, right after the window is created. A factory
    /// returning a [`DrawList`](crate::core::render::DrawList) gives a
    /// sketch that records commands without showing them.
    pub fn build_with_surface<S, F>(self, factory: F) -> Sketch<S>
    where
        S: Surface,
        F: FnOnce(Arc<Window>) -> Result<S, S::Error> + 'static,
    {
        info!(
            target: "sketch",
            "Building sketch \"{}\": {}x{} @ {} FPS",
            self.config.title,
            self.config.size.0,
            self.config.size.1,
            self.config.fps
        );

        Sketch {
            config: self.config,
            surface_factory: Box::new(factory),
        }
    }
}

impl Default for SketchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Sketch ==============================================================

/// A configured sketch, ready to run.
pub struct Sketch<S: Surface> {
    config: SketchConfig,
    surface_factory: SurfaceFactory<S>,
}

impl<S: Surface> Sketch<S> {
    /// Opens the window and runs `draw` once per tick until the window
    /// closes or draw logic calls [`Frame::request_exit`].
    ///
    /// # Errors
    ///
    /// Returns [`SketchError`] if the event loop, the window or the
    /// surface fails.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit requirement).
    pub fn run<D>(self, draw: D) -> Result<(), SketchError>
    where
        D: FnMut(&mut Frame<'_, S>),
    {
        info!(target: "sketch", "Starting sketch \"{}\"", self.config.title);

        let event_loop = EventLoop::new().map_err(SketchError::EventLoopCreation)?;
        let mut platform = Platform::new(self.config, self.surface_factory, draw);

        event_loop
            .run_app(&mut platform)
            .map_err(SketchError::EventLoopExecution)?;

        let result = platform.into_result();
        match &result {
            Ok(()) => info!(target: "sketch", "Sketch exited cleanly"),
            Err(e) => error!(target: "sketch", "Sketch stopped: {}", e),
        }
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
