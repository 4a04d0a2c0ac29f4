//=========================================================================
// Platform Subsystem
//
// Winit host that feeds the bridge core.
//
// Architecture:
// ```text
//  Main Thread (winit event loop)
//  ┌──────────────────────────────────────────┐
//  │  resumed() ── first ──→ create window     │
//  │      │                  Create(metrics)   │
//  │      └──── later ────→ Resume             │
//  │  suspended() ─────────→ Pause             │
//  │  exiting() ───────────→ Destroy(finish)   │
//  │  WindowEvent::Touch                       │
//  │      ↓                                    │
//  │  TouchTracker → PointerSnapshot → Touch   │
//  │      ↓                                    │
//  │  Bridge ──→ NativeEngine / WindowSurface  │
//  └──────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **Lazy window**: created in the first `resumed()` (mobile rule), so
//   the bridge, which owns the surface, is built there too
// - **Scale factor**: configured override wins, otherwise the window's
//   own scale factor is used
// - **Render requests**: map onto `Window::request_redraw`, which winit
//   already coalesces
//
//=========================================================================

//=== Submodules ==========================================================

mod touch_tracker;

//=== External Crates =====================================================

use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    error::{EventLoopError, OsError},
    event::{TouchPhase, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::boundary::{HostSurface, NativeEngine};
use crate::core::{Bridge, BridgeBuilder, DisplayMetrics, HostEvent};
use touch_tracker::TouchTracker;

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// All of these are fatal: without an event loop or a window there is no
/// host to bridge.
#[derive(Debug)]
pub enum PlatformError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    EventLoopCreation(EventLoopError),

    /// Event loop execution error.
    EventLoopExecution(EventLoopError),

    /// The OS refused to create the host window.
    WindowCreation(OsError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
            Self::WindowCreation(e) => write!(f, "Window creation failed: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EventLoopCreation(e) | Self::EventLoopExecution(e) => Some(e),
            Self::WindowCreation(e) => Some(e),
        }
    }
}

//=== PlatformConfig ======================================================

/// Window and bridge settings resolved by [`HostBuilder`](crate::HostBuilder).
#[derive(Debug, Clone)]
pub(crate) struct PlatformConfig {
    pub title: String,
    pub inner_size: (u32, u32),
    pub scale_factor: Option<f32>,
    pub bridge: BridgeBuilder,
}

impl PlatformConfig {
    /// Configured override, else the window's reported scale factor.
    pub(crate) fn resolve_metrics(&self, window_scale: f64) -> DisplayMetrics {
        match self.scale_factor {
            Some(scale) => DisplayMetrics::new(scale),
            None => DisplayMetrics::new(window_scale as f32),
        }
    }
}

//=== WindowSurface =======================================================

/// Host surface backed by the winit window.
pub(crate) struct WindowSurface {
    window: Window,
}

impl HostSurface for WindowSurface {
    fn request_render(&mut self) {
        self.window.request_redraw();
    }
}

//=== Platform ============================================================

/// Window owner and host-event source for one engine session.
///
/// The surface type is a parameter so the host-event mapping can run
/// against any [`HostSurface`]; the winit event loop always uses
/// [`WindowSurface`].
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(config, engine)` - holds the engine
/// 2. **First resume**: window created, bridge built, `Create` delivered
/// 3. **Event processing**: touches and visibility changes go to the bridge
/// 4. **Shutdown**: close requested → loop exits → `Destroy` delivered
///
/// # Thread Safety
///
/// Must stay on the main thread (winit requirement on macOS/iOS).
pub(crate) struct Platform<E: NativeEngine, H: HostSurface = WindowSurface> {
    config: PlatformConfig,

    /// Engine waiting for the window (moved into `bridge` on first resume).
    engine: Option<E>,

    /// Live session, `None` until the window exists.
    bridge: Option<Bridge<E, H>>,

    tracker: TouchTracker,

    /// Fatal error hit inside the loop, reported by `run()`.
    failure: Option<PlatformError>,
}

impl<E: NativeEngine, H: HostSurface> Platform<E, H> {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(config: PlatformConfig, engine: E) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            config,
            engine: Some(engine),
            bridge: None,
            tracker: TouchTracker::new(),
            failure: None,
        }
    }

    //--- Host Event Mapping -----------------------------------------------
    //
    // Everything the winit callbacks do once the window question is
    // settled. None of these need an event loop.
    //

    /// Builds the bridge around `surface` and delivers `Create`.
    ///
    /// Returns `false` if a session was already started.
    pub(crate) fn start_session(&mut self, surface: H, metrics: DisplayMetrics) -> bool {
        let Some(engine) = self.engine.take() else {
            warn!(target: "platform", "Session already started, ignoring new surface");
            return false;
        };

        let bridge = self.config.bridge.clone().build(engine, surface);
        self.bridge = Some(bridge);
        self.dispatch(HostEvent::Create(metrics))
    }

    /// Return to foreground with a live session.
    pub(crate) fn handle_resumed(&mut self) -> bool {
        self.dispatch(HostEvent::Resume)
    }

    /// Going to background. Active touches are void from here on.
    pub(crate) fn handle_suspended(&mut self) -> bool {
        self.tracker.clear();
        self.dispatch(HostEvent::Pause)
    }

    /// Loop is shutting down: the session finishes for good.
    pub(crate) fn handle_exiting(&mut self) -> bool {
        info!(target: "platform", "Event loop exiting");
        self.dispatch(HostEvent::Destroy { finishing: true })
    }

    /// One winit contact update, forwarded as a full snapshot.
    pub(crate) fn handle_touch(&mut self, id: u64, phase: TouchPhase, x: f32, y: f32) -> bool {
        let snapshot = self.tracker.apply(id, phase, x, y);
        self.dispatch(HostEvent::Touch(snapshot))
    }

    pub(crate) fn has_session(&self) -> bool {
        self.bridge.is_some()
    }

    //--- Internal Helpers -------------------------------------------------

    fn dispatch(&mut self, event: HostEvent) -> bool {
        match self.bridge.as_mut() {
            Some(bridge) => bridge.handle(event),
            None => {
                debug!(
                    target: "platform",
                    "No session yet, ignoring {} event",
                    event.name()
                );
                false
            }
        }
    }
}

impl<E: NativeEngine> Platform<E, WindowSurface> {
    //--- Execution --------------------------------------------------------

    /// Runs the winit event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails, or if the host window could not be created.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)?;

        match self.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn create_session(&mut self, event_loop: &ActiveEventLoop) {
        let (width, height) = self.config.inner_size;
        let attrs = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(width, height));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let metrics = self.config.resolve_metrics(window.scale_factor());
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    metrics.scale_factor()
                );

                self.start_session(WindowSurface { window }, metrics);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.failure = Some(PlatformError::WindowCreation(e));
                event_loop.exit();
            }
        }
    }
}

//=== Winit Integration ===================================================

impl<E: NativeEngine> ApplicationHandler for Platform<E, WindowSurface> {
    /// Startup or return to foreground.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.has_session() {
            self.handle_resumed();
        } else {
            self.create_session(event_loop);
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        self.handle_suspended();
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.handle_exiting();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                event_loop.exit();
            }

            WindowEvent::Touch(touch) => {
                self.handle_touch(
                    touch.id,
                    touch.phase,
                    touch.location.x as f32,
                    touch.location.y as f32,
                );
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                // The engine only learns the density at creation.
                debug!(target: "platform", "Scale factor changed to {}", scale_factor);
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::boundary::{BoundaryCall, ChannelEngine, ChannelSurface};
    use crossbeam_channel::{unbounded, Receiver};

    fn config(scale_factor: Option<f32>) -> PlatformConfig {
        PlatformConfig {
            title: "test".to_string(),
            inner_size: (320, 240),
            scale_factor,
            bridge: BridgeBuilder::new(),
        }
    }

    //=====================================================================
    // PlatformConfig Tests
    //=====================================================================

    #[test]
    fn window_scale_is_used_without_override() {
        assert_eq!(config(None).resolve_metrics(2.0).scale_factor(), 2.0);
    }

    #[test]
    fn override_wins_over_window_scale() {
        assert_eq!(config(Some(1.5)).resolve_metrics(3.0).scale_factor(), 1.5);
    }

    //=====================================================================
    // Platform Tests
    //=====================================================================

    type TestPlatform = Platform<ChannelEngine, ChannelSurface>;

    fn recording_platform() -> (TestPlatform, ChannelSurface, Receiver<BoundaryCall>) {
        let (tx, rx) = unbounded();
        let platform = TestPlatform::new(config(None), ChannelEngine::new(tx.clone()));
        (platform, ChannelSurface::new(tx), rx)
    }

    fn started_platform() -> (TestPlatform, Receiver<BoundaryCall>) {
        let (mut platform, surface, rx) = recording_platform();
        assert!(platform.start_session(surface, DisplayMetrics::new(2.0)));
        assert_eq!(rx.try_recv().unwrap(), BoundaryCall::RenderRequested);
        (platform, rx)
    }

    fn engine_calls(rx: &Receiver<BoundaryCall>) -> Vec<BoundaryCall> {
        rx.try_iter().filter(BoundaryCall::is_engine_call).collect()
    }

    fn input(x: &[f32], y: &[f32]) -> BoundaryCall {
        BoundaryCall::Input {
            action: 1,
            x: x.to_vec(),
            y: y.to_vec(),
        }
    }

    #[test]
    fn platform_creation_defers_session() {
        let (platform, _surface, rx) = recording_platform();

        assert!(!platform.has_session(), "Bridge should be built lazily");
        assert!(
            rx.try_recv().is_err(),
            "Engine must not be called before the window exists"
        );
    }

    #[test]
    fn dispatch_without_session_is_ignored() {
        let (mut platform, _surface, rx) = recording_platform();

        assert!(!platform.handle_suspended());
        assert!(!platform.handle_resumed());
        assert!(!platform.handle_exiting());
        assert!(!platform.handle_touch(1, TouchPhase::Started, 1.0, 1.0));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn start_session_delivers_create_once() {
        let (mut platform, surface, rx) = recording_platform();

        assert!(platform.start_session(surface.clone(), DisplayMetrics::new(3.0)));
        assert!(platform.has_session());
        assert!(!platform.start_session(surface, DisplayMetrics::new(1.0)));

        let calls: Vec<_> = rx.try_iter().collect();
        assert_eq!(calls, vec![BoundaryCall::RenderRequested]);
    }

    #[test]
    fn resume_suspend_exit_map_to_engine_calls() {
        let (mut platform, rx) = started_platform();

        assert!(platform.handle_suspended());
        assert!(platform.handle_resumed());
        assert!(platform.handle_suspended());
        assert!(platform.handle_exiting());

        assert_eq!(
            engine_calls(&rx),
            vec![
                BoundaryCall::Pause,
                BoundaryCall::Resume,
                BoundaryCall::Pause,
                BoundaryCall::Destroy(0),
            ]
        );
    }

    #[test]
    fn touch_goes_through_tracker_then_renders() {
        let (mut platform, rx) = started_platform();

        assert!(platform.handle_touch(4, TouchPhase::Started, 10.0, 20.0));
        assert!(platform.handle_touch(8, TouchPhase::Started, 30.0, 40.0));

        let calls: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            calls,
            vec![
                input(&[10.0], &[20.0]),
                BoundaryCall::RenderRequested,
                input(&[10.0, 30.0], &[20.0, 40.0]),
                BoundaryCall::RenderRequested,
            ]
        );
    }

    #[test]
    fn suspend_mid_touch_drops_stale_contacts() {
        let (mut platform, rx) = started_platform();

        platform.handle_touch(1, TouchPhase::Started, 5.0, 5.0);
        platform.handle_touch(2, TouchPhase::Started, 6.0, 6.0);
        platform.handle_suspended();
        platform.handle_resumed();
        platform.handle_touch(3, TouchPhase::Started, 7.0, 8.0);

        assert_eq!(
            engine_calls(&rx),
            vec![
                input(&[5.0], &[5.0]),
                input(&[5.0, 6.0], &[5.0, 6.0]),
                BoundaryCall::Pause,
                BoundaryCall::Resume,
                input(&[7.0], &[8.0]),
            ]
        );
    }

    //=====================================================================
    // PlatformError Tests
    //=====================================================================

    #[test]
    fn platform_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PlatformError>();
    }

    #[test]
    fn platform_error_display_format() {
        let err = PlatformError::EventLoopCreation(EventLoopError::RecreationAttempt);
        assert!(err.to_string().starts_with("Event loop creation failed"));

        let err = PlatformError::EventLoopExecution(EventLoopError::ExitFailure(3));
        assert!(err.to_string().starts_with("Event loop error"));
    }
}
