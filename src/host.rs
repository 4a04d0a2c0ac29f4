//=========================================================================
// Host
//
// Main entry point for running a native engine inside a winit window.
//
// Architecture:
// ```text
//     HostBuilder  ──build(engine)──>  Host  ──run()──>  [winit loop]
//         │                                                 │
//         ├─ with_title()                                   └─ Platform
//         ├─ with_inner_size()                                  └─ Bridge
//         ├─ with_scale_factor()                                    └─ engine
//         └─ with_sample_allocation()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::boundary::NativeEngine;
use crate::core::{BridgeBuilder, SampleAllocation};
use crate::platform::{Platform, PlatformConfig, PlatformError, WindowSurface};

//=== HostBuilder =========================================================

/// Builder for configuring and constructing a [`Host`].
///
/// # Default Values
///
/// - **Title**: "nudom"
/// - **Inner size**: 800x600 logical pixels
/// - **Scale factor**: taken from the window
/// - **Sample allocation**: per event
///
/// # Examples
///
/// ```no_run
/// use nudom_bridge::core::boundary::ChannelEngine;
/// use nudom_bridge::HostBuilder;
///
/// let (tx, _rx) = crossbeam_channel::unbounded();
///
/// HostBuilder::new()
///     .with_title("Kitchen Sink")
///     .with_scale_factor(2.0)
///     .build(ChannelEngine::new(tx))
///     .run()
///     .expect("host failed");
/// ```
#[derive(Debug, Clone)]
pub struct HostBuilder {
    title: String,
    inner_size: (u32, u32),
    scale_factor: Option<f32>,
    sample_allocation: SampleAllocation,
}

impl HostBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            title: "nudom".to_string(),
            inner_size: (800, 600),
            scale_factor: None,
            sample_allocation: SampleAllocation::PerEvent,
        }
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial window size in logical pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_inner_size(mut self, width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "Window size must be non-zero, got {}x{}",
            width,
            height
        );
        self.inner_size = (width, height);
        self
    }

    /// Overrides the display scale factor reported to the bridge.
    ///
    /// Without an override the window's own scale factor is used.
    ///
    /// # Panics
    ///
    /// Panics if `scale <= 0.0` or not finite.
    pub fn with_scale_factor(mut self, scale: f32) -> Self {
        assert!(
            scale.is_finite() && scale > 0.0,
            "Scale factor must be positive, got {}",
            scale
        );
        self.scale_factor = Some(scale);
        self
    }

    /// See [`BridgeBuilder::with_sample_allocation`].
    ///
    /// Default: [`SampleAllocation::PerEvent`]
    pub fn with_sample_allocation(mut self, allocation: SampleAllocation) -> Self {
        self.sample_allocation = allocation;
        self
    }

    /// Builds the host around `engine`. Nothing is called on the engine
    /// until [`Host::run`] creates the window.
    pub fn build<E: NativeEngine>(self, engine: E) -> Host<E> {
        info!(
            "Building host ({:?}, {}x{}, scale: {:?})",
            self.title, self.inner_size.0, self.inner_size.1, self.scale_factor
        );

        Host {
            config: PlatformConfig {
                title: self.title,
                inner_size: self.inner_size,
                scale_factor: self.scale_factor,
                bridge: BridgeBuilder::new().with_sample_allocation(self.sample_allocation),
            },
            engine,
        }
    }
}

impl Default for HostBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Host ================================================================

/// A configured window host holding one engine session.
pub struct Host<E: NativeEngine> {
    config: PlatformConfig,
    engine: E,
}

impl<E: NativeEngine> Host<E> {
    /// Runs the host event loop and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Event loop starts, window is created on first resume
    /// 2. Bridge receives `Create` with the display metrics
    /// 3. Touches, pauses and resumes are forwarded as they arrive
    /// 4. On close the engine receives `destroy(0)`
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop or window cannot be
    /// created, or the loop fails.
    pub fn run(self) -> Result<(), PlatformError> {
        info!("Starting host runtime");

        let result = Platform::<E, WindowSurface>::new(self.config, self.engine).run();

        match &result {
            Ok(()) => info!("Host shutdown complete"),
            Err(e) => error!("Platform error: {}", e),
        }
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
