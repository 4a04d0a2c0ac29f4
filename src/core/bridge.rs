//=========================================================================
// Bridge
//=========================================================================
//
// Single dispatch point between host and engine.
//
// Architecture:
// ```text
//   HostEvent ──handle()──┬─ Create(metrics) → store metrics, first render
//                         ├─ Pause / Resume  → EngineLifecycleController
//                         ├─ Destroy         → EngineLifecycleController
//                         └─ Touch(pointers) → TouchBridge → input + render
// ```
//
// Everything runs synchronously on the caller's thread. The bridge owns
// the engine handle and the host surface for the whole session.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{info, warn};

//=== Internal Dependencies ===============================================

use crate::core::boundary::{DestroyMode, HostSurface, NativeEngine};
use crate::core::host_event::{DisplayMetrics, HostEvent};
use crate::core::lifecycle::{EngineLifecycleController, SessionState};
use crate::core::pointer::PointerSource;
use crate::core::touch_bridge::{SampleAllocation, TouchBridge};

//=== BridgeBuilder =======================================================

/// Builder for configuring and constructing a [`Bridge`].
///
/// # Default Values
///
/// - **Sample allocation**: [`SampleAllocation::PerEvent`]
///
/// # Examples
///
/// ```
/// use nudom_bridge::core::boundary::{BoundaryCall, ChannelEngine, ChannelSurface};
/// use nudom_bridge::core::{BridgeBuilder, HostEvent, SampleAllocation};
///
/// let (tx, rx) = crossbeam_channel::unbounded();
/// let mut bridge = BridgeBuilder::new()
///     .with_sample_allocation(SampleAllocation::Reuse)
///     .build(ChannelEngine::new(tx.clone()), ChannelSurface::new(tx));
///
/// bridge.handle(HostEvent::Pause);
/// assert_eq!(rx.try_recv().unwrap(), BoundaryCall::Pause);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BridgeBuilder {
    sample_allocation: SampleAllocation,
}

impl BridgeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chooses whether pointer samples are allocated per event or refilled
    /// in one retained buffer. Output to the engine is identical.
    ///
    /// Default: [`SampleAllocation::PerEvent`]
    pub fn with_sample_allocation(mut self, allocation: SampleAllocation) -> Self {
        self.sample_allocation = allocation;
        self
    }

    pub fn build<E: NativeEngine, H: HostSurface>(self, engine: E, surface: H) -> Bridge<E, H> {
        info!(
            target: "bridge",
            "Building bridge (sample allocation: {:?})",
            self.sample_allocation
        );

        Bridge {
            engine,
            surface,
            lifecycle: EngineLifecycleController::new(),
            touch: TouchBridge::new(self.sample_allocation),
            metrics: None,
        }
    }
}

//=== Bridge ==============================================================

/// Owns one engine session and the surface it draws to.
pub struct Bridge<E: NativeEngine, H: HostSurface> {
    engine: E,
    surface: H,
    lifecycle: EngineLifecycleController,
    touch: TouchBridge,
    metrics: Option<DisplayMetrics>,
}

impl<E: NativeEngine, H: HostSurface> Bridge<E, H> {
    /// Bridge with default configuration.
    pub fn new(engine: E, surface: H) -> Self {
        BridgeBuilder::new().build(engine, surface)
    }

    //--- handle() ---------------------------------------------------------
    //
    // Returns `true` when the event was acted on. For touch events this is
    // the "consumed" flag reported back to the host. Events arriving after
    // destroy are host contract violations and return `false`.
    //
    pub fn handle(&mut self, event: HostEvent) -> bool {
        match event {
            HostEvent::Create(metrics) => self.on_create(metrics),
            HostEvent::Pause => self.lifecycle.pause(&mut self.engine),
            HostEvent::Resume => self.lifecycle.resume(&mut self.engine),
            HostEvent::Destroy { finishing } => self
                .lifecycle
                .destroy(&mut self.engine, DestroyMode::from_finishing(finishing)),
            HostEvent::Touch(pointers) => self.on_touch(&pointers),
        }
    }

    /// Forwards a touch event read straight from a host event object,
    /// without building a [`PointerSnapshot`](crate::core::PointerSnapshot) first.
    pub fn on_touch<P: PointerSource + ?Sized>(&mut self, source: &P) -> bool {
        if !self.lifecycle.ensure_live("touch") {
            return false;
        }
        self.touch.on_touch(&mut self.engine, &mut self.surface, source)
    }

    //--- Accessors --------------------------------------------------------

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn surface(&self) -> &H {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut H {
        &mut self.surface
    }

    /// Metrics from the last `Create`, if any.
    pub fn display_metrics(&self) -> Option<DisplayMetrics> {
        self.metrics
    }

    pub fn session_state(&self) -> SessionState {
        self.lifecycle.state()
    }

    pub fn into_parts(self) -> (E, H) {
        (self.engine, self.surface)
    }

    //--- Internal Helpers -------------------------------------------------

    fn on_create(&mut self, metrics: DisplayMetrics) -> bool {
        if !self.lifecycle.ensure_live("create") {
            return false;
        }
        if let Some(previous) = self.metrics {
            warn!(
                target: "bridge",
                "Surface created again, replacing scale factor {} with {}",
                previous.scale_factor(),
                metrics.scale_factor()
            );
        }

        info!(
            target: "bridge",
            "Host surface created @ {}x scale",
            metrics.scale_factor()
        );
        self.metrics = Some(metrics);

        // First frame
        self.surface.request_render();
        true
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::boundary::{BoundaryCall, ChannelEngine, ChannelSurface};
    use crate::core::pointer::PointerSnapshot;
    use crossbeam_channel::{unbounded, Receiver};

    //--- Test Helpers -----------------------------------------------------

    fn recording_bridge(
        allocation: SampleAllocation,
    ) -> (Bridge<ChannelEngine, ChannelSurface>, Receiver<BoundaryCall>) {
        let (tx, rx) = unbounded();
        let bridge = BridgeBuilder::new()
            .with_sample_allocation(allocation)
            .build(ChannelEngine::new(tx.clone()), ChannelSurface::new(tx));
        (bridge, rx)
    }

    fn touch(points: &[(f32, f32)]) -> HostEvent {
        HostEvent::Touch(points.iter().copied().collect())
    }

    fn drain(rx: &Receiver<BoundaryCall>) -> Vec<BoundaryCall> {
        rx.try_iter().collect()
    }

    //=====================================================================
    // BridgeBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = BridgeBuilder::new();
        assert_eq!(builder.sample_allocation, SampleAllocation::PerEvent);
    }

    #[test]
    fn builder_with_sample_allocation() {
        let builder = BridgeBuilder::new().with_sample_allocation(SampleAllocation::Reuse);
        assert_eq!(builder.sample_allocation, SampleAllocation::Reuse);
    }

    #[test]
    fn build_starts_active_without_metrics() {
        let (bridge, rx) = recording_bridge(SampleAllocation::PerEvent);

        assert_eq!(bridge.session_state(), SessionState::Active);
        assert!(bridge.display_metrics().is_none());
        assert!(drain(&rx).is_empty(), "Building must not call the engine");
    }

    //=====================================================================
    // Dispatch Tests
    //=====================================================================

    #[test]
    fn create_stores_metrics_and_requests_first_frame() {
        let (mut bridge, rx) = recording_bridge(SampleAllocation::PerEvent);

        assert!(bridge.handle(HostEvent::Create(DisplayMetrics::new(3.0))));

        assert_eq!(bridge.display_metrics(), Some(DisplayMetrics::new(3.0)));
        assert_eq!(drain(&rx), vec![BoundaryCall::RenderRequested]);
    }

    #[test]
    fn repeated_create_replaces_metrics() {
        let (mut bridge, _rx) = recording_bridge(SampleAllocation::PerEvent);

        bridge.handle(HostEvent::Create(DisplayMetrics::new(1.5)));
        bridge.handle(HostEvent::Create(DisplayMetrics::new(2.0)));

        assert_eq!(bridge.display_metrics().map(|m| m.scale_factor()), Some(2.0));
    }

    #[test]
    fn three_finger_touch_scenario() {
        let (mut bridge, rx) = recording_bridge(SampleAllocation::PerEvent);

        let consumed = bridge.handle(touch(&[(10.0, 20.0), (30.0, 40.0), (50.0, 60.0)]));

        assert!(consumed);
        assert_eq!(
            drain(&rx),
            vec![
                BoundaryCall::Input {
                    action: 1,
                    x: vec![10.0, 30.0, 50.0],
                    y: vec![20.0, 40.0, 60.0],
                },
                BoundaryCall::RenderRequested,
            ]
        );
    }

    #[test]
    fn pause_resume_pause_destroy_scenario() {
        let (mut bridge, rx) = recording_bridge(SampleAllocation::PerEvent);

        bridge.handle(HostEvent::Pause);
        bridge.handle(HostEvent::Resume);
        bridge.handle(HostEvent::Pause);
        bridge.handle(HostEvent::Destroy { finishing: true });

        assert_eq!(bridge.session_state(), SessionState::Destroyed);
        assert_eq!(
            drain(&rx),
            vec![
                BoundaryCall::Pause,
                BoundaryCall::Resume,
                BoundaryCall::Pause,
                BoundaryCall::Destroy(0),
            ]
        );
    }

    #[test]
    fn finishing_flag_selects_destroy_argument() {
        let (mut finishing, rx_a) = recording_bridge(SampleAllocation::PerEvent);
        finishing.handle(HostEvent::Destroy { finishing: true });
        assert_eq!(drain(&rx_a), vec![BoundaryCall::Destroy(0)]);

        let (mut rotating, rx_b) = recording_bridge(SampleAllocation::PerEvent);
        rotating.handle(HostEvent::Destroy { finishing: false });
        assert_eq!(drain(&rx_b), vec![BoundaryCall::Destroy(1)]);
    }

    #[test]
    fn renders_only_follow_create_or_input() {
        let (mut bridge, rx) = recording_bridge(SampleAllocation::Reuse);

        bridge.handle(HostEvent::Create(DisplayMetrics::new(2.0)));
        bridge.handle(touch(&[(1.0, 1.0)]));
        bridge.handle(HostEvent::Pause);
        bridge.handle(HostEvent::Resume);
        bridge.handle(touch(&[]));
        bridge.handle(touch(&[(4.0, 5.0), (6.0, 7.0)]));
        bridge.handle(HostEvent::Destroy { finishing: false });

        let calls = drain(&rx);

        // First render belongs to Create; every later one must directly
        // follow an input call.
        assert_eq!(calls[0], BoundaryCall::RenderRequested);
        for (i, call) in calls.iter().enumerate().skip(1) {
            if *call == BoundaryCall::RenderRequested {
                assert!(matches!(calls[i - 1], BoundaryCall::Input { .. }));
            }
            if let BoundaryCall::Input { .. } = call {
                assert_eq!(calls[i + 1], BoundaryCall::RenderRequested);
            }
        }

        let destroys = calls.iter().filter(|c| matches!(c, BoundaryCall::Destroy(_))).count();
        assert_eq!(destroys, 1);
        assert_eq!(calls.last(), Some(&BoundaryCall::Destroy(1)));
    }

    #[test]
    fn on_touch_accepts_any_pointer_source() {
        struct Fixed;

        impl PointerSource for Fixed {
            fn pointer_count(&self) -> usize {
                2
            }
            fn x(&self, index: usize) -> f32 {
                [100.0, 200.0][index]
            }
            fn y(&self, index: usize) -> f32 {
                [-1.0, -2.0][index]
            }
        }

        let (mut bridge, rx) = recording_bridge(SampleAllocation::PerEvent);
        assert!(bridge.on_touch(&Fixed));

        assert_eq!(
            drain(&rx),
            vec![
                BoundaryCall::Input {
                    action: 1,
                    x: vec![100.0, 200.0],
                    y: vec![-1.0, -2.0],
                },
                BoundaryCall::RenderRequested,
            ]
        );
    }

    #[test]
    fn into_parts_returns_engine_and_surface() {
        let (bridge, rx) = recording_bridge(SampleAllocation::PerEvent);
        let (mut engine, _surface) = bridge.into_parts();

        engine.resume();
        assert_eq!(rx.try_recv().unwrap(), BoundaryCall::Resume);
    }

    //=====================================================================
    // Contract Violation Tests
    //=====================================================================

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "touch delivered after engine destroy")]
    fn touch_after_destroy_trips_debug_assert() {
        let (mut bridge, _rx) = recording_bridge(SampleAllocation::PerEvent);

        bridge.handle(HostEvent::Destroy { finishing: true });
        bridge.handle(HostEvent::Touch(PointerSnapshot::empty()));
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn nothing_reaches_engine_after_destroy() {
        let (mut bridge, rx) = recording_bridge(SampleAllocation::PerEvent);

        bridge.handle(HostEvent::Destroy { finishing: true });
        assert!(!bridge.handle(touch(&[(1.0, 2.0)])));
        assert!(!bridge.handle(HostEvent::Pause));
        assert!(!bridge.handle(HostEvent::Resume));
        assert!(!bridge.handle(HostEvent::Create(DisplayMetrics::default())));
        assert!(!bridge.handle(HostEvent::Destroy { finishing: false }));

        assert_eq!(drain(&rx), vec![BoundaryCall::Destroy(0)]);
    }
}
