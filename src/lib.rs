//=========================================================================
// nudom bridge: Library Root
//
// Glue between a windowing host and a native rendering engine that is
// reached through four procedural entry points.
//
// Responsibilities:
// - Pack multi-touch events into the engine's `input(action, x, y)` call
// - Forward host pause / resume / destroy to the engine in order
// - Request a frame from the host surface after every forwarded touch
//
// Typical usage:
// ```no_run
// use nudom_bridge::HostBuilder;
//
// fn main() {
//     let engine = my_engine::Engine::new();
//     HostBuilder::new().build(engine).run().unwrap();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` is the platform-independent bridge: engine boundary traits,
// pointer samples, lifecycle sequencing. Hosts other than winit drive
// it directly through `Bridge::handle`.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` is the winit host. It stays private; applications reach it
// through `HostBuilder`.
//
mod host;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use host::{Host, HostBuilder};
pub use platform::PlatformError;
