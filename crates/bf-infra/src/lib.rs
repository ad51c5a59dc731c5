pub mod engine;
pub mod location;
pub mod startup_flags;
pub mod time;

pub use engine::SimulatedNativeEngine;
pub use location::InMemoryLocationService;
pub use startup_flags::FileStartupFlagsRepository;
pub use time::{SystemClock, TokioInitTimer};
