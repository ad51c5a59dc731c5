mod simulated;

pub use simulated::{SimulatedNativeEngine, DEFAULT_CONTINUATION_DELAY};
