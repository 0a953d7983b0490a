pub mod records;
pub mod renderer;
pub mod tracing;

pub use records::{now, seeded_log, seeded_records};
pub use renderer::RecordingRenderer;
pub use tracing::{CapturedEvent, EventLog, init_test_tracing};
