//! Backend logging: the `Logger` sink, its implementations and the `log_*!` macros

mod traits;
mod noop;
mod console;
mod memory;
mod tracing_logger;

pub use traits::{Logger, LoggerExt, SharedLogger};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;
pub use memory::MemoryLogger;
pub use tracing_logger::TracingLogger;
