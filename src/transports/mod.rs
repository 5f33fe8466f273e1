// Concrete transports used by the CLI and by tests. Real third-party systems implement
// `ObjectTransport` / `StringTransport` themselves.

pub mod console;
pub mod file;
pub mod memory;

pub use console::ConsoleTransport;
pub use file::FileTransport;
pub use memory::{Delivery, MemoryTransport};
