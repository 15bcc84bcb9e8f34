// Concrete implementations of the ports.

pub mod console;

pub use console::{MemoryConsole, StdoutConsole};
