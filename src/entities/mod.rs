pub mod door;
pub mod interviewer;

pub use door::*;
pub use interviewer::*;
