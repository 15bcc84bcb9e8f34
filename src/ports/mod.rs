// src/ports/mod.rs

pub use console::Console;
pub use hiring_manager::HiringManager;

pub mod console;
pub mod hiring_manager;
