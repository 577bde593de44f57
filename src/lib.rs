// ABOUTME: Library root for logcabin — scoped, buffered, timed logging to named files.
// ABOUTME: The cabin binary in main.rs drives this crate as a library.

pub mod cabin;
pub mod command;
pub mod config;
pub mod session;

pub use cabin::{Cabin, Scoped};
pub use config::Config;
pub use session::{Entry, FlushOutcome, Level, Options, Session};
