//! Task categories.

pub mod kind;

pub use kind::Task;
