//! Core provider abstractions and implementations

pub mod providers;
pub mod traits;
