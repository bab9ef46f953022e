pub mod branching;
pub mod cache;
pub mod config;
pub mod error;
pub mod grid;
pub mod model;
pub mod point;
pub mod scan;
// cmd and reports are binary modules (declared in main.rs).
