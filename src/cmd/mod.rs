pub mod benchmarks;
pub mod grid;
pub mod scan;
pub mod show;
