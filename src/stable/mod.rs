// Baseline for benchmarks, and the only implementation the stability tests apply to.
pub mod rust_std;
