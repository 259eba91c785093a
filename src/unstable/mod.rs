pub mod rust_dary_heapsort;
pub mod rust_drop_merge;
pub mod rust_mel;
pub mod rust_std;

// Reference drop-merge sort implementation from crates.io.
#[cfg(feature = "rust_dmsort")]
pub mod rust_dmsort;
