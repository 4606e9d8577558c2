//! Filesystem utilities for dragonsmith.

pub mod atomic;

pub use atomic::atomic_write_file;
