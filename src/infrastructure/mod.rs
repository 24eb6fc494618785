//! Record sink adapters: HTTP for real targets, in-memory for tests.

pub mod http;
pub mod in_memory;
