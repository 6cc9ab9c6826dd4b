// Adapters layer: concrete surfaces and storage the core is wired to.

pub mod memory;
pub mod storage;
