//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns authentication state; `storage` abstracts the durable
//! key-value store it mirrors to, so the session runs unchanged in tests.

pub mod session;
pub mod storage;
