//! Spintris (workspace facade crate).
//!
//! Re-exports the member crates under one name so the binary, integration
//! tests and benches can write `spintris::core::Game` and friends.

pub use spintris_core as core;
pub use spintris_engine as engine;
pub use spintris_term as term;
pub use spintris_types as types;
