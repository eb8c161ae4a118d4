//! mark-match (workspace facade crate).
//!
//! This package keeps the `mark_match::{core,engine,input,term,types}`
//! public API in one place while the implementation lives in dedicated
//! crates under `crates/`.

pub use mark_match_core as core;
pub use mark_match_engine as engine;
pub use mark_match_input as input;
pub use mark_match_term as term;
pub use mark_match_types as types;
