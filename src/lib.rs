//! Grid chase (workspace facade crate).
//!
//! Re-exports the workspace crates as `grid_chase::{core,engine,input,term,types}`
//! so the binary, integration tests and benches share one import path.

pub use grid_chase_core as core;
pub use grid_chase_engine as engine;
pub use grid_chase_input as input;
pub use grid_chase_term as term;
pub use grid_chase_types as types;
