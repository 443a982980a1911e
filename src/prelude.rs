//! Prelude module for looping_time crate.
//!
//! Re-exports the derive macros and logging macros shared by the unit modules.

#[allow(unused_imports)]
pub use derive_more::{Display, From};
#[allow(unused_imports)]
pub use tracing::{debug, trace};
