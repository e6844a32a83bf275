#![no_std] // Shared with the WASM platform build

extern crate alloc;

pub mod diagnostic;
pub mod ids;
pub mod rule;

// Re-export core types for convenience
pub use diagnostic::{Diagnostic, Severity};
pub use ids::LineNumber;
pub use rule::{Rule, RuleFlags};
