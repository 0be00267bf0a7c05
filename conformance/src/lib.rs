//! Conformance harness for the staged run manager protocol.
//!
//! The run manager in `runstage-core` encodes its configuration order in
//! the type system, which means its failure modes cannot be exercised by
//! ordinary tests: the illegal programs do not compile. This crate proves
//! the enforcement boundary from the outside. For each named scenario it
//! materializes an isolated Cargo project embedding an illegal call chain,
//! invokes the external build tool, and passes only when the build fails
//! *and* the captured diagnostics contain the expected fragment.
//!
//! The build tool is a black-box oracle: the harness depends on nothing
//! beyond the exit status and substring containment, so diagnostic wording
//! can evolve without rewriting the harness.

pub mod diagnostics;
pub mod error;
pub mod project;
pub mod report;
pub mod runner;
pub mod scenario;

pub use error::ConformanceError;
pub use error::Result;
