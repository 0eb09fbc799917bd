//! External integrations
//!
//! The only external collaborator is the Pandoc binary, reached through the
//! trait-based [`pandoc`] boundary so tests can substitute a stub runner.

pub mod pandoc;

pub use pandoc::{PandocRunner, SystemPandoc};
