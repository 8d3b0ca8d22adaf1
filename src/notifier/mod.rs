//! Merge notifier
//!
//! Linear flow: merged? → derive SourceId → lookup → update or create.
//! 1. Draft - build properties and body (pure, testable)
//! 2. Upsert - one lookup, then one write (effectful)

mod run;
mod upsert;

pub use run::run;
pub use upsert::upsert_record;
