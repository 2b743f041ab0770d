//! Batch coordination: turning a set of uploaded files into one scoring event.
//!
//! - `classify` - routes a filename to the roster, standard or bonus path
//! - `BatchCoordinator` - pending-set tracking with a single finalization
//! - `FileSource` - where file bytes come from (disk, bundled demo data)
//! - `ingest` - reads files concurrently and applies the finalized batch to a league

mod classify;
mod coordinator;
mod runner;
mod source;

pub use classify::*;
pub use coordinator::*;
pub use runner::*;
pub use source::*;
