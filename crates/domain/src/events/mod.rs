//! Domain events
//!
//! Return types from aggregate mutations, communicating what happened when
//! state was modified. Callers decide how to surface them.

pub mod program_events;

pub use program_events::*;
