//! Traversal state: the flow cursor and the per-session response store.

pub mod cursor;
pub mod responses;

pub use cursor::{FlowCursor, FlowState};
pub use responses::{ResponseSnapshot, ResponseStore, SKIP};
