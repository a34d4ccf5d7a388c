//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `chat`, `sources`, `notify`) so
//! individual components can depend on small focused models. The structs are
//! plain and synchronous; components wrap them in `RwSignal`s.

pub mod chat;
pub mod notify;
pub mod session;
pub mod sources;
