//! Inbound adapters translating external requests into domain calls.
//!
//! Framework details stay here; the domain never sees Actix types.

pub mod http;
