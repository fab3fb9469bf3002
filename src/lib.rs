//! Request/response primitives for publish-subscribe transports that only
//! offer one-shot queries.
//!
//! The crate holds the pieces every bridge participant agrees on: resource
//! identifiers and their canonical form, the attribute envelope that travels
//! out-of-band next to a payload, the decoded result message, and the traits a
//! transport session has to satisfy. Runtime concerns (lifecycle, worker pool,
//! reply collection) live in `querybridge-rpc-client`.

pub mod attributes;
pub mod constants;
pub mod message;
pub mod transport;
pub mod uri;
pub mod utils;
pub mod uuid;
