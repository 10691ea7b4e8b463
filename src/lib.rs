//! Typed client SDK for the SwagUp custom-merchandise REST API.
//!
//! The API covers the whole lifecycle of a piece of custom merchandise:
//! creating a design, uploading artwork, picking a logo color, choosing
//! sizes and quantities, setting a shipping destination, registering a
//! payment method, and finally placing, tracking, and cancelling orders.
//!
//! Every operation is a single HTTP round trip authenticated by the
//! `X-SwagUp-API-Key` header.  Responses arrive wrapped in a
//! `{status, message, data}` envelope; only `data` is unwrapped and mapped
//! into the typed records in [`objects`].
//!
//! The HTTP client lives behind the `client` cargo feature (enabled by
//! default) so downstream crates that only need the wire types do not pull
//! in `reqwest`.

pub mod objects;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "client")]
pub use client::{API_KEY_HEADER, ClientError, SwagUpClient};
