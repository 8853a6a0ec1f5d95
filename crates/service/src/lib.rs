//! Directory service layer on top of `models`.
//! - Validates inbound requests against declarative rule tables.
//! - Reaches the store only through repository traits, each call bounded by a timeout.
//! - Shapes rows into the outward response envelopes.

pub mod errors;
pub mod deadline;
pub mod requests;
pub mod responses;
pub mod db;
pub mod directory;
#[cfg(test)]
pub mod test_support;
