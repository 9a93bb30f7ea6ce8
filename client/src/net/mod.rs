//! Networking modules for the board game REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `channel` is the request pipeline every call goes through; `request` and
//! `transport` are its input and network seam. `auth`, `boardgames`,
//! `wishlist`, and `plays` are thin endpoint builders over it, and `types`
//! defines the wire schema.

pub mod auth;
pub mod boardgames;
pub mod channel;
pub mod error;
pub mod plays;
pub mod request;
pub mod transport;
pub mod types;
pub mod wishlist;

#[cfg(test)]
mod test_support;
