//! Domain types and pure logic for the Ayiti tourism directory.
//!
//! Nothing in this crate touches the database or the network; the `db`
//! and `api` crates build on these types.

pub mod booking;
pub mod error;
pub mod figure;
pub mod filter;
pub mod listing;
pub mod map;
pub mod place_kind;
pub mod roles;
pub mod slug;
pub mod types;
pub mod upload;
