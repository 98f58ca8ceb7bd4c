//! Access tokens and password hashing for editor accounts.

pub mod bootstrap;
pub mod jwt;
pub mod password;
