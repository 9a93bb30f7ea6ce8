//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates requests to the
//! `net` collaborators. Access control is applied around pages by `Guarded`,
//! never inside them.

pub mod login;
pub mod my_games;
pub mod plays;
pub mod register;
pub mod wishlist;
