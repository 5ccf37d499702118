//! Services module for the Bajeti desktop application
//!
//! This module contains services that provide functionality across the
//! application, such as the in-memory account store.

pub mod accounts;

pub use accounts::{Account, AccountStore, NewAccount, ProfileUpdate};
