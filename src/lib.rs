// src/lib.rs

pub mod config;
pub mod diff;
pub mod error;
pub mod member;
pub mod notify;
pub mod reconciler;
pub mod roster;
pub mod snapshot;
