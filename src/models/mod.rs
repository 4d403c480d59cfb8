//! Data models for the Omada controller API.
//!
//! This module contains the various data structures used in the Omada API.

// Export submodules
pub mod api_response;
pub mod auth;
pub mod client;
pub mod controller;
pub mod device;
pub mod port;
pub mod user;
