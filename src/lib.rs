//! # omada-exporter
//!
//! A Prometheus exporter for the TP-Link Omada Controller SDN.
//!
//! The exporter polls the controller's session-authenticated REST API on
//! an interval and republishes device, client, switch-port and controller
//! telemetry as Prometheus metric families.
//!
//! - 🔐 Session lifecycle handling: controller-identity discovery, site
//!   resolution and transparent re-login
//! - 🔄 Async API with Tokio runtime support
//! - 📊 Atomic per-cycle metric snapshots — `/metrics` never serves a
//!   half-written set
//!
//! ## Example
//!
//! ```rust,no_run
//! use omada_exporter::OmadaClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OmadaClient::builder()
//!         .host("https://omada.example.com")
//!         .username("exporter")
//!         .password("secret")
//!         .site("Default")
//!         .build()
//!         .await?;
//!
//!     for device in client.devices().list().await? {
//!         println!("{} ({}): up {}s", device.name, device.device_type, device.uptime);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
mod client;
pub mod collector;
pub mod config;
mod error;
pub mod mapping;
pub mod metrics;
pub mod models;
pub mod poller;
pub mod server;

pub use client::{AuthStrategy, OmadaClient, OmadaClientBuilder, Preflight, Reactive};
pub use collector::Collector;
pub use error::{OmadaError, OmadaResult};
pub use models::client::NetworkClient;
pub use models::controller::{Controller, Storage};
pub use models::device::Device;
pub use models::port::{Port, PortStatus};
