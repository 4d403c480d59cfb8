// Export submodules
pub mod clients;
pub mod controller;
pub mod devices;
pub mod ports;
