//! Message shapes of the embedded assistant `Assist` RPC.
//!
//! Field names and enum values follow the proto3 JSON mapping, so every
//! message here encodes losslessly to and from the remote schema.
#[macro_use]
mod wire;
mod bytes;

pub mod audio;
pub mod config;
pub mod events;
pub mod screen;

pub use config::{AssistConfig, DebugConfig, DeviceConfig, DeviceLocation, DialogStateIn, LatLng};
pub use events::{AssistRequest, AssistResponse};
