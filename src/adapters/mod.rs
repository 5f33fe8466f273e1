// Adapters layer: bridge the `SendData` capability onto third-party transports.

pub mod direct;
pub mod json;

pub use direct::DirectSendAdapter;
pub use json::JsonSendAdapter;
