mod client;
mod types;

pub use client::{HttpModelClient, ModelClient};
pub use types::{ModelRequest, extract_reply};
