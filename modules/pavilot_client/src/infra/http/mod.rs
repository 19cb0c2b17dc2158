//! reqwest-backed transport for the Pavilot REST API

mod client;
mod response;

pub use client::{HttpTransport, HttpTransportFactory, API_KEY_HEADER};
