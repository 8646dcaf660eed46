pub mod client;
pub mod error;
pub mod rank;
pub mod service;
pub mod state;

pub use client::DatamuseClient;
pub use error::LookupError;
pub use service::Lookup;
pub use state::{LookupState, NO_DEFINITION};

#[cfg(test)]
mod tests;
