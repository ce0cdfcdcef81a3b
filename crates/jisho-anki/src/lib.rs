mod client;
mod query;
mod store;

pub use client::AnkiConnectClient;
pub use query::field_query;
