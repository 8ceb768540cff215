pub mod admin;
pub mod broadcast;
mod color;
pub mod config;
pub mod connection;
pub mod connection_tx_storage;
pub mod directory;
pub mod handlers;
pub mod server;
pub mod server_state;
pub mod session;
