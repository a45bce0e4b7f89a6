// Twitch infra layer.
// - `kraken_transport.rs` performs status requests over HTTP.
// - `config_file.rs` reads the plugin options from disk.

#[path = "kraken_transport.rs"]
pub mod kraken_transport;

#[path = "config_file.rs"]
pub mod config_file;

pub use config_file::JsonConfigFile;
pub use kraken_transport::KrakenTransport;
