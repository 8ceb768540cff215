use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "whiteboard-server", about = "Shared whiteboard with global undo")]
pub struct Config {
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Directory served at `/`, usually the browser client.
    #[arg(long, env = "STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    #[arg(long, default_value_t = 5)]
    pub heartbeat_interval_secs: u64,

    /// Connections silent for longer than this are dropped.
    #[arg(long, default_value_t = 10)]
    pub client_timeout_secs: u64,
}

impl Config {
    pub fn heartbeat(&self) -> HeartbeatConfig {
        HeartbeatConfig {
            interval: Duration::from_secs(self.heartbeat_interval_secs),
            client_timeout: Duration::from_secs(self.client_timeout_secs),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeartbeatConfig {
    pub interval: Duration,
    pub client_timeout: Duration,
}
