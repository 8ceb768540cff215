use serde::Serialize;
use tokio::sync::oneshot::Sender;

#[derive(Debug)]
pub enum AdminCommand {
    GetSessionStatus { tx: Sender<SessionStatus> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionStatus {
    pub participants: usize,
    /// Connections with a stroke in progress.
    pub drawing: usize,
    pub history: usize,
    pub redo: usize,
}
