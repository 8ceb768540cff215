use crate::broadcast::EventSink;
use std::collections::HashMap;
use system::{ConnectionId, ServerEvent};

pub type ConnectionTx = tokio::sync::mpsc::UnboundedSender<ServerEvent>;

/// Egress channels of the connection actors, keyed by connection.
pub struct ConnectionTxStorage {
    connection_txs: HashMap<ConnectionId, ConnectionTx>,
}

impl ConnectionTxStorage {
    pub fn new() -> Self {
        Self {
            connection_txs: HashMap::new(),
        }
    }

    pub fn insert(&mut self, connection_id: ConnectionId, tx: ConnectionTx) {
        self.connection_txs.insert(connection_id, tx);
    }

    pub fn remove(&mut self, connection_id: &ConnectionId) -> Option<ConnectionTx> {
        self.connection_txs.remove(connection_id)
    }
}

impl EventSink for ConnectionTxStorage {
    fn connection_ids(&self) -> Vec<ConnectionId> {
        self.connection_txs.keys().cloned().collect()
    }

    fn deliver(&mut self, to: &ConnectionId, event: ServerEvent) {
        if let Some(tx) = self.connection_txs.get_mut(to) {
            if tx.send(event).is_err() {
                log::warn!("Egress channel of connection {} is closed", to);
            }
        } else {
            log::warn!("Tried to send to unknown connection {}", to);
        }
    }
}
