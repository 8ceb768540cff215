use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};

use super::connection::ConnectionCommand;
use crate::admin::AdminCommand;
use crate::connection_tx_storage::ConnectionTxStorage;
use crate::server_state::ServerState;

pub type ServerTx = UnboundedSender<ServerCommand>;

#[derive(Debug)]
pub enum ServerCommand {
    Connection(ConnectionCommand),
    Admin(AdminCommand),
}

/// Owns the whole session. Commands from every connection are handled one at
/// a time, each to completion.
struct Server {
    server_state: ServerState<ConnectionTxStorage>,
}

impl Server {
    fn new() -> Self {
        Self {
            server_state: ServerState::new(ConnectionTxStorage::new()),
        }
    }

    fn handle_command(&mut self, command: ServerCommand) {
        match command {
            ServerCommand::Connection(command) => self.handle_connection_command(command),
            ServerCommand::Admin(command) => self.handle_admin_command(command),
        }
    }

    fn handle_connection_command(&mut self, command: ConnectionCommand) {
        match command {
            ConnectionCommand::Connect { connection_id, tx } => {
                self.server_state.sink_mut().insert(connection_id, tx);
                self.server_state.connect(connection_id);
            }
            ConnectionCommand::Disconnect { from } => {
                self.server_state.sink_mut().remove(&from);
                self.server_state.disconnect(&from);
            }
            ConnectionCommand::ClientEvent { from, event } => {
                self.server_state.handle_client_event(&from, event);
            }
        }
    }

    fn handle_admin_command(&mut self, command: AdminCommand) {
        match command {
            AdminCommand::GetSessionStatus { tx } => {
                if tx.send(self.server_state.status()).is_err() {
                    log::warn!("Status requester went away");
                }
            }
        }
    }
}

pub fn spawn_server() -> ServerTx {
    let (srv_tx, mut srv_rx) = unbounded_channel::<ServerCommand>();

    tokio::spawn(async move {
        let mut server = Server::new();

        log::info!("server loop - started");
        while let Some(command) = srv_rx.recv().await {
            server.handle_command(command);
        }
        log::info!("server loop - terminated");
    });

    srv_tx
}
