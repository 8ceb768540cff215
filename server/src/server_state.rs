use crate::admin::SessionStatus;
use crate::broadcast::{BroadcastCoordinator, EventSink};
use crate::directory::SessionDirectory;
use crate::session::ConnectionSession;
use std::collections::HashMap;
use system::{ClientEvent, ConnectionId, SessionHistory};

/// State shared by every connection of the session.
#[derive(Debug)]
pub struct SessionState {
    pub history: SessionHistory,
    pub directory: SessionDirectory,
}

impl SessionState {
    pub fn new(directory: SessionDirectory) -> Self {
        Self {
            history: SessionHistory::new(),
            directory,
        }
    }
}

impl std::default::Default for SessionState {
    fn default() -> Self {
        Self::new(SessionDirectory::new())
    }
}

pub struct ServerState<S> {
    session: SessionState,
    connections: HashMap<ConnectionId, ConnectionSession>,
    coordinator: BroadcastCoordinator<S>,
}

impl<S: EventSink> ServerState<S> {
    pub fn new(sink: S) -> Self {
        Self::with_directory(SessionDirectory::new(), sink)
    }

    pub fn with_directory(directory: SessionDirectory, sink: S) -> Self {
        Self {
            session: SessionState::new(directory),
            connections: HashMap::new(),
            coordinator: BroadcastCoordinator::new(sink),
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn connection(&self, connection_id: &ConnectionId) -> Option<&ConnectionSession> {
        self.connections.get(connection_id)
    }

    pub fn sink(&self) -> &S {
        self.coordinator.sink()
    }

    pub fn sink_mut(&mut self) -> &mut S {
        self.coordinator.sink_mut()
    }

    /// The sink must already reach `connection_id`, so that `init` can be
    /// delivered.
    pub fn connect(&mut self, connection_id: ConnectionId) {
        if let Some(stale) = self.connections.remove(&connection_id) {
            log::warn!("Connection {} reconnected without leaving", connection_id);
            stale.close(&mut self.session, &mut self.coordinator);
        }
        let connection =
            ConnectionSession::open(connection_id, &mut self.session, &mut self.coordinator);
        self.connections.insert(connection_id, connection);
    }

    pub fn disconnect(&mut self, connection_id: &ConnectionId) {
        match self.connections.remove(connection_id) {
            Some(connection) => connection.close(&mut self.session, &mut self.coordinator),
            None => log::warn!("Unknown connection {} disconnected", connection_id),
        }
    }

    pub fn handle_client_event(&mut self, from: &ConnectionId, event: ClientEvent) {
        match self.connections.get_mut(from) {
            Some(connection) => {
                connection.handle_event(event, &mut self.session, &mut self.coordinator)
            }
            None => log::warn!(
                "Ignoring `{}` from unknown connection {}",
                event.name(),
                from
            ),
        }
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            participants: self.session.directory.len(),
            drawing: self
                .connections
                .values()
                .filter(|connection| connection.is_drawing())
                .count(),
            history: self.session.history.len(),
            redo: self.session.history.redo_len(),
        }
    }
}
