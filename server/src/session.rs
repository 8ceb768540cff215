use crate::broadcast::{BroadcastCoordinator, EventSink};
use crate::server_state::SessionState;
use system::{
    AccumulatorState, ClientEvent, ConnectionId, CursorMoved, DrawingPayload, InitPayload,
    ServerEvent, StrokeAccumulator,
};

/// Per-connection half of the session: the participant's identity and the
/// stroke it is drawing right now.
///
/// Every handler runs to completion on the server loop, so the shared
/// [`SessionState`] is never observed half-updated.
#[derive(Debug)]
pub struct ConnectionSession {
    connection_id: ConnectionId,
    accumulator: StrokeAccumulator,
}

impl ConnectionSession {
    /// Registers the participant, sends it the current state and announces it
    /// to everyone else.
    pub fn open<S: EventSink>(
        connection_id: ConnectionId,
        session: &mut SessionState,
        coordinator: &mut BroadcastCoordinator<S>,
    ) -> Self {
        let me = session.directory.join(connection_id);
        log::info!("Connection {} joined with color {}", connection_id, me.color);

        coordinator.to_sender(
            &connection_id,
            ServerEvent::Init(InitPayload {
                me: me.clone(),
                all_users: session.directory.all().clone(),
                current_history: session.history.snapshot(),
            }),
        );
        coordinator.to_all_except(&connection_id, ServerEvent::UserJoined(me));

        Self {
            connection_id,
            accumulator: StrokeAccumulator::new(),
        }
    }

    pub fn connection_id(&self) -> &ConnectionId {
        &self.connection_id
    }

    pub fn state(&self) -> &AccumulatorState {
        self.accumulator.state()
    }

    pub fn is_drawing(&self) -> bool {
        self.accumulator.is_drawing()
    }

    pub fn handle_event<S: EventSink>(
        &mut self,
        event: ClientEvent,
        session: &mut SessionState,
        coordinator: &mut BroadcastCoordinator<S>,
    ) {
        match event {
            ClientEvent::StartStroke(props) => self.accumulator.begin(props),
            ClientEvent::DrawSegment(segment) => match self.accumulator.current_props().cloned() {
                Some(stroke_props) => {
                    self.accumulator.append(segment);
                    coordinator.to_all_except(
                        &self.connection_id,
                        ServerEvent::Drawing(DrawingPayload {
                            segment,
                            stroke_props,
                        }),
                    );
                }
                None => log::debug!(
                    "Dropping segment from {}: no stroke in progress",
                    self.connection_id
                ),
            },
            ClientEvent::EndStroke => {
                if let Some(stroke) = self.accumulator.end() {
                    log::debug!(
                        "Connection {} completed a stroke with {} segments",
                        self.connection_id,
                        stroke.segments.len()
                    );
                    session.history.append(stroke);
                }
            }
            ClientEvent::Undo => {
                if let Some(strokes) = session.history.undo() {
                    coordinator.to_all(ServerEvent::Redraw(strokes.to_vec()));
                }
            }
            ClientEvent::Redo => {
                if let Some(strokes) = session.history.redo() {
                    coordinator.to_all(ServerEvent::Redraw(strokes.to_vec()));
                }
            }
            ClientEvent::CursorMove(position) => coordinator.to_all_except(
                &self.connection_id,
                ServerEvent::CursorMove(CursorMoved {
                    id: self.connection_id,
                    x: position.x,
                    y: position.y,
                }),
            ),
            ClientEvent::Unrecognized(name) => log::debug!(
                "Ignoring unrecognized event `{}` from {}",
                name,
                self.connection_id
            ),
        }
    }

    /// Drops the unfinished stroke, if any, and announces the departure.
    pub fn close<S: EventSink>(
        mut self,
        session: &mut SessionState,
        coordinator: &mut BroadcastCoordinator<S>,
    ) {
        if let Some(stroke) = self.accumulator.abandon() {
            log::info!(
                "Discarding unfinished stroke of {} with {} segments",
                self.connection_id,
                stroke.segments.len()
            );
        }
        session.directory.leave(&self.connection_id);
        coordinator.to_all_except(
            &self.connection_id,
            ServerEvent::UserLeft(self.connection_id),
        );
        log::info!("Connection {} left", self.connection_id);
    }
}
