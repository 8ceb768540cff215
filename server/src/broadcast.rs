use system::{ConnectionId, ServerEvent};

/// Unicast delivery over the transport, plus the set of connections it can
/// currently reach.
pub trait EventSink {
    fn connection_ids(&self) -> Vec<ConnectionId>;
    fn deliver(&mut self, to: &ConnectionId, event: ServerEvent);
}

/// Routes server events to everyone, everyone but one connection, or a single
/// connection. No buffering and no retry happen here.
pub struct BroadcastCoordinator<S> {
    sink: S,
}

impl<S: EventSink> BroadcastCoordinator<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn to_all(&mut self, event: ServerEvent) {
        for connection_id in self.sink.connection_ids() {
            self.sink.deliver(&connection_id, event.clone());
        }
    }

    pub fn to_all_except(&mut self, without: &ConnectionId, event: ServerEvent) {
        for connection_id in self.sink.connection_ids() {
            if &connection_id != without {
                self.sink.deliver(&connection_id, event.clone());
            }
        }
    }

    pub fn to_sender(&mut self, to: &ConnectionId, event: ServerEvent) {
        self.sink.deliver(to, event);
    }
}
