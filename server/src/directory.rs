use crate::color::random_color;
use std::collections::HashMap;
use system::{ConnectionId, Participant};

pub type ColorSource = fn() -> String;

/// Participants of the session, keyed by connection.
pub struct SessionDirectory {
    participants: HashMap<ConnectionId, Participant>,
    color_source: ColorSource,
}

impl SessionDirectory {
    pub fn new() -> Self {
        Self::with_color_source(random_color)
    }

    pub fn with_color_source(color_source: ColorSource) -> Self {
        Self {
            participants: HashMap::new(),
            color_source,
        }
    }

    /// Registers a fresh participant for the connection. A record left over
    /// under the same identity is replaced, not reused.
    pub fn join(&mut self, connection_id: ConnectionId) -> Participant {
        let participant = Participant {
            id: connection_id,
            color: (self.color_source)(),
        };
        if self
            .participants
            .insert(connection_id, participant.clone())
            .is_some()
        {
            log::warn!("Connection {} joined twice", connection_id);
        }
        participant
    }

    pub fn leave(&mut self, connection_id: &ConnectionId) -> Option<Participant> {
        self.participants.remove(connection_id)
    }

    pub fn all(&self) -> &HashMap<ConnectionId, Participant> {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

impl std::default::Default for SessionDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionDirectory")
            .field("participants", &self.participants)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use system::uuid::Uuid;

    fn teal() -> String {
        "#008080".into()
    }

    #[test]
    fn it_registers_and_removes_participants() {
        let mut directory = SessionDirectory::with_color_source(teal);
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        let participant = directory.join(a);
        assert_eq!(participant.id, a);
        assert_eq!(participant.color, "#008080");
        directory.join(b);
        assert_eq!(directory.len(), 2);
        assert!(directory.all().contains_key(&b));

        assert_eq!(directory.leave(&a), Some(participant));
        assert!(directory.all().get(&a).is_none());
        assert_eq!(directory.len(), 1);
        assert!(directory.leave(&a).is_none());
    }

    #[test]
    fn it_treats_rejoin_as_fresh_participant() {
        let mut directory = SessionDirectory::new();
        let a = Uuid::new_v4();
        directory.join(a);
        directory.leave(&a);
        let again = directory.join(a);
        assert_eq!(directory.all().get(&a), Some(&again));
        assert_eq!(directory.len(), 1);
    }
}
