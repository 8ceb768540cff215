use crate::types::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Events sent by a client, one per text frame.
///
/// Frames look like `{"event": "drawSegment", "payload": {...}}`. Events
/// without a payload may omit the `payload` field.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    StartStroke(StrokeProperties),
    DrawSegment(Segment),
    EndStroke,
    Undo,
    Redo,
    CursorMove(CursorPosition),
    /// An event name this server doesn't know. Callers ignore it.
    Unrecognized(String),
}

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed frame: {0}")]
    MalformedFrame(#[source] serde_json::Error),
    #[error("invalid payload for `{event}`: {source}")]
    InvalidPayload {
        event: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
struct Envelope {
    event: String,
    #[serde(default)]
    payload: serde_json::Value,
}

impl ClientEvent {
    pub fn from_json(text: &str) -> Result<Self, ProtocolError> {
        let Envelope { event, payload } =
            serde_json::from_str(text).map_err(ProtocolError::MalformedFrame)?;

        let client_event = match event.as_str() {
            "startStroke" => ClientEvent::StartStroke(parse_payload(&event, payload)?),
            "drawSegment" => ClientEvent::DrawSegment(parse_payload(&event, payload)?),
            "endStroke" => ClientEvent::EndStroke,
            "undo" => ClientEvent::Undo,
            "redo" => ClientEvent::Redo,
            "cursorMove" => ClientEvent::CursorMove(parse_payload(&event, payload)?),
            _ => ClientEvent::Unrecognized(event),
        };
        Ok(client_event)
    }

    pub fn name(&self) -> &str {
        match self {
            ClientEvent::StartStroke(_) => "startStroke",
            ClientEvent::DrawSegment(_) => "drawSegment",
            ClientEvent::EndStroke => "endStroke",
            ClientEvent::Undo => "undo",
            ClientEvent::Redo => "redo",
            ClientEvent::CursorMove(_) => "cursorMove",
            ClientEvent::Unrecognized(name) => name,
        }
    }
}

fn parse_payload<T>(event: &str, payload: serde_json::Value) -> Result<T, ProtocolError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_value(payload).map_err(|source| ProtocolError::InvalidPayload {
        event: event.to_owned(),
        source,
    })
}

/// Events sent by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "camelCase")]
pub enum ServerEvent {
    Init(InitPayload),
    UserJoined(Participant),
    UserLeft(ConnectionId),
    Drawing(DrawingPayload),
    Redraw(Vec<Stroke>),
    CursorMove(CursorMoved),
}

impl ServerEvent {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitPayload {
    #[serde(rename = "self")]
    pub me: Participant,
    pub all_users: HashMap<ConnectionId, Participant>,
    pub current_history: Vec<Stroke>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingPayload {
    pub segment: Segment,
    pub stroke_props: StrokeProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CursorMoved {
    pub id: ConnectionId,
    pub x: f64,
    pub y: f64,
}
