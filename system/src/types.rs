use serde::{de, Deserialize, Deserializer, Serialize};

pub type ConnectionId = uuid::Uuid;

/// A directed line piece of a stroke, in canvas coordinates.
///
/// Coordinates are not bounded; a segment drawn before a resize may lie
/// outside the current canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
}

impl Segment {
    pub fn new(start_x: f64, start_y: f64, end_x: f64, end_y: f64) -> Self {
        Self {
            start_x,
            start_y,
            end_x,
            end_y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Brush,
    Eraser,
}

impl std::default::Default for Tool {
    fn default() -> Self {
        Tool::Brush
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeProperties {
    #[serde(default)]
    pub tool: Tool,
    pub color: String,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub width: f64,
}

/// Browser form controls report their value as a string, so `"5"` is
/// accepted as well as `5`.
fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("expected a number, got {:?}", s))),
    }
}

/// Properties plus the segments in drawing order.
///
/// On the wire the properties are flattened next to `segments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    #[serde(flatten)]
    pub props: StrokeProperties,
    pub segments: Vec<Segment>,
}

impl Stroke {
    pub fn new(props: StrokeProperties) -> Self {
        Self {
            props,
            segments: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ConnectionId,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CursorPosition {
    pub x: f64,
    pub y: f64,
}
