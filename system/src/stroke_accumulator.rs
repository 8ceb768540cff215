use crate::types::*;

#[derive(Debug, Clone, PartialEq)]
pub enum AccumulatorState {
    Idle,
    Drawing(Stroke),
}

/// Collects the segments of the one stroke a connection is currently drawing.
///
/// Nothing here reaches the history until [`StrokeAccumulator::end`] hands a
/// non-empty stroke back to the caller.
#[derive(Debug)]
pub struct StrokeAccumulator {
    state: AccumulatorState,
}

impl StrokeAccumulator {
    pub fn new() -> Self {
        Self {
            state: AccumulatorState::Idle,
        }
    }

    pub fn state(&self) -> &AccumulatorState {
        &self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, AccumulatorState::Drawing(_))
    }

    /// Properties of the in-progress stroke, if any.
    pub fn current_props(&self) -> Option<&StrokeProperties> {
        match &self.state {
            AccumulatorState::Drawing(stroke) => Some(&stroke.props),
            AccumulatorState::Idle => None,
        }
    }

    /// Starts a new stroke. A stroke already in progress is dropped without
    /// being completed.
    pub fn begin(&mut self, props: StrokeProperties) {
        if let AccumulatorState::Drawing(previous) = &self.state {
            log::debug!(
                "Discarding unfinished stroke with {} segments",
                previous.segments.len()
            );
        }
        self.state = AccumulatorState::Drawing(Stroke::new(props));
    }

    /// Returns false when idle, in which case the segment is dropped.
    pub fn append(&mut self, segment: Segment) -> bool {
        match &mut self.state {
            AccumulatorState::Drawing(stroke) => {
                stroke.segments.push(segment);
                true
            }
            AccumulatorState::Idle => false,
        }
    }

    /// Finishes the in-progress stroke. Empty strokes are discarded.
    pub fn end(&mut self) -> Option<Stroke> {
        match std::mem::replace(&mut self.state, AccumulatorState::Idle) {
            AccumulatorState::Drawing(stroke) if !stroke.is_empty() => Some(stroke),
            _ => None,
        }
    }

    /// Drops whatever is in progress. Used when the connection goes away.
    pub fn abandon(&mut self) -> Option<Stroke> {
        match std::mem::replace(&mut self.state, AccumulatorState::Idle) {
            AccumulatorState::Drawing(stroke) => Some(stroke),
            AccumulatorState::Idle => None,
        }
    }
}

impl std::default::Default for StrokeAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
