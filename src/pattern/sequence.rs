//! Shared directive sequences.

use std::fmt;
use std::sync::Arc;

use super::event::PatternEvent;
use crate::core::PatternError;

/// An ordered, immutable directive sequence shared between the installer and
/// the interpreter.
///
/// Cloning is cheap (one `Arc` bump). A sequence is never edited in place:
/// reinstallation replaces the whole sequence, and an old sequence still held
/// by an in-flight `advance` stays alive until that reference drops.
///
/// # Invariant
///
/// An installed sequence must be non-empty; the cursor arithmetic is modular
/// in the sequence length. [`DirectiveSequence::new`] trusts its caller (the
/// control-plane response path), while [`DirectiveSequence::from_wire`]
/// enforces non-emptiness for untrusted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveSequence {
    events: Arc<[PatternEvent]>,
}

impl DirectiveSequence {
    /// Create a sequence from already-validated events.
    ///
    /// The installer is trusted to supply at least one event.
    pub fn new(events: Vec<PatternEvent>) -> Self {
        debug_assert!(!events.is_empty(), "directive sequence must be non-empty");
        Self {
            events: events.into(),
        }
    }

    /// Decode a sequence from its control-plane `(kind, value)` encoding.
    ///
    /// Rejects unknown kind codes and empty input.
    pub fn from_wire(directives: &[(u8, u32)]) -> Result<Self, PatternError> {
        if directives.is_empty() {
            return Err(PatternError::EmptySequence);
        }
        let events = directives
            .iter()
            .map(|&(kind, value)| PatternEvent::from_wire(kind, value))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(events))
    }

    /// Number of events in the sequence.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the sequence holds no events.
    ///
    /// Always `false` for sequences built through the public constructors.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Event at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<PatternEvent> {
        self.events.get(index).copied()
    }

    /// Iterate over the events in order.
    pub fn iter(&self) -> impl Iterator<Item = PatternEvent> + '_ {
        self.events.iter().copied()
    }
}

impl std::ops::Index<usize> for DirectiveSequence {
    type Output = PatternEvent;

    fn index(&self, index: usize) -> &PatternEvent {
        &self.events[index]
    }
}

impl fmt::Display for DirectiveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ev) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "[ev {i}] {ev}")?;
        }
        Ok(())
    }
}
