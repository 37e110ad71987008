//! Error types for the pattern engine.

use thiserror::Error;

/// Errors from the outbound control channel.
///
/// Both channel operations are fire-and-forget: the interpreter logs these
/// and carries on, so the variants exist for observability and for adapter
/// implementors, not for control flow.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChannelError {
    /// The control-plane peer is gone and the channel is closed.
    #[error("control channel closed")]
    Closed,

    /// The outbound queue is full; the message was dropped, not queued.
    #[error("control channel backlogged, message dropped")]
    Backlogged,

    /// Transport-specific send failure.
    #[error("control channel send failed: {0}")]
    Send(String),
}

/// Errors decoding a directive sequence from its wire encoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// Directive kind code not in the control-plane encoding.
    #[error("unknown directive kind: {0:#04x}")]
    UnknownKind(u8),

    /// A directive sequence must contain at least one event.
    #[error("empty directive sequence")]
    EmptySequence,
}
