//! Directive data model.
//!
//! A control plane programs a flow by installing a **directive sequence**: an
//! ordered, cyclic list of [`PatternEvent`]s. This module holds the event sum
//! type, its control-plane wire codes, and the shared, immutable
//! [`DirectiveSequence`] container.

mod event;
mod sequence;

pub use event::PatternEvent;
pub use sequence::DirectiveSequence;
