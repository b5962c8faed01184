//! Request handlers, one per [`SkillRequest`](crate::dispatch::SkillRequest)
//! variant plus the fallback.
//!
//! Handlers are stateless functions: everything they need arrives as
//! arguments and every outcome is expressed as a [`ResponsePayload`].
//!
//! [`ResponsePayload`]: crate::dispatch::ResponsePayload

pub(crate) mod builtin;
pub(crate) mod fallback;
pub(crate) mod select_playlist;
pub(crate) mod visual_event;
