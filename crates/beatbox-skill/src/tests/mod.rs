//! Test suites for the playlist skill.

pub(crate) mod support;
