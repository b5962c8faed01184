//! Voice-assistant skill that recommends workout playlists.
//!
//! The skill answers one request envelope per input line. A user names a
//! workout category ("fuerza", "cardio", ...) and the skill looks up the first
//! active playlist for it in a remote catalog, speaking its name and rendering
//! a visual template on screen-capable devices. Help, cancel and stop intents
//! get fixed answers, and a button on the template opens the playlist link.
//!
//! Bootstrap loads configuration through [`beatbox_config`], installs
//! structured telemetry on stderr, and builds a [`Skill`] around an
//! [`HttpCatalog`]. The skill itself is stateless: no data survives from one
//! invocation to the next, and the catalog is fetched afresh on every playlist
//! request.
//!
//! Failures never escape an invocation. Malformed envelopes, unmatched
//! requests and missing slots all end in the fallback handler, which logs the
//! error through the invocation's [`SkillLogger`] and apologises to the user.

mod bootstrap;
pub mod catalog;
pub mod dispatch;
mod handlers;
mod health;
mod logger;
mod telemetry;
mod template;

pub use bootstrap::{
    BootstrapError, ConfigLoader, StaticConfigLoader, SystemConfigLoader, bootstrap_with,
};
pub use catalog::{CatalogError, CatalogSource, HttpCatalog, PlaylistRecord};
pub use dispatch::{DispatchError, ResponsePayload, Skill};
pub use health::{HealthReporter, StructuredHealthReporter};
pub use logger::{SkillLogger, StructuredSkillLogger};
pub use telemetry::{TelemetryError, TelemetryHandle};
pub use template::{TemplateError, VisualTemplate};

#[cfg(test)]
mod tests;
