//! Test doubles and scenario worlds shared by the skill's test suites.

mod backend;
mod config_loader;
mod logger;
mod reporter;
mod world;

pub use backend::{StubBackend, unreachable_url};
pub use config_loader::{FailingConfigLoader, TestConfigLoader};
pub use logger::{LogEvent, RecordingSkillLogger};
pub use reporter::{HealthEvent, RecordingHealthReporter};
pub use world::{BootstrapWorld, bootstrap_world};
