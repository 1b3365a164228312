//! Setup validation (environment + file layout probes).
//!
//! Renders the platform's "is this deployment configured?" question as a
//! registry of probes checked on demand. Probes are registered on the
//! validator at state construction and run per request; results carry a
//! stable status vocabulary so the dashboard can render them directly.

pub mod probes;
pub mod validator;

pub use probes::{CheckResult, CheckStatus, EnvProbe, FileProbe, SetupProbe};
pub use validator::{SetupValidator, ValidationReport};
