//! Notification core for an insurance-agency CRM: reminder offset
//! computation, participant resolution, change detection and
//! fire-and-forget dispatch to an external email-sending endpoint.
//!
//! Host applications call the use cases in [`api`] from their own event
//! handlers; nothing here owns persisted state.

pub mod telemetry;

pub use agencia_notify_api as api;
pub use agencia_notify_domain as domain;
pub use agencia_notify_infra as infra;
