mod config;
mod services;
mod system;

pub use config::Config;
pub use services::{DispatchAck, DispatchError, NotifyClient};
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;

/// Shared context handed to every use case: configuration, the
/// notification endpoint client and the system clock.
#[derive(Clone)]
pub struct NotifyContext {
    pub config: Config,
    pub notifier: NotifyClient,
    pub sys: Arc<dyn ISys>,
}

impl NotifyContext {
    pub fn create(config: Config) -> Self {
        let notifier = NotifyClient::new(&config)
            .expect("Notification endpoint http client to be constructible");
        Self {
            config,
            notifier,
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub fn setup_context() -> NotifyContext {
    NotifyContext::create(Config::new())
}
