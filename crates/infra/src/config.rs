use agencia_notify_utils::create_random_secret;
use tracing::{info, warn};

const DEFAULT_ENDPOINT_URL: &str = "http://localhost:5000/api/notifications";
const DEFAULT_TIMEOUT_MILLIS: u64 = 10_000;
const API_KEY_LEN: usize = 30;

/// Process configuration for the notification core. Sender identity and
/// credentials are always injected through the environment, never
/// hardcoded in source.
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the external email-sending endpoint
    pub notify_endpoint_url: String,
    /// Key sent along with every dispatch so the endpoint can
    /// authenticate this service
    pub notify_api_key: String,
    /// Identity the endpoint sends emails from. This address is also
    /// stripped from every participant list so the service never
    /// notifies itself.
    pub sender_email: String,
    /// Request timeout for dispatch calls in millis
    pub request_timeout_millis: u64,
}

impl Config {
    pub fn new() -> Self {
        let notify_endpoint_url = match std::env::var("NOTIFY_ENDPOINT_URL") {
            Ok(url) => url,
            Err(_) => {
                warn!(
                    "Did not find NOTIFY_ENDPOINT_URL environment variable. Falling back to the default endpoint: {}.",
                    DEFAULT_ENDPOINT_URL
                );
                DEFAULT_ENDPOINT_URL.into()
            }
        };

        let notify_api_key = match std::env::var("NOTIFY_API_KEY") {
            Ok(key) => key,
            Err(_) => {
                info!("Did not find NOTIFY_API_KEY environment variable. Going to create one.");
                let key = create_random_secret(API_KEY_LEN);
                info!("Notification api key was generated and set to: {}", key);
                key
            }
        };

        let sender_email = std::env::var("NOTIFY_SENDER_EMAIL")
            .unwrap_or_else(|_| "notificaciones@agencia.mx".into());

        let timeout = std::env::var("NOTIFY_TIMEOUT_MILLIS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_MILLIS.to_string());
        let request_timeout_millis = match timeout.parse::<u64>() {
            Ok(timeout) => timeout,
            Err(_) => {
                warn!(
                    "The given NOTIFY_TIMEOUT_MILLIS: {} is not valid, falling back to the default timeout: {}.",
                    timeout, DEFAULT_TIMEOUT_MILLIS
                );
                DEFAULT_TIMEOUT_MILLIS
            }
        };

        Self {
            notify_endpoint_url,
            notify_api_key,
            sender_email,
            request_timeout_millis,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
