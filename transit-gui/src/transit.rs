//! Simulated transit layer.
//!
//! Stands in for the component that really connects to a wallet provider:
//! each provider declared in the configuration either resolves to an account
//! or fails after a short delay.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use tracing::{info, warn};
use transit_ui::provider::{AccountInfo, ConnectSettings};

use crate::config::Config;

const DEFAULT_DELAY: Duration = Duration::from_millis(1500);
const DEFAULT_ACCOUNT: &str = "guest";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitError {
    UnknownProvider(String),
    ConnectionRefused(String),
}

impl std::fmt::Display for TransitError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::UnknownProvider(id) => write!(f, "Unknown wallet provider '{}'", id),
            Self::ConnectionRefused(id) => {
                write!(f, "Wallet provider '{}' refused the connection", id)
            }
        }
    }
}

impl std::error::Error for TransitError {}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome {
    Account(AccountInfo),
    Refused,
}

#[derive(Debug, Clone)]
pub struct Transit {
    outcomes: HashMap<String, Outcome>,
    delay: Duration,
}

impl Transit {
    pub fn new(config: &Config) -> Self {
        let outcomes = config
            .providers
            .iter()
            .map(|p| {
                let outcome = if p.fail {
                    Outcome::Refused
                } else {
                    Outcome::Account(AccountInfo {
                        account_name: p
                            .account
                            .clone()
                            .unwrap_or_else(|| DEFAULT_ACCOUNT.to_string()),
                        authority: Some("active".to_string()),
                        balance: None,
                    })
                };
                (p.id.clone(), outcome)
            })
            .collect();
        Self {
            outcomes,
            delay: DEFAULT_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn connect(
        &self,
        provider_id: &str,
        settings: ConnectSettings,
    ) -> impl Future<Output = Result<AccountInfo, TransitError>> + Send + 'static {
        info!(
            "Connecting to provider {} for app {:?}",
            provider_id, settings.app_name
        );
        let outcome = self.outcomes.get(provider_id).cloned();
        let provider_id = provider_id.to_string();
        let delay = self.delay;
        async move {
            tokio::time::sleep(delay).await;
            match outcome {
                Some(Outcome::Account(account)) => Ok(account),
                Some(Outcome::Refused) => {
                    warn!("Provider {} refused the connection", provider_id);
                    Err(TransitError::ConnectionRefused(provider_id))
                }
                None => Err(TransitError::UnknownProvider(provider_id)),
            }
        }
    }
}
