//! Wallet providers and the live connections made through them.
//!
//! A [`WalletProvider`] describes a backend the user can connect through, a
//! [`Wallet`] is the connection instance owned by the transit layer. Both are
//! read-only here: the row derives its state from them and reports user
//! gestures back through [`router::Callbacks`].

pub mod gate;
pub mod registry;
pub mod router;
pub mod state;

use serde::{Deserialize, Serialize};

pub use gate::Controls;
pub use registry::{CredentialRegistry, ProviderRegistry};
pub use router::{Callbacks, Gesture};
pub use state::{RowState, Status};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderMeta {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletProvider {
    /// Stable identifier, key of the credential and icon registries.
    pub id: String,
    #[serde(default)]
    pub meta: Option<ProviderMeta>,
}

impl WalletProvider {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            meta: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        match &mut self.meta {
            Some(meta) => meta.name = name,
            None => {
                self.meta = Some(ProviderMeta {
                    name,
                    description: None,
                })
            }
        }
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = Some(description.into());
        match &mut self.meta {
            Some(meta) => meta.description = description,
            None => {
                self.meta = Some(ProviderMeta {
                    name: String::new(),
                    description,
                })
            }
        }
        self
    }

    pub fn display_name(&self) -> Option<&str> {
        self.meta.as_ref().map(|m| m.name.as_str())
    }

    pub fn description(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|m| m.description.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub account_name: String,
    #[serde(default)]
    pub authority: Option<String>,
    #[serde(default)]
    pub balance: Option<String>,
}

impl AccountInfo {
    pub fn new(account_name: impl Into<String>) -> Self {
        Self {
            account_name: account_name.into(),
            authority: None,
            balance: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletState {
    pub account_info: Option<AccountInfo>,
}

/// Connection instance reported by the transit layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wallet {
    pub state: WalletState,
    pub has_error: bool,
    pub in_progress: bool,
    pub active: bool,
}

impl Wallet {
    pub fn connecting() -> Self {
        Self {
            in_progress: true,
            ..Default::default()
        }
    }

    pub fn connected(account_info: AccountInfo) -> Self {
        Self {
            state: WalletState {
                account_info: Some(account_info),
            },
            active: true,
            ..Default::default()
        }
    }

    pub fn failed() -> Self {
        Self {
            has_error: true,
            ..Default::default()
        }
    }
}

/// Payload of a connection request, built fresh for every attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectSettings {
    #[serde(rename = "appname")]
    pub app_name: Option<String>,
}

impl ConnectSettings {
    pub fn for_provider(provider: &WalletProvider) -> Self {
        Self {
            app_name: provider.display_name().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_settings_follow_display_name() {
        let provider = WalletProvider::new("scatter").with_name("Scatter");
        assert_eq!(
            ConnectSettings::for_provider(&provider).app_name.as_deref(),
            Some("Scatter")
        );

        let renamed = provider.with_name("Scatter Desktop");
        assert_eq!(
            ConnectSettings::for_provider(&renamed).app_name.as_deref(),
            Some("Scatter Desktop")
        );

        assert_eq!(
            ConnectSettings::for_provider(&WalletProvider::new("anonymous")).app_name,
            None
        );
    }

    #[test]
    fn test_connect_settings_wire_name() {
        let settings = ConnectSettings {
            app_name: Some("Ledger".to_string()),
        };
        assert_eq!(
            serde_json::to_string(&settings).unwrap(),
            r#"{"appname":"Ledger"}"#
        );
    }

    #[test]
    fn test_provider_builder_keeps_meta() {
        let provider = WalletProvider::new("ledger")
            .with_description("Hardware wallet")
            .with_name("Ledger");
        assert_eq!(provider.display_name(), Some("Ledger"));
        assert_eq!(provider.description(), Some("Hardware wallet"));
    }
}
