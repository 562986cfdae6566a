use tracing::debug;

use super::{gate::Controls, ConnectSettings, Wallet, WalletProvider};

/// User gesture emitted by a wallet list item.
///
/// Gestures carry no payload: the payload is built by [`Callbacks::dispatch`]
/// from the props current when the gesture is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    RowClicked,
    ConnectClicked,
    ReconnectClicked,
    LogoutClicked,
    DismissClicked,
}

type SelectFn<'a, Message> = Box<dyn Fn(&WalletProvider, ConnectSettings) -> Message + 'a>;
type ReconnectFn<'a, Message> = Box<dyn Fn(&Wallet, ConnectSettings) -> Message + 'a>;
type WalletFn<'a, Message> = Box<dyn Fn(&Wallet) -> Message + 'a>;

/// Outward notifications of a wallet list item. Every handler is optional,
/// a missing one turns the matching gesture into a no-op.
pub struct Callbacks<'a, Message> {
    on_select: Option<SelectFn<'a, Message>>,
    on_reconnect_click: Option<ReconnectFn<'a, Message>>,
    on_logout_click: Option<WalletFn<'a, Message>>,
    on_dismiss_click: Option<WalletFn<'a, Message>>,
}

impl<Message> Default for Callbacks<'_, Message> {
    fn default() -> Self {
        Self {
            on_select: None,
            on_reconnect_click: None,
            on_logout_click: None,
            on_dismiss_click: None,
        }
    }
}

impl<Message> std::fmt::Debug for Callbacks<'_, Message> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_select", &self.on_select.is_some())
            .field("on_reconnect_click", &self.on_reconnect_click.is_some())
            .field("on_logout_click", &self.on_logout_click.is_some())
            .field("on_dismiss_click", &self.on_dismiss_click.is_some())
            .finish()
    }
}

impl<'a, Message> Callbacks<'a, Message> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_select(
        mut self,
        f: impl Fn(&WalletProvider, ConnectSettings) -> Message + 'a,
    ) -> Self {
        self.on_select = Some(Box::new(f));
        self
    }

    pub fn on_reconnect_click(
        mut self,
        f: impl Fn(&Wallet, ConnectSettings) -> Message + 'a,
    ) -> Self {
        self.on_reconnect_click = Some(Box::new(f));
        self
    }

    pub fn on_logout_click(mut self, f: impl Fn(&Wallet) -> Message + 'a) -> Self {
        self.on_logout_click = Some(Box::new(f));
        self
    }

    pub fn on_dismiss_click(mut self, f: impl Fn(&Wallet) -> Message + 'a) -> Self {
        self.on_dismiss_click = Some(Box::new(f));
        self
    }

    /// Maps a gesture to at most one outward notification.
    ///
    /// The gate is evaluated again with the given props, so a gesture issued
    /// against an outdated render is dropped instead of routed.
    pub fn dispatch(
        &self,
        gesture: Gesture,
        provider: &WalletProvider,
        wallet: Option<&Wallet>,
        controls: &Controls,
    ) -> Option<Message> {
        let message = match gesture {
            Gesture::RowClicked if controls.select_on_click => self.select(provider),
            Gesture::ConnectClicked if controls.connect => self.select(provider),
            Gesture::ReconnectClicked if controls.reconnect => {
                wallet.and_then(|wallet| {
                    self.on_reconnect_click
                        .as_ref()
                        .map(|f| f(wallet, ConnectSettings::for_provider(provider)))
                })
            }
            Gesture::LogoutClicked if controls.logout => {
                wallet.and_then(|wallet| self.on_logout_click.as_ref().map(|f| f(wallet)))
            }
            Gesture::DismissClicked if controls.dismiss => {
                wallet.and_then(|wallet| self.on_dismiss_click.as_ref().map(|f| f(wallet)))
            }
            _ => {
                debug!(
                    "Gesture {:?} on provider {} is not enabled, ignoring",
                    gesture, provider.id
                );
                return None;
            }
        };
        if message.is_some() {
            debug!("Gesture {:?} routed for provider {}", gesture, provider.id);
        } else {
            debug!(
                "Gesture {:?} on provider {} has no receiver",
                gesture, provider.id
            );
        }
        message
    }

    fn select(&self, provider: &WalletProvider) -> Option<Message> {
        self.on_select
            .as_ref()
            .map(|f| f(provider, ConnectSettings::for_provider(provider)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{state::RowState, AccountInfo};

    #[derive(Debug, Clone, PartialEq)]
    enum Message {
        Select(WalletProvider, ConnectSettings),
        Reconnect(Wallet, ConnectSettings),
        Logout(Wallet),
        Dismiss(Wallet),
    }

    fn callbacks<'a>() -> Callbacks<'a, Message> {
        Callbacks::new()
            .on_select(|p, s| Message::Select(p.clone(), s))
            .on_reconnect_click(|w, s| Message::Reconnect(w.clone(), s))
            .on_logout_click(|w| Message::Logout(w.clone()))
            .on_dismiss_click(|w| Message::Dismiss(w.clone()))
    }

    fn controls(requires_pin: bool, wallet: Option<&Wallet>) -> Controls {
        Controls::new(requires_pin, wallet.is_some(), &RowState::derive(wallet), true)
    }

    fn settings(name: &str) -> ConnectSettings {
        ConnectSettings {
            app_name: Some(name.to_string()),
        }
    }

    const ALL: [Gesture; 5] = [
        Gesture::RowClicked,
        Gesture::ConnectClicked,
        Gesture::ReconnectClicked,
        Gesture::LogoutClicked,
        Gesture::DismissClicked,
    ];

    #[test]
    fn test_row_click_selects_provider() {
        let provider = WalletProvider::new("scatter").with_name("Scatter");
        let message = callbacks().dispatch(
            Gesture::RowClicked,
            &provider,
            None,
            &controls(false, None),
        );
        assert_eq!(
            message,
            Some(Message::Select(provider.clone(), settings("Scatter")))
        );
    }

    #[test]
    fn test_pin_provider_requires_connect_control() {
        let provider = WalletProvider::new("ledger").with_name("Ledger");
        let cb = callbacks();
        let c = controls(true, None);
        assert_eq!(cb.dispatch(Gesture::RowClicked, &provider, None, &c), None);
        assert_eq!(
            cb.dispatch(Gesture::ConnectClicked, &provider, None, &c),
            Some(Message::Select(provider.clone(), settings("Ledger")))
        );
    }

    #[test]
    fn test_connect_control_and_row_click_share_payload() {
        let provider = WalletProvider::new("scatter").with_name("Scatter");
        let cb = callbacks();
        let c = controls(false, None);
        assert_eq!(
            cb.dispatch(Gesture::RowClicked, &provider, None, &c),
            cb.dispatch(Gesture::ConnectClicked, &provider, None, &c)
        );
    }

    #[test]
    fn test_app_name_is_taken_at_dispatch_time() {
        let mut provider = WalletProvider::new("scatter").with_name("Scatter");
        let cb = callbacks();
        let c = controls(false, None);
        provider = provider.with_name("Scatter 2");
        assert_eq!(
            cb.dispatch(Gesture::RowClicked, &provider, None, &c),
            Some(Message::Select(provider.clone(), settings("Scatter 2")))
        );
    }

    #[test]
    fn test_errored_wallet_reconnects_and_dismisses() {
        let provider = WalletProvider::new("scatter").with_name("Scatter");
        let wallet = Wallet::failed();
        let cb = callbacks();
        let c = controls(false, Some(&wallet));
        assert_eq!(
            cb.dispatch(Gesture::ReconnectClicked, &provider, Some(&wallet), &c),
            Some(Message::Reconnect(wallet.clone(), settings("Scatter")))
        );
        assert_eq!(
            cb.dispatch(Gesture::DismissClicked, &provider, Some(&wallet), &c),
            Some(Message::Dismiss(wallet.clone()))
        );
        assert_eq!(
            cb.dispatch(Gesture::LogoutClicked, &provider, Some(&wallet), &c),
            None
        );
        assert_eq!(
            cb.dispatch(Gesture::RowClicked, &provider, Some(&wallet), &c),
            None
        );
    }

    #[test]
    fn test_pin_provider_never_reconnects() {
        let provider = WalletProvider::new("ledger").with_name("Ledger");
        let wallet = Wallet::failed();
        let c = controls(true, Some(&wallet));
        assert_eq!(
            callbacks().dispatch(Gesture::ReconnectClicked, &provider, Some(&wallet), &c),
            None
        );
    }

    #[test]
    fn test_active_wallet_gestures() {
        let provider = WalletProvider::new("scatter").with_name("Scatter");
        let wallet = Wallet::connected(AccountInfo::new("alice"));
        let cb = callbacks();
        let c = controls(false, Some(&wallet));
        let fired: Vec<_> = ALL
            .iter()
            .filter_map(|g| cb.dispatch(*g, &provider, Some(&wallet), &c))
            .collect();
        assert_eq!(
            fired,
            vec![
                Message::Select(provider.clone(), settings("Scatter")),
                Message::Logout(wallet.clone())
            ]
        );
        assert_eq!(
            cb.dispatch(Gesture::LogoutClicked, &provider, Some(&wallet), &c),
            Some(Message::Logout(wallet.clone()))
        );
    }

    #[test]
    fn test_wallet_gestures_need_a_wallet() {
        let provider = WalletProvider::new("scatter").with_name("Scatter");
        // Controls computed for an errored, active wallet that is gone by dispatch time.
        let stale = Wallet {
            active: true,
            has_error: true,
            ..Default::default()
        };
        let c = controls(false, Some(&stale));
        let cb = callbacks();
        for g in [
            Gesture::ReconnectClicked,
            Gesture::LogoutClicked,
            Gesture::DismissClicked,
        ] {
            assert_eq!(cb.dispatch(g, &provider, None, &c), None);
        }
    }

    #[test]
    fn test_missing_callbacks_are_no_op() {
        let provider = WalletProvider::new("scatter").with_name("Scatter");
        let wallet = Wallet {
            active: true,
            has_error: true,
            ..Default::default()
        };
        let cb: Callbacks<Message> = Callbacks::new();
        for g in ALL {
            assert_eq!(
                cb.dispatch(g, &provider, None, &controls(false, None)),
                None
            );
            assert_eq!(
                cb.dispatch(g, &provider, Some(&wallet), &controls(false, Some(&wallet))),
                None
            );
        }
    }
}
