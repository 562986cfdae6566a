use std::collections::HashMap;

use iced::{Length, Task};
use tracing::{debug, info, warn};

use transit_ui::{
    component::{text, wallet_list, WalletListItem},
    provider::{
        AccountInfo, Callbacks, ConnectSettings, Gesture, ProviderRegistry, Wallet,
        WalletProvider,
    },
    theme,
    widget::*,
};

use crate::{
    config::Config,
    transit::{Transit, TransitError},
};

#[derive(Debug, Clone)]
pub enum Message {
    /// Gesture on the row at the given index of the provider list.
    Item(usize, Gesture),
    Select(WalletProvider, ConnectSettings),
    Reconnect(String, ConnectSettings),
    Logout(String),
    Dismiss(String),
    Connected(String, Result<AccountInfo, TransitError>),
}

/// Provider list screen. It owns the wallets and plays the connection
/// manager for the rows it renders.
pub struct App {
    pub providers: Vec<WalletProvider>,
    wallets: HashMap<String, Wallet>,
    registry: ProviderRegistry,
    transit: Transit,
    dismissable: bool,
    large: bool,
}

impl App {
    pub fn new(config: &Config, transit: Transit) -> Self {
        Self {
            providers: config.wallet_providers(),
            wallets: HashMap::new(),
            registry: config.registry(),
            transit,
            dismissable: config.dismissable,
            large: config.large,
        }
    }

    pub fn title(&self) -> String {
        "Transit".to_string()
    }

    pub fn wallet(&self, provider_id: &str) -> Option<&Wallet> {
        self.wallets.get(provider_id)
    }

    fn item<'a>(&'a self, provider: &'a WalletProvider) -> WalletListItem<'a, Message> {
        let id = provider.id.as_str();
        WalletListItem::new(provider, &self.registry)
            .wallet(self.wallets.get(id))
            .dismissable(self.dismissable)
            .large(self.large)
            .callbacks(
                Callbacks::new()
                    .on_select(|provider, settings| Message::Select(provider.clone(), settings))
                    .on_reconnect_click(move |_, settings| {
                        Message::Reconnect(id.to_string(), settings)
                    })
                    .on_logout_click(move |_| Message::Logout(id.to_string()))
                    .on_dismiss_click(move |_| Message::Dismiss(id.to_string())),
            )
    }

    /// Routes a gesture with the provider and wallet known right now.
    pub fn route(&self, index: usize, gesture: Gesture) -> Option<Message> {
        match self.providers.get(index) {
            Some(provider) => self.item(provider).dispatch(gesture),
            None => {
                warn!("No provider at index {}", index);
                None
            }
        }
    }

    fn connect(&mut self, provider_id: String, settings: ConnectSettings) -> Task<Message> {
        self.wallets
            .insert(provider_id.clone(), Wallet::connecting());
        let connection = self.transit.connect(&provider_id, settings);
        Task::perform(connection, move |res| {
            Message::Connected(provider_id.clone(), res)
        })
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Item(index, gesture) => match self.route(index, gesture) {
                Some(message) => self.update(message),
                None => Task::none(),
            },
            Message::Select(provider, settings) => self.connect(provider.id, settings),
            Message::Reconnect(provider_id, settings) => self.connect(provider_id, settings),
            Message::Logout(provider_id) => {
                info!("Logging out of provider {}", provider_id);
                self.wallets.remove(&provider_id);
                Task::none()
            }
            Message::Dismiss(provider_id) => {
                debug!("Dismissing wallet of provider {}", provider_id);
                self.wallets.remove(&provider_id);
                Task::none()
            }
            Message::Connected(provider_id, res) => {
                match self.wallets.get_mut(&provider_id) {
                    Some(wallet) if wallet.in_progress => {
                        *wallet = match res {
                            Ok(account) => {
                                info!(
                                    "Connected to provider {} with account {}",
                                    provider_id, account.account_name
                                );
                                Wallet::connected(account)
                            }
                            Err(e) => {
                                warn!("{}", e);
                                Wallet::failed()
                            }
                        };
                    }
                    _ => debug!(
                        "Connection result for provider {} has no pending wallet",
                        provider_id
                    ),
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<Message> {
        let items = self.providers.iter().enumerate().map(|(i, provider)| {
            self.item(provider)
                .view()
                .map(move |gesture| Message::Item(i, gesture))
        });
        Container::new(
            Scrollable::new(
                Column::new()
                    .spacing(20)
                    .padding(20)
                    .max_width(500)
                    .push(text::h5_medium("Connect a wallet"))
                    .push(wallet_list(items, self.large)),
            )
            .height(Length::Fill),
        )
        .center_x(Length::Fill)
        .height(Length::Fill)
        .style(theme::container::background)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn app() -> App {
        let config = Config::default();
        App::new(&config, Transit::new(&config).with_delay(Duration::ZERO))
    }

    fn index(app: &App, id: &str) -> usize {
        app.providers.iter().position(|p| p.id == id).unwrap()
    }

    #[test]
    fn test_row_click_starts_connection() {
        let mut app = app();
        let scatter = index(&app, "scatter");
        match app.route(scatter, Gesture::RowClicked) {
            Some(Message::Select(provider, settings)) => {
                assert_eq!(provider.id, "scatter");
                assert_eq!(settings.app_name.as_deref(), Some("Scatter"));
            }
            m => panic!("unexpected message {:?}", m),
        }

        let _ = app.update(Message::Item(scatter, Gesture::RowClicked));
        assert_eq!(app.wallet("scatter"), Some(&Wallet::connecting()));

        // A second click lands on a row that has a wallet now.
        assert!(app.route(scatter, Gesture::RowClicked).is_none());
    }

    #[test]
    fn test_pin_provider_ignores_row_click() {
        let mut app = app();
        let ledger = index(&app, "ledger");
        let _ = app.update(Message::Item(ledger, Gesture::RowClicked));
        assert!(app.wallet("ledger").is_none());

        let _ = app.update(Message::Item(ledger, Gesture::ConnectClicked));
        assert_eq!(app.wallet("ledger"), Some(&Wallet::connecting()));
    }

    #[test]
    fn test_app_name_read_at_click_time() {
        let mut app = app();
        let scatter = index(&app, "scatter");
        app.providers[scatter] = app.providers[scatter].clone().with_name("Scatter Desktop");
        match app.route(scatter, Gesture::RowClicked) {
            Some(Message::Select(_, settings)) => {
                assert_eq!(settings.app_name.as_deref(), Some("Scatter Desktop"))
            }
            m => panic!("unexpected message {:?}", m),
        }
    }

    #[test]
    fn test_connection_results() {
        let mut app = app();
        let scatter = index(&app, "scatter");
        let lynx = index(&app, "lynx");
        let _ = app.update(Message::Item(scatter, Gesture::RowClicked));
        let _ = app.update(Message::Item(lynx, Gesture::RowClicked));

        let _ = app.update(Message::Connected(
            "scatter".to_string(),
            Ok(AccountInfo::new("alice")),
        ));
        assert_eq!(
            app.wallet("scatter"),
            Some(&Wallet::connected(AccountInfo::new("alice")))
        );

        let _ = app.update(Message::Connected(
            "lynx".to_string(),
            Err(TransitError::ConnectionRefused("lynx".to_string())),
        ));
        assert_eq!(app.wallet("lynx"), Some(&Wallet::failed()));

        match app.route(lynx, Gesture::ReconnectClicked) {
            Some(Message::Reconnect(id, settings)) => {
                assert_eq!(id, "lynx");
                assert_eq!(settings.app_name.as_deref(), Some("Lynx"));
            }
            m => panic!("unexpected message {:?}", m),
        }
        assert!(app.route(lynx, Gesture::LogoutClicked).is_none());
    }

    #[test]
    fn test_logout_and_dismiss() {
        let mut app = app();
        let scatter = index(&app, "scatter");
        let lynx = index(&app, "lynx");
        let _ = app.update(Message::Item(scatter, Gesture::RowClicked));
        let _ = app.update(Message::Connected(
            "scatter".to_string(),
            Ok(AccountInfo::new("alice")),
        ));
        assert!(matches!(
            app.route(scatter, Gesture::LogoutClicked),
            Some(Message::Logout(id)) if id == "scatter"
        ));
        let _ = app.update(Message::Item(scatter, Gesture::LogoutClicked));
        assert!(app.wallet("scatter").is_none());

        let _ = app.update(Message::Item(lynx, Gesture::RowClicked));
        let _ = app.update(Message::Connected(
            "lynx".to_string(),
            Err(TransitError::ConnectionRefused("lynx".to_string())),
        ));
        let _ = app.update(Message::Item(lynx, Gesture::DismissClicked));
        assert!(app.wallet("lynx").is_none());
    }

    #[test]
    fn test_late_result_after_dismiss_is_dropped() {
        let mut app = app();
        let scatter = index(&app, "scatter");
        let _ = app.update(Message::Item(scatter, Gesture::RowClicked));
        let _ = app.update(Message::Dismiss("scatter".to_string()));
        let _ = app.update(Message::Connected(
            "scatter".to_string(),
            Ok(AccountInfo::new("alice")),
        ));
        assert!(app.wallet("scatter").is_none());
    }

    #[test]
    fn test_non_dismissable_config() {
        let config = Config {
            dismissable: false,
            ..Config::default()
        };
        let mut app = App::new(&config, Transit::new(&config));
        let scatter = index(&app, "scatter");
        let _ = app.update(Message::Item(scatter, Gesture::RowClicked));
        let _ = app.update(Message::Connected(
            "scatter".to_string(),
            Ok(AccountInfo::new("alice")),
        ));
        assert!(app.route(scatter, Gesture::LogoutClicked).is_none());
        assert!(app.wallet("scatter").is_some());
    }

    #[test]
    fn test_unknown_index() {
        let mut app = app();
        assert!(app.route(42, Gesture::RowClicked).is_none());
        let _ = app.update(Message::Item(42, Gesture::ConnectClicked));
        assert!(app.wallets.is_empty());
    }
}
