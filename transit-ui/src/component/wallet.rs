use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Space, Tooltip},
    Alignment, Length, Padding,
};

use crate::{
    component::{button, text},
    icon,
    provider::{
        AccountInfo, Callbacks, Controls, CredentialRegistry, Gesture, RowState, Status, Wallet,
        WalletProvider,
    },
    theme,
    widget::*,
};

/// What fills the icon slot of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Logo {
    Spinner,
    /// Icon given by the caller through [`WalletListItem::icon`].
    Custom,
    /// Default icon of the provider id, see [`provider_icon`].
    Provider,
}

impl Logo {
    pub fn pick(in_progress: bool, has_custom_icon: bool) -> Self {
        if in_progress {
            Logo::Spinner
        } else if has_custom_icon {
            Logo::Custom
        } else {
            Logo::Provider
        }
    }
}

/// One row of the provider list.
///
/// The row is rebuilt on every render from the provider and wallet currently
/// known by the caller. [`WalletListItem::view`] emits [`Gesture`]s, which the
/// caller hands back to [`WalletListItem::dispatch`] on a row built from the
/// state current at that time.
pub struct WalletListItem<'a, Message> {
    provider: &'a WalletProvider,
    wallet: Option<&'a Wallet>,
    requires_secondary_credential: bool,
    icon: Option<Element<'a, Gesture>>,
    has_error: bool,
    large: bool,
    dismissable: bool,
    callbacks: Callbacks<'a, Message>,
}

impl<'a, Message> WalletListItem<'a, Message> {
    pub fn new<R>(provider: &'a WalletProvider, registry: &R) -> Self
    where
        R: CredentialRegistry + ?Sized,
    {
        Self {
            provider,
            wallet: None,
            requires_secondary_credential: registry.requires_secondary_credential(&provider.id),
            icon: None,
            has_error: false,
            large: false,
            dismissable: true,
            callbacks: Callbacks::default(),
        }
    }

    pub fn wallet(mut self, wallet: Option<&'a Wallet>) -> Self {
        self.wallet = wallet;
        self
    }

    /// Replaces the default icon of the provider.
    pub fn icon(mut self, icon: impl Into<Element<'a, Gesture>>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Error emphasis of the row, it does not change the enabled controls.
    pub fn has_error(mut self, has_error: bool) -> Self {
        self.has_error = has_error;
        self
    }

    pub fn large(mut self, large: bool) -> Self {
        self.large = large;
        self
    }

    pub fn dismissable(mut self, dismissable: bool) -> Self {
        self.dismissable = dismissable;
        self
    }

    pub fn callbacks(mut self, callbacks: Callbacks<'a, Message>) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub fn requires_secondary_credential(&self) -> bool {
        self.requires_secondary_credential
    }

    pub fn state(&self) -> RowState<'a> {
        RowState::derive(self.wallet)
    }

    pub fn controls(&self) -> Controls {
        Controls::new(
            self.requires_secondary_credential,
            self.wallet.is_some(),
            &self.state(),
            self.dismissable,
        )
    }

    pub fn dispatch(&self, gesture: Gesture) -> Option<Message> {
        self.callbacks
            .dispatch(gesture, self.provider, self.wallet, &self.controls())
    }

    pub fn view(self) -> Element<'a, Gesture> {
        let state = self.state();
        let controls = self.controls();
        let has_wallet = self.wallet.is_some();
        let has_error = state.has_error || self.has_error;
        let large = self.large;

        let logo: Element<'a, Gesture> =
            match (Logo::pick(state.in_progress, self.icon.is_some()), self.icon) {
                (Logo::Custom, Some(icon)) => icon,
                (Logo::Spinner, _) => spinner(large).into(),
                _ => provider_icon(&self.provider.id, if large { 30 } else { 20 })
                    .style(if has_error {
                        theme::text::provider_icon_error
                    } else {
                        theme::text::provider_icon
                    })
                    .into(),
            };

        let title = title(self.provider, large);

        let main = Column::new()
            .spacing(if large { 8 } else { 6 })
            .push_maybe(title)
            .push(status(self.provider, &state, has_wallet))
            .push_maybe(controls.connect.then(|| {
                connect_button(self.requires_secondary_credential, state.has_error)
            }))
            .width(Length::Fill);

        let actions = Row::new()
            .spacing(10)
            .push_maybe(controls.logout.then(|| {
                Tooltip::new(
                    button::dismiss(icon::logout_icon()).on_press(Gesture::LogoutClicked),
                    text::caption("Logout"),
                    iced::widget::tooltip::Position::Bottom,
                )
            }))
            .push_maybe(controls.dismiss.then(|| {
                Tooltip::new(
                    button::dismiss(icon::cross_icon()).on_press(Gesture::DismissClicked),
                    text::caption("Dismiss"),
                    iced::widget::tooltip::Position::Bottom,
                )
            }));

        let body = Column::new()
            .spacing(if large { 8 } else { 6 })
            .push(Row::new().push(main).push(actions))
            .push_maybe(state.account_info.map(|info| account_summary(info, true)))
            .padding(if large {
                Padding {
                    top: 22.0,
                    right: 22.0,
                    bottom: 22.0,
                    left: 0.0,
                }
            } else {
                Padding {
                    top: 13.0,
                    right: 13.0,
                    bottom: 12.0,
                    left: 0.0,
                }
            })
            .width(Length::Fill);

        let content = Column::new()
            .push(
                Row::new()
                    .push(
                        Container::new(logo)
                            .width(Length::Fixed(if large { 80.0 } else { 50.0 }))
                            .padding(if large { 18 } else { 13 })
                            .align_x(Horizontal::Center)
                            .align_y(Vertical::Top),
                    )
                    .push(body),
            )
            .push(progress(state.in_progress))
            .push_maybe(controls.reconnect.then(|| {
                button::primary(Some(icon::reload_icon()), "Reconnect")
                    .on_press(Gesture::ReconnectClicked)
                    .width(Length::Fill)
            }));

        if controls.select_on_click {
            Button::new(content)
                .padding(0)
                .width(Length::Fill)
                .style(if has_error {
                    theme::button::wallet_item_error
                } else {
                    theme::button::wallet_item
                })
                .on_press(Gesture::RowClicked)
                .into()
        } else {
            Container::new(content)
                .width(Length::Fill)
                .style(if has_error {
                    theme::card::wallet_item_error
                } else {
                    theme::card::wallet_item
                })
                .into()
        }
    }
}

/// Stacks the rows of the provider list.
pub fn wallet_list<'a, T: 'a>(
    items: impl IntoIterator<Item = Element<'a, T>>,
    large: bool,
) -> Column<'a, T> {
    Column::with_children(items)
        .spacing(if large { 15 } else { 5 })
        .width(Length::Fill)
}

/// Display name of the provider, nothing when it has none.
pub fn title<'a>(provider: &'a WalletProvider, large: bool) -> Option<Text<'a>> {
    provider.display_name().map(|name| {
        if large {
            text::h5_medium(name)
        } else {
            text::p1_medium(name)
        }
    })
}

/// Default icon of a provider, by provider id.
pub fn provider_icon<'a>(provider_id: &str, size: u16) -> Text<'a> {
    match provider_id {
        "ledger" | "trezor" | "keycard" | "lynx" => icon::shield_icon(size),
        "walletconnect" | "anchor-link" => icon::plug_icon(size),
        "keystore" | "pin" => icon::key_icon(size),
        _ => icon::wallet_icon(size),
    }
}

pub fn spinner<'a>(large: bool) -> Text<'a> {
    icon::spinner_icon(if large { 26 } else { 24 }).style(theme::text::provider_icon)
}

pub fn status<'a>(provider: &WalletProvider, state: &RowState, has_wallet: bool) -> Text<'a> {
    match state.status(has_wallet) {
        Status::Connecting => text::p2_regular("Connecting...").style(theme::text::secondary),
        Status::Error => text::p2_regular("Connection error").style(theme::text::error),
        Status::Connected => text::p2_regular("Connected").style(theme::text::success),
        Status::Idle => text::p2_regular("Disconnected").style(theme::text::secondary),
        Status::Disconnected => {
            text::p2_regular(provider.description().unwrap_or("Not connected"))
                .style(theme::text::secondary)
        }
    }
}

pub fn account_summary<'a, T: 'a>(info: &AccountInfo, compact: bool) -> Container<'a, T> {
    let name = match &info.authority {
        Some(authority) => format!("{}@{}", info.account_name, authority),
        None => info.account_name.clone(),
    };
    let balance = info.balance.as_ref().map(|b| {
        if compact {
            text::caption(b).style(theme::text::secondary)
        } else {
            text::p2_regular(b).style(theme::text::secondary)
        }
    });
    Container::new(
        Row::new()
            .spacing(10)
            .align_y(Alignment::Center)
            .push(if compact {
                text::p2_regular(name)
            } else {
                text::p1_bold(name)
            })
            .push(Space::with_width(Length::Fill))
            .push_maybe(balance),
    )
    .width(Length::Fill)
}

/// Thin bar under the row, filled while a connection is in progress.
pub fn progress<'a, T: 'a>(active: bool) -> Element<'a, T> {
    if active {
        ProgressBar::new(0.0..=1.0, 1.0)
            .height(Length::Fixed(2.0))
            .style(theme::progress_bar::primary)
            .into()
    } else {
        Space::with_height(Length::Fixed(2.0)).into()
    }
}

/// Explicit connect control, always routed like a row click.
pub fn connect_button<'a>(
    requires_secondary_credential: bool,
    has_error: bool,
) -> Button<'a, Gesture> {
    let label = if has_error { "Try again" } else { "Connect" };
    let icon = if requires_secondary_credential {
        Some(icon::key_icon(16))
    } else {
        None
    };
    button::secondary_compact(icon, label).on_press(Gesture::ConnectClicked)
}
