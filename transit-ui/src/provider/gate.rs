use super::state::RowState;

/// Controls of a row that respond to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    /// Clicking anywhere on the row selects the provider.
    pub select_on_click: bool,
    /// The explicit connect button is shown.
    pub connect: bool,
    pub reconnect: bool,
    pub logout: bool,
    pub dismiss: bool,
}

impl Controls {
    pub fn new(
        requires_secondary_credential: bool,
        has_wallet: bool,
        state: &RowState,
        dismissable: bool,
    ) -> Self {
        Self {
            // A provider needing a PIN must go through its visible connect control.
            select_on_click: !has_wallet && !requires_secondary_credential,
            connect: !state.in_progress,
            reconnect: state.has_error && !requires_secondary_credential,
            logout: dismissable && state.active,
            dismiss: dismissable && state.has_error,
        }
    }
}
