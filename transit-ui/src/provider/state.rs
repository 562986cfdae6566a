use super::{AccountInfo, Wallet};

/// Flags of a row, derived on every render from the wallet currently supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowState<'a> {
    pub has_error: bool,
    pub in_progress: bool,
    pub active: bool,
    pub account_info: Option<&'a AccountInfo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No connection was attempted yet.
    Disconnected,
    Connecting,
    Connected,
    Error,
    /// A wallet exists but reports no activity.
    Idle,
}

impl<'a> RowState<'a> {
    pub fn derive(wallet: Option<&'a Wallet>) -> Self {
        match wallet {
            None => Self::default(),
            Some(wallet) => Self {
                has_error: wallet.has_error,
                in_progress: wallet.in_progress,
                active: wallet.active,
                account_info: wallet.state.account_info.as_ref(),
            },
        }
    }

    pub fn status(&self, has_wallet: bool) -> Status {
        if self.in_progress {
            Status::Connecting
        } else if self.has_error {
            Status::Error
        } else if self.active {
            Status::Connected
        } else if has_wallet {
            Status::Idle
        } else {
            Status::Disconnected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_wallet_derives_defaults() {
        let state = RowState::derive(None);
        assert!(!state.has_error);
        assert!(!state.in_progress);
        assert!(!state.active);
        assert!(state.account_info.is_none());
        assert_eq!(state.status(false), Status::Disconnected);
    }

    #[test]
    fn test_derive_copies_wallet_flags() {
        let wallet = Wallet {
            has_error: true,
            in_progress: true,
            active: true,
            ..Default::default()
        };
        let state = RowState::derive(Some(&wallet));
        assert!(state.has_error && state.in_progress && state.active);
        assert!(state.account_info.is_none());

        let wallet = Wallet::connected(AccountInfo::new("alice"));
        let state = RowState::derive(Some(&wallet));
        assert_eq!(state.account_info.map(|a| a.account_name.as_str()), Some("alice"));
    }

    #[test]
    fn test_derive_is_idempotent() {
        let wallet = Wallet::connected(AccountInfo::new("bob"));
        assert_eq!(
            RowState::derive(Some(&wallet)),
            RowState::derive(Some(&wallet))
        );
        assert_eq!(RowState::derive(None), RowState::derive(None));
    }

    #[test]
    fn test_status_precedence() {
        let mut wallet = Wallet {
            has_error: true,
            in_progress: true,
            active: true,
            ..Default::default()
        };
        assert_eq!(RowState::derive(Some(&wallet)).status(true), Status::Connecting);
        wallet.in_progress = false;
        assert_eq!(RowState::derive(Some(&wallet)).status(true), Status::Error);
        wallet.has_error = false;
        assert_eq!(RowState::derive(Some(&wallet)).status(true), Status::Connected);
        wallet.active = false;
        assert_eq!(RowState::derive(Some(&wallet)).status(true), Status::Idle);
    }
}
