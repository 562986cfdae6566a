pub mod button;
pub mod text;
pub mod wallet;

pub use wallet::{wallet_list, WalletListItem};
