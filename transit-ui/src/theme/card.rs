use iced::widget::container::Style;
use iced::{Background, Border};

use super::palette::ContainerPalette;
use super::Theme;

fn card(palette: &ContainerPalette) -> Style {
    Style {
        background: Some(Background::Color(palette.background)),
        text_color: palette.text,
        border: if let Some(color) = palette.border {
            Border {
                radius: 1.0.into(),
                width: 1.0,
                color,
            }
        } else {
            Border {
                radius: 1.0.into(),
                ..Default::default()
            }
        },
        ..Default::default()
    }
}

pub fn wallet_item(theme: &Theme) -> Style {
    card(&theme.colors.cards.wallet_item)
}

pub fn wallet_item_error(theme: &Theme) -> Style {
    card(&theme.colors.cards.wallet_item_error)
}
