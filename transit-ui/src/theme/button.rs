use iced::widget::button::{Catalog, Status, Style, StyleFn};
use iced::{Background, Border, Color};

use super::palette::{Button, ButtonPalette};
use super::Theme;

const PILL_RADIUS: f32 = 25.0;
const ITEM_RADIUS: f32 = 1.0;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.primary, status, PILL_RADIUS)
}

pub fn secondary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.secondary, status, PILL_RADIUS)
}

/// Small logout and dismiss controls in the corner of a wallet list item.
pub fn dismiss(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.dismiss, status, ITEM_RADIUS)
}

pub fn wallet_item(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.wallet_item, status, ITEM_RADIUS)
}

pub fn wallet_item_error(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.wallet_item_error, status, ITEM_RADIUS)
}

fn palette_style(p: &ButtonPalette, radius: f32) -> Style {
    Style {
        background: Some(Background::Color(p.background)),
        text_color: p.text,
        border: if let Some(color) = p.border {
            Border {
                radius: radius.into(),
                width: 1.0,
                color,
            }
        } else {
            Border {
                radius: radius.into(),
                ..Default::default()
            }
        },
        ..Default::default()
    }
}

fn button(p: &Button, status: Status, radius: f32) -> Style {
    match status {
        Status::Active => palette_style(&p.active, radius),
        Status::Hovered => palette_style(&p.hovered, radius),
        Status::Pressed => match p.pressed {
            Some(pressed) => palette_style(&pressed, radius),
            None => palette_style(&p.hovered, radius),
        },
        Status::Disabled => {
            if let Some(disabled) = p.disabled {
                let style = palette_style(&disabled, radius);
                Style {
                    text_color: Color {
                        a: 0.2,
                        ..style.text_color
                    },
                    ..style
                }
            } else {
                let active = palette_style(&p.active, radius);
                Style {
                    text_color: Color {
                        a: 0.2,
                        ..active.text_color
                    },
                    ..active
                }
            }
        }
    }
}
