use crate::{font, widget::*};
use iced::{alignment, Length};

fn symbol_icon<'a>(unicode: char, size: u16) -> Text<'a> {
    Text::new(unicode.to_string())
        .font(font::SYMBOLS)
        .width(Length::Fixed(size as f32))
        .align_x(alignment::Horizontal::Center)
        .size(size)
}

pub fn cross_icon<'a>() -> Text<'a> {
    symbol_icon('\u{2715}', 19)
}

pub fn logout_icon<'a>() -> Text<'a> {
    symbol_icon('\u{21E5}', 19)
}

pub fn reload_icon<'a>() -> Text<'a> {
    symbol_icon('\u{21BB}', 16)
}

pub fn spinner_icon<'a>(size: u16) -> Text<'a> {
    symbol_icon('\u{25CC}', size)
}

pub fn key_icon<'a>(size: u16) -> Text<'a> {
    symbol_icon('\u{26BF}', size)
}

pub fn plug_icon<'a>(size: u16) -> Text<'a> {
    symbol_icon('\u{2301}', size)
}

pub fn wallet_icon<'a>(size: u16) -> Text<'a> {
    symbol_icon('\u{25A3}', size)
}

pub fn shield_icon<'a>(size: u16) -> Text<'a> {
    symbol_icon('\u{25C8}', size)
}
