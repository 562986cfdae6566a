use iced::{
    widget::progress_bar::{Catalog, Style, StyleFn},
    Border,
};

use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> <Self as Catalog>::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &<Self as Catalog>::Class<'_>) -> Style {
        class(self)
    }
}

pub fn primary(theme: &Theme) -> Style {
    Style {
        background: theme.colors.progress_bars.background.into(),
        bar: theme.colors.progress_bars.bar.into(),
        border: if let Some(color) = theme.colors.progress_bars.border {
            Border {
                radius: 1.0.into(),
                width: 1.0,
                color,
            }
        } else {
            Border {
                ..Default::default()
            }
        },
    }
}
