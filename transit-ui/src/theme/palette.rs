use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub icons: Icons,
    pub buttons: Buttons,
    pub cards: Cards,
    pub progress_bars: ProgressBars,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
    pub scrollable: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub success: iced::Color,
    pub error: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Icons {
    pub provider: iced::Color,
    pub error: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub secondary: Button,
    pub dismiss: Button,
    pub wallet_item: Button,
    pub wallet_item_error: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub wallet_item: ContainerPalette,
    pub wallet_item_error: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProgressBars {
    pub background: iced::Color,
    pub bar: iced::Color,
    pub border: Option<iced::Color>,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::NAVY,
                scrollable: color::SLATE_LIGHT,
            },
            text: Text {
                primary: color::WHITE,
                secondary: color::GREY_3,
                success: color::GREEN,
                error: color::RED,
            },
            icons: Icons {
                provider: color::CYAN,
                error: color::RED,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::CYAN,
                        text: color::NAVY,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::WHITE,
                        text: color::NAVY,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::GREY_2,
                        text: color::NAVY,
                        border: None,
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::SLATE_LIGHT,
                        text: color::GREY_3,
                        border: None,
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::WHITE,
                        border: color::CYAN.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::PETROL,
                        text: color::WHITE,
                        border: color::CYAN.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::SLATE_BLUE,
                        text: color::WHITE,
                        border: color::CYAN.into(),
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_3,
                        border: color::GREY_3.into(),
                    }),
                },
                dismiss: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::TRANSPARENT_WHITE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
                wallet_item: Button {
                    active: ButtonPalette {
                        background: color::SLATE,
                        text: color::WHITE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::SLATE_LIGHT,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::SLATE_BLUE,
                        text: color::WHITE,
                        border: None,
                    }),
                    disabled: None,
                },
                wallet_item_error: Button {
                    active: ButtonPalette {
                        background: color::WINE,
                        text: color::WHITE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::WINE_LIGHT,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
            },
            cards: Cards {
                wallet_item: ContainerPalette {
                    background: color::SLATE,
                    text: color::WHITE.into(),
                    border: None,
                },
                wallet_item_error: ContainerPalette {
                    background: color::WINE,
                    text: color::WHITE.into(),
                    border: None,
                },
            },
            progress_bars: ProgressBars {
                background: color::SLATE,
                bar: color::CYAN,
                border: None,
            },
        }
    }
}
