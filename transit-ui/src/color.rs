use iced::Color;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const WHITE: Color = iced::Color::WHITE;
pub const TRANSPARENT_WHITE: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.5);
pub const NAVY: Color = Color::from_rgb(
    0x1f as f32 / 255.0,
    0x24 as f32 / 255.0,
    0x2d as f32 / 255.0,
);
pub const SLATE: Color = Color::from_rgb(
    0x2e as f32 / 255.0,
    0x35 as f32 / 255.0,
    0x42 as f32 / 255.0,
);
pub const SLATE_LIGHT: Color = Color::from_rgb(
    0x40 as f32 / 255.0,
    0x49 as f32 / 255.0,
    0x5a as f32 / 255.0,
);
pub const SLATE_BLUE: Color = Color::from_rgb(
    0x3a as f32 / 255.0,
    0x57 as f32 / 255.0,
    0x6b as f32 / 255.0,
);
pub const PETROL: Color = Color::from_rgb(
    0x2b as f32 / 255.0,
    0x5a as f32 / 255.0,
    0x65 as f32 / 255.0,
);
pub const CYAN: Color = Color::from_rgb(
    0x26 as f32 / 255.0,
    0xc5 as f32 / 255.0,
    0xdf as f32 / 255.0,
);
pub const WINE: Color = Color::from_rgb(
    0x58 as f32 / 255.0,
    0x2a as f32 / 255.0,
    0x30 as f32 / 255.0,
);
pub const WINE_LIGHT: Color = Color::from_rgb(
    0x80 as f32 / 255.0,
    0x2e as f32 / 255.0,
    0x38 as f32 / 255.0,
);
pub const RED: Color = Color::from_rgb(
    0xd4 as f32 / 255.0,
    0x25 as f32 / 255.0,
    0x43 as f32 / 255.0,
);
pub const GREY_2: Color = Color::from_rgb(
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
);
pub const GREY_3: Color = Color::from_rgb(
    0x8a as f32 / 255.0,
    0x93 as f32 / 255.0,
    0xa3 as f32 / 255.0,
);
pub const GREEN: Color = Color::from_rgb(
    0x3c as f32 / 255.0,
    0xc8 as f32 / 255.0,
    0x8c as f32 / 255.0,
);
