use ratatui::style::Color;

pub struct Theme {
    pub label: Color,
    pub number: Color,
    pub glyph: Color,
    pub text: Color,
    pub unset: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    label: Color::Rgb(108, 112, 134),
    number: Color::Rgb(250, 179, 135),
    glyph: Color::Rgb(249, 226, 175),
    text: Color::Rgb(205, 214, 244),
    unset: Color::Rgb(243, 139, 168),
};
