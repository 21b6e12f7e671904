use ratatui::{
    prelude::Text,
    style::{Color, Modifier, Style},
};

pub fn error_text(t: impl Into<Text<'static>>) -> Text<'static> {
    let mut t = t.into();
    t.patch_style(Style::default().fg(Color::Red));
    t
}

pub fn success_text(t: impl Into<Text<'static>>) -> Text<'static> {
    let mut t = t.into();
    t.patch_style(Style::default().fg(Color::Green));
    t
}

/// Style for whichever widget has focus
pub fn focused() -> Style {
    Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
}
