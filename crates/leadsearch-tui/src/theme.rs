//! LeadSearch palette and semantic styles.

use ratatui::style::{Color, Modifier, Style};

// ── Brand palette ─────────────────────────────────────────────────────

pub const BRAND_BLUE: Color = Color::Rgb(37, 99, 235); // #2563eb
pub const DEEP_BLUE: Color = Color::Rgb(29, 78, 216); // #1d4ed8
pub const SKY: Color = Color::Rgb(147, 197, 253); // #93c5fd
pub const GOLD: Color = Color::Rgb(250, 204, 21); // #facc15
pub const SUCCESS_GREEN: Color = Color::Rgb(74, 222, 128); // #4ade80
pub const ERROR_RED: Color = Color::Rgb(239, 68, 68); // #ef4444

// ── Neutrals ──────────────────────────────────────────────────────────

pub const TEXT: Color = Color::Rgb(229, 231, 235); // #e5e7eb
pub const MUTED: Color = Color::Rgb(156, 163, 175); // #9ca3af
pub const BORDER_GRAY: Color = Color::Rgb(75, 85, 99); // #4b5563
pub const BG_DARK: Color = Color::Rgb(17, 24, 39); // #111827

// ── Semantic styles ───────────────────────────────────────────────────

pub fn brand() -> Style {
    Style::default().fg(SKY).add_modifier(Modifier::BOLD)
}

pub fn title_style() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn body() -> Style {
    Style::default().fg(TEXT)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

/// Headline figure (total companies).
pub fn figure() -> Style {
    Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
}

/// Focus ring around the search panel.
pub fn border_focused() -> Style {
    Style::default().fg(BRAND_BLUE)
}

pub fn border_default() -> Style {
    Style::default().fg(BORDER_GRAY)
}

pub fn tab_active() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(BRAND_BLUE)
        .add_modifier(Modifier::BOLD)
}

pub fn tab_inactive() -> Style {
    Style::default().fg(MUTED)
}

pub fn button() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(DEEP_BLUE)
        .add_modifier(Modifier::BOLD)
}

pub fn error() -> Style {
    Style::default().fg(ERROR_RED)
}

pub fn field_label() -> Style {
    Style::default().fg(SKY).add_modifier(Modifier::BOLD)
}

pub fn key_hint() -> Style {
    Style::default().fg(MUTED)
}

pub fn key_hint_key() -> Style {
    Style::default().fg(SKY).add_modifier(Modifier::BOLD)
}
