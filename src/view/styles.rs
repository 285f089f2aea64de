//! Color and text styling for the search screen.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Explicitly enable or disable colors.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Whether colored styles should be used.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Styles =====

/// Styles for every element on the search screen.
///
/// With colors disabled only text modifiers (bold, reversed) remain, so the
/// cursor, button and badges stay visible on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styles {
    /// App title in the header.
    pub title: Style,
    /// Person name.
    pub name: Style,
    /// Professional headline.
    pub headline: Style,
    /// Location line.
    pub location: Style,
    /// Skill badge.
    pub badge: Style,
    /// Validation error and "no results" message.
    pub error: Style,
    /// Idle prompt and suggestions heading.
    pub prompt: Style,
    /// Block cursor in the search box.
    pub cursor: Style,
    /// Search button when idle.
    pub button: Style,
    /// Search button while a search is loading.
    pub button_busy: Style,
    /// Status bar.
    pub status: Style,
}

impl Styles {
    /// Build the style set for the given color setting.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let reversed = Style::default().add_modifier(Modifier::REVERSED);

        if config.colors_enabled() {
            Self {
                title: bold.fg(Color::Cyan),
                name: bold.fg(Color::White),
                headline: Style::default().fg(Color::Gray),
                location: Style::default().fg(Color::DarkGray),
                badge: Style::default().fg(Color::Black).bg(Color::Cyan),
                error: bold.fg(Color::Red),
                prompt: Style::default().fg(Color::Yellow),
                cursor: bold.fg(Color::Black).bg(Color::White),
                button: bold.fg(Color::Black).bg(Color::Green),
                button_busy: Style::default().fg(Color::Black).bg(Color::DarkGray),
                status: Style::default().fg(Color::DarkGray),
            }
        } else {
            Self {
                title: bold,
                name: bold,
                headline: Style::default(),
                location: Style::default(),
                badge: Style::default(),
                error: bold,
                prompt: Style::default(),
                cursor: reversed,
                button: reversed,
                button_busy: Style::default(),
                status: Style::default(),
            }
        }
    }

    /// Styles with every color and modifier stripped (plain text output).
    pub fn plain() -> Self {
        let none = Style::default();
        Self {
            title: none,
            name: none,
            headline: none,
            location: none,
            badge: none,
            error: none,
            prompt: none,
            cursor: none,
            button: none,
            button_busy: none,
            status: none,
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
