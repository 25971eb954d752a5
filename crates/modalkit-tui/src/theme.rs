//! Color theme for dialog rendering.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for dialogs.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name.
    pub name: String,

    /// Dialog surface background.
    pub background: Color,
    /// Backdrop shade behind the dialog.
    pub backdrop: Color,

    /// Primary text color.
    pub text: Color,
    /// Muted/secondary text (message body, sheet headers).
    pub text_muted: Color,

    /// Tint for ordinary actions (iOS active blue).
    pub action: Color,
    /// Tint for destructive actions (iOS red).
    pub destructive: Color,
    /// Text color for disabled actions.
    pub disabled: Color,

    /// Dialog border.
    pub border: Color,
    /// Divider between action rows.
    pub divider: Color,
}

impl Theme {
    /// Dark theme, the default.
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color::Rgb(28, 28, 30),
            backdrop: Color::Rgb(10, 10, 10),
            text: Color::Rgb(235, 235, 245),
            text_muted: Color::Rgb(142, 142, 147),
            action: Color::Rgb(10, 132, 255),
            destructive: Color::Rgb(255, 69, 58),
            disabled: Color::Rgb(99, 99, 102),
            border: Color::Rgb(58, 58, 60),
            divider: Color::Rgb(58, 58, 60),
        }
    }

    /// Light theme.
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color::Rgb(242, 242, 247),
            backdrop: Color::Rgb(120, 120, 120),
            text: Color::Rgb(0, 0, 0),
            text_muted: Color::Rgb(99, 99, 102),
            action: Color::Rgb(0, 122, 255),
            destructive: Color::Rgb(255, 59, 48),
            disabled: Color::Rgb(174, 174, 178),
            border: Color::Rgb(199, 199, 204),
            divider: Color::Rgb(199, 199, 204),
        }
    }

    /// Look a theme up by name, falling back to dark.
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn message_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn action_style(&self) -> Style {
        Style::default().fg(self.action)
    }

    pub fn destructive_style(&self) -> Style {
        Style::default().fg(self.destructive)
    }

    pub fn disabled_style(&self) -> Style {
        Style::default().fg(self.disabled)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Highlight for the action under the selection cursor.
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .bg(self.action)
            .fg(self.background)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
