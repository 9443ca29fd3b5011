#![allow(dead_code)]

use ratatui::{
    style::{Modifier, Style},
    text::Span,
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::app::StatusType;
use crate::shared::theme::{ModernIcons, ModernTheme};

/// Truncate text to a maximum visual width, Unicode-aware.
/// Appends an ellipsis when anything was cut off.
pub fn truncate_text(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let budget = max_width.saturating_sub(1); // room for the ellipsis

    for grapheme in text.graphemes(true) {
        let width = grapheme.width();
        if current_width + width > budget {
            break;
        }
        result.push_str(grapheme);
        current_width += width;
    }

    result.push('…');
    result
}

/// Checkbox icon for a candidate's selection flag
pub fn checkbox_icon(selected: bool) -> &'static str {
    if selected {
        ModernIcons::CHECKED
    } else {
        ModernIcons::UNCHECKED
    }
}

/// Icon and color for a status message type
pub fn status_span<'a>(status_type: &StatusType, theme: &ModernTheme) -> Span<'a> {
    match status_type {
        StatusType::Info => Span::styled(ModernIcons::INFO, Style::default().fg(theme.info)),
        StatusType::Success => {
            Span::styled(ModernIcons::SUCCESS, Style::default().fg(theme.success))
        }
        StatusType::Warning => {
            Span::styled(ModernIcons::WARNING, Style::default().fg(theme.warning))
        }
        StatusType::Error => Span::styled(ModernIcons::FAILURE, Style::default().fg(theme.danger)),
    }
}

/// One "key: action" hint pair for the footer
pub fn key_hint<'a>(key: &'a str, action: &'a str, theme: &ModernTheme) -> Vec<Span<'a>> {
    vec![
        Span::styled(
            key,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {action}  "), Style::default().fg(theme.text_secondary)),
    ]
}
