use crate::memory::value::Value;
use crate::output::theme::DEFAULT_THEME;
use crate::walker::engine::{Header, Step};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

/// Render a character, escaping control characters as `\xNN`
pub(crate) fn display_char(c: char) -> String {
    if c.is_control() {
        format!("\\x{:02x}", c as u32)
    } else {
        c.to_string()
    }
}

/// Render a string so it always stays on one output line
pub(crate) fn display_text(s: &str) -> String {
    if !s.chars().any(char::is_control) {
        return s.to_string();
    }
    s.chars().map(display_char).collect()
}

fn label(text: &'static str) -> Span<'static> {
    Span::styled(text, Style::default().fg(DEFAULT_THEME.label))
}

fn value_span(value: &Value) -> Span<'static> {
    let style = match value {
        Value::Int(_) => Style::default().fg(DEFAULT_THEME.number),
        Value::Str(_) => Style::default().fg(DEFAULT_THEME.text),
        Value::Uninitialized => Style::default()
            .fg(DEFAULT_THEME.unset)
            .add_modifier(Modifier::DIM),
    };
    Span::styled(value.to_string(), style)
}

/// `Q: <end>\tP: n/a\tLEN: <length>\tS: <text>`
pub fn header_line(header: &Header) -> Line<'static> {
    Line::from(vec![
        label("Q: "),
        value_span(&header.end),
        Span::raw("\t"),
        label("P: "),
        value_span(&header.cursor),
        Span::raw("\t"),
        label("LEN: "),
        value_span(&header.length),
        Span::raw("\t"),
        label("S: "),
        value_span(&header.text),
    ])
}

/// `OCTET: <code>\t*P: <glyph>\t\tP: <suffix>`
pub fn step_line(step: &Step<'_>) -> Line<'static> {
    Line::from(vec![
        label("OCTET: "),
        Span::styled(
            step.code.to_string(),
            Style::default().fg(DEFAULT_THEME.number),
        ),
        Span::raw("\t"),
        label("*P: "),
        Span::styled(
            display_char(step.glyph),
            Style::default().fg(DEFAULT_THEME.glyph),
        ),
        Span::raw("\t\t"),
        label("P: "),
        Span::styled(
            display_text(step.suffix),
            Style::default().fg(DEFAULT_THEME.text),
        ),
    ])
}

/// The line's text with all styling dropped
pub fn plain(line: &Line<'_>) -> String {
    line.spans
        .iter()
        .map(|span| span.content.as_ref())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_char_escapes_controls() {
        assert_eq!(display_char('T'), "T");
        assert_eq!(display_char(' '), " ");
        assert_eq!(display_char('\t'), "\\x09");
        assert_eq!(display_char('\n'), "\\x0a");
        assert_eq!(display_char('\u{7f}'), "\\x7f");
    }

    #[test]
    fn test_display_text_stays_on_one_line() {
        assert_eq!(display_text("lazy dog"), "lazy dog");
        assert_eq!(display_text("a\nb"), "a\\x0ab");
    }

    #[test]
    fn test_step_line_layout() {
        let step = Step {
            cursor: 0,
            address: 0x0040_0000,
            code: 84,
            glyph: 'T',
            suffix: "The",
        };
        assert_eq!(plain(&step_line(&step)), "OCTET: 84\t*P: T\t\tP: The");
    }
}
