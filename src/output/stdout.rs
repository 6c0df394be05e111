//! Stdout terminal backed by crossterm

use super::Terminal;
use crossterm::{
    queue,
    style::{Attribute, Color as CColor, Print, ResetColor, SetAttribute, SetForegroundColor},
    tty::IsTty,
};
use ratatui::{
    style::{Color, Modifier},
    text::Line,
};
use std::io::{self, Stdout, Write};

pub struct StdoutTerminal {
    out: Stdout,
    styled: bool,
}

impl StdoutTerminal {
    /// Colors are used only when stdout is a terminal
    pub fn new() -> Self {
        let out = io::stdout();
        let styled = out.is_tty();
        StdoutTerminal { out, styled }
    }
}

impl Default for StdoutTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn to_crossterm(color: Color) -> Option<CColor> {
    match color {
        Color::Rgb(r, g, b) => Some(CColor::Rgb { r, g, b }),
        Color::Reset => None,
        Color::Black => Some(CColor::Black),
        Color::Red => Some(CColor::DarkRed),
        Color::Green => Some(CColor::DarkGreen),
        Color::Yellow => Some(CColor::DarkYellow),
        Color::Blue => Some(CColor::DarkBlue),
        Color::Magenta => Some(CColor::DarkMagenta),
        Color::Cyan => Some(CColor::DarkCyan),
        Color::Gray => Some(CColor::Grey),
        Color::DarkGray => Some(CColor::DarkGrey),
        Color::LightRed => Some(CColor::Red),
        Color::LightGreen => Some(CColor::Green),
        Color::LightYellow => Some(CColor::Yellow),
        Color::LightBlue => Some(CColor::Blue),
        Color::LightMagenta => Some(CColor::Magenta),
        Color::LightCyan => Some(CColor::Cyan),
        Color::White => Some(CColor::White),
        Color::Indexed(i) => Some(CColor::AnsiValue(i)),
    }
}

/// Write one line, with ANSI colors when `styled` is set
fn write_line<W: Write>(out: &mut W, line: &Line<'_>, styled: bool) -> io::Result<()> {
    if !styled {
        for span in &line.spans {
            out.write_all(span.content.as_bytes())?;
        }
        return writeln!(out);
    }

    for span in &line.spans {
        let dim = span.style.add_modifier.contains(Modifier::DIM);
        if dim {
            queue!(out, SetAttribute(Attribute::Dim))?;
        }
        match span.style.fg.and_then(to_crossterm) {
            Some(color) => queue!(
                out,
                SetForegroundColor(color),
                Print(&span.content),
                ResetColor
            )?,
            None => queue!(out, Print(&span.content))?,
        }
        if dim {
            queue!(out, SetAttribute(Attribute::Reset))?;
        }
    }
    writeln!(out)
}

impl Terminal for StdoutTerminal {
    fn emit(&mut self, line: Line<'_>) -> io::Result<()> {
        write_line(&mut self.out.lock(), &line, self.styled)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::theme::DEFAULT_THEME;
    use ratatui::{style::Style, text::Span};

    fn sample_line() -> Line<'static> {
        Line::from(vec![
            Span::raw("P: "),
            Span::styled("42", Style::default().fg(DEFAULT_THEME.number)),
            Span::raw("\t"),
            Span::styled(
                "n/a",
                Style::default()
                    .fg(DEFAULT_THEME.unset)
                    .add_modifier(Modifier::DIM),
            ),
        ])
    }

    #[test]
    fn test_theme_colors_map_to_rgb() {
        assert_eq!(
            to_crossterm(DEFAULT_THEME.number),
            Some(CColor::Rgb {
                r: 250,
                g: 179,
                b: 135
            })
        );
        assert_eq!(
            to_crossterm(DEFAULT_THEME.unset),
            Some(CColor::Rgb {
                r: 243,
                g: 139,
                b: 168
            })
        );
        assert_eq!(to_crossterm(Color::Reset), None);
        assert_eq!(to_crossterm(Color::Indexed(7)), Some(CColor::AnsiValue(7)));
    }

    #[test]
    fn test_plain_line_has_no_escapes() {
        let mut out = Vec::new();
        write_line(&mut out, &sample_line(), false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "P: 42\tn/a\n");
    }

    #[test]
    fn test_styled_line_colors_and_dims() {
        let mut out = Vec::new();
        write_line(&mut out, &sample_line(), true).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("P: "));
        assert!(text.contains("\x1b[38;2;250;179;135m42"));
        assert!(text.contains("\x1b[2m"));
        assert!(text.contains("\x1b[38;2;243;139;168mn/a"));
        assert!(text.ends_with('\n'));
    }
}
