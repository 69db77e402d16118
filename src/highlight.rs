use inksac::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl SyntaxHighlighter {
    /// Colours are used only when `enabled` and the terminal supports them.
    pub fn new(enabled: bool) -> Self {
        let support = if enabled {
            check_color_support().unwrap_or(ColorSupport::NoColor)
        } else {
            ColorSupport::NoColor
        };
        Self {
            color_support: support,
        }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Colours the command word (cyan for built-ins, green otherwise) and
    /// `-` options (yellow). Whitespace is kept exactly as typed so the
    /// cursor position stays valid.
    pub fn highlight_command(&self, input: &str, is_builtin: impl Fn(&str) -> bool) -> String {
        if !self.is_enabled() {
            return input.to_string();
        }

        let mut result = String::with_capacity(input.len() * 2);
        let mut last = 0;
        for (i, (start, end)) in word_spans(input).into_iter().enumerate() {
            result.push_str(&input[last..start]);
            let word = &input[start..end];
            let styled = if i == 0 {
                let color = if is_builtin(word) { Color::Cyan } else { Color::Green };
                let style = Style::builder().foreground(color).bold().build();
                word.style(style).to_string()
            } else if word.starts_with('-') {
                let style = Style::builder().foreground(Color::Yellow).build();
                word.style(style).to_string()
            } else {
                word.to_string()
            };
            result.push_str(&styled);
            last = end;
        }
        result.push_str(&input[last..]);
        result
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if !self.is_enabled() {
            return error.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();
        error.style(error_style).to_string()
    }

    pub fn highlight_status(&self, message: &str) -> String {
        if !self.is_enabled() {
            return message.to_string();
        }

        let status_style = Style::builder().foreground(Color::Yellow).build();
        message.style(status_style).to_string()
    }
}

/// Byte ranges of the whitespace-separated words in `input`.
fn word_spans(input: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;
    for (idx, ch) in input.char_indices() {
        match (ch.is_whitespace(), start) {
            (true, Some(s)) => {
                spans.push((s, idx));
                start = None;
            }
            (false, None) => start = Some(idx),
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push((s, input.len()));
    }
    spans
}
