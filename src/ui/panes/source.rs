//! Source pane: the sample listing with the current line highlighted
//!
//! Keyword colouring is a small word tokenizer shared by all four
//! languages; it only needs to make the listing readable, not to parse it.

use crate::highlight::Language;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn comment_marker(language: Language) -> &'static str {
    match language {
        Language::Python => "#",
        _ => "//",
    }
}

fn highlight_source_code(line: &str, language: Language) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut word_start: Option<usize> = None;
    let marker = comment_marker(language);

    let mut iter = line.char_indices();
    while let Some((i, c)) = iter.next() {
        if c.is_alphanumeric() || c == '_' {
            word_start.get_or_insert(i);
            continue;
        }
        if let Some(start) = word_start.take() {
            push_word(&mut spans, &line[start..i], Some(c));
        }

        if line[i..].starts_with(marker) {
            spans.push(Span::styled(
                line[i..].to_string(),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            return Line::from(spans);
        }

        if c == '"' || c == '\'' {
            let mut end = line.len();
            while let Some((j, d)) = iter.next() {
                if d == '\\' {
                    iter.next();
                } else if d == c {
                    end = j + d.len_utf8();
                    break;
                }
            }
            spans.push(Span::styled(
                line[i..end].to_string(),
                Style::default().fg(DEFAULT_THEME.string),
            ));
            continue;
        }

        let style = match c {
            '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
            _ => Style::default().fg(DEFAULT_THEME.fg),
        };
        spans.push(Span::styled(c.to_string(), style));
    }

    if let Some(start) = word_start {
        push_word(&mut spans, &line[start..], None);
    }

    Line::from(spans)
}

fn push_word(spans: &mut Vec<Span<'static>>, word: &str, next: Option<char>) {
    spans.push(Span::styled(
        word.to_string(),
        keyword_style(word, next == Some('(')),
    ));
}

fn keyword_style(word: &str, is_function: bool) -> Style {
    match word {
        "int" | "long" | "bool" | "boolean" | "void" | "vector" | "unordered_map" | "unordered_set"
        | "Map" | "HashMap" | "Set" | "HashSet" | "Integer" | "List" | "ArrayList" => {
            Style::default().fg(DEFAULT_THEME.type_name)
        }
        "return" | "if" | "else" | "elif" | "while" | "for" | "in" | "break" | "continue"
        | "def" | "function" | "const" | "let" | "var" | "new" | "public" | "static"
        | "class" | "auto" | "and" | "or" | "not" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        "None" | "null" | "true" | "false" | "True" | "False" => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ if word.chars().all(|c| c.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ if is_function => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Scroll state for the source pane
#[derive(Debug, Default)]
pub struct SourceScrollState {
    pub offset: usize,
}

/// Render the listing. `current_line` is 1-based; `None` highlights nothing.
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    language: Language,
    current_line: Option<usize>,
    is_focused: bool,
    scroll_state: &mut SourceScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" Source ({}) ", language.name()))
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines: Vec<&str> = source_code.lines().collect();
    let total_lines = lines.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Keep the current line roughly centred
    if let Some(line) = current_line.filter(|&l| l > 0 && l <= total_lines) {
        let wanted = (line - 1).saturating_sub(visible_height / 2);
        let max_scroll = total_lines.saturating_sub(visible_height);
        scroll_state.offset = wanted.min(max_scroll);
    }

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_current = current_line == Some(line_num);

            let (marker, num_style) = if is_current {
                (
                    "▶",
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (" ", Style::default().fg(DEFAULT_THEME.comment))
            };

            let mut content = highlight_source_code(line, language);
            if is_current {
                let bg = Style::default().bg(DEFAULT_THEME.current_line_bg);
                for span in &mut content.spans {
                    span.style = span.style.patch(bg);
                }
            }

            let mut spans = vec![Span::styled(format!("{}{:3} ", marker, line_num), num_style)];
            spans.extend(content.spans);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_tokenizer_keeps_text() {
        for (src, lang) in [
            ("    seen = {}  # map", Language::Python),
            ("if (seen.has(complement)) { // hit", Language::JavaScript),
            ("String s = \"a\\\"b\";", Language::Java),
        ] {
            assert_eq!(text(&highlight_source_code(src, lang)), src);
        }
    }
}
