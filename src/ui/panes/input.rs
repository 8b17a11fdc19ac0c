//! Custom input form, drawn as a popup over the panes

use crate::ui::app::InputForm;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Centred rectangle of at most `width` x `height` inside `area`
fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn render_input_form(frame: &mut Frame, area: Rect, form: &InputForm, title: &str) {
    let popup = popup_area(area, 64, form.fields.len() as u16 + 4);

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    let mut lines: Vec<Line> = form
        .fields
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            let focused = idx == form.focus;
            let label_style = if focused {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };
            let cursor = if focused { "█" } else { "" };
            Line::from(vec![
                Span::styled(format!("{:>8}: ", field.label), label_style),
                Span::styled(
                    format!("{}{}", field.text, cursor),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
            ])
        })
        .collect();

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "comma or space separated integers",
        Style::default().fg(DEFAULT_THEME.comment),
    )));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
