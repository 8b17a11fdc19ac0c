//! State pane: the array with its index markers, secondary sequences,
//! variables and the step description

use crate::step::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Width of one array cell, including its padding
fn cell_width(array: &[i64]) -> usize {
    array
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1)
        + 2
}

/// Cells of the array, with pointed-at cells emphasised
fn array_line(array: &[i64], pointers: &[(&'static str, usize)]) -> Line<'static> {
    let width = cell_width(array);
    let spans: Vec<Span> = array
        .iter()
        .enumerate()
        .map(|(idx, v)| {
            let style = if pointers.iter().any(|&(_, p)| p == idx) {
                Style::default()
                    .fg(DEFAULT_THEME.pointer)
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.number)
            };
            Span::styled(format!("{:^width$}", v, width = width), style)
        })
        .collect();
    Line::from(spans)
}

/// Marker labels placed under their cells, one row per pointer
fn pointer_lines(array: &[i64], pointers: &[(&'static str, usize)]) -> Vec<Line<'static>> {
    let width = cell_width(array);
    pointers
        .iter()
        .map(|&(name, idx)| {
            let pad = " ".repeat(idx * width + width / 2);
            Line::from(vec![
                Span::raw(pad),
                Span::styled(
                    format!("↑ {}", name),
                    Style::default().fg(DEFAULT_THEME.pointer),
                ),
            ])
        })
        .collect()
}

fn format_sequence(values: &[i64]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

pub fn render_state_pane(frame: &mut Frame, area: Rect, step: &Step, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" State ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let label = Style::default().fg(DEFAULT_THEME.comment);
    let array = step.state.array();
    let pointers = step.state.pointers();

    let mut lines = vec![array_line(array, &pointers)];
    lines.extend(pointer_lines(array, &pointers));
    lines.push(Line::default());

    for (name, values) in step.state.extras() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>13}: ", name), label),
            Span::styled(
                format_sequence(&values),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
        ]));
    }

    if !step.variables.is_empty() {
        lines.push(Line::default());
        for (name, value) in step.variables.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("{:>13}", name), Style::default().fg(DEFAULT_THEME.type_name)),
                Span::styled(" = ", label),
                Span::styled(value.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
            ]));
        }
    }

    lines.push(Line::default());
    let description_style = if step.is_solution {
        Style::default()
            .fg(DEFAULT_THEME.success)
            .add_modifier(Modifier::BOLD)
    } else if step.is_complete {
        Style::default()
            .fg(DEFAULT_THEME.result)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };
    lines.push(Line::from(Span::styled(
        step.description.clone(),
        description_style,
    )));

    if let Some(result) = &step.result {
        lines.push(Line::from(vec![
            Span::styled("Result: ", label),
            Span::styled(
                result.to_string(),
                Style::default()
                    .fg(DEFAULT_THEME.result)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_label_sits_under_cell() {
        let array = [1, 22, 3];
        let lines = pointer_lines(&array, &[("mid", 1)]);
        assert_eq!(lines.len(), 1);
        // cells are 4 wide, so the label starts at 4 + 2
        assert_eq!(lines[0].spans[0].content.len(), 6);
    }

    #[test]
    fn test_format_sequence() {
        assert_eq!(format_sequence(&[]), "[]");
        assert_eq!(format_sequence(&[-1, 4]), "[-1, 4]");
    }
}
