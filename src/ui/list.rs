// List rendering for the mods and logs tabs.
// Provides styled list views with empty states and selection markers.

use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};
use serde_json::Value;

use crate::state::{LogBrowser, LogsFocus, ModsPanel};

/// Format a timestamp as relative time (e.g., "2h ago").
pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(*dt);

    if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

/// One-line text for an opaque module descriptor.
pub fn describe_module(module: &Value) -> String {
    match module {
        Value::String(name) => name.clone(),
        other => other.to_string(),
    }
}

/// Block title with the time of the last successful refresh.
fn refreshed_title(label: &str, refreshed: Option<&DateTime<Utc>>) -> String {
    match refreshed {
        Some(at) => format!(" {} · {} ", label, format_relative_time(at)),
        None => format!(" {} ", label),
    }
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, block: Block, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(block);
    frame.render_widget(text, area);
}

fn highlight_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    }
}

/// Render the loaded module list.
pub fn render_mods_list(frame: &mut Frame, mods: &mut ModsPanel, area: Rect) {
    let title = refreshed_title(
        &format!("Mods ({})", mods.modules().len()),
        mods.last_refreshed(),
    );
    let block = Block::default().borders(Borders::ALL).title(title);

    if mods.modules().is_empty() {
        let message = if mods.last_refreshed().is_some() {
            "No mods loaded"
        } else {
            "Waiting for module list"
        };
        render_empty(frame, area, block, message);
        return;
    }

    let items: Vec<ListItem> = mods
        .modules()
        .iter()
        .map(|module| ListItem::new(describe_module(module)))
        .collect();

    let list_widget = List::new(items)
        .block(block)
        .highlight_style(highlight_style(true))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, &mut mods.list_state);
}

/// Render a names column, marking the selected entry with a bullet.
#[allow(clippy::too_many_arguments)]
fn render_names_column(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    names: &[&str],
    selected: Option<&str>,
    focused: bool,
    state: &mut ListState,
    empty_message: &str,
) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", title));

    if names.is_empty() {
        render_empty(frame, area, block, empty_message);
        return;
    }

    let items: Vec<ListItem> = names
        .iter()
        .map(|name| {
            if Some(*name) == selected {
                ListItem::new(Line::from(vec![
                    Span::styled("● ", Style::default().fg(Color::Green)),
                    Span::styled(name.to_string(), Style::default().fg(Color::Green)),
                ]))
            } else {
                ListItem::new(format!("  {}", name))
            }
        })
        .collect();

    let list_widget = List::new(items)
        .block(block)
        .highlight_style(highlight_style(focused))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, state);
}

/// Render the area and file columns of the logs tab.
pub fn render_log_columns(frame: &mut Frame, logs: &mut LogBrowser, areas_rect: Rect, files_rect: Rect) {
    let areas: Vec<String> = logs.areas().into_iter().map(str::to_string).collect();
    let area_names: Vec<&str> = areas.iter().map(String::as_str).collect();
    let files = logs.files().to_vec();
    let file_names: Vec<&str> = files.iter().map(String::as_str).collect();
    let selection = logs.selection().clone();
    let focus = logs.cursor.focus;
    let areas_title = refreshed_title("Areas", logs.last_refreshed());

    render_names_column(
        frame,
        areas_rect,
        areas_title.trim(),
        &area_names,
        selection.area.as_deref(),
        focus == LogsFocus::Areas,
        &mut logs.cursor.areas,
        "No log areas",
    );

    let files_message = if selection.area.is_some() {
        "No files in this area"
    } else {
        "Select an area"
    };
    render_names_column(
        frame,
        files_rect,
        "Files",
        &file_names,
        selection.file.as_deref(),
        focus == LogsFocus::Files,
        &mut logs.cursor.files,
        files_message,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_relative_time() {
        let now = Utc::now();
        assert_eq!(format_relative_time(&now), "just now");
        assert_eq!(
            format_relative_time(&(now - chrono::Duration::minutes(5))),
            "5m ago"
        );
        assert_eq!(
            format_relative_time(&(now - chrono::Duration::hours(3))),
            "3h ago"
        );
        assert_eq!(
            format_relative_time(&(now - chrono::Duration::days(2))),
            "2d ago"
        );
    }

    #[test]
    fn test_describe_module() {
        assert_eq!(describe_module(&json!("physics")), "physics");
        assert_eq!(
            describe_module(&json!({"name": "ai", "loaded": true})),
            r#"{"loaded":true,"name":"ai"}"#
        );
        assert_eq!(describe_module(&json!(3)), "3");
    }
}
