// UI module for rendering the TUI.
// Contains the tab bar, the code, mods, and logs panels, and the status bar.

mod list;
mod tabs;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::state::{SearchResult, Tab};

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tabs(frame, app, chunks[0]);
    draw_content(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the main content area based on active tab.
fn draw_content(frame: &mut Frame, app: &mut App, area: Rect) {
    match app.console.view.current_tab() {
        Tab::Code => draw_code_tab(frame, app, area),
        Tab::Mods => list::render_mods_list(frame, &mut app.console.mods, area),
        Tab::Logs => draw_logs_tab(frame, app, area),
    }
}

/// Draw the code search tab: input line, then the last query and its result.
fn draw_code_tab(frame: &mut Frame, app: &App, area: Rect) {
    let search = &app.console.search;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let input_line = Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Yellow)),
        Span::raw(search.input()),
        Span::styled("█", Style::default().fg(Color::Yellow)),
    ]);
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Search ");
    frame.render_widget(Paragraph::new(input_line).block(input_block), chunks[0]);

    let title = if search.last_query().is_empty() {
        " Result ".to_string()
    } else {
        format!(" Result for '{}' ", search.last_query())
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    let result = search.result();
    let paragraph = match result {
        SearchResult::Empty => Paragraph::new("Type a command and press Enter to find its code")
            .style(Style::default().fg(Color::DarkGray)),
        SearchResult::Failed => Paragraph::new("").style(Style::default().fg(Color::DarkGray)),
        SearchResult::NoMatch => {
            Paragraph::new(result.text()).style(Style::default().fg(Color::Yellow))
        }
        SearchResult::Found(code) => Paragraph::new(code.as_str()).scroll((search.scroll, 0)),
    };
    frame.render_widget(paragraph.block(block), chunks[1]);
}

/// Draw the logs tab: area and file columns, with the entries pane on the right.
fn draw_logs_tab(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(25),
            Constraint::Min(1),
        ])
        .split(area);

    list::render_log_columns(frame, &mut app.console.logs, chunks[0], chunks[1]);

    let logs = &app.console.logs;
    let title = match (&logs.selection().area, &logs.selection().file) {
        (Some(area), Some(file)) => format!(" {} / {} ", area, file),
        (Some(area), None) => format!(" {} ", area),
        _ => " Entries ".to_string(),
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    if logs.entries().is_empty() {
        let message = if logs.selection().file.is_some() {
            "Log entries are not available yet"
        } else {
            "Select a log file"
        };
        list::render_empty(frame, chunks[2], block, message);
    } else {
        let lines: Vec<Line> = logs.entries().iter().map(|e| Line::raw(e.as_str())).collect();
        frame.render_widget(Paragraph::new(lines).block(block), chunks[2]);
    }
}

/// Draw the status bar with keybinding hints and pending requests.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut hints = match app.console.view.current_tab() {
        Tab::Code => vec![
            Span::raw(" ↵ "),
            Span::styled("Search", Style::default().fg(Color::DarkGray)),
            Span::raw("  Esc "),
            Span::styled("Clear", Style::default().fg(Color::DarkGray)),
            Span::raw("  ↑↓ PgUp/Dn "),
            Span::styled("Scroll", Style::default().fg(Color::DarkGray)),
            Span::raw("  Tab "),
            Span::styled("Switch", Style::default().fg(Color::DarkGray)),
            Span::raw("  ^C "),
            Span::styled("Quit", Style::default().fg(Color::DarkGray)),
        ],
        Tab::Mods => vec![
            Span::raw(" ↑↓ "),
            Span::styled("Scroll", Style::default().fg(Color::DarkGray)),
            Span::raw("  r "),
            Span::styled("Refresh", Style::default().fg(Color::DarkGray)),
            Span::raw("  R "),
            Span::styled("Reload mods", Style::default().fg(Color::DarkGray)),
            Span::raw("  Tab "),
            Span::styled("Switch", Style::default().fg(Color::DarkGray)),
            Span::raw("  ? "),
            Span::styled("Help", Style::default().fg(Color::DarkGray)),
            Span::raw("  q "),
            Span::styled("Quit", Style::default().fg(Color::DarkGray)),
        ],
        Tab::Logs => vec![
            Span::raw(" ↑↓ "),
            Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
            Span::raw("  ←→ "),
            Span::styled("Column", Style::default().fg(Color::DarkGray)),
            Span::raw("  ↵ "),
            Span::styled("Select", Style::default().fg(Color::DarkGray)),
            Span::raw("  r "),
            Span::styled("Refresh", Style::default().fg(Color::DarkGray)),
            Span::raw("  ? "),
            Span::styled("Help", Style::default().fg(Color::DarkGray)),
            Span::raw("  q "),
            Span::styled("Quit", Style::default().fg(Color::DarkGray)),
        ],
    };

    let pending = app.pending();
    if pending > 0 {
        hints.push(Span::styled(
            format!("  ⏳ {} pending", pending),
            Style::default().fg(Color::Yellow),
        ));
    }

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Create a centered popup
    let popup_width = 55;
    let popup_height = 18;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(
        popup_x,
        popup_y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let key = |keys: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<14}", keys), Style::default().fg(Color::Cyan)),
            Span::raw(action),
        ])
    };

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        key("Tab/Shift-Tab", "Switch tabs"),
        key("1/2/3", "Code / Mods / Logs"),
        key("Enter", "Search (code) / select (logs)"),
        key("Esc", "Clear search input / close help"),
        key("↑/↓ or j/k", "Navigate list / scroll result"),
        key("←/→ or h/l", "Areas / files column (logs)"),
        key("r", "Refresh mods or log areas"),
        key("R", "Reload mods on the server"),
        key("?", "Show/hide this help"),
        key("q / Ctrl-C", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" or ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{DebugClient, parse_base_url};
    use crate::fetch::{Completion, Fetcher};
    use ratatui::backend::TestBackend;
    use serde_json::json;
    use tokio::runtime::Runtime;

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app(runtime: &Runtime) -> App {
        let client = DebugClient::new(parse_base_url("http://127.0.0.1:1").unwrap()).unwrap();
        App::new(Fetcher::new(client, runtime.handle().clone()))
    }

    #[test]
    fn test_no_match_message_rendered() {
        let runtime = Runtime::new().unwrap();
        let mut app = app(&runtime);
        app.console.apply(Completion::CodeSearch(Ok(serde_json::from_value(
            json!(["foo", ""]),
        )
        .unwrap())));

        let screen = render(&mut app);
        assert!(screen.contains("No matching code found."));
    }

    #[test]
    fn test_logs_tab_rendered() {
        let runtime = Runtime::new().unwrap();
        let mut app = app(&runtime);
        app.console.apply(Completion::LogInventory(Ok(serde_json::from_value(
            json!({"net": ["n1.log", "n2.log"]}),
        )
        .unwrap())));
        app.console.select_area("net");

        let screen = render(&mut app);
        assert!(screen.contains("net / n2.log"));
        assert!(screen.contains("n1.log"));
    }
}
