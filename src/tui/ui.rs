//! Rendering: top bar, sidebar list and editor pane.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::app::{App, Focus};
use crate::store::KeyValueStore;
use crate::view::{EMPTY_EDITOR_MESSAGE, NoteDetail};

const APP_NAME: &str = "Simple Notes";
const SIDEBAR_WIDTH: u16 = 36;
const BODY_PLACEHOLDER: &str = "Start typing your note here...";
const SEARCH_PLACEHOLDER: &str = "Search notes...";

const PRIMARY: Color = Color::Rgb(25, 118, 210);
const ACCENT: Color = Color::Rgb(255, 202, 40);
const SECONDARY: Color = Color::Rgb(66, 66, 66);
const MUTED: Color = Color::Rgb(133, 137, 151);
const PLACEHOLDER: Color = Color::Rgb(189, 189, 189);

/// Draws one frame.
pub fn render<S: KeyValueStore>(f: &mut Frame<'_>, app: &App<S>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(f.area());

    render_top_bar(f, app, layout[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(10)])
        .split(layout[1]);

    render_sidebar(f, app, body[0]);
    render_editor(f, app, body[1]);
}

fn render_top_bar<S: KeyValueStore>(f: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let bar_style = Style::default().bg(PRIMARY).fg(Color::White);
    let mut spans = vec![
        Span::styled(" ● ", Style::default().fg(ACCENT)),
        Span::styled(APP_NAME, Style::default().add_modifier(Modifier::BOLD)),
    ];
    if let Some(status) = app.status() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            status.to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)).style(bar_style), area);

    let hint = Paragraph::new(Line::from(vec![
        Span::styled(" + New (Ctrl-N) ", Style::default().bg(ACCENT).fg(SECONDARY)),
        Span::raw(" Quit (Ctrl-Q) "),
    ]))
    .alignment(Alignment::Right)
    .style(bar_style);
    let hint_width = 32.min(area.width);
    let hint_area = Rect {
        x: area.x + area.width - hint_width,
        width: hint_width,
        ..area
    };
    f.render_widget(hint, hint_area);
}

fn render_sidebar<S: KeyValueStore>(f: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let view = app.view();
    let search_focused = app.focus() == Focus::Search;
    let search = if view.search.is_empty() && !search_focused {
        Paragraph::new(Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(PLACEHOLDER)))
    } else {
        Paragraph::new(view.search.as_str())
    };
    f.render_widget(
        search.block(focus_block("Search", search_focused)),
        layout[0],
    );
    if search_focused {
        let col = app.search_input().line_col(&view.search).1;
        set_cursor(f, layout[0], 0, col, 0);
    }

    let list_block = focus_block("Notes", app.focus() == Focus::List);
    if let Some(message) = view.empty_message {
        let empty = Paragraph::new(Span::styled(message, Style::default().fg(PLACEHOLDER)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(list_block);
        f.render_widget(empty, layout[1]);
        return;
    }

    let items: Vec<ListItem> = view
        .rows
        .iter()
        .map(|row| {
            let edited_style = if row.is_active {
                Style::default().fg(SECONDARY)
            } else {
                Style::default().fg(MUTED)
            };
            ListItem::new(vec![
                Line::from(Span::styled(
                    row.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(row.edited.clone(), edited_style)),
            ])
        })
        .collect();

    let list = List::new(items).block(list_block).highlight_style(
        Style::default()
            .bg(ACCENT)
            .fg(SECONDARY)
            .add_modifier(Modifier::BOLD),
    );
    let mut state = ListState::default();
    state.select(view.active_row());
    f.render_stateful_widget(list, layout[1], &mut state);
}

fn render_editor<S: KeyValueStore>(f: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let Some(active) = app.view().active.as_ref() else {
        let empty = Paragraph::new(Span::styled(
            EMPTY_EDITOR_MESSAGE,
            Style::default().fg(PLACEHOLDER),
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        let centered = Rect {
            y: area.y + area.height / 2 - area.height.min(3) / 2,
            height: area.height.min(3),
            ..area
        };
        f.render_widget(empty, centered);
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_title(f, app, active, layout[0]);
    render_body(f, app, active, layout[1]);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Delete (Ctrl-D)", Style::default().fg(MUTED)),
        Span::raw("   "),
        Span::styled(
            format!("Last edited: {}", active.edited),
            Style::default().fg(SECONDARY),
        ),
    ]))
    .alignment(Alignment::Right);
    f.render_widget(footer, layout[2]);
}

fn render_title<S: KeyValueStore>(
    f: &mut Frame<'_>,
    app: &App<S>,
    active: &NoteDetail,
    area: Rect,
) {
    let focused = app.focus() == Focus::Title;
    let col = app.title_input().line_col(&active.title).1;
    let scroll = horizontal_scroll(col, area.width.saturating_sub(2));

    let title = Paragraph::new(Span::styled(
        active.title.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .scroll((0, scroll))
    .block(focus_block("Title", focused));
    f.render_widget(title, area);

    if focused {
        set_cursor(f, area, 0, col, scroll);
    }
}

fn render_body<S: KeyValueStore>(
    f: &mut Frame<'_>,
    app: &App<S>,
    active: &NoteDetail,
    area: Rect,
) {
    let focused = app.focus() == Focus::Body;
    let (line, col) = app.body_input().line_col(&active.body);
    let inner_height = area.height.saturating_sub(2);
    let vscroll = u16::try_from(line)
        .unwrap_or(u16::MAX)
        .saturating_sub(inner_height.saturating_sub(1));
    let hscroll = horizontal_scroll(col, area.width.saturating_sub(2));

    let body = if active.body.is_empty() && !focused {
        Paragraph::new(Span::styled(BODY_PLACEHOLDER, Style::default().fg(PLACEHOLDER)))
    } else {
        Paragraph::new(active.body.as_str())
    };
    f.render_widget(
        body.scroll((vscroll, hscroll))
            .block(focus_block("Body", focused)),
        area,
    );

    if focused {
        let row = u16::try_from(line).unwrap_or(u16::MAX).saturating_sub(vscroll);
        set_cursor(f, area, row, col, hscroll);
    }
}

fn focus_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(PRIMARY)
    } else {
        Style::default().fg(MUTED)
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border)
}

/// Columns to scroll so that `col` stays visible in a field `width` wide.
fn horizontal_scroll(col: usize, width: u16) -> u16 {
    let col = u16::try_from(col).unwrap_or(u16::MAX);
    col.saturating_sub(width.saturating_sub(1))
}

/// Places the terminal cursor inside a bordered field.
fn set_cursor(f: &mut Frame<'_>, area: Rect, row: u16, col: usize, hscroll: u16) {
    let col = u16::try_from(col).unwrap_or(u16::MAX).saturating_sub(hscroll);
    let x = area.x.saturating_add(1).saturating_add(col);
    let y = area.y.saturating_add(1).saturating_add(row);
    f.set_cursor_position((x.min(area.right().saturating_sub(2)), y));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, NOTES_KEY, NoteStore};
    use chrono::Locale;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    const NOTES: &str = r#"[
        {"id":"A","title":"Groceries for the whole week and then some","body":"eggs\nmilk","lastEdited":"2024-03-05T14:07:00.000Z"},
        {"id":"B","title":"Ideas","body":"","lastEdited":"2024-03-04T09:00:00.000Z"}
    ]"#;

    fn draw(app: &App<MemoryStore>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app_with(raw: Option<&str>) -> App<MemoryStore> {
        let storage = match raw {
            Some(raw) => MemoryStore::with_value(NOTES_KEY, raw),
            None => MemoryStore::new(),
        };
        App::new(NoteStore::load(storage), Locale::POSIX)
    }

    #[test]
    fn renders_top_bar_list_and_editor() {
        let screen = draw(&app_with(Some(NOTES)));
        assert!(screen.contains("Simple Notes"));
        assert!(screen.contains("Groceries for the whole week an…"));
        assert!(screen.contains("Ideas"));
        assert!(screen.contains("eggs"));
        assert!(screen.contains("Last edited:"));
    }

    #[test]
    fn empty_collection_shows_placeholders() {
        let screen = draw(&app_with(None));
        assert!(screen.contains("No notes yet."));
        assert!(screen.contains(EMPTY_EDITOR_MESSAGE));
        assert!(screen.contains(SEARCH_PLACEHOLDER));
    }

    #[test]
    fn unmatched_search_shows_no_matches() {
        let mut app = app_with(Some(NOTES));
        app.handle_key(KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE));
        for c in "zzz".chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        let screen = draw(&app);
        assert!(screen.contains("No matching notes."));
        assert!(screen.contains("zzz"));
    }

    #[test]
    fn empty_body_shows_placeholder_until_focused() {
        let mut app = app_with(Some(NOTES));
        app.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        assert!(draw(&app).contains(BODY_PLACEHOLDER));

        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(!draw(&app).contains(BODY_PLACEHOLDER));
    }

    #[test]
    fn horizontal_scroll_keeps_cursor_visible() {
        assert_eq!(horizontal_scroll(5, 10), 0);
        assert_eq!(horizontal_scroll(9, 10), 0);
        assert_eq!(horizontal_scroll(10, 10), 1);
        assert_eq!(horizontal_scroll(25, 10), 16);
    }
}
