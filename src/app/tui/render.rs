use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState, Wrap,
};

use super::super::nav::Route;
use super::super::screens::{ContentScreen, PlaybackScreen, SearchFocus, SearchScreen};
use super::super::shell::{Screen, Shell};
use super::super::text::{TextInput, truncate};

pub(super) fn draw_tui(frame: &mut Frame, shell: &Shell<'_>) {
    let bg = Block::default().style(Style::default().bg(Color::Black));
    frame.render_widget(bg, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let nav = Paragraph::new(nav_line(shell.route()))
        .alignment(Alignment::Center)
        .block(panel_block("CoHost"));
    frame.render_widget(nav, chunks[0]);

    match shell.screen() {
        Screen::Search(screen) => draw_search(frame, chunks[1], screen),
        Screen::Content(screen) => draw_content(frame, chunks[1], screen),
        Screen::Playback(screen) => draw_playback(frame, chunks[1], screen),
    }

    let hints = Paragraph::new(Line::from(Span::styled(
        key_hints(shell.screen()),
        Style::default().fg(Color::Rgb(185, 195, 210)),
    )))
    .alignment(Alignment::Center)
    .block(panel_block("Controls"));
    frame.render_widget(hints, chunks[2]);

    let status_widget = Paragraph::new(shell.status().to_string())
        .style(status_style(shell.status()))
        .block(panel_block("Status"));
    frame.render_widget(status_widget, chunks[3]);
}

fn draw_search(frame: &mut Frame, area: Rect, screen: &SearchScreen) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let keyword_title = if screen.is_searching() {
        "Keyword (searching...)"
    } else {
        "Keyword"
    };
    let keyword_focused = screen.focus == SearchFocus::Keyword;
    let keyword = Paragraph::new(screen.keyword.as_str().to_string())
        .style(Style::default().fg(Color::Rgb(230, 230, 230)))
        .block(focus_block(keyword_title, keyword_focused));
    frame.render_widget(keyword, rows[0]);
    if keyword_focused {
        place_cursor(frame, rows[0], &screen.keyword, 0);
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(64), Constraint::Percentage(36)])
        .split(rows[1]);

    let table_rows: Vec<Row> = screen
        .videos()
        .iter()
        .map(|video| {
            Row::new(vec![
                Cell::from(video.title.clone()),
                Cell::from(video.summary_preview()),
            ])
        })
        .collect();
    let results_title = match screen.cached_at() {
        Some(stored_at) => format!("Results ({}, cached {})", screen.videos().len(), stored_at),
        None => format!("Results ({})", screen.videos().len()),
    };
    let table = Table::new(
        table_rows,
        [Constraint::Percentage(40), Constraint::Percentage(60)],
    )
    .header(
        Row::new(vec!["Title", "Summary"]).style(
            Style::default()
                .fg(Color::Rgb(110, 170, 255))
                .add_modifier(Modifier::BOLD),
        ),
    )
    .block(focus_block(&results_title, !keyword_focused))
    .row_highlight_style(
        Style::default()
            .bg(Color::Rgb(110, 170, 255))
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("▸ ");
    let mut table_state = TableState::default();
    table_state.select(screen.selected());
    frame.render_stateful_widget(table, body[0], &mut table_state);

    let card_text = match screen.selected_video() {
        Some(video) => format!(
            "Title\n{}\n\nThumbnail\n{}\n\nSource\n{}\n\nSummary\n{}",
            truncate(&video.title, 80),
            video.thumbnail_url(),
            video.source.as_deref().unwrap_or("-"),
            video.summary_preview(),
        ),
        None => "No results yet.\n\nType a keyword and press Enter to search.".to_string(),
    };
    let card = Paragraph::new(card_text)
        .style(Style::default().fg(Color::Rgb(230, 230, 230)))
        .wrap(Wrap { trim: true })
        .block(panel_block("Selected"));
    frame.render_widget(card, body[1]);
}

fn draw_content(frame: &mut Frame, area: Rect, screen: &ContentScreen) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let video = screen.video();
    let player = Paragraph::new(vec![
        Line::from(Span::styled(
            truncate(&video.title, 120),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Watch in a browser:"),
        Line::from(Span::styled(
            video.embed_url(),
            Style::default().fg(Color::Rgb(110, 170, 255)),
        )),
    ])
    .style(Style::default().fg(Color::Rgb(230, 230, 230)))
    .wrap(Wrap { trim: true })
    .block(panel_block("Player"));
    frame.render_widget(player, columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[1]);

    let editor_area = right[0];
    let visible_lines = editor_area.height.saturating_sub(2).max(1) as usize;
    let (cursor_line, _) = screen.summary.cursor_line_col();
    let scroll = cursor_line.saturating_sub(visible_lines - 1);
    let editor = Paragraph::new(screen.summary.as_str().to_string())
        .style(Style::default().fg(Color::Rgb(230, 230, 230)))
        .scroll((scroll as u16, 0))
        .block(focus_block("Editable Summary for This Video", true));
    frame.render_widget(editor, editor_area);
    place_cursor(frame, editor_area, &screen.summary, scroll);

    let transcript_title = format!(
        "Shared Transcript (from all {} summaries)",
        screen.all_videos().len()
    );
    let transcript = Paragraph::new(screen.transcript().to_string())
        .style(Style::default().fg(Color::Rgb(185, 195, 210)))
        .wrap(Wrap { trim: true })
        .block(panel_block(&transcript_title));
    frame.render_widget(transcript, right[1]);
}

fn draw_playback(frame: &mut Frame, area: Rect, screen: &PlaybackScreen) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(6)])
        .split(area);

    let Some(details) = screen.details() else {
        let empty = Paragraph::new("No video selected for playback")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Rgb(125, 135, 150)))
            .block(panel_block("Player"));
        frame.render_widget(empty, rows[0]);
        let hint = Paragraph::new(
            "No video content available. Please generate a video from the content page.",
        )
        .style(Style::default().fg(Color::Rgb(185, 195, 210)))
        .wrap(Wrap { trim: true })
        .block(panel_block("Video Details"));
        frame.render_widget(hint, rows[1]);
        return;
    };

    let source_id = screen
        .payload()
        .map(|payload| payload.video_id.clone())
        .unwrap_or_default();
    let player = Paragraph::new(format!(
        "Generated video is being processed...\n\nfrom {source_id}"
    ))
    .style(Style::default().fg(Color::White).bg(Color::Rgb(14, 16, 24)))
    .block(panel_block("Player"));
    frame.render_widget(player, rows[0]);

    let label = Style::default()
        .fg(Color::Rgb(110, 170, 255))
        .add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(Span::styled("Source", label)),
        Line::from(details.source_title),
        Line::from(""),
        Line::from(Span::styled("Content Type", label)),
        Line::from(details.content_type),
        Line::from(""),
        Line::from(Span::styled("Content Preview", label)),
    ];
    lines.extend(details.preview.lines().map(|line| Line::from(line.to_string())));
    let panel = Paragraph::new(lines)
        .style(Style::default().fg(Color::Rgb(230, 230, 230)))
        .wrap(Wrap { trim: false })
        .block(panel_block("Video Details"));
    frame.render_widget(panel, rows[1]);
}

fn place_cursor(frame: &mut Frame, area: Rect, input: &TextInput, scroll: usize) {
    let (line, col) = input.cursor_line_col();
    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2);
    if inner_width == 0 || inner_height == 0 {
        return;
    }
    let x = area.x + 1 + (col as u16).min(inner_width - 1);
    let y = area.y + 1 + (line.saturating_sub(scroll) as u16).min(inner_height - 1);
    frame.set_cursor_position((x, y));
}

fn nav_line(active: Route) -> Line<'static> {
    let mut spans = Vec::new();
    for (idx, route) in Route::ALL.into_iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" ", Style::default()));
        }
        let style = if route == active {
            pill_active()
        } else {
            pill_inactive()
        };
        spans.push(Span::styled(
            format!(" F{} {} {} ", idx + 1, route.label(), route.path()),
            style,
        ));
    }
    Line::from(spans)
}

fn key_hints(screen: &Screen) -> &'static str {
    match screen {
        Screen::Search(screen) if screen.focus == SearchFocus::Results => {
            "↑/↓ move  Enter open  Tab keyword  F1-F3 routes  Ctrl+C quit"
        }
        Screen::Search(_) => "type keyword  Enter search  Tab results  F1-F3 routes  Ctrl+C quit",
        Screen::Content(_) => "type to edit  Ctrl+S generate video  F1-F3 routes  Ctrl+C quit",
        Screen::Playback(_) => "F1 home  F2 content  Ctrl+C quit",
    }
}

fn panel_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(125, 135, 150)))
        .title(title)
}

fn focus_block(title: &str, focused: bool) -> Block<'_> {
    if !focused {
        return panel_block(title);
    }
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(
            Style::default()
                .fg(Color::Rgb(160, 190, 235))
                .add_modifier(Modifier::BOLD),
        )
        .title(title)
}

fn pill_active() -> Style {
    Style::default()
        .bg(Color::Rgb(110, 170, 255))
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD)
}

fn pill_inactive() -> Style {
    Style::default()
        .bg(Color::Rgb(72, 82, 96))
        .fg(Color::Rgb(230, 235, 242))
}

fn status_style(status: &str) -> Style {
    if status.starts_with("ERROR:") {
        Style::default()
            .fg(Color::Rgb(255, 145, 120))
            .add_modifier(Modifier::BOLD)
    } else if status.starts_with("INFO:") {
        Style::default().fg(Color::Rgb(205, 165, 255))
    } else {
        Style::default().fg(Color::Rgb(230, 235, 242))
    }
}
