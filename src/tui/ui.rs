//! Projects `App` state into ratatui widgets. Stateless aside from the
//! frame it draws into; everything shown derives from the state passed in,
//! so "clearing the results" is simply rendering an empty state.

use crate::core::query;
use crate::core::state::App;
use crate::tui::{InputMode, TuiState};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Paragraph, Wrap};

/// Shown in place of the image line when a summary has no lead image.
pub const IMAGE_PLACEHOLDER: &str = "(no image available)";

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let notice_height = if app.error.is_some() { 1 } else { 0 };
    let related_height = related_area_height(app);
    let layout = Layout::vertical([
        Length(1),
        Length(notice_height),
        Min(0),
        Length(related_height),
        Length(3),
    ]);
    let [title_area, notice_area, article_area, related_area, input_area] =
        layout.areas(frame.area());

    // Title bar
    let title_text = format!("Wander | {}", app.status_message);
    frame.render_widget(Span::raw(title_text), title_area);

    // Transient error notice at the top, above the results
    if let Some(notice) = &app.error {
        draw_error_notice(frame, notice_area, &notice.message);
    }

    draw_article_area(frame, article_area, app, spinner_frame);

    if related_height > 0 {
        draw_related_area(frame, related_area, app, tui);
    }

    // Search input
    let dimmed = matches!(tui.input_mode, InputMode::Browse);
    let input_style = if dimmed {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default()
    };
    let input = Paragraph::new(tui.input_buffer.as_str())
        .style(input_style)
        .block(Block::bordered().title("Search (Enter to go, Esc to browse)"));
    frame.render_widget(input, input_area);

    if matches!(tui.input_mode, InputMode::Input) {
        let cursor_x = input_area.x + 1 + tui.input_buffer.chars().count() as u16;
        frame.set_cursor_position((cursor_x.min(input_area.right().saturating_sub(2)), input_area.y + 1));
    }
}

/// Rows reserved for the related list: the bordered list plus its titles,
/// capped so a long list never squeezes out the article.
fn related_area_height(app: &App) -> u16 {
    if !app.related.is_empty() {
        return app.related.len().min(8) as u16 + 2;
    }
    // The related chain is still loading behind a visible article.
    if app.is_loading && app.latest_article().is_some() {
        return 3;
    }
    0
}

fn draw_error_notice(frame: &mut Frame, area: Rect, message: &str) {
    let notice = Paragraph::new(message)
        .style(Style::default().fg(Color::Black).bg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(notice, area);
}

fn draw_article_area(frame: &mut Frame, area: Rect, app: &App, spinner_frame: usize) {
    let block = Block::bordered().title("Article");

    let Some(article) = app.latest_article() else {
        let text = if app.is_loading {
            format!("{} loading...", SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()])
        } else {
            String::from("Type a search term, or press Ctrl+R for a random article.")
        };
        let placeholder = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, area);
        return;
    };

    let lines = vec![
        Line::styled(
            article.title.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            image_line(article.image_source()),
            Style::default().fg(Color::DarkGray),
        ),
        Line::raw(""),
        Line::raw(article.extract.clone()),
    ];
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn draw_related_area(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let title = if app.is_loading && app.latest_article().is_some() {
        "Related (loading...)"
    } else {
        "Related (↑/↓ select, Enter to open)"
    };
    let block = Block::bordered().title(title);

    let items: Vec<ListItem> = app
        .related
        .iter()
        .map(|t| ListItem::new(query::to_display(t)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    tui.related_list.select(if app.related.is_empty() {
        None
    } else {
        Some(tui.selected_related.min(app.related.len() - 1))
    });
    frame.render_stateful_widget(list, area, &mut tui.related_list);
}

/// The image line of an article block: the source URL, or the fixed
/// placeholder when the summary carries no image.
fn image_line(source: Option<&str>) -> String {
    match source {
        Some(url) => url.to_string(),
        None => IMAGE_PLACEHOLDER.to_string(),
    }
}
