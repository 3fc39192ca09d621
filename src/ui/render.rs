use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::feed::{FeedPhase, SnapshotSection};
use crate::ui::app::App;
use crate::ui::layout::{centered_rect, layout_regions, visible_window, CARD_WIDTH, SECTION_HEIGHT};
use crate::ui::theme::{
    ACCENT_LIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, SELECTED_BORDER,
    STATUS_ERROR, STATUS_OK, STATUS_PENDING,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(header_widget(app), header);
    frame.render_widget(Clear, body);

    let presentation = app.feed().presentation();
    if let Some(error) = presentation.error {
        draw_error(frame, body, error);
    } else if presentation.show_spinner {
        draw_loading(frame, body, app);
    } else if presentation.show_content {
        draw_sections(frame, body, app);
    }

    frame.render_widget(footer_widget(footer), footer);
}

fn header_widget(app: &App) -> Paragraph<'static> {
    let (label, color) = match app.feed().phase() {
        FeedPhase::Initial => ("Waiting", STATUS_PENDING),
        FeedPhase::Loading => ("Loading", STATUS_PENDING),
        FeedPhase::Loaded => ("Loaded", STATUS_OK),
        FeedPhase::Error(_) => ("Error", STATUS_ERROR),
    };
    let text_style = Style::default().fg(HEADER_TEXT);
    let separator_style = Style::default().fg(HEADER_SEPARATOR);

    let line = Line::from(vec![
        Span::styled("  ● ", Style::default().fg(color)),
        Span::styled(label, text_style),
        Span::styled("  │  ", separator_style),
        Span::styled(app.feed_url().to_string(), text_style),
        Span::styled("  │  ", separator_style),
        Span::styled(
            format!("{} sections", app.snapshot().sections().len()),
            text_style,
        ),
        Span::styled("  │  ", separator_style),
        Span::styled(app.image_scale().to_string(), text_style),
    ]);

    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn footer_widget(area: Rect) -> Paragraph<'static> {
    let hints = " ←/→: Item │ ↑/↓: Section │ r: Reload │ q: Quit";
    let version = format!("v{} ", VERSION);

    let content_width = area.width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(hints.chars().count())
        .saturating_sub(version.chars().count());

    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let line = Line::from(vec![
        Span::styled(hints, text_style),
        Span::styled(" ".repeat(padding), text_style),
        Span::styled(version, text_style),
    ]);

    Paragraph::new(line).style(text_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn draw_loading(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let text = Line::from(vec![
        Span::styled(app.spinner_frame(), Style::default().fg(ACCENT_LIGHT)),
        Span::styled(" Loading sections…", Style::default().fg(HEADER_TEXT)),
    ]);
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered_rect(60, 20, area));
}

fn draw_error(frame: &mut Frame<'_>, area: Rect, message: &str) {
    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press r to retry",
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Failed to load sections ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(STATUS_ERROR)),
        );
    frame.render_widget(paragraph, centered_rect(70, 40, area));
}

fn draw_sections(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let sections = app.snapshot().sections();
    if sections.is_empty() {
        let empty = Paragraph::new("No sections").alignment(Alignment::Center);
        frame.render_widget(empty, centered_rect(60, 20, area));
        return;
    }

    let capacity = (area.height / SECTION_HEIGHT) as usize;
    let (start, end) = visible_window(sections.len(), app.selected_section(), capacity);

    for (row, index) in (start..end).enumerate() {
        let section_area = Rect {
            x: area.x,
            y: area.y + row as u16 * SECTION_HEIGHT,
            width: area.width,
            height: SECTION_HEIGHT,
        };
        draw_section(frame, section_area, app, index, &sections[index]);
    }
}

fn draw_section(
    frame: &mut Frame<'_>,
    area: Rect,
    app: &App,
    index: usize,
    section: &SnapshotSection,
) {
    let is_current = index == app.selected_section();
    let header_style = if is_current {
        Style::default().fg(ACCENT_LIGHT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)
    };
    let header = Line::from(vec![
        Span::styled(format!(" {}", section.header), header_style),
        Span::styled(
            format!("  {} of {}", section.items_to_show, section.items_total),
            Style::default().fg(MUTED_TEXT),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(header),
        Rect {
            height: 1,
            ..area
        },
    );

    let row = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: area.height.saturating_sub(1),
    };
    if section.item_keys.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("  (empty)", Style::default().fg(MUTED_TEXT))),
            row,
        );
        return;
    }

    let selected = if is_current { app.selected_item() } else { 0 };
    let capacity = (row.width / CARD_WIDTH) as usize;
    let (start, end) = visible_window(section.item_keys.len(), selected, capacity);

    for (col, key) in section.item_keys[start..end].iter().enumerate() {
        let Some(data) = app.snapshot().render_item(key, app.image_scale()) else {
            continue;
        };
        let highlighted = is_current && start + col == selected;
        let border = if highlighted { SELECTED_BORDER } else { GLOBAL_BORDER };

        let card = Rect {
            x: row.x + 1 + col as u16 * CARD_WIDTH,
            y: row.y,
            width: CARD_WIDTH.saturating_sub(2),
            height: row.height,
        };
        let lines = vec![
            Line::from(Span::styled(
                data.title,
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(data.image_url, Style::default().fg(MUTED_TEXT))),
        ];
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
        frame.render_widget(paragraph, card);
    }
}
