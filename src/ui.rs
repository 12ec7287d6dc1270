//! UI rendering helpers for the terminal user interface.
//!
//! This module draws a `Screen` with `ratatui`. Row placement inside the
//! bordered viewport, top to bottom: sung lines, the current line, upcoming
//! lines, then the progress bar with its time labels at the bottom.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};

use crate::progress::ProgressView;
use crate::screen::{Banner, CurrentLine, Screen, Viewport};

const CONTEXT_STYLE: Style = Style::new().fg(Color::Gray);
const TYPED_STYLE: Style = Style::new().fg(Color::LightBlue);
const ANIMATION_STYLE: Style = Style::new().fg(Color::LightMagenta);
const CAP_STYLE: Style = Style::new().fg(Color::White);
const FILLED_STYLE: Style = Style::new().fg(Color::Cyan);
const UNFILLED_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Place the viewport in the middle of `r`, shrinking it if the terminal is smaller.
fn viewport_rect(viewport: Viewport, r: Rect) -> Rect {
    let width = viewport.width.min(r.width);
    let height = viewport.height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

/// Lines prefixed with a dash, padded to `rows`. Sung lines sit against the
/// current row, so their padding goes on top.
fn context_lines(lines: &[String], rows: usize, pad_top: bool) -> Vec<Line<'_>> {
    let shown = &lines[lines.len().saturating_sub(rows)..];
    let mut out: Vec<Line> = shown
        .iter()
        .map(|l| Line::styled(format!("- {l}"), CONTEXT_STYLE))
        .collect();
    let padding = rows.saturating_sub(out.len());
    if pad_top {
        let mut padded = vec![Line::default(); padding];
        padded.append(&mut out);
        padded
    } else {
        out
    }
}

fn current_line(current: &CurrentLine) -> Line<'static> {
    let style = match current {
        CurrentLine::Animation(_) => ANIMATION_STYLE,
        _ => TYPED_STYLE,
    };
    Line::styled(current.render(), style)
}

fn progress_line(view: &ProgressView) -> Line<'static> {
    Line::from(vec![
        Span::styled("♫ [", CAP_STYLE),
        Span::styled("─".repeat(view.filled()), FILLED_STYLE),
        Span::styled("●", FILLED_STYLE),
        Span::styled("─".repeat(view.unfilled()), UNFILLED_STYLE),
        Span::styled("] ♫", CAP_STYLE),
    ])
}

fn draw_banner(frame: &mut Frame, banner: Banner, area: Rect) {
    let (style, heading, prompt) = match banner {
        Banner::Ready => (
            Style::new().fg(Color::LightGreen),
            "ALL READY",
            "Press enter to start the song",
        ),
        Banner::End => (
            Style::new().fg(Color::LightMagenta),
            "END",
            "Press enter to close",
        ),
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(2), Constraint::Fill(1)])
        .split(area);
    let text = Paragraph::new(vec![Line::styled(heading, style), Line::styled(prompt, style)])
        .alignment(Alignment::Center);
    frame.render_widget(text, rows[1]);
}

/// Render the whole screen into `frame`.
pub fn draw(frame: &mut Frame, screen: &Screen) {
    let area = viewport_rect(screen.viewport, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::bordered()
        .border_style(CONTEXT_STYLE)
        .title(format!(" {} ", screen.title))
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if let Some(banner) = screen.banner {
        draw_banner(frame, banner, inner);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(screen.previous_rows),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(screen.upcoming_rows),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let previous = context_lines(&screen.previous, screen.previous_rows as usize, true);
    frame.render_widget(Paragraph::new(previous), chunks[1]);

    frame.render_widget(Paragraph::new(current_line(&screen.current)), chunks[3]);

    let upcoming = context_lines(&screen.upcoming, screen.upcoming_rows as usize, false);
    frame.render_widget(Paragraph::new(upcoming), chunks[5]);

    if let Some(view) = &screen.progress {
        frame.render_widget(Paragraph::new(progress_line(view)), chunks[7]);
        frame.render_widget(
            Paragraph::new(Line::styled(view.elapsed_label.as_str(), CAP_STYLE)),
            chunks[8],
        );
        frame.render_widget(
            Paragraph::new(Line::styled(view.total_label.as_str(), CAP_STYLE))
                .alignment(Alignment::Right),
            chunks[8],
        );
    }
}
