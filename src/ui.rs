use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

use crate::app::App;
use crate::system::ticks::TickSource;

pub fn draw<S: TickSource>(frame: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    render_gauge(frame, chunks[0], app);
    render_hints(frame, chunks[1], app);
}

fn render_gauge<S: TickSource>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let title = if app.paused { " cpu (paused) " } else { " cpu " };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let ratio = (app.latest().unwrap_or(0.0) / 100.0).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(block)
        .gauge_style(gauge_style(app.latest()))
        .ratio(ratio)
        .label(app.display_text());

    frame.render_widget(gauge, centered_band(area));
}

fn render_hints<S: TickSource>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let hints = Line::from(vec![
        Span::styled("q", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" quit  "),
        Span::styled("p", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" pause  "),
        Span::raw(format!("{}ms interval", app.refresh_rate_ms())),
    ]);
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn gauge_style(latest: Option<f64>) -> Style {
    let color = match latest {
        Some(v) if v >= 90.0 => Color::Red,
        Some(v) if v >= 60.0 => Color::Yellow,
        Some(_) => Color::Green,
        None => Color::DarkGray,
    };
    Style::default().fg(color)
}

// The gauge reads better as a 3-row band vertically centered in whatever
// space the terminal gives us.
fn centered_band(area: Rect) -> Rect {
    const BAND_HEIGHT: u16 = 3;
    if area.height <= BAND_HEIGHT {
        return area;
    }
    let top = (area.height - BAND_HEIGHT) / 2;
    Rect {
        x: area.x,
        y: area.y + top,
        width: area.width,
        height: BAND_HEIGHT,
    }
}
