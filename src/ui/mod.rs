pub mod field;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::game::Game;
use crate::scoreboard::{Scoreboard, TEXT_COLOR};

use field::{pixel_rect_to_area, render_field, rgb};

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(60, 150, 200)))
        .title(" Alien Invasion ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(200, 120, 255))
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Field
            Constraint::Length(1), // Help
        ])
        .split(inner);
    let field_area = chunks[0];
    app.field_area = field_area;

    let game = &app.game;
    if field_area.width > 0 && field_area.height > 0 {
        let lines = render_field(game, field_area.width as usize, field_area.height as usize);
        frame.render_widget(Paragraph::new(lines), field_area);
        render_scoreboard(frame, game, field_area);
        if !game.is_active() {
            render_play_button(frame, game, field_area);
        }
    }

    render_help(frame, game, chunks[1]);
}

fn render_scoreboard(frame: &mut Frame, game: &Game, area: Rect) {
    let board = Scoreboard::prepare(game.stats());
    let bg = rgb(game.settings().bg_color);
    let text = Style::default()
        .fg(rgb(TEXT_COLOR))
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let ships = "\u{25b2} ".repeat(board.ships_left as usize);
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {}", ships), text.fg(Color::Rgb(40, 60, 160))))
            .alignment(Alignment::Left),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(board.high_score, text)).alignment(Alignment::Center),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(format!("{} ", board.score), text))
            .alignment(Alignment::Right),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(format!("{} ", board.level), text))
            .alignment(Alignment::Right),
        rows[1],
    );
}

fn render_play_button(frame: &mut Frame, game: &Game, area: Rect) {
    let button = game.play_button();
    let cells = pixel_rect_to_area(game, button.rect, area);
    let style = Style::default()
        .fg(rgb(button.text_color))
        .bg(rgb(button.button_color))
        .add_modifier(Modifier::BOLD);

    frame.render_widget(Clear, cells);
    let pad = cells.height.saturating_sub(1) / 2;
    let mut lines: Vec<Line> = (0..pad).map(|_| Line::from("")).collect();
    lines.push(Line::from(button.msg.as_str()));
    frame.render_widget(
        Paragraph::new(lines).style(style).alignment(Alignment::Center),
        cells,
    );
}

fn render_help(frame: &mut Frame, game: &Game, area: Rect) {
    let sep = Span::styled("| ", Style::default().fg(Color::Rgb(60, 60, 60)));
    let line = if game.is_active() {
        Line::from(vec![
            Span::styled(" \u{2190}\u{2192} Move ", Style::default().fg(Color::DarkGray)),
            sep.clone(),
            Span::styled(
                "Space Shoot ",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            sep,
            Span::styled("Q Quit", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            Span::styled(
                " Click Play or press P ",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            sep,
            Span::styled("Q Quit", Style::default().fg(Color::DarkGray)),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}
