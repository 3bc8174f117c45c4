//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use minimax_tictactoe::{Player, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const X_COLOR: Color = Color::Blue;
const O_COLOR: Color = Color::Magenta;
const WIN_BACKGROUND: Color = Color::Rgb(42, 35, 67);

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Player indicators
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Key help
        ])
        .split(frame.area());

    let title = Paragraph::new(app.header())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .title(format!(" Tic-tac-toe: {} ", app.session().mode().label())),
        );
    frame.render_widget(title, chunks[0]);

    draw_players(frame, chunks[1], app);
    draw_board(frame, chunks[2], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = if app.can_restart() {
        "r: restart   q: quit"
    } else {
        "arrows: move   enter/1-9: place   q: quit"
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn mark_color(player: Player) -> Color {
    match player {
        Player::X => X_COLOR,
        Player::O => O_COLOR,
    }
}

fn draw_players(frame: &mut Frame, area: Rect, app: &App) {
    let indicator = |player: Player| {
        let name = if app.session().is_computer(player) {
            format!(" {} (computer) ", player)
        } else {
            format!(" {} ", player)
        };
        let style = Style::default().fg(mark_color(player));
        if app.active_player() == Some(player) {
            Span::styled(name, style.add_modifier(Modifier::REVERSED | Modifier::BOLD))
        } else {
            Span::styled(name, style)
        }
    };

    let line = Line::from(vec![indicator(Player::X), Span::raw("   "), indicator(Player::O)]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, row);
        if row < 2 {
            let sep = Paragraph::new("─".repeat(board_area.width as usize))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(2),
            Constraint::Length(12),
            Constraint::Length(2),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], app, pos);
        }
        if col < 2 {
            let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let index = pos.to_index();
    let square = app.session().state().board().get(index);

    let (symbol, mut style) = match square {
        Some(Square::Occupied(player)) => (
            player.to_string(),
            Style::default()
                .fg(mark_color(player))
                .add_modifier(Modifier::BOLD),
        ),
        _ => ((index + 1).to_string(), Style::default().fg(Color::DarkGray)),
    };

    if app.winning_line().is_some_and(|line| line.contains(&index)) {
        style = style.bg(WIN_BACKGROUND);
    }
    if pos == app.cursor() && !app.can_restart() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let text = vec![Line::from(""), Line::from(Span::styled(format!(" {} ", symbol), style))];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestrator::Orchestrator;
    use crossterm::event::KeyCode;
    use minimax_tictactoe::GameMode;
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::Duration;

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_prompt_and_indicators() {
        let app = App::new(Orchestrator::new(GameMode::VsComputer, Duration::ZERO));
        let screen = rendered(&app);
        assert!(screen.contains("Choose"));
        assert!(screen.contains("O (computer)"));
        assert!(screen.contains("Tic-tac-toe: vs computer"));
        assert!(screen.contains("enter/1-9: place"));
    }

    #[test]
    fn test_renders_restart_hint_after_game_over() {
        let mut app = App::new(Orchestrator::new(GameMode::TwoPlayer, Duration::ZERO));
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        let screen = rendered(&app);
        assert!(screen.contains("X Wins!"));
        assert!(screen.contains("Tic-tac-toe: two players"));
        assert!(screen.contains("r: restart"));
    }
}
