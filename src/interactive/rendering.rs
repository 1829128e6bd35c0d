//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard, messages and stats bar.

use super::app::{App, MessageStyle};
use crate::core::{
    KEYBOARD_ROWS, MAX_GUESSES, RoundStatus, Tag, WORD_LENGTH, WordOracle, WordSource,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: WordSource, O: WordOracle>(f: &mut Frame, app: &App<S, O>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                          // Header
            Constraint::Length(MAX_GUESSES as u16 * 2 + 2), // Board
            Constraint::Length(5),                          // Keyboard
            Constraint::Min(4),                             // Messages
            Constraint::Length(1),                          // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn tile_style(tag: Option<Tag>) -> Style {
    match tag {
        Some(Tag::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Tag::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(Tag::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn tile(letter: Option<u8>, tag: Option<Tag>) -> Span<'static> {
    let text = letter.map_or_else(
        || " _ ".to_string(),
        |l| format!(" {} ", char::from(l.to_ascii_uppercase())),
    );
    Span::styled(text, tile_style(tag))
}

fn render_header<S: WordSource, O: WordOracle>(f: &mut Frame, app: &App<S, O>, area: Rect) {
    let title = if app.debug {
        format!(
            "🟩 WORDLE 🟨   (answer: {})",
            app.game.secret().text().to_uppercase()
        )
    } else {
        "🟩 WORDLE 🟨".to_string()
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board<S: WordSource, O: WordOracle>(f: &mut Frame, app: &App<S, O>, area: Rect) {
    let round = app.game.round();
    let rows = round.rows();
    let mut lines = Vec::with_capacity(MAX_GUESSES * 2);

    for r in 0..MAX_GUESSES {
        let spans: Vec<Span> = if let Some(row) = rows.get(r) {
            row.word
                .chars()
                .iter()
                .zip(row.verdict.tags())
                .flat_map(|(&letter, &tag)| [tile(Some(letter), Some(tag)), Span::raw(" ")])
                .collect()
        } else if r == rows.len() && !app.round_over() {
            let typed = app.input_buffer.as_bytes();
            (0..WORD_LENGTH)
                .flat_map(|i| [tile(typed.get(i).copied(), None), Span::raw(" ")])
                .collect()
        } else {
            (0..WORD_LENGTH)
                .flat_map(|_| [tile(None, None), Span::raw(" ")])
                .collect()
        };
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Guesses {}/{MAX_GUESSES} ", round.guesses_used()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard<S: WordSource, O: WordOracle>(f: &mut Frame, app: &App<S, O>, area: Rect) {
    let keys = app.game.round().keys();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|letter| [tile(Some(letter), keys.get(letter)), Span::raw(" ")])
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages<S: WordSource, O: WordOracle>(f: &mut Frame, app: &App<S, O>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<S: WordSource, O: WordOracle>(f: &mut Frame, app: &App<S, O>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(area);

    let stats = app.game.stats();
    let stats_text = format!(
        "Wins: {} | Losses: {} | Win Rate: {:.0}% | {}",
        stats.wins,
        stats.losses,
        stats.win_rate(),
        stats
            .guess_distribution
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let help_text = match app.game.round().status() {
        RoundStatus::AwaitingInput => {
            "Type: Guess | Enter: Submit | Backspace | Tab: Answer | Esc: Quit"
        }
        RoundStatus::Won | RoundStatus::Lost => "n/Enter: New Game | Tab: Answer | q/Esc: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Game, Stats};
    use crate::wordlists::{Dictionary, FixedSource};
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(app: &App<FixedSource, Dictionary>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app(debug: bool) -> App<FixedSource, Dictionary> {
        let game = Game::new(
            FixedSource::new("crane"),
            Dictionary::embedded(),
            Stats::default(),
        );
        App::new(game, debug, None)
    }

    #[test]
    fn renders_board_and_keyboard() {
        let mut app = app(false);
        app.game.submit("trace").unwrap();
        let screen = rendered(&app);

        assert!(screen.contains("Guesses 1/6"));
        assert!(screen.contains("Keyboard"));
        assert!(!screen.contains("answer:"));
    }

    #[test]
    fn debug_header_reveals_answer() {
        let screen = rendered(&app(true));
        assert!(screen.contains("answer: CRANE"));
    }

    #[test]
    fn tile_styles_follow_tags() {
        assert_eq!(tile_style(Some(Tag::Correct)).bg, Some(Color::Green));
        assert_eq!(tile_style(Some(Tag::Present)).bg, Some(Color::Yellow));
        assert_eq!(tile_style(Some(Tag::Absent)).bg, Some(Color::DarkGray));
        assert_eq!(tile_style(None).bg, None);
    }
}
