//! Ratatui frontend for the game list.
//!
//! Pure UI module: terminal lifecycle, rendering, and key → intent mapping.
//! The list contents live in [`ListContext`]; the only state kept here is
//! what the Dioxus component keeps too (the sort order) plus cursor and
//! scroll positions.

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
};
use std::io::{self, Stdout};

use gamelist_core::board::{BoardPosition, MAX_BOARD_SIZE, Stone, is_drawable};
use gamelist_core::i18n::Catalog;
use gamelist_core::layout::HeaderCell;
use gamelist_core::line::{clock_text, summary_cells};
use gamelist_core::live::LiveGames;
use gamelist_core::plan::{BoardTile, GameListOptions, GameListPlan, SummaryRow, plan_game_list};
use gamelist_core::prefs::PreferenceStore;
use gamelist_core::record::{GameRecord, PlayerId};
use gamelist_core::sort::{SortDirection, SortKey, SortOrder};

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Everything the list reads from outside.
pub struct ListContext {
    pub games: Vec<GameRecord>,
    pub options: GameListOptions,
    pub preferences: PreferenceStore,
    pub catalog: Catalog,
    pub viewer: Option<PlayerId>,
    pub live: LiveGames,
}

impl ListContext {
    /// Swap in a new game list, refreshing the live directory.
    pub fn replace_games(&mut self, games: Vec<GameRecord>) {
        self.live = games.iter().collect();
        self.games = games;
    }
}

// ---------------------------------------------------------------------------
// UserIntent: result of processing user input
// ---------------------------------------------------------------------------

/// What the event loop should do after a key press.
#[derive(Debug, PartialEq, Eq)]
pub enum UserIntent {
    /// Handled inside the TUI (or ignored).
    None,
    /// The user wants to quit.
    Quit,
    /// Re-read the games file.
    Reload,
}

/// A key press, decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    None,
    Quit,
    Reload,
    ToggleHelp,
    Sort(SortKey),
    Up,
    Down,
}

/// Column hotkeys follow the header's left-to-right order.
fn sort_key_for(c: char) -> Option<SortKey> {
    match c {
        '1' | 'm' => Some(SortKey::MoveNumber),
        '2' | 'g' => Some(SortKey::Name),
        '3' | 'o' => Some(SortKey::Opponent),
        '4' | 'c' => Some(SortKey::Clock),
        '5' | 'C' => Some(SortKey::OpponentClock),
        _ => None,
    }
}

/// Sort hotkeys only act while a sortable header is on screen.
fn key_action(code: KeyCode, sortable: bool) -> KeyAction {
    match code {
        KeyCode::Esc | KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char('r') => KeyAction::Reload,
        KeyCode::F(1) | KeyCode::Char('?') => KeyAction::ToggleHelp,
        KeyCode::Up | KeyCode::Char('k') => KeyAction::Up,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::Down,
        KeyCode::Char(c) if sortable => sort_key_for(c).map_or(KeyAction::None, KeyAction::Sort),
        _ => KeyAction::None,
    }
}

// ---------------------------------------------------------------------------
// TUI-only state
// ---------------------------------------------------------------------------

#[derive(Default)]
struct TuiState {
    sort_order: SortOrder,
    /// Highlighted row in the table layout.
    selected: usize,
    /// First visible tile row in the gallery layout.
    scroll: usize,
    /// Whether the last frame showed a clickable header.
    sortable: bool,
    show_help: bool,
}

impl TuiState {
    fn apply(&mut self, action: KeyAction) -> UserIntent {
        match action {
            KeyAction::Quit => {
                if self.show_help {
                    self.show_help = false;
                    return UserIntent::None;
                }
                return UserIntent::Quit;
            }
            KeyAction::Reload => return UserIntent::Reload,
            KeyAction::ToggleHelp => self.show_help = !self.show_help,
            KeyAction::Sort(key) => self.sort_order.toggle(key),
            KeyAction::Up => {
                self.selected = self.selected.saturating_sub(1);
                self.scroll = self.scroll.saturating_sub(1);
            }
            KeyAction::Down => {
                self.selected = self.selected.saturating_add(1);
                self.scroll = self.scroll.saturating_add(1);
            }
            KeyAction::None => {}
        }
        UserIntent::None
    }
}

// ---------------------------------------------------------------------------
// Terminal lifecycle
// ---------------------------------------------------------------------------

pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    state: TuiState,
}

impl Tui {
    pub fn setup() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            state: TuiState::default(),
        })
    }

    pub fn teardown(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    pub fn render(&mut self, ctx: &ListContext, now: i64) -> io::Result<()> {
        let state = &mut self.state;
        self.terminal.draw(|frame| ui(frame, ctx, state, now))?;
        Ok(())
    }

    pub fn poll_and_handle_input(&mut self) -> io::Result<UserIntent> {
        if !event::poll(std::time::Duration::from_millis(0))? {
            return Ok(UserIntent::None);
        }
        let Event::Key(key) = event::read()? else {
            return Ok(UserIntent::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(UserIntent::None);
        }
        let action = key_action(key.code, self.state.sortable);
        Ok(self.state.apply(action))
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn ui(frame: &mut Frame, ctx: &ListContext, state: &mut TuiState, now: i64) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // List
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let plan = plan_game_list(
        &ctx.games,
        &ctx.options,
        state.sort_order,
        &ctx.preferences,
        &ctx.viewer,
        &ctx.catalog,
    );
    state.sortable = matches!(
        &plan,
        GameListPlan::Summary { header, .. } if header.iter().any(HeaderCell::is_sortable)
    );

    match plan {
        GameListPlan::Empty { message } => {
            render_empty(frame, message.as_deref(), main_layout[0])
        }
        GameListPlan::Summary { header, rows } => {
            render_table(frame, ctx, state, now, &header, &rows, main_layout[0])
        }
        GameListPlan::Gallery { tiles } => {
            render_gallery(frame, ctx, state, now, &tiles, main_layout[0])
        }
    }

    render_status_bar(frame, ctx, state, main_layout[1]);

    if state.show_help {
        render_help_popup(frame);
    }
}

fn list_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .title(title)
        .title_style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
}

fn render_empty(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let text = Paragraph::new(message.unwrap_or_default())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray))
        .block(list_block(" Games "));
    frame.render_widget(text, area);
}

fn header_label(cell: &HeaderCell) -> String {
    match cell.active {
        Some(SortDirection::Ascending) => format!("{} ▴", cell.label),
        Some(SortDirection::Descending) => format!("{} ▾", cell.label),
        None => cell.label.clone(),
    }
}

/// A row's game as the renderer sees it: live details, seats from the plan.
fn row_game(live: &LiveGames, row: &SummaryRow<'_>) -> GameRecord {
    let mut game = live
        .get(row.id)
        .cloned()
        .unwrap_or_else(|| GameRecord::new(row.id, ""));
    game.black = row.black.cloned();
    game.white = row.white.cloned();
    game
}

fn render_table(
    frame: &mut Frame,
    ctx: &ListContext,
    state: &mut TuiState,
    now: i64,
    header: &[HeaderCell],
    rows: &[SummaryRow<'_>],
    area: Rect,
) {
    state.selected = state.selected.min(rows.len().saturating_sub(1));
    let opponent_style = ctx.options.opponent_style;

    let header_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let header_row = Row::new(header.iter().map(|cell| {
        let style = if cell.active.is_some() {
            header_style.fg(Color::Cyan)
        } else {
            header_style
        };
        Cell::from(header_label(cell)).style(style)
    }));

    let body: Vec<Row> = rows
        .iter()
        .map(|row| {
            let game = row_game(&ctx.live, row);
            let cells = summary_cells(&game, ctx.viewer, row.opponent_style, now);
            Row::new(cells.into_iter().enumerate().map(|(i, text)| {
                let is_clock = if opponent_style { i >= 3 } else { i == 3 || i == 5 };
                let style = if is_clock {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::White)
                };
                Cell::from(text).style(style)
            }))
        })
        .collect();

    let widths: Vec<Constraint> = if opponent_style {
        vec![
            Constraint::Length(5),
            Constraint::Min(20),
            Constraint::Length(16),
            Constraint::Length(10),
            Constraint::Length(18),
        ]
    } else {
        vec![
            Constraint::Length(5),
            Constraint::Min(20),
            Constraint::Length(16),
            Constraint::Length(10),
            Constraint::Length(16),
            Constraint::Length(10),
        ]
    };

    let table = Table::new(body, widths)
        .header(header_row)
        .block(list_block(" Games "))
        .row_highlight_style(Style::default().bg(Color::DarkGray));
    let mut table_state = TableState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn point_span(stone: Option<Stone>, last: bool) -> Span<'static> {
    let (glyph, color) = match stone {
        Some(Stone::Black) => ("● ", Color::Black),
        Some(Stone::White) => ("○ ", Color::White),
        None => ("· ", Color::DarkGray),
    };
    let style = Style::default().fg(color).bg(Color::Rgb(220, 179, 92));
    let style = if last {
        style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        style
    };
    Span::styled(glyph, style)
}

fn tile_size(tile: &BoardTile<'_>) -> (u16, u16) {
    if !is_drawable(tile.width, tile.height) {
        return (16, 4);
    }
    // Both sides are at most MAX_BOARD_SIZE here.
    let w = tile.width.min(MAX_BOARD_SIZE) as u16 * 2 + 2;
    let h = tile.height.min(MAX_BOARD_SIZE) as u16 + 3;
    (w.max(16), h)
}

/// Pack tiles left to right into rows that fit `width`.
fn tile_rows<'t, 'a>(tiles: &'t [BoardTile<'a>], width: u16) -> Vec<Vec<&'t BoardTile<'a>>> {
    let mut rows: Vec<Vec<&BoardTile>> = Vec::new();
    let mut used = 0u16;
    for tile in tiles {
        let (w, _) = tile_size(tile);
        match rows.last_mut() {
            Some(row) if used.saturating_add(w) <= width => {
                row.push(tile);
                used += w;
            }
            _ => {
                rows.push(vec![tile]);
                used = w;
            }
        }
    }
    rows
}

fn render_tile(frame: &mut Frame, ctx: &ListContext, now: i64, tile: &BoardTile<'_>, area: Rect) {
    let game = ctx.live.get(tile.id);
    let position =
        BoardPosition::thumbnail(tile.width, tile.height, game.and_then(|g| g.moves.as_deref()));

    let mut lines: Vec<Line> = match &position {
        Some(position) => position
            .rows()
            .enumerate()
            .map(|(y, row)| {
                Line::from(
                    row.iter()
                        .enumerate()
                        .map(|(x, stone)| {
                            point_span(*stone, position.last_move == Some((x as u32, y as u32)))
                        })
                        .collect::<Vec<_>>(),
                )
            })
            .collect(),
        None => vec![Line::from(Span::styled(
            format!("{}x{} board", tile.width, tile.height),
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let clock = game
        .and_then(|g| g.clock)
        .map(|c| clock_text(c.expiration, now))
        .unwrap_or_default();
    lines.push(Line::from(Span::styled(clock, Style::default().fg(Color::Green))));

    let names = format!(
        " {} vs {} ",
        tile.black.map(|p| p.username.as_str()).unwrap_or("?"),
        tile.white.map(|p| p.username.as_str()).unwrap_or("?"),
    );
    let title = format!(" {} ", game.map(|g| g.name.as_str()).unwrap_or_default());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title(title)
        .title_bottom(names);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_gallery(
    frame: &mut Frame,
    ctx: &ListContext,
    state: &mut TuiState,
    now: i64,
    tiles: &[BoardTile<'_>],
    area: Rect,
) {
    let rows = tile_rows(tiles, area.width);
    state.scroll = state.scroll.min(rows.len().saturating_sub(1));

    let mut y = area.y;
    for row in rows.iter().skip(state.scroll) {
        let row_height = row.iter().map(|t| tile_size(t).1).max().unwrap_or(0);
        if y.saturating_add(row_height) > area.bottom() {
            break;
        }
        let mut x = area.x;
        for tile in row {
            let (w, h) = tile_size(tile);
            render_tile(frame, ctx, now, tile, Rect::new(x, y, w.min(area.right() - x), h));
            x += w;
        }
        y += row_height;
    }
}

fn render_status_bar(frame: &mut Frame, ctx: &ListContext, state: &TuiState, area: Rect) {
    let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let mut spans = vec![
        Span::styled(format!("{} games", ctx.games.len()), Style::default().fg(Color::Green)),
        Span::raw(" | "),
    ];
    if state.sortable {
        spans.push(Span::styled("1-5", key_style));
        spans.push(Span::raw(format!(": Sort ({}) | ", state.sort_order)));
    }
    spans.extend([
        Span::styled("r", key_style),
        Span::raw(": Reload | "),
        Span::styled("F1", key_style),
        Span::raw(": Help | "),
        Span::styled("ESC", key_style),
        Span::raw(": Quit"),
    ]);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let heading = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let help_text = Text::from(vec![
        Line::from(Span::styled(
            "CONTROLS",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("  SORTING (table view)", heading)),
        Line::from("  1 / m         Move number"),
        Line::from("  2 / g         Game name"),
        Line::from("  3 / o         Opponent"),
        Line::from("  4 / c         Clock"),
        Line::from("  5 / C         Opponent's clock"),
        Line::from("  Pressing the same column again reverses it."),
        Line::from(""),
        Line::from(Span::styled("  NAVIGATION", heading)),
        Line::from("  Up/Down j/k   Move selection or scroll boards"),
        Line::from(""),
        Line::from(Span::styled("  SYSTEM", heading)),
        Line::from("  r             Reload games"),
        Line::from("  F1 / ?        Toggle this help"),
        Line::from("  ESC / q       Quit"),
    ]);

    let help = Paragraph::new(help_text).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Help ")
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(help, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
