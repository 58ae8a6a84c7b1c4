use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::sync::{Arc, Mutex};
use std::{error::Error, io};

use blackjack::{optimal_move, OptimalMove, Round, RoundPhase};
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

mod catalog;
mod leaderboard;
mod rewards;
mod tui_logger;
mod wallet;

use catalog::SortBy;
use tui_logger::TuiLogger;
use wallet::{Profile, ProfileStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Home,
    Blackjack,
    PrizeShop,
    Leaderboard,
    Profile,
}

impl Screen {
    const ALL: [Screen; 5] = [
        Screen::Home,
        Screen::Blackjack,
        Screen::PrizeShop,
        Screen::Leaderboard,
        Screen::Profile,
    ];

    fn title(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Blackjack => "Blackjack",
            Screen::PrizeShop => "Prize Shop",
            Screen::Leaderboard => "Leaderboard",
            Screen::Profile => "Profile",
        }
    }

    fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HomeField {
    Assignment,
    Grade,
}

enum PlayerAction {
    Hit,
    Stand,
    Double,
}

struct App {
    screen: Screen,
    profile: Profile,
    store: ProfileStore,
    rng: ChaCha8Rng,
    round: Option<Round>,
    bet_input: String,
    status: String,
    logs: Vec<String>,
    log_buffer: Arc<Mutex<Vec<String>>>, // Shared buffer for capturing log:: messages
    log_visible: bool,
    // Home screen grade form
    assignment_input: String,
    grade_input: String,
    home_field: HomeField,
    // Prize shop browsing state
    shop_index: usize,
    shop_category: usize, // 0 = all, otherwise categories()[i - 1]
    shop_sort: SortBy,
    shop_query: String,
    shop_searching: bool,
    // Profile name editing
    editing_name: bool,
    name_input: String,
}

impl App {
    fn new(store: ProfileStore, profile: Profile, log_buffer: Arc<Mutex<Vec<String>>>) -> App {
        App {
            screen: Screen::Home,
            profile,
            store,
            rng: ChaCha8Rng::from_entropy(),
            round: None,
            bet_input: String::new(),
            status: "Log grades to earn chips, then try your luck at the table.".to_string(),
            logs: vec!["Welcome to Gradejack!".to_string()],
            log_buffer,
            log_visible: false,
            assignment_input: String::new(),
            grade_input: String::new(),
            home_field: HomeField::Assignment,
            shop_index: 0,
            shop_category: 0,
            shop_sort: SortBy::PriceAsc,
            shop_query: String::new(),
            shop_searching: false,
            editing_name: false,
            name_input: String::new(),
        }
    }

    fn sync_logs(&mut self) {
        let messages: Vec<String> = if let Ok(mut buffer) = self.log_buffer.lock() {
            buffer.drain(..).collect()
        } else {
            Vec::new()
        };
        self.logs.extend(messages);
        let overflow = self.logs.len().saturating_sub(100);
        if overflow > 0 {
            self.logs.drain(..overflow);
        }
    }

    fn save_profile(&mut self) {
        if let Err(err) = self.store.save(&self.profile) {
            self.status = format!("Could not save profile: {err}");
            log::warn!("profile save failed: {err}");
        }
    }

    fn shop_category_name(&self) -> Option<&'static str> {
        if self.shop_category == 0 {
            None
        } else {
            catalog::categories().get(self.shop_category - 1).copied()
        }
    }

    fn shop_list(&self) -> Vec<&'static catalog::Prize> {
        catalog::search(self.shop_category_name(), &self.shop_query, self.shop_sort)
    }

    // --- Blackjack actions ---

    fn deal(&mut self) {
        let bet: u64 = match self.bet_input.parse() {
            Ok(bet) => bet,
            Err(_) => {
                self.status = "Type a bet amount first.".to_string();
                return;
            }
        };
        match Round::start(bet, &mut self.profile, &mut self.rng) {
            Ok(round) => {
                log::info!("Round started, bet {bet} chips");
                self.round = Some(round);
                self.status = "Hit, Stand, or Double?".to_string();
                self.finish_if_resolved();
            }
            Err(err) => self.status = err.to_string(),
        }
    }

    fn player_action(&mut self, action: PlayerAction) {
        let result = match self.round.as_mut() {
            Some(round) => match action {
                PlayerAction::Hit => round.hit(&mut self.profile),
                PlayerAction::Stand => round.stand(&mut self.profile),
                PlayerAction::Double => round.double_down(&mut self.profile),
            },
            None => return,
        };
        match result {
            Ok(()) => self.finish_if_resolved(),
            Err(err) => self.status = err.to_string(),
        }
    }

    /// Book the result the moment a round resolves: bump the play/win
    /// counters, surface the outcome, and persist the wallet.
    fn finish_if_resolved(&mut self) {
        let Some(summary) = self.round.as_ref().and_then(|r| r.summary()) else {
            return;
        };
        self.profile.record_round(summary.tokens_won);
        self.status = if summary.tokens_won > 0 {
            format!(
                "{} You won {} tokens. [Enter] plays again",
                summary.outcome.message(),
                summary.tokens_won
            )
        } else {
            format!("{} [Enter] plays again", summary.outcome.message())
        };
        log::info!(
            "Round over: {:?}, player {} vs dealer {}, {} tokens won",
            summary.outcome,
            summary.player_score,
            summary.dealer_score,
            summary.tokens_won
        );
        self.save_profile();
    }

    // --- Home actions ---

    fn submit_grade(&mut self) {
        let grade: f64 = match self.grade_input.parse() {
            Ok(grade) => grade,
            Err(_) => {
                self.status = "Enter a numeric grade between 0 and 100.".to_string();
                return;
            }
        };
        match rewards::add_grade(&mut self.profile, &self.assignment_input, grade) {
            Ok(0) => {
                self.status = "Grade logged. 90 or above earns chips!".to_string();
            }
            Ok(chips) => {
                self.status = format!(
                    "Congratulations! You earned {chips} chip{}!",
                    if chips == 1 { "" } else { "s" }
                );
                log::info!("Grade {grade} on '{}' earned {chips} chips", self.assignment_input.trim());
            }
            Err(err) => {
                self.status = err.to_string();
                return;
            }
        }
        self.assignment_input.clear();
        self.grade_input.clear();
        self.home_field = HomeField::Assignment;
        self.save_profile();
    }

    fn redeem_selected(&mut self) {
        let Some(prize) = self.shop_list().get(self.shop_index).copied() else {
            return;
        };
        match catalog::redeem(&mut self.profile, prize.id) {
            Ok(prize) => {
                self.status = format!("Redeemed {} for {} tokens!", prize.name, prize.cost);
                log::info!("Redeemed prize '{}' for {} tokens", prize.name, prize.cost);
                self.save_profile();
            }
            Err(err) => self.status = err.to_string(),
        }
    }

    // --- Key handling ---

    /// Returns true when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        // Text-entry contexts swallow keys before global shortcuts.
        if self.screen == Screen::PrizeShop && self.shop_searching {
            match code {
                KeyCode::Char(c) => self.shop_query.push(c),
                KeyCode::Backspace => {
                    self.shop_query.pop();
                }
                KeyCode::Enter | KeyCode::Esc => self.shop_searching = false,
                _ => {}
            }
            self.shop_index = 0;
            return false;
        }
        if self.screen == Screen::Profile && self.editing_name {
            match code {
                KeyCode::Char(c) => self.name_input.push(c),
                KeyCode::Backspace => {
                    self.name_input.pop();
                }
                KeyCode::Enter => {
                    self.profile.name = self.name_input.trim().to_string();
                    self.editing_name = false;
                    self.save_profile();
                }
                KeyCode::Esc => self.editing_name = false,
                _ => {}
            }
            return false;
        }
        if self.screen == Screen::Home {
            match code {
                KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || self.home_field == HomeField::Assignment => {
                    match self.home_field {
                        HomeField::Assignment => self.assignment_input.push(c),
                        HomeField::Grade => self.grade_input.push(c),
                    }
                    return false;
                }
                KeyCode::Backspace => {
                    match self.home_field {
                        HomeField::Assignment => self.assignment_input.pop(),
                        HomeField::Grade => self.grade_input.pop(),
                    };
                    return false;
                }
                KeyCode::Up | KeyCode::Down => {
                    self.home_field = match self.home_field {
                        HomeField::Assignment => HomeField::Grade,
                        HomeField::Grade => HomeField::Assignment,
                    };
                    return false;
                }
                KeyCode::Enter => {
                    match self.home_field {
                        HomeField::Assignment => self.home_field = HomeField::Grade,
                        HomeField::Grade => self.submit_grade(),
                    }
                    return false;
                }
                _ => {}
            }
        }

        match (self.screen, code) {
            (_, KeyCode::Tab) => self.screen = self.screen.next(),
            (_, KeyCode::Char('q')) => return true,
            (_, KeyCode::Char('L')) => self.log_visible = !self.log_visible,

            (Screen::Blackjack, code) => self.handle_blackjack_key(code),

            (Screen::PrizeShop, KeyCode::Up) => {
                self.shop_index = self.shop_index.saturating_sub(1);
            }
            (Screen::PrizeShop, KeyCode::Down) => {
                let len = self.shop_list().len();
                if self.shop_index + 1 < len {
                    self.shop_index += 1;
                }
            }
            (Screen::PrizeShop, KeyCode::Left) => {
                let count = catalog::categories().len() + 1;
                self.shop_category = (self.shop_category + count - 1) % count;
                self.shop_index = 0;
            }
            (Screen::PrizeShop, KeyCode::Right) => {
                let count = catalog::categories().len() + 1;
                self.shop_category = (self.shop_category + 1) % count;
                self.shop_index = 0;
            }
            (Screen::PrizeShop, KeyCode::Char('s')) => {
                self.shop_sort = self.shop_sort.next();
            }
            (Screen::PrizeShop, KeyCode::Char('/')) => {
                self.shop_query.clear();
                self.shop_searching = true;
            }
            (Screen::PrizeShop, KeyCode::Esc) => {
                self.shop_query.clear();
                self.shop_index = 0;
            }
            (Screen::PrizeShop, KeyCode::Enter) => self.redeem_selected(),

            (Screen::Profile, KeyCode::Char('e')) => {
                self.name_input = self.profile.name.clone();
                self.editing_name = true;
            }
            _ => {}
        }
        false
    }

    fn handle_blackjack_key(&mut self, code: KeyCode) {
        let in_player_turn = self
            .round
            .as_ref()
            .map(|r| r.phase() == RoundPhase::PlayerTurn)
            .unwrap_or(false);
        let resolved = self
            .round
            .as_ref()
            .map(|r| r.phase() == RoundPhase::Resolved)
            .unwrap_or(false);

        if in_player_turn {
            match code {
                KeyCode::Char('h') | KeyCode::Up => self.player_action(PlayerAction::Hit),
                KeyCode::Char('s') | KeyCode::Down => self.player_action(PlayerAction::Stand),
                KeyCode::Char('d') | KeyCode::Right => self.player_action(PlayerAction::Double),
                _ => {}
            }
        } else if resolved {
            if matches!(code, KeyCode::Enter | KeyCode::Char('n')) {
                self.round = None;
                self.status = format!(
                    "Place your bet to start playing! You have {} chips.",
                    self.profile.chips
                );
            }
        } else {
            // Betting: no round in flight.
            match code {
                KeyCode::Char(c) if c.is_ascii_digit() => self.bet_input.push(c),
                KeyCode::Backspace => {
                    self.bet_input.pop();
                }
                KeyCode::Char('m') => self.bet_input = self.profile.chips.to_string(),
                KeyCode::Enter => self.deal(),
                _ => {}
            }
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Route log:: output into the in-app log pane.
    let log_buffer = TuiLogger::init();

    let store = ProfileStore::default_location()?;
    let profile = store.load()?;

    // setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(store, profile, log_buffer);
    let res = run_app(&mut terminal, app);

    // restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}")
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<(), Box<dyn Error>>
where
    B::Error: 'static,
{
    loop {
        app.sync_logs();
        terminal.draw(|f| ui(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if app.handle_key(key.code) {
                    break;
                }
            }
        }
    }
    app.save_profile();
    Ok(())
}

fn ui(f: &mut Frame, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3), // Title bar with tabs
                Constraint::Min(10),   // Screen body
                Constraint::Length(3), // Status bar
            ]
            .as_ref(),
        )
        .split(f.area());

    // Title bar: app name, screen tabs, balances.
    let mut title_spans = vec![Span::styled(
        "Gradejack ",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];
    for screen in Screen::ALL {
        let style = if screen == app.screen {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        title_spans.push(Span::styled(format!(" {} ", screen.title()), style));
    }
    title_spans.push(Span::styled(
        "([Tab] switches, [q] quits)",
        Style::default().fg(Color::DarkGray),
    ));
    title_spans.push(Span::styled(
        format!(
            "  Chips: {}  Tokens: {}",
            app.profile.chips, app.profile.tokens
        ),
        Style::default().fg(Color::Green),
    ));
    let title = Paragraph::new(Line::from(title_spans))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, main_chunks[0]);

    // Body, with an optional log pane on the right.
    let (body_area, log_area) = if app.log_visible {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)].as_ref())
            .split(main_chunks[1]);
        (split[0], Some(split[1]))
    } else {
        (main_chunks[1], None)
    };

    match app.screen {
        Screen::Home => render_home(f, app, body_area),
        Screen::Blackjack => render_blackjack(f, app, body_area),
        Screen::PrizeShop => render_shop(f, app, body_area),
        Screen::Leaderboard => render_leaderboard(f, app, body_area),
        Screen::Profile => render_profile(f, app, body_area),
    }

    if let Some(area) = log_area {
        let visible = area.height.saturating_sub(2) as usize;
        let start = app.logs.len().saturating_sub(visible);
        let lines: Vec<Line> = app.logs[start..]
            .iter()
            .map(|msg| Line::from(Span::styled(msg.clone(), Style::default().fg(Color::DarkGray))))
            .collect();
        let logs = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Log"))
            .wrap(Wrap { trim: true });
        f.render_widget(logs, area);
    }

    let status = Paragraph::new(app.status.clone())
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .wrap(Wrap { trim: true });
    f.render_widget(status, main_chunks[2]);
}

fn card_span(card: blackjack::Card) -> Span<'static> {
    let color = if card.suit.is_red() {
        Color::Red
    } else {
        Color::White
    };
    Span::styled(format!("{} ", card.to_display()), Style::default().fg(color))
}

fn render_blackjack(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage(40), // Dealer
                Constraint::Percentage(40), // Player
                Constraint::Length(3),      // Controls
            ]
            .as_ref(),
        )
        .split(area);

    // Dealer hand, hole card hidden until dealer play begins.
    let (dealer_spans, dealer_title) = if let Some(round) = &app.round {
        let spans: Vec<Span> = round
            .dealer_hand()
            .cards
            .iter()
            .enumerate()
            .map(|(idx, &card)| {
                if idx == 1 && !round.hole_revealed() {
                    Span::styled("?? ", Style::default().fg(Color::DarkGray))
                } else {
                    card_span(card)
                }
            })
            .collect();
        (spans, format!("Dealer ({})", round.visible_dealer_score()))
    } else {
        (
            vec![Span::raw("Place a bet to deal")],
            "Dealer".to_string(),
        )
    };
    let dealer = Paragraph::new(Line::from(dealer_spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(dealer_title));
    f.render_widget(dealer, chunks[0]);

    // Player hand.
    let (player_spans, player_title) = if let Some(round) = &app.round {
        let spans: Vec<Span> = round
            .player_hand()
            .cards
            .iter()
            .map(|&card| card_span(card))
            .collect();
        (spans, format!("Your Hand ({})", round.player_score()))
    } else {
        (vec![Span::raw("")], "Your Hand".to_string())
    };
    let player = Paragraph::new(Line::from(player_spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(player_title));
    f.render_widget(player, chunks[1]);

    // Controls, with the basic-strategy suggestion highlighted.
    let controls = match &app.round {
        Some(round) if round.phase() == RoundPhase::PlayerTurn => {
            let can_double = round.can_double(app.profile.chips);
            let suggestion = round.dealer_upcard().map(|up| {
                optimal_move(&round.player_hand().cards, up, can_double)
            });
            let key_style = |m: OptimalMove| {
                if suggestion == Some(m) {
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Yellow)
                }
            };
            let mut spans = vec![
                Span::styled("[H]", key_style(OptimalMove::Hit)),
                Span::raw(" Hit  "),
                Span::styled("[S]", key_style(OptimalMove::Stand)),
                Span::raw(" Stand"),
            ];
            if can_double {
                spans.push(Span::raw("  "));
                spans.push(Span::styled("[D]", key_style(OptimalMove::Double)));
                spans.push(Span::raw(" Double"));
            }
            if round.can_split() {
                spans.push(Span::styled(
                    "  [ ] Split (unavailable)",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            Line::from(spans)
        }
        Some(_) => Line::from(vec![Span::styled(
            "[Enter] New round",
            Style::default().fg(Color::Yellow),
        )]),
        None => Line::from(vec![
            Span::raw("Bet: "),
            Span::styled(
                format!("{}_", app.bet_input),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                format!(
                    "   [0-9] type  [m] max ({})  [Enter] deal",
                    app.profile.chips
                ),
                Style::default().fg(Color::Yellow),
            ),
        ]),
    };
    let controls = Paragraph::new(controls)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(controls, chunks[2]);
}

fn render_home(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(area);

    let field_style = |field: HomeField| {
        if app.home_field == field {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    };
    let form_lines = vec![
        Line::from(Span::styled(
            "Log a grade to earn chips",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Assignment: "),
            Span::styled(
                format!("{}_", app.assignment_input),
                field_style(HomeField::Assignment),
            ),
        ]),
        Line::from(vec![
            Span::raw("Grade:      "),
            Span::styled(format!("{}_", app.grade_input), field_style(HomeField::Grade)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "[↑/↓] switch field  [Enter] submit",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "100 → 10 chips   98+ → 7   95+ → 5   90+ → 2",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let form = Paragraph::new(form_lines)
        .block(Block::default().borders(Borders::ALL).title("Grades"))
        .wrap(Wrap { trim: true });
    f.render_widget(form, columns[0]);

    let mut recent_lines = vec![
        Line::from(vec![
            Span::raw("Average grade: "),
            Span::styled(
                app.profile
                    .average_grade()
                    .map(|g| format!("{g:.1}"))
                    .unwrap_or_else(|| "-".to_string()),
                Style::default().fg(Color::Green),
            ),
            Span::raw("   Chips earned: "),
            Span::styled(
                app.profile.total_chips_earned().to_string(),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(""),
    ];
    for entry in app.profile.grades.iter().rev().take(8) {
        recent_lines.push(Line::from(vec![
            Span::styled(
                format!("{:<24}", entry.assignment),
                Style::default().fg(Color::White),
            ),
            Span::raw(format!("{:>5.1}  ", entry.grade)),
            Span::styled(
                format!("+{} chips", entry.chips_earned),
                Style::default().fg(Color::Green),
            ),
        ]));
    }
    let recent = Paragraph::new(recent_lines)
        .block(Block::default().borders(Borders::ALL).title("Recent Grades"))
        .wrap(Wrap { trim: true });
    f.render_widget(recent, columns[1]);
}

fn render_shop(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let category = app.shop_category_name().unwrap_or("All");
    let query = if app.shop_searching {
        format!("/{}_", app.shop_query)
    } else if app.shop_query.is_empty() {
        String::new()
    } else {
        format!("/{}", app.shop_query)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Category: "),
            Span::styled(category, Style::default().fg(Color::Cyan)),
            Span::raw("  Sort: "),
            Span::styled(app.shop_sort.label(), Style::default().fg(Color::Cyan)),
            Span::raw("  "),
            Span::styled(query, Style::default().fg(Color::Magenta)),
        ]),
        Line::from(Span::styled(
            "[←/→] category  [s] sort  [/] search  [↑/↓] select  [Enter] redeem",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
    ];

    for (i, prize) in app.shop_list().iter().enumerate() {
        let affordable = app.profile.tokens >= prize.cost;
        let base = if i == app.shop_index {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else if affordable {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(Span::styled(
            format!(
                "{:<24} {:>4} tokens  {:<14} stock {:>3}  {}",
                prize.name, prize.cost, prize.category, prize.stock, prize.description
            ),
            base,
        )));
    }

    let shop = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Prize Shop"))
        .wrap(Wrap { trim: false });
    f.render_widget(shop, area);
}

fn render_leaderboard(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Top token earners",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for standing in leaderboard::standings(&app.profile) {
        let medal = leaderboard::medal(standing.rank).unwrap_or("  ");
        let style = if standing.is_you {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(
            format!(
                "{medal} #{:<3} {:<20} {:>6} tokens",
                standing.rank, standing.name, standing.tokens
            ),
            style,
        )));
    }
    let board = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Leaderboard"))
        .wrap(Wrap { trim: true });
    f.render_widget(board, area);
}

fn render_profile(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let name_line = if app.editing_name {
        Line::from(vec![
            Span::raw("Name: "),
            Span::styled(
                format!("{}_", app.name_input),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  [Enter] save  [Esc] cancel", Style::default().fg(Color::Yellow)),
        ])
    } else {
        Line::from(vec![
            Span::raw("Name: "),
            Span::styled(
                if app.profile.name.is_empty() {
                    "(unset)".to_string()
                } else {
                    app.profile.name.clone()
                },
                Style::default().fg(Color::Cyan),
            ),
            Span::styled("  [e] edit", Style::default().fg(Color::Yellow)),
        ])
    };

    let mut lines = vec![
        name_line,
        Line::from(""),
        Line::from(format!(
            "Chips: {}   Tokens: {}",
            app.profile.chips, app.profile.tokens
        )),
        Line::from(format!(
            "Games played: {}   Games won: {}   Win rate: {:.0}%",
            app.profile.games_played,
            app.profile.games_won,
            app.profile.win_rate() * 100.0
        )),
        Line::from(format!(
            "Grades logged: {}   Leaderboard rank: #{}",
            app.profile.grades.len(),
            leaderboard::user_rank(&app.profile)
        )),
        Line::from(""),
    ];

    if !app.profile.redeemed.is_empty() {
        lines.push(Line::from(Span::styled(
            "Redeemed prizes:",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for id in &app.profile.redeemed {
            if let Some(prize) = catalog::find(*id) {
                lines.push(Line::from(format!("  {} ({} tokens)", prize.name, prize.cost)));
            }
        }
    }

    let profile = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Profile"))
        .wrap(Wrap { trim: true });
    f.render_widget(profile, area);
}
