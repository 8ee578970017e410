use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind}, execute, terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen}};
use ratatui::{backend::CrosstermBackend, Terminal, widgets::{Block, Borders, List, ListItem, Paragraph, ListState}, layout::{Layout, Constraint, Direction}, style::{Style, Modifier, Color}};

use todo_api::{application::todo_service::{TodoService, TodoServiceImpl}, domain::todo::{CreateTodo, Todo}, infrastructure::sqlite_repo::SqliteTodoRepository};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://todos.db".to_string());
    let repo = SqliteTodoRepository::connect(&database_url).await?;
    repo.init().await?;
    let service = TodoServiceImpl::new(repo);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, service).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode { View, Create, Edit }

#[derive(Clone, Copy, PartialEq, Eq)]
enum Filter { All, Active, Completed }

impl Filter {
    fn label(self) -> &'static str {
        match self { Filter::All => "All", Filter::Active => "Active", Filter::Completed => "Completed" }
    }

    fn next(self) -> Self {
        match self { Filter::All => Filter::Active, Filter::Active => Filter::Completed, Filter::Completed => Filter::All }
    }
}

struct App<S: TodoService> {
    service: S,
    items: Vec<Todo>,
    selected: usize,
    last_tick: Instant,
    mode: Mode,
    list_state: ListState,
    filter: Filter,
    filtered_indices: Vec<usize>,
    draft_title: String,
}

impl<S: TodoService> App<S> {
    async fn load(&mut self) -> Result<()> {
        self.items = self.service.list().await?;
        self.recompute_filtered();
        Ok(())
    }

    fn recompute_filtered(&mut self) {
        self.filtered_indices.clear();
        for (i, todo) in self.items.iter().enumerate() {
            let include = match self.filter {
                Filter::All => true,
                Filter::Active => !todo.is_completed,
                Filter::Completed => todo.is_completed,
            };
            if include { self.filtered_indices.push(i); }
        }
        // Clamp selection within filtered bounds
        let len = self.filtered_indices.len();
        if len == 0 { self.selected = 0; self.list_state.select(None); }
        else { if self.selected >= len { self.selected = len - 1; } self.list_state.select(Some(self.selected)); }
    }

    fn selected_todo(&self) -> Option<&Todo> {
        self.filtered_indices.get(self.selected).and_then(|&idx| self.items.get(idx))
    }
}

async fn run_app<S: TodoService>(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, service: S) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut app = App { service, items: vec![], selected: 0, last_tick: Instant::now(), mode: Mode::View, list_state: ListState::default(), filter: Filter::All, filtered_indices: Vec::new(), draft_title: String::new() };
    app.load().await?;

    loop {
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(1),
                    Constraint::Length(3),
                ])
                .split(f.size());

            let header = Paragraph::new("Todos (Enter: toggle, n: new, e: edit, d: delete, f: filter, q: quit)  |  New/Edit: type title, Enter to save, Esc to cancel")
                .block(Block::default().borders(Borders::ALL).title("todo-api tui"));
            f.render_widget(header, chunks[0]);

            let list_items: Vec<ListItem> = app.filtered_indices.iter().filter_map(|&idx| app.items.get(idx)).map(|todo| {
                let mark = if todo.is_completed { "[x]" } else { "[ ]" };
                ListItem::new(format!("{} #{} {}", mark, todo.id.0, todo.title))
            }).collect();
            // Keep list_state selection in sync with current index
            if app.filtered_indices.is_empty() { app.list_state.select(None); } else { app.list_state.select(Some(app.selected)); }
            let list = List::new(list_items)
                .block(Block::default().borders(Borders::ALL).title(format!("items [{}]", app.filter.label())))
                .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD | Modifier::REVERSED))
                .highlight_symbol(">> ");
            f.render_stateful_widget(list, chunks[1], &mut app.list_state);

            let footer_text = match app.mode {
                Mode::View => format!("DATABASE_URL={}  |  Filter=[{}]", std::env::var("DATABASE_URL").unwrap_or_default(), app.filter.label()),
                Mode::Create => format!("Create — title: {}_  |  (Enter to save, Esc to cancel)", app.draft_title),
                Mode::Edit => format!("Edit — title: {}_  |  (Enter to save, Esc to cancel)", app.draft_title),
            };
            let footer = Paragraph::new(footer_text)
                .block(Block::default().borders(Borders::ALL).title(match app.mode { Mode::View => "info", Mode::Create => "create", Mode::Edit => "edit" }));
            f.render_widget(footer, chunks[2]);
        })?;

        let timeout = tick_rate.saturating_sub(app.last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only act on key presses; ignore repeats and releases to prevent duplicate input
                if key.kind != KeyEventKind::Press { continue; }
                match app.mode {
                    Mode::View => match key.code {
                        KeyCode::Char('q') => break,
                        KeyCode::Up => { if app.selected > 0 { app.selected -= 1; } }
                        KeyCode::Down => { let len = app.filtered_indices.len(); if app.selected + 1 < len { app.selected += 1; } }
                        KeyCode::Enter => {
                            let toggled = app.selected_todo().map(|t| Todo { id: t.id, title: t.title.clone(), is_completed: !t.is_completed });
                            if let Some(candidate) = toggled {
                                let _ = app.service.update(candidate.id, candidate).await;
                                app.load().await?;
                            }
                        }
                        KeyCode::Char('n') => {
                            app.mode = Mode::Create;
                            app.draft_title.clear();
                        }
                        KeyCode::Char('e') => {
                            if let Some(title) = app.selected_todo().map(|t| t.title.clone()) {
                                app.mode = Mode::Edit;
                                app.draft_title = title;
                            }
                        }
                        KeyCode::Char('d') => {
                            if let Some(id) = app.selected_todo().map(|t| t.id) {
                                let _ = app.service.delete(id).await;
                                if app.selected > 0 { app.selected -= 1; }
                                app.load().await?;
                            }
                        }
                        KeyCode::Char('f') => {
                            app.filter = app.filter.next();
                            app.recompute_filtered();
                        }
                        _ => {}
                    },
                    Mode::Create => match key.code {
                        KeyCode::Esc => { app.mode = Mode::View; app.draft_title.clear(); }
                        KeyCode::Enter => {
                            let title = app.draft_title.trim().to_string();
                            if !title.is_empty() {
                                let _ = app.service.create(CreateTodo { title, is_completed: false }).await;
                            }
                            app.mode = Mode::View;
                            app.draft_title.clear();
                            app.load().await?;
                        }
                        KeyCode::Backspace => { app.draft_title.pop(); }
                        KeyCode::Char(c) => { app.draft_title.push(c); }
                        _ => {}
                    },
                    Mode::Edit => match key.code {
                        KeyCode::Esc => { app.mode = Mode::View; app.draft_title.clear(); }
                        KeyCode::Enter => {
                            let title = app.draft_title.trim().to_string();
                            if !title.is_empty() {
                                let edited = app.selected_todo().map(|t| Todo { id: t.id, title: title.clone(), is_completed: t.is_completed });
                                if let Some(candidate) = edited {
                                    let _ = app.service.update(candidate.id, candidate).await;
                                }
                            }
                            app.mode = Mode::View;
                            app.draft_title.clear();
                            app.load().await?;
                        }
                        KeyCode::Backspace => { app.draft_title.pop(); }
                        KeyCode::Char(c) => { app.draft_title.push(c); }
                        _ => {}
                    },
                }
            }
        }
        if app.last_tick.elapsed() >= tick_rate {
            app.last_tick = Instant::now();
        }
    }
    Ok(())
}
