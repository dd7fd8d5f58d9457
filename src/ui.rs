use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;
use time_allocation::{color_for_index, group, Analysis, CategoryBucket};

pub struct App {
    pub analysis: Analysis,
    pub buckets: Vec<CategoryBucket>,
    pub state: TableState,
    pub show_detail: bool,
}

impl App {
    pub fn new(analysis: Analysis) -> Self {
        let buckets = group(&analysis.entries);

        let mut state = TableState::default();
        if !analysis.records.is_empty() {
            state.select(Some(0));
        }

        Self {
            analysis,
            buckets,
            state,
            show_detail: false,
        }
    }

    pub fn toggle_detail(&mut self) {
        self.show_detail = !self.show_detail;
    }

    pub fn selected_bucket(&self) -> Option<&CategoryBucket> {
        self.state.selected().and_then(|i| self.buckets.get(i))
    }

    pub fn next(&mut self) {
        let len = self.analysis.records.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.analysis.records.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }
}

/// "#0088FE" → Color::Rgb
fn hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(255)
    };
    Color::Rgb(channel(0..2), channel(2..4), channel(4..6))
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Enter => app.toggle_detail(),
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Header
            Constraint::Percentage(45), // Chart
            Constraint::Min(0),         // Table (+ detail)
            Constraint::Length(3),      // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);
    render_chart(f, chunks[1], app);

    if app.show_detail {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[2]);

        render_table(f, content_chunks[0], app);
        render_detail_panel(f, content_chunks[1], app);
    } else {
        render_table(f, chunks[2], app);
    }

    render_status_bar(f, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let spans = vec![
        Span::styled(
            "Time Distribution",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("{} entries", app.analysis.entries.len()),
            Style::default().fg(Color::White),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("{:.1} hours", app.analysis.total_hours()),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("{} skipped", app.analysis.skipped_lines.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let header = Paragraph::new(vec![Line::from(spans)])
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(header, area);
}

fn render_chart(f: &mut Frame, area: Rect, app: &App) {
    let bars: Vec<Bar> = app
        .analysis
        .records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            Bar::default()
                .value((record.percentage * 10.0).round() as u64)
                .text_value(format!("{:.1}%", record.percentage))
                .label(Line::from(short_label(record.category.name())))
                .style(Style::default().fg(hex_color(color_for_index(index))))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(" Share of time "),
        )
        .bar_width(9)
        .bar_gap(2)
        .data(BarGroup::default().bars(&bars));

    f.render_widget(chart, area);
}

/// First word of a label, so bars stay narrow ("Meetings & Calls" → "Meetings")
fn short_label(name: &str) -> String {
    name.split_whitespace().next().unwrap_or(name).to_string()
}

fn render_table(f: &mut Frame, area: Rect, app: &mut App) {
    let header_cells = ["Category", "Hours", "Share", "Entries"].iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = app.analysis.records.iter().enumerate().map(|(index, record)| {
        let color = hex_color(color_for_index(index));
        Row::new(vec![
            Cell::from(record.category.name()).style(Style::default().fg(color)),
            Cell::from(format!("{:.1}", record.hours)),
            Cell::from(format!("{:.1}%", record.percentage)),
            Cell::from(record.entry_count.to_string()),
        ])
        .height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(30),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Categories "),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn render_detail_panel(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Entries ");

    let bucket = match app.selected_bucket() {
        Some(b) => b,
        None => {
            f.render_widget(Paragraph::new("No category selected").block(block), area);
            return;
        }
    };

    let mut content = vec![
        Line::from(Span::styled(
            format!("  {}", bucket.category.name()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for classified in &bucket.entries {
        content.push(Line::from(vec![
            Span::styled(
                format!("  {:>5} min  ", classified.entry.minutes),
                Style::default().fg(Color::Green),
            ),
            Span::raw(classified.entry.description.clone()),
        ]));
    }

    f.render_widget(Paragraph::new(content).block(block), area);
}

fn render_status_bar(f: &mut Frame, area: Rect) {
    let help = Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" select  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(" entries  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(" quit"),
    ]);

    let status = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use time_allocation::{analyze, SAMPLE_LOG};

    #[test]
    fn test_app_navigation_wraps() {
        let mut app = App::new(analyze(SAMPLE_LOG).unwrap());
        assert_eq!(app.state.selected(), Some(0));

        app.previous();
        assert_eq!(app.state.selected(), Some(app.analysis.records.len() - 1));

        app.next();
        assert_eq!(app.state.selected(), Some(0));
    }

    #[test]
    fn test_selected_bucket_matches_record() {
        let mut app = App::new(analyze(SAMPLE_LOG).unwrap());
        app.next();

        let bucket = app.selected_bucket().unwrap();
        assert_eq!(bucket.category, app.analysis.records[1].category);
        assert_eq!(bucket.entries.len(), app.analysis.records[1].entry_count);
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color("#0088FE"), Color::Rgb(0x00, 0x88, 0xFE));
        assert_eq!(hex_color("#f95d6a"), Color::Rgb(0xf9, 0x5d, 0x6a));
    }

    #[test]
    fn test_short_label() {
        assert_eq!(short_label("Meetings & Calls"), "Meetings");
        assert_eq!(short_label("Miscellaneous"), "Miscellaneous");
    }
}
