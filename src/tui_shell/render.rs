use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::workspace::Notice;

use super::app::{App, InputAction};
use super::input::Input;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(if app.input.is_some() { 3 } else { 1 }),
        ])
        .split(frame.area());

    draw_header(frame, app, rows[0]);
    draw_workspace(frame, app, rows[1]);
    match &app.input {
        Some((action, input)) => draw_input(frame, *action, input, rows[2]),
        None => draw_status(frame, app, rows[2]),
    }
}

fn draw_header(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        app.bench.window_title(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )];

    let description = app.bench.description();
    if !description.is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(description, Style::default().fg(Color::Gray)));
    }

    match &app.bench.session().user {
        Some(user) => {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("@{}", user.login),
                Style::default().fg(Color::Green),
            ));
        }
        None => {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                "signed out",
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_workspace(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let panes = app.bench.panes();
    let mut constraints = Vec::new();
    if panes.navigator_open {
        constraints.push(Constraint::Fill(panes.weights[0]));
    }
    constraints.push(Constraint::Fill(panes.weights[1]));
    constraints.push(Constraint::Fill(panes.weights[2]));

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let mut col = 0;
    if panes.navigator_open {
        draw_navigator(frame, app, cols[col]);
        col += 1;
    }
    draw_visualization(frame, app, cols[col]);
    draw_editor(frame, app, cols[col + 1]);
}

fn draw_navigator(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Navigator");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let selected = Style::default().fg(Color::Black).bg(Color::Yellow);
    let mut lines: Vec<Line> = Vec::new();

    let style = if app.nav_cursor == 0 {
        selected
    } else {
        Style::default().fg(Color::Green)
    };
    lines.push(Line::from(Span::styled("+ New scratch paper", style)));

    let papers = &app.bench.session().scratch_papers;
    for (i, paper) in papers.iter().enumerate() {
        let name = if paper.name.is_empty() {
            paper.key.as_str()
        } else {
            paper.name.as_str()
        };
        let style = if app.nav_cursor == i + 1 {
            selected
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(format!("  {}", name), style)));
    }
    if papers.is_empty() && app.bench.session().user.is_none() {
        lines.push(Line::from(Span::styled(
            "  (sign in with s to list papers)",
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Categories",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for category in app.bench.categories() {
        lines.push(Line::from(format!("  {}", category.name)));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_visualization(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Visualization");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let driving = app
        .bench
        .active_file()
        .map(|f| f.name.clone())
        .unwrap_or_else(|| "(no file)".to_string());
    let lines = vec![
        Line::from(format!("build #{}", app.build_count)),
        Line::from(Span::styled(
            format!("driven by {}", driving),
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_editor(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Editor");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let active = app.bench.panes().active_tab;
    let mut spans = Vec::new();
    for (i, file) in app.bench.files().iter().enumerate() {
        let style = if Some(i) == active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", file.name), style));
    }
    spans.push(Span::styled(" + ", Style::default().fg(Color::Green)));
    frame.render_widget(Paragraph::new(Line::from(spans)), parts[0]);

    let content = app
        .bench
        .active_file()
        .map(|f| f.content.as_str())
        .unwrap_or("");
    frame.render_widget(
        Paragraph::new(content).wrap(Wrap { trim: false }),
        parts[1],
    );
}

fn draw_status(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        app.route.clone(),
        Style::default().fg(Color::Cyan),
    )];

    match app.notices.last() {
        Some(Notice::Error(msg)) => {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Red)));
        }
        Some(Notice::Info(msg)) => {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Green)));
        }
        None => {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                "g:go  Enter:open  Tab:tabs  +:add  r:rename  x:delete  s:sign-in  o:sign-out  R:refresh  n:navigator  q:quit",
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_input(frame: &mut ratatui::Frame, action: InputAction, input: &Input, area: Rect) {
    let title = match action {
        InputAction::Route => "Go to route",
        InputAction::Rename => "Rename file",
        InputAction::SignIn => "Access token",
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(input.buf.as_str()), inner);
}
