//! User interface rendering functions for all application screens.

use std::rc::Rc;

use color_eyre::eyre::Result;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear, Paragraph, Row, Table, Wrap,
    },
    Frame,
};

use crate::{
    grid::{Cell, CellKind, Coord, StepEvent},
    replay::{self, TraceKind},
    types::{MainMenuItem, MenuType, OptionsMenuItem, Screen},
    App,
};

/// Width of the information column to the right of the grid.
const SIDEBAR_WIDTH: u16 = 36;

/// Points drawn in a single color on the grid canvas.
type Layer = (Vec<(f64, f64)>, Color);

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from drawing operations or data conversion failures.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    match app.screen {
        Screen::MainMenu(item) => main_menu(frame, item),
        Screen::OptionsMenu(item) => options_menu(app, frame, item),
        Screen::InGame => in_game(app, frame)?,
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    frame.render_widget(Clear, frame.area());
}

/// Renders the generic layout structure for the main and options menus.
///
/// This function creates the common layout and block structure used by both menus. The generic
/// part includes the centered positioning and border styling, while the specific menu content is
/// handled by the caller using the returned item rows.
pub(crate) fn init_menu(frame: &mut Frame, menu: &MenuType) -> Rc<[Rect]> {
    let [_, space, _] = Layout::vertical([
        Constraint::Percentage(30),
        Constraint::Percentage(40),
        Constraint::Percentage(30),
    ])
    .areas(frame.area());
    let [_, space, _] = Layout::horizontal([
        Constraint::Percentage(35),
        Constraint::Percentage(30),
        Constraint::Percentage(35),
    ])
    .areas(space);

    let [layout] = Layout::vertical([Constraint::Max(u16::from(menu.value()) + 2)])
        .flex(Flex::Center)
        .areas(space);

    let block = Block::bordered()
        .title(menu.repr())
        .title_bottom("(j) down / (k) up / (l) select")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); usize::from(menu.value())]).split(inner_space)
}

/// Renders one centered line per menu item, highlighting the selected one.
fn render_items(frame: &mut Frame, rows: &[Rect], labels: &[String], selected: usize) {
    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    for (index, (label, area)) in labels.iter().zip(rows).enumerate() {
        let style = if index == selected {
            active_content_style
        } else {
            content_style
        };
        frame.render_widget(Line::styled(label.as_str(), style).centered(), *area);
    }
}

/// Renders the main menu screen with navigation options.
pub(crate) fn main_menu(frame: &mut Frame, item: MainMenuItem) {
    clear(frame);

    let rows = init_menu(frame, &MenuType::MainMenu(3));
    let labels = ["Visualize", "Options", "Quit"].map(str::to_owned);
    let selected = match item {
        MainMenuItem::Visualize => 0,
        MainMenuItem::Options => 1,
        MainMenuItem::Quit => 2,
    };

    render_items(frame, &rows, &labels, selected);
}

/// Renders the options menu screen with the current algorithm and replay speed.
pub(crate) fn options_menu(app: &App, frame: &mut Frame, item: OptionsMenuItem) {
    clear(frame);

    let rows = init_menu(frame, &MenuType::OptionsMenu(3));
    let labels = [
        format!("Algorithm: {}", app.algorithm),
        format!("Speed: {}", app.speed.name()),
        "Return".to_owned(),
    ];
    let selected = match item {
        OptionsMenuItem::Algorithm => 0,
        OptionsMenuItem::Speed => 1,
        OptionsMenuItem::Back => 2,
    };

    render_items(frame, &rows, &labels, selected);
}

/// Color used to draw a cell or an overlay event of the given kind.
const fn kind_color(kind: CellKind) -> Color {
    match kind {
        CellKind::Empty => Color::DarkGray,
        CellKind::Wall => Color::Green,
        CellKind::Weighted => Color::Yellow,
        CellKind::Start => Color::Cyan,
        CellKind::End => Color::Magenta,
        CellKind::Searched => Color::Blue,
        CellKind::Path => Color::Red,
    }
}

/// Renders the grid screen: the grid canvas, the sidebar, and the key help at the bottom.
///
/// The grid is drawn in layers, one per cell kind, followed by the revealed part of a search
/// trace, the most recently replayed cell, and the cursor on top.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
pub(crate) fn in_game(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let rows = app.grid.rows();
    let cols = app.grid.cols();

    let [content_area, tooltip_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(frame.area());
    let [grid_area, sidebar_area] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(SIDEBAR_WIDTH)])
            .areas(content_area);

    let [_, grid_area, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(u16::try_from(rows)?),
        Constraint::Min(0),
    ])
    .areas(grid_area);
    let [_, space, _] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(u16::try_from(cols)?),
        Constraint::Min(0),
    ])
    .areas(grid_area);

    // Pre-compute screen coordinates to handle errors before the paint closure
    let layers = canvas_layers(app)?;

    let grid = Canvas::default()
        .x_bounds([
            (-rounded_div::i32(space.width.into(), 2)).into(),
            (rounded_div::i32(space.width.into(), 2)).into(),
        ])
        .y_bounds([
            (-rounded_div::i32(space.height.into(), 2)).into(),
            (rounded_div::i32(space.height.into(), 2)).into(),
        ])
        .marker(Marker::Block)
        .paint(|ctx| {
            for (coords, color) in &layers {
                ctx.draw(&Points {
                    coords,
                    color: *color,
                });
            }
        });

    if !space.is_empty() {
        frame.render_widget(grid, space);
    }
    sidebar(app, frame, sidebar_area)?;

    let tooltip_block = Block::bordered()
        .title("(h) return to menu / (q) quit")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);
    let tooltip = Paragraph::new(vec![
        Line::raw("(arrows) move / (space) toggle / (enter) paint / (b) brush"),
        Line::raw("(f) find / (m) maze / (c) clear / (r) reset / (a) algorithm / (s) speed"),
    ])
    .alignment(Alignment::Center)
    .block(tooltip_block);

    frame.render_widget(tooltip, tooltip_area);

    Ok(())
}

/// Screen coordinates and color of every layer drawn on the grid canvas, bottom layer first.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
fn canvas_layers(app: &App) -> Result<Vec<Layer>> {
    let rows = app.grid.rows();
    let cols = app.grid.cols();

    let mut layers = Vec::new();
    for kind in [
        CellKind::Empty,
        CellKind::Wall,
        CellKind::Weighted,
        CellKind::Start,
        CellKind::End,
        CellKind::Searched,
        CellKind::Path,
    ] {
        let coords: Vec<Coord> = app
            .grid
            .cells()
            .iter()
            .filter(|cell| cell.kind() == kind)
            .map(Cell::coord)
            .collect();
        layers.push((
            replay::transform_grid_to_screen_coords(&coords, rows, cols)?,
            kind_color(kind),
        ));
    }
    if app.animation_manager.kind == TraceKind::Search {
        for kind in [CellKind::Searched, CellKind::Path] {
            let coords: Vec<Coord> = app
                .animation_manager
                .revealed()
                .iter()
                .filter(|event| event.kind == kind)
                .map(StepEvent::coord)
                .collect();
            layers.push((
                replay::transform_grid_to_screen_coords(&coords, rows, cols)?,
                kind_color(kind),
            ));
        }
    }
    if let Some(current) = app.animation_manager.current() {
        layers.push((
            replay::transform_grid_to_screen_coords(&[current.coord()], rows, cols)?,
            Color::LightYellow,
        ));
    }
    layers.push((
        replay::transform_grid_to_screen_coords(&[app.cursor], rows, cols)?,
        Color::White,
    ));

    Ok(layers)
}

/// Renders the current settings, the replay progress, the status line, and the results table.
///
/// # Errors
///
/// This function may return errors if the cursor lies outside of the grid.
fn sidebar(app: &App, frame: &mut Frame, area: Rect) -> Result<()> {
    let [info_area, results_area] =
        Layout::vertical([Constraint::Length(10), Constraint::Min(3)]).areas(area);

    let replay = if app.is_animating() {
        let trace = match app.animation_manager.kind {
            TraceKind::Search => "search",
            TraceKind::Maze => "maze",
        };
        format!(
            "{trace} {}/{}",
            app.animation_manager.current_index,
            app.animation_manager.steps.len()
        )
    } else {
        "idle".to_owned()
    };
    let under_cursor = app.grid.cell_at(app.cursor)?.kind();

    let info = Paragraph::new(vec![
        Line::raw(format!("Algorithm  {}", app.algorithm)),
        Line::raw(format!("Speed      {}", app.speed.name())),
        Line::raw(format!("Brush      {}", app.brush.name())),
        Line::raw(format!("Cursor     {} {under_cursor:?}", app.cursor)),
        Line::raw(format!("Replay     {replay}")),
        Line::raw(""),
        Line::styled(
            app.status.clone().unwrap_or_default(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::bordered()
            .title("Grid")
            .border_type(BorderType::Rounded),
    )
    .style(Color::Green);

    let records = app.results.iter().rev().map(|record| {
        Row::new([
            record.algorithm.to_string(),
            format!("{:.2}ms", record.elapsed.as_secs_f64() * 1000.),
            record.visited.to_string(),
            record
                .length
                .map_or_else(|| "none".to_owned(), |length| length.to_string()),
        ])
    });
    let results = Table::new(
        records,
        [
            Constraint::Length(4),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(6),
        ],
    )
    .header(
        Row::new(["Algo", "Time", "Visited", "Path"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(
        Block::bordered()
            .title("Results")
            .border_type(BorderType::Rounded),
    )
    .style(Color::Green);

    frame.render_widget(info, info_area);
    frame.render_widget(results, results_area);

    Ok(())
}
