//! Screens for the title, the run, and game over.

use super::game_common::{
    create_game_layout, render_centered_panel, render_info_panel_frame, render_status_bar,
    stat_line,
};
use crate::core::{GameState, SceneView};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const INFO_PANEL_WIDTH: u16 = 20;

/// What occupies one terminal cell of the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Column,
    Avatar,
}

/// Map the field onto a `width` x `height` grid of cells.
///
/// A cell is a column when its centre lies inside an obstacle and outside
/// its gap. The avatar always occupies exactly one cell, the one under the
/// centre of its box, so it stays visible however coarse the grid is.
pub fn rasterize(view: &SceneView<'_>, width: usize, height: usize) -> Vec<Vec<Cell>> {
    let mut grid = vec![vec![Cell::Empty; width]; height];
    if width == 0 || height == 0 {
        return grid;
    }

    let cell_w = view.field_width / width as f64;
    let cell_h = view.field_height / height as f64;

    for (row, cells) in grid.iter_mut().enumerate() {
        let wy = (row as f64 + 0.5) * cell_h;
        for (col, cell) in cells.iter_mut().enumerate() {
            let wx = (col as f64 + 0.5) * cell_w;
            let solid = view.obstacles.iter().any(|o| {
                wx >= o.x
                    && wx < o.x + view.obstacle_width
                    && (wy < o.gap_top || wy > o.gap_bottom)
            });
            if solid {
                *cell = Cell::Column;
            }
        }
    }

    let centre_x = view.avatar_x + view.avatar_width / 2.0;
    let centre_y = view.avatar_y + view.avatar_height / 2.0;
    let col = ((centre_x / cell_w).floor().max(0.0) as usize).min(width - 1);
    let row = ((centre_y / cell_h).floor().max(0.0) as usize).min(height - 1);
    grid[row][col] = Cell::Avatar;

    grid
}

pub fn render_start(frame: &mut Frame, area: Rect, view: &SceneView<'_>) {
    let accent = Style::default().fg(Color::Rgb(255, 165, 0));
    let lines = vec![
        Line::from(Span::styled(
            "FLIGHT TO GRUM'S LAIR",
            accent.add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Highest Score: {}", view.high_score),
            accent,
        )),
        Line::from(""),
        Line::from(Span::styled("How to Play:", accent)),
        Line::from("Press Space to Jump"),
        Line::from("Avoid the pipes"),
        Line::from("Reach Grum's Lair!"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Space to Start",
            accent.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "[Esc] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    render_centered_panel(frame, area, Color::Cyan, lines);
}

pub fn render_playing(frame: &mut Frame, area: Rect, view: &SceneView<'_>) {
    let layout = create_game_layout(
        frame,
        area,
        " Flight to Grum's Lair ",
        Color::Cyan,
        INFO_PANEL_WIDTH,
    );

    render_play_area(frame, layout.content, view);

    if let GameState::Dying { .. } = view.state {
        render_status_bar(frame, layout.status_bar, "Crashed!", Color::Red, &[]);
    } else {
        render_status_bar(
            frame,
            layout.status_bar,
            &format!("Score: {}", view.score),
            Color::Green,
            &[("[Space/Up]", "Jump"), ("[Esc]", "Quit")],
        );
    }

    render_info_panel(frame, layout.info_panel, view);
}

fn render_play_area(frame: &mut Frame, area: Rect, view: &SceneView<'_>) {
    let grid = rasterize(view, area.width as usize, area.height as usize);
    let avatar_glyph = avatar_glyph(view);

    let lines: Vec<Line> = grid
        .iter()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|cell| match cell {
                        Cell::Empty => Span::raw(" "),
                        Cell::Column => Span::styled("█", Style::default().fg(Color::Green)),
                        Cell::Avatar => avatar_glyph.clone(),
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn avatar_glyph(view: &SceneView<'_>) -> Span<'static> {
    if !view.avatar_alive {
        return Span::styled("x", Style::default().fg(Color::Gray));
    }
    let glyph = if view.avatar_velocity < -1.0 {
        "▲"
    } else if view.avatar_velocity > 3.0 {
        "▼"
    } else {
        "►"
    };
    Span::styled(
        glyph,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

fn render_info_panel(frame: &mut Frame, area: Rect, view: &SceneView<'_>) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let mut lines = vec![
        Line::from(""),
        stat_line("Score", view.score, Color::White),
        stat_line("Best", view.high_score.max(view.score), Color::Yellow),
        Line::from(""),
    ];
    if view.score > view.high_score {
        lines.push(Line::from(Span::styled(
            " New record!",
            Style::default().fg(Color::Green),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

pub fn render_game_over(frame: &mut Frame, area: Rect, view: &SceneView<'_>) {
    let lines = vec![
        Line::from(Span::styled(
            "Game Over!",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Score: {}", view.score)),
        Line::from(Span::styled(
            format!("Best: {}", view.high_score),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press 'C' to Continue or 'L' to Leave",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    render_centered_panel(frame, area, Color::Red, lines);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Obstacle;

    fn view(obstacles: &[Obstacle]) -> SceneView<'_> {
        SceneView {
            state: GameState::Playing,
            score: 0,
            high_score: 0,
            field_width: 400.0,
            field_height: 600.0,
            avatar_x: 50.0,
            avatar_y: 290.0,
            avatar_width: 20.0,
            avatar_height: 20.0,
            avatar_velocity: 0.0,
            avatar_alive: true,
            obstacles,
            obstacle_width: 60.0,
        }
    }

    #[test]
    fn test_avatar_lands_in_one_cell() {
        let grid = rasterize(&view(&[]), 40, 30);
        let avatars: usize = grid
            .iter()
            .flatten()
            .filter(|c| **c == Cell::Avatar)
            .count();
        assert_eq!(avatars, 1);
        // centre (60, 300) → col 6, row 15
        assert_eq!(grid[15][6], Cell::Avatar);
    }

    #[test]
    fn test_column_has_gap() {
        let obstacles = [Obstacle {
            x: 200.0,
            gap_top: 200.0,
            gap_bottom: 400.0,
            scored: false,
        }];
        let grid = rasterize(&view(&obstacles), 40, 30);
        // cell width 10, col 22 centre x = 225
        assert_eq!(grid[0][22], Cell::Column);
        assert_eq!(grid[15][22], Cell::Empty);
        assert_eq!(grid[29][22], Cell::Column);
        // left of the obstacle
        assert_eq!(grid[0][10], Cell::Empty);
    }

    #[test]
    fn test_empty_grid() {
        assert!(rasterize(&view(&[]), 0, 0).is_empty());
    }

    #[test]
    fn test_avatar_clamped_into_grid() {
        let mut v = view(&[]);
        v.avatar_y = 590.0;
        let grid = rasterize(&v, 40, 30);
        assert_eq!(grid[29][6], Cell::Avatar);
    }
}
