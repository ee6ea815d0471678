use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::game::{BOTTOM_EXIT_Y, Enemy, Phase, Player, Projectile, STARTING_LIVES, Surface};
use crate::input::MOVE_ZONE_FRACTION;

/// Logical pixels per terminal cell. Terminal cells are roughly twice as
/// tall as wide, so the vertical scale is doubled to keep the playfield
/// visually square-ish.
pub const CELL_PX_W: f32 = 10.0;
pub const CELL_PX_H: f32 = 20.0;

/// Widest playfield in cells (600 logical px).
const MAX_FIELD_COLS: u16 = 60;
const MAX_FIELD_ROWS: u16 = (BOTTOM_EXIT_Y / CELL_PX_H) as u16;

/// Where the playfield ended up on screen last frame, and the logical
/// surface it represents. Used to translate mouse cells back into
/// surface pixels and as the bounds collaborator for the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayfieldView {
    pub inner: Rect,
    pub surface: Surface,
}

impl PlayfieldView {
    pub fn cell_to_surface(&self, column: u16, row: u16) -> (f32, f32) {
        let col = column.saturating_sub(self.inner.x);
        let row = row.saturating_sub(self.inner.y);
        (f32::from(col) * CELL_PX_W, f32::from(row) * CELL_PX_H)
    }
}

/// View struct that holds all game state needed for rendering
pub struct RenderView<'a> {
    pub phase: Phase,
    pub player: &'a Player,
    pub enemies: &'a [Enemy],
    pub projectiles: &'a [Projectile],
    pub score: u32,
    pub lives: u8,
    pub area: Rect,
}

/// Handles all rendering responsibilities for the game
pub struct GameRenderer {}

impl Default for GameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRenderer {
    pub fn new() -> Self {
        Self {}
    }

    /// Main render method that dispatches to phase-specific renderers.
    /// Returns the playfield geometry while a session is on screen so the
    /// caller can feed it back as the surface-bounds collaborator.
    pub fn render(&self, frame: &mut Frame, view: &RenderView) -> Option<PlayfieldView> {
        match view.phase {
            Phase::NotStarted => {
                self.render_start_screen(frame, view.area);
                None
            }
            Phase::Running => Some(self.render_game(frame, view)),
            Phase::Over => {
                self.render_game_over(frame, view);
                None
            }
        }
    }

    /// Computes the playfield placement for the given terminal area: a
    /// centered bordered block up to 60x25 cells (600x500 logical px).
    fn layout_playfield(area: Rect) -> PlayfieldView {
        let field_cols = area.width.saturating_sub(2).min(MAX_FIELD_COLS);
        let field_rows = area.height.saturating_sub(4).min(MAX_FIELD_ROWS);
        let outer = Rect {
            x: area.x + (area.width.saturating_sub(field_cols + 2)) / 2,
            y: area.y + 1,
            width: field_cols + 2,
            height: field_rows + 2,
        };
        let inner = Rect {
            x: outer.x + 1,
            y: outer.y + 1,
            width: field_cols,
            height: field_rows,
        };
        PlayfieldView {
            inner,
            surface: Surface {
                width: f32::from(field_cols) * CELL_PX_W,
                height: f32::from(field_rows) * CELL_PX_H,
            },
        }
    }

    /// Renders the active gameplay screen
    fn render_game(&self, frame: &mut Frame, view: &RenderView) -> PlayfieldView {
        let playfield = Self::layout_playfield(view.area);
        let inner = playfield.inner;

        let border = Rect {
            x: inner.x.saturating_sub(1),
            y: inner.y.saturating_sub(1),
            width: inner.width + 2,
            height: inner.height + 2,
        };
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
            border,
        );

        // Dashed line marking the pointer movement zone boundary
        let zone_row = (playfield.surface.height * MOVE_ZONE_FRACTION / CELL_PX_H) as u16;
        if zone_row < inner.height {
            let dashes = "╌".repeat(inner.width as usize);
            frame.buffer_mut().set_string(
                inner.x,
                inner.y + zone_row,
                dashes,
                Style::default().fg(Color::DarkGray),
            );
        }

        // Render enemies
        for enemy in view.enemies {
            self.render_sprite(
                frame,
                &playfield,
                enemy.x,
                enemy.y,
                &["\\o/", "/_\\"],
                Color::Red,
            );
        }

        // Render player
        self.render_sprite(
            frame,
            &playfield,
            view.player.x,
            view.player.y,
            &[" /\\ ", "<||>"],
            Color::Green,
        );

        // Render projectiles with direct buffer access
        let buffer = frame.buffer_mut();
        for projectile in view.projectiles {
            if projectile.y < 0.0 {
                continue;
            }
            let col = (projectile.x / CELL_PX_W) as u16;
            let row = (projectile.y / CELL_PX_H) as u16;
            if col < inner.width && row < inner.height {
                buffer.set_string(
                    inner.x + col,
                    inner.y + row,
                    "|",
                    Style::default().fg(Color::Yellow),
                );
            }
        }

        // Stats overlay above the playfield
        let hearts = "♥".repeat(usize::from(view.lives))
            + &"♡".repeat(usize::from(STARTING_LIVES.saturating_sub(view.lives)));
        let stats = Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.score),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Lives: ", Style::default().fg(Color::DarkGray)),
            Span::styled(hearts, Style::default().fg(Color::Red)),
        ]);
        let stats_area = Rect {
            x: border.x,
            y: view.area.y,
            width: border.width,
            height: 1,
        };
        frame.render_widget(Paragraph::new(stats), stats_area);

        // Controls hint at bottom
        let controls = Line::from(vec![Span::styled(
            "[A/D or Arrows: Move] [Space: Fire] [Mouse: drag low to move, press high to fire] [Q: Quit]",
            Style::default().fg(Color::DarkGray),
        )]);
        let controls_area = Rect {
            x: view.area.x,
            y: view.area.y + view.area.height.saturating_sub(1),
            width: view.area.width,
            height: 1,
        };
        frame.render_widget(Paragraph::new(controls).centered(), controls_area);

        playfield
    }

    /// Draws a multi-line cell sprite anchored at a logical pixel
    /// position, clipped to the playfield.
    fn render_sprite(
        &self,
        frame: &mut Frame,
        playfield: &PlayfieldView,
        x: f32,
        y: f32,
        sprite_lines: &[&str],
        color: Color,
    ) {
        let inner = playfield.inner;
        if y < 0.0 {
            // Entities above the playfield (fresh spawns) are not drawn
            return;
        }
        let col = (x / CELL_PX_W) as u16;
        let row = (y / CELL_PX_H) as u16;
        let width = sprite_lines[0].chars().count() as u16;

        let text: Vec<Line> = sprite_lines
            .iter()
            .map(|line| {
                Line::from(*line).style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            })
            .collect();

        if row + sprite_lines.len() as u16 <= inner.height && col + width <= inner.width {
            let sprite_area = Rect {
                x: inner.x + col,
                y: inner.y + row,
                width,
                height: sprite_lines.len() as u16,
            };
            frame.render_widget(Paragraph::new(text), sprite_area);
        }
    }

    /// Renders the pre-game start screen
    fn render_start_screen(&self, frame: &mut Frame, area: Rect) {
        let start_text = vec![
            Line::from(""),
            Line::from("S T A R S H O T").centered().cyan().bold(),
            Line::from(""),
            Line::from("Destroy enemies and avoid collisions").centered().white(),
            Line::from(""),
            Line::from("A/D or arrow keys to move, hold Space to fire")
                .centered()
                .dark_gray(),
            Line::from("Mouse: drag the lower field to steer, press the upper field to fire")
                .centered()
                .dark_gray(),
            Line::from(""),
            Line::from("Press Enter to start").centered().yellow().bold(),
            Line::from("Press Q to quit").centered().white(),
        ];

        frame.render_widget(
            Paragraph::new(start_text)
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            area,
        );
    }

    /// Renders the game over screen
    fn render_game_over(&self, frame: &mut Frame, view: &RenderView) {
        let game_over_text = vec![
            Line::from(""),
            Line::from("╔═══════════════════════════╗").centered().red(),
            Line::from("║       GAME OVER!          ║")
                .centered()
                .red()
                .bold(),
            Line::from("╚═══════════════════════════╝").centered().red(),
            Line::from(""),
            Line::from(format!("Final Score: {}", view.score))
                .centered()
                .yellow()
                .bold(),
            Line::from(""),
            Line::from("Press R to play again").centered().white(),
            Line::from("Press Q to quit").centered().white(),
        ];

        frame.render_widget(
            Paragraph::new(game_over_text)
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            view.area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PLAYER_SIZE;

    #[test]
    fn test_layout_caps_surface_at_logical_maximum() {
        let view = GameRenderer::layout_playfield(Rect::new(0, 0, 200, 60));
        assert_eq!(view.surface.width, 600.0);
        assert_eq!(view.surface.height, 500.0);
    }

    #[test]
    fn test_layout_shrinks_with_terminal() {
        let view = GameRenderer::layout_playfield(Rect::new(0, 0, 42, 20));
        assert_eq!(view.inner.width, 40);
        assert_eq!(view.surface.width, 400.0);
        assert_eq!(view.surface.height, 320.0);
    }

    #[test]
    fn test_cell_to_surface_translation() {
        let view = GameRenderer::layout_playfield(Rect::new(0, 0, 62, 29));
        let (x, y) = view.cell_to_surface(view.inner.x + 12, view.inner.y + 10);
        assert_eq!(x, 120.0);
        assert_eq!(y, 200.0);
    }

    #[test]
    fn test_player_sprite_width_matches_box() {
        // 40 logical px at 10 px per column is a 4-column sprite
        assert_eq!(PLAYER_SIZE / CELL_PX_W, 4.0);
    }
}
