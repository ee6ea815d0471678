use color_eyre::Result;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::{Duration, Instant};

use crate::audio::AudioManager;
use crate::game::{Game, Phase, Surface};
use crate::input::{ControlAction, InputManager, PointerAction};
use crate::renderer::{GameRenderer, PlayfieldView, RenderView};

/// The main application: owns the simulation, input tracking, rendering
/// and audio, and drives one tick per frame while a session is running.
pub struct App {
    running: bool,
    game: Game,
    /// Playfield geometry from the last frame; the surface-bounds
    /// collaborator for the simulation. None until the first draw.
    playfield: Option<PlayfieldView>,
    /// Monotonic clock for the cooldown gates
    clock: Instant,
    /// internal components
    input_manager: InputManager,
    renderer: GameRenderer,
    audio_manager: AudioManager,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new() -> Self {
        Self {
            running: true,
            game: Game::new(),
            playfield: None,
            clock: Instant::now(),
            input_manager: InputManager::new(),
            renderer: GameRenderer::new(),
            audio_manager: AudioManager::default(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        while self.running {
            // Render the frame and capture where the playfield landed
            let mut playfield = None;
            terminal.draw(|frame| {
                let view = RenderView {
                    phase: self.game.phase,
                    player: &self.game.player,
                    enemies: &self.game.enemies,
                    projectiles: &self.game.projectiles,
                    score: self.game.score,
                    lives: self.game.lives,
                    area: frame.area(),
                };
                playfield = self.renderer.render(frame, &view);
            })?;
            self.playfield = playfield;

            // Poll input events against the rendered geometry
            self.input_manager.poll_events(self.playfield)?;
            self.process_control_actions();
            self.process_pointer_actions();

            // One synchronous simulation pass per frame while running
            if self.game.is_running() {
                let now = self.clock.elapsed().as_millis() as u64;
                let report = self.game.tick(self.input_manager.intent(), now, self.surface());
                if report.fired {
                    self.audio_manager.play_fire_sound();
                }
            }

            // Small sleep to maintain ~60 FPS and prevent CPU spinning
            std::thread::sleep(Duration::from_millis(16));
        }
        Ok(())
    }

    fn surface(&self) -> Option<Surface> {
        self.playfield.map(|p| p.surface)
    }

    /// Session-control transitions: start from the title screen, restart
    /// from game over, quit from anywhere. A finished session never
    /// resumes; restart goes through the full reset.
    fn process_control_actions(&mut self) {
        for action in self.input_manager.take_control_actions() {
            match action {
                ControlAction::Quit => {
                    self.running = false;
                }
                ControlAction::Start => {
                    if self.game.phase == Phase::NotStarted {
                        self.input_manager.reset_held_state();
                        self.game.restart();
                    }
                }
                ControlAction::Restart => {
                    if self.game.phase == Phase::Over {
                        self.input_manager.reset_held_state();
                        self.game.restart();
                    }
                }
            }
        }
    }

    /// Pointer movement bypasses intent state and assigns the ship
    /// position directly, at event granularity.
    fn process_pointer_actions(&mut self) {
        let Some(surface) = self.surface() else {
            return;
        };
        for action in self.input_manager.take_pointer_actions() {
            match action {
                PointerAction::MoveShipTo(center_x) => {
                    self.game.snap_player_to(center_x, surface);
                }
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
