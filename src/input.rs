use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

use crate::game::{Intent, Surface};
use crate::renderer::PlayfieldView;

/// Fraction of the surface height splitting the pointer zones: a pointer
/// going down below this line moves the ship, above it holds fire.
pub const MOVE_ZONE_FRACTION: f32 = 0.6;

/// One-shot requests outside the per-tick intent: session control and
/// quitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Start,
    Restart,
    Quit,
}

/// What a pointer event asks of the game right now. Movement pointers
/// assign the ship position directly (the one input that bypasses intent
/// state); shooting pointers only flip the fire intent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    MoveShipTo(f32),
}

/// Tracks the state of keys that can be held down for continuous input
#[derive(Debug, Default)]
struct KeyState {
    left: bool,
    right: bool,
    fire: bool,
}

/// An active pointer in the movement zone: stable identifier plus its
/// continuously updated horizontal coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
struct MovePointer {
    id: u64,
    x: f32,
}

/// Manages input polling and derives per-tick intent from the union of
/// held keys and active pointer zones.
///
/// A pointer is classified once, when it goes down, by its vertical
/// position within the surface. The classification sticks for the
/// pointer's lifetime; dragging a movement pointer up into the shooting
/// zone keeps it a movement pointer. Each zone tracks at most one
/// pointer; extras landing in an occupied zone are ignored until the
/// occupant lifts.
pub struct InputManager {
    key_state: KeyState,
    move_pointer: Option<MovePointer>,
    shoot_pointer: Option<u64>,
    control_actions: Vec<ControlAction>,
    pointer_actions: Vec<PointerAction>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            key_state: KeyState::default(),
            move_pointer: None,
            shoot_pointer: None,
            control_actions: Vec::new(),
            pointer_actions: Vec::new(),
        }
    }

    /// Polls all pending terminal events without blocking. Should be
    /// called once per frame; one-shot actions accumulate until drained.
    pub fn poll_events(&mut self, view: Option<PlayfieldView>) -> color_eyre::Result<()> {
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key_event) => self.handle_key_event(key_event),
                Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event, view),
                Event::Resize(_, _) => {
                    // New dimensions are picked up on the next draw
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// The intent snapshot for this tick: held keys unioned with pointer
    /// zone state. A held key and a held shooting pointer together still
    /// produce a single `fire` flag; the cooldown gate downstream decides
    /// how often that becomes a shot.
    pub fn intent(&self) -> Intent {
        Intent {
            move_left: self.key_state.left,
            move_right: self.key_state.right,
            fire: self.key_state.fire || self.shoot_pointer.is_some(),
        }
    }

    /// Drains session-control actions gathered since the last call.
    pub fn take_control_actions(&mut self) -> Vec<ControlAction> {
        std::mem::take(&mut self.control_actions)
    }

    /// Drains pointer-driven ship movement gathered since the last call,
    /// in event order.
    pub fn take_pointer_actions(&mut self) -> Vec<PointerAction> {
        std::mem::take(&mut self.pointer_actions)
    }

    /// Clears held state when a session (re)starts so stale keys or
    /// pointers from the previous screen cannot leak into the new game.
    pub fn reset_held_state(&mut self) {
        self.key_state = KeyState::default();
        self.move_pointer = None;
        self.shoot_pointer = None;
        self.pointer_actions.clear();
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.kind {
            KeyEventKind::Press => self.handle_key_press(key_event),
            KeyEventKind::Release => self.handle_key_release(key_event.code),
            _ => {}
        }
    }

    fn handle_key_press(&mut self, key_event: KeyEvent) {
        if matches!(
            key_event.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        ) || (key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.control_actions.push(ControlAction::Quit);
            return;
        }

        match key_event.code {
            KeyCode::Enter => self.control_actions.push(ControlAction::Start),
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.control_actions.push(ControlAction::Restart);
            }
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                self.key_state.left = true;
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                self.key_state.right = true;
            }
            KeyCode::Char(' ') => {
                self.key_state.fire = true;
            }
            _ => {}
        }
    }

    fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                self.key_state.left = false;
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                self.key_state.right = false;
            }
            KeyCode::Char(' ') => {
                self.key_state.fire = false;
            }
            _ => {}
        }
    }

    /// Terminal mouse events stand in for touch points: press, drag and
    /// release map onto pointer down/move/up with the button as the
    /// stable identifier. Cell coordinates are translated into logical
    /// surface pixels through the last rendered playfield view.
    fn handle_mouse_event(&mut self, mouse_event: MouseEvent, view: Option<PlayfieldView>) {
        let Some(view) = view else {
            return;
        };
        let surface = view.surface;
        let (x, y) = view.cell_to_surface(mouse_event.column, mouse_event.row);
        match mouse_event.kind {
            MouseEventKind::Down(button) => {
                self.pointer_down(pointer_id(button), x, y, surface);
            }
            MouseEventKind::Drag(button) => self.pointer_moved(pointer_id(button), x),
            MouseEventKind::Up(button) => self.pointer_up(pointer_id(button)),
            _ => {}
        }
    }

    /// A pointer touching down is classified by its vertical position at
    /// that moment and keeps the classification until it lifts.
    pub fn pointer_down(&mut self, id: u64, x: f32, y: f32, surface: Surface) {
        if y > surface.height * MOVE_ZONE_FRACTION {
            if self.move_pointer.is_none() {
                self.move_pointer = Some(MovePointer { id, x });
                self.pointer_actions.push(PointerAction::MoveShipTo(x));
            }
        } else if self.shoot_pointer.is_none() {
            self.shoot_pointer = Some(id);
        }
    }

    /// Only the movement pointer's horizontal coordinate is tracked while
    /// it moves; a shooting pointer dragging around changes nothing.
    pub fn pointer_moved(&mut self, id: u64, x: f32) {
        if let Some(pointer) = &mut self.move_pointer
            && pointer.id == id
        {
            pointer.x = x;
            self.pointer_actions.push(PointerAction::MoveShipTo(x));
        }
    }

    pub fn pointer_up(&mut self, id: u64) {
        if self.move_pointer.is_some_and(|p| p.id == id) {
            self.move_pointer = None;
        }
        if self.shoot_pointer == Some(id) {
            self.shoot_pointer = None;
        }
    }
}

fn pointer_id(button: MouseButton) -> u64 {
    match button {
        MouseButton::Left => 0,
        MouseButton::Right => 1,
        MouseButton::Middle => 2,
    }
}
