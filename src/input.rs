//! Input event abstraction
//!
//! The simulation only ever sees discrete key-down/key-up events drained
//! once per tick; where they come from (a window event pump, a script, the
//! demo autopilot) is the source's business.

use std::collections::VecDeque;

use crate::sim::{GameState, Rect, gap_spans};

/// Steering keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
}

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    Quit,
}

/// Produces the events for one tick. Drained exactly once per tick; no
/// buffering contract beyond that.
pub trait InputSource {
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Pre-scripted event frames, one `poll` per frame. Used by tests and
/// replay-style runs.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.frames.pop_front().unwrap_or_default()
    }
}

/// Steering slack around the target before the pilot releases the key
const DEADBAND: i32 = 4;

/// Demo driver: steers the ball toward the nearest passable gap in the
/// next row down, so the headless binary can play a full run.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoPilot {
    held: Option<Key>,
}

impl AutoPilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events for this tick, given the current state.
    pub fn drive(&mut self, state: &GameState) -> Vec<InputEvent> {
        let rect = &state.player.movable.rect;
        let want = match self.target_x(state) {
            Some(target) if target < rect.center_x() - DEADBAND => Some(Key::Left),
            Some(target) if target > rect.center_x() + DEADBAND => Some(Key::Right),
            _ => None,
        };
        self.shift_to(want)
    }

    /// Center of the closest passable gap in the nearest row below the ball.
    fn target_x(&self, state: &GameState) -> Option<i32> {
        let rect = &state.player.movable.rect;
        let row_y = state
            .platforms
            .iter()
            .filter(|p| !p.is_static && p.movable.rect.y >= rect.bottom())
            .map(|p| p.movable.rect.y)
            .min()?;
        let segments: Vec<Rect> = state
            .platforms
            .iter()
            .filter(|p| !p.is_static && p.movable.rect.y == row_y)
            .map(|p| p.movable.rect)
            .collect();

        gap_spans(&segments, state.row_config.width)
            .into_iter()
            .filter(|(start, end)| end - start > rect.width)
            .min_by_key(|(start, end)| ((start + end) / 2 - rect.center_x()).abs())
            .map(|(start, end)| (start + end) / 2)
    }

    fn shift_to(&mut self, want: Option<Key>) -> Vec<InputEvent> {
        if want == self.held {
            return Vec::new();
        }
        let mut events = Vec::new();
        if let Some(key) = self.held {
            events.push(InputEvent::KeyUp(key));
        }
        if let Some(key) = want {
            events.push(InputEvent::KeyDown(key));
        }
        self.held = want;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::{Platform, RowConfig};

    #[test]
    fn test_scripted_input_drains_in_order() {
        let mut source = ScriptedInput::new(vec![
            vec![InputEvent::KeyDown(Key::Left)],
            vec![],
            vec![InputEvent::KeyUp(Key::Left), InputEvent::Quit],
        ]);

        assert_eq!(source.poll(), vec![InputEvent::KeyDown(Key::Left)]);
        assert_eq!(source.poll(), vec![]);
        assert_eq!(
            source.poll(),
            vec![InputEvent::KeyUp(Key::Left), InputEvent::Quit]
        );
        // Exhausted scripts go quiet
        assert_eq!(source.poll(), vec![]);
    }

    fn state_with_row(segments: &[(i32, i32)]) -> GameState {
        let mut state = GameState::new(11, RowConfig::default()).unwrap();
        state.platforms.retire_scrolled_out(WORLD_HEIGHT);
        for &(start, end) in segments {
            state.platforms.push(Platform::scrolling(Rect::new(
                start,
                400,
                end - start,
                PLATFORM_HEIGHT,
            )));
        }
        state
    }

    #[test]
    fn test_autopilot_steers_toward_gap() {
        // Gap at [300, 360); ball centered at 400 must steer left
        let mut state = state_with_row(&[(0, 300), (360, 800)]);
        let mut pilot = AutoPilot::new();

        let events = pilot.drive(&state);
        assert_eq!(events, vec![InputEvent::KeyDown(Key::Left)]);
        // Holding the same direction emits nothing new
        assert_eq!(pilot.drive(&state), vec![]);

        // Over the gap: release
        state.player.movable.rect.x = 330 - PLAYER_SIZE / 2;
        assert_eq!(pilot.drive(&state), vec![InputEvent::KeyUp(Key::Left)]);
    }

    #[test]
    fn test_autopilot_ignores_impassable_gaps() {
        // Left gap too narrow for the ball; the wide right gap wins even
        // though it is further away
        let mut state = state_with_row(&[(0, 100), (110, 700)]);
        let mut pilot = AutoPilot::new();
        state.player.movable.rect.x = 100;

        let events = pilot.drive(&state);
        assert_eq!(events, vec![InputEvent::KeyDown(Key::Right)]);
    }

    #[test]
    fn test_autopilot_idles_with_no_row_below() {
        let mut state = state_with_row(&[]);
        state.player.movable.rect.y = 500;
        let mut pilot = AutoPilot::new();
        assert_eq!(pilot.drive(&state), vec![]);
    }
}
