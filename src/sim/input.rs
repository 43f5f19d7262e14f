//! Input events and the view-state fold
//!
//! Platform callbacks only enqueue events; the frame loop drains the queue
//! once per frame, before composing, so ordering is deterministic and the
//! whole path is testable without a window.

use std::collections::VecDeque;

use super::state::{SimState, ViewState, Viewport};
use crate::consts::{MIN_ZOOM, ZOOM_STEP};

/// Delay between enabling night mode and the first shooting star
pub const FIRST_STAR_DELAY: f32 = 2.0;

/// A pressed key, reduced to what the scene cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
    Other,
}

/// One user input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Key press
    Key(Key),
    /// Pointer motion while a button is held (window pixels)
    Drag { x: f32, y: f32 },
    /// Window resized (physical pixels)
    Resize { width: u32, height: u32 },
}

/// Side effect of a state transition, applied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    CreditsDismissed,
    NightEnabled,
    NightDisabled,
    Exit,
}

/// Whether the frame loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

impl ViewState {
    /// Fold one event into the next view state
    pub fn apply(self, event: &InputEvent) -> (ViewState, Option<Effect>) {
        match *event {
            InputEvent::Key(key) => self.apply_key(key),
            InputEvent::Drag { x, .. } => {
                if self.show_credits {
                    return (self, None);
                }
                let mut next = self;
                next.umbrella.x = self.drag_to_world_x(x);
                (next, None)
            }
            InputEvent::Resize { width, height } => {
                let mut next = self;
                next.viewport = Viewport::new(width, height);
                (next, None)
            }
        }
    }

    fn apply_key(self, key: Key) -> (ViewState, Option<Effect>) {
        let mut next = self;

        // Any key leaves the credits screen, and does nothing else
        if self.show_credits {
            next.show_credits = false;
            return (next, Some(Effect::CreditsDismissed));
        }

        match key {
            Key::Char('n') | Key::Char('N') => {
                next.night_mode = !self.night_mode;
                let effect = if next.night_mode {
                    Effect::NightEnabled
                } else {
                    Effect::NightDisabled
                };
                (next, Some(effect))
            }
            Key::Char('+') => {
                next.zoom_factor = (self.zoom_factor - ZOOM_STEP).max(MIN_ZOOM);
                (next, None)
            }
            Key::Char('-') => {
                next.zoom_factor = self.zoom_factor + ZOOM_STEP;
                (next, None)
            }
            Key::Escape => (next, Some(Effect::Exit)),
            _ => (next, None),
        }
    }
}

/// FIFO of pending input events
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: VecDeque<InputEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn pop(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }
}

/// Apply every queued event in order; stops early on exit
pub fn drain_events(state: &mut SimState, queue: &mut EventQueue, now: f32) -> Flow {
    while let Some(event) = queue.pop() {
        let (next, effect) = state.view.apply(&event);
        if next.zoom_factor != state.view.zoom_factor {
            log::debug!("Zoom: {:.2} -> {:.2}", state.view.zoom_factor, next.zoom_factor);
        }
        if next.viewport != state.view.viewport {
            log::info!("Resized to {}x{}", next.viewport.width, next.viewport.height);
        }
        state.view = next;

        match effect {
            Some(Effect::CreditsDismissed) => log::info!("Credits dismissed"),
            Some(Effect::NightEnabled) => {
                log::info!("Night mode on");
                state.shooting_star.schedule(now + FIRST_STAR_DELAY);
            }
            Some(Effect::NightDisabled) => {
                log::info!("Night mode off");
                state.shooting_star.reset();
            }
            Some(Effect::Exit) => {
                log::info!("Exit requested");
                queue.events.clear();
                return Flow::Exit;
            }
            None => {}
        }
    }
    Flow::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    fn live() -> ViewState {
        ViewState {
            show_credits: false,
            ..ViewState::default()
        }
    }

    fn key(c: char) -> InputEvent {
        InputEvent::Key(Key::Char(c))
    }

    #[test]
    fn test_first_key_only_dismisses_credits() {
        let (view, effect) = ViewState::default().apply(&key('n'));
        assert!(!view.show_credits);
        assert!(!view.night_mode, "the dismissing key is not also a command");
        assert_eq!(effect, Some(Effect::CreditsDismissed));
    }

    #[test]
    fn test_escape_on_credits_only_dismisses() {
        let (view, effect) = ViewState::default().apply(&InputEvent::Key(Key::Escape));
        assert!(!view.show_credits);
        assert_eq!(effect, Some(Effect::CreditsDismissed));
    }

    #[test]
    fn test_credits_never_return() {
        let mut view = ViewState::default();
        for c in ['a', 'n', '+', '-', 'N', 'x'] {
            view = view.apply(&key(c)).0;
            assert!(!view.show_credits);
        }
    }

    #[test]
    fn test_night_toggle_both_cases() {
        let (view, effect) = live().apply(&key('N'));
        assert!(view.night_mode);
        assert_eq!(effect, Some(Effect::NightEnabled));
        let (view, effect) = view.apply(&key('n'));
        assert!(!view.night_mode);
        assert_eq!(effect, Some(Effect::NightDisabled));
    }

    #[test]
    fn test_zoom_in_clamps() {
        let mut view = live();
        for _ in 0..20 {
            view = view.apply(&key('+')).0;
        }
        assert_eq!(view.zoom_factor, MIN_ZOOM);
    }

    #[test]
    fn test_zoom_out_unbounded() {
        let mut view = live();
        for _ in 0..50 {
            view = view.apply(&key('-')).0;
        }
        assert!((view.zoom_factor - 6.0).abs() < 1e-3);
    }

    #[test]
    fn test_drag_ignored_on_credits() {
        let (view, _) = ViewState::default().apply(&InputEvent::Drag { x: 10.0, y: 0.0 });
        assert_eq!(view.umbrella.x, 700.0);
    }

    #[test]
    fn test_resize_clamps() {
        let (view, effect) = live().apply(&InputEvent::Resize {
            width: 0,
            height: 300,
        });
        assert_eq!(view.viewport, Viewport::new(1, 300));
        assert_eq!(effect, None);
    }

    #[test]
    fn test_drain_schedules_first_star() {
        let mut state = SimState::new(&Settings::default(), 7);
        let mut queue = EventQueue::new();
        queue.push(key('a'));
        queue.push(key('n'));
        assert_eq!(drain_events(&mut state, &mut queue, 10.0), Flow::Continue);
        assert!(queue.is_empty());
        assert!(state.view.night_mode);
        assert_eq!(state.shooting_star.next_spawn_time(), 12.0);
    }

    #[test]
    fn test_drain_stops_on_escape() {
        let mut state = SimState::new(&Settings::default(), 7);
        let mut queue = EventQueue::new();
        queue.push(key('a'));
        queue.push(InputEvent::Key(Key::Escape));
        queue.push(key('n'));
        assert_eq!(drain_events(&mut state, &mut queue, 0.0), Flow::Exit);
        assert!(!state.view.night_mode);
        assert!(queue.is_empty());
    }
}
