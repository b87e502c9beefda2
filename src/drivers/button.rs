//! Polled, per-button debouncer for the three mood/page buttons.
//!
//! ## Hardware
//!
//! Active-low momentary switches on BCM 16/20/21 with the SoC pull-ups
//! enabled.  The hardware adapter inverts the level, so this module only
//! ever sees "pressed" / "released".
//!
//! ## Debounce rule
//!
//! | Transition          | Condition                              | Result             |
//! |---------------------|----------------------------------------|--------------------|
//! | Released → Pressed  | ≥ `debounce_ms` since this button fired | fire, go Pressed   |
//! | Released → Pressed  | inside the quiet period                | drop, go Pressed   |
//! | Pressed → Released  | always                                 | go Released        |
//!
//! A button must be released before it can fire again; there is no queue.

/// Physical button position, left to right on the enclosure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    One,
    Two,
    Three,
}

impl ButtonId {
    pub const ALL: [Self; 3] = [Self::One, Self::Two, Self::Three];

    pub fn index(self) -> usize {
        self as usize
    }

    /// 1-based number as printed on the enclosure.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonState {
    Released,
    Pressed,
}

#[derive(Debug, Clone)]
pub struct Debouncer {
    state: ButtonState,
    last_fire_ms: Option<u64>,
    debounce_ms: u64,
}

impl Debouncer {
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            state: ButtonState::Released,
            last_fire_ms: None,
            debounce_ms,
        }
    }

    /// Feed one sample.  Returns `true` on the tick the press is accepted.
    pub fn update(&mut self, pressed: bool, now_ms: u64) -> bool {
        match (self.state, pressed) {
            (ButtonState::Released, true) => {
                self.state = ButtonState::Pressed;
                let quiet = match self.last_fire_ms {
                    Some(last) => now_ms.saturating_sub(last) >= self.debounce_ms,
                    None => true,
                };
                if quiet {
                    self.last_fire_ms = Some(now_ms);
                }
                quiet
            }
            (ButtonState::Pressed, false) => {
                self.state = ButtonState::Released;
                false
            }
            _ => false,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.state == ButtonState::Pressed
    }
}

/// The three buttons, debounced independently.
#[derive(Debug, Clone)]
pub struct ButtonBank {
    buttons: [Debouncer; 3],
}

impl ButtonBank {
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            buttons: [
                Debouncer::new(debounce_ms),
                Debouncer::new(debounce_ms),
                Debouncer::new(debounce_ms),
            ],
        }
    }

    pub fn update(&mut self, button: ButtonId, pressed: bool, now_ms: u64) -> bool {
        self.buttons[button.index()].update(pressed, now_ms)
    }
}
