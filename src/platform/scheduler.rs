//! Named interval timers with deterministic teardown
//!
//! The run owns exactly two repeating timers: the logic tick (variable
//! period) and the cosmetic ground scroll. Each lives in a named slot;
//! starting a slot stops the previous occupant first, and dropping the
//! scheduler clears everything, so no handle can leak across a phase
//! transition.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerSlot {
    /// Obstacle/collision tick, period = current `tick_period_ms`
    GameTick = 0,
    /// ~60 Hz visual ground scroll, never touches game state
    GroundScroll = 1,
}

const SLOT_COUNT: usize = 2;

type Slot = Option<(i32, Closure<dyn FnMut()>)>;

#[derive(Default)]
pub struct Scheduler {
    slots: [Slot; SLOT_COUNT],
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) a repeating timer in the given slot. The closure
    /// stays alive exactly as long as the interval does.
    pub fn start_interval(&mut self, slot: TimerSlot, period_ms: i32, f: impl FnMut() + 'static) {
        self.stop(slot);

        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut()>::new(f);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms,
        ) {
            Ok(id) => self.slots[slot as usize] = Some((id, closure)),
            Err(_) => log::warn!("failed to start {:?} interval", slot),
        }
    }

    pub fn stop(&mut self, slot: TimerSlot) {
        if let Some((id, _closure)) = self.slots[slot as usize].take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(id);
            }
        }
    }

    pub fn stop_all(&mut self) {
        self.stop(TimerSlot::GameTick);
        self.stop(TimerSlot::GroundScroll);
    }

    pub fn is_active(&self, slot: TimerSlot) -> bool {
        self.slots[slot as usize].is_some()
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.stop_all();
    }
}
