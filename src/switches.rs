use heapless::Vec;

use crate::debounce::Debouncer;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchState {
    Pressed,
    Released,
    Idle,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PortEvent {
    Switch(u8, SwitchState),
}

/// Tracks the last state delivered for a single momentary switch.
#[derive(Debug, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct MomentarySwitch {
    state: SwitchState,
    bit: u8,
}

impl MomentarySwitch {
    fn new(bit: u8) -> Self {
        Self {
            state: SwitchState::Idle,
            bit,
        }
    }

    fn update(&mut self, s: SwitchState) -> SwitchState {
        self.state = s;
        self.state
    }
}

/// Turns the debounced port masks into per-switch edge events.
///
/// `pins` selects the bits of interest at construction; the other bits are
/// still debounced but never produce events.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Switches<const DEPTH: usize> {
    debouncer: Debouncer<DEPTH>,
    switches: [MomentarySwitch; 8],
    pins: u8,
}

impl<const DEPTH: usize> Switches<DEPTH> {
    pub fn new(pull_config: u8, pins: u8) -> Self {
        Self {
            debouncer: Debouncer::new(pull_config),
            switches: [
                MomentarySwitch::new(0),
                MomentarySwitch::new(1),
                MomentarySwitch::new(2),
                MomentarySwitch::new(3),
                MomentarySwitch::new(4),
                MomentarySwitch::new(5),
                MomentarySwitch::new(6),
                MomentarySwitch::new(7),
            ],
            pins,
        }
    }

    /// Feed one raw port sample. Returns whether any watched switch changed
    /// debounced state.
    pub fn scan(&mut self, raw: u8) -> bool {
        self.debouncer.process(raw);
        self.debouncer.changed() & self.pins != 0
    }

    /// Calls `f` once per watched switch that changed on the last scan, in
    /// bit order.
    pub fn update<F>(&mut self, mut f: F)
    where
        F: FnMut(PortEvent),
    {
        let pressed = self.debouncer.pressed(self.pins);
        let released = self.debouncer.released(self.pins);
        self.switches.iter_mut().for_each(|sw| {
            let pin = 1u8 << sw.bit;
            if pressed & pin != 0 {
                f(PortEvent::Switch(sw.bit, sw.update(SwitchState::Pressed)));
            } else if released & pin != 0 {
                f(PortEvent::Switch(sw.bit, sw.update(SwitchState::Released)));
            }
        });
    }

    /// Scan and collect the resulting events.
    pub fn poll(&mut self, raw: u8) -> Vec<PortEvent, 8> {
        let mut events = Vec::new();
        if self.scan(raw) {
            self.update(|ev| {
                events.push(ev).ok();
            });
        }
        events
    }

    /// Last state delivered for `bit`. Switches that have not produced an
    /// edge yet report [`SwitchState::Idle`].
    pub fn state_of(&self, bit: u8) -> SwitchState {
        self.switches[bit as usize].state
    }

    /// Debounced state of the port, with a set bit per held switch.
    pub fn current_state(&self) -> u8 {
        self.debouncer.current_state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_press_then_release() {
        let mut sw: Switches<4> = Switches::new(0xFF, 0xFF);
        for _ in 0..3 {
            assert!(sw.poll(0xFE).is_empty());
        }
        let events = sw.poll(0xFE);
        assert_eq!(
            events.as_slice(),
            &[PortEvent::Switch(0, SwitchState::Pressed)]
        );
        assert_eq!(sw.state_of(0), SwitchState::Pressed);
        assert_eq!(sw.current_state(), 0x01);

        let events = sw.poll(0xFF);
        assert_eq!(
            events.as_slice(),
            &[PortEvent::Switch(0, SwitchState::Released)]
        );
        assert_eq!(sw.state_of(0), SwitchState::Released);
        assert_eq!(sw.current_state(), 0x00);
    }

    #[test]
    fn unwatched_pins_stay_silent() {
        let mut sw: Switches<4> = Switches::new(0xFF, 0x02);
        for _ in 0..3 {
            assert!(sw.poll(0xFC).is_empty());
        }
        let events = sw.poll(0xFC);
        assert_eq!(
            events.as_slice(),
            &[PortEvent::Switch(1, SwitchState::Pressed)]
        );
        assert_eq!(sw.state_of(0), SwitchState::Idle);
    }

    #[test]
    fn events_come_in_bit_order() {
        // Pulled down, so a high sample means a held switch.
        let mut sw: Switches<2> = Switches::new(0x00, 0xFF);
        assert!(sw.poll(0x81).is_empty());
        let events = sw.poll(0x81);
        assert_eq!(
            events.as_slice(),
            &[
                PortEvent::Switch(0, SwitchState::Pressed),
                PortEvent::Switch(7, SwitchState::Pressed),
            ]
        );
    }

    #[test]
    fn scan_reports_watched_changes() {
        let mut sw: Switches<2> = Switches::new(0xFF, 0x01);
        assert!(!sw.scan(0xFE));
        assert!(sw.scan(0xFE));
        assert!(!sw.scan(0xFE));
    }
}
