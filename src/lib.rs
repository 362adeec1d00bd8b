//! Debouncing for up to eight switches sampled together as one port byte.
//!
//! The application reads its port at a fixed interval, from a timer tick or
//! a polling loop, and feeds each raw byte to [`Debouncer::process`]. The
//! most recent `DEPTH` samples form a sliding window per bit: a switch only
//! reads as pressed once every sample in the window agrees it is down, and
//! a single at-rest sample reads it as released again. Contact bounce never
//! holds a level for the whole window, so it is filtered out.
//!
//! Pull direction is configured per bit, so pulled-up and pulled-down
//! inputs can share one port. The sample interval and pin wiring are
//! external concerns; only raw bytes cross this crate's boundary, and it
//! performs no I/O and never allocates.
//!
//! ```
//! use button_debounce::Debouncer;
//!
//! // All eight inputs pulled up, so a held switch reads low.
//! let mut debouncer: Debouncer<4> = Debouncer::new(0xFF);
//! for _ in 0..4 {
//!     debouncer.process(0xFE);
//! }
//! assert_eq!(debouncer.pressed(0xFF), 0x01);
//! assert_eq!(debouncer.current_state(), 0x01);
//!
//! // One clean high sample releases it again.
//! debouncer.process(0xFF);
//! assert_eq!(debouncer.released(0xFF), 0x01);
//! ```
//!
//! [`Switches`] layers per-switch edge events on top of the mask queries
//! for callers that dispatch events rather than poll masks.
#![cfg_attr(not(test), no_std)]

pub mod debounce;
pub mod switches;

pub use debounce::{Debouncer, DEFAULT_DEPTH};
pub use switches::{PortEvent, SwitchState, Switches};
