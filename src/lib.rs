//! **outlay** — decides how the connected display outputs should be
//! arranged.
//!
//! Given the detected displays and a few user preferences (priority
//! order, primary name, mirror or side by side), outlay picks a mode and
//! position for every output, the primary display, and a DPI derived from
//! the primary's physical size.
//!
//! # Architecture
//!
//! * [`mode`], [`edid`] and [`display`] form the validated data model.
//! * [`layout`] holds the algorithms, run in order by [`arrange`].
//! * [`traits::Monitors`] abstracts the policy that keeps some displays
//!   off; [`monitors::LidMonitors`] is the lid-aware implementation.
//! * [`inventory`], [`config`] and [`xrandr`] translate to and from the
//!   outside world as plain data.  Nothing here talks to a display server.

pub mod arrange;
pub mod config;
pub mod display;
pub mod edid;
pub mod inventory;
pub mod layout;
pub mod mode;
pub mod monitors;
pub mod traits;
pub mod xrandr;
