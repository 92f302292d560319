//! [racevis]'s visualization library.
//!
//! [racevis]: https://github.com/nelusnegur/racevis
//!
//! The library maps race records to pixels with two time scales and
//! writes a self-contained HTML page with the resulting scatter plot.
//!
//! **WARNING**: This library is the racevis's visualization internal library and
//! there are no plans to stabilize it. The API may break at any time without notice.

pub(crate) mod chart;
pub(crate) mod template;

pub mod axis;
pub mod config;
pub mod error;
pub mod layout;
pub mod legend;
pub mod scale;
pub mod tooltip;
