//! Domain models for PCB designs.
//!
//! # Core Concepts
//!
//! - [`Design`]: the aggregate root. A named [`Board`] plus the issues from its
//!   most recent validation run. Designs are stored and replaced whole.
//! - [`Board`]: outline polygon, [`Component`]s and [`Net`]s.
//! - [`Net`]: a group of endpoints (`"R1.1"`, `"LED1.anode"`) that are wired
//!   together.
//! - [`Issue`]: a DRC finding. Derived data, regenerated on every run.
//! - [`Suggestion`]: an advisory hint from the assistant.

mod board;
mod component;
mod design;
mod issue;
mod net;
mod suggestion;

pub use board::*;
pub use component::*;
pub use design::*;
pub use issue::*;
pub use net::*;
pub use suggestion::*;
