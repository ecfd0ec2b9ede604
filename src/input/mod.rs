//! Input adapters: translate window and keyboard events into frame loop
//! requests.

pub mod gui;
