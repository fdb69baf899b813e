//! CRISP Schedule Client
//!
//! Client-side controller for the CRISP interview scheduling service. The
//! scheduling algorithm itself runs remotely; this crate covers everything
//! around it: tab/view-state management, input validation, request
//! orchestration with a loading-state lifecycle, and projection of the
//! returned schedule, conflicts, and raw payload onto a display surface.
//!
//! # Modules
//!
//! - `client`: SchedulingClient for the schedule generation endpoint
//! - `controller`: ScheduleController driving the submit cycle
//! - `render`: projections from a raw result onto the surface
//! - `services`: time encoding and advisory input validation
//! - `surface`: the RenderSurface display abstraction
//! - `view`: active-tab state for both tab groups
//!
//! The display is abstracted behind the [`surface::RenderSurface`] trait, so
//! the grouping, sorting, formatting, and state-machine logic is testable
//! without any real display.

pub mod client;
pub mod controller;
pub mod error;
pub mod models;
pub mod render;
pub mod services;
pub mod surface;
pub mod view;

#[cfg(test)]
pub mod surface_mock;

// Re-export the main types for ease of use
pub use client::SchedulingClient;
pub use controller::ScheduleController;
pub use error::SubmitError;
pub use surface::{FormField, Region, RenderSurface, TerminalSurface};
pub use view::{TabGroup, ViewState};
