//! Reporting and plotting for the Radix root finders.
//!
//! This crate provides [`Observer`] implementations and plot data that work
//! across every solver in `radix-solvers`.
//!
//! # Modules
//!
//! - [`traits`]: capability traits records implement ([`TableRow`], [`Plottable`])
//!
//! # Features
//!
//! - `plot`: enables [`Figure::show`] for viewing a run in an egui window.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: radix_core::Observer
//! [`TableRow`]: traits::TableRow
//! [`Plottable`]: traits::Plottable

pub mod traits;

mod figure;
mod report;

#[cfg(feature = "plot")]
mod plot;

pub use figure::{Figure, MARGIN, SAMPLES};
pub use report::{Reporter, render};
