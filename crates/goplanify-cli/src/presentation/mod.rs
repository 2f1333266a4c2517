//! # Presentation Layer
//!
//! User interface logic for the CLI, arranged as an adaptation of the
//! **MVVM (Model-View-ViewModel)** pattern so the trip store and domain types
//! never leak into output code.
//!
//! ## Data Flow
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json --> stdout
//!  (Controller)    (Converter)        (Data)          (Driver)    ==(Text)==> [ View ] --> stdout
//! ```
//!
//! The [`binder`] sits beside this flow for screens that stay mounted: it
//! observes a `TripStore`, re-runs the trip list presenter on every emission
//! and forwards user selections to a `Navigator`.
//!
//! ## Where does code go?
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | `view_models/` |
//! | Derive display data from the domain (wrapping, mapping, labels) | `presenters/` |
//! | Change line layout of text output | `views/` |
//! | Change badge or tip styling | `renderers/` |
//!
//! ## Golden Rules
//!
//! 1. **ViewModels hold raw data.** They implement `Serialize` and contain no
//!    domain types, so JSON output is a stable contract.
//! 2. **Presenters are pure.** Same input, same view model. No I/O and no caching.
//! 3. **Views only lay out.** A view never decides *what* to show, only *how*.

pub mod binder;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel};
