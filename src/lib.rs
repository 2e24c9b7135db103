#![warn(missing_docs)]
#![warn(clippy::pedantic)]

//! Platform-independent core of the `digestform` demo.
//!
//! The demo is a single form: text goes in, the output of one computation
//! module comes back out. This crate holds everything that does not touch
//! the DOM, so it can be tested natively:
//!
//! - [`Processor`], the seam trait for the computation module, and
//!   [`Sha256Processor`], the bundled implementation.
//! - [`ModuleHandle`], the write-once slot the one-shot startup [`load`]
//!   resolves into.
//! - [`FormController`], which checks the submission preconditions and
//!   forwards trimmed input to the module.
//!
//! The browser glue lives in the `digestform-web` crate under
//! `backends/web`.

mod controller;
mod error;
mod loader;
mod processor;

pub use controller::FormController;
pub use error::{LoadError, SubmitError};
pub use loader::{ModuleHandle, ModuleStatus, load};
pub use processor::{DigestError, Processor, Sha256Processor};
