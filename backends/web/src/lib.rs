#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Browser front-end for the `digestform` demo.
//!
//! This crate is the wasm glue around the platform-independent core: it
//! builds the form DOM, injects the default stylesheet, wires the event
//! handlers (submit, example buttons, ripple), and runs the one-shot module
//! load at startup. The high-level [`WebApp`] entry point is exported to
//! JavaScript; a page boots the demo with
//!
//! ```js
//! const app = new WebApp();
//! app.mount();
//! ```

mod app;
mod dom;
mod error;
mod form;

pub use app::{WebApp, WebAppBuilder};
pub use dom::FormHost;
pub use error::WebError;
pub use form::FormPage;

use wasm_bindgen::prelude::wasm_bindgen;

/// Installs the panic hook once the module is instantiated. Mounting stays
/// explicit through [`WebApp`].
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}
