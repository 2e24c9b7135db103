use digestform::{FormController, LoadError, ModuleHandle, ModuleStatus, Sha256Processor, load};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};

use crate::dom::FormHost;
use crate::error::WebError;
use crate::form::FormPage;

/// Builder for [`WebApp`].
#[derive(Debug, Default, Clone)]
pub struct WebAppBuilder {
    host_id: Option<String>,
    inject_default_styles: bool,
}

impl WebAppBuilder {
    /// Creates a new builder with default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            host_id: None,
            inject_default_styles: true,
        }
    }

    /// Sets the DOM element identifier that should host the form.
    #[must_use]
    pub fn with_host_id(mut self, id: impl Into<String>) -> Self {
        self.host_id = Some(id.into());
        self
    }

    /// Controls whether the default stylesheet is injected.
    #[must_use]
    pub const fn inject_default_styles(mut self, inject: bool) -> Self {
        self.inject_default_styles = inject;
        self
    }

    /// Finalises the builder and creates a [`WebApp`].
    ///
    /// # Errors
    ///
    /// Returns an error if the DOM host element cannot be found or
    /// initialized.
    pub fn build(self) -> Result<WebApp, WebError> {
        WebApp::new_with_options(self)
    }
}

/// Entry point for running the demo inside the browser.
///
/// Construction resolves the DOM host; [`mount`](WebApp::mount) builds the
/// form and starts the one-shot module load. The page accepts typing right
/// away, but [`submit`](WebApp::submit) is rejected until the load resolves.
#[wasm_bindgen]
#[derive(Debug)]
pub struct WebApp {
    host: FormHost,
    handle: ModuleHandle<Sha256Processor>,
    controller: FormController<Sha256Processor>,
}

impl WebApp {
    fn new_with_options(builder: WebAppBuilder) -> Result<Self, WebError> {
        let host = FormHost::new(builder.host_id.as_deref(), builder.inject_default_styles)?;
        let handle = ModuleHandle::new();
        let controller = FormController::new(handle.clone());
        Ok(Self {
            host,
            handle,
            controller,
        })
    }
}

#[wasm_bindgen]
impl WebApp {
    /// Creates a new [`WebApp`] using the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the DOM host element cannot be found or
    /// initialized.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WebApp, WebError> {
        Self::new_with_options(WebAppBuilder::new())
    }

    /// Mounts the form into the DOM and spawns the one-shot module load.
    ///
    /// # Errors
    ///
    /// Returns an error if DOM operations fail during mounting.
    pub fn mount(&self) -> Result<(), WebError> {
        let page = FormPage::build(&self.host, self.controller.clone())?;
        page.set_status("Загрузка модуля вычислений…");

        let handle = self.handle.clone();
        let status = page.status_element();
        spawn_local(async move {
            load(handle.clone(), instantiate_module()).await;
            match handle.status() {
                ModuleStatus::Ready => {
                    status.set_text_content(Some("Модуль загружен и готов к работе"));
                }
                ModuleStatus::Failed(message) => {
                    status.set_text_content(Some(&format!("Ошибка загрузки модуля: {message}")));
                }
                ModuleStatus::Pending => {}
            }
        });

        Ok(())
    }

    /// Returns true once the computation module is loaded.
    #[must_use]
    pub fn ready(&self) -> bool {
        self.controller.ready()
    }

    /// Submits an input string, returning the computation's output.
    ///
    /// # Errors
    ///
    /// Throws the error's display text: `not ready` before the load
    /// resolves, `empty input` for whitespace-only input, or the
    /// computation's own message.
    pub fn submit(&self, input: &str) -> Result<String, JsValue> {
        self.controller
            .submit(input)
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }
}

/// Instantiates the bundled module after yielding to the event loop once,
/// so the freshly mounted page paints before the handle flips to ready.
async fn instantiate_module() -> Result<Sha256Processor, LoadError> {
    JsFuture::from(js_sys::Promise::resolve(&JsValue::UNDEFINED))
        .await
        .map_err(|err| LoadError::new(format!("{err:?}")))?;
    Ok(Sha256Processor::new())
}
