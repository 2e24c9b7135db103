//! Construction and wiring of the form itself.

use digestform::{FormController, Sha256Processor};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Element, Event, HtmlButtonElement, HtmlElement, HtmlInputElement,
    MouseEvent,
};

use crate::dom::FormHost;
use crate::error::WebError;

/// Example values offered as one-click buttons under the input field.
/// The two `InputTest*` entries exist to demonstrate the error path.
const EXAMPLE_VALUES: [&str; 5] = [
    "Hello World",
    "Rust WASM",
    "InputTest1",
    "InputTest2",
    "Тестовые данные",
];

const FAILING_EXAMPLES: [&str; 2] = ["InputTest1", "InputTest2"];

/// The mounted form: input, proceed button, result field, and status line.
///
/// All event listeners are wired during [`build`](Self::build) and leaked
/// into the page (`Closure::forget`), so the value itself may be dropped
/// once mounting is done.
#[derive(Debug)]
pub struct FormPage {
    input: HtmlInputElement,
    result: HtmlInputElement,
    proceed: HtmlButtonElement,
    status: Element,
}

impl FormPage {
    /// Builds the form DOM under the host and wires its event handlers.
    pub fn build(
        host: &FormHost,
        controller: FormController<Sha256Processor>,
    ) -> Result<Self, WebError> {
        host.clear()?;

        let form: HtmlElement = host.create_as("form", "digestform")?;

        let input: HtmlInputElement = host.create_as("input", "input-field")?;
        input.set_type("text");
        input.set_placeholder("Введите данные для обработки");
        form.append_child(&input)?;

        form.append_child(&build_examples(host, &input)?.into())?;

        let proceed: HtmlButtonElement = host.create_as("button", "proceed-btn")?;
        proceed.set_type("submit");
        proceed.set_text_content(Some("Обработать"));
        form.append_child(&proceed)?;

        let result: HtmlInputElement = host.create_as("input", "result-field")?;
        result.set_type("text");
        result.set_read_only(true);
        result.set_placeholder("Результат");
        form.append_child(&result)?;

        let status = host.create("p", "status-line")?;
        form.append_child(&status)?;

        host.element().append_child(&form)?;

        let page = Self {
            input,
            result,
            proceed,
            status,
        };
        page.wire(&form, controller)?;
        let _ = page.input.focus();
        Ok(page)
    }

    /// Updates the status line under the form.
    pub fn set_status(&self, message: &str) {
        self.status.set_text_content(Some(message));
    }

    /// Returns a handle to the status line, e.g. for async load callbacks.
    #[must_use]
    pub fn status_element(&self) -> Element {
        self.status.clone()
    }

    fn wire(
        &self,
        form: &HtmlElement,
        controller: FormController<Sha256Processor>,
    ) -> Result<(), WebError> {
        let input = self.input.clone();
        let result = self.result.clone();
        let proceed = self.proceed.clone();
        let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            if proceed.disabled() {
                return;
            }
            // Busy for the duration of the call; also blocks a second
            // submission while one is in flight.
            proceed.set_disabled(true);
            let _ = proceed.class_list().add_1("loading");
            result.set_value("");

            let raw = input.value();
            match controller.submit(&raw) {
                Ok(output) => {
                    result.set_value(&output);
                    flash(&result, "success-flash");
                    web_sys::console::log_1(
                        &format!("Обработка завершена: \"{}\" -> \"{output}\"", raw.trim()).into(),
                    );
                }
                Err(err) => {
                    result.set_value(&format!("Ошибка: {err}"));
                    flash(&result, "error-flash");
                    web_sys::console::log_1(
                        &format!("Ошибка обработки: \"{}\" -> \"{err}\"", raw.trim()).into(),
                    );
                }
            }

            let _ = proceed.class_list().remove_1("loading");
            proceed.set_disabled(false);
        });
        form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
        on_submit.forget();

        let button = self.proceed.clone();
        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            if let Err(err) = spawn_ripple(&button, &event) {
                web_sys::console::warn_1(&JsValue::from(err));
            }
        });
        self.proceed
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();

        Ok(())
    }
}

fn build_examples(host: &FormHost, input: &HtmlInputElement) -> Result<Element, WebError> {
    let container = host.create("div", "examples-container")?;

    let label = host.create("p", "examples-label")?;
    label.set_text_content(Some("Быстрые примеры:"));
    container.append_child(&label)?;

    for example in EXAMPLE_VALUES {
        let button: HtmlButtonElement = host.create_as("button", "example-btn")?;
        button.set_type("button");
        button.set_text_content(Some(example));
        if FAILING_EXAMPLES.contains(&example) {
            button.class_list().add_1("error-example")?;
        }

        let input = input.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            input.set_value(example);
            let _ = input.focus();
        });
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();

        container.append_child(&button)?;
    }

    Ok(container)
}

/// Restarts a one-shot animation class on the element; the class is removed
/// again when the animation ends.
fn flash(element: &Element, class: &str) {
    let list = element.class_list();
    let _ = list.remove_1("success-flash");
    let _ = list.remove_1("error-flash");
    let _ = list.add_1(class);

    let list = list.clone();
    let class = class.to_owned();
    let cleanup = Closure::once(move |_: Event| {
        let _ = list.remove_1(&class);
    });
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let _ = element.add_event_listener_with_callback_and_add_event_listener_options(
        "animationend",
        cleanup.as_ref().unchecked_ref(),
        &options,
    );
    cleanup.forget();
}

/// Grows a transient ripple `span` out of the click position on the button.
fn spawn_ripple(button: &HtmlButtonElement, event: &MouseEvent) -> Result<(), WebError> {
    let document = button.owner_document().ok_or(WebError::DomUnavailable)?;
    let ripple: HtmlElement = document
        .create_element("span")?
        .dyn_into::<HtmlElement>()
        .map_err(|element| WebError::Js(format!("unexpected element type: {element:?}")))?;
    ripple.set_class_name("ripple");

    let rect = button.get_bounding_client_rect();
    let size = rect.width().max(rect.height());
    let x = f64::from(event.client_x()) - rect.left() - size / 2.0;
    let y = f64::from(event.client_y()) - rect.top() - size / 2.0;
    ripple
        .style()
        .set_css_text(&format!("width: {size}px; height: {size}px; left: {x}px; top: {y}px;"));
    button.append_child(&ripple)?;

    let node = ripple.clone();
    let cleanup = Closure::once(move |_: Event| node.remove());
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    ripple.add_event_listener_with_callback_and_add_event_listener_options(
        "animationend",
        cleanup.as_ref().unchecked_ref(),
        &options,
    )?;
    cleanup.forget();

    Ok(())
}
