use std::sync::OnceLock;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::WebError;

/// The DOM element hosting the form, plus its owning document.
#[derive(Debug, Clone)]
pub struct FormHost {
    document: Document,
    element: Element,
}

impl FormHost {
    /// Resolves the host element and optionally injects the default styles.
    ///
    /// With an id, the existing element is used; without one, a `div` with
    /// id `digestform-root` is appended to the body.
    pub fn new(host_id: Option<&str>, inject_styles: bool) -> Result<Self, WebError> {
        let window: Window = web_sys::window().ok_or(WebError::DomUnavailable)?;
        let document: Document = window.document().ok_or(WebError::DomUnavailable)?;

        if inject_styles {
            inject_stylesheet(&document)?;
        }

        let element = if let Some(id) = host_id {
            document
                .get_element_by_id(id)
                .ok_or_else(|| WebError::HostNotFound(id.to_string()))?
        } else {
            let body = document.body().ok_or(WebError::DomUnavailable)?;
            let host = document.create_element("div")?;
            host.set_id("digestform-root");
            body.append_child(&host)?;
            host
        };

        Ok(Self { document, element })
    }

    /// Returns the element the form mounts into.
    #[must_use]
    pub const fn element(&self) -> &Element {
        &self.element
    }

    /// Returns the owning document.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Removes every child of the host element.
    pub fn clear(&self) -> Result<(), WebError> {
        while let Some(child) = self.element.first_child() {
            self.element.remove_child(&child)?;
        }
        Ok(())
    }

    /// Creates an element of the given tag with a class already set.
    pub fn create(&self, tag: &str, class: &str) -> Result<Element, WebError> {
        let element = self.document.create_element(tag)?;
        element.set_class_name(class);
        Ok(element)
    }

    /// Like [`create`](Self::create), but cast to a concrete element type.
    pub fn create_as<T: JsCast>(&self, tag: &str, class: &str) -> Result<T, WebError> {
        self.create(tag, class)?
            .dyn_into::<T>()
            .map_err(|element| WebError::Js(format!("unexpected element type for <{tag}>: {element:?}")))
    }

    /// Converts the host element into an [`HtmlElement`].
    pub fn as_html_element(&self) -> Result<HtmlElement, WebError> {
        self.element
            .clone()
            .dyn_into::<HtmlElement>()
            .map_err(|element| WebError::Js(format!("host is not an HtmlElement: {element:?}")))
    }
}

fn inject_stylesheet(document: &Document) -> Result<(), WebError> {
    static STYLE_CACHE: OnceLock<Result<(), WebError>> = OnceLock::new();

    if document.get_element_by_id("digestform-styles").is_some() {
        return Ok(());
    }

    STYLE_CACHE
        .get_or_init(|| {
            let style = document.create_element("style")?;
            style.set_id("digestform-styles");
            style.set_inner_html(include_str!("../styles/default.css"));

            if let Some(head) = document.head() {
                head.append_child(&style)?;
            } else if let Some(body) = document.body() {
                body.prepend_with_node_1(&style)?;
            } else {
                return Err(WebError::DomUnavailable);
            }

            Ok(())
        })
        .clone()
}
