//! Liaison avec un vrai DOM via wasm-bindgen

use std::rc::Rc;

use log::warn;
use strum::IntoEnumIterator;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlFormElement, HtmlInputElement, HtmlTemplateElement, Window};

use crate::consts::{
    DESCRIPTION_SELECTOR, FORM_ELEMENT_ID, HOST_ID, INPUT_TEMPLATE_ID, LIST_TEMPLATE_ID,
    PEOPLE_SELECTOR, TITLE_SELECTOR,
};
use crate::form::ProjectInput;
use crate::lists::ProjectStatus;
use crate::surface::{InputElement, Notifier, SurfaceError};

impl InputElement for HtmlInputElement {
    fn value(&self) -> String {
        HtmlInputElement::value(self)
    }

    fn set_value(&self, value: &str) {
        HtmlInputElement::set_value(self, value)
    }
}

impl Notifier for Window {
    fn alert(&self, message: &str) {
        if let Err(error) = self.alert_with_message(message) {
            warn!("Alert could not be shown: {error:?}");
        }
    }
}

impl From<SurfaceError> for JsValue {
    fn from(error: SurfaceError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

fn get_element_by_id(document: &Document, id: &str) -> Result<Element, SurfaceError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SurfaceError::MissingElement(format!("#{id}")))
}

fn import_template(document: &Document, id: &str) -> Result<Element, JsValue> {
    let template: HtmlTemplateElement = document
        .get_element_by_id(id)
        .ok_or_else(|| SurfaceError::MissingTemplate(id.to_owned()))?
        .dyn_into()?;

    let imported = document.import_node_with_deep(&template.content(), true)?;
    let fragment: web_sys::DocumentFragment = imported.dyn_into()?;
    let element = fragment
        .first_element_child()
        .ok_or_else(|| SurfaceError::MissingElement(format!("#{id} > *")))?;
    Ok(element)
}

fn query_input(form: &HtmlFormElement, selector: &str) -> Result<HtmlInputElement, JsValue> {
    let input = form
        .query_selector(selector)?
        .ok_or_else(|| SurfaceError::MissingElement(selector.to_owned()))?
        .dyn_into()?;
    Ok(input)
}

/// Mounts the form and both project lists into `#app`.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let host = get_element_by_id(&document, HOST_ID)?;

    let form: HtmlFormElement = import_template(&document, INPUT_TEMPLATE_ID)?.dyn_into()?;
    form.set_id(FORM_ELEMENT_ID);

    let controller = Rc::new(ProjectInput::new(
        query_input(&form, TITLE_SELECTOR)?,
        query_input(&form, DESCRIPTION_SELECTOR)?,
        query_input(&form, PEOPLE_SELECTOR)?,
        window,
    ));

    // The closure keeps the controller alive for the lifetime of the page
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        if let Some(draft) = controller.submit_handler() {
            web_sys::console::log_3(
                &JsValue::from_str(&draft.title),
                &JsValue::from_str(&draft.description),
                &JsValue::from_f64(draft.people),
            );
        }
    });
    form.add_event_listener_with_callback("submit", handler.as_ref().unchecked_ref())?;
    handler.forget();

    host.insert_adjacent_element("afterbegin", &form)?;

    for status in ProjectStatus::iter() {
        let list = import_template(&document, LIST_TEMPLATE_ID)?;
        list.set_id(&format!("{status}-projects"));
        host.insert_adjacent_element("beforeend", &list)?;
    }

    Ok(())
}
