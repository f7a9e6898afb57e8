//! Surface d'affichage en mémoire: templates, éléments et conteneur hôte.
//!
//! Les éléments se comportent comme des références DOM: cloner un élément
//! ou interroger un champ donne un accès partagé à la même valeur.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use derive_more::Display;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{INPUT_TEMPLATE_ID, LIST_TEMPLATE_ID};

static ELEMENT_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("Failed to compile element id regex")
});

/// Setup faults of the display surface. None of them can be recovered from
/// at runtime, the page is simply not built.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Template inexistant: {0}")]
    MissingTemplate(String),

    #[error("Élément introuvable: {0}")]
    MissingElement(String),

    #[error("Id d'élément invalide: {0:?}")]
    InvalidId(String),
}

/// A writable entry point of a form.
pub trait InputElement {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}

/// Blocking notification shown to the user.
pub trait Notifier {
    fn alert(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[display("text")]
    Text,
    #[display("number")]
    Number,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldTemplate {
    pub id: String,
    pub label: String,
    pub kind: InputKind,
}

impl FieldTemplate {
    fn new(id: &str, label: &str, kind: InputKind) -> Self {
        Self {
            id: id.to_owned(),
            label: label.to_owned(),
            kind,
        }
    }
}

/// Markup template: a root tag and its ordered entry points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub tag: String,
    #[serde(default)]
    pub fields: Vec<FieldTemplate>,
}

impl Template {
    /// The form collecting a project: title, description and people count.
    pub fn project_input() -> Self {
        Self {
            id: INPUT_TEMPLATE_ID.to_owned(),
            tag: "form".to_owned(),
            fields: vec![
                FieldTemplate::new("title", "Titre", InputKind::Text),
                FieldTemplate::new("description", "Description", InputKind::Text),
                FieldTemplate::new("people", "Personnes", InputKind::Number),
            ],
        }
    }

    pub fn project_list() -> Self {
        Self {
            id: LIST_TEMPLATE_ID.to_owned(),
            tag: "section".to_owned(),
            fields: Vec::new(),
        }
    }

    /// Checks that the template and all its fields carry usable ids.
    pub fn check_ids(&self) -> Result<(), SurfaceError> {
        let ids = std::iter::once(&self.id).chain(self.fields.iter().map(|field| &field.id));
        for id in ids {
            if !ELEMENT_ID_REGEX.is_match(id) {
                return Err(SurfaceError::InvalidId(id.clone()));
            }
        }
        Ok(())
    }

    /// Deep-clones the template content into a fresh, empty element.
    pub fn import(&self) -> ElementNode {
        ElementNode {
            tag: self.tag.clone(),
            id: String::new(),
            inputs: self.fields.iter().map(InputField::from_template).collect(),
        }
    }
}

/// Handle onto an input of an imported element.
#[derive(Debug, Clone)]
pub struct InputField {
    id: String,
    label: String,
    kind: InputKind,
    value: Rc<RefCell<String>>,
}

impl InputField {
    fn from_template(field: &FieldTemplate) -> Self {
        Self {
            id: field.id.clone(),
            label: field.label.clone(),
            kind: field.kind,
            value: Rc::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }
}

impl InputElement for InputField {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        *self.value.borrow_mut() = value.to_owned();
    }
}

/// An element imported from a template.
#[derive(Debug, Clone)]
pub struct ElementNode {
    tag: String,
    id: String,
    inputs: Vec<InputField>,
}

impl ElementNode {
    pub fn id(&self) -> &str {
        &self.id
    }

    #[cfg(test)]
    pub(crate) fn tag(&self) -> &str {
        &self.tag
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn inputs(&self) -> &[InputField] {
        &self.inputs
    }

    /// Looks up an input by id selector (`#title`).
    pub fn query_selector(&self, selector: &str) -> Option<InputField> {
        let id = selector.strip_prefix('#')?;
        self.inputs.iter().find(|input| input.id == id).cloned()
    }
}

impl fmt::Display for ElementNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<{} id=\"{}\">", self.tag, self.id)?;
        for input in &self.inputs {
            writeln!(
                f,
                "  <input id=\"{}\" type=\"{}\" value=\"{}\"> {}",
                input.id,
                input.kind,
                input.value(),
                input.label
            )?;
        }
        write!(f, "</{}>", self.tag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    AfterBegin,
    BeforeEnd,
}

/// The container region the page is mounted into.
#[derive(Debug, Clone)]
pub struct Host {
    id: String,
    children: VecDeque<ElementNode>,
}

impl Host {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: VecDeque::new(),
        }
    }

    pub fn insert_adjacent_element(&mut self, position: InsertPosition, element: &ElementNode) {
        match position {
            InsertPosition::AfterBegin => self.children.push_front(element.clone()),
            InsertPosition::BeforeEnd => self.children.push_back(element.clone()),
        }
    }

    pub fn children(&self) -> impl Iterator<Item = &ElementNode> + '_ {
        self.children.iter()
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<&ElementNode> {
        self.children.iter().find(|child| child.id() == id)
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<div id=\"{}\">", self.id)?;
        for child in &self.children {
            writeln!(f, "{child}")?;
        }
        write!(f, "</div>")
    }
}
