//! Formulaire de saisie d'un projet et cycle de soumission

use derive_more::Display;
use log::{info, warn};
use thiserror::Error;

use crate::consts::{
    DESCRIPTION_MIN_LENGTH, DESCRIPTION_SELECTOR, FORM_ELEMENT_ID, INPUT_TEMPLATE_ID,
    INVALID_INPUT_MESSAGE, PEOPLE_MIN, PEOPLE_SELECTOR, TITLE_SELECTOR,
};
use crate::surface::{
    ElementNode, Host, InputElement, InputField, InsertPosition, Notifier, SurfaceError,
};
use crate::templates::Templates;
use crate::utils::input_validation::{parse_number, validate, Validatable};

/// The three entry points of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Field {
    #[display("title")]
    Title,
    #[display("description")]
    Description,
    #[display("people")]
    People,
}

/// A submission rejected by the validator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", INVALID_INPUT_MESSAGE)]
pub struct ValidationFailure {
    pub fields: Vec<Field>,
}

/// The tuple emitted by a successful submission
#[derive(Debug, Clone, PartialEq, Display)]
#[display("{title} {description} {people}")]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: f64,
}

/// Owns the title, description and people inputs and handles submission.
///
/// The handler only needs `&self`, so the controller can be shared with an
/// event callback behind an `Rc`.
pub struct ProjectInput<I, N> {
    title: I,
    description: I,
    people: I,
    notifier: N,
}

impl<I: InputElement, N: Notifier> ProjectInput<I, N> {
    pub fn new(title: I, description: I, people: I, notifier: N) -> Self {
        Self {
            title,
            description,
            people,
            notifier,
        }
    }

    pub fn field(&self, field: Field) -> &I {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::People => &self.people,
        }
    }

    #[cfg(test)]
    pub(crate) fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Reads the inputs and checks each one against its constraints.
    pub fn gather_user_input(&self) -> Result<ProjectDraft, ValidationFailure> {
        let entered_title = self.title.value();
        let entered_description = self.description.value();
        let entered_people = parse_number(&self.people.value());

        let checks = [
            (Field::Title, Validatable::new(entered_title.as_str()).required()),
            (
                Field::Description,
                Validatable::new(entered_description.as_str())
                    .required()
                    .min_length(DESCRIPTION_MIN_LENGTH),
            ),
            (Field::People, Validatable::new(entered_people).required().min(PEOPLE_MIN)),
        ];

        let fields: Vec<Field> = checks
            .iter()
            .filter(|(_, validatable)| !validate(validatable))
            .map(|(field, _)| *field)
            .collect();

        if !fields.is_empty() {
            return Err(ValidationFailure { fields });
        }

        Ok(ProjectDraft {
            title: entered_title,
            description: entered_description,
            people: entered_people,
        })
    }

    pub fn clear_inputs(&self) {
        self.title.set_value("");
        self.description.set_value("");
        self.people.set_value("");
    }

    /// Handles a submit event. Invalid input raises an alert and is left in
    /// place; valid input is logged, cleared and returned.
    pub fn submit_handler(&self) -> Option<ProjectDraft> {
        match self.gather_user_input() {
            Ok(draft) => {
                info!("{draft}");
                self.clear_inputs();
                Some(draft)
            }
            Err(failure) => {
                warn!("Rejected submission, invalid fields: {:?}", failure.fields);
                self.notifier.alert(&failure.to_string());
                None
            }
        }
    }
}

impl<N: Notifier> ProjectInput<InputField, N> {
    /// Builds the form from its template and mounts it at the top of `host`.
    pub fn attach(templates: &Templates, host: &mut Host, notifier: N) -> Result<Self, SurfaceError> {
        let mut element = templates.get_element_by_id(INPUT_TEMPLATE_ID)?.import();
        element.set_id(FORM_ELEMENT_ID);

        let title = query(&element, TITLE_SELECTOR)?;
        let description = query(&element, DESCRIPTION_SELECTOR)?;
        let people = query(&element, PEOPLE_SELECTOR)?;

        host.insert_adjacent_element(InsertPosition::AfterBegin, &element);
        Ok(Self::new(title, description, people, notifier))
    }

    pub fn inputs(&self) -> [&InputField; 3] {
        [&self.title, &self.description, &self.people]
    }
}

fn query(element: &ElementNode, selector: &str) -> Result<InputField, SurfaceError> {
    element
        .query_selector(selector)
        .ok_or_else(|| SurfaceError::MissingElement(selector.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::HOST_ID;
    use crate::surface::Template;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNotifier(RefCell<Vec<String>>);

    impl Notifier for RecordingNotifier {
        fn alert(&self, message: &str) {
            self.0.borrow_mut().push(message.to_owned());
        }
    }

    fn mounted() -> (ProjectInput<InputField, RecordingNotifier>, Host) {
        let mut host = Host::new(HOST_ID);
        let form = ProjectInput::attach(&Templates::default(), &mut host, RecordingNotifier::default())
            .unwrap();
        (form, host)
    }

    fn fill(form: &ProjectInput<InputField, RecordingNotifier>, title: &str, description: &str, people: &str) {
        form.field(Field::Title).set_value(title);
        form.field(Field::Description).set_value(description);
        form.field(Field::People).set_value(people);
    }

    fn values(form: &ProjectInput<InputField, RecordingNotifier>) -> Vec<String> {
        form.inputs().iter().map(|input| input.value()).collect()
    }

    mod submit_tests {
        use super::*;

        #[test]
        fn test_valid_submission_emits_and_clears() {
            let (form, _host) = mounted();
            fill(&form, "Build App", "A short app", "3");

            let draft = form.submit_handler().unwrap();
            assert_eq!(
                draft,
                ProjectDraft {
                    title: "Build App".to_owned(),
                    description: "A short app".to_owned(),
                    people: 3.0,
                }
            );
            assert_eq!(draft.to_string(), "Build App A short app 3");
            assert_eq!(values(&form), vec!["", "", ""]);
            assert!(form.notifier().0.borrow().is_empty());
        }

        #[test]
        fn test_invalid_submission_alerts_and_keeps_input() {
            let (form, _host) = mounted();
            fill(&form, "", "ok", "2");

            assert!(form.submit_handler().is_none());
            assert_eq!(values(&form), vec!["", "ok", "2"]);
            assert_eq!(*form.notifier().0.borrow(), vec![INVALID_INPUT_MESSAGE.to_owned()]);
        }

        #[test]
        fn test_each_failure_alerts_once() {
            let (form, _host) = mounted();
            fill(&form, "", "", "");

            form.submit_handler();
            form.submit_handler();
            assert_eq!(form.notifier().0.borrow().len(), 2);
        }

        #[test]
        fn test_values_are_not_trimmed_on_emit() {
            let (form, _host) = mounted();
            fill(&form, " Build ", "A short app", " 4 ");

            let draft = form.submit_handler().unwrap();
            assert_eq!(draft.title, " Build ");
            assert_eq!(draft.people, 4.0);
        }
    }

    mod gather_tests {
        use super::*;

        #[test]
        fn test_failing_fields_are_reported() {
            let test_cases = vec![
                // (title, description, people, failing fields)
                ("", "A short app", "3", vec![Field::Title]),
                ("   ", "A short app", "3", vec![Field::Title]),
                ("Build", "short", "3", vec![Field::Description]),   // At min length
                ("Build", "", "3", vec![Field::Description]),
                ("Build", "A short app", "0", vec![Field::People]),
                ("Build", "A short app", "", vec![Field::People]),   // Blank is zero
                ("Build", "A short app", "many", vec![Field::People]),
                ("Build", "A short app", "inf", vec![Field::People]),
                ("Build", "A short app", "infinity", vec![Field::People]),
                ("Build", "A short app", "-0x10", vec![Field::People]),
                ("", "ok", "2", vec![Field::Title, Field::Description]),
                ("", "", "-1", vec![Field::Title, Field::Description, Field::People]),
            ];

            for (title, description, people, expected) in test_cases {
                let (form, _host) = mounted();
                fill(&form, title, description, people);
                assert_eq!(form.gather_user_input(), Err(ValidationFailure { fields: expected }),
                           "Unexpected result for ({:?}, {:?}, {:?})", title, description, people);
            }
        }

        #[test]
        fn test_boundaries_that_pass() {
            let (form, _host) = mounted();
            fill(&form, "x", "sixsix", "1");
            assert!(form.gather_user_input().is_ok());

            fill(&form, "x", "sixsix", "1.5");
            assert_eq!(form.gather_user_input().unwrap().people, 1.5);
        }

        #[test]
        fn test_people_accepts_browser_number_literals() {
            let test_cases = vec![
                // (people, parsed)
                ("0x10", 16.0),
                ("1e3", 1000.0),
                ("0b11", 3.0),
                ("Infinity", f64::INFINITY),
            ];

            for (people, expected) in test_cases {
                let (form, _host) = mounted();
                fill(&form, "Build", "A short app", people);
                assert_eq!(form.gather_user_input().map(|draft| draft.people), Ok(expected),
                           "Unexpected result for people {:?}", people);
            }
        }

        #[test]
        fn test_failure_message() {
            let failure = ValidationFailure { fields: vec![Field::Title] };
            assert_eq!(failure.to_string(), INVALID_INPUT_MESSAGE);
        }
    }

    mod attach_tests {
        use super::*;

        #[test]
        fn test_form_is_mounted_first() {
            let mut host = Host::new(HOST_ID);
            let mut other = Template::project_list().import();
            other.set_id("existing");
            host.insert_adjacent_element(InsertPosition::AfterBegin, &other);

            let form = ProjectInput::attach(&Templates::default(), &mut host, RecordingNotifier::default())
                .unwrap();

            let ids: Vec<&str> = host.children().map(|child| child.id()).collect();
            assert_eq!(ids, vec![FORM_ELEMENT_ID, "existing"]);

            // The mounted element and the controller share the inputs
            form.field(Field::Title).set_value("shared");
            let mounted = host.get_element_by_id(FORM_ELEMENT_ID).unwrap();
            assert_eq!(mounted.query_selector(TITLE_SELECTOR).unwrap().value(), "shared");
        }

        #[test]
        fn test_missing_template() {
            let templates: Templates = serde_json::from_str(r#"{"templates": {}}"#).unwrap();
            let mut host = Host::new(HOST_ID);

            let result = ProjectInput::attach(&templates, &mut host, RecordingNotifier::default());
            assert!(matches!(result, Err(SurfaceError::MissingTemplate(id)) if id == INPUT_TEMPLATE_ID));
        }

        #[test]
        fn test_missing_field() {
            let mut host = Host::new(HOST_ID);
            let mut broken = Template::project_input();
            broken.fields.retain(|field| field.id != "people");
            let mut templates = Templates::default();
            templates.insert(broken);

            let result = ProjectInput::attach(&templates, &mut host, RecordingNotifier::default());
            assert!(matches!(result, Err(SurfaceError::MissingElement(selector)) if selector == PEOPLE_SELECTOR));
            assert_eq!(host.children().count(), 0);
        }
    }
}
