//! Constantes globales de l'application.

pub const HOST_ID: &str = "app"; // Conteneur dans lequel la page est montée.
pub const INPUT_TEMPLATE_ID: &str = "project-input"; // Template du formulaire.
pub const LIST_TEMPLATE_ID: &str = "project-list"; // Template d'une liste de projets.
pub const FORM_ELEMENT_ID: &str = "user-input"; // Id donné au formulaire une fois importé.

pub const TITLE_SELECTOR: &str = "#title";
pub const DESCRIPTION_SELECTOR: &str = "#description";
pub const PEOPLE_SELECTOR: &str = "#people";

pub const DESCRIPTION_MIN_LENGTH: usize = 5; // Borne exclusive.
pub const PEOPLE_MIN: f64 = 1.0; // Borne inclusive.

pub const INVALID_INPUT_MESSAGE: &str = "Saisie invalide, veuillez réessayer !";

pub const LOG_FILE: &str = "./project_input.log";
pub const TEMPLATES_FILE: &str = "templates.json";
