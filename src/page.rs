//! Construction de la page complète dans le conteneur hôte

use strum::IntoEnumIterator;

use crate::consts::HOST_ID;
use crate::form::ProjectInput;
use crate::lists::{ProjectList, ProjectStatus};
use crate::surface::{Host, InputField, Notifier, SurfaceError};
use crate::templates::Templates;

/// The mounted page: the input form followed by one list per status.
pub struct Page<N> {
    pub host: Host,
    pub form: ProjectInput<InputField, N>,
    pub lists: Vec<ProjectList>,
}

impl<N: Notifier> Page<N> {
    pub fn mount(templates: &Templates, notifier: N) -> Result<Self, SurfaceError> {
        let mut host = Host::new(HOST_ID);
        let form = ProjectInput::attach(templates, &mut host, notifier)?;
        let lists = ProjectStatus::iter()
            .map(|status| ProjectList::attach(templates, &mut host, status))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { host, form, lists })
    }
}
