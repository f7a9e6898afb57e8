//! Sections listant les projets actifs et terminés

use derive_more::Display;
use strum_macros::EnumIter;

use crate::consts::LIST_TEMPLATE_ID;
use crate::surface::{ElementNode, Host, InsertPosition, SurfaceError};
use crate::templates::Templates;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum ProjectStatus {
    #[display("active")]
    Active,
    #[display("finished")]
    Finished,
}

/// An empty project section appended to the host.
pub struct ProjectList {
    status: ProjectStatus,
    element: ElementNode,
}

impl ProjectList {
    pub fn attach(templates: &Templates, host: &mut Host, status: ProjectStatus) -> Result<Self, SurfaceError> {
        let mut element = templates.get_element_by_id(LIST_TEMPLATE_ID)?.import();
        element.set_id(format!("{status}-projects"));

        host.insert_adjacent_element(InsertPosition::BeforeEnd, &element);
        Ok(Self { status, element })
    }

    #[cfg(test)]
    pub(crate) fn status(&self) -> ProjectStatus {
        self.status
    }

    #[cfg(test)]
    pub(crate) fn element(&self) -> &ElementNode {
        &self.element
    }
}
