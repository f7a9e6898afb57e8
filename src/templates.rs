//! Templates de la page, chargés depuis un fichier JSON

use crate::surface::{SurfaceError, Template};
use log::info;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs::File,
    io::{self, ErrorKind::NotFound},
    path::PathBuf,
};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize)]
pub struct Templates {
    #[serde(skip)]
    path: Option<PathBuf>,
    templates: HashMap<String, Template>,
}

#[derive(Debug, Error)]
pub enum TemplateFileError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("Fichier de templates illisible: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

impl Default for Templates {
    fn default() -> Self {
        let mut templates = Self {
            path: None,
            templates: HashMap::new(),
        };
        templates.insert(Template::project_input());
        templates.insert(Template::project_list());
        templates
    }
}

impl Templates {
    pub fn open(path: PathBuf) -> Result<Self, TemplateFileError> {
        match File::open(&path) {
            Ok(f) => {
                let mut templates: Self = serde_json::from_reader(f)?;
                for template in templates.templates.values() {
                    template.check_ids()?;
                }
                templates.path = Some(path);
                Ok(templates)
            }

            // Pas de fichier, on l'écrit avec les templates par défaut
            Err(not_found) if not_found.kind() == NotFound => {
                info!("Templates file not found, writing defaults to {}", path.display());
                let mut templates = Templates::default();
                templates.path = Some(path);
                templates.save()?;
                Ok(templates)
            }

            Err(other) => Err(other.into()),
        }
    }

    pub fn save(&self) -> Result<(), TemplateFileError> {
        if let Some(path) = &self.path {
            let file = File::create(path)?;
            serde_json::to_writer_pretty(file, self)?;
        }
        Ok(())
    }

    pub fn insert(&mut self, template: Template) {
        self.templates.insert(template.id.clone(), template);
    }

    pub fn get_element_by_id(&self, id: &str) -> Result<&Template, SurfaceError> {
        self.templates
            .get(id)
            .ok_or_else(|| SurfaceError::MissingTemplate(id.to_owned()))
    }
}
