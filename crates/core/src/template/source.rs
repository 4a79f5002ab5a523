use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists the template names an application provides
pub trait TemplateSource: Send + Sync {
    fn list_templates(&self) -> Result<Vec<String>>;
}

/// A fixed list of template names
#[derive(Debug, Clone, Default)]
pub struct StaticTemplates {
    templates: Vec<String>,
}

impl StaticTemplates {
    pub fn new<I, S>(templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            templates: templates.into_iter().map(Into::into).collect(),
        }
    }
}

impl TemplateSource for StaticTemplates {
    fn list_templates(&self) -> Result<Vec<String>> {
        Ok(self.templates.clone())
    }
}

/// Templates found under one or more directories
///
/// A file `<root>/backoffice/Product/list.html` is listed as
/// `backoffice/Product/list.html`. Missing roots are skipped.
#[derive(Debug, Clone, Default)]
pub struct FilesystemTemplates {
    roots: Vec<PathBuf>,
}

impl FilesystemTemplates {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    fn list_root(root: &Path) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in WalkDir::new(root).follow_links(true) {
            let entry = entry.map_err(|e| {
                crate::error::Error::IoError(std::io::Error::other(format!(
                    "Failed to list templates under {}: {e}",
                    root.display()
                )))
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            if let Ok(relative) = entry.path().strip_prefix(root) {
                let name = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                names.push(name);
            }
        }

        Ok(names)
    }
}

impl TemplateSource for FilesystemTemplates {
    fn list_templates(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for root in &self.roots {
            if !root.is_dir() {
                tracing::debug!("Skipping missing template root {:?}", root);
                continue;
            }
            names.extend(Self::list_root(root)?);
        }

        Ok(names)
    }
}
