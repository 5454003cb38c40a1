use std::path::Path;

use anyhow::Context as _;

use crate::{index::SiteIndex, renderer::Templates};

pub(crate) const INDEX_TAG: &str = "Index";

/// Knobs for page composition, set from the command line.
#[derive(Debug, Clone)]
pub(crate) struct ComposeOptions {
    pub tag_separator: String,
    pub summary_limit: usize,
    pub site_owner: String,
    /// Replaces the per-operation default docroot when set.
    pub docroot: Option<String>,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            tag_separator: ", ".to_string(),
            summary_limit: 5,
            site_owner: "Home".to_string(),
            docroot: None,
        }
    }
}

/// Everything one invocation reads: templates, the site index and options.
#[derive(Debug)]
pub(crate) struct Context {
    pub templates: Templates,
    pub index: SiteIndex,
    pub options: ComposeOptions,
}

impl Context {
    pub fn new(templates: Templates, index: SiteIndex, options: ComposeOptions) -> Self {
        Self {
            templates,
            index,
            options,
        }
    }

    pub fn load(
        template_dir: &Path,
        index_path: &Path,
        options: ComposeOptions,
    ) -> anyhow::Result<Self> {
        let templates = Templates::load(template_dir)
            .with_context(|| format!("while loading templates from {template_dir:?}"))?;
        let index = SiteIndex::load(index_path);
        Ok(Self::new(templates, index, options))
    }

    pub fn docroot<'a>(&'a self, default: &'a str) -> &'a str {
        self.options.docroot.as_deref().unwrap_or(default)
    }
}
