use std::{
    borrow::Cow,
    collections::HashMap,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use log::debug;
use regex::{Captures, Regex};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum TemplateError {
    #[error("could not read template `{path}`")]
    Missing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The named templates making up a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum TemplateKind {
    Page,
    Header,
    Footer,
    Navigation,
    PostDate,
    Tag,
    PostPreview,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 7] = [
        TemplateKind::Page,
        TemplateKind::Header,
        TemplateKind::Footer,
        TemplateKind::Navigation,
        TemplateKind::PostDate,
        TemplateKind::Tag,
        TemplateKind::PostPreview,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            TemplateKind::Page => "content.html",
            TemplateKind::Header => "header.html",
            TemplateKind::Footer => "footer.html",
            TemplateKind::Navigation => "navigation.html",
            TemplateKind::PostDate => "post_date.html",
            TemplateKind::Tag => "tag.html",
            TemplateKind::PostPreview => "post_preview.html",
        }
    }
}

/// Placeholder values handed to [`Template::render`].
pub(crate) type Vars<'a> = HashMap<&'static str, Cow<'a, str>>;

// `$$`, `${name}` or `$name`
fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$(?:(\$)|\{([_A-Za-z][_A-Za-z0-9]*)\}|([_A-Za-z][_A-Za-z0-9]*))")
            .expect("placeholder pattern is valid")
    })
}

#[derive(Debug, Clone)]
pub(crate) struct Template {
    source: String,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Substitutes every known placeholder. Unknown ones stay in the output
    /// untouched, so a missing value never fails the render.
    pub fn render(&self, vars: &Vars) -> String {
        placeholder_pattern()
            .replace_all(&self.source, |caps: &Captures| {
                if caps.get(1).is_some() {
                    return "$".to_string();
                }
                let name = caps.get(2).or_else(|| caps.get(3)).map_or("", |m| m.as_str());
                match vars.get(name) {
                    Some(value) => value.to_string(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Templates {
    templates: HashMap<TemplateKind, Template>,
}

impl Templates {
    /// Reads every template of [`TemplateKind::ALL`] from `template_dir`.
    pub fn load(template_dir: &Path) -> Result<Self, TemplateError> {
        let mut templates = HashMap::new();
        for kind in TemplateKind::ALL {
            let path = template_dir.join(kind.file_name());
            debug!("Loading template {path:?}");
            let source = std::fs::read_to_string(&path)
                .map_err(|source| TemplateError::Missing { path, source })?;
            templates.insert(kind, Template::new(source));
        }
        Ok(Self { templates })
    }

    #[cfg(test)]
    pub fn from_sources(sources: impl IntoIterator<Item = (TemplateKind, &'static str)>) -> Self {
        Self {
            templates: sources
                .into_iter()
                .map(|(kind, source)| (kind, Template::new(source)))
                .collect(),
        }
    }

    /// Renders the template of `kind`. A kind that was never loaded renders
    /// as the empty string.
    pub fn render(&self, kind: TemplateKind, vars: &Vars) -> String {
        self.templates
            .get(&kind)
            .map(|t| t.render(vars))
            .unwrap_or_default()
    }
}
