use std::path::Path;

use anyhow::{Context as _, Result, anyhow};
use tera::{Context, Tera};

pub(crate) const INDEX_TEMPLATE: &str = "blog/index.html";
pub(crate) const DETAIL_TEMPLATE: &str = "blog/detail.html";
pub(crate) const CATEGORY_TEMPLATE: &str = "blog/category.html";

const REQUIRED_TEMPLATES: [&str; 3] = [INDEX_TEMPLATE, DETAIL_TEMPLATE, CATEGORY_TEMPLATE];

const EMBEDDED: [(&str, &str); 5] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("macros.html", include_str!("../../templates/macros.html")),
    (INDEX_TEMPLATE, include_str!("../../templates/blog/index.html")),
    (DETAIL_TEMPLATE, include_str!("../../templates/blog/detail.html")),
    (CATEGORY_TEMPLATE, include_str!("../../templates/blog/category.html")),
];

/// Page renderer backed by Tera.
pub(crate) struct Templates {
    tera: Tera,
}

impl Templates {
    /// Templates compiled into the binary.
    pub(crate) fn embedded() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(EMBEDDED)
            .context("failed to compile embedded templates")?;
        Ok(Self { tera })
    }

    /// Every `*.html` file under `dir`, named by its path relative to `dir`.
    pub(crate) fn from_dir(dir: &Path) -> Result<Self> {
        let pattern = format!("{}/**/*.html", dir.display());
        let tera = Tera::new(&pattern)
            .with_context(|| format!("failed to load templates from {}", dir.display()))?;

        let loaded: Vec<&str> = tera.get_template_names().collect();
        if let Some(missing) = REQUIRED_TEMPLATES
            .iter()
            .find(|name| !loaded.contains(*name))
        {
            return Err(anyhow!(
                "template {missing} is missing in {}",
                dir.display()
            ));
        }
        Ok(Self { tera })
    }

    pub(crate) fn load(dir: Option<&Path>) -> Result<Self> {
        match dir {
            Some(dir) => Self::from_dir(dir),
            None => Self::embedded(),
        }
    }

    pub(crate) fn render(&self, name: &str, context: &Context) -> Result<String, tera::Error> {
        self.tera.render(name, context)
    }
}
