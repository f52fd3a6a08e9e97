//! Named HTML templates with `{{key}}` placeholders
//!
//! Templates are fetched on first use and kept for the lifetime of the
//! engine. A failed load is never cached, so the next call tries again.

mod layout;

pub use layout::{is_active_nav, mark_active_nav, set_current_year};

use chrono::Datelike;
use futures::future::join_all;
use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::SiteConfig;
use crate::error::{RenderError, Result};
use crate::fetch::{self, Fetcher};
use crate::helpers::fill_path;
use crate::view::{Region, View};

lazy_static! {
    static ref PLACEHOLDER_RE: Regex =
        Regex::new(r"\{\{(\w[\w-]*)\}\}").expect("valid placeholder regex");
}

/// Loads, caches and fills page templates
pub struct TemplateEngine {
    fetcher: Arc<dyn Fetcher>,
    template_path: String,
    common_templates: Vec<String>,
    posts_dir: String,
    templates: HashMap<String, String>,
}

impl TemplateEngine {
    /// Create an engine with an empty cache
    pub fn new(fetcher: Arc<dyn Fetcher>, config: &SiteConfig) -> Self {
        Self {
            fetcher,
            template_path: config.template_path.clone(),
            common_templates: config.common_templates.clone(),
            posts_dir: config.posts_dir.clone(),
            templates: HashMap::new(),
        }
    }

    /// Default locator for a template name, e.g. `/templates/header.html`
    pub fn locator(&self, name: &str) -> String {
        fill_path(&self.template_path, "name", name)
    }

    /// Return the cached template `name`, fetching it from `locator` on first use
    pub async fn load_template(&mut self, name: &str, locator: &str) -> Result<String> {
        if let Some(template) = self.templates.get(name) {
            tracing::debug!("Template {} served from cache", name);
            return Ok(template.clone());
        }

        let template = fetch_template(self.fetcher.as_ref(), name, locator).await?;
        self.templates.insert(name.to_string(), template.clone());
        Ok(template)
    }

    /// Like [`TemplateEngine::load_template`], logging failures instead of returning them
    pub async fn try_load_template(&mut self, name: &str, locator: &str) -> Option<String> {
        match self.load_template(name, locator).await {
            Ok(template) => Some(template),
            Err(e) => {
                tracing::error!("Error loading template {}: {}", name, e);
                None
            }
        }
    }

    /// Fetch every configured common template concurrently
    ///
    /// Returns once all fetches have finished. Failures are logged and leave
    /// the template uncached.
    pub async fn load_common_templates(&mut self) {
        let pending: Vec<(String, String)> = self
            .common_templates
            .iter()
            .filter(|name| !self.templates.contains_key(*name))
            .map(|name| (name.clone(), self.locator(name)))
            .collect();

        let fetcher = self.fetcher.as_ref();
        let results = join_all(pending.iter().map(|(name, locator)| async move {
            (name, fetch_template(fetcher, name, locator).await)
        }))
        .await;

        for (name, result) in results {
            match result {
                Ok(template) => {
                    self.templates.insert(name.clone(), template);
                }
                Err(e) => tracing::error!("Error loading template {}: {}", name, e),
            }
        }
    }

    /// A cached template, if loaded
    pub fn get(&self, name: &str) -> Option<&str> {
        self.templates.get(name).map(String::as_str)
    }

    /// Drop every cached template
    pub fn clear(&mut self) {
        self.templates.clear();
    }

    /// Replace `{{key}}` with its value for every key in `data`
    ///
    /// Keys are applied in map order and every occurrence is replaced;
    /// placeholders for keys absent from `data` are left alone.
    pub fn render(template: &str, data: &IndexMap<String, String>) -> String {
        data.iter().fold(template.to_string(), |result, (key, value)| {
            result.replace(&format!("{{{{{}}}}}", key), value)
        })
    }

    /// Replace the placeholders of `template` in a single pass
    ///
    /// Unlike [`TemplateEngine::render`], substituted values are never
    /// scanned again, so `{{key}}` text inside a value survives verbatim.
    /// Placeholders for keys absent from `data` are left alone.
    pub fn fill(template: &str, data: &IndexMap<String, String>) -> String {
        PLACEHOLDER_RE
            .replace_all(template, |caps: &Captures| match data.get(&caps[1]) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }

    /// Swap in the shared header and footer, then refresh year and navigation
    pub fn inject_layout<V: View + ?Sized>(&self, view: &mut V) {
        self.inject_layout_for_year(view, chrono::Local::now().year());
    }

    /// [`TemplateEngine::inject_layout`] with an explicit current year
    pub fn inject_layout_for_year<V: View + ?Sized>(&self, view: &mut V, year: i32) {
        if let (Some(template), Some(region)) = (self.get("header"), view.region(Region::Header)) {
            *region = template.to_string();
        }

        if let (Some(template), Some(region)) = (self.get("footer"), view.region(Region::Footer)) {
            *region = set_current_year(template, year);
        }

        let current_path = view.location().pathname.clone();
        if let Some(region) = view.region(Region::Header) {
            *region = mark_active_nav(region, &current_path, &self.posts_dir);
        }
    }
}

async fn fetch_template(fetcher: &dyn Fetcher, name: &str, locator: &str) -> Result<String> {
    fetch::fetch_ok(fetcher, locator).await.map_err(|e| {
        tracing::debug!("Template fetch for {} failed: {}", name, e);
        RenderError::TemplateLoad {
            name: name.to_string(),
            locator: locator.to_string(),
        }
    })
}
