//! Output in the shape the Starlight integration expects.

use std::collections::BTreeMap;

use minijinja::{context, AutoEscape, Environment};
use serde::Serialize;

use crate::model::{Logo, SidebarItem, SiteConfiguration};

/// Errors that can occur while emitting framework config.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("Failed to serialize config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to render template: {0}")]
    Template(#[from] minijinja::Error),
}

/// Options object passed to `starlight({...})`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StarlightOptions<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    social: Option<&'a BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    logo: Option<&'a Logo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_css: Option<&'a [String]>,
    sidebar: &'a [SidebarItem],
}

impl<'a> From<&'a SiteConfiguration> for StarlightOptions<'a> {
    fn from(site: &'a SiteConfiguration) -> Self {
        let meta = site.metadata();
        Self {
            title: meta.title(),
            description: Some(meta.description()).filter(|d| !d.is_empty()),
            social: Some(meta.social()).filter(|s| !s.is_empty()),
            logo: meta.logo(),
            custom_css: Some(meta.custom_css()).filter(|c| !c.is_empty()),
            sidebar: site.sidebar(),
        }
    }
}

/// Starlight options as a JSON value.
pub fn starlight_options(site: &SiteConfiguration) -> Result<serde_json::Value, EmitError> {
    Ok(serde_json::to_value(StarlightOptions::from(site))?)
}

/// Starlight options as pretty-printed JSON.
pub fn to_json(site: &SiteConfiguration) -> Result<String, EmitError> {
    Ok(serde_json::to_string_pretty(&StarlightOptions::from(site))?)
}

const ASTRO_CONFIG_TEMPLATE: &str = r#"// @ts-check
import { defineConfig } from 'astro/config';
import starlight from '@astrojs/starlight';

{% if source %}// Generated by sitenav. Edit {{ source }} instead.
{% else %}// Generated by sitenav from its built-in descriptor. Run `sitenav init` to get an editable site.toml.
{% endif %}export default defineConfig({
	integrations: [
		starlight({{ options }}),
	],
});
"#;

/// Render a complete `astro.config.mjs` for the descriptor.
///
/// `source` names the file the descriptor came from and ends up in the header
/// comment; `None` means the descriptor was not read from a file.
pub fn astro_config(site: &SiteConfiguration, source: Option<&str>) -> Result<String, EmitError> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.add_template("astro.config.mjs", ASTRO_CONFIG_TEMPLATE)?;

    // JSON is a valid JS object literal; indent it to sit inside `starlight(...)`.
    let options = to_json(site)?.replace('\n', "\n\t\t");

    let rendered = env
        .get_template("astro.config.mjs")?
        .render(context! { source => source, options => options })?;

    tracing::debug!("Rendered astro.config.mjs ({} bytes)", rendered.len());
    Ok(rendered)
}
