//! Built-in handlebars templates.
//!
//! `{{ }}` output is HTML-escaped by handlebars; only the pre-escaped
//! JSON-LD uses the raw `{{{ }}}` form.

use crate::error::Result;
use handlebars::Handlebars;
use serde::Serialize;

pub const PAGE: &str = "page";
pub const INDEX: &str = "index";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{page.page_title}}</title>
  <meta name="description" content="{{page.meta_description}}">
  <link rel="canonical" href="{{page.url}}">
  <meta property="og:type" content="{{#if page.is_product}}product{{else}}article{{/if}}">
  <meta property="og:title" content="{{page.title}}">
  <meta property="og:description" content="{{page.meta_description}}">
  <meta property="og:url" content="{{page.url}}">
  <meta property="og:site_name" content="{{site.site_name}}">
{{#if page.image}}
  <meta property="og:image" content="{{page.image}}">
{{/if}}
  <script type="application/ld+json">{{{page.json_ld}}}</script>
</head>
<body>
  <nav><a href="{{site.base_url}}/">{{site.site_name}}</a> / {{page.kind_label}}</nav>
  <main>
    <article data-id="{{page.id}}">
      <h1>{{page.title}}</h1>
{{#if page.category}}
      <p class="category">{{page.category}}</p>
{{/if}}
{{#if page.image}}
      <img src="{{page.image}}" alt="{{page.title}}">
{{/if}}
      <p>{{page.description}}</p>
{{#if page.details}}
      <dl>
{{#each page.details}}
        <dt>{{label}}</dt><dd>{{value}}</dd>
{{/each}}
      </dl>
{{/if}}
      <a class="open-app" href="{{site.base_url}}/#{{page.kind_path}}">Open in the catalog</a>
    </article>
  </main>
</body>
</html>
"#;

const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{site.site_name}}</title>
  <meta name="description" content="{{site.description}}">
  <link rel="canonical" href="{{site.base_url}}/">
</head>
<body>
  <h1>{{site.site_name}}</h1>
  <p>{{site.description}}</p>
{{#if projects}}
  <h2>Projects</h2>
  <ul>
{{#each projects}}
    <li><a href="{{path}}">{{title}}</a></li>
{{/each}}
  </ul>
{{/if}}
{{#if shop}}
  <h2>Shop</h2>
  <ul>
{{#each shop}}
    <li><a href="{{path}}">{{title}}</a></li>
{{/each}}
  </ul>
{{/if}}
</body>
</html>
"#;

/// Compiled template registry
pub struct Templates {
    registry: Handlebars<'static>,
}

impl Templates {
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);
        registry
            .register_template_string(PAGE, PAGE_TEMPLATE)
            .map_err(Box::new)?;
        registry
            .register_template_string(INDEX, INDEX_TEMPLATE)
            .map_err(Box::new)?;
        Ok(Self { registry })
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        Ok(self.registry.render(name, data)?)
    }
}
