//! Static site generation.
//!
//! Pages are mapped and slugged sequentially (slug allocation depends on
//! catalog order), rendered in parallel when the `parallel` feature is on,
//! then written to disk.

use crate::error::{Result, SiteError};
use crate::sitemap::{render_sitemap, robots_txt};
use crate::slug::SlugAllocator;
use crate::structured_data::{json_ld, to_script_json};
use crate::templates::{Templates, INDEX, PAGE};
use crate::view::{PageViewModel, SiteContext};
use chrono::{NaiveDate, Utc};
use festival_core::config::SiteConfig;
use festival_core::{Catalog, RecordKind, Searchable};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Summary of a generation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteReport {
    pub out_dir: PathBuf,
    pub projects: usize,
    pub shop_items: usize,
    /// Every file written, relative to `out_dir`
    pub files: Vec<String>,
}

impl SiteReport {
    pub fn pages(&self) -> usize {
        self.projects + self.shop_items
    }
}

/// A rendered file waiting to be written
#[derive(Debug, Clone)]
pub struct RenderedFile {
    pub path: String,
    pub contents: String,
}

#[derive(Serialize)]
struct PageContext<'a> {
    site: &'a SiteContext,
    page: &'a PageViewModel,
}

#[derive(Serialize)]
struct IndexContext<'a> {
    site: &'a SiteContext,
    projects: Vec<&'a PageViewModel>,
    shop: Vec<&'a PageViewModel>,
}

/// Emits one HTML page per record plus index, sitemap and robots.txt
pub struct SiteGenerator {
    site: SiteContext,
    templates: Templates,
    lastmod: NaiveDate,
}

impl SiteGenerator {
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let base = config.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(SiteError::InvalidBaseUrl(config.base_url.clone()));
        }

        Ok(Self {
            site: SiteContext::from_config(config),
            templates: Templates::new()?,
            lastmod: Utc::now().date_naive(),
        })
    }

    /// Fix the sitemap `lastmod` date (reproducible builds)
    pub fn with_lastmod(mut self, lastmod: NaiveDate) -> Self {
        self.lastmod = lastmod;
        self
    }

    pub fn site(&self) -> &SiteContext {
        &self.site
    }

    /// Map every record to its page view model, in catalog order
    pub fn pages(&self, catalog: &Catalog) -> Result<Vec<PageViewModel>> {
        let mut project_slugs = SlugAllocator::new();
        let mut shop_slugs = SlugAllocator::new();

        catalog
            .records()
            .map(|record| -> Result<PageViewModel> {
                let fallback = record.id().to_string();
                let slug = match record.kind() {
                    RecordKind::Project => project_slugs.allocate(record.title(), &fallback),
                    RecordKind::ShopItem => shop_slugs.allocate(record.title(), &fallback),
                };

                let mut page = PageViewModel::from_record(record, slug, &self.site);
                page.json_ld = to_script_json(&json_ld(record, &page, &self.site))?;
                Ok(page)
            })
            .collect()
    }

    /// Render every file of the site without touching the disk
    pub fn render(&self, catalog: &Catalog) -> Result<Vec<RenderedFile>> {
        let pages = self.pages(catalog)?;

        let mut files = self.render_pages(&pages)?;

        let index = IndexContext {
            site: &self.site,
            projects: pages.iter().filter(|p| p.kind == RecordKind::Project).collect(),
            shop: pages.iter().filter(|p| p.kind == RecordKind::ShopItem).collect(),
        };
        files.push(RenderedFile {
            path: "index.html".to_string(),
            contents: self.templates.render(INDEX, &index)?,
        });

        let home = format!("{}/", self.site.base_url);
        let urls = std::iter::once(home.as_str()).chain(pages.iter().map(|p| p.url.as_str()));
        files.push(RenderedFile {
            path: "sitemap.xml".to_string(),
            contents: render_sitemap(urls, self.lastmod),
        });
        files.push(RenderedFile {
            path: "robots.txt".to_string(),
            contents: robots_txt(&self.site.base_url),
        });

        Ok(files)
    }

    #[cfg(feature = "parallel")]
    fn render_pages(&self, pages: &[PageViewModel]) -> Result<Vec<RenderedFile>> {
        use rayon::prelude::*;
        pages.par_iter().map(|page| self.render_page(page)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn render_pages(&self, pages: &[PageViewModel]) -> Result<Vec<RenderedFile>> {
        pages.iter().map(|page| self.render_page(page)).collect()
    }

    fn render_page(&self, page: &PageViewModel) -> Result<RenderedFile> {
        let contents = self.templates.render(
            PAGE,
            &PageContext {
                site: &self.site,
                page,
            },
        )?;
        Ok(RenderedFile {
            path: page.path.clone(),
            contents,
        })
    }

    /// Render and write the site under `out_dir`
    pub fn generate(&self, catalog: &Catalog, out_dir: &Path) -> Result<SiteReport> {
        self.generate_with_progress(catalog, out_dir, |_| {})
    }

    /// Like [`SiteGenerator::generate`], calling `on_file` after each write
    pub fn generate_with_progress<F>(&self, catalog: &Catalog, out_dir: &Path, on_file: F) -> Result<SiteReport>
    where
        F: Fn(&str),
    {
        let files = self.render(catalog)?;

        for file in &files {
            let target = out_dir.join(&file.path);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| SiteError::write(parent, e))?;
            }
            fs::write(&target, &file.contents).map_err(|e| SiteError::write(&target, e))?;
            on_file(&file.path);
        }

        tracing::info!(
            out_dir = %out_dir.display(),
            files = files.len(),
            "Static site generated"
        );

        Ok(SiteReport {
            out_dir: out_dir.to_path_buf(),
            projects: catalog.projects.len(),
            shop_items: catalog.shop_items.len(),
            files: files.into_iter().map(|f| f.path).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROJECTS: &str = r#"[
        {"id": 1, "title": "Monkey Hut Shade Palace", "description": "A <b>big</b> shade structure", "category": "shade", "materials": ["EMT"]},
        {"id": 2, "title": "Monkey Hut Shade Palace", "description": "The sequel"}
    ]"#;

    const SHOP: &str = r#"[{"id": "goggles", "name": "Dust Goggles", "description": "</script>", "price": 18}]"#;

    fn generator() -> SiteGenerator {
        SiteGenerator::new(&SiteConfig::default())
            .unwrap()
            .with_lastmod(NaiveDate::from_ymd_opt(2026, 8, 24).unwrap())
    }

    #[test]
    fn test_rejects_relative_base_url() {
        let config = SiteConfig {
            base_url: "playaworkshop.org".to_string(),
            ..SiteConfig::default()
        };
        assert!(matches!(
            SiteGenerator::new(&config),
            Err(SiteError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_duplicate_titles_get_unique_paths() {
        let catalog = Catalog::from_json(PROJECTS, SHOP).unwrap();
        let pages = generator().pages(&catalog).unwrap();

        let paths: Vec<&str> = pages.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "projects/monkey-hut-shade-palace.html",
                "projects/monkey-hut-shade-palace-2.html",
                "shop/dust-goggles.html",
            ]
        );
    }

    #[test]
    fn test_page_html_is_escaped() {
        let catalog = Catalog::from_json(PROJECTS, SHOP).unwrap();
        let files = generator().render(&catalog).unwrap();

        let hut = files
            .iter()
            .find(|f| f.path == "projects/monkey-hut-shade-palace.html")
            .unwrap();
        assert!(hut.contents.contains("<h1>Monkey Hut Shade Palace</h1>"));
        assert!(hut.contents.contains("A &lt;b&gt;big&lt;/b&gt; shade structure"));
        assert!(hut.contents.contains(r#""@type":"HowTo""#));
        assert!(hut.contents.contains(
            r#"<link rel="canonical" href="https://playaworkshop.org/projects/monkey-hut-shade-palace.html">"#
        ));

        let goggles = files.iter().find(|f| f.path == "shop/dust-goggles.html").unwrap();
        // Only the closing tag of the JSON-LD script itself remains
        assert_eq!(goggles.contents.matches("</script>").count(), 1);
        assert!(goggles.contents.contains("<dt>Price</dt><dd>$18.00</dd>"));
    }

    #[test]
    fn test_generate_writes_site() {
        let catalog = Catalog::from_json(PROJECTS, SHOP).unwrap();
        let dir = tempfile::tempdir().unwrap();

        let written = std::cell::Cell::new(0);
        let report = generator()
            .generate_with_progress(&catalog, dir.path(), |_| written.set(written.get() + 1))
            .unwrap();

        assert_eq!(report.pages(), 3);
        assert_eq!(report.files.len(), 6);
        assert_eq!(written.get(), 6);

        let sitemap = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
        assert_eq!(sitemap.matches("<url>").count(), 4);
        assert!(sitemap.contains("<loc>https://playaworkshop.org/</loc>"));

        let index = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(index.contains(r#"<a href="shop/dust-goggles.html">Dust Goggles</a>"#));
        assert!(dir.path().join("robots.txt").exists());
    }

    #[test]
    fn test_empty_catalog_still_builds_index() {
        let dir = tempfile::tempdir().unwrap();
        let report = generator().generate(&Catalog::default(), dir.path()).unwrap();

        assert_eq!(report.pages(), 0);
        assert_eq!(report.files, vec!["index.html", "sitemap.xml", "robots.txt"]);
        let index = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(!index.contains("<h2>Projects</h2>"));
    }
}
