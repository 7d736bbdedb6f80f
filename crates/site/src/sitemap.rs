//! XML sitemap and robots.txt.

use chrono::NaiveDate;
use festival_core::markup::escape_markup;

/// Render a sitemap listing every URL with the same `lastmod`.
pub fn render_sitemap<'a, I>(urls: I, lastmod: NaiveDate) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let lastmod = lastmod.format("%Y-%m-%d").to_string();
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for url in urls {
        xml.push_str("  <url>\n    <loc>");
        xml.push_str(&escape_markup(url));
        xml.push_str("</loc>\n    <lastmod>");
        xml.push_str(&lastmod);
        xml.push_str("</lastmod>\n  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Allow everything and point crawlers at the sitemap.
pub fn robots_txt(base_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        base_url.trim_end_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 24).unwrap()
    }

    #[test]
    fn test_sitemap_entries() {
        let xml = render_sitemap(
            ["https://example.org/", "https://example.org/shop/goggles.html"],
            date(),
        );

        assert!(xml.starts_with("<?xml"));
        assert_eq!(xml.matches("<url>").count(), 2);
        assert!(xml.contains("<loc>https://example.org/shop/goggles.html</loc>"));
        assert!(xml.contains("<lastmod>2026-08-24</lastmod>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn test_sitemap_escapes_urls() {
        let xml = render_sitemap(["https://example.org/?a=1&b=<2>"], date());
        assert!(xml.contains("<loc>https://example.org/?a=1&amp;b=&lt;2&gt;</loc>"));

        let xml = render_sitemap(["https://example.org/shop/o'neill.html"], date());
        assert!(xml.contains("o&#39;neill"));
    }

    #[test]
    fn test_empty_sitemap_is_valid() {
        let xml = render_sitemap(std::iter::empty(), date());
        assert!(xml.contains("<urlset"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_robots() {
        assert_eq!(
            robots_txt("https://example.org/"),
            "User-agent: *\nAllow: /\n\nSitemap: https://example.org/sitemap.xml\n"
        );
    }
}
