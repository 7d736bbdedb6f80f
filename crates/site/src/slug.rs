//! URL slugs for generated pages.

use std::collections::HashMap;

/// Lowercase ASCII slug: alphanumerics kept, everything else collapsed to `-`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Hands out unique slugs within one URL namespace.
#[derive(Debug, Default)]
pub struct SlugAllocator {
    seen: HashMap<String, usize>,
}

impl SlugAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slug for `title`, falling back to `fallback` when the title has no
    /// usable characters. Repeats get `-2`, `-3`, ...
    pub fn allocate(&mut self, title: &str, fallback: &str) -> String {
        let mut base = slugify(title);
        if base.is_empty() {
            base = slugify(fallback);
        }
        if base.is_empty() {
            base = "item".to_string();
        }

        let mut count = self.seen.get(&base).copied().unwrap_or(0);
        loop {
            count += 1;
            let candidate = if count == 1 {
                base.clone()
            } else {
                format!("{}-{}", base, count)
            };
            if !self.seen.contains_key(&candidate) {
                self.seen.insert(base.clone(), count);
                self.seen.insert(candidate.clone(), 1);
                return candidate;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Monkey Hut Shade Palace"), "monkey-hut-shade-palace");
        assert_eq!(slugify("  Solar -- Lantern (v2.0)! "), "solar-lantern-v2-0");
        assert_eq!(slugify("Café Über"), "caf-ber");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_collisions_get_suffixes() {
        let mut slugs = SlugAllocator::new();
        assert_eq!(slugs.allocate("Dome", "1"), "dome");
        assert_eq!(slugs.allocate("Dome", "2"), "dome-2");
        assert_eq!(slugs.allocate("DOME", "3"), "dome-3");
    }

    #[test]
    fn test_suffix_does_not_clash_with_real_title() {
        let mut slugs = SlugAllocator::new();
        assert_eq!(slugs.allocate("Dome 2", "a"), "dome-2");
        assert_eq!(slugs.allocate("Dome", "b"), "dome");
        assert_eq!(slugs.allocate("Dome", "c"), "dome-3");
    }

    #[test]
    fn test_fallback_to_id() {
        let mut slugs = SlugAllocator::new();
        assert_eq!(slugs.allocate("★★★", "sku-42"), "sku-42");
        assert_eq!(slugs.allocate("", ""), "item");
    }
}
