//! Ranked search over the combined catalog pool.

use crate::error::{Result, SearchError};
use crate::relevance::{fold_case, Scorer};
use crate::SearchResult;
use festival_core::config::SearchConfig;
use festival_core::{Catalog, CatalogRecord, Searchable};

/// Trim and case-fold a query, enforcing the minimum length.
///
/// Length is counted in characters, not bytes.
pub fn normalize_query(query: &str, min_len: usize) -> Result<String> {
    let trimmed = query.trim();
    let len = trimmed.chars().count();
    if len < min_len {
        return Err(SearchError::QueryTooShort { min: min_len, len });
    }
    Ok(fold_case(trimmed))
}

/// Rank any collection of records against a query.
///
/// Records keep encounter order among equal scores. Queries below the
/// minimum length and zero-score records yield nothing.
pub fn search_records<R, I>(query: &str, records: I, config: &SearchConfig) -> Vec<SearchResult<R>>
where
    R: Searchable,
    I: IntoIterator<Item = R>,
{
    let query_lower = match normalize_query(query, config.min_query_len) {
        Ok(q) => q,
        Err(_) => return Vec::new(),
    };

    let scorer = Scorer::new(config.weights);
    rank(&scorer, &query_lower, records, config.max_results)
}

fn rank<R, I>(scorer: &Scorer, query_lower: &str, records: I, max_results: usize) -> Vec<SearchResult<R>>
where
    R: Searchable,
    I: IntoIterator<Item = R>,
{
    let mut results: Vec<SearchResult<R>> = records
        .into_iter()
        .filter_map(|item| {
            let score = scorer.score(query_lower, &item);
            (score > 0).then_some(SearchResult { item, score })
        })
        .collect();

    // sort_by is stable: ties stay first-inserted-first
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(max_results);
    results
}

/// Search engine bound to a loaded catalog.
#[derive(Debug, Clone)]
pub struct SearchEngine<'c> {
    catalog: &'c Catalog,
    config: SearchConfig,
    scorer: Scorer,
}

impl<'c> SearchEngine<'c> {
    pub fn new(catalog: &'c Catalog, config: SearchConfig) -> Self {
        let scorer = Scorer::new(config.weights);
        Self {
            catalog,
            config,
            scorer,
        }
    }

    pub fn with_defaults(catalog: &'c Catalog) -> Self {
        Self::new(catalog, SearchConfig::default())
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Rank projects and shop items together, capped at `max_results`.
    pub fn search(&self, query: &str) -> Vec<SearchResult<CatalogRecord<'c>>> {
        let query_lower = match normalize_query(query, self.config.min_query_len) {
            Ok(q) => q,
            Err(err) => {
                tracing::trace!(%err, "Query skipped");
                return Vec::new();
            }
        };

        let results = rank(
            &self.scorer,
            &query_lower,
            self.catalog.records(),
            self.config.max_results,
        );

        tracing::debug!(
            query = %query_lower,
            candidates = self.catalog.len(),
            results = results.len(),
            "Search completed"
        );
        results
    }

    /// Like [`SearchEngine::search`] but reports a too-short query.
    pub fn try_search(&self, query: &str) -> Result<Vec<SearchResult<CatalogRecord<'c>>>> {
        normalize_query(query, self.config.min_query_len)?;
        Ok(self.search(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use festival_core::{Project, RecordId, RecordKind, ShopItem};
    use proptest::prelude::*;

    fn project(id: i64, title: &str, description: &str, category: Option<&str>) -> Project {
        Project {
            id: RecordId::Number(id),
            title: title.to_string(),
            description: description.to_string(),
            category: category.map(str::to_string),
            difficulty: None,
            time_estimate: None,
            materials: vec![],
            image: None,
        }
    }

    fn shop(id: &str, title: &str, description: &str) -> ShopItem {
        ShopItem {
            id: RecordId::Text(id.to_string()),
            title: title.to_string(),
            description: description.to_string(),
            price: 10.0,
            category: None,
            image: None,
            in_stock: true,
        }
    }

    fn festival_catalog() -> Catalog {
        Catalog::new(
            vec![
                project(1, "Monkey Hut Shade Palace", "A big shade structure", Some("shade")),
                project(2, "Solar Lantern", "Bottle light for the tent", Some("lighting")),
                project(3, "Hexayurt", "Insulated shelter with shade flaps", Some("shelter")),
            ],
            vec![
                shop("cloth", "Shade Cloth Roll", "Knitted 90% cloth"),
                shop("goggles", "Dust Goggles", "Sealed lenses"),
            ],
        )
    }

    #[test]
    fn test_ranking_order() {
        let catalog = festival_catalog();
        let engine = SearchEngine::with_defaults(&catalog);

        let results = engine.search("shade");
        let titles: Vec<&str> = results.iter().map(|r| r.item.title()).collect();
        let scores: Vec<u32> = results.iter().map(|r| r.score).collect();

        assert_eq!(
            titles,
            vec!["Monkey Hut Shade Palace", "Shade Cloth Roll", "Hexayurt"]
        );
        assert_eq!(scores, vec![23, 10, 5]);
    }

    #[test]
    fn test_projects_and_shop_items_share_a_pool() {
        let catalog = festival_catalog();
        let engine = SearchEngine::with_defaults(&catalog);

        let results = engine.search("  GOGGLES ");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].item.kind(), RecordKind::ShopItem);
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        let catalog = Catalog::new(
            vec![
                project(1, "Tent stake A", "", None),
                project(2, "Tent stake B", "", None),
            ],
            vec![shop("c", "Tent stake C", "")],
        );
        let engine = SearchEngine::with_defaults(&catalog);

        let ids: Vec<String> = engine
            .search("stake")
            .iter()
            .map(|r| r.item.id().to_string())
            .collect();
        assert_eq!(ids, vec!["1", "2", "c"]);
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let catalog = Catalog::new(vec![project(1, "Shade (v2.0) [beta]", "", None)], vec![]);
        let engine = SearchEngine::with_defaults(&catalog);

        assert_eq!(engine.search("(v2.0)").len(), 1);
        assert!(engine.search(".*").is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(SearchEngine::with_defaults(&catalog).search("shade").is_empty());
    }

    #[test]
    fn test_short_query_reported() {
        let catalog = festival_catalog();
        let engine = SearchEngine::with_defaults(&catalog);

        assert!(engine.search(" s ").is_empty());
        match engine.try_search(" s ") {
            Err(SearchError::QueryTooShort { min, len }) => {
                assert_eq!(min, 2);
                assert_eq!(len, 1);
            }
            other => panic!("expected QueryTooShort, got {:?}", other.map(|r| r.len())),
        }
    }

    #[test]
    fn test_minimum_counts_characters() {
        // Two characters, four bytes
        assert!(normalize_query("éé", 2).is_ok());
        assert!(normalize_query("é", 2).is_err());
    }

    #[test]
    fn test_search_records_over_plain_slice() {
        let items = vec![shop("a", "Camp Chair", ""), shop("b", "Chair Cover", "chair")];
        let results = search_records("chair", items.iter(), &SearchConfig::default());
        assert_eq!(results[0].item.id, RecordId::Text("b".into()));
        assert_eq!(results[0].score, 15);
    }

    #[test]
    fn test_greek_title_scores_and_highlights() {
        let records = vec![project(1, "ΟΔΟΣ", "", None)];
        let config = SearchConfig::default();

        for query in ["ΟΔΟΣ", "οδος", "οδοσ"] {
            let hits = search_records(query, records.iter(), &config);
            assert_eq!(hits.len(), 1, "query {query}");
            assert_eq!(hits[0].score, 10);
            assert_eq!(crate::match_ranges("ΟΔΟΣ", query), vec![0.."ΟΔΟΣ".len()]);
        }
    }

    proptest! {
        #[test]
        fn prop_short_queries_return_nothing(query in "\\PC{0,1}", pad in " {0,3}") {
            let catalog = festival_catalog();
            let engine = SearchEngine::with_defaults(&catalog);
            let padded = format!("{pad}{query}{pad}");
            prop_assert!(engine.search(&padded).is_empty());
        }

        #[test]
        fn prop_results_capped_at_ten(count in 0usize..60) {
            let projects = (0..count)
                .map(|i| project(i as i64, &format!("Shade build {i}"), "", None))
                .collect();
            let catalog = Catalog::new(projects, vec![shop("s", "Shade sail", "")]);
            let engine = SearchEngine::with_defaults(&catalog);
            prop_assert!(engine.search("shade").len() <= 10);
            prop_assert_eq!(engine.search("shade").len(), (count + 1).min(10));
        }

        #[test]
        fn prop_title_substring_scores_at_least_ten(
            title in "[a-zA-Z ]{2,30}",
            start in 0usize..30,
            len in 2usize..10,
        ) {
            let start = start.min(title.len() - 2);
            let end = (start + len).min(title.len());
            let needle = title[start..end].trim().to_lowercase();
            prop_assume!(needle.chars().count() >= 2);

            let record = project(1, &title, "", None);
            prop_assert!(Scorer::default().score(&needle, &record) >= 10);
        }

        #[test]
        fn prop_results_sorted_descending(query in "[a-z]{2,4}") {
            let catalog = festival_catalog();
            let engine = SearchEngine::with_defaults(&catalog);
            let results = engine.search(&query);
            for pair in results.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }
        }
    }
}
