//! Category and free-text filtering over the services catalog.

use crate::content::services::{Category, ServiceRecord};
use crate::i18n::Locale;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn admits(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

/// Lowercased text a query is matched against, in the given locale.
pub fn haystack(record: &ServiceRecord, locale: Locale) -> String {
    format!(
        "{} {} {}",
        record.title.get(locale),
        record.description.get(locale),
        record.tags.join(" ")
    )
    .to_lowercase()
}

/// Whether `record` passes both the category gate and the query.
pub fn matches(record: &ServiceRecord, filter: CategoryFilter, query: &str, locale: Locale) -> bool {
    if !filter.admits(record.category) {
        return false;
    }
    let needle = query.trim().to_lowercase();
    needle.is_empty() || haystack(record, locale).contains(&needle)
}

/// Visible subset of `records`, in source order.
pub fn filter<'a>(
    records: &'a [ServiceRecord],
    category: CategoryFilter,
    query: &str,
    locale: Locale,
) -> Vec<&'a ServiceRecord> {
    records
        .iter()
        .filter(|record| matches(record, category, query, locale))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::services::SERVICES;
    use proptest::prelude::*;

    fn titles(records: &[&ServiceRecord]) -> Vec<&'static str> {
        records.iter().map(|r| r.title.en).collect()
    }

    fn any_filter() -> impl Strategy<Value = CategoryFilter> {
        prop_oneof![
            Just(CategoryFilter::All),
            (0..Category::ALL.len()).prop_map(|i| CategoryFilter::Only(Category::ALL[i])),
        ]
    }

    fn any_locale() -> impl Strategy<Value = Locale> {
        prop_oneof![Just(Locale::Pt), Just(Locale::En)]
    }

    #[test]
    fn wildcard_with_empty_query_is_identity() {
        for locale in Locale::ALL {
            let all = filter(SERVICES, CategoryFilter::All, "", locale);
            assert_eq!(all.len(), SERVICES.len());
            assert!(all.iter().zip(SERVICES).all(|(a, b)| std::ptr::eq(*a, b)));
        }
    }

    #[test]
    fn blank_query_behaves_like_empty() {
        let spaced = filter(SERVICES, CategoryFilter::All, "   ", Locale::Pt);
        assert_eq!(spaced.len(), SERVICES.len());
    }

    #[test]
    fn sd_wan_search_is_case_insensitive() {
        for category in [CategoryFilter::All, CategoryFilter::Only(Category::Infrastructure)] {
            let upper = filter(SERVICES, category, "SD-WAN", Locale::En);
            let lower = filter(SERVICES, category, "sd-wan", Locale::En);
            assert_eq!(titles(&upper), titles(&lower));
            assert!(titles(&upper).contains(&"SD-WAN Implementation"));
        }
    }

    #[test]
    fn tags_are_searchable() {
        let hits = filter(SERVICES, CategoryFilter::All, "terraform", Locale::Pt);
        assert_eq!(titles(&hits), vec!["Infrastructure as Code (IaC)"]);
    }

    #[test]
    fn query_uses_current_locale_text() {
        let pt = filter(SERVICES, CategoryFilter::All, "conscientização", Locale::Pt);
        let en = filter(SERVICES, CategoryFilter::All, "conscientização", Locale::En);
        assert_eq!(titles(&pt), vec!["Training and Awareness"]);
        assert!(en.is_empty());
    }

    #[test]
    fn category_gate_excludes_other_areas() {
        let hits = filter(
            SERVICES,
            CategoryFilter::Only(Category::Databases),
            "governance",
            Locale::En,
        );
        assert_eq!(
            titles(&hits),
            vec!["SQL Server Environment Support", "Data Consulting"]
        );
    }

    proptest! {
        #[test]
        fn result_is_an_ordered_subset_of_matching_records(
            category in any_filter(),
            query in "[a-zA-Z -]{0,8}",
            locale in any_locale(),
        ) {
            let result = filter(SERVICES, category, &query, locale);
            let needle = query.trim().to_lowercase();
            let expected: Vec<&ServiceRecord> = SERVICES
                .iter()
                .filter(|r| category.admits(r.category))
                .filter(|r| needle.is_empty() || haystack(r, locale).contains(&needle))
                .collect();
            prop_assert_eq!(result.len(), expected.len());
            for (got, want) in result.iter().zip(&expected) {
                prop_assert!(std::ptr::eq(*got, *want));
                prop_assert!(category.admits(got.category));
            }
        }

        #[test]
        fn case_of_query_does_not_matter(
            category in any_filter(),
            query in "[a-zA-Z0-9 -]{0,8}",
            locale in any_locale(),
        ) {
            let upper = filter(SERVICES, category, &query.to_uppercase(), locale);
            let lower = filter(SERVICES, category, &query.to_lowercase(), locale);
            prop_assert_eq!(titles(&upper), titles(&lower));
        }

        #[test]
        fn every_hit_contains_the_needle(
            category in any_filter(),
            query in "[a-z]{1,4}",
            locale in any_locale(),
        ) {
            for record in filter(SERVICES, category, &query, locale) {
                prop_assert!(haystack(record, locale).contains(&query));
            }
        }
    }
}
