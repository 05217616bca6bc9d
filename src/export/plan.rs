//! Which articles to export, in which order, under which labels

use std::collections::HashSet;

use crate::help_center::{ArticleSummary, Collection, Section};
use crate::utils::{DEFAULT_COLLECTION_LABEL, DEFAULT_SECTION_LABEL};

/// An article scheduled for export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingArticle {
    pub id: String,
    /// Title from the listing, used when the fetched record has none
    pub title_hint: Option<String>,
    /// Labels fixed by the traversal. `None` defers to the fetched record.
    pub collection: Option<String>,
    pub section: Option<String>,
}

impl PendingArticle {
    fn unlabeled(summary: &ArticleSummary) -> Self {
        Self {
            id: summary.id.clone(),
            title_hint: summary.title.clone(),
            collection: None,
            section: None,
        }
    }

    fn labeled(summary: &ArticleSummary, collection: &str, section: &str) -> Self {
        Self {
            id: summary.id.clone(),
            title_hint: summary.title.clone(),
            collection: Some(collection.to_string()),
            section: Some(section.to_string()),
        }
    }
}

/// Every listed article in listing order; labels come from each record.
pub fn flat_plan(articles: &[ArticleSummary]) -> Vec<PendingArticle> {
    articles.iter().map(PendingArticle::unlabeled).collect()
}

/// Collection → section → article order.
///
/// Articles attached directly to a collection land in its
/// `Uncategorized` section. Articles whose parent is unknown come last,
/// under `General/Uncategorized`.
pub fn hierarchical_plan(
    collections: &[Collection],
    sections: &[Section],
    articles: &[ArticleSummary],
) -> Vec<PendingArticle> {
    let mut plan = Vec::with_capacity(articles.len());
    let mut scheduled: HashSet<&str> = HashSet::new();

    for collection in collections {
        let collection_label = label_or(&collection.name, DEFAULT_COLLECTION_LABEL);

        for section in sections
            .iter()
            .filter(|s| s.parent_id.as_deref() == Some(collection.id.as_str()))
        {
            let section_label = label_or(&section.name, DEFAULT_SECTION_LABEL);
            for article in children_of(articles, &section.id) {
                if scheduled.insert(&article.id) {
                    plan.push(PendingArticle::labeled(article, collection_label, section_label));
                }
            }
        }

        for article in children_of(articles, &collection.id) {
            if scheduled.insert(&article.id) {
                plan.push(PendingArticle::labeled(
                    article,
                    collection_label,
                    DEFAULT_SECTION_LABEL,
                ));
            }
        }
    }

    for article in articles {
        if scheduled.insert(&article.id) {
            plan.push(PendingArticle::labeled(
                article,
                DEFAULT_COLLECTION_LABEL,
                DEFAULT_SECTION_LABEL,
            ));
        }
    }

    plan
}

fn children_of<'a>(
    articles: &'a [ArticleSummary],
    parent: &'a str,
) -> impl Iterator<Item = &'a ArticleSummary> {
    articles
        .iter()
        .filter(move |a| a.parent_id.as_deref() == Some(parent))
}

/// `value` trimmed, or `fallback` if that leaves nothing
pub(crate) fn label_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() { fallback } else { trimmed }
}
