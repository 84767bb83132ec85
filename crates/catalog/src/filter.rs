//! Derivative-title exclusion.

use crate::record::SearchDoc;

/// True when a title reads as derivative/study material rather than an
/// original work. Matching is lower-cased substring containment against the
/// deny-list.
pub fn is_derivative_title(title: &str, deny_list: &[String]) -> bool {
    let normalized = title.to_lowercase();
    deny_list
        .iter()
        .any(|marker| normalized.contains(marker.as_str()))
}

/// Drop search hits whose titles match the deny-list. Applied to both the
/// primary lookup and candidate searches.
pub fn retain_original_works(docs: Vec<SearchDoc>, deny_list: &[String]) -> Vec<SearchDoc> {
    docs.into_iter()
        .filter(|doc| match doc.title.as_deref() {
            Some(title) => !is_derivative_title(title, deny_list),
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CatalogConfig;

    fn deny_list() -> Vec<String> {
        CatalogConfig::default().title_deny_list
    }

    #[test]
    fn study_guide_is_derivative() {
        let deny = deny_list();
        assert!(is_derivative_title("Moby Dick: A Study Guide", &deny));
        assert!(is_derivative_title("MOBY DICK: A STUDY GUIDE", &deny));
        assert!(is_derivative_title("SparkNotes: The Great Gatsby", &deny));
        assert!(is_derivative_title("Dune (Summary & Analysis)", &deny));
        assert!(is_derivative_title("War and Peace Workbook", &deny));
    }

    #[test]
    fn original_works_pass() {
        let deny = deny_list();
        assert!(!is_derivative_title("Moby Dick", &deny));
        assert!(!is_derivative_title("Dune", &deny));
        assert!(!is_derivative_title("Crime and Punishment", &deny));
    }

    #[test]
    fn substring_matching_is_deliberately_coarse() {
        // "The Companions" is a legitimate novel but trips the "companion"
        // marker; the deny-list trades recall for never surfacing study aids.
        assert!(is_derivative_title("The Companions", &deny_list()));
    }

    #[test]
    fn retain_filters_only_matching_titles() {
        let deny = deny_list();
        let docs = vec![
            SearchDoc {
                title: Some("Moby Dick".into()),
                ..Default::default()
            },
            SearchDoc {
                title: Some("Moby Dick: A Study Guide".into()),
                ..Default::default()
            },
            SearchDoc {
                title: None,
                ..Default::default()
            },
        ];
        let kept = retain_original_works(docs, &deny);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].title.as_deref(), Some("Moby Dick"));
        assert!(kept[1].title.is_none());
    }
}
