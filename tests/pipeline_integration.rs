//! End-to-end pipeline scenarios over scripted collaborators.

mod common;

use std::sync::Arc;

use bookmatch::{
    CatalogConfig, InsightConfig, Outcome, PipelineConfig, Recommender,
};
use common::{doc, dune_catalog, ScriptedCatalog, DUNE_DESCRIPTION};
use insight::stub::ScriptedModel;

fn recommender(catalog: ScriptedCatalog, model: ScriptedModel) -> Recommender {
    Recommender::new(
        Arc::new(catalog),
        CatalogConfig::default(),
        Arc::new(model),
        InsightConfig::default(),
        PipelineConfig::default(),
    )
}

#[tokio::test]
async fn dune_happy_path_end_to_end() {
    let model = ScriptedModel::with_replies(vec![
        "desert, politics, science fiction".into(),
        "Both are sweeping science fiction epics about power and survival.".into(),
    ]);
    let rec = recommender(dune_catalog(), model);

    let Outcome::Success {
        original,
        keywords,
        results,
    } = rec.recommend("Dune", None, None).await
    else {
        panic!("expected success");
    };

    assert_eq!(original.title, "Dune");
    assert!(original.description.chars().count() >= 20);
    assert!(!keywords.is_empty());

    assert!(!results.is_empty());
    assert!(results.len() <= 3);
    for result in &results {
        assert!(result.score > 0.3, "score {} not above threshold", result.score);
        assert!(result.score <= 1.0 + 1e-6);
        assert!(!result.explanation.is_empty());
    }
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score, "ranking must be non-increasing");
    }
}

#[tokio::test]
async fn unknown_title_is_not_found() {
    let rec = recommender(
        ScriptedCatalog::default(),
        ScriptedModel::with_replies(vec![]),
    );
    let outcome = rec
        .recommend("Xyzzyplonk Nonexistent Title 12345", None, None)
        .await;
    assert_eq!(outcome, Outcome::NotFound);
}

#[tokio::test]
async fn study_guides_never_surface() {
    // The study guide is the only lookup hit AND the only candidate; it must
    // appear in neither role.
    let mut catalog = ScriptedCatalog {
        lookup: vec![
            doc("Moby Dick: A Study Guide", "/works/OLGUIDEW", Some(2010)),
            doc("Moby Dick", "/works/OL102749W", Some(1851)),
        ],
        ..Default::default()
    };
    catalog
        .descriptions
        .insert("/works/OL102749W".into(), DUNE_DESCRIPTION.into());
    catalog.keyword_hits.insert(
        "desert".into(),
        vec![doc("Dune: Summary & Analysis", "/works/OLSUMW", Some(2015))],
    );
    catalog
        .descriptions
        .insert("/works/OLSUMW".into(), DUNE_DESCRIPTION.into());

    let model = ScriptedModel::with_replies(vec!["desert".into()]);
    let rec = recommender(catalog, model);

    let Outcome::Success {
        original, results, ..
    } = rec.recommend("Moby Dick", None, None).await
    else {
        panic!("expected success");
    };

    assert_eq!(original.title, "Moby Dick");
    assert!(
        results.is_empty(),
        "derivative candidate must be excluded even with a perfect score"
    );
}

#[tokio::test]
async fn author_narrows_lookup_but_flows_through() {
    let model = ScriptedModel::with_replies(vec![
        "desert, politics".into(),
        "Shared setting and themes.".into(),
    ]);
    let rec = recommender(dune_catalog(), model);

    let outcome = rec.recommend("Dune", Some("Frank Herbert"), None).await;
    assert!(matches!(outcome, Outcome::Success { .. }));
}
