use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use vsm_core::{Analyzer, RankedResult, Similarity, Strategy, VectorSpaceModel, Weighting};
use walkdir::WalkDir;

/// Documents in load order, with the external id each one is reported under.
#[derive(Debug, Default)]
pub struct Corpus {
    pub ids: Vec<String>,
    pub texts: Vec<String>,
}

impl Corpus {
    pub fn len(&self) -> usize { self.ids.len() }

    pub fn is_empty(&self) -> bool { self.ids.is_empty() }

    pub fn id(&self, index: usize) -> Option<&str> {
        self.ids.get(index).map(String::as_str)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|i| i == id)
    }
}

/// Load every regular file directly under `dir`, ordered by file name.
/// A file's id is its name up to the first `.`, e.g. `1024.product` -> `1024`.
/// Files without an id (`.hidden`) or repeating an earlier id are skipped.
pub fn load_corpus<P: AsRef<Path>>(dir: P) -> Result<Corpus> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        bail!("documents directory {} does not exist", dir.display());
    }
    let mut corpus = Corpus::default();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| format!("listing {}", dir.display()))?;
        if !entry.file_type().is_file() { continue; }
        let name = entry.file_name().to_string_lossy();
        let id = name.split('.').next().unwrap_or_default().to_string();
        if id.is_empty() {
            tracing::warn!(file = %name, "skipping file without a document id");
            continue;
        }
        if corpus.position(&id).is_some() {
            tracing::warn!(file = %name, %id, "skipping file with duplicate document id");
            continue;
        }
        let raw = fs::read_to_string(entry.path())
            .with_context(|| format!("reading {}", entry.path().display()))?;
        corpus.ids.push(id);
        corpus.texts.push(raw.lines().collect::<Vec<_>>().join(" "));
    }
    tracing::info!(num_docs = corpus.len(), dir = %dir.display(), "loaded documents");
    Ok(corpus)
}

#[derive(Debug, Serialize)]
pub struct Hit {
    pub doc_id: String,
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub struct Section {
    pub strategy: String,
    pub weighting: Weighting,
    pub similarity: Similarity,
    pub results: Vec<Hit>,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub query: String,
    pub sections: Vec<Section>,
}

fn section(
    corpus: &Corpus,
    title: String,
    weighting: Weighting,
    similarity: Similarity,
    ranked: RankedResult,
) -> Section {
    let results = ranked
        .into_iter()
        .map(|s| Hit { doc_id: corpus.id(s.doc).unwrap_or_default().to_string(), score: s.score })
        .collect();
    Section { strategy: title, weighting, similarity, results }
}

/// Run every strategy for `query`, plus a related-documents section when `related` names a document.
pub fn run_report<A: Analyzer>(
    model: &VectorSpaceModel<A>,
    corpus: &Corpus,
    query: &str,
    related: Option<&str>,
) -> Result<Report> {
    let terms = [query];
    let mut sections = Vec::with_capacity(Strategy::ALL.len() + 1);
    for strategy in Strategy::ALL {
        let ranked = model.search(strategy, &terms)?;
        tracing::debug!(?strategy, hits = ranked.len(), "ranked");
        sections.push(section(
            corpus,
            strategy.label().to_string(),
            strategy.weighting(),
            strategy.similarity(),
            ranked,
        ));
    }
    if let Some(id) = related {
        let doc = corpus.position(id).with_context(|| format!("unknown document id {id}"))?;
        let ranked = model.ranked_related(doc)?;
        sections.push(section(
            corpus,
            format!("Documents Related to {id} + Cosine Similarity"),
            Weighting::TermFrequency,
            Similarity::Cosine,
            ranked,
        ));
    }
    Ok(Report { query: query.to_string(), sections })
}

pub fn render_text(report: &Report) -> String {
    let mut out = format!("the query is: {}\n", report.query);
    for section in &report.sections {
        out.push_str(&format!("\n{}\n\nDocID  Score\n", section.strategy));
        for hit in &section.results {
            out.push_str(&format!("{} {}\n", hit.doc_id, hit.score));
        }
    }
    out
}

pub fn render_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
