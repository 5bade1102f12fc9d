//! Company frequency across all exports

use super::record::OwnerExport;
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyCount {
    pub company: String,
    pub connections: usize,
}

/// The `limit` most frequent companies over every row of every export.
///
/// Rows without a company are ignored. Ties keep first-seen order.
pub fn top_companies(exports: &[OwnerExport], limit: usize) -> Vec<CompanyCount> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for company in exports
        .iter()
        .flat_map(|export| export.entries.iter())
        .filter_map(|entry| entry.company.as_deref())
        .filter(|company| !company.is_empty())
    {
        *counts.entry(company).or_insert(0) += 1;
    }

    let mut ranked: Vec<CompanyCount> = counts
        .into_iter()
        .map(|(company, connections)| CompanyCount {
            company: company.to_string(),
            connections,
        })
        .collect();
    ranked.sort_by(|a, b| b.connections.cmp(&a.connections));
    ranked.truncate(limit);
    ranked
}
