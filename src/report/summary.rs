//! Aggregate statistics over a set of script records.

use crate::types::{Category, ScriptRecord};
use serde::Serialize;
use std::collections::HashMap;

/// Maximum number of rows in the top third-party hosts table.
pub const TOP_HOSTS_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostCount {
    pub host: String,
    pub count: usize,
}

/// Counts shown in the summary report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub total: usize,
    pub first_party: usize,
    pub third_party: usize,
    /// Sorted by count descending, then label ascending.
    pub categories: Vec<CategoryCount>,
    /// Sorted by count descending, then host ascending; capped at
    /// [`TOP_HOSTS_LIMIT`].
    pub top_third_party_hosts: Vec<HostCount>,
}

impl ScanSummary {
    pub fn from_records(records: &[ScriptRecord]) -> Self {
        let first_party = records.iter().filter(|r| r.first_party).count();

        let mut category_counts: HashMap<Category, usize> = HashMap::new();
        for record in records {
            *category_counts.entry(record.category).or_default() += 1;
        }
        let mut categories: Vec<CategoryCount> = category_counts
            .into_iter()
            .map(|(category, count)| CategoryCount { category, count })
            .collect();
        categories.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.category.as_str().cmp(b.category.as_str()))
        });

        let mut host_counts: HashMap<&str, usize> = HashMap::new();
        for record in records.iter().filter(|r| !r.first_party && !r.host.is_empty()) {
            *host_counts.entry(record.host.as_str()).or_default() += 1;
        }
        let mut top_third_party_hosts: Vec<HostCount> = host_counts
            .into_iter()
            .map(|(host, count)| HostCount {
                host: host.to_string(),
                count,
            })
            .collect();
        top_third_party_hosts
            .sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.host.cmp(&b.host)));
        top_third_party_hosts.truncate(TOP_HOSTS_LIMIT);

        Self {
            total: records.len(),
            first_party,
            third_party: records.len() - first_party,
            categories,
            top_third_party_hosts,
        }
    }
}
