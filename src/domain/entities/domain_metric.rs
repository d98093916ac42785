//! Per-domain shortening counter.

/// Number of `create` calls observed for a domain.
///
/// The counter starts at 1 when the domain is first shortened and grows by one
/// on every subsequent create for that domain, duplicates included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainMetric {
    pub domain: String,
    pub counter: i64,
}

impl DomainMetric {
    pub fn new(domain: impl Into<String>, counter: i64) -> Self {
        Self {
            domain: domain.into(),
            counter,
        }
    }
}

/// Orders metrics by counter descending and keeps the first three.
///
/// The sort is stable, so entries with equal counters keep the order in which
/// they were supplied.
pub fn top_three(mut metrics: Vec<DomainMetric>) -> Vec<DomainMetric> {
    metrics.sort_by(|a, b| b.counter.cmp(&a.counter));
    metrics.truncate(3);
    metrics
}
