//! In-memory implementation of the URL store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::domain::entities::{DomainMetric, UrlRecord, top_three};
use crate::domain::repositories::UrlStore;
use crate::utils::extract_domain::get_domain;

/// Process-local store. Contents are lost on restart.
///
/// Both mappings and the domain counters live in one [`State`] behind a single
/// mutex, so every operation observes and leaves a consistent snapshot.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    /// url -> (write sequence, record)
    records: HashMap<String, (u64, UrlRecord)>,
    /// short key -> most recently written url holding that key
    by_short_url: HashMap<String, String>,
    next_seq: u64,
    /// Counters in first-seen order.
    metrics: Vec<DomainMetric>,
    /// domain -> index into `metrics`
    metric_index: HashMap<String, usize>,
}

impl State {
    fn store_record(&mut self, record: UrlRecord) {
        self.next_seq += 1;
        let url = record.url.clone();
        let short_key = record.short_url.clone();

        if let Some((_, previous)) = self.records.insert(url.clone(), (self.next_seq, record))
            && previous.short_url != short_key
            && self.by_short_url.get(&previous.short_url) == Some(&url)
        {
            match self.latest_holder(&previous.short_url) {
                Some(holder) => {
                    self.by_short_url.insert(previous.short_url, holder);
                }
                None => {
                    self.by_short_url.remove(&previous.short_url);
                }
            }
        }

        self.by_short_url.insert(short_key, url);
    }

    /// Most recently written url whose record still carries `short_key`.
    fn latest_holder(&self, short_key: &str) -> Option<String> {
        self.records
            .values()
            .filter(|(_, record)| record.short_url == short_key)
            .max_by_key(|(seq, _)| *seq)
            .map(|(_, record)| record.url.clone())
    }

    fn bump_counter(&mut self, domain: &str) {
        match self.metric_index.get(domain) {
            Some(&idx) => self.metrics[idx].counter += 1,
            None => {
                self.metric_index
                    .insert(domain.to_string(), self.metrics.len());
                self.metrics.push(DomainMetric::new(domain, 1));
            }
        }
    }
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory store");
        Self::default()
    }

    /// Creates a store pre-populated with domain counters, in the given order.
    pub fn with_metrics(metrics: impl IntoIterator<Item = DomainMetric>) -> Self {
        let mut state = State::default();
        for metric in metrics {
            state
                .metric_index
                .insert(metric.domain.clone(), state.metrics.len());
            state.metrics.push(metric);
        }
        Self {
            state: Mutex::new(state),
        }
    }

    /// Current counter for `domain`, if it has been shortened at least once.
    pub async fn domain_counter(&self, domain: &str) -> Option<i64> {
        let state = self.state.lock().await;
        state
            .metric_index
            .get(domain)
            .map(|&idx| state.metrics[idx].counter)
    }
}

#[async_trait]
impl UrlStore for MemoryStore {
    async fn create(&self, url: &str, short_key: &str) -> bool {
        let domain = match get_domain(url) {
            Ok(domain) => domain,
            Err(e) => {
                warn!("Refusing to store {}: {}", url, e);
                return false;
            }
        };

        let mut state = self.state.lock().await;

        state.store_record(UrlRecord::new(
            url.to_string(),
            short_key.to_string(),
            domain.clone(),
        ));
        state.bump_counter(&domain);
        true
    }

    async fn get_by_url(&self, url: &str) -> Option<String> {
        if url.is_empty() {
            debug!("Url can not be empty");
            return None;
        }

        let state = self.state.lock().await;
        state
            .records
            .get(url)
            .map(|(_, record)| record.short_url.clone())
    }

    async fn get_by_short_url(&self, short_key: &str) -> Option<String> {
        if short_key.is_empty() {
            debug!("Short key can not be empty");
            return None;
        }

        let state = self.state.lock().await;
        state.by_short_url.get(short_key).cloned()
    }

    async fn get_top_three_domains(&self) -> Vec<DomainMetric> {
        let state = self.state.lock().await;
        top_three(state.metrics.clone())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
