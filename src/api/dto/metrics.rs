//! DTOs for the top domains endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::DomainMetric;

/// One entry of the top domains array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DomainMetricItem {
    pub domain: String,
    pub counter: i64,
}

impl From<DomainMetric> for DomainMetricItem {
    fn from(metric: DomainMetric) -> Self {
        Self {
            domain: metric.domain,
            counter: metric.counter,
        }
    }
}
