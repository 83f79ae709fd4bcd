use pwdist_core::{distance_with, Unit};
use serde::{Deserialize, Serialize};

use crate::config::AuditConfig;
use crate::record::PasswordRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    Identical,
    TrivialVariant { distance: usize, similarity: f32 },
    Distinct,
}

impl Verdict {
    pub fn is_flagged(&self) -> bool {
        !matches!(self, Verdict::Distinct)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Identical => write!(f, "identical"),
            Verdict::TrivialVariant { distance, similarity } => {
                write!(f, "trivial variant (distance {distance}, similarity {similarity:.2})")
            }
            Verdict::Distinct => write!(f, "distinct"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// `None` when the left side is the unsaved candidate password.
    pub left_id: Option<String>,
    pub right_id: String,
    pub distance: usize,
    pub verdict: Verdict,
}

pub struct SimilarityAuditor {
    config: AuditConfig,
}

impl Default for SimilarityAuditor {
    fn default() -> Self {
        Self::new(AuditConfig::default())
    }
}

impl SimilarityAuditor {
    pub fn new(config: AuditConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    pub fn classify(&self, a: &str, b: &str) -> Verdict {
        self.compare(a, b).1
    }

    /// Findings for every history entry the candidate repeats or barely
    /// changes, closest first. Ties keep history order.
    pub fn check_candidate(&self, candidate: &str, history: &[PasswordRecord]) -> Vec<Finding> {
        let mut findings: Vec<Finding> = history
            .iter()
            .filter_map(|rec| self.finding(None, candidate, &rec.id, &rec.password))
            .collect();
        findings.sort_by_key(|f| f.distance);

        tracing::info!(
            history = history.len(),
            flagged = findings.len(),
            "Checked candidate password against history"
        );
        findings
    }

    /// Every unordered pair within `records` that is identical or a trivial
    /// variant, in index order.
    pub fn find_similar_pairs(&self, records: &[PasswordRecord]) -> Vec<Finding> {
        let mut findings = Vec::new();

        for i in 0..records.len() {
            for j in (i + 1)..records.len() {
                let (r1, r2) = (&records[i], &records[j]);
                if let Some(finding) = self.finding(Some(&r1.id), &r1.password, &r2.id, &r2.password) {
                    findings.push(finding);
                }
            }
        }

        tracing::info!(
            records = records.len(),
            flagged = findings.len(),
            "Audited password set"
        );
        findings
    }

    fn finding(
        &self,
        left_id: Option<&str>,
        left: &str,
        right_id: &str,
        right: &str,
    ) -> Option<Finding> {
        let (distance, verdict) = self.compare(left, right);
        if !verdict.is_flagged() {
            return None;
        }
        tracing::debug!(
            left_id = left_id.unwrap_or("<candidate>"),
            right_id,
            distance,
            "Similar passwords"
        );
        Some(Finding {
            left_id: left_id.map(str::to_string),
            right_id: right_id.to_string(),
            distance,
            verdict,
        })
    }

    fn compare(&self, a: &str, b: &str) -> (usize, Verdict) {
        if a == b {
            return (0, Verdict::Identical);
        }

        let unit: Unit = self.config.unit;
        let (len_a, len_b) = (unit.count(a), unit.count(b));
        let distance = distance_with(a, b, unit);

        if len_a.min(len_b) < self.config.min_length {
            return (distance, Verdict::Distinct);
        }

        let similarity = 1.0 - distance as f32 / len_a.max(len_b) as f32;
        if distance <= self.config.max_distance || similarity >= self.config.min_similarity {
            (distance, Verdict::TrivialVariant { distance, similarity })
        } else {
            (distance, Verdict::Distinct)
        }
    }
}
