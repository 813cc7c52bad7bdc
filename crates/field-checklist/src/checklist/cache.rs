use std::collections::{HashMap, VecDeque};

use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use super::template::ChecklistTemplate;
use super::validate::{validate_template, ValidatedTemplate, ValidationError, ValidationErrors};

pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Cache identity: template id plus a digest of its full content, so an
/// edited template under the same id is never served a stale outcome.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateFingerprint {
    pub template_id: String,
    pub content_hash: String,
}

impl TemplateFingerprint {
    pub fn of(template: &ChecklistTemplate) -> Result<Self, serde_json::Error> {
        Ok(Self {
            template_id: template.id.clone(),
            content_hash: content_hash_hex(template)?,
        })
    }
}

/// SHA-256 over the canonical JSON encoding (object keys sorted).
pub fn content_hash_hex(template: &ChecklistTemplate) -> Result<String, serde_json::Error> {
    let canonical = serde_json::to_value(template)?;
    let bytes = serde_json::to_vec(&canonical)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(format!("{:x}", hasher.finalize()))
}

/// Memoizes template validation outcomes, evicting the oldest entry first.
#[derive(Debug)]
pub struct TemplateValidationCache {
    capacity: usize,
    outcomes: HashMap<TemplateFingerprint, Vec<ValidationError>>,
    order: VecDeque<TemplateFingerprint>,
    hits: u64,
    misses: u64,
}

impl Default for TemplateValidationCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

impl TemplateValidationCache {
    /// A zero capacity is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            outcomes: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            hits: 0,
            misses: 0,
        }
    }

    pub fn validate<'t>(
        &mut self,
        template: &'t ChecklistTemplate,
    ) -> Result<ValidatedTemplate<'t>, ValidationErrors> {
        let fingerprint = match TemplateFingerprint::of(template) {
            Ok(fingerprint) => fingerprint,
            Err(err) => {
                warn!(
                    template_id = %template.id,
                    error = %err,
                    "template fingerprint failed; validating uncached"
                );
                return validate_template(template);
            }
        };

        if let Some(errors) = self.outcomes.get(&fingerprint) {
            self.hits += 1;
            debug!(template_id = %template.id, "template validation cache hit");
            ValidationErrors::check(errors.clone())?;
            return Ok(ValidatedTemplate::index(template));
        }

        self.misses += 1;
        let outcome = validate_template(template);
        let recorded = match &outcome {
            Ok(_) => Vec::new(),
            Err(errors) => errors.as_slice().to_vec(),
        };
        self.store(fingerprint, recorded);
        outcome
    }

    fn store(&mut self, fingerprint: TemplateFingerprint, errors: Vec<ValidationError>) {
        while self.order.len() >= self.capacity {
            match self.order.pop_front() {
                Some(evicted) => {
                    self.outcomes.remove(&evicted);
                }
                None => break,
            }
        }
        self.order.push_back(fingerprint.clone());
        self.outcomes.insert(fingerprint, errors);
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
