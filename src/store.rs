//! JSON-file subscription store
//!
//! Subscriptions live in a single JSON file (`store.json` by default). The
//! file is small and rewritten whole on every change.

use std::fs;
use std::path::PathBuf;

use crate::Result;
use crate::error::RideForecastError;
use crate::models::Subscription;

#[derive(Debug, Clone)]
pub struct SubscriptionStore {
    path: PathBuf,
}

impl SubscriptionStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load all subscriptions; a store file that does not exist yet is an
    /// empty list, not an error.
    pub fn load(&self) -> Result<Vec<Subscription>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        serde_json::from_str(&raw).map_err(|err| {
            RideForecastError::store(format!(
                "failed to parse {}: {err}",
                self.path.display()
            ))
        })
    }

    /// Validate and append one subscription
    pub fn add(&self, subscription: Subscription) -> Result<()> {
        subscription.validate()?;

        let mut subscriptions = self.load()?;
        subscriptions.push(subscription);
        self.save(&subscriptions)
    }

    fn save(&self, subscriptions: &[Subscription]) -> Result<()> {
        let encoded = serde_json::to_string_pretty(subscriptions)
            .map_err(|err| RideForecastError::store(format!("failed to encode store: {err}")))?;
        fs::write(&self.path, encoded)?;
        Ok(())
    }
}
