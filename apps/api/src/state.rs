use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::parsing::builder::ResumeParser;
use crate::parsing::contact::ContactExtractor;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub parser: Arc<ResumeParser>,
    /// Parsed collection for this process. Handlers read it through snapshots.
    pub store: ResumeStore,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let contact = match config.phone_pattern.as_deref() {
            Some(pattern) => ContactExtractor::with_phone_pattern(pattern)
                .with_context(|| format!("PHONE_PATTERN is not a valid regex: '{pattern}'"))?,
            None => ContactExtractor::default(),
        };
        Ok(Self {
            config,
            parser: Arc::new(ResumeParser::new(contact)),
            store: ResumeStore::new(),
        })
    }
}
