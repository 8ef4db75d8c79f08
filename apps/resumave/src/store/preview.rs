//! Live preview: keeps the composed document in sync with the store and the
//! resume data.

use std::sync::Arc;

use tracing::debug;

use crate::document::{compose_with, Document};
use crate::models::ResumeData;
use crate::render::{DateFormatter, MonthYearFormatter};
use crate::store::{CustomizationStore, StoreAction, Transition};

pub struct ResumePreview {
    store: CustomizationStore,
    resume: ResumeData,
    dates: Arc<dyn DateFormatter>,
    document: Document,
    revision: u64,
}

impl ResumePreview {
    pub fn new(store: CustomizationStore, resume: ResumeData) -> Self {
        Self::with_formatter(store, resume, Arc::new(MonthYearFormatter))
    }

    pub fn with_formatter(
        store: CustomizationStore,
        resume: ResumeData,
        dates: Arc<dyn DateFormatter>,
    ) -> Self {
        let document = compose_with(&resume, store.customization(), dates.as_ref());
        Self {
            store,
            resume,
            dates,
            document,
            revision: 1,
        }
    }

    pub fn store(&self) -> &CustomizationStore {
        &self.store
    }

    pub fn resume(&self) -> &ResumeData {
        &self.resume
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Number of renders so far, starting at 1 for the initial one.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Runs one store transition and re-renders if it changed anything.
    pub fn dispatch(&mut self, action: StoreAction) -> Transition {
        let transition = self.store.dispatch(action);
        if transition.is_applied() {
            self.render();
        }
        transition
    }

    /// Swaps in new resume data from the editor and re-renders.
    pub fn replace_resume(&mut self, resume: ResumeData) {
        self.resume = resume;
        self.render();
    }

    fn render(&mut self) {
        self.document = compose_with(&self.resume, self.store.customization(), self.dates.as_ref());
        self.revision += 1;
        debug!(revision = self.revision, "Preview re-rendered");
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}
