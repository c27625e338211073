use std::sync::Arc;

use dioxus::html::FileEngine;
use resume::PhotoSource;

/// A photo picked through a file input, not yet read.
#[derive(Clone)]
pub struct SelectedPhoto {
    engine: Arc<dyn FileEngine>,
    name: String,
}

impl SelectedPhoto {
    /// The first file of a file-input change, if any was chosen.
    pub fn from_engine(engine: Arc<dyn FileEngine>) -> Option<Self> {
        let name = engine.files().into_iter().next()?;
        Some(Self { engine, name })
    }
}

impl PhotoSource for SelectedPhoto {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read(&self) -> Option<Vec<u8>> {
        self.engine.read_file(&self.name).await
    }
}
