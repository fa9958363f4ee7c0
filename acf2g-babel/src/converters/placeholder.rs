use crate::converter::LayoutConverter;
use crate::error::Result;
use crate::layout::{LayoutInstance, LayoutKind};
use crate::store::ImageResolver;

/// Emits a fixed stub naming the layout kind, e.g. `video block`.
#[derive(Debug, Clone)]
pub struct PlaceholderConverter {
    kind: LayoutKind,
    stub: String,
}

impl PlaceholderConverter {
    pub fn new(kind: LayoutKind) -> Self {
        Self {
            kind,
            stub: kind.name().replace('_', " "),
        }
    }

    pub fn stub(&self) -> &str {
        &self.stub
    }
}

impl LayoutConverter for PlaceholderConverter {
    fn kind(&self) -> LayoutKind {
        self.kind
    }

    fn description(&self) -> &str {
        "Stub text, no block equivalent yet"
    }

    fn is_placeholder(&self) -> bool {
        true
    }

    fn convert(&self, _layout: &LayoutInstance, _resolver: &dyn ImageResolver) -> Result<String> {
        Ok(self.stub.clone())
    }
}
