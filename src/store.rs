use std::sync::Arc;
use tokio::sync::RwLock;

/// Text extracted from one upload, with the file name it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub text: String,
    pub name: String,
}

impl Slot {
    fn has_text(&self) -> bool {
        !self.text.is_empty()
    }
}

/// Point-in-time copy of both slots, used to render the home page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSnapshot {
    pub document: Option<Slot>,
    pub image: Option<Slot>,
}

#[derive(Debug, Default)]
struct StoreInner {
    document: Option<Slot>,
    image: Option<Slot>,
}

/// Last document and last image extraction. Each category holds at most one
/// entry and a new upload in a category replaces it; nothing expires.
#[derive(Clone, Default)]
pub struct ExtractionStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl ExtractionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_document(&self, text: impl Into<String>, name: impl Into<String>) {
        let mut guard = self.inner.write().await;
        guard.document = Some(Slot {
            text: text.into(),
            name: name.into(),
        });
    }

    pub async fn set_image(&self, text: impl Into<String>, name: impl Into<String>) {
        let mut guard = self.inner.write().await;
        guard.image = Some(Slot {
            text: text.into(),
            name: name.into(),
        });
    }

    /// The slot questions are asked against: the document when it has text,
    /// otherwise the image.
    pub async fn active(&self) -> Option<Slot> {
        let guard = self.inner.read().await;
        guard
            .document
            .iter()
            .chain(guard.image.iter())
            .find(|slot| slot.has_text())
            .cloned()
    }

    pub async fn snapshot(&self) -> StoreSnapshot {
        let guard = self.inner.read().await;
        StoreSnapshot {
            document: guard.document.clone(),
            image: guard.image.clone(),
        }
    }
}
