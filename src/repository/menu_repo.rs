use crate::model::menu::MenuItem;
use async_trait::async_trait;

#[async_trait]
pub trait MenuRepository: Send + Sync {
    async fn list(&self) -> Vec<MenuItem>;
}

/// Static catalog, built once at startup. Insertion order is preserved and
/// is what the grouped menu view keys off.
pub struct InMemoryMenuRepository {
    items: Vec<MenuItem>,
}

impl InMemoryMenuRepository {
    pub fn new(items: Vec<MenuItem>) -> Self {
        InMemoryMenuRepository { items }
    }
}

#[async_trait]
impl MenuRepository for InMemoryMenuRepository {
    async fn list(&self) -> Vec<MenuItem> {
        self.items.clone()
    }
}
