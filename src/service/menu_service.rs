use crate::model::menu::MenuItem;
use crate::repository::menu_repo::MenuRepository;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait MenuService: Send + Sync {
    async fn list(&self) -> Vec<MenuItem>;
    /// Groups the catalog by category. Categories appear in first-seen
    /// order and items keep their catalog insertion order within a group.
    async fn group_by_category(&self) -> Vec<(String, Vec<MenuItem>)>;
}

pub struct MenuServiceImpl {
    pub menu_repo: Arc<dyn MenuRepository>,
}

impl MenuServiceImpl {
    pub fn new(menu_repo: Arc<dyn MenuRepository>) -> Self {
        Self { menu_repo }
    }
}

#[async_trait]
impl MenuService for MenuServiceImpl {
    async fn list(&self) -> Vec<MenuItem> {
        self.menu_repo.list().await
    }

    async fn group_by_category(&self) -> Vec<(String, Vec<MenuItem>)> {
        let mut groups: Vec<(String, Vec<MenuItem>)> = Vec::new();
        for item in self.menu_repo.list().await {
            match groups.iter_mut().find(|(category, _)| *category == item.category) {
                Some((_, items)) => items.push(item),
                None => groups.push((item.category.clone(), vec![item])),
            }
        }
        groups
    }
}
