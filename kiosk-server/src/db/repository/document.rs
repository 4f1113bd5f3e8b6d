//! Document Repository
//!
//! Generic CRUD over collections whose documents carry their own `_id`.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::{Addon, Category, Image, Item, Order};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};

/// A document stored in its own collection
pub trait Document: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection name
    const TABLE: &'static str;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);
}

macro_rules! impl_document {
    ($ty:ty, $table:literal) => {
        impl Document for $ty {
            const TABLE: &'static str = $table;

            fn id(&self) -> &str {
                &self.id
            }

            fn set_id(&mut self, id: String) {
                self.id = id;
            }
        }
    };
}

impl_document!(Category, "MenuCategory");
impl_document!(Item, "MenuItem");
impl_document!(Addon, "MenuAddon");
impl_document!(Order, "MenuOrder");
impl_document!(Image, "MenuImage");

/// Generate a new document id
///
/// Time-ordered (UUID v7), so a table scan returns documents in insertion
/// order.
pub fn new_document_id() -> String {
    uuid::Uuid::now_v7().simple().to_string()
}

pub struct DocumentRepository<T> {
    base: BaseRepository,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for DocumentRepository<T> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            _marker: PhantomData,
        }
    }
}

pub type CategoryRepository = DocumentRepository<Category>;
pub type ItemRepository = DocumentRepository<Item>;
pub type AddonRepository = DocumentRepository<Addon>;
pub type OrderRepository = DocumentRepository<Order>;
pub type ImageRepository = DocumentRepository<Image>;

impl<T: Document> DocumentRepository<T> {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
            _marker: PhantomData,
        }
    }

    pub(crate) fn base(&self) -> &BaseRepository {
        &self.base
    }

    /// Find all documents in insertion order
    pub async fn find_all(&self) -> RepoResult<Vec<T>> {
        let docs: Vec<T> = self.base.db().select(T::TABLE).await?;
        Ok(docs)
    }

    /// Find document by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<T>> {
        let doc: Option<T> = self.base.db().select((T::TABLE, id.to_owned())).await?;
        Ok(doc)
    }

    /// Insert a document under a freshly generated id, ignoring any id it carries
    pub async fn create(&self, mut doc: T) -> RepoResult<T> {
        let id = new_document_id();
        doc.set_id(id.clone());

        let created: Option<T> = self
            .base
            .db()
            .create((T::TABLE, id))
            .content(doc)
            .await?;
        created
            .ok_or_else(|| RepoError::Database(format!("Failed to create {} document", T::TABLE)))
    }

    /// Replace the whole document, keeping its id. `None` if absent.
    pub async fn replace(&self, id: &str, mut doc: T) -> RepoResult<Option<T>> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(None);
        }
        doc.set_id(id.to_owned());

        let updated: Option<T> = self
            .base
            .db()
            .update((T::TABLE, id.to_owned()))
            .content(doc)
            .await?;
        Ok(updated)
    }

    /// Delete by id, returning the removed document
    pub async fn delete(&self, id: &str) -> RepoResult<Option<T>> {
        let deleted: Option<T> = self.base.db().delete((T::TABLE, id.to_owned())).await?;
        Ok(deleted)
    }
}
