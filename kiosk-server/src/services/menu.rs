//! Menu Service
//!
//! Categories, items, addons, settings and item images. Each operation
//! selects its collection from the `type` tag of the menu object.
//!
//! Deleting a category or addon does not touch items that reference it;
//! readers skip dangling ids. Deleting an item deletes its image.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use shared::models::{Image, Item, ItemPayload, Menu, MenuObject, MenuObjectType, Settings};
use shared::util::now_millis;
use shared::{AppError, AppResult, ErrorCode};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::repository::{
    AddonRepository, CategoryRepository, ImageRepository, ItemRepository, RepoResult,
    SettingsRepository,
};
use crate::services::ImagePipeline;
use crate::utils::validation::{validate_menu_object, validate_settings};

#[derive(Clone)]
pub struct MenuService {
    categories: CategoryRepository,
    items: ItemRepository,
    addons: AddonRepository,
    images: ImageRepository,
    settings: SettingsRepository,
    pipeline: ImagePipeline,
}

/// Reference to a stored menu object
#[derive(Debug, Clone, PartialEq)]
pub struct MenuObjectRef {
    pub object_type: MenuObjectType,
    pub id: String,
    pub name: String,
}

fn not_found(object_type: MenuObjectType, id: &str) -> AppError {
    let code = match object_type {
        MenuObjectType::Category => ErrorCode::CategoryNotFound,
        MenuObjectType::Item => ErrorCode::ItemNotFound,
        MenuObjectType::Addon => ErrorCode::AddonNotFound,
    };
    AppError::new(code).with_detail("id", id)
}

impl MenuService {
    pub fn new(db: Surreal<Db>, pipeline: ImagePipeline) -> Self {
        Self {
            categories: CategoryRepository::new(db.clone()),
            items: ItemRepository::new(db.clone()),
            addons: AddonRepository::new(db.clone()),
            images: ImageRepository::new(db.clone()),
            settings: SettingsRepository::new(db),
            pipeline,
        }
    }

    /// Full menu view
    pub async fn menu(&self) -> AppResult<Menu> {
        Ok(Menu {
            categories: self.categories.find_all().await?,
            items: self.items.find_all().await?,
            addons: self.addons.find_all().await?,
            settings: self.settings.get().await?,
        })
    }

    pub async fn add(&self, object: MenuObject) -> AppResult<MenuObjectRef> {
        validate_menu_object(&object)?;
        let object_type = object.object_type();

        let (id, name) = match object {
            MenuObject::Category(category) => {
                let created = self.categories.create(category).await?;
                (created.id, created.name)
            }
            MenuObject::Addon(addon) => {
                let created = self.addons.create(addon).await?;
                (created.id, created.name)
            }
            MenuObject::Item(ItemPayload { mut item, image }) => {
                let created = match image {
                    Some(data) => {
                        let image_id = self.store_image(&data).await?;
                        item.image_id = Some(image_id.clone());
                        let created = self.items.create(item).await.map(Some);
                        self.settle_image(&image_id, created).await?
                    }
                    None => {
                        item.image_id = None;
                        Some(self.items.create(item).await?)
                    }
                };
                let created = created.ok_or_else(|| AppError::internal("Item was not created"))?;
                (created.id, created.name)
            }
        };

        tracing::info!(object_type = %object_type, id = %id, "Menu object added");
        Ok(MenuObjectRef { object_type, id, name })
    }

    pub async fn remove(&self, object_type: MenuObjectType, id: &str) -> AppResult<()> {
        let removed = match object_type {
            MenuObjectType::Category => self.categories.delete(id).await?.is_some(),
            MenuObjectType::Addon => self.addons.delete(id).await?.is_some(),
            MenuObjectType::Item => match self.items.delete(id).await? {
                Some(item) => {
                    self.delete_image(item.image_id.as_deref()).await?;
                    true
                }
                None => false,
            },
        };

        if !removed {
            return Err(not_found(object_type, id));
        }
        tracing::info!(object_type = %object_type, id = %id, "Menu object removed");
        Ok(())
    }

    /// Replace the object stored under `id` in the collection named by its tag
    pub async fn modify(&self, id: &str, object: MenuObject) -> AppResult<MenuObjectRef> {
        validate_menu_object(&object)?;
        let object_type = object.object_type();

        let name = match object {
            MenuObject::Category(category) => self
                .categories
                .replace(id, category)
                .await?
                .map(|c| c.name),
            MenuObject::Addon(addon) => self.addons.replace(id, addon).await?.map(|a| a.name),
            MenuObject::Item(payload) => self.modify_item(id, payload).await?.map(|i| i.name),
        };

        let name = name.ok_or_else(|| not_found(object_type, id))?;
        tracing::info!(object_type = %object_type, id = %id, "Menu object modified");
        Ok(MenuObjectRef {
            object_type,
            id: id.to_string(),
            name,
        })
    }

    async fn modify_item(&self, id: &str, payload: ItemPayload) -> AppResult<Option<Item>> {
        let Some(existing) = self.items.find_by_id(id).await? else {
            return Ok(None);
        };

        let ItemPayload { mut item, image } = payload;
        match image {
            Some(data) => {
                let image_id = self.store_image(&data).await?;
                item.image_id = Some(image_id.clone());
                let updated = self.items.replace(id, item).await;
                let updated = self.settle_image(&image_id, updated).await?;
                if updated.is_some() {
                    self.delete_image(existing.image_id.as_deref()).await?;
                }
                Ok(updated)
            }
            None => {
                item.image_id = existing.image_id;
                Ok(self.items.replace(id, item).await?)
            }
        }
    }

    pub async fn settings(&self) -> AppResult<Settings> {
        Ok(self.settings.get().await?)
    }

    pub async fn modify_settings(&self, settings: Settings) -> AppResult<Settings> {
        validate_settings(&settings)?;
        let saved = self.settings.save(settings).await?;
        tracing::info!(tax_rate = saved.tax_rate, "Settings updated");
        Ok(saved)
    }

    /// JPEG bytes of a stored image
    pub async fn image(&self, id: &str) -> AppResult<Vec<u8>> {
        let image = self
            .images
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::ImageNotFound).with_detail("id", id))?;

        STANDARD
            .decode(image.data.as_bytes())
            .map_err(|e| AppError::internal(format!("Corrupt image {id}: {e}")))
    }

    async fn store_image(&self, data: &str) -> AppResult<String> {
        let processed = self.pipeline.process_base64(data)?;
        let stored = self
            .images
            .create(Image {
                id: String::new(),
                data: processed.to_base64(),
                width: processed.width,
                height: processed.height,
                created_at: now_millis(),
            })
            .await?;
        Ok(stored.id)
    }

    /// Drop a just-stored image unless the item write that references it landed
    async fn settle_image<T>(
        &self,
        image_id: &str,
        written: RepoResult<Option<T>>,
    ) -> AppResult<Option<T>> {
        match written {
            Ok(Some(item)) => Ok(Some(item)),
            Ok(None) => {
                self.delete_image(Some(image_id)).await?;
                Ok(None)
            }
            Err(e) => {
                if let Err(cleanup) = self.delete_image(Some(image_id)).await {
                    tracing::warn!(
                        image_id = %image_id,
                        error = %cleanup,
                        "Failed to drop orphaned image"
                    );
                }
                Err(e.into())
            }
        }
    }

    async fn delete_image(&self, image_id: Option<&str>) -> AppResult<()> {
        if let Some(image_id) = image_id
            && self.images.delete(image_id).await?.is_none()
        {
            tracing::warn!(image_id = %image_id, "Item referenced a missing image");
        }
        Ok(())
    }
}
