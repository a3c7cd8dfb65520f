//! Squirrel service — use-cases for managing squirrel records.

use scurry_domain::error::{NotFoundError, ScurryError};
use scurry_domain::id::SquirrelId;
use scurry_domain::squirrel::{Squirrel, SquirrelAttributes};

use crate::ports::SquirrelRepository;

fn not_found(id: SquirrelId) -> ScurryError {
    NotFoundError {
        entity: "Squirrel",
        id: id.to_string(),
    }
    .into()
}

/// Application service for squirrel CRUD operations.
pub struct SquirrelService<R> {
    repo: R,
}

impl<R: SquirrelRepository> SquirrelService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a new squirrel and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_squirrel(
        &self,
        attrs: SquirrelAttributes,
    ) -> Result<Squirrel, ScurryError> {
        let created = self.repo.create(attrs).await?;
        tracing::info!(id = %created.id, "squirrel created");
        Ok(created)
    }

    /// Look up a squirrel by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ScurryError::NotFound`] when no squirrel with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_squirrel(&self, id: SquirrelId) -> Result<Squirrel, ScurryError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// List all squirrels, ascending by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_squirrels(&self) -> Result<Vec<Squirrel>, ScurryError> {
        self.repo.get_all().await
    }

    /// Overwrite name and size of an existing squirrel.
    ///
    /// # Errors
    ///
    /// Returns [`ScurryError::NotFound`] when no squirrel with `id` exists,
    /// or a storage error from the repository.
    pub async fn update_squirrel(
        &self,
        id: SquirrelId,
        attrs: SquirrelAttributes,
    ) -> Result<(), ScurryError> {
        if self.repo.update(id, attrs).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }

    /// Delete a squirrel by id.
    ///
    /// # Errors
    ///
    /// Returns [`ScurryError::NotFound`] when no squirrel with `id` exists,
    /// or a storage error from the repository.
    pub async fn delete_squirrel(&self, id: SquirrelId) -> Result<(), ScurryError> {
        if self.repo.delete(id).await? {
            tracing::info!(id = %id, "squirrel deleted");
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::sync::Mutex;

    /// In-memory repository mirroring the storage contract: ids count up
    /// from 1 and are never handed out twice.
    struct InMemorySquirrelRepo {
        store: Mutex<(i64, BTreeMap<SquirrelId, Squirrel>)>,
    }

    impl Default for InMemorySquirrelRepo {
        fn default() -> Self {
            Self {
                store: Mutex::new((0, BTreeMap::new())),
            }
        }
    }

    impl SquirrelRepository for InMemorySquirrelRepo {
        fn create(
            &self,
            attrs: SquirrelAttributes,
        ) -> impl Future<Output = Result<Squirrel, ScurryError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.0 += 1;
            let squirrel = attrs.into_squirrel(SquirrelId::from_i64(store.0));
            store.1.insert(squirrel.id, squirrel.clone());
            async { Ok(squirrel) }
        }

        fn get_by_id(
            &self,
            id: SquirrelId,
        ) -> impl Future<Output = Result<Option<Squirrel>, ScurryError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.1.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Squirrel>, ScurryError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Squirrel> = store.1.values().cloned().collect();
            async { Ok(result) }
        }

        fn update(
            &self,
            id: SquirrelId,
            attrs: SquirrelAttributes,
        ) -> impl Future<Output = Result<bool, ScurryError>> + Send {
            let mut store = self.store.lock().unwrap();
            let updated = match store.1.get_mut(&id) {
                Some(existing) => {
                    *existing = attrs.into_squirrel(id);
                    true
                }
                None => false,
            };
            async move { Ok(updated) }
        }

        fn delete(&self, id: SquirrelId) -> impl Future<Output = Result<bool, ScurryError>> + Send {
            let mut store = self.store.lock().unwrap();
            let deleted = store.1.remove(&id).is_some();
            async move { Ok(deleted) }
        }
    }

    fn make_service() -> SquirrelService<InMemorySquirrelRepo> {
        SquirrelService::new(InMemorySquirrelRepo::default())
    }

    fn attrs(name: &str, size: &str) -> SquirrelAttributes {
        SquirrelAttributes::builder()
            .name(name)
            .size(size)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_then_get_with_assigned_id() {
        let svc = make_service();

        let created = svc.create_squirrel(attrs("Rocky", "large")).await.unwrap();
        assert_eq!(created.id, SquirrelId::from_i64(1));

        let fetched = svc.get_squirrel(created.id).await.unwrap();
        assert_eq!(fetched.name, "Rocky");
        assert_eq!(fetched.size, "large");
    }

    #[tokio::test]
    async fn should_return_not_found_when_squirrel_missing() {
        let svc = make_service();
        let result = svc.get_squirrel(SquirrelId::from_i64(99)).await;
        assert!(matches!(result, Err(ScurryError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_in_creation_order() {
        let svc = make_service();
        svc.create_squirrel(attrs("First", "large")).await.unwrap();
        svc.create_squirrel(attrs("Second", "small")).await.unwrap();

        let all = svc.list_squirrels().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "First");
        assert_eq!(all[1].name, "Second");
        assert!(all[0].id < all[1].id);
    }

    #[tokio::test]
    async fn should_update_fields_but_never_id() {
        let svc = make_service();
        let created = svc.create_squirrel(attrs("Rocky", "large")).await.unwrap();

        svc.update_squirrel(created.id, attrs("Rocky", "small"))
            .await
            .unwrap();

        let fetched = svc.get_squirrel(created.id).await.unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.size, "small");
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_id() {
        let svc = make_service();
        let result = svc
            .update_squirrel(SquirrelId::from_i64(5), attrs("Ghost", "tiny"))
            .await;
        assert!(matches!(result, Err(ScurryError::NotFound(_))));
        assert!(svc.list_squirrels().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_make_deleted_id_terminal() {
        let svc = make_service();
        let created = svc.create_squirrel(attrs("Temp", "medium")).await.unwrap();

        svc.delete_squirrel(created.id).await.unwrap();

        assert!(matches!(
            svc.get_squirrel(created.id).await,
            Err(ScurryError::NotFound(_))
        ));
        assert!(matches!(
            svc.update_squirrel(created.id, attrs("Back", "small")).await,
            Err(ScurryError::NotFound(_))
        ));
        assert!(matches!(
            svc.delete_squirrel(created.id).await,
            Err(ScurryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn should_not_reassign_deleted_id_on_create() {
        let svc = make_service();
        let first = svc.create_squirrel(attrs("First", "large")).await.unwrap();
        svc.delete_squirrel(first.id).await.unwrap();

        let second = svc.create_squirrel(attrs("Second", "small")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn should_keep_other_records_when_one_deleted() {
        let svc = make_service();
        let first = svc.create_squirrel(attrs("Keep", "large")).await.unwrap();
        let second = svc.create_squirrel(attrs("Drop", "small")).await.unwrap();

        svc.delete_squirrel(second.id).await.unwrap();

        let all = svc.list_squirrels().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, first.id);
        assert_eq!(all[0].name, "Keep");
    }
}
