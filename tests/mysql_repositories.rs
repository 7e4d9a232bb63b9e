//! Integration tests per i repository MySQL
//!
//! Questi test usano `#[sqlx::test]` che:
//! - Crea automaticamente un database di test isolato
//! - Applica le migrations da `migrations/`
//! - Applica i fixtures specificati da `fixtures/`
//! - Pulisce il database al termine
//!
//! Servono un MySQL raggiungibile e `DATABASE_URL`:
//! `cargo test --test mysql_repositories -- --ignored`

#[cfg(test)]
mod mysql_tests {
    use item_server::dtos::{CreateItemDTO, ItemFilter};
    use item_server::repositories::{
        CredentialStore, ItemRepository, ItemStore, StoreError, UserRepository,
    };
    use sqlx::MySqlPool;

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    #[ignore = "requires a MySQL server (DATABASE_URL)"]
    async fn test_register_duplicate_username(pool: MySqlPool) -> sqlx::Result<()> {
        let users = UserRepository::new(pool);

        let result = users.register("alice", "whatever", 4).await;

        assert!(matches!(result, Err(StoreError::DuplicateUsername)));
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    #[ignore = "requires a MySQL server (DATABASE_URL)"]
    async fn test_register_then_find(pool: MySqlPool) -> sqlx::Result<()> {
        let users = UserRepository::new(pool);

        let created = users.register("carol", "s3cret", 4).await.unwrap();
        let found = users.find_by_username("carol").await.unwrap().unwrap();

        assert_eq!(found, created);
        assert!(found.verify_password("s3cret").unwrap());
        assert!(!found.verify_password("S3cret").unwrap());
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    #[ignore = "requires a MySQL server (DATABASE_URL)"]
    async fn test_fixture_password_verifies(pool: MySqlPool) -> sqlx::Result<()> {
        let users = UserRepository::new(pool);

        let alice = users.find_by_username("alice").await.unwrap().unwrap();

        assert!(alice.verify_password("password123").unwrap());
        assert!(users.find_by_username("nobody").await.unwrap().is_none());
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("items")))]
    #[ignore = "requires a MySQL server (DATABASE_URL)"]
    async fn test_list_filters(pool: MySqlPool) -> sqlx::Result<()> {
        let items = ItemRepository::new(pool);

        let filter = ItemFilter {
            owner: Some("alice".to_string()),
            item_type: Some("book".to_string()),
        };
        let found = items.list(&filter).await.unwrap();
        let names: Vec<_> = found.iter().map(|i| i.item_name.as_str()).collect();
        assert_eq!(names, vec!["Dune", "Neuromancer"]);

        let all = items.list(&ItemFilter::default()).await.unwrap();
        assert_eq!(all.len(), 4);
        Ok(())
    }

    #[sqlx::test]
    #[ignore = "requires a MySQL server (DATABASE_URL)"]
    async fn test_create_validates_before_insert(pool: MySqlPool) -> sqlx::Result<()> {
        let items = ItemRepository::new(pool);

        let invalid = CreateItemDTO {
            item_name: "Dune".to_string(),
            category: String::new(),
            username: "alice".to_string(),
            item_type: "book".to_string(),
        };
        assert!(matches!(
            items.create(&invalid).await,
            Err(StoreError::Validation(_))
        ));
        assert!(items.list(&ItemFilter::default()).await.unwrap().is_empty());

        let created = items
            .create(&CreateItemDTO {
                category: "novel".to_string(),
                ..invalid
            })
            .await
            .unwrap();
        assert_eq!(created.itemid, 1);
        Ok(())
    }
}
