//! User and credential repository

use crate::error::{StoreError, StoreResult};
use chrono::NaiveDateTime;
use ru_active_shared::{ActivityLevel, FitnessGoal};
use sqlx::SqlitePool;

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub created_at: NaiveDateTime,
}

/// Profile columns of a user row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProfileRecord {
    pub id: i64,
    pub username: String,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub age: Option<i32>,
    pub activity_level: Option<String>,
    pub goal: Option<String>,
}

impl ProfileRecord {
    pub fn activity_level(&self) -> Option<ActivityLevel> {
        self.activity_level.as_deref().map(ActivityLevel::from_label)
    }

    pub fn goal(&self) -> Option<FitnessGoal> {
        self.goal.as_deref().map(FitnessGoal::from_label)
    }
}

/// New values for every mutable profile column
#[derive(Debug, Clone)]
pub struct UpdateProfile {
    pub height: f64,
    pub weight: f64,
    pub age: i32,
    pub activity_level: ActivityLevel,
    pub goal: FitnessGoal,
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a user and its credential in one transaction.
    ///
    /// The unique index on `users.username` is the final arbiter, so a
    /// concurrent signup that slips past a caller's pre-check still fails
    /// with `DuplicateUsername`.
    pub async fn create(
        pool: &SqlitePool,
        username: &str,
        password_hash: &str,
    ) -> StoreResult<UserRecord> {
        let mut tx = pool.begin().await?;

        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (username)
            VALUES (?)
            RETURNING id, username, created_at
            "#,
        )
        .bind(username)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| duplicate_or(e, username))?;

        sqlx::query(
            r#"
            INSERT INTO credentials (username, password_hash)
            VALUES (?, ?)
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .execute(&mut *tx)
        .await
        .map_err(|e| duplicate_or(e, username))?;

        tx.commit().await?;

        Ok(user)
    }

    /// Find user by username
    pub async fn find_by_username(
        pool: &SqlitePool,
        username: &str,
    ) -> StoreResult<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, created_at
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> StoreResult<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, created_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Resolve a username to its id, `NotFound` when there is no such user
    pub async fn id_for_username(pool: &SqlitePool, username: &str) -> StoreResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("User '{}' not found", username)))
    }

    /// Check if username exists
    pub async fn username_exists(pool: &SqlitePool, username: &str) -> StoreResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE username = ?)
            "#,
        )
        .bind(username)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Stored password hash for a username, if a credential exists
    pub async fn password_hash(pool: &SqlitePool, username: &str) -> StoreResult<Option<String>> {
        let hash = sqlx::query_scalar::<_, String>(
            "SELECT password_hash FROM credentials WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        Ok(hash)
    }

    /// Profile fields for a username
    pub async fn get_profile(pool: &SqlitePool, username: &str) -> StoreResult<ProfileRecord> {
        sqlx::query_as::<_, ProfileRecord>(
            r#"
            SELECT id, username, height, weight, age, activity_level, goal
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("User '{}' not found", username)))
    }

    /// Overwrite all mutable profile fields
    pub async fn update_profile(
        pool: &SqlitePool,
        username: &str,
        update: &UpdateProfile,
    ) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE users SET
                height = ?,
                weight = ?,
                age = ?,
                activity_level = ?,
                goal = ?
            WHERE username = ?
            "#,
        )
        .bind(update.height)
        .bind(update.weight)
        .bind(update.age)
        .bind(update.activity_level.as_str())
        .bind(update.goal.as_str())
        .bind(username)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("User '{}' not found", username)));
        }
        Ok(())
    }
}

fn duplicate_or(err: sqlx::Error, username: &str) -> StoreError {
    if StoreError::is_unique_violation(&err) {
        StoreError::DuplicateUsername(username.to_string())
    } else {
        StoreError::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::in_memory_pool;

    fn athlete_profile() -> UpdateProfile {
        UpdateProfile {
            height: 70.0,
            weight: 154.0,
            age: 30,
            activity_level: ActivityLevel::VeryActive,
            goal: FitnessGoal::MuscleGain,
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let pool = in_memory_pool().await.unwrap();

        let user = UserRepository::create(&pool, "alice", "hash").await.unwrap();
        assert_eq!(user.username, "alice");

        let by_name = UserRepository::find_by_username(&pool, "alice").await.unwrap().unwrap();
        let by_id = UserRepository::find_by_id(&pool, user.id).await.unwrap().unwrap();
        assert_eq!(by_name.id, user.id);
        assert_eq!(by_id.username, "alice");
        assert_eq!(UserRepository::id_for_username(&pool, "alice").await.unwrap(), user.id);
        assert!(UserRepository::username_exists(&pool, "alice").await.unwrap());
        assert!(!UserRepository::username_exists(&pool, "bob").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_username_keeps_original_credential() {
        let pool = in_memory_pool().await.unwrap();

        UserRepository::create(&pool, "alice", "first").await.unwrap();
        let err = UserRepository::create(&pool, "alice", "second").await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateUsername(name) if name == "alice"));

        let hash = UserRepository::password_hash(&pool, "alice").await.unwrap();
        assert_eq!(hash.as_deref(), Some("first"));

        let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(users, 1);
    }

    #[tokio::test]
    async fn test_new_profile_is_empty() {
        let pool = in_memory_pool().await.unwrap();
        UserRepository::create(&pool, "alice", "hash").await.unwrap();

        let profile = UserRepository::get_profile(&pool, "alice").await.unwrap();
        assert!(profile.height.is_none());
        assert!(profile.weight.is_none());
        assert!(profile.age.is_none());
        assert!(profile.activity_level().is_none());
        assert!(profile.goal().is_none());
    }

    #[tokio::test]
    async fn test_update_profile_overwrites() {
        let pool = in_memory_pool().await.unwrap();
        UserRepository::create(&pool, "alice", "hash").await.unwrap();

        UserRepository::update_profile(&pool, "alice", &athlete_profile()).await.unwrap();
        let mut next = athlete_profile();
        next.weight = 150.5;
        next.goal = FitnessGoal::WeightLoss;
        UserRepository::update_profile(&pool, "alice", &next).await.unwrap();

        let profile = UserRepository::get_profile(&pool, "alice").await.unwrap();
        assert_eq!(profile.height, Some(70.0));
        assert_eq!(profile.weight, Some(150.5));
        assert_eq!(profile.age, Some(30));
        assert_eq!(profile.activity_level(), Some(ActivityLevel::VeryActive));
        assert_eq!(profile.goal(), Some(FitnessGoal::WeightLoss));
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let pool = in_memory_pool().await.unwrap();

        assert!(matches!(
            UserRepository::get_profile(&pool, "ghost").await,
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            UserRepository::update_profile(&pool, "ghost", &athlete_profile()).await,
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            UserRepository::id_for_username(&pool, "ghost").await,
            Err(StoreError::NotFound(_))
        ));
        assert!(UserRepository::password_hash(&pool, "ghost").await.unwrap().is_none());
    }
}
