//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod badge;
pub mod friend;
pub mod user;
pub mod workout;

pub use badge::{BadgeCheck, BadgeRecord, BadgeRepository};
pub use friend::{FriendRepository, WorkoutCountRecord};
pub use user::{ProfileRecord, UpdateProfile, UserRecord, UserRepository};
pub use workout::{CreateWorkout, WorkoutRecord, WorkoutRepository};
