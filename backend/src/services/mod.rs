//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the shared calculators.

pub mod badge;
pub mod profile;
pub mod social;
pub mod user;
pub mod workout;

pub use badge::BadgeService;
pub use profile::ProfileService;
pub use social::SocialService;
pub use user::UserService;
pub use workout::WorkoutService;
