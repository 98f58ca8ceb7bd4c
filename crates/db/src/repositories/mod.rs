//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Read methods that back
//! public pages take a `published_only` flag; editors see everything.

pub mod business_plan_repo;
pub mod city_repo;
pub mod department_repo;
pub mod figure_repo;
pub mod listing_submission_repo;
pub mod media_repo;
pub mod place_repo;
pub mod stats_repo;
pub mod user_repo;

pub use business_plan_repo::BusinessPlanRepo;
pub use city_repo::CityRepo;
pub use department_repo::DepartmentRepo;
pub use figure_repo::FigureRepo;
pub use listing_submission_repo::ListingSubmissionRepo;
pub use media_repo::MediaRepo;
pub use place_repo::PlaceRepo;
pub use stats_repo::StatsRepo;
pub use user_repo::UserRepo;
