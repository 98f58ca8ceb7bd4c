//! Row models and request DTOs, one module per table.

pub mod business_plan;
pub mod city;
pub mod department;
pub mod figure;
pub mod listing_submission;
pub mod media;
pub mod place;
pub mod stats;
pub mod user;
