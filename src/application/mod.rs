//! Application records as owned by the upstream store.

pub mod model;
pub mod repository;

pub use model::{
    Applicant, Application, ApplicationId, Fund, LegalEntity, LifecycleState, Product, Review,
};
pub use repository::{
    ApplicationRepository, InMemoryApplicationRepository, JsonFileApplicationRepository,
    RepositoryError,
};
