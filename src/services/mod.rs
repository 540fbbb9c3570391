//! Business logic services

pub mod catalog;
pub mod circulation;
pub mod members;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub repository: Repository,
    pub catalog: catalog::CatalogService,
    pub members: members::MembersService,
    pub circulation: circulation::CirculationService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            members: members::MembersService::new(repository.clone()),
            circulation: circulation::CirculationService::new(repository.clone()),
            repository,
        }
    }
}
