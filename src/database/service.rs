//! Database service layer
//!
//! This module provides a high-level interface to database operations

use crate::database::{DatabasePool, UserRepository, TripRepository, ActivityRepository, ParticipantRepository};

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub users: UserRepository,
    pub trips: TripRepository,
    pub activities: ActivityRepository,
    pub participants: ParticipantRepository,
    pool: DatabasePool,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            trips: TripRepository::new(pool.clone()),
            activities: ActivityRepository::new(pool.clone()),
            participants: ParticipantRepository::new(pool.clone()),
            pool,
        }
    }

    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }
}
