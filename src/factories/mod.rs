// src/factories/mod.rs

mod door_factory;
mod hiring_managers;

pub use door_factory::DoorFactory;
pub use hiring_managers::{DevelopmentManager, MarketingManager};

use crate::{FactoryConfig, HiringManager};

/// Collection of the available factories.
///
/// Holds the simple door factory and one of each hiring manager.
#[derive(Debug, Clone, Default)]
pub struct Factories {
    door: DoorFactory,
    development: DevelopmentManager,
    marketing: MarketingManager,
}

impl Factories {
    /// Creates a new collection of factories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates factories configured from `config`.
    pub fn with_config(config: &FactoryConfig) -> Self {
        Self {
            door: DoorFactory::with_policy(config.door.policy),
            ..Self::default()
        }
    }

    /// Returns the door factory.
    pub fn door(&self) -> &DoorFactory {
        &self.door
    }

    /// Returns the development manager.
    pub fn development(&self) -> &DevelopmentManager {
        &self.development
    }

    /// Returns the marketing manager.
    pub fn marketing(&self) -> &MarketingManager {
        &self.marketing
    }

    /// Returns every hiring manager.
    pub fn managers(&self) -> Vec<&dyn HiringManager> {
        vec![&self.development as &dyn HiringManager, &self.marketing]
    }
}
