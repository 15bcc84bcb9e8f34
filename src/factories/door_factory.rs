// src/factories/door_factory.rs

use crate::{Dimension, DimensionPolicy, Door, FactoryError, WoodenDoor};

/// Factory for creating doors.
///
/// Callers never build a [`WoodenDoor`] themselves; they ask the factory.
/// Every call returns a new door, nothing is cached.
#[derive(Debug, Clone, Default)]
pub struct DoorFactory {
    policy: DimensionPolicy,
}

impl DoorFactory {
    /// Creates a permissive door factory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a door factory that applies `policy` in [`DoorFactory::try_make_door`].
    pub fn with_policy(policy: DimensionPolicy) -> Self {
        Self { policy }
    }

    /// Returns the dimension policy.
    pub fn policy(&self) -> DimensionPolicy {
        self.policy
    }

    /// Makes a wooden door with exactly the given dimensions.
    ///
    /// Always succeeds, regardless of the policy.
    ///
    /// # Examples
    /// ```
    /// use creational_factories::factories::DoorFactory;
    ///
    /// let door = DoorFactory::new().make_door(30, 40);
    /// assert_eq!(door.width(), 30);
    /// assert_eq!(door.height(), 40);
    /// ```
    pub fn make_door(&self, width: i64, height: i64) -> Door {
        let door = Door::Wooden(WoodenDoor::new(width, height));
        tracing::debug!(id = %door.id(), width, height, "made door");
        door
    }

    /// Makes a door after checking the dimensions against the policy.
    ///
    /// # Returns
    /// * `Ok(Door)` - Fresh wooden door
    /// * `Err(FactoryError::InvalidDimension)` - Strict policy and a non-positive side
    pub fn try_make_door(&self, width: i64, height: i64) -> Result<Door, FactoryError> {
        if self.policy.is_strict() {
            Self::validate_dimension(Dimension::Width, width)?;
            Self::validate_dimension(Dimension::Height, height)?;
        }

        Ok(self.make_door(width, height))
    }

    fn validate_dimension(dimension: Dimension, value: i64) -> Result<(), FactoryError> {
        if value <= 0 {
            tracing::warn!(%dimension, value, "rejecting door dimension");
            return Err(FactoryError::InvalidDimension { dimension, value });
        }
        Ok(())
    }
}
