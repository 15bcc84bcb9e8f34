use crate::FactoryError;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DoorId(Uuid);

impl DoorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DoorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DoorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for DoorId {
    type Error = FactoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let uuid = Uuid::parse_str(value)
            .map_err(|e| FactoryError::InvalidId(e.to_string()))?;
        Ok(Self(uuid))
    }
}

/// A door made of wood.
///
/// Dimensions are fixed at construction and returned verbatim. Nothing is
/// validated here: zero or negative sizes are stored as given.
#[derive(Debug, Clone)]
pub struct WoodenDoor {
    id: DoorId,
    width: i64,
    height: i64,
}

impl WoodenDoor {
    pub fn new(width: i64, height: i64) -> Self {
        Self {
            id: DoorId::new(),
            width,
            height,
        }
    }

    /// Returns door ID.
    pub fn id(&self) -> DoorId {
        self.id
    }

    /// Returns door width.
    pub fn width(&self) -> i64 {
        self.width
    }

    /// Returns door height.
    pub fn height(&self) -> i64 {
        self.height
    }
}

impl PartialEq for WoodenDoor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for WoodenDoor {}

/// Any door a factory can hand out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Door {
    Wooden(WoodenDoor),
}

impl Door {
    pub fn id(&self) -> DoorId {
        match self {
            Self::Wooden(door) => door.id(),
        }
    }

    pub fn width(&self) -> i64 {
        match self {
            Self::Wooden(door) => door.width(),
        }
    }

    pub fn height(&self) -> i64 {
        match self {
            Self::Wooden(door) => door.height(),
        }
    }

    pub fn material(&self) -> &'static str {
        match self {
            Self::Wooden(_) => "wooden",
        }
    }
}

impl From<WoodenDoor> for Door {
    fn from(door: WoodenDoor) -> Self {
        Self::Wooden(door)
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} door {}x{}", self.material(), self.width(), self.height())
    }
}
