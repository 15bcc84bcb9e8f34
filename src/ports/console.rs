use crate::FactoryError;

/// Line-oriented text output.
pub trait Console {
    fn write_line(&mut self, line: &str) -> Result<(), FactoryError>;
}
