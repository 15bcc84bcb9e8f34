use crate::{Console, FactoryError};
use std::fmt;

/// Someone who can run an interview.
///
/// Stateless; managers build a fresh one for every interview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interviewer {
    Developer,
    CommunityExecutive,
}

impl Interviewer {
    /// The fixed line this interviewer asks.
    pub fn question(&self) -> &'static str {
        match self {
            Self::Developer => "Asking about design patterns!",
            Self::CommunityExecutive => "Asking about community building",
        }
    }

    /// Writes the question to the console as a single line.
    pub fn ask_question(&self, console: &mut dyn Console) -> Result<(), FactoryError> {
        console.write_line(self.question())
    }
}

impl fmt::Display for Interviewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Developer => write!(f, "developer"),
            Self::CommunityExecutive => write!(f, "community executive"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryConsole;

    #[test]
    fn test_developer_asks_about_design_patterns() {
        let mut console = MemoryConsole::new();
        Interviewer::Developer.ask_question(&mut console).unwrap();

        assert_eq!(console.lines(), ["Asking about design patterns!"]);
    }

    #[test]
    fn test_community_executive_asks_about_community() {
        let mut console = MemoryConsole::new();
        Interviewer::CommunityExecutive
            .ask_question(&mut console)
            .unwrap();

        assert_eq!(console.lines(), ["Asking about community building"]);
    }

    #[test]
    fn test_display_names_variant() {
        assert_eq!(Interviewer::Developer.to_string(), "developer");
        assert_eq!(
            Interviewer::CommunityExecutive.to_string(),
            "community executive"
        );
    }
}
