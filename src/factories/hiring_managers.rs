// src/factories/hiring_managers.rs

use crate::{HiringManager, Interviewer};

/// Hires developers; interviews are run by a [`Interviewer::Developer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DevelopmentManager;

impl HiringManager for DevelopmentManager {
    fn make_interviewer(&self) -> Interviewer {
        Interviewer::Developer
    }

    fn name(&self) -> &'static str {
        "development manager"
    }
}

/// Hires marketers; interviews are run by a [`Interviewer::CommunityExecutive`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MarketingManager;

impl HiringManager for MarketingManager {
    fn make_interviewer(&self) -> Interviewer {
        Interviewer::CommunityExecutive
    }

    fn name(&self) -> &'static str {
        "marketing manager"
    }
}
