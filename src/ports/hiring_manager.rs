use crate::{Console, FactoryError, Interviewer};

/// A manager that runs interviews with an interviewer of its own choosing.
///
/// Implementors only decide which [`Interviewer`] to build; the interview
/// itself always goes the same way: build one, let it ask, drop it.
///
/// There is no bare manager value:
///
/// ```compile_fail
/// let manager = creational_factories::HiringManager;
/// ```
///
/// and an implementor cannot skip the factory method:
///
/// ```compile_fail
/// use creational_factories::HiringManager;
///
/// struct RecruitingManager;
///
/// impl HiringManager for RecruitingManager {
///     fn name(&self) -> &'static str {
///         "recruiting manager"
///     }
/// }
/// ```
pub trait HiringManager {
    /// Factory method. Must return a fresh interviewer on every call.
    fn make_interviewer(&self) -> Interviewer;

    fn name(&self) -> &'static str;

    fn take_interview(&self, console: &mut dyn Console) -> Result<(), FactoryError> {
        let interviewer = self.make_interviewer();
        tracing::debug!(manager = self.name(), %interviewer, "taking interview");
        interviewer.ask_question(console)
    }
}
