//! Step state machine for the editing wizard.
//!
//! Five fixed steps, walked linearly. Moving past either end is a no-op, and
//! no step checks the data entered in another: required fields are a hint in
//! the form, never a gate.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WizardStep {
    PersonalInfo,
    Experience,
    Education,
    Skills,
    Additional,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::PersonalInfo,
        WizardStep::Experience,
        WizardStep::Education,
        WizardStep::Skills,
        WizardStep::Additional,
    ];

    pub fn index(&self) -> usize {
        match self {
            WizardStep::PersonalInfo => 0,
            WizardStep::Experience => 1,
            WizardStep::Education => 2,
            WizardStep::Skills => 3,
            WizardStep::Additional => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::PersonalInfo => "Personal Info",
            WizardStep::Experience => "Experience",
            WizardStep::Education => "Education",
            WizardStep::Skills => "Skills",
            WizardStep::Additional => "Additional",
        }
    }
}

/// Where a step sits relative to the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

impl StepStatus {
    pub fn css_class(&self) -> &'static str {
        match self {
            StepStatus::Completed => "step completed",
            StepStatus::Current => "step current",
            StepStatus::Upcoming => "step upcoming",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Wizard {
    step: usize,
}

impl Wizard {
    pub const LAST: usize = WizardStep::ALL.len() - 1;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        WizardStep::ALL[self.step]
    }

    pub fn index(&self) -> usize {
        self.step
    }

    pub fn can_go_next(&self) -> bool {
        self.step < Self::LAST
    }

    pub fn can_go_previous(&self) -> bool {
        self.step > 0
    }

    /// Advance one step. Returns whether the step changed.
    pub fn next(&mut self) -> bool {
        if self.can_go_next() {
            self.step += 1;
            true
        } else {
            false
        }
    }

    /// Go back one step. Returns whether the step changed.
    pub fn previous(&mut self) -> bool {
        if self.can_go_previous() {
            self.step -= 1;
            true
        } else {
            false
        }
    }

    pub fn status_of(&self, step: WizardStep) -> StepStatus {
        match step.index().cmp(&self.step) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Current,
            std::cmp::Ordering::Greater => StepStatus::Upcoming,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walks_forward_and_stops_at_last_step() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.step(), WizardStep::PersonalInfo);
        assert!(!wizard.can_go_previous());

        for expected in &WizardStep::ALL[1..] {
            assert!(wizard.next());
            assert_eq!(wizard.step(), *expected);
        }
        assert!(!wizard.can_go_next());
        assert!(!wizard.next());
        assert_eq!(wizard.index(), 4);
    }

    #[test]
    fn test_previous_is_a_no_op_on_first_step() {
        let mut wizard = Wizard::new();
        assert!(!wizard.previous());
        assert_eq!(wizard.index(), 0);

        wizard.next();
        wizard.next();
        assert!(wizard.previous());
        assert_eq!(wizard.step(), WizardStep::Experience);
    }

    #[test]
    fn test_step_status() {
        let mut wizard = Wizard::new();
        wizard.next();
        wizard.next();
        assert_eq!(wizard.status_of(WizardStep::PersonalInfo), StepStatus::Completed);
        assert_eq!(wizard.status_of(WizardStep::Education), StepStatus::Current);
        assert_eq!(wizard.status_of(WizardStep::Additional), StepStatus::Upcoming);
    }

    #[test]
    fn test_index_roundtrip() {
        for step in WizardStep::ALL {
            assert_eq!(WizardStep::from_index(step.index()), Some(step));
        }
        assert_eq!(WizardStep::from_index(5), None);
    }
}
