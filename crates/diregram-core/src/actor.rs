//! Actor categories implied by swimlane lane labels.

use std::fmt;

/// The actor category a lane label can imply.
///
/// Each category corresponds to one canonical actor tag id; swimlane
/// consistency checking compares a node's actor tag against the category
/// implied by its lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorCategory {
    /// Automated behavior of the system itself.
    System,
    /// Internal staff: admins, reviewers, operators, agents.
    Staff,
    /// An external partner organization.
    Partner,
    /// The applicant-side participant: customers, users, visitors,
    /// students.
    Applicant,
}

impl ActorCategory {
    /// The canonical actor tag id of this category.
    pub fn tag_id(&self) -> &'static str {
        match self {
            ActorCategory::System => "actor-system",
            ActorCategory::Staff => "actor-staff",
            ActorCategory::Partner => "actor-partner",
            ActorCategory::Applicant => "actor-applicant",
        }
    }
}

impl fmt::Display for ActorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag_id())
    }
}
