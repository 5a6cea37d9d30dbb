use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Viewer role, used to pick the visibility predicate for grid filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

/// The viewer context passed explicitly into every engine call.
///
/// Never read from ambient session state; functions stay pure given their
/// arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewer {
    pub id: Uuid,
    pub role: Role,
}

/// The consolidated visibility predicate: which course ids a viewer may see.
///
/// One predicate replaces the per-role copies of the filtering loop: admins
/// match everything, teachers carry their taught courses, students their
/// enrolled ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Visibility {
    /// Administrator: every slot is visible.
    All,
    /// Only slots belonging to these course ids are visible.
    Courses { course_ids: HashSet<String> },
}

impl Visibility {
    pub fn courses<I, S>(ids: I) -> Visibility
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Visibility::Courses {
            course_ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether a slot with this course id is visible.
    ///
    /// A missing course id (malformed data) is visible to nobody except
    /// admin.
    pub fn allows(&self, course_id: Option<&str>) -> bool {
        match self {
            Visibility::All => true,
            Visibility::Courses { course_ids } => {
                course_id.is_some_and(|id| course_ids.contains(id))
            }
        }
    }
}
