//! Enumerated value sets of the launchpad schema.
//!
//! Downstream consumers branch on these strings literally, so the
//! generator only ever writes values taken from these enums.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $value:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The stored string value.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            /// All stored string values.
            pub fn values() -> Vec<&'static str> {
                Self::ALL.iter().map(|v| v.as_str()).collect()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum! {
    /// `users.role`
    Role { Student => "student", Alumni => "alumni" }
}

string_enum! {
    /// `projects.status`
    ProjectStatus { Active => "active", Completed => "completed", Paused => "paused" }
}

string_enum! {
    /// `mentorship_requests.status` and `project_applications.status`
    RequestStatus { Pending => "pending", Accepted => "accepted", Declined => "declined" }
}

string_enum! {
    /// `user_skills.skill_type`
    SkillType { Technical => "technical", Soft => "soft" }
}

string_enum! {
    /// `user_skills.proficiency_level`
    SkillLevel {
        Beginner => "beginner",
        Intermediate => "intermediate",
        Advanced => "advanced",
        Expert => "expert",
    }
}

string_enum! {
    /// `user_achievements.achievement_type`
    AchievementType {
        Award => "award",
        Certification => "certification",
        Project => "project",
        Publication => "publication",
    }
}

string_enum! {
    /// `user_languages.proficiency_level`
    LanguageLevel {
        Beginner => "beginner",
        Intermediate => "intermediate",
        Advanced => "advanced",
        Native => "native",
    }
}

string_enum! {
    /// `users.work_preference` and `projects.work_type`
    WorkMode { Onsite => "onsite", Remote => "remote", Hybrid => "hybrid" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        assert_eq!(Role::values(), vec!["student", "alumni"]);
        assert_eq!(
            ProjectStatus::values(),
            vec!["active", "completed", "paused"]
        );
        assert_eq!(LanguageLevel::ALL.len(), 4);
        assert_eq!(SkillLevel::Expert.to_string(), "expert");
    }

    #[test]
    fn test_serde_matches_as_str() {
        for status in RequestStatus::ALL {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }
}
