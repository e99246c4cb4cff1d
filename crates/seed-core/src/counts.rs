//! Row count configuration for a generation run.

use serde::{Deserialize, Serialize};

/// Number of languages the generator can draw from per user.
pub const LANGUAGE_POOL_SIZE: u32 = 5;

/// Error type for count configuration problems.
///
/// Raised before any row is written.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Range with min above max
    #[error("Invalid range for '{name}': min {min} is greater than max {max}")]
    InvalidRange { name: &'static str, min: u32, max: u32 },

    /// Value above what the generator can satisfy
    #[error("'{name}' is {value}, but at most {limit} is supported")]
    TooLarge {
        name: &'static str,
        value: u32,
        limit: u32,
    },

    /// Entity needs more users than configured
    #[error("'{name}' needs at least {needed} users, but user_count is {user_count}")]
    NotEnoughUsers {
        name: &'static str,
        needed: u32,
        user_count: u32,
    },

    /// Pool that another count draws from is empty
    #[error("'{name}' must be at least 1 when '{required_by}' is nonzero")]
    EmptyPool {
        name: &'static str,
        required_by: &'static str,
    },

    /// Configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Inclusive `[min, max]` range, written as a two-element list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct CountRange {
    /// Lower bound (inclusive)
    pub min: u32,
    /// Upper bound (inclusive)
    pub max: u32,
}

impl CountRange {
    /// Create a new range.
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// A range containing exactly one value.
    pub const fn fixed(value: u32) -> Self {
        Self::new(value, value)
    }

    /// Check whether a value lies inside the range.
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvalidRange {
                name,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl From<(u32, u32)> for CountRange {
    fn from((min, max): (u32, u32)) -> Self {
        Self::new(min, max)
    }
}

impl From<CountRange> for (u32, u32) {
    fn from(range: CountRange) -> Self {
        (range.min, range.max)
    }
}

/// How an application's position relates to its project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationPositionMode {
    /// Position drawn from all positions, independent of the project
    #[default]
    Independent,
    /// Position drawn from the chosen project's own positions
    SameProject,
}

/// How many rows of each entity one run generates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedCounts {
    pub user_count: u32,
    pub project_count: u32,
    /// Users embedded in each project's team
    pub team_size: CountRange,
    pub blog_count: u32,
    pub likes_per_blog: CountRange,
    pub conversation_count: u32,
    pub messages_per_conversation: CountRange,
    pub mentorship_count: u32,
    /// Size of the alumni subset mentorship requests are addressed to
    pub mentorship_alumni_pool: u32,
    pub positions_per_project: CountRange,
    pub application_count: u32,
    pub skills_per_user: CountRange,
    pub achievements_per_user: CountRange,
    pub languages_per_user: u32,
    pub application_positions: ApplicationPositionMode,
}

impl Default for SeedCounts {
    fn default() -> Self {
        Self {
            user_count: 15,
            project_count: 10,
            team_size: CountRange::new(2, 4),
            blog_count: 10,
            likes_per_blog: CountRange::new(0, 5),
            conversation_count: 5,
            messages_per_conversation: CountRange::new(3, 7),
            mentorship_count: 8,
            mentorship_alumni_pool: 5,
            positions_per_project: CountRange::new(1, 3),
            application_count: 10,
            skills_per_user: CountRange::new(2, 4),
            achievements_per_user: CountRange::new(1, 3),
            languages_per_user: 2,
            application_positions: ApplicationPositionMode::Independent,
        }
    }
}

impl SeedCounts {
    /// Check that every option can be satisfied.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.team_size.validate("team_size")?;
        self.likes_per_blog.validate("likes_per_blog")?;
        self.messages_per_conversation
            .validate("messages_per_conversation")?;
        self.positions_per_project.validate("positions_per_project")?;
        self.skills_per_user.validate("skills_per_user")?;
        self.achievements_per_user.validate("achievements_per_user")?;

        if self.languages_per_user > LANGUAGE_POOL_SIZE {
            return Err(ConfigError::TooLarge {
                name: "languages_per_user",
                value: self.languages_per_user,
                limit: LANGUAGE_POOL_SIZE,
            });
        }

        let needs_users = [
            ("project_count", self.project_count, 1),
            ("blog_count", self.blog_count, 1),
            ("conversation_count", self.conversation_count, 2),
            ("mentorship_count", self.mentorship_count, 2),
            ("application_count", self.application_count, 1),
        ];
        for (name, count, needed) in needs_users {
            if count > 0 && self.user_count < needed {
                return Err(ConfigError::NotEnoughUsers {
                    name,
                    needed,
                    user_count: self.user_count,
                });
            }
        }

        // Team members and likers are distinct users.
        let distinct_users = [
            ("team_size", self.project_count, self.team_size.min),
            ("likes_per_blog", self.blog_count, self.likes_per_blog.min),
        ];
        for (name, count, needed) in distinct_users {
            if count > 0 && self.user_count < needed {
                return Err(ConfigError::NotEnoughUsers {
                    name,
                    needed,
                    user_count: self.user_count,
                });
            }
        }

        if self.mentorship_count > 0 && self.mentorship_alumni_pool == 0 {
            return Err(ConfigError::EmptyPool {
                name: "mentorship_alumni_pool",
                required_by: "mentorship_count",
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let counts = SeedCounts::default();
        assert!(counts.validate().is_ok());
        assert_eq!(counts.user_count, 15);
        assert_eq!(counts.messages_per_conversation, CountRange::new(3, 7));
        assert_eq!(counts.languages_per_user, 2);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let counts = SeedCounts {
            skills_per_user: CountRange::new(4, 2),
            ..SeedCounts::default()
        };
        assert!(matches!(
            counts.validate(),
            Err(ConfigError::InvalidRange {
                name: "skills_per_user",
                ..
            })
        ));
    }

    #[test]
    fn test_too_many_languages() {
        let counts = SeedCounts {
            languages_per_user: 6,
            ..SeedCounts::default()
        };
        assert!(matches!(counts.validate(), Err(ConfigError::TooLarge { .. })));
    }

    #[test]
    fn test_conversations_need_two_users() {
        let counts = SeedCounts {
            user_count: 1,
            conversation_count: 3,
            mentorship_count: 0,
            ..SeedCounts::default()
        };
        assert!(matches!(
            counts.validate(),
            Err(ConfigError::NotEnoughUsers {
                name: "conversation_count",
                ..
            })
        ));

        let empty = SeedCounts {
            user_count: 0,
            project_count: 0,
            blog_count: 0,
            conversation_count: 0,
            mentorship_count: 0,
            application_count: 0,
            ..SeedCounts::default()
        };
        assert!(empty.validate().is_ok());
    }

    #[test]
    fn test_team_size_needs_enough_users() {
        let counts = SeedCounts {
            user_count: 1,
            project_count: 3,
            team_size: CountRange::new(2, 4),
            conversation_count: 0,
            mentorship_count: 0,
            likes_per_blog: CountRange::new(0, 1),
            ..SeedCounts::default()
        };
        assert!(matches!(
            counts.validate(),
            Err(ConfigError::NotEnoughUsers {
                name: "team_size",
                needed: 2,
                user_count: 1,
            })
        ));

        let no_projects = SeedCounts {
            project_count: 0,
            application_count: 0,
            ..counts
        };
        assert!(no_projects.validate().is_ok());
    }

    #[test]
    fn test_likes_need_enough_users() {
        let counts = SeedCounts {
            user_count: 3,
            likes_per_blog: CountRange::new(4, 5),
            ..SeedCounts::default()
        };
        assert!(matches!(
            counts.validate(),
            Err(ConfigError::NotEnoughUsers {
                name: "likes_per_blog",
                needed: 4,
                ..
            })
        ));

        let no_blogs = SeedCounts {
            blog_count: 0,
            ..counts
        };
        assert!(no_blogs.validate().is_ok());
    }

    #[test]
    fn test_empty_alumni_pool_rejected() {
        let counts = SeedCounts {
            user_count: 40,
            mentorship_count: 8,
            mentorship_alumni_pool: 0,
            ..SeedCounts::default()
        };
        assert!(matches!(
            counts.validate(),
            Err(ConfigError::EmptyPool {
                name: "mentorship_alumni_pool",
                ..
            })
        ));

        let no_mentorships = SeedCounts {
            mentorship_count: 0,
            ..counts
        };
        assert!(no_mentorships.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let counts: SeedCounts = toml::from_str(
            r#"
user_count = 30
messages_per_conversation = [1, 2]
application_positions = "same_project"
"#,
        )
        .unwrap();

        assert_eq!(counts.user_count, 30);
        assert_eq!(counts.project_count, 10);
        assert_eq!(counts.messages_per_conversation, CountRange::new(1, 2));
        assert_eq!(
            counts.application_positions,
            ApplicationPositionMode::SameProject
        );
    }

    #[test]
    fn test_negative_count_rejected_at_parse() {
        assert!(toml::from_str::<SeedCounts>("user_count = -3").is_err());
        assert!(toml::from_str::<SeedCounts>("team_size = [-1, 2]").is_err());
        assert!(toml::from_str::<SeedCounts>("unknown_option = 1").is_err());
    }
}
