//! Row builders, one per launchpad table.
//!
//! Builders only shape rows. Which ids they reference is decided by the
//! caller ([`crate::fixture`]), which only hands out ids the store has
//! already assigned.

use crate::context::GenerationContext;
use crate::fake;
use crate::generators::date::generate_days_ago;
use seed_core::domain::{
    AchievementType, LanguageLevel, ProjectStatus, RequestStatus, Role, SkillLevel, SkillType,
    WorkMode,
};
use seed_core::{SeedRow, SeedValue};

pub const USERS: &str = "users";
pub const PROJECTS: &str = "projects";
pub const PROJECT_MEMBERS: &str = "project_members";
pub const BLOG_POSTS: &str = "blog_posts";
pub const BLOG_LIKES: &str = "blog_likes";
pub const CONVERSATIONS: &str = "conversations";
pub const MESSAGES: &str = "messages";
pub const MENTORSHIP_REQUESTS: &str = "mentorship_requests";
pub const PROJECT_POSITIONS: &str = "project_positions";
pub const PROJECT_APPLICATIONS: &str = "project_applications";
pub const USER_SKILLS: &str = "user_skills";
pub const USER_ACHIEVEMENTS: &str = "user_achievements";
pub const USER_LANGUAGES: &str = "user_languages";

/// Every table the generator writes to.
pub const TABLES: &[&str] = &[
    USERS,
    PROJECTS,
    PROJECT_MEMBERS,
    BLOG_POSTS,
    BLOG_LIKES,
    CONVERSATIONS,
    MESSAGES,
    MENTORSHIP_REQUESTS,
    PROJECT_POSITIONS,
    PROJECT_APPLICATIONS,
    USER_SKILLS,
    USER_ACHIEVEMENTS,
    USER_LANGUAGES,
];

pub const DEPARTMENTS: &[&str] = &[
    "Computer Science and Engineering",
    "Electrical Engineering",
    "Mechanical Engineering",
    "Civil Engineering",
    "Chemical Engineering",
    "Biotechnology",
];
pub const HALLS: &[&str] = &["Hall 1", "Hall 2", "Hall 3"];
pub const BRANCHES: &[&str] = &["CSE", "ECE", "ME", "CE", "BT"];
pub const PROJECT_CATEGORIES: &[&str] = &["AI", "Web", "App", "Blockchain", "EdTech", "FinTech"];
pub const BLOG_CATEGORIES: &[&str] = &["Career", "Tech", "Life", "Startups"];
pub const LANGUAGES: &[&str] = &["English", "Hindi", "French", "German", "Spanish"];

/// Alumni graduated between these years (inclusive).
pub const GRADUATION_YEARS: (i64, i64) = (2010, 2025);
/// Monthly stipend bounds (inclusive).
pub const STIPEND_RANGE: (i64, i64) = (10_000, 50_000);
/// Achievements were earned this many days before today (inclusive).
pub const ACHIEVEMENT_AGE_DAYS: (i64, i64) = (100, 1500);

/// Callers pass non-empty constant pools.
fn pick<T: Copy>(ctx: &mut GenerationContext, values: &[T]) -> T {
    ctx.pick(values).unwrap_or_else(|| values[0])
}

/// A user row together with the role it was generated with.
pub fn user_row(ctx: &mut GenerationContext, index: u64) -> (SeedRow, Role) {
    let role = pick(ctx, Role::ALL);
    let alumni = role == Role::Alumni;

    let name = fake::name(ctx);
    let email = fake::email(ctx);
    let password_hash = fake::password_hash(ctx);
    let graduation_year = alumni.then(|| ctx.int_range(GRADUATION_YEARS.0, GRADUATION_YEARS.1));
    let department = pick(ctx, DEPARTMENTS);
    let hall = pick(ctx, HALLS);
    let branch = pick(ctx, BRANCHES);
    let bio = fake::text(ctx, 100);
    let current_company = alumni.then(|| fake::company(ctx));
    let current_position = alumni.then(|| fake::job(ctx));
    let location = fake::city(ctx);
    let work_preference = pick(ctx, WorkMode::ALL);
    let phone = fake::phone_number(ctx);
    let website = fake::url(ctx);
    let linkedin = format!("https://linkedin.com/in/{}", fake::user_name(ctx));
    let github = format!("https://github.com/{}", fake::user_name(ctx));
    let avatar = fake::image_url(ctx);

    let row = SeedRow::builder(USERS, index)
        .field("name", name)
        .field("email", email)
        .field("password_hash", password_hash)
        .field("role", role.as_str())
        .field("graduation_year", graduation_year)
        .field("department", department)
        .field("hall", hall)
        .field("branch", branch)
        .field("bio", bio)
        .field("current_company", current_company)
        .field("current_position", current_position)
        .field("location", location)
        .field("work_preference", work_preference.as_str())
        .field("phone", phone)
        .field("website", website)
        .field("linkedin", linkedin)
        .field("github", github)
        .field("avatar", avatar)
        .build();

    (row, role)
}

/// A project created by `created_by`, embedding `team` as a JSON id list.
pub fn project_row(
    ctx: &mut GenerationContext,
    index: u64,
    created_by: i64,
    team: &[i64],
) -> SeedRow {
    let title = fake::catch_phrase(ctx);
    let description = fake::paragraph(ctx, 5);
    let category = pick(ctx, PROJECT_CATEGORIES);
    let status = pick(ctx, ProjectStatus::ALL);
    let tags = fake::words(ctx, 4);
    let stipend = ctx.int_range(STIPEND_RANGE.0, STIPEND_RANGE.1);
    let duration = format!("{} months", ctx.int_range(2, 6));
    let skills_required = fake::words(ctx, 4);
    let location = fake::city(ctx);
    let work_type = pick(ctx, WorkMode::ALL);

    SeedRow::builder(PROJECTS, index)
        .field("title", title)
        .field("description", description)
        .field("category", category)
        .field("status", status.as_str())
        .field("team_members", SeedValue::id_list(team))
        .field("tags", SeedValue::string_list(tags))
        .field("stipend", stipend)
        .field("duration", duration)
        .field("skills_required", SeedValue::string_list(skills_required))
        .field("location", location)
        .field("work_type", work_type.as_str())
        .field("created_by", created_by)
        .build()
}

/// Join-table row recording one team membership.
pub fn project_member_row(index: u64, project_id: i64, user_id: i64) -> SeedRow {
    SeedRow::builder(PROJECT_MEMBERS, index)
        .field("project_id", project_id)
        .field("user_id", user_id)
        .build()
}

pub fn blog_post_row(ctx: &mut GenerationContext, index: u64, author_id: i64) -> SeedRow {
    let title = fake::sentence(ctx, 6);
    let content = fake::paragraph(ctx, 10);
    let category = pick(ctx, BLOG_CATEGORIES);

    SeedRow::builder(BLOG_POSTS, index)
        .field("title", title)
        .field("content", content)
        .field("category", category)
        .field("author_id", author_id)
        .build()
}

pub fn blog_like_row(index: u64, blog_id: i64, user_id: i64) -> SeedRow {
    SeedRow::builder(BLOG_LIKES, index)
        .field("blog_id", blog_id)
        .field("user_id", user_id)
        .build()
}

/// Conversation between two users, stored as `(lower id, higher id)`.
///
/// Normalizing the pair lets the table's ordered UNIQUE constraint catch
/// the same two users in either order.
pub fn conversation_row(index: u64, a: i64, b: i64) -> SeedRow {
    let (user1, user2) = if a <= b { (a, b) } else { (b, a) };
    SeedRow::builder(CONVERSATIONS, index)
        .field("user1_id", user1)
        .field("user2_id", user2)
        .build()
}

pub fn message_row(
    ctx: &mut GenerationContext,
    index: u64,
    sender_id: i64,
    receiver_id: i64,
) -> SeedRow {
    let content = fake::sentence(ctx, 10);
    SeedRow::builder(MESSAGES, index)
        .field("sender_id", sender_id)
        .field("receiver_id", receiver_id)
        .field("content", content)
        .build()
}

/// `count` messages between the two participants of a conversation.
///
/// The first sender is random; after that the participants take turns.
pub fn conversation_messages(
    ctx: &mut GenerationContext,
    first_index: u64,
    participants: (i64, i64),
    count: usize,
) -> Vec<SeedRow> {
    let (mut sender, mut receiver) = if ctx.chance(0.5) {
        participants
    } else {
        (participants.1, participants.0)
    };

    (0..count as u64)
        .map(|offset| {
            let row = message_row(ctx, first_index + offset, sender, receiver);
            std::mem::swap(&mut sender, &mut receiver);
            row
        })
        .collect()
}

pub fn mentorship_row(
    ctx: &mut GenerationContext,
    index: u64,
    student_id: i64,
    alumni_id: i64,
) -> SeedRow {
    let message = fake::sentence(ctx, 12);
    let status = pick(ctx, RequestStatus::ALL);

    SeedRow::builder(MENTORSHIP_REQUESTS, index)
        .field("student_id", student_id)
        .field("alumni_id", alumni_id)
        .field("message", message)
        .field("status", status.as_str())
        .build()
}

/// An open position; `filled_count` never exceeds `count`.
pub fn position_row(ctx: &mut GenerationContext, index: u64, project_id: i64) -> SeedRow {
    let title = fake::job(ctx);
    let description = fake::sentence(ctx, 10);
    let required_skills = fake::words(ctx, 3);
    let count = ctx.int_range(1, 3);
    let filled_count = ctx.int_range(0, count);

    SeedRow::builder(PROJECT_POSITIONS, index)
        .field("project_id", project_id)
        .field("title", title)
        .field("description", description)
        .field("required_skills", SeedValue::string_list(required_skills))
        .field("count", count)
        .field("filled_count", filled_count)
        .field("is_active", true)
        .build()
}

pub fn application_row(
    ctx: &mut GenerationContext,
    index: u64,
    student_id: i64,
    project_id: i64,
    position_id: i64,
) -> SeedRow {
    let message = fake::sentence(ctx, 12);
    let status = pick(ctx, RequestStatus::ALL);

    SeedRow::builder(PROJECT_APPLICATIONS, index)
        .field("student_id", student_id)
        .field("project_id", project_id)
        .field("position_id", position_id)
        .field("message", message)
        .field("status", status.as_str())
        .build()
}

pub fn skill_row(ctx: &mut GenerationContext, index: u64, user_id: i64) -> SeedRow {
    let skill_name = fake::job(ctx);
    let skill_type = pick(ctx, SkillType::ALL);
    let level = pick(ctx, SkillLevel::ALL);

    SeedRow::builder(USER_SKILLS, index)
        .field("user_id", user_id)
        .field("skill_name", skill_name)
        .field("skill_type", skill_type.as_str())
        .field("proficiency_level", level.as_str())
        .build()
}

/// An achievement dated between 100 and 1500 days before the context's today.
pub fn achievement_row(ctx: &mut GenerationContext, index: u64, user_id: i64) -> SeedRow {
    let title = fake::catch_phrase(ctx);
    let description = fake::text(ctx, 80);
    let achievement_type = pick(ctx, AchievementType::ALL);
    let today = ctx.today();
    let date_earned = generate_days_ago(
        ctx.rng(),
        today,
        ACHIEVEMENT_AGE_DAYS.0,
        ACHIEVEMENT_AGE_DAYS.1,
    );
    let issuer = fake::company(ctx);

    SeedRow::builder(USER_ACHIEVEMENTS, index)
        .field("user_id", user_id)
        .field("title", title)
        .field("description", description)
        .field("achievement_type", achievement_type.as_str())
        .field("date_earned", date_earned)
        .field("issuer", issuer)
        .build()
}

/// `count` languages for one user, drawn without replacement.
pub fn language_rows(
    ctx: &mut GenerationContext,
    first_index: u64,
    user_id: i64,
    count: usize,
) -> Vec<SeedRow> {
    let languages = ctx.sample(LANGUAGES, count);
    languages
        .into_iter()
        .zip(first_index..)
        .map(|(language, index)| {
            let level = pick(ctx, LanguageLevel::ALL);
            SeedRow::builder(USER_LANGUAGES, index)
                .field("user_id", user_id)
                .field("language_name", language)
                .field("proficiency_level", level.as_str())
                .build()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Locale;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn ctx() -> GenerationContext {
        GenerationContext::seeded(42, Locale::EnIn)
            .with_today(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
    }

    #[test]
    fn test_pick_stays_in_pool() {
        let mut ctx = ctx();
        for _ in 0..20 {
            assert_eq!(pick(&mut ctx, &[7]), 7);
            assert!(BRANCHES.contains(&pick(&mut ctx, BRANCHES)));
            assert!(Role::ALL.contains(&pick(&mut ctx, Role::ALL)));
        }
    }

    #[test]
    fn test_user_role_conditional_fields() {
        let mut ctx = ctx();
        let mut seen = HashSet::new();

        for index in 0..50 {
            let (row, role) = user_row(&mut ctx, index);
            seen.insert(role);
            assert_eq!(row.get_str("role"), Some(role.as_str()));

            let alumni_only = ["graduation_year", "current_company", "current_position"];
            for field in alumni_only {
                let value = row.get_field(field).unwrap();
                match role {
                    Role::Student => assert!(value.is_null(), "{field} set for student"),
                    Role::Alumni => assert!(!value.is_null(), "{field} missing for alumni"),
                }
            }

            if let Some(year) = row.get_i64("graduation_year") {
                assert!((GRADUATION_YEARS.0..=GRADUATION_YEARS.1).contains(&year));
            }
            assert!(row.get_str("linkedin").unwrap().starts_with("https://linkedin.com/in/"));
            assert!(row.get_str("github").unwrap().starts_with("https://github.com/"));
        }

        assert_eq!(seen.len(), 2, "50 users should include both roles");
    }

    #[test]
    fn test_project_row() {
        let mut ctx = ctx();
        let row = project_row(&mut ctx, 0, 7, &[7, 3]);

        assert_eq!(row.get_i64("created_by"), Some(7));
        assert_eq!(
            row.get_field("team_members"),
            Some(&SeedValue::Json(serde_json::json!([7, 3])))
        );
        assert!(ProjectStatus::values().contains(&row.get_str("status").unwrap()));
        let stipend = row.get_i64("stipend").unwrap();
        assert!((STIPEND_RANGE.0..=STIPEND_RANGE.1).contains(&stipend));
        assert!(row.get_str("duration").unwrap().ends_with(" months"));
    }

    #[test]
    fn test_conversation_pair_is_normalized() {
        let row = conversation_row(0, 9, 4);
        assert_eq!(row.get_i64("user1_id"), Some(4));
        assert_eq!(row.get_i64("user2_id"), Some(9));
        assert_eq!(conversation_row(1, 4, 9).fields, row.fields);
    }

    #[test]
    fn test_conversation_messages_alternate() {
        let mut ctx = ctx();
        let rows = conversation_messages(&mut ctx, 10, (1, 2), 6);

        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].index, 10);
        for pair in rows.windows(2) {
            assert_eq!(pair[0].get_i64("sender_id"), pair[1].get_i64("receiver_id"));
            assert_eq!(pair[0].get_i64("receiver_id"), pair[1].get_i64("sender_id"));
        }
        for row in &rows {
            let sender = row.get_i64("sender_id").unwrap();
            let receiver = row.get_i64("receiver_id").unwrap();
            assert_ne!(sender, receiver);
            assert!([1, 2].contains(&sender));
        }
    }

    #[test]
    fn test_position_capacity() {
        let mut ctx = ctx();
        for index in 0..100 {
            let row = position_row(&mut ctx, index, 1);
            let count = row.get_i64("count").unwrap();
            let filled = row.get_i64("filled_count").unwrap();
            assert!((1..=3).contains(&count));
            assert!((0..=count).contains(&filled));
        }
    }

    #[test]
    fn test_achievement_date_in_past() {
        let mut ctx = ctx();
        let today = ctx.today();
        for index in 0..50 {
            let row = achievement_row(&mut ctx, index, 1);
            let earned = row.get_field("date_earned").and_then(SeedValue::as_date).unwrap();
            let age = (today - earned).num_days();
            assert!((ACHIEVEMENT_AGE_DAYS.0..=ACHIEVEMENT_AGE_DAYS.1).contains(&age));
        }
    }

    #[test]
    fn test_language_rows_are_distinct() {
        let mut ctx = ctx();
        let rows = language_rows(&mut ctx, 0, 5, 3);

        assert_eq!(rows.len(), 3);
        let names: HashSet<_> = rows.iter().map(|r| r.get_str("language_name")).collect();
        assert_eq!(names.len(), 3);
        assert_eq!(rows[2].index, 2);
    }

    #[test]
    fn test_enum_fields_use_domain_values() {
        let mut ctx = ctx();
        let skill = skill_row(&mut ctx, 0, 1);
        assert!(SkillType::values().contains(&skill.get_str("skill_type").unwrap()));
        assert!(SkillLevel::values().contains(&skill.get_str("proficiency_level").unwrap()));

        let request = mentorship_row(&mut ctx, 0, 1, 2);
        assert!(RequestStatus::values().contains(&request.get_str("status").unwrap()));
    }
}
