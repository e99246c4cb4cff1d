//! The fixture generator: one topological pass over the launchpad schema.
//!
//! ```text
//! clear (reverse dependency order)
//!    │
//!    ▼
//! users ──► projects ──► project_members
//!   │          └───────► project_positions ──► project_applications
//!   ├─────► blog_posts ──► blog_likes
//!   ├─────► conversations ──► messages
//!   ├─────► mentorship_requests
//!   └─────► user_skills / user_achievements / user_languages
//! ```
//!
//! Every id written into a foreign-key column was returned by the store
//! in an earlier step, so references are valid at insertion time. Each
//! entity group is inserted with one `insert_rows` call, which is the
//! commit checkpoint; the first failing group aborts the run.

use crate::context::GenerationContext;
use crate::entities::{self, *};
use crate::error::GeneratorError;
use seed_core::domain::Role;
use seed_core::{
    ApplicationPositionMode, DatabaseSchema, FixtureStore, OnConflict, SeedCounts, SeedRow,
};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Rows written to one table during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReport {
    pub table: String,
    pub rows: u64,
}

/// Outcome of a generation run.
#[derive(Debug, Clone, Default)]
pub struct SeedReport {
    /// Rows inserted per table, in insertion order.
    pub tables: Vec<TableReport>,
    /// Rows removed while clearing.
    pub rows_cleared: u64,
    /// Conversation pairs dropped as duplicates.
    pub ignored_conversations: u64,
    /// Seed of the run, if it was seeded.
    pub seed: Option<u64>,
    /// Total time taken.
    pub duration: Duration,
}

impl SeedReport {
    /// Rows inserted into a table (0 if untouched).
    pub fn rows(&self, table: &str) -> u64 {
        self.tables
            .iter()
            .find(|t| t.table == table)
            .map_or(0, |t| t.rows)
    }

    /// Rows inserted across all tables.
    pub fn total_rows(&self) -> u64 {
        self.tables.iter().map(|t| t.rows).sum()
    }

    fn record(&mut self, table: &str, rows: u64) {
        match self.tables.iter_mut().find(|t| t.table == table) {
            Some(entry) => entry.rows += rows,
            None => self.tables.push(TableReport {
                table: table.to_string(),
                rows,
            }),
        }
    }
}

/// A user as the later steps need it.
#[derive(Debug, Clone, Copy)]
struct SeededUser {
    id: i64,
    role: Role,
}

/// A position together with the project it belongs to.
#[derive(Debug, Clone, Copy)]
struct SeededPosition {
    id: i64,
    project_id: i64,
}

/// Generates a referentially consistent fixture data set.
pub struct FixtureGenerator {
    schema: DatabaseSchema,
    counts: SeedCounts,
    ctx: GenerationContext,
}

impl FixtureGenerator {
    /// Create a generator after checking counts and schema.
    ///
    /// Fails before anything is written when a count is invalid or a
    /// table the generator writes to is missing from the schema.
    pub fn new(
        schema: DatabaseSchema,
        counts: SeedCounts,
        ctx: GenerationContext,
    ) -> Result<Self, GeneratorError> {
        counts.validate()?;
        for table in entities::TABLES {
            schema.require_table(table)?;
        }
        Ok(Self {
            schema,
            counts,
            ctx,
        })
    }

    /// The schema being populated.
    pub fn schema(&self) -> &DatabaseSchema {
        &self.schema
    }

    /// The configured counts.
    pub fn counts(&self) -> &SeedCounts {
        &self.counts
    }

    /// Clear every schema table and regenerate all rows.
    pub fn generate<S: FixtureStore + ?Sized>(
        &mut self,
        store: &mut S,
    ) -> Result<SeedReport, GeneratorError> {
        let start = Instant::now();
        let mut run = Run {
            schema: &self.schema,
            counts: &self.counts,
            ctx: &mut self.ctx,
            store,
            report: SeedReport::default(),
        };
        run.report.seed = run.ctx.seed();

        run.clear()?;
        let users = run.users()?;
        let project_ids = run.projects(&users)?;
        let blog_ids = run.blog_posts(&users)?;
        run.blog_likes(&users, &blog_ids)?;
        run.conversations_and_messages(&users)?;
        run.mentorship_requests(&users)?;
        let positions = run.positions(&project_ids)?;
        run.applications(&users, &project_ids, &positions)?;
        run.profiles(&users)?;

        let mut report = run.report;
        report.duration = start.elapsed();
        info!(
            "Database seeded: {} rows across {} tables in {:?}",
            report.total_rows(),
            report.tables.len(),
            report.duration
        );
        Ok(report)
    }
}

/// Generate fixture data into `store` in one call.
pub fn generate<S: FixtureStore + ?Sized>(
    schema: DatabaseSchema,
    counts: SeedCounts,
    ctx: GenerationContext,
    store: &mut S,
) -> Result<SeedReport, GeneratorError> {
    FixtureGenerator::new(schema, counts, ctx)?.generate(store)
}

/// State of one run; borrowed pieces of the generator plus the store.
struct Run<'a, S: FixtureStore + ?Sized> {
    schema: &'a DatabaseSchema,
    counts: &'a SeedCounts,
    ctx: &'a mut GenerationContext,
    store: &'a mut S,
    report: SeedReport,
}

impl<S: FixtureStore + ?Sized> Run<'_, S> {
    /// Insert one entity group and return the ids of the rows that landed.
    fn insert(
        &mut self,
        table: &str,
        rows: &[SeedRow],
        on_conflict: OnConflict,
    ) -> Result<Vec<Option<i64>>, GeneratorError> {
        let definition = self.schema.require_table(table)?;
        let ids = self.store.insert_rows(definition, rows, on_conflict)?;
        let inserted = ids.iter().flatten().count() as u64;
        self.report.record(table, inserted);
        debug!("Inserted {} of {} rows into '{}'", inserted, rows.len(), table);
        Ok(ids)
    }

    /// Insert rows that must all land.
    fn insert_all(&mut self, table: &str, rows: &[SeedRow]) -> Result<Vec<i64>, GeneratorError> {
        Ok(self
            .insert(table, rows, OnConflict::Abort)?
            .into_iter()
            .flatten()
            .collect())
    }

    fn clear(&mut self) -> Result<(), GeneratorError> {
        info!("Dropping old data...");
        self.store.prepare(self.schema)?;
        for table in self.schema.deletion_order()? {
            let removed = self.store.clear_table(table)?;
            self.report.rows_cleared += removed;
            debug!("Cleared {} rows from '{}'", removed, table.name);
        }
        Ok(())
    }

    fn users(&mut self) -> Result<Vec<SeededUser>, GeneratorError> {
        info!("Seeding users...");
        let (rows, roles): (Vec<_>, Vec<_>) = (0..self.counts.user_count as u64)
            .map(|index| user_row(self.ctx, index))
            .unzip();
        let ids = self.insert_all(USERS, &rows)?;
        Ok(ids
            .into_iter()
            .zip(roles)
            .map(|(id, role)| SeededUser { id, role })
            .collect())
    }

    fn projects(&mut self, users: &[SeededUser]) -> Result<Vec<i64>, GeneratorError> {
        info!("Seeding projects...");
        let user_ids: Vec<i64> = users.iter().map(|u| u.id).collect();

        let mut rows = Vec::new();
        let mut teams = Vec::new();
        for index in 0..self.counts.project_count as u64 {
            let Some(created_by) = self.ctx.pick(&user_ids) else {
                break;
            };
            let team_size = self.ctx.count_in(self.counts.team_size);
            let team = self.ctx.sample(&user_ids, team_size);
            rows.push(project_row(self.ctx, index, created_by, &team));
            teams.push(team);
        }
        let project_ids = self.insert_all(PROJECTS, &rows)?;

        let members: Vec<SeedRow> = project_ids
            .iter()
            .zip(&teams)
            .flat_map(|(project_id, team)| team.iter().map(move |user_id| (*project_id, *user_id)))
            .enumerate()
            .map(|(index, (project_id, user_id))| {
                project_member_row(index as u64, project_id, user_id)
            })
            .collect();
        self.insert_all(PROJECT_MEMBERS, &members)?;

        Ok(project_ids)
    }

    fn blog_posts(&mut self, users: &[SeededUser]) -> Result<Vec<i64>, GeneratorError> {
        info!("Seeding blog posts...");
        let user_ids: Vec<i64> = users.iter().map(|u| u.id).collect();

        let mut rows = Vec::new();
        for index in 0..self.counts.blog_count as u64 {
            let Some(author_id) = self.ctx.pick(&user_ids) else {
                break;
            };
            rows.push(blog_post_row(self.ctx, index, author_id));
        }
        self.insert_all(BLOG_POSTS, &rows)
    }

    fn blog_likes(&mut self, users: &[SeededUser], blog_ids: &[i64]) -> Result<(), GeneratorError> {
        info!("Seeding blog likes...");
        let user_ids: Vec<i64> = users.iter().map(|u| u.id).collect();

        let mut rows = Vec::new();
        for blog_id in blog_ids {
            let likes = self.ctx.count_in(self.counts.likes_per_blog);
            for user_id in self.ctx.sample(&user_ids, likes) {
                rows.push(blog_like_row(rows.len() as u64, *blog_id, user_id));
            }
        }
        self.insert_all(BLOG_LIKES, &rows)?;
        Ok(())
    }

    fn conversations_and_messages(&mut self, users: &[SeededUser]) -> Result<(), GeneratorError> {
        info!("Seeding conversations + messages...");
        let user_ids: Vec<i64> = users.iter().map(|u| u.id).collect();

        let pairs: Vec<(i64, i64)> = (0..self.counts.conversation_count)
            .map(|_| self.ctx.sample(&user_ids, 2))
            .filter_map(|pair| match pair.as_slice() {
                [a, b] => Some((*a, *b)),
                _ => None,
            })
            .collect();
        let rows: Vec<SeedRow> = pairs
            .iter()
            .enumerate()
            .map(|(index, (a, b))| conversation_row(index as u64, *a, *b))
            .collect();

        // Duplicate pairs are dropped by the store, not retried.
        let ids = self.insert(CONVERSATIONS, &rows, OnConflict::Ignore)?;
        let mut participants = Vec::new();
        for (id, row) in ids.iter().zip(&rows) {
            match (id, row.get_i64("user1_id"), row.get_i64("user2_id")) {
                (Some(_), Some(user1), Some(user2)) => participants.push((user1, user2)),
                _ => self.report.ignored_conversations += 1,
            }
        }
        if self.report.ignored_conversations > 0 {
            info!(
                "Ignored {} duplicate conversation pairs",
                self.report.ignored_conversations
            );
        }

        let mut messages = Vec::new();
        for pair in participants {
            let count = self.ctx.count_in(self.counts.messages_per_conversation);
            messages.extend(conversation_messages(
                self.ctx,
                messages.len() as u64,
                pair,
                count,
            ));
        }
        self.insert_all(MESSAGES, &messages)?;
        Ok(())
    }

    fn mentorship_requests(&mut self, users: &[SeededUser]) -> Result<(), GeneratorError> {
        info!("Seeding mentorship requests...");
        let (students, alumni) = split_by_role(users);
        if self.counts.mentorship_count > 0 && (students.is_empty() || alumni.is_empty()) {
            warn!(
                "Skipping mentorship requests: {} students and {} alumni generated",
                students.len(),
                alumni.len()
            );
            self.report.record(MENTORSHIP_REQUESTS, 0);
            return Ok(());
        }

        let pool = self
            .ctx
            .sample(&alumni, self.counts.mentorship_alumni_pool as usize);
        let mut rows = Vec::new();
        for index in 0..self.counts.mentorship_count as u64 {
            let (Some(student_id), Some(alumni_id)) =
                (self.ctx.pick(&students), self.ctx.pick(&pool))
            else {
                break;
            };
            rows.push(mentorship_row(self.ctx, index, student_id, alumni_id));
        }
        self.insert_all(MENTORSHIP_REQUESTS, &rows)?;
        Ok(())
    }

    fn positions(&mut self, project_ids: &[i64]) -> Result<Vec<SeededPosition>, GeneratorError> {
        info!("Seeding project positions...");
        let mut rows = Vec::new();
        let mut owners = Vec::new();
        for project_id in project_ids {
            let count = self.ctx.count_in(self.counts.positions_per_project);
            for _ in 0..count {
                rows.push(position_row(self.ctx, rows.len() as u64, *project_id));
                owners.push(*project_id);
            }
        }
        let ids = self.insert_all(PROJECT_POSITIONS, &rows)?;
        Ok(ids
            .into_iter()
            .zip(owners)
            .map(|(id, project_id)| SeededPosition { id, project_id })
            .collect())
    }

    fn applications(
        &mut self,
        users: &[SeededUser],
        project_ids: &[i64],
        positions: &[SeededPosition],
    ) -> Result<(), GeneratorError> {
        info!("Seeding project applications...");
        let (students, _) = split_by_role(users);
        if self.counts.application_count > 0 && (students.is_empty() || positions.is_empty()) {
            warn!(
                "Skipping project applications: {} students and {} positions generated",
                students.len(),
                positions.len()
            );
            self.report.record(PROJECT_APPLICATIONS, 0);
            return Ok(());
        }

        let mode = self.counts.application_positions;
        let mut rows = Vec::new();
        for index in 0..self.counts.application_count as u64 {
            let chosen = match mode {
                ApplicationPositionMode::Independent => {
                    let student = self.ctx.pick(&students);
                    let project = self.ctx.pick(project_ids);
                    let position = self.ctx.pick(positions);
                    student.zip(project).zip(position).map(|((s, p), pos)| (s, p, pos.id))
                }
                ApplicationPositionMode::SameProject => {
                    let student = self.ctx.pick(&students);
                    let position = self.ctx.pick(positions);
                    student
                        .zip(position)
                        .map(|(s, pos)| (s, pos.project_id, pos.id))
                }
            };
            let Some((student_id, project_id, position_id)) = chosen else {
                break;
            };
            rows.push(application_row(
                self.ctx,
                index,
                student_id,
                project_id,
                position_id,
            ));
        }
        self.insert_all(PROJECT_APPLICATIONS, &rows)?;
        Ok(())
    }

    fn profiles(&mut self, users: &[SeededUser]) -> Result<(), GeneratorError> {
        info!("Seeding user skills...");
        let mut skills = Vec::new();
        for user in users {
            for _ in 0..self.ctx.count_in(self.counts.skills_per_user) {
                skills.push(skill_row(self.ctx, skills.len() as u64, user.id));
            }
        }
        self.insert_all(USER_SKILLS, &skills)?;

        info!("Seeding user achievements...");
        let mut achievements = Vec::new();
        for user in users {
            for _ in 0..self.ctx.count_in(self.counts.achievements_per_user) {
                achievements.push(achievement_row(self.ctx, achievements.len() as u64, user.id));
            }
        }
        self.insert_all(USER_ACHIEVEMENTS, &achievements)?;

        info!("Seeding user languages...");
        let mut languages = Vec::new();
        for user in users {
            let rows = language_rows(
                self.ctx,
                languages.len() as u64,
                user.id,
                self.counts.languages_per_user as usize,
            );
            languages.extend(rows);
        }
        self.insert_all(USER_LANGUAGES, &languages)?;
        Ok(())
    }
}

/// Ids of (students, alumni) by each user's actual role.
fn split_by_role(users: &[SeededUser]) -> (Vec<i64>, Vec<i64>) {
    let (students, alumni): (Vec<&SeededUser>, Vec<&SeededUser>) =
        users.iter().partition(|u| u.role == Role::Student);
    (
        students.into_iter().map(|u| u.id).collect(),
        alumni.into_iter().map(|u| u.id).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Locale;
    use crate::memory::MemoryStore;
    use chrono::NaiveDate;
    use seed_core::{ColumnDefinition, ColumnType, CountRange, SchemaError, TableDefinition};
    use std::collections::HashSet;

    fn ctx(seed: u64) -> GenerationContext {
        GenerationContext::seeded(seed, Locale::EnIn)
            .with_today(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
    }

    fn run(counts: SeedCounts, seed: u64) -> (MemoryStore, SeedReport) {
        let schema = crate::launchpad_schema().unwrap();
        let mut store = MemoryStore::new();
        let report = generate(schema, counts, ctx(seed), &mut store).unwrap();
        (store, report)
    }

    fn int(store: &MemoryStore, table: &str, id: i64, column: &str) -> i64 {
        store.get(table, id).unwrap()[column].as_i64().unwrap()
    }

    fn role(store: &MemoryStore, id: i64) -> String {
        store.get(USERS, id).unwrap()["role"]
            .as_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_default_counts() {
        let (store, report) = run(SeedCounts::default(), 1);

        assert_eq!(report.rows(USERS), 15);
        assert_eq!(report.rows(PROJECTS), 10);
        assert_eq!(report.rows(BLOG_POSTS), 10);
        assert_eq!(report.rows(USER_LANGUAGES), 30);
        assert_eq!(report.rows(CONVERSATIONS) + report.ignored_conversations, 5);
        assert_eq!(report.seed, Some(1));
        for table in TABLES {
            assert_eq!(store.row_count(table).unwrap(), report.rows(table), "{table}");
        }
    }

    #[test]
    fn test_same_seed_same_data() {
        let (a, _) = run(SeedCounts::default(), 99);
        let (b, _) = run(SeedCounts::default(), 99);

        for table in TABLES {
            assert_eq!(a.rows(table), b.rows(table), "{table} differs between runs");
        }
    }

    #[test]
    fn test_conversations_are_distinct_and_messages_alternate() {
        let counts = SeedCounts {
            user_count: 3,
            conversation_count: 20,
            ..SeedCounts::default()
        };
        let (store, report) = run(counts, 5);

        let mut pairs = HashSet::new();
        for (id, _) in store.rows(CONVERSATIONS) {
            let user1 = int(&store, CONVERSATIONS, id, "user1_id");
            let user2 = int(&store, CONVERSATIONS, id, "user2_id");
            assert!(user1 < user2);
            assert!(pairs.insert((user1, user2)));
        }
        // Three users allow only three distinct pairs
        assert!(pairs.len() <= 3);
        assert_eq!(pairs.len() as u64 + report.ignored_conversations, 20);

        let messages = store.rows(MESSAGES);
        assert!(!messages.is_empty());
        for (id, _) in &messages {
            let sender = int(&store, MESSAGES, *id, "sender_id");
            let receiver = int(&store, MESSAGES, *id, "receiver_id");
            let pair = (sender.min(receiver), sender.max(receiver));
            assert!(pairs.contains(&pair));
        }
    }

    #[test]
    fn test_mentorships_pair_students_with_alumni() {
        let counts = SeedCounts {
            user_count: 40,
            mentorship_count: 30,
            mentorship_alumni_pool: 2,
            ..SeedCounts::default()
        };
        let (store, report) = run(counts, 11);

        assert_eq!(report.rows(MENTORSHIP_REQUESTS), 30);
        let mut alumni = HashSet::new();
        for (id, _) in store.rows(MENTORSHIP_REQUESTS) {
            let student = int(&store, MENTORSHIP_REQUESTS, id, "student_id");
            let mentor = int(&store, MENTORSHIP_REQUESTS, id, "alumni_id");
            assert_eq!(role(&store, student), "student");
            assert_eq!(role(&store, mentor), "alumni");
            alumni.insert(mentor);
        }
        assert!(alumni.len() <= 2);
    }

    #[test]
    fn test_applications_come_from_students() {
        let counts = SeedCounts {
            user_count: 30,
            application_count: 25,
            ..SeedCounts::default()
        };
        let (store, _) = run(counts, 3);

        for (id, _) in store.rows(PROJECT_APPLICATIONS) {
            let student = int(&store, PROJECT_APPLICATIONS, id, "student_id");
            assert_eq!(role(&store, student), "student");
        }
    }

    #[test]
    fn test_same_project_positions() {
        let counts = SeedCounts {
            user_count: 30,
            application_count: 25,
            application_positions: ApplicationPositionMode::SameProject,
            ..SeedCounts::default()
        };
        let (store, report) = run(counts, 8);

        assert!(report.rows(PROJECT_APPLICATIONS) > 0);
        for (id, _) in store.rows(PROJECT_APPLICATIONS) {
            let project = int(&store, PROJECT_APPLICATIONS, id, "project_id");
            let position = int(&store, PROJECT_APPLICATIONS, id, "position_id");
            assert_eq!(int(&store, PROJECT_POSITIONS, position, "project_id"), project);
        }
    }

    #[test]
    fn test_team_members_match_join_table() {
        let (store, _) = run(SeedCounts::default(), 21);

        for (project_id, fields) in store.rows(PROJECTS) {
            let team: Vec<i64> = serde_json::from_value(match &fields["team_members"] {
                seed_core::SeedValue::Json(v) => v.clone(),
                other => panic!("team_members is {other:?}"),
            })
            .unwrap();
            let members: HashSet<i64> = store
                .rows(PROJECT_MEMBERS)
                .into_iter()
                .filter(|(_, r)| r["project_id"].as_i64() == Some(project_id))
                .map(|(_, r)| r["user_id"].as_i64().unwrap())
                .collect();
            assert!((2..=4).contains(&team.len()));
            assert_eq!(members, team.into_iter().collect());
        }
    }

    #[test]
    fn test_likes_are_distinct_per_blog() {
        let counts = SeedCounts {
            likes_per_blog: CountRange::fixed(5),
            ..SeedCounts::default()
        };
        let (store, report) = run(counts, 4);

        assert_eq!(report.rows(BLOG_LIKES), 50);
        let pairs: HashSet<_> = store
            .rows(BLOG_LIKES)
            .into_iter()
            .map(|(_, r)| (r["blog_id"].as_i64(), r["user_id"].as_i64()))
            .collect();
        assert_eq!(pairs.len(), 50);
    }

    #[test]
    fn test_second_run_replaces_data() {
        let schema = crate::launchpad_schema().unwrap();
        let mut store = MemoryStore::new();

        let first = generate(schema.clone(), SeedCounts::default(), ctx(1), &mut store).unwrap();
        assert_eq!(first.rows_cleared, 0);
        let second = generate(schema, SeedCounts::default(), ctx(2), &mut store).unwrap();

        assert_eq!(second.rows_cleared, first.total_rows());
        assert_eq!(store.row_count(USERS).unwrap(), 15);
        assert_eq!(store.ids(USERS).first(), Some(&16));
    }

    #[test]
    fn test_mentorships_skipped_without_both_roles() {
        for seed in 0..20 {
            let counts = SeedCounts {
                user_count: 2,
                mentorship_count: 5,
                ..SeedCounts::default()
            };
            let (store, report) = run(counts, seed);
            let roles: HashSet<String> = store
                .ids(USERS)
                .into_iter()
                .map(|id| role(&store, id))
                .collect();
            let expected = if roles.len() == 2 { 5 } else { 0 };
            assert_eq!(report.rows(MENTORSHIP_REQUESTS), expected, "seed {seed}");
        }
    }

    #[test]
    fn test_split_by_role_keeps_order() {
        let users = [
            SeededUser { id: 1, role: Role::Alumni },
            SeededUser { id: 2, role: Role::Student },
            SeededUser { id: 3, role: Role::Student },
            SeededUser { id: 4, role: Role::Alumni },
        ];
        let (students, alumni) = split_by_role(&users);
        assert_eq!(students, vec![2, 3]);
        assert_eq!(alumni, vec![1, 4]);

        let (students, alumni) = split_by_role(&[]);
        assert!(students.is_empty() && alumni.is_empty());
    }

    #[test]
    fn test_invalid_counts_fail_before_writing() {
        let counts = SeedCounts {
            user_count: 1,
            conversation_count: 3,
            ..SeedCounts::default()
        };
        let schema = crate::launchpad_schema().unwrap();
        let err = FixtureGenerator::new(schema, counts, ctx(1)).err().unwrap();
        assert!(matches!(err, GeneratorError::Config(_)));
    }

    #[test]
    fn test_missing_table_rejected() {
        let schema = DatabaseSchema::new(vec![TableDefinition::new(
            USERS,
            vec![ColumnDefinition::new("name", ColumnType::Text)],
        )])
        .unwrap();
        let err = FixtureGenerator::new(schema, SeedCounts::default(), ctx(1))
            .err()
            .unwrap();
        assert!(matches!(
            err,
            GeneratorError::Schema(SchemaError::TableNotFound(_))
        ));
    }

    /// Store that refuses every insert into one table.
    struct RefusingStore {
        inner: MemoryStore,
        table: &'static str,
    }

    impl FixtureStore for RefusingStore {
        fn prepare(&mut self, schema: &DatabaseSchema) -> Result<(), seed_core::StoreError> {
            self.inner.prepare(schema)
        }

        fn clear_table(&mut self, table: &TableDefinition) -> Result<u64, seed_core::StoreError> {
            self.inner.clear_table(table)
        }

        fn insert_rows(
            &mut self,
            table: &TableDefinition,
            rows: &[SeedRow],
            on_conflict: OnConflict,
        ) -> Result<Vec<Option<i64>>, seed_core::StoreError> {
            if table.name == self.table {
                return Err(seed_core::StoreError::constraint(&table.name, "refused"));
            }
            self.inner.insert_rows(table, rows, on_conflict)
        }

        fn row_count(&self, table: &str) -> Result<u64, seed_core::StoreError> {
            self.inner.row_count(table)
        }
    }

    #[test]
    fn test_store_failure_aborts_run() {
        let schema = crate::launchpad_schema().unwrap();
        let mut store = RefusingStore {
            inner: MemoryStore::new(),
            table: MESSAGES,
        };

        let err = generate(schema, SeedCounts::default(), ctx(1), &mut store).unwrap_err();
        assert!(err.is_constraint_violation());
        // Groups before the failing one stay committed, later ones never run.
        assert_eq!(store.row_count(USERS).unwrap(), 15);
        assert_eq!(store.row_count(MENTORSHIP_REQUESTS).unwrap(), 0);
    }
}
