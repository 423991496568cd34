//! Data-loading collaborator for the document pipeline: read-only queries
//! that assemble the [`ResumeBundle`] the composer consumes.
//!
//! Entry lists come back in the user's explicit sort order, never insertion
//! or id order. The bundle is built once per render request and discarded
//! after the LaTeX string is produced.

use anyhow::Result;
use sqlx::PgPool;
use tracing::debug;

use crate::models::resume::{
    AbilityRow, ContactDetailsRow, CourseRow, EducationRow, ExperienceRow, InterestRow,
    LanguageRow, ProjectRow, ResumeBundle, ResumeRow,
};

/// Loads the full aggregate for one resume. `Ok(None)` when the resume row
/// does not exist; the caller maps that to a 404.
pub async fn load_resume_bundle(pool: &PgPool, resume_id: i64) -> Result<Option<ResumeBundle>> {
    let resume: Option<ResumeRow> = sqlx::query_as("SELECT * FROM resumes WHERE id = $1")
        .bind(resume_id)
        .fetch_optional(pool)
        .await?;

    let Some(resume) = resume else {
        return Ok(None);
    };

    let (contact, experiences, projects, education, courses, abilities, languages, interests) =
        tokio::try_join!(
            load_contact(pool, resume_id),
            load_experiences(pool, resume_id),
            load_projects(pool, resume_id),
            load_education(pool, resume_id),
            load_courses(pool, resume_id),
            load_abilities(pool, resume_id),
            load_languages(pool, resume_id),
            load_interests(pool, resume_id),
        )?;

    debug!(
        resume_id,
        experiences = experiences.len(),
        projects = projects.len(),
        education = education.len(),
        "resume bundle loaded"
    );

    Ok(Some(ResumeBundle {
        resume,
        contact,
        experiences,
        projects,
        education,
        courses,
        abilities,
        languages,
        interests,
    }))
}

async fn load_contact(pool: &PgPool, resume_id: i64) -> Result<Option<ContactDetailsRow>> {
    let row = sqlx::query_as("SELECT * FROM contact_details WHERE resume_id = $1")
        .bind(resume_id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

async fn load_experiences(pool: &PgPool, resume_id: i64) -> Result<Vec<ExperienceRow>> {
    let rows =
        sqlx::query_as("SELECT * FROM experiences WHERE resume_id = $1 ORDER BY sort_order ASC")
            .bind(resume_id)
            .fetch_all(pool)
            .await?;
    Ok(rows)
}

async fn load_projects(pool: &PgPool, resume_id: i64) -> Result<Vec<ProjectRow>> {
    let rows = sqlx::query_as("SELECT * FROM projects WHERE resume_id = $1 ORDER BY sort_order ASC")
        .bind(resume_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

async fn load_education(pool: &PgPool, resume_id: i64) -> Result<Vec<EducationRow>> {
    let rows =
        sqlx::query_as("SELECT * FROM education WHERE resume_id = $1 ORDER BY sort_order ASC")
            .bind(resume_id)
            .fetch_all(pool)
            .await?;
    Ok(rows)
}

async fn load_courses(pool: &PgPool, resume_id: i64) -> Result<Vec<CourseRow>> {
    let rows = sqlx::query_as("SELECT * FROM courses WHERE resume_id = $1 ORDER BY sort_order ASC")
        .bind(resume_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

async fn load_abilities(pool: &PgPool, resume_id: i64) -> Result<Vec<AbilityRow>> {
    let rows =
        sqlx::query_as("SELECT * FROM abilities WHERE resume_id = $1 ORDER BY sort_order ASC")
            .bind(resume_id)
            .fetch_all(pool)
            .await?;
    Ok(rows)
}

async fn load_languages(pool: &PgPool, resume_id: i64) -> Result<Vec<LanguageRow>> {
    let rows =
        sqlx::query_as("SELECT * FROM languages WHERE resume_id = $1 ORDER BY sort_order ASC")
            .bind(resume_id)
            .fetch_all(pool)
            .await?;
    Ok(rows)
}

async fn load_interests(pool: &PgPool, resume_id: i64) -> Result<Vec<InterestRow>> {
    let rows =
        sqlx::query_as("SELECT * FROM interests WHERE resume_id = $1 ORDER BY sort_order ASC")
            .bind(resume_id)
            .fetch_all(pool)
            .await?;
    Ok(rows)
}
