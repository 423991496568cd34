//! Row types for the resume tables. All of them are read-only from the
//! renderer's perspective: the form CRUD endpoints own mutation, the
//! document pipeline only loads and renders.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The resume row: identity plus the user-customizable display title for
/// each section kind.
///
/// The `*_index` columns are persisted by the section-reorder feature but are
/// NOT consulted by the composer, which renders sections in a fixed canonical
/// order (see DESIGN.md).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub experiences_title: Option<String>,
    pub projects_title: Option<String>,
    pub education_title: Option<String>,
    pub courses_title: Option<String>,
    pub abilities_title: Option<String>,
    pub languages_title: Option<String>,
    pub interests_title: Option<String>,
    pub experiences_index: Option<i32>,
    pub projects_index: Option<i32>,
    pub education_index: Option<i32>,
    pub courses_index: Option<i32>,
    pub abilities_index: Option<i32>,
    pub languages_index: Option<i32>,
    pub interests_index: Option<i32>,
}

/// Contact details, 0 or 1 per resume. LinkedIn and website handles are
/// stored without a URL scheme prefix.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactDetailsRow {
    pub id: i64,
    pub resume_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub linked_in: Option<String>,
    pub personal_website: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExperienceRow {
    pub id: i64,
    pub resume_id: i64,
    pub title: String,
    pub employer: String,
    pub city: String,
    pub start_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
    /// "Present" sentinel — distinct from an unspecified finish date.
    pub is_ongoing: bool,
    pub description: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EducationRow {
    pub id: i64,
    pub resume_id: i64,
    pub degree: String,
    pub school: String,
    pub start_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
    pub is_ongoing: bool,
    pub sort_order: i32,
}

/// A project entry. The title itself may carry inline rich text.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectRow {
    pub id: i64,
    pub resume_id: i64,
    pub title: String,
    pub link: Option<String>,
    pub tech_stack: Option<String>,
    pub description: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CourseRow {
    pub id: i64,
    pub resume_id: i64,
    pub title: String,
    pub institution: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
    pub is_ongoing: bool,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AbilityRow {
    pub id: i64,
    pub resume_id: i64,
    pub title: String,
    /// Proficiency 0–6; the renderer clamps anything outside that range.
    pub level: i16,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LanguageRow {
    pub id: i64,
    pub resume_id: i64,
    pub language: String,
    /// CEFR code: A1, A2, B1, B2, C1, C2.
    pub level: String,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InterestRow {
    pub id: i64,
    pub resume_id: i64,
    pub title: String,
    pub sort_order: i32,
}

/// The aggregate the document composer consumes: one resume row, its
/// optional contact record, and the seven ordered entry lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeBundle {
    pub resume: ResumeRow,
    pub contact: Option<ContactDetailsRow>,
    pub experiences: Vec<ExperienceRow>,
    pub projects: Vec<ProjectRow>,
    pub education: Vec<EducationRow>,
    pub courses: Vec<CourseRow>,
    pub abilities: Vec<AbilityRow>,
    pub languages: Vec<LanguageRow>,
    pub interests: Vec<InterestRow>,
}
