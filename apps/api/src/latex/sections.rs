//! Section Assembler — one function per resume section kind.
//!
//! Every assembler returns an empty string when it has nothing to show, so
//! empty sections never leave a stray heading in the document. Headings use
//! the resume's custom display title, uppercased, with an English default
//! when the title was never set.

use crate::latex::escape::{escape, escape_opt};
use crate::latex::format::{
    format_abilities, format_bullets, format_date_range, format_languages, range_end,
};
use crate::latex::richtext::{normalize, ITEM_SENTINEL};
use crate::models::resume::{
    AbilityRow, ContactDetailsRow, CourseRow, EducationRow, ExperienceRow, InterestRow,
    LanguageRow, ProjectRow,
};

/// The seven section kinds, in their canonical render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Experience,
    Projects,
    Education,
    Courses,
    Abilities,
    Languages,
    Interests,
}

impl SectionKind {
    /// Fallback heading when the user never customized the title.
    pub fn default_title(self) -> &'static str {
        match self {
            SectionKind::Experience => "Experience",
            SectionKind::Projects => "Projects",
            SectionKind::Education => "Education",
            SectionKind::Courses => "Courses",
            SectionKind::Abilities => "Abilities",
            SectionKind::Languages => "Languages",
            SectionKind::Interests => "Interests",
        }
    }
}

/// `\section{...}` heading. Uppercased before escaping so command names in
/// the escaped output stay intact.
fn section_heading(custom: Option<&str>, kind: SectionKind) -> String {
    let title = custom
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| kind.default_title());
    format!("\\section{{{}}}\n", escape(&title.to_uppercase()))
}

/// Inline-only normalization for fields that may carry rich text but never
/// lists (project titles, tech stacks). Any sentinel is flattened to a space.
fn inline(text: &str) -> String {
    normalize(text).replace(ITEM_SENTINEL, " ").trim().to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Header
// ────────────────────────────────────────────────────────────────────────────

/// Centered name + contact link row. Entirely absent without a contact
/// record; each missing field suppresses only its own fragment.
pub fn assemble_header(contact: Option<&ContactDetailsRow>) -> String {
    let Some(c) = contact else {
        return String::new();
    };

    let mut out = String::from("\\begin{center}\n");
    out.push_str(&format!(
        "\\textbf{{\\Huge {} {}}} \\\\ \\vspace{{5pt}}\n",
        escape(&c.first_name),
        escape(&c.last_name)
    ));

    let mut links: Vec<String> = Vec::new();
    if !c.phone_number.is_empty() {
        links.push(format!(
            "\\small \\faPhone* \\texttt{{{}}}",
            escape(&c.phone_number)
        ));
    }
    if let Some(email) = c.email.as_deref() {
        links.push(format!("\\faEnvelope \\hspace{{2pt}} \\texttt{{{}}}", escape(email)));
    }
    if let Some(linked_in) = c.linked_in.as_deref() {
        links.push(format!(
            "\\faLinkedin \\hspace{{2pt}} \\texttt{{{}}}",
            escape(linked_in)
        ));
    }
    if let Some(website) = c.personal_website.as_deref() {
        links.push(format!("\\faGlobe \\hspace{{2pt}} \\texttt{{{}}}", escape(website)));
    }
    if let Some(city) = c.city.as_deref() {
        links.push(format!(
            "\\faMapMarker* \\hspace{{2pt}}\\texttt{{{}}}",
            escape(city)
        ));
    }

    out.push_str(&links.join(" \\hspace{1pt} $|$ \\hspace{1pt} "));
    out.push_str(" \\\\ \\vspace{-3pt}\n\\end{center}\n\n");
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Entry sections
// ────────────────────────────────────────────────────────────────────────────

pub fn assemble_experiences(title: Option<&str>, rows: &[ExperienceRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }
    let mut out = section_heading(title, SectionKind::Experience);
    out.push_str("\\resumeSubHeadingListStart\n");
    for exp in rows {
        let dates = format_date_range(exp.start_date, &range_end(exp.finish_date, exp.is_ongoing));
        out.push_str(&format!(
            "\\resumeSubheading{{{}}}{{{}}}{{{}}}{{{}}}\n",
            escape(&exp.employer),
            dates,
            escape(&exp.title),
            escape(&exp.city)
        ));
        out.push_str(&format_bullets(exp.description.as_deref()));
    }
    out.push_str("\\resumeSubHeadingListEnd\n\n");
    out
}

pub fn assemble_projects(title: Option<&str>, rows: &[ProjectRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }
    let mut out = section_heading(title, SectionKind::Projects);
    out.push_str("\\resumeSubHeadingListStart\n");
    for proj in rows {
        let mut heading = format!("\\textbf{{{}}}", inline(&proj.title));
        if let Some(stack) = proj.tech_stack.as_deref().filter(|s| !s.trim().is_empty()) {
            heading.push_str(&format!(" $|$ \\emph{{{}}}", inline(stack)));
        }
        if let Some(link) = proj.link.as_deref().filter(|l| !l.trim().is_empty()) {
            heading = format!("\\href{{{}}}{{\\myuline{{{heading}}}}}", escape(link));
        }
        out.push_str(&format!("\\resumeProjectHeading{{{heading}}}{{}}\n"));
        out.push_str(&format_bullets(proj.description.as_deref()));
    }
    out.push_str("\\resumeSubHeadingListEnd\n\n");
    out
}

pub fn assemble_education(title: Option<&str>, rows: &[EducationRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }
    let mut out = section_heading(title, SectionKind::Education);
    out.push_str("\\resumeSubHeadingListStart\n");
    for edu in rows {
        let dates = format_date_range(edu.start_date, &range_end(edu.finish_date, edu.is_ongoing));
        out.push_str(&format!(
            "\\resumeSubheading{{{}}}{{{}}}{{{}}}{{}}\n",
            escape(&edu.school),
            dates,
            escape(&edu.degree)
        ));
    }
    out.push_str("\\resumeSubHeadingListEnd\n\n");
    out
}

pub fn assemble_courses(title: Option<&str>, rows: &[CourseRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }
    let mut out = section_heading(title, SectionKind::Courses);
    out.push_str("\\resumeSubHeadingListStart\n");
    for course in rows {
        let dates =
            format_date_range(course.start_date, &range_end(course.finish_date, course.is_ongoing));
        out.push_str(&format!(
            "\\resumeSubheading{{{}}}{{{}}}{{{}}}{{}}\n",
            escape(&course.title),
            dates,
            escape_opt(course.institution.as_deref())
        ));
    }
    out.push_str("\\resumeSubHeadingListEnd\n\n");
    out
}

pub fn assemble_abilities(title: Option<&str>, rows: &[AbilityRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }
    let mut out = section_heading(title, SectionKind::Abilities);
    out.push_str(&format_abilities(rows));
    out.push('\n');
    out
}

pub fn assemble_languages(title: Option<&str>, rows: &[LanguageRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }
    let mut out = section_heading(title, SectionKind::Languages);
    out.push_str(&format_languages(rows));
    out.push('\n');
    out
}

pub fn assemble_interests(title: Option<&str>, rows: &[InterestRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }
    let mut out = section_heading(title, SectionKind::Interests);
    let titles: Vec<String> = rows.iter().map(|i| escape(&i.title)).collect();
    out.push_str(&titles.join(" $\\cdot$ "));
    out.push_str("\n\n");
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contact() -> ContactDetailsRow {
        ContactDetailsRow {
            id: 1,
            resume_id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            phone_number: "+40 700 000 000".to_string(),
            email: Some("ada@example.com".to_string()),
            address: None,
            city: Some("London".to_string()),
            linked_in: Some("in/ada".to_string()),
            personal_website: None,
        }
    }

    fn experience() -> ExperienceRow {
        ExperienceRow {
            id: 1,
            resume_id: 1,
            title: "Engineer".to_string(),
            employer: "Analytical Engines Ltd".to_string(),
            city: "London".to_string(),
            start_date: Some(date(2020, 3, 1)),
            finish_date: None,
            is_ongoing: true,
            description: Some("<ul><li>Built things</li></ul>".to_string()),
            sort_order: 0,
        }
    }

    #[test]
    fn test_header_absent_without_contact_record() {
        assert_eq!(assemble_header(None), "");
    }

    #[test]
    fn test_header_contains_name_and_links() {
        let out = assemble_header(Some(&contact()));
        assert!(out.contains("\\textbf{\\Huge Ada Lovelace}"));
        assert!(out.contains("\\faPhone*"));
        assert!(out.contains("ada@example.com"));
        assert!(out.contains("\\faLinkedin"));
        assert!(out.contains("\\faMapMarker*"));
        assert!(!out.contains("\\faGlobe"), "no website, no globe fragment");
    }

    #[test]
    fn test_header_missing_fields_suppress_only_their_fragment() {
        let mut c = contact();
        c.email = None;
        c.linked_in = None;
        let out = assemble_header(Some(&c));
        assert!(!out.contains("\\faEnvelope"));
        assert!(!out.contains("\\faLinkedin"));
        assert!(out.contains("\\faPhone*"));
    }

    #[test]
    fn test_empty_list_emits_nothing() {
        assert_eq!(assemble_experiences(Some("Work"), &[]), "");
        assert_eq!(assemble_interests(Some("Hobbies"), &[]), "");
        assert_eq!(assemble_abilities(None, &[]), "");
    }

    #[test]
    fn test_custom_title_uppercased() {
        let out = assemble_experiences(Some("Work history"), &[experience()]);
        assert!(out.starts_with("\\section{WORK HISTORY}\n"));
    }

    #[test]
    fn test_blank_title_falls_back_to_default() {
        let out = assemble_experiences(Some("   "), &[experience()]);
        assert!(out.starts_with("\\section{EXPERIENCE}\n"));
        let out = assemble_experiences(None, &[experience()]);
        assert!(out.starts_with("\\section{EXPERIENCE}\n"));
    }

    #[test]
    fn test_title_with_specials_escaped_after_uppercasing() {
        let out = assemble_experiences(Some("R&D work"), &[experience()]);
        assert!(out.starts_with("\\section{R\\&D WORK}\n"));
    }

    #[test]
    fn test_experience_subheading_and_bullets() {
        let out = assemble_experiences(None, &[experience()]);
        assert!(out.contains(
            "\\resumeSubheading{Analytical Engines Ltd}{Mar 2020 -- Present}{Engineer}{London}"
        ));
        assert!(out.contains("\\resumeItem{Built things}"));
        assert!(out.contains("\\resumeSubHeadingListStart"));
        assert!(out.contains("\\resumeSubHeadingListEnd"));
    }

    #[test]
    fn test_education_has_no_bullets() {
        let rows = vec![EducationRow {
            id: 1,
            resume_id: 1,
            degree: "BSc Mathematics".to_string(),
            school: "University of London".to_string(),
            start_date: Some(date(2015, 10, 1)),
            finish_date: Some(date(2018, 6, 1)),
            is_ongoing: false,
            sort_order: 0,
        }];
        let out = assemble_education(None, &rows);
        assert!(out.contains(
            "\\resumeSubheading{University of London}{Oct 2015 -- Jun 2018}{BSc Mathematics}{}"
        ));
        assert!(!out.contains("\\resumeItem"));
    }

    #[test]
    fn test_project_heading_with_stack_and_link() {
        let rows = vec![ProjectRow {
            id: 1,
            resume_id: 1,
            title: "cv_maker".to_string(),
            link: Some("github.com/ada/cv".to_string()),
            tech_stack: Some("Rust, <em>axum</em>".to_string()),
            description: None,
            sort_order: 0,
        }];
        let out = assemble_projects(None, &rows);
        assert!(out.contains("\\href{github.com/ada/cv}{\\myuline{"));
        assert!(out.contains("\\textbf{cv\\_maker}"));
        assert!(out.contains("$|$ \\emph{Rust, \\textit{axum}}"));
    }

    #[test]
    fn test_project_heading_plain_without_link() {
        let rows = vec![ProjectRow {
            id: 1,
            resume_id: 1,
            title: "toy".to_string(),
            link: None,
            tech_stack: None,
            description: None,
            sort_order: 0,
        }];
        let out = assemble_projects(None, &rows);
        assert!(out.contains("\\resumeProjectHeading{\\textbf{toy}}{}"));
        assert!(!out.contains("\\href"));
        assert!(!out.contains("$|$"));
    }

    #[test]
    fn test_course_subheading_uses_institution() {
        let rows = vec![CourseRow {
            id: 1,
            resume_id: 1,
            title: "Algorithms".to_string(),
            institution: Some("Coursera".to_string()),
            start_date: Some(date(2021, 1, 1)),
            finish_date: None,
            is_ongoing: false,
            sort_order: 0,
        }];
        let out = assemble_courses(None, &rows);
        assert!(out.contains("\\resumeSubheading{Algorithms}{Jan 2021}{Coursera}{}"));
    }

    #[test]
    fn test_interests_joined_with_middle_dot() {
        let rows = vec![
            InterestRow {
                id: 1,
                resume_id: 1,
                title: "Chess".to_string(),
                sort_order: 0,
            },
            InterestRow {
                id: 2,
                resume_id: 1,
                title: "Hiking".to_string(),
                sort_order: 1,
            },
        ];
        let out = assemble_interests(None, &rows);
        assert!(out.contains("Chess $\\cdot$ Hiking"));
    }
}
