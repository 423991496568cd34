//! Document Composer — turns a loaded [`ResumeBundle`] into a complete LaTeX
//! source string.
//!
//! Pure and infallible: missing optional data omits its fragment, never
//! errors. Sections render in one fixed canonical order; the persisted
//! reorder indexes on the resume row are deliberately not consulted here
//! (see DESIGN.md).

use crate::latex::sections::{
    assemble_abilities, assemble_courses, assemble_education, assemble_experiences,
    assemble_header, assemble_interests, assemble_languages, assemble_projects,
};
use crate::models::resume::ResumeBundle;

/// Fixed style and macro block every document starts with. Static text,
/// unaffected by resume content.
pub const PREAMBLE: &str = r"\documentclass[letterpaper,11pt]{article}
\usepackage{latexsym}
\usepackage[empty]{fullpage}
\usepackage{titlesec}
\usepackage{marvosym}
\usepackage[usenames,dvipsnames]{color}
\usepackage{verbatim}
\usepackage{enumitem}
\usepackage[hidelinks]{hyperref}
\usepackage{fancyhdr}
\usepackage[english]{babel}
\usepackage{tabularx}
\usepackage{fontawesome5}
\usepackage[scale=0.90,lf]{FiraMono}

\definecolor{light-grey}{gray}{0.83}
\definecolor{dark-grey}{gray}{0.3}
\definecolor{text-grey}{gray}{.08}

\DeclareRobustCommand{\ebseries}{\fontseries{eb}\selectfont}
\DeclareTextFontCommand{\texteb}{\ebseries}

\usepackage{contour}
\usepackage[normalem]{ulem}
\renewcommand{\ULdepth}{1.8pt}
\contourlength{0.8pt}
\newcommand{\myuline}[1]{%
  \uline{\phantom{#1}}%
  \llap{\contour{white}{#1}}%
}

\usepackage{tgheros}
\renewcommand*\familydefault{\sfdefault}
\usepackage[T1]{fontenc}

\pagestyle{fancy}
\fancyhf{}
\fancyfoot{}
\renewcommand{\headrulewidth}{0pt}
\renewcommand{\footrulewidth}{0pt}

\addtolength{\oddsidemargin}{-0.5in}
\addtolength{\evensidemargin}{0in}
\addtolength{\textwidth}{1in}
\addtolength{\topmargin}{-.5in}
\addtolength{\textheight}{1.0in}

\urlstyle{same}
\raggedbottom
\raggedright
\setlength{\tabcolsep}{0in}

\titleformat {\section}{
    \bfseries \vspace{2pt} \raggedright \large
}{}{0em}{}[\color{light-grey} {\titlerule[2pt]} \vspace{-4pt}]

\newcommand{\resumeItem}[1]{
  \item\small{
    {#1 \vspace{-1pt}}
  }
}

\newcommand{\resumeSubheading}[4]{
  \vspace{-1pt}\item
    \begin{tabular*}{\textwidth}[t]{l@{\extracolsep{\fill}}r}
      \textbf{#1} & {\color{dark-grey}\small #2}\vspace{1pt}\\
      \textit{#3} & {\color{dark-grey} \small #4}\\
    \end{tabular*}\vspace{-4pt}
}

\newcommand{\resumeProjectHeading}[2]{
    \item
    \begin{tabular*}{\textwidth}{l@{\extracolsep{\fill}}r}
      #1 & {\color{dark-grey}} \\
    \end{tabular*}\vspace{-4pt}
}

\renewcommand\labelitemii{$\vcenter{\hbox{\tiny$\bullet$}}$}
\newcommand{\resumeSubHeadingListStart}{\begin{itemize}[leftmargin=0in, label={}]}
\newcommand{\resumeSubHeadingListEnd}{\end{itemize}}
\newcommand{\resumeItemListStart}{\begin{itemize}}
\newcommand{\resumeItemListEnd}{\end{itemize}\vspace{0pt}}

\color{text-grey}
\begin{document}
";

/// Assembles the full document: preamble, header, each non-empty section in
/// canonical order, closing marker.
pub fn compose(bundle: &ResumeBundle) -> String {
    let resume = &bundle.resume;

    let mut tex = String::with_capacity(PREAMBLE.len() + 4096);
    tex.push_str(PREAMBLE);
    tex.push_str(&assemble_header(bundle.contact.as_ref()));
    tex.push_str(&assemble_experiences(
        resume.experiences_title.as_deref(),
        &bundle.experiences,
    ));
    tex.push_str(&assemble_projects(
        resume.projects_title.as_deref(),
        &bundle.projects,
    ));
    tex.push_str(&assemble_education(
        resume.education_title.as_deref(),
        &bundle.education,
    ));
    tex.push_str(&assemble_courses(
        resume.courses_title.as_deref(),
        &bundle.courses,
    ));
    tex.push_str(&assemble_abilities(
        resume.abilities_title.as_deref(),
        &bundle.abilities,
    ));
    tex.push_str(&assemble_languages(
        resume.languages_title.as_deref(),
        &bundle.languages,
    ));
    tex.push_str(&assemble_interests(
        resume.interests_title.as_deref(),
        &bundle.interests,
    ));
    tex.push_str("\\end{document}\n");
    tex
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{
        AbilityRow, ContactDetailsRow, CourseRow, EducationRow, ExperienceRow, InterestRow,
        LanguageRow, ProjectRow, ResumeRow,
    };
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn resume_row() -> ResumeRow {
        ResumeRow {
            id: 1,
            user_id: 1,
            title: "My CV".to_string(),
            experiences_title: Some("Work".to_string()),
            projects_title: Some("Side projects".to_string()),
            education_title: Some("Studies".to_string()),
            courses_title: Some("Trainings".to_string()),
            abilities_title: Some("Skills".to_string()),
            languages_title: Some("Spoken languages".to_string()),
            interests_title: Some("Hobbies".to_string()),
            // Reordered on purpose: the composer must ignore these.
            experiences_index: Some(6),
            projects_index: Some(5),
            education_index: Some(4),
            courses_index: Some(3),
            abilities_index: Some(2),
            languages_index: Some(1),
            interests_index: Some(0),
        }
    }

    fn full_bundle() -> ResumeBundle {
        ResumeBundle {
            resume: resume_row(),
            contact: Some(ContactDetailsRow {
                id: 1,
                resume_id: 1,
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                phone_number: "+44 1 234".to_string(),
                email: Some("ada@example.com".to_string()),
                address: None,
                city: Some("London".to_string()),
                linked_in: None,
                personal_website: None,
            }),
            experiences: vec![ExperienceRow {
                id: 1,
                resume_id: 1,
                title: "Engineer".to_string(),
                employer: "Engines Ltd".to_string(),
                city: "London".to_string(),
                start_date: Some(date(2020, 1, 1)),
                finish_date: None,
                is_ongoing: true,
                description: Some("<ul><li>Did work</li></ul>".to_string()),
                sort_order: 0,
            }],
            projects: vec![ProjectRow {
                id: 1,
                resume_id: 1,
                title: "Engine".to_string(),
                link: None,
                tech_stack: None,
                description: None,
                sort_order: 0,
            }],
            education: vec![EducationRow {
                id: 1,
                resume_id: 1,
                degree: "BSc".to_string(),
                school: "UCL".to_string(),
                start_date: Some(date(2015, 10, 1)),
                finish_date: Some(date(2018, 6, 1)),
                is_ongoing: false,
                sort_order: 0,
            }],
            courses: vec![CourseRow {
                id: 1,
                resume_id: 1,
                title: "Algorithms".to_string(),
                institution: None,
                start_date: None,
                finish_date: None,
                is_ongoing: false,
                sort_order: 0,
            }],
            abilities: vec![AbilityRow {
                id: 1,
                resume_id: 1,
                title: "Rust".to_string(),
                level: 5,
                sort_order: 0,
            }],
            languages: vec![LanguageRow {
                id: 1,
                resume_id: 1,
                language: "French".to_string(),
                level: "C1".to_string(),
                sort_order: 0,
            }],
            interests: vec![InterestRow {
                id: 1,
                resume_id: 1,
                title: "Chess".to_string(),
                sort_order: 0,
            }],
        }
    }

    #[test]
    fn test_document_is_framed_by_preamble_and_closing() {
        let tex = compose(&full_bundle());
        assert!(tex.starts_with("\\documentclass[letterpaper,11pt]{article}"));
        assert!(tex.ends_with("\\end{document}\n"));
    }

    #[test]
    fn test_all_seven_titles_once_uppercased_in_canonical_order() {
        let tex = compose(&full_bundle());
        let headings = [
            "\\section{WORK}",
            "\\section{SIDE PROJECTS}",
            "\\section{STUDIES}",
            "\\section{TRAININGS}",
            "\\section{SKILLS}",
            "\\section{SPOKEN LANGUAGES}",
            "\\section{HOBBIES}",
        ];
        let mut last = 0;
        for heading in headings {
            assert_eq!(tex.matches(heading).count(), 1, "{heading} must appear once");
            let pos = tex.find(heading).unwrap();
            assert!(
                pos > last,
                "{heading} out of canonical order despite reordered indexes"
            );
            last = pos;
        }
    }

    #[test]
    fn test_empty_section_absent_entirely() {
        let mut bundle = full_bundle();
        bundle.interests.clear();
        let tex = compose(&bundle);
        assert!(!tex.contains("\\section{HOBBIES}"));
        assert!(!tex.contains("Chess"));
    }

    #[test]
    fn test_missing_contact_suppresses_header_block() {
        let mut bundle = full_bundle();
        bundle.contact = None;
        let tex = compose(&bundle);
        assert!(!tex.contains("\\begin{center}"));
        assert!(!tex.contains("\\Huge"));
        // The rest of the document is unaffected.
        assert!(tex.contains("\\section{WORK}"));
    }

    #[test]
    fn test_bare_bundle_is_just_preamble_and_closing() {
        let bundle = ResumeBundle {
            resume: resume_row(),
            contact: None,
            experiences: vec![],
            projects: vec![],
            education: vec![],
            courses: vec![],
            abilities: vec![],
            languages: vec![],
            interests: vec![],
        };
        let tex = compose(&bundle);
        assert_eq!(tex, format!("{PREAMBLE}\\end{{document}}\n"));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let bundle = full_bundle();
        assert_eq!(compose(&bundle), compose(&bundle));
    }
}
