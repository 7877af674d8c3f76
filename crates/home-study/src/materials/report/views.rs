use super::super::domain::MaterialKind;
use crate::roster::{StudentId, StudentStatus};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Serialize)]
pub struct ReportStudent {
    pub id: StudentId,
    pub name: String,
    pub course: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub period_start: String,
    pub period_end: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub materials: usize,
    pub activities: usize,
    pub subjects: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub kind: MaterialKind,
    pub kind_label: &'static str,
    pub teacher_name: String,
    pub date: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubjectSection {
    pub subject: String,
    pub entries: Vec<ReportEntry>,
}

/// Printable home-study report for one student.
#[derive(Debug, Clone, Serialize)]
pub struct StudentReport {
    pub student: ReportStudent,
    pub status: StudentStatus,
    pub status_label: &'static str,
    pub summary: ReportSummary,
    pub sections: Vec<SubjectSection>,
    pub generated_at: NaiveDateTime,
}

impl StudentReport {
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let student = &self.student;

        let _ = writeln!(out, "Home-study regime report");
        let _ = writeln!(out, "========================");
        let _ = writeln!(out, "Student: {}", student.name);
        let _ = writeln!(out, "Course:  {}", student.course);
        let _ = writeln!(out, "Class:   {}", student.class_name);
        let _ = writeln!(
            out,
            "Period:  {} to {} ({})",
            student.period_start, student.period_end, self.status_label
        );

        let _ = writeln!(out, "\nSummary");
        let _ = writeln!(out, "- Materials: {}", self.summary.materials);
        let _ = writeln!(out, "- Activities: {}", self.summary.activities);
        let _ = writeln!(out, "- Subjects: {}", self.summary.subjects);

        if self.sections.is_empty() {
            let _ = writeln!(out, "\nNo materials or activities recorded.");
        }

        for section in &self.sections {
            let _ = writeln!(out, "\n{}", section.subject);
            for entry in &section.entries {
                let _ = writeln!(
                    out,
                    "  [{}] {} | {} | {}",
                    entry.kind_label, entry.date, entry.teacher_name, entry.description
                );
                for file in &entry.files {
                    let _ = writeln!(out, "    file: {file}");
                }
                for link in &entry.links {
                    let _ = writeln!(out, "    link: {link}");
                }
            }
        }

        let _ = writeln!(
            out,
            "\nGenerated on {}",
            self.generated_at.format("%d/%m/%Y at %H:%M")
        );
        out
    }
}
