use super::super::domain::{MaterialKind, MaterialRecord};
use super::views::{ReportEntry, ReportStudent, ReportSummary, StudentReport, SubjectSection};
use crate::roster::dates::{format_br_date, format_optional_br_date};
use crate::roster::{classify, StudentRecord};
use chrono::NaiveDateTime;
use std::cmp::Ordering;
use std::collections::BTreeMap;

impl StudentReport {
    /// Materials belonging to other students are ignored.
    pub fn build(
        student: &StudentRecord,
        materials: &[MaterialRecord],
        now: NaiveDateTime,
    ) -> Self {
        let owned: Vec<&MaterialRecord> = materials
            .iter()
            .filter(|material| material.student_id == student.id)
            .collect();

        let mut by_subject: BTreeMap<&str, Vec<&MaterialRecord>> = BTreeMap::new();
        for material in &owned {
            by_subject
                .entry(material.subject.as_str())
                .or_default()
                .push(material);
        }

        let sections: Vec<SubjectSection> = by_subject
            .into_iter()
            .map(|(subject, mut entries)| {
                entries.sort_by(|a, b| oldest_first(a, b));
                SubjectSection {
                    subject: subject.to_string(),
                    entries: entries.into_iter().map(to_entry).collect(),
                }
            })
            .collect();

        let summary = ReportSummary {
            materials: owned
                .iter()
                .filter(|m| m.kind == MaterialKind::Material)
                .count(),
            activities: owned
                .iter()
                .filter(|m| m.kind == MaterialKind::Activity)
                .count(),
            subjects: sections.len(),
        };

        let status = classify(student, now);

        StudentReport {
            student: ReportStudent {
                id: student.id.clone(),
                name: student.name.clone(),
                course: student.course.clone(),
                class_name: student.class_name.clone(),
                period_start: format_optional_br_date(student.start_date.as_deref()),
                period_end: format_optional_br_date(student.end_date.as_deref()),
            },
            status,
            status_label: status.label(),
            summary,
            sections,
            generated_at: now,
        }
    }
}

fn oldest_first(a: &MaterialRecord, b: &MaterialRecord) -> Ordering {
    match (a.date_at(), b.date_at()) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn to_entry(material: &MaterialRecord) -> ReportEntry {
    ReportEntry {
        kind: material.kind,
        kind_label: material.kind.label(),
        teacher_name: material.teacher_name.clone(),
        date: format_br_date(&material.date),
        description: material.description.clone(),
        files: material.files.iter().map(|file| file.name.clone()).collect(),
        links: material.links.clone(),
    }
}
