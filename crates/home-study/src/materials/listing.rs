use super::domain::{MaterialKind, MaterialRecord};
use crate::roster::StudentId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Narrowing offered on a student's detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialFilter {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<MaterialKind>,
    #[serde(default)]
    pub search: Option<String>,
}

impl MaterialFilter {
    pub fn matches(&self, material: &MaterialRecord) -> bool {
        let matches_subject = match self.subject.as_deref() {
            None | Some("all") => true,
            Some(subject) => material.subject == subject,
        };
        let matches_kind = self.kind.map_or(true, |kind| material.kind == kind);
        let matches_search = match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                [
                    &material.subject,
                    &material.description,
                    &material.teacher_name,
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&term))
            }
            _ => true,
        };

        matches_subject && matches_kind && matches_search
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KindCounts {
    pub materials: usize,
    pub activities: usize,
    pub total: usize,
}

impl KindCounts {
    pub fn tally<'a>(materials: impl IntoIterator<Item = &'a MaterialRecord>) -> Self {
        materials.into_iter().fold(Self::default(), |mut counts, m| {
            match m.kind {
                MaterialKind::Material => counts.materials += 1,
                MaterialKind::Activity => counts.activities += 1,
            }
            counts.total += 1;
            counts
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MaterialListing {
    pub student_id: StudentId,
    pub subjects: Vec<String>,
    pub counts: KindCounts,
    pub materials: Vec<MaterialRecord>,
}

/// A student's materials, filtered and newest first. Subjects cover all of the student's records.
pub fn list_materials(
    materials: &[MaterialRecord],
    student_id: &StudentId,
    filter: &MaterialFilter,
) -> MaterialListing {
    let owned: Vec<&MaterialRecord> = materials
        .iter()
        .filter(|material| &material.student_id == student_id)
        .collect();

    let subjects: BTreeSet<&str> = owned.iter().map(|m| m.subject.as_str()).collect();

    let mut selected: Vec<MaterialRecord> = owned
        .into_iter()
        .filter(|material| filter.matches(material))
        .cloned()
        .collect();
    selected.sort_by(newest_first);

    MaterialListing {
        student_id: student_id.clone(),
        subjects: subjects.into_iter().map(str::to_string).collect(),
        counts: KindCounts::tally(&selected),
        materials: selected,
    }
}

fn newest_first(a: &MaterialRecord, b: &MaterialRecord) -> Ordering {
    match (a.date_at(), b.date_at()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
