use super::domain::{Attachment, MaterialKind};
use crate::roster::StudentId;
use serde::{Deserialize, Serialize};

/// Material or activity as submitted by a teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialDraft {
    #[serde(default)]
    pub student_id: Option<StudentId>,
    #[serde(default)]
    pub subject: String,
    #[serde(rename = "type")]
    pub kind: MaterialKind,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub files: Vec<Attachment>,
    #[serde(default)]
    pub links: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MaterialIntakeError {
    #[error("a student must be selected")]
    MissingStudent,
    #[error("subject is required")]
    MissingSubject,
    #[error("description is required")]
    MissingDescription,
    #[error("activities need at least one link to the learning platform")]
    ActivityWithoutLink,
    #[error("materials need at least one file or link")]
    MaterialWithoutAttachment,
}

impl MaterialDraft {
    pub fn validate(&self) -> Result<(), MaterialIntakeError> {
        let has_student = self
            .student_id
            .as_ref()
            .map(|id| !id.as_str().trim().is_empty())
            .unwrap_or(false);
        if !has_student {
            return Err(MaterialIntakeError::MissingStudent);
        }
        if self.subject.trim().is_empty() {
            return Err(MaterialIntakeError::MissingSubject);
        }
        if self.description.trim().is_empty() {
            return Err(MaterialIntakeError::MissingDescription);
        }

        let has_links = self.usable_links().next().is_some();
        match self.kind {
            MaterialKind::Activity if !has_links => Err(MaterialIntakeError::ActivityWithoutLink),
            MaterialKind::Material if !has_links && self.files.is_empty() => {
                Err(MaterialIntakeError::MaterialWithoutAttachment)
            }
            _ => Ok(()),
        }
    }

    /// Links with blank entries dropped, as they are stored.
    pub fn usable_links(&self) -> impl Iterator<Item = &str> {
        self.links
            .iter()
            .map(|link| link.trim())
            .filter(|link| !link.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(kind: MaterialKind) -> MaterialDraft {
        MaterialDraft {
            student_id: Some(StudentId::new("7")),
            subject: "História".to_string(),
            kind,
            description: "Capítulo 4".to_string(),
            files: Vec::new(),
            links: vec!["  ".to_string()],
        }
    }

    #[test]
    fn activity_requires_a_real_link() {
        let mut activity = draft(MaterialKind::Activity);
        assert_eq!(
            activity.validate(),
            Err(MaterialIntakeError::ActivityWithoutLink)
        );

        activity.files.push(Attachment {
            name: "capitulo4.pdf".to_string(),
            url: String::new(),
        });
        assert_eq!(
            activity.validate(),
            Err(MaterialIntakeError::ActivityWithoutLink)
        );

        activity.links.push("https://nead.example.edu/h4".to_string());
        assert_eq!(activity.validate(), Ok(()));
    }

    #[test]
    fn material_accepts_file_or_link() {
        let mut material = draft(MaterialKind::Material);
        assert_eq!(
            material.validate(),
            Err(MaterialIntakeError::MaterialWithoutAttachment)
        );

        material.files.push(Attachment {
            name: "capitulo4.pdf".to_string(),
            url: "https://files.example.edu/capitulo4.pdf".to_string(),
        });
        assert_eq!(material.validate(), Ok(()));
    }

    #[test]
    fn blank_student_is_rejected_first() {
        let mut material = draft(MaterialKind::Material);
        material.student_id = Some(StudentId::new(" "));
        material.subject.clear();
        assert_eq!(material.validate(), Err(MaterialIntakeError::MissingStudent));
    }

    #[test]
    fn usable_links_skip_blanks() {
        let mut activity = draft(MaterialKind::Activity);
        activity.links = vec![
            " https://a.example ".to_string(),
            String::new(),
            "https://b.example".to_string(),
        ];
        let links: Vec<&str> = activity.usable_links().collect();
        assert_eq!(links, vec!["https://a.example", "https://b.example"]);
    }
}
