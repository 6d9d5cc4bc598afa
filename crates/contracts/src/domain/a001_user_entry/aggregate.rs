use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Gender
// ============================================================================

/// Пол, выбираемый в форме (радиокнопки)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Порядок отображения в группе радиокнопок
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str() == s.trim())
            .ok_or_else(|| format!("Unknown gender: {}", s))
    }
}

// ============================================================================
// Skill catalog
// ============================================================================

/// Фиксированный список навыков формы
pub const SKILL_CATALOG: &[&str] = &[
    "JavaScript",
    "React",
    "Node.js",
    "Python",
    "Java",
    "CSS",
    "HTML",
    "MongoDB",
];

/// Каталог навыков, из которого строятся чекбоксы и по которому проверяется выбор
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCatalog(&'static [&'static str]);

impl SkillCatalog {
    pub const fn new(skills: &'static [&'static str]) -> Self {
        Self(skills)
    }

    pub const fn standard() -> Self {
        Self(SKILL_CATALOG)
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.contains(&skill)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> {
        let skills: &'static [&'static str] = self.0;
        skills.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SkillCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Тело запроса POST /users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntryDto {
    pub name: String,

    #[serde(rename = "rollNo")]
    pub roll_no: String,

    pub gender: Gender,
    pub skills: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parse() {
        assert_eq!("Male".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!(" Female ".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!("Other".parse::<Gender>(), Ok(Gender::Other));
        assert!("male".parse::<Gender>().is_err());
        assert!("".parse::<Gender>().is_err());
    }

    #[test]
    fn test_standard_catalog() {
        let catalog = SkillCatalog::standard();
        assert_eq!(catalog.len(), 8);
        assert!(catalog.contains("Node.js"));
        assert!(catalog.contains("MongoDB"));
        assert!(!catalog.contains("Rust"));
        assert_eq!(catalog.iter().next(), Some("JavaScript"));
    }

    #[test]
    fn test_payload_wire_format() {
        let dto = UserEntryDto {
            name: "Asha".to_string(),
            roll_no: "21-IT-042".to_string(),
            gender: Gender::Female,
            skills: vec!["React".to_string(), "CSS".to_string()],
        };

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Asha",
                "rollNo": "21-IT-042",
                "gender": "Female",
                "skills": ["React", "CSS"]
            })
        );
    }
}
