use super::api_utils::api_base;
use contracts::domain::a001_user_entry::SkillCatalog;

/// Application configuration, provided to components via context
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub skill_catalog: SkillCatalog,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api_base: api_base(),
            skill_catalog: SkillCatalog::standard(),
        }
    }
}
