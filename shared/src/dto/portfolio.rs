use serde::{Deserialize, Serialize};

/// Response of `GET /portfolio`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PortfolioDto {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    /// HTML fragment
    #[serde(default)]
    pub description: Option<String>,
    /// HTML fragment
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub contact_message: Option<String>,
    #[serde(default)]
    pub skills: Vec<SkillDto>,
    #[serde(default)]
    pub social_links: Vec<SocialLinkDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillDto {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialLinkDto {
    pub platform: String,
    pub url: String,
}
