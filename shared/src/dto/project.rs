use serde::{Deserialize, Serialize};

/// Data Transfer Object for a project as listed by `GET /projects`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectDto {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Relative path or absolute URL, resolved through `build_image_url`
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Full project returned by `GET /projects/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectDetailDto {
    #[serde(flatten)]
    pub project: ProjectDto,
    /// HTML body
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<TechnologyDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TechnologyDto {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// Category from `GET /project-categories`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}
