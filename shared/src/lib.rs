pub mod dto {
    pub mod auth;
    pub mod common;
    pub mod contact;
    pub mod portfolio;
    pub mod project;
}

pub mod error;

// Re-export commonly used items
pub use error::{handle_api_error, ApiError, Result};

// Re-export DTOs
pub use dto::{
    auth::{LoginRequest, LoginResponse, LogoutResponse, UserDto},
    common::{ErrorResponse, ProjectSearchFilters},
    contact::{ContactRequest, ContactResponse},
    portfolio::{PortfolioDto, SkillDto, SocialLinkDto},
    project::{CategoryDto, ProjectDetailDto, ProjectDto, TechnologyDto},
};
