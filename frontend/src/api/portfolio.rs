use crate::api::client::{ApiClient, RequestOptions};
use log::debug;
use shared::{
    ApiError, CategoryDto, ContactRequest, ContactResponse, PortfolioDto, ProjectDetailDto,
    ProjectDto, ProjectSearchFilters,
};
use std::fmt::Display;

/// Path for `GET /projects/search`, with the query string only when a filter is set
pub fn search_endpoint(filters: &ProjectSearchFilters) -> String {
    let query = filters.to_query_string();
    if query.is_empty() {
        "/projects/search".to_string()
    } else {
        format!("/projects/search?{}", query)
    }
}

impl ApiClient {
    pub async fn get_portfolio_data(&self) -> Result<PortfolioDto, ApiError> {
        debug!("Fetching portfolio data");
        self.request("/portfolio", RequestOptions::get()).await
    }

    pub async fn get_projects(&self) -> Result<Vec<ProjectDto>, ApiError> {
        debug!("Fetching all projects");
        let projects: Vec<ProjectDto> = self.request("/projects", RequestOptions::get()).await?;
        debug!("Successfully fetched {} projects", projects.len());
        Ok(projects)
    }

    pub async fn get_project(&self, id: impl Display) -> Result<ProjectDetailDto, ApiError> {
        debug!("Fetching project with ID: {}", id);
        self.request(&format!("/projects/{}", id), RequestOptions::get())
            .await
    }

    pub async fn get_project_categories(&self) -> Result<Vec<CategoryDto>, ApiError> {
        debug!("Fetching project categories");
        self.request("/project-categories", RequestOptions::get())
            .await
    }

    pub async fn search_projects(
        &self,
        filters: &ProjectSearchFilters,
    ) -> Result<Vec<ProjectDto>, ApiError> {
        let endpoint = search_endpoint(filters);
        debug!("Searching projects: {}", endpoint);
        let projects: Vec<ProjectDto> = self.request(&endpoint, RequestOptions::get()).await?;
        debug!("Successfully found {} projects", projects.len());
        Ok(projects)
    }

    pub async fn submit_contact(&self, data: &ContactRequest) -> Result<ContactResponse, ApiError> {
        debug!("Submitting contact form from: {}", data.email);
        self.request("/contact", RequestOptions::post().json(data)?)
            .await
    }
}
