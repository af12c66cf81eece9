use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "prod" | "production" => Ok(Environment::Production),
            _ => Err(format!("Unknown environment: {}", s)),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl Environment {
    pub fn from_is_production(is_production: bool) -> Self {
        if is_production {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    /// Build-mode flag baked in at compile time.
    ///
    /// `PORTFOLIO_ENV` wins when it parses; otherwise release builds are
    /// production and debug builds are development.
    pub fn detect() -> Self {
        option_env!("PORTFOLIO_ENV")
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(|| Self::from_is_production(!cfg!(debug_assertions)))
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeveloperConfig {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiSettings {
    pub base_url: String,
    /// Carried for hosts that enforce one; the client itself sets no timeout.
    pub timeout: Duration,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiEnvironments {
    pub development: ApiSettings,
    pub production: ApiSettings,
}

impl ApiEnvironments {
    pub fn select(&self, env: Environment) -> &ApiSettings {
        match env {
            Environment::Development => &self.development,
            Environment::Production => &self.production,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppMetadata {
    pub name: String,
    pub version: String,
    pub description: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImagesConfig {
    pub base_url: String,
    pub default_project: String,
    pub default_profile: String,
    pub allowed_formats: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialProfile {
    pub platform: String,
    pub url: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialMediaConfig {
    pub profiles: Vec<SocialProfile>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsConfig {
    pub enabled: bool,
    pub tracking_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeoConfig {
    pub default_title: String,
    pub default_description: String,
    pub default_image: String,
    pub twitter_handle: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmailService {
    Laravel,
    Emailjs,
    Formspree,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactFeatureConfig {
    pub enable_recaptcha: bool,
    pub recaptcha_site_key: String,
    pub email_service: EmailService,
    pub emailjs: EmailJsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeaturesConfig {
    pub contact_form: bool,
    pub project_modal: bool,
    pub dark_mode: bool,
    pub animations: bool,
    pub lazy_loading: bool,
    pub contact: ContactFeatureConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacheConfig {
    pub api_response_time: Duration,
    pub images_cache_time: Duration,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceConfig {
    pub enable_service_worker: bool,
    pub enable_lazy_loading: bool,
    pub image_optimization: bool,
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    pub enabled: bool,
    /// `debug`, `info`, `warn`, `error` or `trace`
    pub level: String,
    pub api_errors: bool,
    pub user_actions: bool,
}

/// Resolved build environment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnvInfo {
    pub current: Environment,
    pub is_development: bool,
    pub is_production: bool,
}

/// Complete frontend configuration, selected once at startup and then
/// passed by reference to whatever needs it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub env: EnvInfo,
    /// Settings for the active environment
    pub api: ApiSettings,
    /// Settings for every environment, as declared
    pub api_environments: ApiEnvironments,
    pub developer: DeveloperConfig,
    pub app: AppMetadata,
    pub images: ImagesConfig,
    pub social_media: SocialMediaConfig,
    pub analytics: AnalyticsConfig,
    pub seo: SeoConfig,
    pub features: FeaturesConfig,
    pub performance: PerformanceConfig,
    pub logging: LoggingConfig,
}

const DEV_API_BASE_URL: &str = "http://localhost:8000/api";
const PROD_API_BASE_URL: &str = "https://portfolio-backend.example.com/api";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn social(platform: &str, url: &str, icon: &str, color: &str) -> SocialProfile {
    SocialProfile {
        platform: platform.to_string(),
        url: url.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
    }
}

/// Joins `base` and `path` with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

impl AppConfig {
    /// Configuration for the build environment of this binary.
    pub fn load() -> Self {
        let config = Self::get_config(Environment::detect());
        match option_env!("PORTFOLIO_API_BASE_URL") {
            Some(url) if !url.is_empty() => config.with_api_base_url(url),
            _ => config,
        }
    }

    pub fn get_config(env: Environment) -> Self {
        let is_production = env.is_production();
        let is_development = !is_production;

        let api_environments = ApiEnvironments {
            development: ApiSettings {
                base_url: DEV_API_BASE_URL.to_string(),
                timeout: Duration::from_millis(10_000),
            },
            production: ApiSettings {
                base_url: PROD_API_BASE_URL.to_string(),
                timeout: Duration::from_millis(15_000),
            },
        };

        Self {
            env: EnvInfo {
                current: env,
                is_development,
                is_production,
            },
            api: api_environments.select(env).clone(),
            api_environments,
            developer: DeveloperConfig {
                name: "Your Full Name".to_string(),
                email: "you@example.com".to_string(),
                phone: "+1 555 010 0000".to_string(),
                location: "City, Country".to_string(),
            },
            app: AppMetadata {
                name: "My Portfolio".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: "Professional portfolio backed by a Laravel API".to_string(),
                keywords: strings(&["portfolio", "developer", "rust", "laravel", "full-stack"]),
            },
            images: ImagesConfig {
                base_url: if is_development {
                    "/images".to_string()
                } else {
                    "https://cdn.example.com/images".to_string()
                },
                default_project: "/images/placeholder-project.jpg".to_string(),
                default_profile: "/images/profile-placeholder.jpg".to_string(),
                allowed_formats: strings(&["jpg", "jpeg", "png", "webp", "svg"]),
            },
            social_media: SocialMediaConfig {
                profiles: vec![
                    social("LinkedIn", "https://linkedin.com/in/your-profile", "fab fa-linkedin", "#0077B5"),
                    social("GitHub", "https://github.com/your-user", "fab fa-github", "#333333"),
                    social("Twitter", "https://twitter.com/your-user", "fab fa-twitter", "#1DA1F2"),
                    social("Instagram", "https://instagram.com/your-user", "fab fa-instagram", "#E4405F"),
                ],
            },
            analytics: AnalyticsConfig {
                enabled: is_production,
                tracking_id: "GA_TRACKING_ID".to_string(),
            },
            seo: SeoConfig {
                default_title: "Your Name - Full Stack Developer".to_string(),
                default_description:
                    "Professional web development portfolio built with modern technologies."
                        .to_string(),
                default_image: "/images/og-image.jpg".to_string(),
                twitter_handle: "@your_user".to_string(),
            },
            features: FeaturesConfig {
                contact_form: true,
                project_modal: true,
                dark_mode: false,
                animations: true,
                lazy_loading: true,
                contact: ContactFeatureConfig {
                    enable_recaptcha: is_production,
                    recaptcha_site_key: "RECAPTCHA_SITE_KEY".to_string(),
                    email_service: EmailService::Laravel,
                    emailjs: EmailJsConfig {
                        service_id: "SERVICE_ID".to_string(),
                        template_id: "TEMPLATE_ID".to_string(),
                        public_key: "PUBLIC_KEY".to_string(),
                    },
                },
            },
            performance: PerformanceConfig {
                enable_service_worker: is_production,
                enable_lazy_loading: true,
                image_optimization: is_production,
                cache: CacheConfig {
                    api_response_time: Duration::from_secs(5 * 60),
                    images_cache_time: Duration::from_secs(24 * 60 * 60),
                },
            },
            logging: LoggingConfig {
                enabled: is_development,
                level: if is_development { "debug" } else { "error" }.to_string(),
                api_errors: true,
                user_actions: is_development,
            },
        }
    }

    /// Same configuration pointed at another backend.
    pub fn with_api_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    pub fn build_api_url(&self, endpoint: &str) -> String {
        join_url(&self.api.base_url, endpoint)
    }

    pub fn build_image_url(&self, image_path: &str) -> String {
        if image_path.is_empty() {
            return self.images.default_project.clone();
        }
        if image_path.starts_with("http") {
            return image_path.to_string();
        }
        join_url(&self.images.base_url, image_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn dev() -> AppConfig {
        AppConfig::get_config(Environment::Development)
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!("dev".parse::<Environment>(), Ok(Environment::Development));
        assert_eq!("Production".parse::<Environment>(), Ok(Environment::Production));
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_development_config() {
        let config = dev();
        assert_eq!(config.env.current, Environment::Development);
        assert!(config.env.is_development);
        assert!(!config.env.is_production);
        assert_eq!(config.api.base_url, DEV_API_BASE_URL);
        assert_eq!(config.api.timeout, Duration::from_secs(10));
        assert_eq!(config.images.base_url, "/images");
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.enabled);
        assert!(!config.analytics.enabled);
        assert!(!config.features.contact.enable_recaptcha);
    }

    #[test]
    fn test_production_config() {
        let config = AppConfig::get_config(Environment::from_is_production(true));
        assert_eq!(config.env.current, Environment::Production);
        assert!(config.env.is_production);
        assert!(!config.env.is_development);
        assert_eq!(config.api.base_url, PROD_API_BASE_URL);
        assert_eq!(config.api.timeout, Duration::from_secs(15));
        assert_eq!(config.logging.level, "error");
        assert!(!config.logging.user_actions);
        assert!(config.analytics.enabled);
        assert!(config.performance.enable_service_worker);
        assert!(config.images.base_url.starts_with("https://"));
    }

    #[test]
    fn test_static_settings_shared_across_environments() {
        let dev = dev();
        let prod = AppConfig::get_config(Environment::Production);
        assert_eq!(dev.social_media, prod.social_media);
        assert_eq!(dev.seo, prod.seo);
        assert_eq!(dev.api_environments, prod.api_environments);
        assert_eq!(dev.performance.cache, prod.performance.cache);
        assert_eq!(dev.performance.cache.api_response_time, Duration::from_secs(300));
        assert_eq!(dev.social_media.profiles.len(), 4);
    }

    #[test]
    fn test_with_api_base_url_only_changes_active_api() {
        let config = dev().with_api_base_url("https://staging.example.com/api/");
        assert_eq!(config.build_api_url("projects"), "https://staging.example.com/api/projects");
        assert_eq!(config.api_environments.development.base_url, DEV_API_BASE_URL);
    }

    #[test]
    fn test_build_api_url_leading_slash_is_optional() {
        let config = dev();
        assert_eq!(config.build_api_url("/projects"), config.build_api_url("projects"));
        assert_eq!(config.build_api_url("/projects"), "http://localhost:8000/api/projects");
    }

    #[rstest]
    #[case("http://h/api", "x")]
    #[case("http://h/api/", "x")]
    #[case("http://h/api", "/x")]
    #[case("http://h/api/", "/x")]
    fn test_build_api_url_single_separator(#[case] base: &str, #[case] endpoint: &str) {
        let config = dev().with_api_base_url(base);
        assert_eq!(config.build_api_url(endpoint), "http://h/api/x");
    }

    #[test]
    fn test_build_api_url_idempotent_for_absolute_paths() {
        let config = dev();
        let once = config.build_api_url("/projects/search?category=web");
        assert_eq!(once, "http://localhost:8000/api/projects/search?category=web");
        assert!(!once["http://".len()..].contains("//"));
    }

    #[test]
    fn test_build_image_url_empty_uses_placeholder() {
        let config = dev();
        assert_eq!(config.build_image_url(""), "/images/placeholder-project.jpg");
    }

    #[test]
    fn test_build_image_url_absolute_untouched() {
        let config = dev();
        assert_eq!(config.build_image_url("http://a/b.jpg"), "http://a/b.jpg");
        assert_eq!(
            config.build_image_url("https://cdn.example.com/x.png"),
            "https://cdn.example.com/x.png"
        );
    }

    #[rstest]
    #[case("x.jpg")]
    #[case("/x.jpg")]
    fn test_build_image_url_relative(#[case] path: &str) {
        let config = dev();
        assert_eq!(config.build_image_url(path), "/images/x.jpg");
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("a/", "/b"), "a/b");
        assert_eq!(join_url("a", "b"), "a/b");
    }
}
