use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes as auth_routes;
use crate::auth::application::domain::entities::{AuthState, AuthUser};
use crate::portfolio::adapter::incoming::web::routes as portfolio_routes;
use crate::portfolio::domain::entities::{
    AdminCredentials, ContactInfo, Education, Experience, PortfolioDocument, Profile, Project,
    Season, Settings, Skill, SkillCategory,
};
use crate::portfolio::domain::public_view::{PublicPortfolio, PublicSection, PublicSettings};
use crate::portfolio::domain::section::{Section, SectionName};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Portfolio document storage, live updates and admin session"
    ),
    paths(
        // Portfolio endpoints
        portfolio_routes::get_portfolio::get_portfolio_handler,
        portfolio_routes::get_section::get_section_handler,
        portfolio_routes::stream_portfolio::stream_portfolio_handler,
        portfolio_routes::replace_portfolio::replace_portfolio_handler,
        portfolio_routes::patch_section::patch_section_handler,
        portfolio_routes::reset_portfolio::reset_portfolio_handler,
        portfolio_routes::export_portfolio::export_portfolio_handler,
        portfolio_routes::import_portfolio::import_portfolio_handler,
        portfolio_routes::github_sync::github_sync_handler,

        // Skill endpoints
        portfolio_routes::get_skill_icon::get_skill_icon_handler,

        // Auth endpoints
        auth_routes::login::login_handler,
        auth_routes::logout::logout_handler,
        auth_routes::session::session_handler,
        auth_routes::update_credentials::update_credentials_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Document
            PortfolioDocument,
            Profile,
            Skill,
            SkillCategory,
            Project,
            Experience,
            Education,
            ContactInfo,
            Settings,
            Season,
            AdminCredentials,
            Section,
            SectionName,
            PublicPortfolio,
            PublicSettings,
            PublicSection,

            // Auth DTOs
            AuthState,
            AuthUser,
            auth_routes::LoginRequestDto,
            auth_routes::UpdateCredentialsRequest,
            portfolio_routes::SkillIconResponse,
        )
    ),
    tags(
        (name = "portfolio", description = "Portfolio document endpoints"),
        (name = "skills", description = "Skill helpers"),
        (name = "auth", description = "Admin session endpoints"),
    )
)]
pub struct ApiDoc;
