pub mod export_portfolio;
pub mod get_portfolio;
pub mod get_section;
pub mod get_skill_icon;
pub mod github_sync;
pub mod import_portfolio;
pub mod patch_section;
pub mod replace_portfolio;
pub mod reset_portfolio;
pub mod stream_portfolio;

pub use export_portfolio::export_portfolio_handler;
pub use get_portfolio::get_portfolio_handler;
pub use get_section::get_section_handler;
pub use get_skill_icon::{get_skill_icon_handler, SkillIconResponse};
pub use github_sync::github_sync_handler;
pub use import_portfolio::import_portfolio_handler;
pub use patch_section::patch_section_handler;
pub use replace_portfolio::replace_portfolio_handler;
pub use reset_portfolio::reset_portfolio_handler;
pub use stream_portfolio::stream_portfolio_handler;
