pub mod defaults;
pub mod entities;
pub mod identity;
pub mod profile_patch;
pub mod public_view;
pub mod section;
pub mod validation;
