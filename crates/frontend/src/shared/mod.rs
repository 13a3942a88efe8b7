pub mod api_utils;
pub mod icons;
pub mod markdown;
pub mod session_store;
pub mod theme;
