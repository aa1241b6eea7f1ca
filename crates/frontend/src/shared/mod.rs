pub mod api_utils;
pub mod chart;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod icons;
pub mod list_utils;
pub mod page_frame;
pub mod polling;
pub mod request_guard;
pub mod storage;
pub mod toast;
