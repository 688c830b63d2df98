pub mod action_card;
pub mod loading_screen;
pub mod navbar;
pub mod quick_stats;
pub mod stat_card;
pub mod toast;
