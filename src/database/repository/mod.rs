mod group_settings_repo;
mod message_log_repository;
mod warns_repository;

pub use group_settings_repo::GroupSettingsRepo;
pub use message_log_repository::MessageLogRepository;
pub use warns_repository::WarnsRepository;
