pub mod model;

pub use model::{FilesConfig, LoggingConfig, Settings, TallyConfig, load_settings, load_settings_from};
