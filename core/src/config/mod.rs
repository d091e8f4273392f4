mod load;
mod types;

pub use load::{
    apply_env_overrides, get_tping_data_dir, load_default, load_from_path, load_from_str,
    CONFIG_FILE_NAME, LOCAL_CONFIG_FILE_NAME,
};
pub use types::{
    default_failure_keywords, default_success_keywords, AppConfig, ClassifyConfig, ColorMode,
    LoggingConfig, OutputConfig, RunnerConfig,
};
