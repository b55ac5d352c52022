// model-gallery/src/logging.rs

use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;

/// Initialize logging. With a path, the log4rs YAML config at that path is
/// loaded; otherwise a console appender at INFO level is used.
pub fn init_logging(config_path: Option<&Path>) -> Result<(), String> {
    match config_path {
        Some(path) => log4rs::init_file(path, Default::default())
            .map_err(|e| format!("Failed to load logging config {}: {}", path.display(), e)),
        None => {
            let config = default_config()?;
            log4rs::init_config(config)
                .map(|_| ())
                .map_err(|e| format!("Failed to initialize logging: {}", e))
        }
    }
}

fn default_config() -> Result<Config, String> {
    let console = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] {t} - {m}{n}",
        )))
        .build();
    Config::builder()
        .appender(Appender::builder().build("console", Box::new(console)))
        .build(Root::builder().appender("console").build(LevelFilter::Info))
        .map_err(|e| format!("Invalid logging config: {}", e))
}
