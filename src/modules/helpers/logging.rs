use fern::Dispatch;
use log::LevelFilter;

use crate::config::Settings;

pub fn level_from_str(verbosity: &str) -> LevelFilter {
    match verbosity {
        "OFF" => LevelFilter::Off,
        "ERROR" => LevelFilter::Error,
        "WARN" => LevelFilter::Warn,
        "DEBUG" => LevelFilter::Debug,
        "TRACE" => LevelFilter::Trace,
        _ => {
            // default to info
            LevelFilter::Info
        }
    }
}

pub fn setup_logging(settings: &Settings) -> Result<(), fern::InitError> {
    let base_config = Dispatch::new().level(level_from_str(&settings.logging_level));

    let format_config = Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .chain(std::io::stdout())
        .chain(fern::log_file(&settings.log_file)?);

    base_config.chain(format_config).apply()?;

    Ok(())
}
