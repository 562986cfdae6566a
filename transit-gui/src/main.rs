#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, path::PathBuf, process};

use iced::{Settings, Size, Task};
use tracing::{error, info, warn};

use transit_gui::{
    app::App,
    config::{Config, ConfigError},
    dir::TransitDirectory,
    error::Error as GuiError,
    logger::{parse_log_level, setup_logger},
    transit::Transit,
    VERSION,
};
use transit_ui::{component::text, font, theme};

#[derive(Debug, PartialEq)]
enum Arg {
    DatadirPath(TransitDirectory),
}

fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(0);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: transit-gui [OPTIONS]

Options:
    --datadir <PATH>    Path of transit datadir
    -v, --version       Display transit-gui version
    -h, --help          Print help
        "#
        );
        process::exit(0);
    }

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--datadir" {
            match args.next() {
                Some(a) => res.push(Arg::DatadirPath(TransitDirectory::new(PathBuf::from(a)))),
                None => return Err("missing arg to --datadir".into()),
            }
        } else {
            return Err(format!("unknown argument '{}'", arg).into());
        }
    }

    Ok(res)
}

fn load_config(datadir: &TransitDirectory) -> Result<Config, GuiError> {
    let path = datadir.config_file();
    match Config::from_file(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::NotFound) => {
            let config = Config::default();
            config.to_file(&path)?;
            Ok(config)
        }
        Err(e) => Err(e.into()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;
    let datadir = match args.as_slice() {
        [] => TransitDirectory::new_default()?,
        [Arg::DatadirPath(datadir)] => datadir.clone(),
        _ => {
            return Err("Unknown args combination".into());
        }
    };

    if !datadir.exists() {
        datadir
            .init()
            .map_err(|e| GuiError::Unexpected(format!("Failed to create datadir: {}", e)))?;
    }

    let config = load_config(&datadir)?;
    let log_level = match parse_log_level()? {
        Some(level) => level,
        None => config.log_level()?,
    };
    setup_logger(log_level, &datadir)?;
    setup_panic_hook();

    if config.providers.is_empty() {
        warn!("No wallet provider declared in {}", datadir.config_file().display());
    }
    info!("Starting transit-gui {}", VERSION);

    let settings = Settings {
        id: Some("Transit".to_string()),
        antialiasing: false,
        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        ..Settings::default()
    };

    let window_settings = iced::window::Settings {
        size: Size {
            width: 560.0,
            height: 640.0,
        },
        min_size: Some(Size {
            width: 400.0,
            height: 300.0,
        }),
        ..Default::default()
    };

    let transit = Transit::new(&config);
    if let Err(e) = iced::application(App::title, App::update, App::view)
        .theme(|_| theme::Theme::default())
        .settings(settings)
        .window(window_settings)
        .run_with(move || (App::new(&config, transit), Task::none()))
    {
        log::error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        std::io::stdout().flush().expect("Flushing stdout");
        std::process::exit(1);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        assert!(parse_args(vec!["transit-gui".into(), "--meth".into()]).is_err());
        assert!(parse_args(vec!["transit-gui".into(), "--datadir".into()]).is_err());
        assert_eq!(
            Some(vec![]),
            parse_args(vec!["transit-gui".into()]).ok()
        );
        assert_eq!(
            Some(vec![Arg::DatadirPath(TransitDirectory::new(PathBuf::from(
                "hello"
            )))]),
            parse_args(
                "transit-gui --datadir hello"
                    .split(' ')
                    .map(|a| a.to_string())
                    .collect()
            )
            .ok()
        );
    }

    #[test]
    fn test_load_config_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let datadir = TransitDirectory::new(dir.path().to_path_buf());
        assert!(!datadir.config_file().exists());
        let config = load_config(&datadir).unwrap();
        assert_eq!(config, Config::default());
        assert!(datadir.config_file().exists());
        assert_eq!(load_config(&datadir).unwrap(), config);
    }

    #[test]
    fn test_load_config_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let datadir = TransitDirectory::new(dir.path().to_path_buf());
        std::fs::write(datadir.config_file(), "log_level = \"loud\"\n").unwrap();
        match load_config(&datadir) {
            Err(GuiError::Config(ConfigError::InvalidField("log_level", _))) => {}
            res => panic!("unexpected result {:?}", res),
        }
    }
}
