use std::ffi::OsString;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::config::config::*;
use crate::config::manifest::GalleryManifest;
use crate::ui::viewer::GalleryViewerApp;

const USAGE: &str = "\
Usage: image-gallery [--title TEXT] [PATH ...]

PATH may be a gallery manifest (.toml), a directory of images or an image file.

Options:
  -t, --title TEXT   Title used for the image descriptions
  -h, --help         Print this help
";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub help: bool,
    pub title: Option<String>,
    pub paths: Vec<PathBuf>,
}

pub fn parse_args(raw: Vec<OsString>) -> Result<Args, pico_args::Error> {
    let mut args = pico_args::Arguments::from_vec(raw);
    let help = args.contains(["-h", "--help"]);
    let title = args.opt_value_from_str(["-t", "--title"])?;
    let paths = args
        .finish()
        .into_iter()
        .map(PathBuf::from)
        .collect();
    Ok(Args { help, title, paths })
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    // A subscriber may already be set when embedded in another program.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

pub fn run() -> eframe::Result<()> {
    init_logging();

    let args = match parse_args(std::env::args_os().skip(1).collect()) {
        Ok(args) => args,
        Err(e) => {
            tracing::error!(error = %e, "invalid arguments");
            eprint!("{USAGE}");
            std::process::exit(2);
        }
    };
    if args.help {
        print!("{USAGE}");
        return Ok(());
    }

    let mut startup_error = None;
    let manifest = if args.paths.is_empty() {
        None
    } else {
        match GalleryManifest::from_paths(&args.paths, args.title.clone()) {
            Ok(manifest) => Some(manifest),
            Err(e) => {
                tracing::error!(error = %e, "could not build gallery from arguments");
                startup_error = Some(e.to_string());
                None
            }
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(WINDOW_MIN_SIZE),
        ..Default::default()
    };

    tracing::info!(version = APP_VERSION, "starting {APP_NAME}");
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |_cc| {
            let mut app = GalleryViewerApp::new(manifest, args.title);
            if let Some(error) = startup_error {
                app.set_error(error);
            }
            Ok(Box::new(app))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn parses_title_and_paths() {
        let args = parse_args(os(&["--title", "Villa", "fotos", "extra.jpg"])).expect("parse");
        assert_eq!(
            args,
            Args {
                help: false,
                title: Some("Villa".into()),
                paths: vec![PathBuf::from("fotos"), PathBuf::from("extra.jpg")],
            }
        );
    }

    #[test]
    fn no_arguments_is_empty() {
        assert_eq!(parse_args(Vec::new()).expect("parse"), Args::default());
    }

    #[test]
    fn help_flag_is_detected() {
        assert!(parse_args(os(&["-h"])).expect("parse").help);
    }

    #[test]
    fn title_without_value_is_an_error() {
        assert!(parse_args(os(&["--title"])).is_err());
    }
}
