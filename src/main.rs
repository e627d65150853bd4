// SPDX-License-Identifier: MPL-2.0
use iced_slides::app::{self, paths, Flags};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

const HELP: &str = "\
IcedSlides

USAGE:
  iced_slides [OPTIONS] [PATH]

OPTIONS:
  -i, --image <PATH>       Open an image file or a directory
  -n, --carousel <0|1>     Start in carousel (1) or simple (0) mode
  -p, --preload <FLAG>     Preload hint (accepted, currently unused)
      --lang <ID>          UI language (e.g. en-US, fr)
      --config-dir <DIR>   Directory holding settings.toml
  -v, --version            Print version and exit
  -h, --help               Print this help and exit
";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn parse_carousel(value: &str) -> Result<bool, String> {
    match value {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(format!("expected 0 or 1, got '{other}'")),
    }
}

fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }
    if args.contains(["-v", "--version"]) {
        println!("IcedSlides : {}", env!("CARGO_PKG_VERSION"));
        return Ok(None);
    }

    let image: Option<PathBuf> = args.opt_value_from_str(["-i", "--image"])?;
    let carousel = args.opt_value_from_fn(["-n", "--carousel"], parse_carousel)?;
    let preload: Option<String> = args.opt_value_from_str(["-p", "--preload"])?;
    let lang: Option<String> = args.opt_value_from_str("--lang")?;
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir")?;

    let positional = args.finish().into_iter().next().map(PathBuf::from);

    Ok(Some(Flags {
        lang,
        image: image.or(positional),
        carousel,
        preload,
        config_dir,
    }))
}

fn main() -> ExitCode {
    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => return ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    init_tracing();
    paths::init_cli_overrides(flags.config_dir.clone());

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
