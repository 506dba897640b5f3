// SPDX-License-Identifier: MPL-2.0
use pitchside::app::{self, paths, Flags};
use pitchside::gallery::{markers::decode_list, OpenGalleryRequest};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Pitchside: club website with an image lightbox

USAGE:
  pitchside [OPTIONS]

OPTIONS:
  --site DIR          Site directory holding data/ and assets/
  --lang LOCALE       Interface language (e.g. en-AU, fr)
  --config-dir DIR    Directory holding settings.toml
  --open LIST         Open a gallery at startup, sources separated by '|'
  --start N           Start index for --open
  -h, --help          Print this help
";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn parse_flags() -> Result<Option<(Flags, Option<String>)>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang: Option<String> = args.opt_value_from_str("--lang")?;
    let site_dir: Option<String> = args.opt_value_from_str("--site")?;
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir")?;
    let open: Option<String> = args.opt_value_from_str("--open")?;
    let start: Option<i64> = args.opt_value_from_str("--start")?;

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    let open = open.map(|raw| {
        let request = OpenGalleryRequest::new(decode_list(&raw));
        match start {
            Some(start) => request.with_start_index(start),
            None => request,
        }
    });

    Ok(Some((
        Flags {
            lang,
            site_dir,
            open,
        },
        config_dir,
    )))
}

fn main() -> iced::Result {
    init_tracing();

    let (flags, config_dir) = match parse_flags() {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(config_dir);
    app::run(flags)
}
