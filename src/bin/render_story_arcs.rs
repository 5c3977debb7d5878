use std::path::PathBuf;

use story_arcs::Film;
use story_arcs::api::{ExportOptions, Theme, export_catalog};
use story_arcs::core::Viewport;
use story_arcs::telemetry;

const DEFAULT_OUT_DIR: &str = "target/story_arcs";
const DEFAULT_WIDTH: u32 = 1200;
const DEFAULT_HEIGHT: u32 = 600;

#[derive(Debug)]
struct CliArgs {
    out_dir: PathBuf,
    only: Option<Film>,
    theme: Theme,
    elapsed_ms: Option<f64>,
    width: u32,
    height: u32,
    verbose: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let filter = if args.verbose {
        telemetry::VERBOSE_FILTER
    } else {
        telemetry::DEFAULT_FILTER
    };
    let _ = telemetry::init_tracing(filter);

    let options = ExportOptions::new(args.out_dir)
        .with_theme(args.theme)
        .with_viewport(Viewport::new(args.width, args.height))
        .with_elapsed_ms(args.elapsed_ms)
        .with_only(args.only);

    let summary = export_catalog(&options).map_err(|err| err.to_string())?;
    for path in &summary.files_written {
        println!("wrote {}", path.display());
    }
    println!("done: {} file(s)", summary.files_written.len());
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut out_dir = PathBuf::from(DEFAULT_OUT_DIR);
    let mut only = None;
    let mut theme = Theme::Dark;
    let mut elapsed_ms = None;
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut verbose = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --out".to_owned())?;
                out_dir = PathBuf::from(value);
            }
            "--only" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --only".to_owned())?;
                only = Some(value.parse::<Film>().map_err(|err| err.to_string())?);
            }
            "--theme" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --theme".to_owned())?;
                theme = value.parse::<Theme>().map_err(|err| err.to_string())?;
            }
            "--elapsed-ms" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --elapsed-ms".to_owned())?;
                let parsed = value
                    .parse::<f64>()
                    .map_err(|err| format!("invalid --elapsed-ms `{value}`: {err}"))?;
                elapsed_ms = Some(parsed);
            }
            "--width" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --width".to_owned())?;
                width = parse_dimension("--width", &value)?;
            }
            "--height" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --height".to_owned())?;
                height = parse_dimension("--height", &value)?;
            }
            "--verbose" | "-v" => verbose = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        out_dir,
        only,
        theme,
        elapsed_ms,
        width,
        height,
        verbose,
    })
}

fn parse_dimension(flag: &str, value: &str) -> Result<u32, String> {
    match value.parse::<u32>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        Ok(_) => Err(format!("{flag} must be positive")),
        Err(err) => Err(format!("invalid {flag} `{value}`: {err}")),
    }
}

fn print_usage() {
    println!("{}", usage_message());
}

fn usage_message() -> String {
    format!(
        "Usage: cargo run --bin render_story_arcs -- [options]\n\nOptions:\n  --out <dir>          Output directory (default: {DEFAULT_OUT_DIR})\n  --only <film>        Render a single film snapshot (title or slug)\n  --theme <dark|light> Color theme (default: dark)\n  --elapsed-ms <ms>    Animation sample time (default: settled)\n  --width <px>         Viewport width (default: {DEFAULT_WIDTH})\n  --height <px>        Viewport height (default: {DEFAULT_HEIGHT})\n  -v, --verbose        Log engine state changes (needs the telemetry feature)\n  -h, --help           Show this message"
    )
}
