use std::path::PathBuf;

use anyhow::Context;
use diagramkit::{init_logging, Config, Diagram, ExportFormat, Point, BUILD_DATE, VERSION};
use tracing::{info, warn};

/// Command line: `diagramkit [FORMAT] [--config PATH]`
struct Args {
    format: Option<ExportFormat>,
    config: Option<PathBuf>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        format: None,
        config: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = iter.next().context("--config needs a path")?;
                args.config = Some(PathBuf::from(path));
            }
            other => args.format = Some(other.parse()?),
        }
    }
    Ok(args)
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    let path = match path {
        Some(path) => path,
        None => match Config::default_path() {
            Ok(path) => path,
            Err(e) => {
                warn!("{}; using defaults", e);
                return Ok(Config::default());
            }
        },
    };
    Config::load_or_default(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    info!("DiagramKit {} (built {})", VERSION, BUILD_DATE);

    let args = parse_args()?;
    let config = load_config(args.config)?;

    let mut diagram = Diagram::with_placement(config.placement.clone());
    diagram.add_rectangle();
    diagram.add_circle();
    diagram.add_triangle();

    if diagram.select_at(Point::new(250.0, 100.0)).is_some() {
        diagram.duplicate_selected();
    }

    println!("{}", diagram.statistics_report());
    println!();
    println!("{}", diagram.validation_report());

    let format = args.format.unwrap_or(config.export.default_format);
    let path = diagram.export(
        format,
        &config.export.output_directory,
        &config.export.filename_prefix,
    )?;
    println!();
    println!("Exported {} shapes to {}", diagram.len(), path.display());

    Ok(())
}
