// main.rs
//
// Builds a wing from an aircraft preset or a parameter file and writes it to disk.
//
//   wingcraft [--aircraft fighter|commercial|cargo] [--params wing.json]
//             [--resolution N] [--full-span] [--format stl|stl-binary|gltf] [--out PATH]

use std::error::Error;
use std::path::PathBuf;

use wingcraft::io::{ExportFormat, write_mesh};
use wingcraft::wing::{DEFAULT_RESOLUTION, WingMeshBuilder};
use wingcraft::{AircraftKind, WingParameters};

const USAGE: &str = "usage: wingcraft [--aircraft fighter|commercial|cargo] [--params FILE] \
[--resolution N] [--full-span] [--format stl|stl-binary|gltf] [--out PATH]";

#[derive(Debug)]
struct Options {
    aircraft: Option<AircraftKind>,
    params: Option<PathBuf>,
    resolution: usize,
    full_span: bool,
    format: ExportFormat,
    out: PathBuf,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, Box<dyn Error>> {
    let mut options = Options {
        aircraft: None,
        params: None,
        resolution: DEFAULT_RESOLUTION,
        full_span: false,
        format: ExportFormat::StlAscii,
        out: PathBuf::from("wing.stl"),
    };
    let mut out_given = false;

    while let Some(flag) = args.next() {
        let mut value = || args.next().ok_or_else(|| format!("{flag} needs a value"));
        match flag.as_str() {
            "--aircraft" => options.aircraft = Some(value()?.parse()?),
            "--params" => options.params = Some(PathBuf::from(value()?)),
            "--resolution" => options.resolution = value()?.parse()?,
            "--format" => options.format = value()?.parse()?,
            "--out" => {
                options.out = PathBuf::from(value()?);
                out_given = true;
            },
            "--full-span" => options.full_span = true,
            "-h" | "--help" => return Err(USAGE.into()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}").into()),
        }
    }

    if !out_given && options.format == ExportFormat::Gltf {
        options.out.set_extension("gltf");
    }
    Ok(options)
}

fn load_parameters(options: &Options) -> Result<WingParameters, Box<dyn Error>> {
    if let Some(path) = &options.params {
        let text = std::fs::read_to_string(path)?;
        let params: WingParameters = serde_json::from_str(&text)?;
        return Ok(params.normalized());
    }
    Ok(options
        .aircraft
        .map(|kind| kind.config().default_wing)
        .unwrap_or_default())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,wingcraft=debug".into()),
        )
        .init();

    let options = parse_args(std::env::args().skip(1))?;
    let params = load_parameters(&options)?;
    tracing::info!(
        airfoil = %params.airfoil_code(),
        wingspan = params.wingspan,
        ribs = params.n_ribs,
        aspect_ratio = params.aspect_ratio(),
        "generating wing"
    );

    let builder = WingMeshBuilder::new().resolution(options.resolution);
    let mesh = if options.full_span {
        builder.build_full_span(&params)?
    } else {
        builder.build(&params)?
    };

    write_mesh(&mesh, &options.out, options.format, params.base_color())?;
    Ok(())
}
