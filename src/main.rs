use anyhow::{bail, Context};
use heliocad::{init_logging, open_store, FileSettingsStore, Session, BUILD_DATE, VERSION};
use std::path::PathBuf;
use tracing::{info, warn};

const USAGE: &str = "usage: heliocad [DOCUMENT.hcad] [--export-svg OUT.svg]";

#[derive(Debug, Default)]
struct Args {
    document: Option<PathBuf>,
    export_svg: Option<PathBuf>,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> anyhow::Result<Option<Self>> {
        let mut parsed = Args::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(None),
                "--export-svg" => {
                    let out = args.next().context("--export-svg needs an output path")?;
                    parsed.export_svg = Some(PathBuf::from(out));
                }
                flag if flag.starts_with("--") => bail!("unknown option {}\n{}", flag, USAGE),
                path => {
                    if parsed.document.is_some() {
                        bail!("only one document may be given\n{}", USAGE);
                    }
                    parsed.document = Some(PathBuf::from(path));
                }
            }
        }
        Ok(Some(parsed))
    }
}

fn main() -> anyhow::Result<()> {
    let Some(args) = Args::parse(std::env::args().skip(1))? else {
        println!("HelioCAD v{} ({})\n{}", VERSION, BUILD_DATE, USAGE);
        return Ok(());
    };

    init_logging()?;

    let (config, store) = open_store(FileSettingsStore::at_default_location());

    let mut session = Session::new(config, store);
    session.start();

    if let Some(document) = &args.document {
        if document.is_file() {
            if let Err(e) = session.load(document) {
                warn!("could not open {}: {}", document.display(), e);
            }
        } else {
            info!("startup file {} does not exist, starting empty", document.display());
        }
    }

    if let Some(out) = &args.export_svg {
        session
            .export_svg(out)
            .with_context(|| format!("exporting {}", out.display()))?;
        return Ok(());
    }

    info!(
        title = %session.title(),
        tabs = ?session.tabs().borrow().labels(),
        shapes = session.canvas().borrow().shape_count(),
        "session ready"
    );
    Ok(())
}
