use std::env;
use std::io::{self, Write};
use std::path::Path;

use sized_record::config::ReportConfig;
use sized_record::{logging, LayoutError, LayoutReport};

fn main() -> Result<(), LayoutError> {
    // optional single argument: a TOML report config
    let config = match env::args().nth(1) {
        Some(path) => ReportConfig::from_file(Path::new(&path))?,
        None => ReportConfig::default(),
    };
    logging::init(config.level());
    tracing::debug!(?config, "loaded report config");

    let report = LayoutReport::measure()?;
    let rendered = report.render(&config)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}
