use std::io;

use sized_record::report::{self, FootprintPair};
use sized_record::{logging, LayoutError};
use tracing::Level;

fn main() -> Result<(), LayoutError> {
    logging::init(Level::WARN);

    let pair = FootprintPair::measure();
    report::write_pair(&mut io::stdout().lock(), &pair)
}
