mod byte_reader;
pub mod error;
pub mod fit;
pub mod inspect;
pub mod loader;
pub mod printer;
pub mod selector;
pub mod value;

pub use error::{DumpError, DumpResult};
pub use inspect::{Inspect, Member, Node};
pub use printer::TreePrinter;

use fit::Decoder;
use std::io::Write;
use std::path::Path;

/// Dumps the FIT file at `path` to `out`.
///
/// The top-level metadata is written before the body is selected, so it
/// stays in the output when selecting the body fails.
pub fn dump<D: Decoder, W: Write>(decoder: &D, path: &Path, out: W) -> DumpResult<()> {
    let file = loader::load(decoder, path)?;
    let mut printer = TreePrinter::new(out);
    printer
        .print(&path.display().to_string(), &file)
        .map_err(DumpError::Output)?;
    printer.flush().map_err(DumpError::Output)?;

    let body = selector::select(&file)?;
    printer
        .print(body.name(), &body)
        .map_err(DumpError::Output)?;
    printer.flush().map_err(DumpError::Output)
}
