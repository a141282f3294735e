//! Convert a binary font resource into a letter-order document.
//!
//! The document lists the characters of the font in the order their glyphs
//! appear on the glyph sheets, so the sheets can be redrawn or reordered
//! with a text editor alongside.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use read_brfnt::{ReadError, RfntRef};

mod letter_order;
mod xlor;

use letter_order::{Create, Head, LetterOrder};

const USAGE: &str = "brfnt2xlor [file.brfnt] [output.xlor]";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Error> {
    let args = match flags::Args::from_env() {
        Ok(args) => args,
        Err(e) if e.is_help() => {
            println!("{e}");
            return Ok(());
        }
        Err(e) => return Err(Error::Usage(e.to_string())),
    };
    init_logging(args.verbose);

    let (Some(input), Some(output)) = (&args.input, &args.output) else {
        return Err(Error::Usage("expected an input and an output path".into()));
    };
    convert(input, output)
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

/// Decode `input` and write its letter-order document to `output`.
///
/// Nothing is written unless the whole font decodes.
fn convert(input: &Path, output: &Path) -> Result<(), Error> {
    if !input.is_file() {
        return Err(Error::FileNotFound(input.to_owned()));
    }
    let bytes = std::fs::read(input)?;
    let font = RfntRef::new(&bytes)?;
    let geometry = font.tglp()?.geometry();
    let glyphs = font.glyph_map()?;
    log::info!(
        "{}: {} glyphs on a {}x{} grid",
        input.display(),
        glyphs.len(),
        geometry.glyphs_per_row,
        geometry.glyphs_per_column
    );

    let title = output
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let doc = LetterOrder::new(
        Head::new(Create::from_environment(), title),
        geometry,
        &glyphs,
    );

    let mut xml = Vec::new();
    xlor::write_letter_order(&doc, &mut xml)?;
    std::fs::write(output, xml)?;
    log::info!("wrote {} pages to {}", doc.pages.len(), output.display());
    Ok(())
}

#[derive(Debug)]
enum Error {
    Usage(String),
    FileNotFound(PathBuf),
    Read(ReadError),
    Io(std::io::Error),
}

impl From<ReadError> for Error {
    fn from(e: ReadError) -> Self {
        Error::Read(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Usage(msg) => write!(f, "{msg}\n\nUSAGE:\n    {USAGE}"),
            Error::FileNotFound(path) => write!(f, "File not found: {}", path.display()),
            Error::Read(e) => write!(f, "Malformed font resource: {e}"),
            Error::Io(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {}

mod flags {
    use std::path::PathBuf;

    xflags::xflags! {
        /// Convert a binary font resource (.brfnt) to a letter-order document (.xlor)
        cmd args {
            /// The font resource to read
            optional input: PathBuf
            /// Where to write the document
            optional output: PathBuf
            /// Log each block and character map record as it is read
            optional -v, --verbose
        }
    }
}
