//! Terminal I/O, with colors!
//!
//! This is the operational log of the catalog: everything that is recovered
//! locally (failed fetches, broken payloads, missing covers) ends up here.

use indicatif::ProgressBar;
use termcolor::{
    Buffer, BufferWriter, Color, ColorChoice, ColorSpec, StandardStream,
    WriteColor,
};

/// Print an OK message, in green.
pub fn print_ok(msg: &str) {
    print_tagged(
        &mut StandardStream::stdout(ColorChoice::Auto),
        Color::Green,
        "OK   ",
        msg,
    );
}

/// Print a warning message, in yellow.
pub fn print_warn(msg: &str) {
    print_tagged(
        &mut StandardStream::stdout(ColorChoice::Auto),
        Color::Yellow,
        "WARN ",
        msg,
    );
}

/// Print an error message, in red, on stderr.
pub fn print_err(msg: &str) {
    print_tagged(
        &mut StandardStream::stderr(ColorChoice::Auto),
        Color::Red,
        "ERROR",
        msg,
    );
}

/// Print an error report with its whole chain of causes.
pub fn print_report(report: &eyre::Report) {
    print_err(&format!("{report:#}"));
}

/// Print a warning message above a running progress bar.
pub fn print_warn_over(progress: &ProgressBar, msg: &str) {
    if progress.is_hidden() {
        print_warn(msg);
        return;
    }
    progress.println(tagged_line(Color::Yellow, "WARN ", msg));
}

/// Print an error report above a running progress bar.
pub fn print_report_over(progress: &ProgressBar, report: &eyre::Report) {
    if progress.is_hidden() {
        print_report(report);
        return;
    }
    progress.println(tagged_line(Color::Red, "ERROR", &format!("{report:#}")));
}

fn print_tagged(stream: &mut StandardStream, color: Color, tag: &str, msg: &str) {
    // A closed terminal is not worth crashing the render for.
    let _ = write_tagged(stream, color, tag, msg);
}

/// Formats a tagged line, colored when stderr supports it.
fn tagged_line(color: Color, tag: &str, msg: &str) -> String {
    let mut buffer = BufferWriter::stderr(ColorChoice::Auto).buffer();
    // Writing into memory cannot fail.
    let _ = write_tagged(&mut buffer, color, tag, msg);

    line_of(&buffer)
}

fn line_of(buffer: &Buffer) -> String {
    String::from_utf8_lossy(buffer.as_slice())
        .trim_end()
        .to_owned()
}

fn write_tagged<W: WriteColor>(
    stream: &mut W,
    color: Color,
    tag: &str,
    msg: &str,
) -> std::io::Result<()> {
    stream.set_color(ColorSpec::new().set_fg(Some(color)))?;
    writeln!(stream, "{tag} {msg}")?;
    stream.reset()
}
