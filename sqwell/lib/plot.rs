//! Interface to the plotting collaborator, plus two text-based implementations.
//!
//! Rendering itself is left to external tools: [`Gnuplot`] emits a data stream
//! that gnuplot can draw directly with one `index` per series, and [`Json`]
//! emits the whole [`Figure`] as a single JSON document.

use std::io::Write;
use crate::{ error::PlotError, present::Figure };

pub type PlotResult<T> = Result<T, PlotError>;

/// Anything that can consume a [`Figure`].
pub trait Plotter {
    /// Draw (or otherwise hand off) a single figure.
    fn plot(&mut self, figure: &Figure) -> PlotResult<()>;
}

/// Write figures as gnuplot-compatible data blocks.
///
/// The output starts with `#`-prefixed title and axis lines. Each series then
/// follows as a `# <label>` header and one `x y` row per sample, with series
/// separated by two blank lines.
///
/// ```
/// use sqwell::{ plot::{ Gnuplot, Plotter }, present::{ Figure, PlotSeries } };
///
/// let figure = Figure {
///     title: "t".into(),
///     xlabel: "x".into(),
///     ylabel: "y".into(),
///     series: vec![
///         PlotSeries { x: vec![0.0, 0.5], y: vec![1.0, 2.0], label: "a".into() },
///     ],
/// };
/// let mut out = Gnuplot::new(Vec::new());
/// out.plot(&figure).unwrap();
/// let text = String::from_utf8(out.into_inner()).unwrap();
/// assert_eq!(text, "# t\n# x: x\n# y: y\n\n# a\n0 1\n0.5 2\n");
/// ```
#[derive(Debug)]
pub struct Gnuplot<W> {
    out: W,
}

impl<W: Write> Gnuplot<W> {
    /// Create a new `Gnuplot` writer around a sink.
    pub fn new(out: W) -> Self { Self { out } }

    /// Recover the underlying sink.
    pub fn into_inner(self) -> W { self.out }
}

impl<W: Write> Plotter for Gnuplot<W> {
    fn plot(&mut self, figure: &Figure) -> PlotResult<()> {
        writeln!(self.out, "# {}", figure.title)?;
        writeln!(self.out, "# x: {}", figure.xlabel)?;
        writeln!(self.out, "# y: {}", figure.ylabel)?;
        for (i, series) in figure.series.iter().enumerate() {
            if i > 0 { write!(self.out, "\n\n")?; }
            write!(self.out, "\n# {}\n", series.label)?;
            for (x, y) in series.x.iter().zip(&series.y) {
                writeln!(self.out, "{} {}", x, y)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Write figures as JSON documents, one per line.
#[derive(Debug)]
pub struct Json<W> {
    out: W,
    pretty: bool,
}

impl<W: Write> Json<W> {
    /// Create a new compact `Json` writer around a sink.
    pub fn new(out: W) -> Self { Self { out, pretty: false } }

    /// Create a new `Json` writer that indents its output.
    pub fn pretty(out: W) -> Self { Self { out, pretty: true } }

    /// Recover the underlying sink.
    pub fn into_inner(self) -> W { self.out }
}

impl<W: Write> Plotter for Json<W> {
    fn plot(&mut self, figure: &Figure) -> PlotResult<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.out, figure)?;
        } else {
            serde_json::to_writer(&mut self.out, figure)?;
        }
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
