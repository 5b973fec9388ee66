#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(unused_crate_dependencies)]

//!
//! Small pretty-printing library.
//!
//! Values first describe themselves as a tree of [`PrettyPrintablePiece`]s,
//! which is then rendered either inline or on multiple lines depending on
//! the provided [`PrettyPrintOptions`].

use std::fmt::Display;

use colored::{Color, ColoredString, Colorize};

/// Trait enabling pretty-printing for custom types
pub trait PrettyPrintable {
    /// Generate pretty-printing data for later rendering
    fn generate_pretty_data(&self) -> PrettyPrintablePiece;

    /// Obtain a [`Display`] type from this value
    fn display(&self, opts: PrettyPrintOptions) -> PrettyPrintableDisplay<'_, Self>
    where
        Self: Sized,
    {
        PrettyPrintableDisplay {
            source: self,
            opts,
            no_colors: false,
        }
    }
}

/// Pretty-printable with options
pub struct PrettyPrintableDisplay<'p, P: PrettyPrintable> {
    source: &'p P,
    opts: PrettyPrintOptions,
    no_colors: bool,
}

impl<P: PrettyPrintable> PrettyPrintableDisplay<'_, P> {
    pub fn no_colors(mut self) -> Self {
        self.no_colors = true;
        self
    }
}

impl<P: PrettyPrintable> Display for PrettyPrintableDisplay<'_, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.source
            .generate_pretty_data()
            .render(self.opts, |styled| {
                if self.no_colors {
                    write!(f, "{}", styled.inner().input).unwrap()
                } else {
                    write!(f, "{}", styled.inner()).unwrap()
                }
            });

        Ok(())
    }
}

/// Colored string
#[derive(Debug, Clone)]
pub struct Styled(ColoredString);

impl Styled {
    pub fn inner(&self) -> &ColoredString {
        &self.0
    }

    pub fn colored(content: impl AsRef<str>, color: Color) -> Self {
        Self(content.as_ref().color(color))
    }

    pub fn colorless(content: impl AsRef<str>) -> Self {
        Self(ColoredString::from(content.as_ref()))
    }

    pub fn empty() -> Self {
        Self(ColoredString::from(""))
    }

    fn len_chars(&self) -> usize {
        self.0.chars().count()
    }
}

/// Pretty-printable piece
#[derive(Debug, Clone)]
pub enum PrettyPrintablePiece {
    /// Atom: a simple string with a single color
    Atomic(Styled),

    /// List: a delimited sequence of items with a separator
    ///
    /// Will be printed differently depending on the rendering options
    List {
        begin: Styled,
        items: Vec<PrettyPrintablePiece>,
        sep: Styled,
        end: Styled,
        suffix: Option<Box<PrettyPrintablePiece>>,
    },

    /// Join: a chain of pretty-printable pieces
    Join(Vec<PrettyPrintablePiece>),

    /// Empty: an empty piece
    Empty,
}

impl PrettyPrintablePiece {
    /// Create a colored atom
    pub fn colored_atomic(content: impl AsRef<str>, color: Color) -> Self {
        Self::Atomic(Styled::colored(content, color))
    }
}

/// Options for pretty-printing
#[derive(Clone, Copy)]
pub struct PrettyPrintOptions {
    /// Display in a pretty manner.
    ///
    /// Will add spacing and newlines to improve readability.
    pub pretty: bool,

    /// How many spaces to represent a tab with
    pub tab_size: usize,

    /// Ideal maximum line size
    ///
    /// Some lines may be larger than this limit, consider it a "best-effort"
    pub max_line_size: usize,

    /// Add the provided number of spaces at the beginning of each rendered line
    pub line_prefix_size: usize,
}

impl PrettyPrintOptions {
    /// Render in a single line, without most readability spaces
    pub fn inline() -> Self {
        Self {
            pretty: false,
            tab_size: 0,
            max_line_size: 0,
            line_prefix_size: 0,
        }
    }

    /// Render on multiple lines and add spaces if it can improve readability
    pub fn multiline() -> Self {
        Self {
            pretty: true,
            tab_size: 4,
            max_line_size: 80,
            line_prefix_size: 0,
        }
    }
}

impl PrettyPrintablePiece {
    /// Compute how many characters will be displayed when rendering this piece
    /// on a single line
    ///
    /// Used to determine if this piece should be rendered on multiple lines
    fn display_chars_count(&self) -> usize {
        match self {
            PrettyPrintablePiece::Atomic(atom) => atom.len_chars(),

            PrettyPrintablePiece::List {
                begin,
                items,
                sep,
                end,
                suffix,
            } => {
                begin.len_chars()
                    + items.iter().map(Self::display_chars_count).sum::<usize>()
                    + if items.is_empty() {
                        0
                    } else {
                        (sep.len_chars() + 1/* space */) * (items.len() - 1)
                    }
                    + end.len_chars()
                    + match suffix {
                        Some(suffix) => suffix.display_chars_count(),
                        None => 0,
                    }
            }

            PrettyPrintablePiece::Join(pieces) => pieces
                .iter()
                .map(PrettyPrintablePiece::display_chars_count)
                .sum(),

            PrettyPrintablePiece::Empty => 0,
        }
    }

    fn fits_in_line(&self, max_line_size: usize, prefix_size: usize) -> bool {
        self.display_chars_count() + prefix_size <= max_line_size
    }

    /// Render this piece using a processing function
    pub fn render(&self, opts: PrettyPrintOptions, mut w: impl FnMut(&Styled)) {
        self.render_inner(opts, &mut w, 0);
    }

    fn render_inner(
        &self,
        opts: PrettyPrintOptions,
        w: &mut impl FnMut(&Styled),
        current_indent: usize,
    ) {
        let PrettyPrintOptions {
            pretty,
            tab_size,
            max_line_size,
            line_prefix_size,
        } = opts;

        match self {
            PrettyPrintablePiece::Atomic(atom) => w(atom),

            PrettyPrintablePiece::List {
                begin,
                items,
                sep,
                end,
                suffix,
            } => {
                w(begin);

                if !pretty || self.fits_in_line(max_line_size, current_indent + line_prefix_size) {
                    let space = Styled::colorless(" ");

                    for (i, item) in items.iter().enumerate() {
                        item.render_inner(opts, w, current_indent);

                        if i < items.len() - 1 {
                            w(sep);
                            w(&space);
                        }
                    }
                } else {
                    let spacing =
                        Styled::colorless(format!("\n{}", " ".repeat(current_indent + tab_size)));

                    for (i, item) in items.iter().enumerate() {
                        w(&spacing);

                        item.render_inner(opts, w, current_indent + tab_size);

                        if i < items.len() - 1 {
                            w(sep);
                        }
                    }

                    w(&Styled::colorless(format!(
                        "\n{}",
                        " ".repeat(current_indent)
                    )));
                }

                w(end);

                if let Some(suffix) = suffix {
                    suffix.render_inner(opts, w, current_indent);
                }
            }

            PrettyPrintablePiece::Join(pieces) => {
                for piece in pieces {
                    piece.render_inner(opts, w, current_indent);
                }
            }

            PrettyPrintablePiece::Empty => {}
        }
    }
}

impl PrettyPrintable for PrettyPrintablePiece {
    fn generate_pretty_data(&self) -> PrettyPrintablePiece {
        self.clone()
    }
}

/// Generate a pretty-printable piece from a string, with quoting and escaping
pub fn pretty_printable_string(string: &str) -> PrettyPrintablePiece {
    let mut pieces = vec![PrettyPrintablePiece::colored_atomic(
        "'",
        Color::BrightGreen,
    )];

    let mut shift = 0;

    while let Some(mut pos) = string[shift..].find(['\\', '\r', '\n', '\'']) {
        pos += shift;

        if pos > shift {
            pieces.push(PrettyPrintablePiece::colored_atomic(
                &string[shift..pos],
                Color::BrightGreen,
            ));
        }

        let to_escape = match &string[pos..pos + 1] {
            "\r" => "r",
            "\n" => "n",
            str => str,
        };

        pieces.push(PrettyPrintablePiece::colored_atomic(
            format!("\\{to_escape}"),
            Color::Cyan,
        ));

        shift = pos + 1;
    }

    if shift < string.len() {
        pieces.push(PrettyPrintablePiece::colored_atomic(
            &string[shift..],
            Color::BrightGreen,
        ));
    }

    pieces.push(PrettyPrintablePiece::colored_atomic(
        "'",
        Color::BrightGreen,
    ));

    PrettyPrintablePiece::Join(pieces)
}
