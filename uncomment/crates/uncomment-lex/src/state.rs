//! Lexical states and the per-character transition function.
//!
//! The scanner is a Mealy machine: for every `(State, char)` pair,
//! [`State::step`] decides the next state and what happens to the character.
//! No lookahead is ever needed. The only buffered decision is a single `/`
//! that is withheld until the next character tells whether it opens a comment.

/// Lexical state of the scanner.
///
/// The state is the only data carried between characters and across
/// line boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum State {
    /// Plain source text.
    #[default]
    Normal,
    /// Inside a `'...'` character literal.
    SingleQuote,
    /// Inside a character literal, right after a `\`.
    SingleQuoteEscape,
    /// Inside a `"..."` string literal.
    DoubleQuote,
    /// Inside a string literal, right after a `\`.
    DoubleQuoteEscape,
    /// Saw a bare `@`; a `"` next opens a verbatim string.
    At,
    /// Inside an `@"..."` verbatim string.
    VerbatimString,
    /// Inside a verbatim string, right after a `"`. A second `"` is an
    /// escaped quote, anything else means the string has closed.
    VerbatimStringQuote,
    /// Saw a bare `/` that has not been copied yet.
    Slash,
    /// Inside a `//` comment.
    LineComment,
    /// Inside a `/* ... */` comment.
    BlockComment,
    /// Inside a block comment, right after one or more `*`.
    BlockCommentStar,
}

/// What to do with the character that drove a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    /// Drop the character.
    Skip,
    /// Copy the character to the output.
    Copy,
    /// Copy the previously withheld `/`, then the character.
    ReleaseSlash,
}

/// The result of feeding one character to a [`State`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// State after the character.
    pub next: State,
    /// Fate of the character.
    pub emit: Emit,
}

impl Transition {
    const fn copy(next: State) -> Self {
        Self {
            next,
            emit: Emit::Copy,
        }
    }

    const fn skip(next: State) -> Self {
        Self {
            next,
            emit: Emit::Skip,
        }
    }
}

impl State {
    /// Returns the state a new physical line starts in.
    ///
    /// Literals, a dangling `@` or `/`, and line comments cannot continue
    /// past a line break and are abandoned. A block comment and a verbatim
    /// string carry over; a pending `*` inside a block comment does not.
    pub fn at_line_start(self) -> State {
        match self {
            State::SingleQuote
            | State::SingleQuoteEscape
            | State::DoubleQuote
            | State::DoubleQuoteEscape
            | State::At
            | State::Slash
            | State::LineComment => State::Normal,
            State::BlockCommentStar => State::BlockComment,
            State::Normal
            | State::VerbatimString
            | State::VerbatimStringQuote
            | State::BlockComment => self,
        }
    }

    /// Feeds one character to the machine.
    ///
    /// Total over every `(state, char)` pair. A `/` followed by anything but
    /// `/` or `*` is released, and the character is then read as in `Normal`.
    /// After `@` or a verbatim string's closing `"`, any character but `"`
    /// is copied as plain text.
    pub fn step(self, c: char) -> Transition {
        match self {
            State::Normal => Self::dispatch_normal(c),

            State::SingleQuote => match c {
                '\'' => Transition::copy(State::Normal),
                '\\' => Transition::copy(State::SingleQuoteEscape),
                _ => Transition::copy(State::SingleQuote),
            },
            State::SingleQuoteEscape => Transition::copy(State::SingleQuote),

            State::DoubleQuote => match c {
                '"' => Transition::copy(State::Normal),
                '\\' => Transition::copy(State::DoubleQuoteEscape),
                _ => Transition::copy(State::DoubleQuote),
            },
            State::DoubleQuoteEscape => Transition::copy(State::DoubleQuote),

            State::At => match c {
                '"' => Transition::copy(State::VerbatimString),
                _ => Transition::copy(State::Normal),
            },
            State::VerbatimString => match c {
                '"' => Transition::copy(State::VerbatimStringQuote),
                _ => Transition::copy(State::VerbatimString),
            },
            State::VerbatimStringQuote => match c {
                '"' => Transition::copy(State::VerbatimString),
                _ => Transition::copy(State::Normal),
            },

            State::Slash => match c {
                '/' => Transition::skip(State::LineComment),
                '*' => Transition::skip(State::BlockComment),
                // `c` is never `/` here, so Normal always copies it.
                _ => Transition {
                    next: Self::dispatch_normal(c).next,
                    emit: Emit::ReleaseSlash,
                },
            },
            State::LineComment => Transition::skip(State::LineComment),
            State::BlockComment => match c {
                '*' => Transition::skip(State::BlockCommentStar),
                _ => Transition::skip(State::BlockComment),
            },
            State::BlockCommentStar => match c {
                '*' => Transition::skip(State::BlockCommentStar),
                '/' => Transition::skip(State::Normal),
                _ => Transition::skip(State::BlockComment),
            },
        }
    }

    fn dispatch_normal(c: char) -> Transition {
        match c {
            '\'' => Transition::copy(State::SingleQuote),
            '"' => Transition::copy(State::DoubleQuote),
            '@' => Transition::copy(State::At),
            '/' => Transition::skip(State::Slash),
            _ => Transition::copy(State::Normal),
        }
    }

    /// Returns true while inside a construct that may span lines.
    pub fn is_multiline(self) -> bool {
        matches!(
            self,
            State::VerbatimString
                | State::VerbatimStringQuote
                | State::BlockComment
                | State::BlockCommentStar
        )
    }
}
