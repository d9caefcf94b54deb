//! Placeholder grammar and template rendering
//!
//! Two grammars share one placeholder model:
//!
//! - [`Grammar::Structured`] is used by project templates. Placeholders are
//!   written `{{.ProjectName}}` (whitespace inside the braces is allowed) and
//!   name a [`Field`] of the project configuration.
//! - [`Grammar::Literal`] is used by module templates. The markers
//!   `__module__`, `__Module__` and `__project__` are replaced verbatim and
//!   map to a [`Token`]. The exact text `{{.ProjectName}}` is accepted as an
//!   alias of `__project__`; any other brace placeholder is an error.
//!
//! A body is first parsed into [`Segment`]s, then rendered against a
//! [`RenderContext`]. Rendering never consults the environment, so the same
//! body and context always produce the same text.

use std::borrow::Cow;
use std::fmt;

use thiserror::Error;

/// Substitution grammar of a template body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    /// `{{.Field}}` interpolation
    Structured,
    /// Literal `__marker__` replacement
    Literal,
}

/// Project configuration fields available to structured templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Project (directory) name
    ProjectName,
    /// Go module path used in imports
    ModulePath,
    /// Database driver name
    DbDriver,
    /// Default database port for the driver
    DbPort,
    /// Database container image for the driver
    DbImage,
    /// `true`/`false`
    WithAuth,
    /// `true`/`false`
    WithDocker,
    /// `true`/`false`
    WithTests,
}

impl Field {
    /// Every field, in declaration order
    pub const ALL: [Self; 8] = [
        Self::ProjectName,
        Self::ModulePath,
        Self::DbDriver,
        Self::DbPort,
        Self::DbImage,
        Self::WithAuth,
        Self::WithDocker,
        Self::WithTests,
    ];

    /// Name as written after the dot in `{{.Name}}`
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ProjectName => "ProjectName",
            Self::ModulePath => "ModulePath",
            Self::DbDriver => "DBDriver",
            Self::DbPort => "DBPort",
            Self::DbImage => "DBImage",
            Self::WithAuth => "WithAuth",
            Self::WithDocker => "WithDocker",
            Self::WithTests => "WithTests",
        }
    }

    /// Look up a field by its template name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

/// Literal markers available to module templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// `__module__`: lowercase module name
    ModuleLower,
    /// `__Module__`: title-case module name
    ModuleTitle,
    /// `__project__`: import path of the host project
    ProjectPath,
}

impl Token {
    /// Every token, in declaration order
    pub const ALL: [Self; 3] = [Self::ModuleLower, Self::ModuleTitle, Self::ProjectPath];

    /// Marker text as it appears in a template body
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::ModuleLower => "__module__",
            Self::ModuleTitle => "__Module__",
            Self::ProjectPath => "__project__",
        }
    }
}

/// A parsed placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// Structured field reference
    Field(Field),
    /// Literal marker
    Token(Token),
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(field) => write!(f, "{{{{.{}}}}}", field.name()),
            Self::Token(token) => f.write_str(token.marker()),
        }
    }
}

/// Values placeholders resolve to
pub trait RenderContext {
    /// Value of a structured field, `None` if this context has no such field
    fn field(&self, field: Field) -> Option<Cow<'_, str>>;

    /// Value of a literal token, `None` if this context has no such token
    fn token(&self, token: Token) -> Option<Cow<'_, str>>;

    /// Resolve any placeholder
    fn resolve(&self, placeholder: Placeholder) -> Option<Cow<'_, str>> {
        match placeholder {
            Placeholder::Field(field) => self.field(field),
            Placeholder::Token(token) => self.token(token),
        }
    }
}

/// Parse or resolution failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// `{{` without a closing `}}`
    #[error("unterminated placeholder at line {line}, column {column}")]
    Unterminated {
        /// 1-based line
        line: usize,
        /// 1-based column
        column: usize,
    },

    /// Braces that do not hold `.Field`
    #[error(
        "malformed placeholder `{text}` at line {line}, column {column} \
         (expected `{{{{.Field}}}}`)"
    )]
    Malformed {
        /// Source text of the placeholder
        text: String,
        /// 1-based line
        line: usize,
        /// 1-based column
        column: usize,
    },

    /// `{{.Name}}` where `Name` is not a known field
    #[error("unknown field `{name}` at line {line}, column {column}")]
    UnknownField {
        /// The unrecognised name
        name: String,
        /// 1-based line
        line: usize,
        /// 1-based column
        column: usize,
    },

    /// Brace placeholder other than `{{.ProjectName}}` inside a literal-grammar body
    #[error("brace placeholder not allowed in a literal template at line {line}, column {column}")]
    UnexpectedBraces {
        /// 1-based line
        line: usize,
        /// 1-based column
        column: usize,
    },

    /// The context has no value for a placeholder
    #[error("placeholder {placeholder} has no value in this context")]
    Unresolved {
        /// The placeholder that could not be resolved
        placeholder: Placeholder,
    },
}

/// One piece of a parsed template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied verbatim
    Text(&'a str),
    /// Substituted value
    Placeholder(Placeholder),
}

/// A template body parsed against its grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'a> {
    segments: Vec<Segment<'a>>,
}

impl<'a> Template<'a> {
    /// Parse `body` against `grammar`
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] describing the first malformed placeholder.
    pub fn parse(body: &'a str, grammar: Grammar) -> Result<Self, RenderError> {
        let segments = match grammar {
            Grammar::Structured => parse_structured(body)?,
            Grammar::Literal => parse_literal(body)?,
        };
        Ok(Self { segments })
    }

    /// Parsed segments in source order
    #[must_use]
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Placeholders in source order
    pub fn placeholders(&self) -> impl Iterator<Item = Placeholder> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(placeholder) => Some(*placeholder),
            Segment::Text(_) => None,
        })
    }

    /// Substitute every placeholder from `context`
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Unresolved`] if the context lacks a value.
    pub fn render(&self, context: &dyn RenderContext) -> Result<String, RenderError> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Placeholder(placeholder) => {
                    let value = context
                        .resolve(*placeholder)
                        .ok_or(RenderError::Unresolved {
                            placeholder: *placeholder,
                        })?;
                    out.push_str(&value);
                }
            }
        }
        Ok(out)
    }
}

/// Parse and render in one step
///
/// # Errors
///
/// Returns a [`RenderError`] if the body is malformed or a placeholder has no
/// value in `context`.
pub fn render(
    body: &str,
    grammar: Grammar,
    context: &dyn RenderContext,
) -> Result<String, RenderError> {
    Template::parse(body, grammar)?.render(context)
}

const OPEN: &str = "{{";
const CLOSE: &str = "}}";
/// Older module templates mark the project path this way
const PROJECT_PATH_ALIAS: &str = "{{.ProjectName}}";

fn parse_structured(body: &str) -> Result<Vec<Segment<'_>>, RenderError> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    while let Some(found) = body[cursor..].find(OPEN) {
        let start = cursor + found;
        if start > cursor {
            segments.push(Segment::Text(&body[cursor..start]));
        }

        let inner_start = start + OPEN.len();
        let Some(len) = body[inner_start..].find(CLOSE) else {
            let (line, column) = position(body, start);
            return Err(RenderError::Unterminated { line, column });
        };
        let end = inner_start + len;

        let field = parse_field(body, start, &body[inner_start..end])?;
        segments.push(Segment::Placeholder(Placeholder::Field(field)));
        cursor = end + CLOSE.len();
    }

    if cursor < body.len() {
        segments.push(Segment::Text(&body[cursor..]));
    }
    Ok(segments)
}

fn parse_field(body: &str, start: usize, inner: &str) -> Result<Field, RenderError> {
    let (line, column) = position(body, start);
    let name = inner.trim().strip_prefix('.').unwrap_or_default();

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(RenderError::Malformed {
            text: format!("{OPEN}{inner}{CLOSE}"),
            line,
            column,
        });
    }

    Field::from_name(name).ok_or_else(|| RenderError::UnknownField {
        name: name.to_string(),
        line,
        column,
    })
}

fn parse_literal(body: &str) -> Result<Vec<Segment<'_>>, RenderError> {
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut cursor = 0;

    while let Some(found) = body[cursor..].find(['_', '{']) {
        let at = cursor + found;
        let rest = &body[at..];

        let matched = if rest.starts_with(OPEN) {
            if !rest.starts_with(PROJECT_PATH_ALIAS) {
                let (line, column) = position(body, at);
                return Err(RenderError::UnexpectedBraces { line, column });
            }
            Some((Token::ProjectPath, PROJECT_PATH_ALIAS.len()))
        } else {
            Token::ALL
                .into_iter()
                .find(|t| rest.starts_with(t.marker()))
                .map(|t| (t, t.marker().len()))
        };

        match matched {
            Some((token, len)) => {
                if at > text_start {
                    segments.push(Segment::Text(&body[text_start..at]));
                }
                segments.push(Segment::Placeholder(Placeholder::Token(token)));
                cursor = at + len;
                text_start = cursor;
            }
            None => cursor = at + 1,
        }
    }

    if text_start < body.len() {
        segments.push(Segment::Text(&body[text_start..]));
    }
    Ok(segments)
}

/// 1-based line and column of a byte offset
fn position(body: &str, offset: usize) -> (usize, usize) {
    let before = &body[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}
