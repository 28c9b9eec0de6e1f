use crate::error::LocatorError;
use nom::error::{ContextError, ErrorKind, FromExternalError, ParseError};

pub type Input<'a> = &'a str;
pub type Result<'a, O> = nom::IResult<Input<'a>, O, Error<'a>>;

/// Error type for the locator parsers.
///
/// Unlike `nom::error::VerboseError`, this keeps the typed `LocatorError` raised by a `map_res`
/// callback instead of reducing it to an `ErrorKind`.
#[derive(Debug, Clone, PartialEq)]
pub enum Error<'a> {
    /// The input didn't have the expected shape. `context` lists the enclosing parsers,
    /// innermost first.
    Syntax {
        input: Input<'a>,
        kind: ErrorKind,
        context: Vec<&'static str>,
    },
    /// A character was read but couldn't be mapped onto a grid cell.
    Value(LocatorError),
}

impl<'a> ParseError<Input<'a>> for Error<'a> {
    fn from_error_kind(input: Input<'a>, kind: ErrorKind) -> Self {
        Error::Syntax {
            input,
            kind,
            context: Vec::new(),
        }
    }

    fn append(_input: Input<'a>, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a> ContextError<Input<'a>> for Error<'a> {
    fn add_context(_input: Input<'a>, ctx: &'static str, mut other: Self) -> Self {
        if let Error::Syntax { context, .. } = &mut other {
            context.push(ctx);
        }
        other
    }
}

impl<'a> FromExternalError<Input<'a>, LocatorError> for Error<'a> {
    fn from_external_error(_input: Input<'a>, _kind: ErrorKind, e: LocatorError) -> Self {
        Error::Value(e)
    }
}

/// Convert a parser failure on `original` into the error reported to callers.
pub fn into_locator_error(original: Input, e: nom::Err<Error>) -> LocatorError {
    match e {
        nom::Err::Error(Error::Value(e)) | nom::Err::Failure(Error::Value(e)) => e,
        nom::Err::Error(Error::Syntax {
            input,
            kind,
            context,
        })
        | nom::Err::Failure(Error::Syntax {
            input,
            kind,
            context,
        }) => {
            log::trace!(
                "locator {:?} failed to parse at {:?} ({:?}) in {:?}",
                original,
                input,
                kind,
                context
            );
            LocatorError::InvalidFormat(original.chars().count())
        }
        nom::Err::Incomplete(_) => LocatorError::InvalidFormat(original.chars().count()),
    }
}
