use std::fmt;

#[derive(Debug)]
pub enum Error {
    Xml(roxmltree::Error),
    NotMath(String),
    TooDeep(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Xml(e) => write!(f, "XML error: {e}"),
            Error::NotMath(tag) => write!(f, "<{tag}> is not an Office Math element"),
            Error::TooDeep(limit) => write!(f, "math markup nested deeper than {limit} levels"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Xml(e) => Some(e),
            _ => None,
        }
    }
}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Self {
        Error::Xml(e)
    }
}
