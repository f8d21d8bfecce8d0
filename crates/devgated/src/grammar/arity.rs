use std::fmt;

/// Number of `:`-delimited fields a command accepts per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Arity {
    /// The command takes no records.
    NoRecord,
    Exact(usize),
    AtLeast(usize),
    OneOf(&'static [usize]),
}

impl Arity {
    pub(crate) fn accepts(self, fields: usize) -> bool {
        match self {
            Self::NoRecord => fields == 0,
            Self::Exact(expected) => fields == expected,
            Self::AtLeast(minimum) => fields >= minimum,
            Self::OneOf(choices) => choices.contains(&fields),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRecord => f.write_str("no fields"),
            Self::Exact(expected) => write!(f, "exactly {expected} fields"),
            Self::AtLeast(minimum) => write!(f, "at least {minimum} fields"),
            Self::OneOf(choices) => {
                let rendered: Vec<String> = choices.iter().map(ToString::to_string).collect();
                write!(f, "{} fields", rendered.join(" or "))
            }
        }
    }
}

/// Whether a command's payload holds one record or many.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RecordMode {
    Single,
    /// Space-separated records, each processed independently.
    Variable,
}
