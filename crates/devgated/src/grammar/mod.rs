//! Command-line grammar: tokenising a request line into records and fields.
//!
//! A request has the shape `<name>[ <record>[ <record>...]]` where every
//! record is a `:`-delimited list of fields. Nothing is escaped; grammars that
//! need a value containing `:` rebuild it from adjacent fields.

mod aliases;
mod arity;
mod fields;
mod line;

pub(crate) use self::aliases::{resolve_boot, resolve_event};
pub(crate) use self::arity::{Arity, RecordMode};
pub(crate) use self::fields::{DeviceTarget, InvalidReason, parse_bool, parse_u32, parse_u64};
pub(crate) use self::line::{ArgumentRecord, RawCommand};

pub(crate) const FIELD_SEPARATOR: char = ':';
pub(crate) const RECORD_SEPARATOR: char = ' ';
