use super::{DeviceTarget, FIELD_SEPARATOR, RECORD_SEPARATOR, RecordMode};

/// One request line split into its command name and payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawCommand<'a> {
    line: &'a str,
    name: &'a str,
    payload: &'a str,
}

impl<'a> RawCommand<'a> {
    /// Splits `line` on its first space after dropping trailing line endings.
    pub(crate) fn parse(line: &'a str) -> Self {
        let line = line.trim_end_matches(['\n', '\r']);
        let (name, payload) = line.split_once(RECORD_SEPARATOR).unwrap_or((line, ""));
        Self {
            line,
            name,
            payload,
        }
    }

    pub(crate) fn line(&self) -> &'a str {
        self.line
    }

    pub(crate) fn name(&self) -> &'a str {
        self.name
    }

    pub(crate) fn has_payload(&self) -> bool {
        !self.payload.is_empty()
    }

    /// Whether a single-record command was sent several space-separated records.
    pub(crate) fn has_extra_records(&self, mode: RecordMode) -> bool {
        mode == RecordMode::Single && self.payload.contains(RECORD_SEPARATOR)
    }

    /// Splits the payload into records according to `mode`.
    ///
    /// Runs of spaces never produce empty records in variable mode.
    pub(crate) fn records(&self, mode: RecordMode) -> Vec<ArgumentRecord<'a>> {
        match mode {
            RecordMode::Single => vec![ArgumentRecord::parse(self.payload)],
            RecordMode::Variable => self
                .payload
                .split(RECORD_SEPARATOR)
                .filter(|record| !record.is_empty())
                .map(ArgumentRecord::parse)
                .collect(),
        }
    }
}

/// A `:`-delimited group of fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ArgumentRecord<'a> {
    raw: &'a str,
    fields: Vec<&'a str>,
}

impl<'a> ArgumentRecord<'a> {
    pub(crate) fn parse(raw: &'a str) -> Self {
        Self {
            raw,
            fields: raw.split(FIELD_SEPARATOR).collect(),
        }
    }

    /// The record exactly as the client sent it.
    pub(crate) fn raw(&self) -> &'a str {
        self.raw
    }

    pub(crate) fn len(&self) -> usize {
        self.fields.len()
    }

    /// Field at `index`, or the empty string past the end.
    pub(crate) fn field(&self, index: usize) -> &'a str {
        self.fields.get(index).copied().unwrap_or_default()
    }

    /// Field at `index` when the record is long enough to carry it.
    pub(crate) fn optional(&self, index: usize) -> Option<&'a str> {
        self.fields.get(index).copied()
    }

    /// Fields from `start` to the end of the record.
    pub(crate) fn rest(&self, start: usize) -> &[&'a str] {
        self.fields.get(start..).unwrap_or_default()
    }

    /// Device address rebuilt from the first two fields.
    pub(crate) fn target(&self) -> DeviceTarget {
        DeviceTarget::new(self.field(0), self.field(1))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("attach 10.0.0.1:8888:30\n", "attach", "10.0.0.1:8888:30")]
    #[case("showdevices\r\n", "showdevices", "")]
    #[case("QUIT", "QUIT", "")]
    #[case("attach a:b:1 c:d:2", "attach", "a:b:1 c:d:2")]
    fn splits_name_from_payload(#[case] line: &str, #[case] name: &str, #[case] payload: &str) {
        let command = RawCommand::parse(line);
        assert_eq!(command.name(), name);
        assert_eq!(command.payload, payload);
    }

    #[test]
    fn line_excludes_terminator() {
        let command = RawCommand::parse("detach 10.0.0.1:8888:tok\n");
        assert_eq!(command.line(), "detach 10.0.0.1:8888:tok");
    }

    #[test]
    fn variable_mode_skips_empty_records() {
        let command = RawCommand::parse("attach a:1:5  b:2:5 ");
        let raws: Vec<_> = command
            .records(RecordMode::Variable)
            .iter()
            .map(ArgumentRecord::raw)
            .collect();
        assert_eq!(raws, ["a:1:5", "b:2:5"]);
    }

    #[test]
    fn single_mode_keeps_whole_payload() {
        let command = RawCommand::parse("period a:1:tok:5 extra");
        let records = command.records(RecordMode::Single);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].raw(), "a:1:tok:5 extra");
    }

    #[rstest]
    #[case("period a:1:tok:5 extra", RecordMode::Single, true)]
    #[case("period a:1:tok:5", RecordMode::Single, false)]
    #[case("attach a:1:5 b:2:5", RecordMode::Variable, false)]
    fn extra_records_only_matter_in_single_mode(
        #[case] line: &str,
        #[case] mode: RecordMode,
        #[case] expected: bool,
    ) {
        assert_eq!(RawCommand::parse(line).has_extra_records(mode), expected);
    }

    #[test]
    fn record_exposes_fields_and_target() {
        let record = ArgumentRecord::parse("10.0.0.1:8888:tok:add:rm");
        assert_eq!(record.len(), 5);
        assert_eq!(record.field(2), "tok");
        assert_eq!(record.field(9), "");
        assert_eq!(record.optional(5), None);
        assert_eq!(record.rest(3), ["add", "rm"]);
        assert!(record.rest(8).is_empty());
        assert_eq!(record.target().to_string(), "10.0.0.1:8888");
    }

    #[test]
    fn empty_fields_are_preserved() {
        let record = ArgumentRecord::parse("h:1:tok::");
        assert_eq!(record.len(), 5);
        assert_eq!(record.field(3), "");
    }
}
