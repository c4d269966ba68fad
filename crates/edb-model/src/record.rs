//! Parsed record and field data from EPICS db/template files.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Matches `.SIM` immediately followed by `:` or the end of the pv.
static SIM_PV_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.SIM(:|$)").expect("invalid simulation pv regex"));

/// A single name/value pair attached to a record.
///
/// The name is trimmed of surrounding whitespace at construction; the value
/// is kept verbatim, including any `$(TOKEN)` macro placeholders. A record
/// may carry several fields with the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    value: String,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.value)
    }
}

/// One configurable process variable with its type, fields, and info pairs.
///
/// Field and info order follows the source file. Lookups return every match
/// in that order; duplicate names are the caller's policy decision.
#[derive(Debug, Clone)]
pub struct Record {
    directory: String,
    record_type: String,
    pv: String,
    fields: Vec<Field>,
    infos: Vec<Field>,
    simulation: bool,
    disable: bool,
}

impl Record {
    pub fn new(
        directory: impl Into<String>,
        record_type: impl Into<String>,
        pv: impl Into<String>,
        infos: Vec<Field>,
        fields: Vec<Field>,
    ) -> Self {
        let pv = pv.into();
        let simulation = SIM_PV_REGEX.is_match(&pv);
        let disable = pv.contains("DISABLE");
        Self {
            directory: directory.into(),
            record_type: record_type.into(),
            pv,
            fields,
            infos,
            simulation,
            disable,
        }
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn record_type(&self) -> &str {
        &self.record_type
    }

    pub fn pv(&self) -> &str {
        &self.pv
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn infos(&self) -> &[Field] {
        &self.infos
    }

    /// Whether the pv names a simulation record (`.SIM` before `:` or end).
    pub fn is_simulation(&self) -> bool {
        self.simulation
    }

    /// Whether the pv names a disable record.
    pub fn is_disable(&self) -> bool {
        self.disable
    }

    /// Whether the record carries an `INTEREST` info pair.
    pub fn is_interest(&self) -> bool {
        self.infos.iter().any(|info| info.name() == "INTEREST")
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.name() == name)
    }

    /// Values of every field named `name`, in source order.
    pub fn get_field(&self, name: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|field| field.name() == name)
            .map(Field::value)
            .collect()
    }

    /// Values of every info pair named `name`, in source order.
    pub fn get_info(&self, name: &str) -> Vec<&str> {
        self.infos
            .iter()
            .filter(|info| info.name() == name)
            .map(Field::value)
            .collect()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\\{}", self.directory, self.pv)
    }
}
