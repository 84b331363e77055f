//! Per-version tables mapping attribute keys to value types.

use std::fmt;
use std::ops::RangeInclusive;

/// The versions a record may declare.
pub const SUPPORTED_VERSIONS: RangeInclusive<u32> = 1..=3;

/// The key that ends attribute enumeration in every version.
pub const TERMINAL_KEY: &str = "eos";

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum AttributeType {
    Terminal,
    Integer,
    String,
    Link,
    Route,
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AttributeType::*;

        let s = match self {
            Terminal => "terminal",
            Integer => "integer",
            String => "string",
            Link => "link",
            Route => "route",
        };

        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SchemaEntry {
    pub key: &'static str,
    pub ty: AttributeType,
}

const fn entry(key: &'static str, ty: AttributeType) -> SchemaEntry {
    SchemaEntry { key, ty }
}

use AttributeType::*;

static VERSION_1: [SchemaEntry; 11] = [
    entry("id", Integer),
    entry("ipAssignment", String),
    entry("linkAddress", Link),
    entry("gateway", String),
    entry("dns", String),
    entry("proxySettings", String),
    entry("proxyHost", String),
    entry("proxyPort", Integer),
    entry("proxyPac", String),
    entry("exclusionList", String),
    entry(TERMINAL_KEY, Terminal),
];

static VERSION_2: [SchemaEntry; 11] = [
    entry("id", Integer),
    entry("ipAssignment", String),
    entry("linkAddress", Link),
    entry("gateway", Route),
    entry("dns", String),
    entry("proxySettings", String),
    entry("proxyHost", String),
    entry("proxyPort", Integer),
    entry("proxyPac", String),
    entry("exclusionList", String),
    entry(TERMINAL_KEY, Terminal),
];

static VERSION_3: [SchemaEntry; 11] = [
    entry("id", String),
    entry("ipAssignment", String),
    entry("linkAddress", Link),
    entry("gateway", Route),
    entry("dns", String),
    entry("proxySettings", String),
    entry("proxyHost", String),
    entry("proxyPort", Integer),
    entry("proxyPac", String),
    entry("exclusionList", String),
    entry(TERMINAL_KEY, Terminal),
];

static SCHEMAS: [Schema; 3] = [
    Schema {
        version: 1,
        entries: &VERSION_1,
    },
    Schema {
        version: 2,
        entries: &VERSION_2,
    },
    Schema {
        version: 3,
        entries: &VERSION_3,
    },
];

/// The key table for one format version.
#[derive(Debug)]
pub struct Schema {
    version: u32,
    entries: &'static [SchemaEntry],
}

impl Schema {
    #[inline(always)]
    pub fn for_version(version: u32) -> Option<&'static Schema> {
        SCHEMAS.iter().find(|schema| schema.version == version)
    }

    #[inline(always)]
    pub fn version(&self) -> u32 {
        self.version
    }

    #[inline(always)]
    pub fn entries(&self) -> &'static [SchemaEntry] {
        self.entries
    }

    #[inline(always)]
    pub fn terminal_key(&self) -> &'static str {
        TERMINAL_KEY
    }

    /// Returns the type of the first entry matching `key`, if any.
    ///
    /// Keys are compared the way C strings compare over the longer of the two lengths:
    /// the query only counts up to its first NUL byte, after which it must equal the
    /// table key exactly.
    pub fn resolve(&self, key: &str) -> Option<AttributeType> {
        let key = key.split('\0').next().unwrap_or_default();

        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.ty)
    }
}

/// Resolves `key` against the table for `version`. Unknown versions resolve nothing.
#[inline(always)]
pub fn resolve_type(version: u32, key: &str) -> Option<AttributeType> {
    Schema::for_version(version)?.resolve(key)
}

#[cfg(test)]
mod tests {
    use super::AttributeType::*;
    use super::*;

    #[test]
    fn versions_differ_only_in_id_and_gateway() {
        assert_eq!(resolve_type(1, "id"), Some(Integer));
        assert_eq!(resolve_type(2, "id"), Some(Integer));
        assert_eq!(resolve_type(3, "id"), Some(String));

        assert_eq!(resolve_type(1, "gateway"), Some(String));
        assert_eq!(resolve_type(2, "gateway"), Some(Route));
        assert_eq!(resolve_type(3, "gateway"), Some(Route));

        for version in SUPPORTED_VERSIONS {
            assert_eq!(resolve_type(version, "linkAddress"), Some(Link));
            assert_eq!(resolve_type(version, "proxyPort"), Some(Integer));
            assert_eq!(resolve_type(version, "exclusionList"), Some(String));
        }
    }

    #[test]
    fn one_terminal_per_schema() {
        for version in SUPPORTED_VERSIONS {
            let schema = Schema::for_version(version).unwrap();
            let terminals = schema
                .entries()
                .iter()
                .filter(|entry| entry.ty == Terminal)
                .collect::<Vec<_>>();

            assert_eq!(terminals.len(), 1);
            assert_eq!(terminals[0].key, schema.terminal_key());
            assert_eq!(schema.resolve("eos"), Some(Terminal));
        }
    }

    #[test]
    fn unknown_versions_resolve_nothing() {
        assert!(Schema::for_version(0).is_none());
        assert!(Schema::for_version(4).is_none());
        assert_eq!(resolve_type(0, "id"), None);
        assert_eq!(resolve_type(4, "eos"), None);
    }

    #[test]
    fn prefixes_do_not_match() {
        assert_eq!(resolve_type(1, "i"), None);
        assert_eq!(resolve_type(1, "ids"), None);
        assert_eq!(resolve_type(1, "proxy"), None);
        assert_eq!(resolve_type(1, "eos "), None);
        assert_eq!(resolve_type(1, ""), None);
    }

    #[test]
    fn query_ends_at_nul() {
        assert_eq!(resolve_type(2, "gateway\0junk"), Some(Route));
        assert_eq!(resolve_type(2, "eos\0"), Some(Terminal));
    }
}
