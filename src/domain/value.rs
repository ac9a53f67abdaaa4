use std::fmt;

use crate::domain::validation::ValidationError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Vultr API key, sent as the `API-Key` header.
///
/// Invariant: non-empty after trimming. The [`fmt::Debug`] output is redacted.
pub struct ApiKey(String);

impl ApiKey {
    /// Header name used by Vultr (`API-Key`).
    pub const HEADER: &'static str = "API-Key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: Self::HEADER,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u64);

        impl $name {
            #[doc = concat!("Wire key used by Vultr (`", $field, "`).")]
            pub const FIELD: &'static str = $field;

            /// Wrap a raw identifier (no range validation is performed).
            pub fn new(value: u64) -> Self {
                Self(value)
            }

            /// Get the underlying identifier.
            pub fn value(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// Server subscription id (`SUBID`).
    ServerId,
    "SUBID"
);
numeric_id!(
    /// Plan id (`VPSPLANID`).
    PlanId,
    "VPSPLANID"
);
numeric_id!(
    /// Region (datacenter) id (`DCID`).
    RegionId,
    "DCID"
);
numeric_id!(
    /// Operating system id (`OSID`).
    OsId,
    "OSID"
);
numeric_id!(
    /// ISO image id (`ISOID`).
    IsoId,
    "ISOID"
);
numeric_id!(
    /// Startup script id (`SCRIPTID`).
    ScriptId,
    "SCRIPTID"
);
numeric_id!(
    /// One-click application id (`APPID`).
    AppId,
    "APPID"
);
numeric_id!(
    /// DNS record id (`RECORDID`).
    RecordId,
    "RECORDID"
);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Snapshot id (`SNAPSHOTID`), an opaque token such as `5359435d28b9a`.
///
/// Invariant: non-empty after trimming.
pub struct SnapshotId(String);

impl SnapshotId {
    /// Wire key used by Vultr (`SNAPSHOTID`).
    pub const FIELD: &'static str = "SNAPSHOTID";

    /// Create a validated [`SnapshotId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Keep a response token exactly as sent; only a blank token is rejected.
    pub(crate) fn from_wire(value: String) -> Result<Self, ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// DNS domain name (`domain`), e.g. `example.com`.
///
/// Invariant: non-empty after trimming.
pub struct DomainName(String);

impl DomainName {
    /// Wire key used by Vultr (`domain`).
    pub const FIELD: &'static str = "domain";

    /// Create a validated [`DomainName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Keep a response token exactly as sent; only a blank name is rejected.
    pub(crate) fn from_wire(value: String) -> Result<Self, ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the validated domain.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether both values name the same DNS zone (ASCII case-insensitive).
    pub fn matches(&self, other: &DomainName) -> bool {
        self.0.trim().eq_ignore_ascii_case(other.0.trim())
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Continent a region is located on.
pub enum Continent {
    NorthAmerica,
    SouthAmerica,
    Asia,
    Europe,
    Australia,
    Africa,
}

impl Continent {
    /// All continents known to this crate.
    pub const ALL: [Self; 6] = [
        Self::NorthAmerica,
        Self::SouthAmerica,
        Self::Asia,
        Self::Europe,
        Self::Australia,
        Self::Africa,
    ];

    /// Parse a continent name as returned by Vultr (`North America`).
    ///
    /// Matching ignores case; whitespace runs and underscores act as a single
    /// word separator, so `north america`, ` NORTH_AMERICA ` and
    /// `North  America` all map to [`Continent::NorthAmerica`].
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = input
            .split(|c: char| c.is_whitespace() || c == '_')
            .filter(|word| !word.is_empty())
            .map(str::to_ascii_uppercase)
            .collect::<Vec<_>>()
            .join("_");

        match normalized.as_str() {
            "NORTH_AMERICA" => Ok(Self::NorthAmerica),
            "SOUTH_AMERICA" => Ok(Self::SouthAmerica),
            "ASIA" => Ok(Self::Asia),
            "EUROPE" => Ok(Self::Europe),
            "AUSTRALIA" => Ok(Self::Australia),
            "AFRICA" => Ok(Self::Africa),
            _ => Err(ValidationError::UnknownContinent {
                input: input.to_owned(),
            }),
        }
    }

    /// Human-readable name, matching the provider's spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NorthAmerica => "North America",
            Self::SouthAmerica => "South America",
            Self::Asia => "Asia",
            Self::Europe => "Europe",
            Self::Australia => "Australia",
            Self::Africa => "Africa",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Startup script kind (`type`).
pub enum ScriptType {
    /// Runs on first boot.
    #[default]
    Boot,
    /// iPXE chainload script.
    Pxe,
}

impl ScriptType {
    /// Wire key used by Vultr (`type`).
    pub const FIELD: &'static str = "type";

    /// Parse the wire value (`boot` / `pxe`, case-insensitive).
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input.trim().to_ascii_lowercase().as_str() {
            "boot" => Ok(Self::Boot),
            "pxe" => Ok(Self::Pxe),
            _ => Err(ValidationError::UnknownScriptType {
                input: input.to_owned(),
            }),
        }
    }

    /// Wire value sent to Vultr.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boot => "boot",
            Self::Pxe => "pxe",
        }
    }
}

impl fmt::Display for ScriptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// DNS record type (`type`).
pub enum DnsRecordType {
    A,
    Aaaa,
    Cname,
    Ns,
    Mx,
    Srv,
    Txt,
    Caa,
    Sshfp,
}

impl DnsRecordType {
    /// Wire key used by Vultr (`type`).
    pub const FIELD: &'static str = "type";

    /// Parse the wire value (`A`, `AAAA`, `MX`, ...), case-insensitive.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "AAAA" => Ok(Self::Aaaa),
            "CNAME" => Ok(Self::Cname),
            "NS" => Ok(Self::Ns),
            "MX" => Ok(Self::Mx),
            "SRV" => Ok(Self::Srv),
            "TXT" => Ok(Self::Txt),
            "CAA" => Ok(Self::Caa),
            "SSHFP" => Ok(Self::Sshfp),
            _ => Err(ValidationError::UnknownRecordType {
                input: input.to_owned(),
            }),
        }
    }

    /// Wire value sent to Vultr.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Ns => "NS",
            Self::Mx => "MX",
            Self::Srv => "SRV",
            Self::Txt => "TXT",
            Self::Caa => "CAA",
            Self::Sshfp => "SSHFP",
        }
    }
}

impl fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
