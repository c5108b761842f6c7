/// Textual encoding applied to date values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateTimeFormat {
    /// `"\/Date(1609459200000)\/"` — the wrapper many legacy web stacks
    /// expect. The default.
    #[default]
    MicrosoftStyleMillisecondsSinceUnixEpoch,
    /// Bare integer milliseconds, `1609459200000`.
    MillisecondsSinceUnixEpoch,
    /// Bare integer seconds, `1609459200`.
    SecondsSinceUnixEpoch,
    /// `"2021-01-01T00:00:00Z"`, fractional seconds only when nonzero.
    Iso8601,
    /// `"Fri, 01 Jan 2021 00:00:00 GMT"`.
    Rfc1123,
}

/// How a date whose kind tag is "unspecified" is interpreted before
/// formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnspecifiedDateTimeKindBehavior {
    #[default]
    IsLocal,
    IsUtc,
}

/// Transform applied to member names when rendering object keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SerializationNameFormat {
    /// Declared names pass through unchanged.
    #[default]
    Verbatim,
    /// Lowercases the first character only: `UserID` becomes `userID`.
    CamelCase,
}

/// Immutable formatting configuration.
///
/// One value of this struct replaces an entire family of fixed
/// configurations; two options with identical fields are interchangeable
/// as cache keys, so routines are shared across structurally equal
/// configurations.
///
/// # Examples
/// ```
/// use inline_json::{Options, SerializationNameFormat};
///
/// let options = Options::new()
///     .with_pretty_print(true)
///     .with_name_format(SerializationNameFormat::CamelCase);
/// assert!(options.pretty_print);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Options {
    pub pretty_print: bool,
    pub exclude_nulls: bool,
    pub jsonp: bool,
    pub include_inherited: bool,
    pub date_format: DateTimeFormat,
    pub unspecified_kind: UnspecifiedDateTimeKindBehavior,
    pub name_format: SerializationNameFormat,
}

impl Options {
    pub const DEFAULT: Options = Options::new();

    pub const PRETTY_PRINT: Options = Options::new().with_pretty_print(true);

    pub const EXCLUDE_NULLS: Options = Options::new().with_exclude_nulls(true);

    pub const JSONP: Options = Options::new().with_jsonp(true);

    pub const CAMEL_CASE: Options =
        Options::new().with_name_format(SerializationNameFormat::CamelCase);

    pub const UTC: Options =
        Options::new().with_unspecified_kind(UnspecifiedDateTimeKindBehavior::IsUtc);

    pub const ISO8601: Options = Options::new().with_date_format(DateTimeFormat::Iso8601);

    pub const ISO8601_PRETTY_PRINT: Options = Options::ISO8601.with_pretty_print(true);

    pub const MILLISECONDS_SINCE_EPOCH: Options =
        Options::new().with_date_format(DateTimeFormat::MillisecondsSinceUnixEpoch);

    pub const SECONDS_SINCE_EPOCH: Options =
        Options::new().with_date_format(DateTimeFormat::SecondsSinceUnixEpoch);

    pub const RFC1123: Options = Options::new().with_date_format(DateTimeFormat::Rfc1123);

    pub const fn new() -> Self {
        Options {
            pretty_print: false,
            exclude_nulls: false,
            jsonp: false,
            include_inherited: false,
            date_format: DateTimeFormat::MicrosoftStyleMillisecondsSinceUnixEpoch,
            unspecified_kind: UnspecifiedDateTimeKindBehavior::IsLocal,
            name_format: SerializationNameFormat::Verbatim,
        }
    }

    pub const fn with_pretty_print(mut self, pretty_print: bool) -> Self {
        self.pretty_print = pretty_print;
        self
    }

    pub const fn with_exclude_nulls(mut self, exclude_nulls: bool) -> Self {
        self.exclude_nulls = exclude_nulls;
        self
    }

    pub const fn with_jsonp(mut self, jsonp: bool) -> Self {
        self.jsonp = jsonp;
        self
    }

    pub const fn with_include_inherited(mut self, include_inherited: bool) -> Self {
        self.include_inherited = include_inherited;
        self
    }

    pub const fn with_date_format(mut self, date_format: DateTimeFormat) -> Self {
        self.date_format = date_format;
        self
    }

    pub const fn with_unspecified_kind(
        mut self,
        unspecified_kind: UnspecifiedDateTimeKindBehavior,
    ) -> Self {
        self.unspecified_kind = unspecified_kind;
        self
    }

    pub const fn with_name_format(mut self, name_format: SerializationNameFormat) -> Self {
        self.name_format = name_format;
        self
    }
}
