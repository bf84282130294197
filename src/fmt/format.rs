//! Console and file output use different line layouts: the console wants `{tag} {msg}`,
//! log files want `{timestamp} [{level}] {msg}`. Templates keep the layout data instead of
//! code, so both formatters share the rendering path.

/// Closed set of known substitution tokens. Unknown `{names}` pass through as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// The rendered level tag, e.g. `[INFO]`, possibly colored and translated.
    Tag,
    /// The plain upper-case level name.
    Level,
    Msg,
    Timestamp,
    /// Logger name.
    Name,
    /// Translation domain of the caller.
    Domain,
}

impl Placeholder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tag => "tag",
            Self::Level => "level",
            Self::Msg => "msg",
            Self::Timestamp => "timestamp",
            Self::Name => "name",
            Self::Domain => "domain",
        }
    }

    pub const ALL: &'static [Self] = &[
        Self::Tag,
        Self::Level,
        Self::Msg,
        Self::Timestamp,
        Self::Name,
        Self::Domain,
    ];
}

/// Parsing into segments once avoids re-scanning the template on every log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSegment {
    Literal(String),
    Placeholder(Placeholder),
}

/// Pre-parsed template: parse once, render many.
#[derive(Debug, Clone)]
pub struct FormatTemplate {
    segments: Vec<FormatSegment>,
}

impl FormatTemplate {
    /// Turns `"{tag} {msg}"` into a segment list.
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}').map(|i| open + i) else {
                break;
            };
            current.push_str(&rest[..open]);
            let name = &rest[open + 1..close];

            // stray `{` before a real placeholder, e.g. `{ {msg}`
            if name.contains('{') {
                current.push('{');
                rest = &rest[open + 1..];
                continue;
            }

            match Self::match_placeholder(name) {
                Some(ph) => {
                    if !current.is_empty() {
                        segments.push(FormatSegment::Literal(std::mem::take(&mut current)));
                    }
                    segments.push(FormatSegment::Placeholder(ph));
                }
                None => current.push_str(&rest[open..=close]),
            }
            rest = &rest[close + 1..];
        }

        current.push_str(rest);
        if !current.is_empty() {
            segments.push(FormatSegment::Literal(current));
        }

        Self { segments }
    }

    fn match_placeholder(name: &str) -> Option<Placeholder> {
        Placeholder::ALL.iter().copied().find(|ph| ph.as_str() == name)
    }

    #[must_use]
    pub fn segments(&self) -> &[FormatSegment] {
        &self.segments
    }

    /// Lets formatters skip work (timestamp formatting, translation) for unused placeholders.
    #[must_use]
    pub fn uses(&self, placeholder: Placeholder) -> bool {
        self.segments
            .iter()
            .any(|s| *s == FormatSegment::Placeholder(placeholder))
    }

    #[must_use]
    pub fn render(&self, values: &FormatValues) -> String {
        let mut result = String::new();

        for segment in &self.segments {
            match segment {
                FormatSegment::Literal(s) => result.push_str(s),
                FormatSegment::Placeholder(ph) => {
                    let value = match ph {
                        Placeholder::Tag => &values.tag,
                        Placeholder::Level => &values.level,
                        Placeholder::Msg => &values.msg,
                        Placeholder::Timestamp => &values.timestamp,
                        Placeholder::Name => &values.name,
                        Placeholder::Domain => &values.domain,
                    };
                    result.push_str(value);
                }
            }
        }

        result
    }
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self::parse("{tag} {msg}")
    }
}

/// Typed value bag: every placeholder has a field, so there are no key typos at runtime.
#[derive(Debug, Clone, Default)]
pub struct FormatValues {
    pub tag: String,
    pub level: String,
    pub msg: String,
    pub timestamp: String,
    pub name: String,
    pub domain: String,
}

impl FormatValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    #[must_use]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    #[must_use]
    pub fn msg(mut self, msg: impl Into<String>) -> Self {
        self.msg = msg.into();
        self
    }

    #[must_use]
    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }
}
