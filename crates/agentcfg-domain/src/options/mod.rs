//! Dynamic Option Registry
//!
//! The closed set of options that the central configuration endpoint is
//! allowed to change while the process runs. Each option is declared once
//! below; the macro derives the identifier enum, the settings and
//! overrides structs, the descriptor table and the snapshot resolvers.

#[macro_use]
mod macros;
pub mod parsers;
pub mod value;

pub use value::{OptionKind, OptionValue};

use crate::error::OptionParseError;
use crate::value_objects::{
    AgentLogLevel, CaptureBody, ConfigDuration, MatcherList, TraceContinuationStrategy,
};
use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

const DEFAULT_CAPTURE_BODY_CONTENT_TYPES: &str =
    "application/x-www-form-urlencoded*, text/*, application/json*, application/xml*";

const DEFAULT_TRANSACTION_IGNORE_URLS: &str = "/VAADIN/*, /heartbeat*, /favicon.ico, *.js, *.css, *.jpg, *.jpeg, *.png, *.gif, *.webp, *.svg, *.woff, *.woff2";

const DEFAULT_SANITIZE_FIELD_NAMES: &str = "password, passwd, pwd, secret, *key, *token*, *session*, *credit*, *card*, *auth*, set-cookie, *principal*";

fn default_matchers(raw: &str) -> MatcherList {
    MatcherList::parse(raw).unwrap_or_default()
}

define_dynamic_options! {
    /// Which request bodies are recorded
    CaptureBody {
        key: "capture_body",
        field: capture_body: CaptureBody,
        kind: Enum,
        parser: parsers::parse_enum::<CaptureBody>,
        default: CaptureBody::Off,
    },
    /// Content types whose bodies may be recorded
    CaptureBodyContentTypes {
        key: "capture_body_content_types",
        field: capture_body_content_types: MatcherList,
        kind: MatcherList,
        parser: parsers::parse_matchers,
        default: default_matchers(DEFAULT_CAPTURE_BODY_CONTENT_TYPES),
    },
    /// Whether request and response headers are recorded
    CaptureHeaders {
        key: "capture_headers",
        field: capture_headers: bool,
        kind: Bool,
        parser: parsers::parse_bool,
        default: true,
    },
    /// Share of transactions that are sampled
    TransactionSampleRate {
        key: "transaction_sample_rate",
        field: transaction_sample_rate: f64,
        kind: Double,
        parser: parsers::parse_sample_rate,
        default: 1.0,
    },
    /// Spans recorded per transaction, `-1` for unlimited
    TransactionMaxSpans {
        key: "transaction_max_spans",
        field: transaction_max_spans: i32,
        kind: Int,
        parser: parsers::parse_max_spans,
        default: 500,
    },
    /// URLs for which no transaction is started
    TransactionIgnoreUrls {
        key: "transaction_ignore_urls",
        field: transaction_ignore_urls: MatcherList,
        kind: MatcherList,
        parser: parsers::parse_matchers,
        default: default_matchers(DEFAULT_TRANSACTION_IGNORE_URLS),
    },
    /// Agent log verbosity
    LogLevel {
        key: "log_level",
        field: log_level: AgentLogLevel,
        kind: Enum,
        parser: parsers::parse_enum::<AgentLogLevel>,
        default: AgentLogLevel::Info,
    },
    /// Whether the agent records anything at all
    Recording {
        key: "recording",
        field: recording: bool,
        kind: Bool,
        parser: parsers::parse_bool,
        default: true,
    },
    /// Field names whose values are redacted
    SanitizeFieldNames {
        key: "sanitize_field_names",
        field: sanitize_field_names: MatcherList,
        kind: MatcherList,
        parser: parsers::parse_matchers,
        default: default_matchers(DEFAULT_SANITIZE_FIELD_NAMES),
    },
    /// Message queues that are not traced
    IgnoreMessageQueues {
        key: "ignore_message_queues",
        field: ignore_message_queues: MatcherList,
        kind: MatcherList,
        parser: parsers::parse_matchers,
        default: MatcherList::default(),
    },
    /// Stack frames collected per stack trace
    StackTraceLimit {
        key: "stack_trace_limit",
        field: stack_trace_limit: i32,
        kind: Int,
        parser: parsers::parse_int,
        default: 50,
    },
    /// Spans shorter than this carry no stack trace, negative disables
    SpanStackTraceMinDuration {
        key: "span_stack_trace_min_duration",
        field: span_stack_trace_min_duration: ConfigDuration,
        kind: Duration,
        parser: parsers::parse_duration,
        default: ConfigDuration::from_millis(5),
    },
    /// Whether consecutive similar spans are compressed
    SpanCompressionEnabled {
        key: "span_compression_enabled",
        field: span_compression_enabled: bool,
        kind: Bool,
        parser: parsers::parse_bool,
        default: true,
    },
    /// Longest span eligible for exact-match compression
    SpanCompressionExactMatchMaxDuration {
        key: "span_compression_exact_match_max_duration",
        field: span_compression_exact_match_max_duration: ConfigDuration,
        kind: Duration,
        parser: parsers::parse_non_negative_duration,
        default: ConfigDuration::from_millis(50),
    },
    /// Longest span eligible for same-kind compression
    SpanCompressionSameKindMaxDuration {
        key: "span_compression_same_kind_max_duration",
        field: span_compression_same_kind_max_duration: ConfigDuration,
        kind: Duration,
        parser: parsers::parse_non_negative_duration,
        default: ConfigDuration::from_millis(0),
    },
    /// Exit spans shorter than this are dropped
    ExitSpanMinDuration {
        key: "exit_span_min_duration",
        field: exit_span_min_duration: ConfigDuration,
        kind: Duration,
        parser: parsers::parse_non_negative_duration,
        default: ConfigDuration::from_millis(0),
    },
    /// How incoming trace context headers are treated
    TraceContinuationStrategy {
        key: "trace_continuation_strategy",
        field: trace_continuation_strategy: TraceContinuationStrategy,
        kind: Enum,
        parser: parsers::parse_enum::<TraceContinuationStrategy>,
        default: TraceContinuationStrategy::Continue,
    },
}

/// One row of the registry: an option and its parser
pub struct OptionDescriptor {
    option: DynamicOption,
    parse: fn(&str) -> Result<OptionValue, String>,
    parse_into: fn(&str, &mut DynamicOverrides) -> Result<(), String>,
}

impl OptionDescriptor {
    pub fn option(&self) -> DynamicOption {
        self.option
    }

    pub fn key(&self) -> &'static str {
        self.option.key()
    }

    pub fn kind(&self) -> OptionKind {
        self.option.kind()
    }

    /// Parse a raw value into its typed form
    pub fn parse(&self, raw: &str) -> Result<OptionValue, OptionParseError> {
        (self.parse)(raw).map_err(|reason| OptionParseError::new(self.key(), raw, reason))
    }

    /// Parse a raw value and store it as this option's override
    ///
    /// On failure `overrides` is left untouched.
    pub fn apply(&self, raw: &str, overrides: &mut DynamicOverrides) -> Result<(), OptionParseError> {
        (self.parse_into)(raw, overrides)
            .map_err(|reason| OptionParseError::new(self.key(), raw, reason))
    }
}

impl std::fmt::Debug for OptionDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionDescriptor")
            .field("option", &self.option)
            .field("key", &self.key())
            .field("kind", &self.kind())
            .finish()
    }
}

/// Result of applying a raw payload to the registry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PayloadParse {
    /// Overrides for every registered key that parsed
    pub overrides: DynamicOverrides,
    /// Registered keys whose value failed its parser
    pub rejected: Vec<OptionParseError>,
    /// Keys not present in the registry, sorted
    pub unknown_keys: Vec<String>,
}

static REGISTRY: LazyLock<OptionRegistry> = LazyLock::new(OptionRegistry::build);

/// Lookup table from wire key to descriptor, built once per process
#[derive(Debug)]
pub struct OptionRegistry {
    by_key: HashMap<&'static str, &'static OptionDescriptor>,
}

impl OptionRegistry {
    fn build() -> Self {
        let by_key = DESCRIPTORS
            .iter()
            .map(|descriptor| (descriptor.key(), descriptor))
            .collect();
        Self { by_key }
    }

    /// The process-wide registry
    pub fn global() -> &'static Self {
        &REGISTRY
    }

    /// Every descriptor, in registry order
    pub fn descriptors(&self) -> &'static [OptionDescriptor] {
        DESCRIPTORS
    }

    pub fn lookup(&self, key: &str) -> Option<&'static OptionDescriptor> {
        self.by_key.get(key).copied()
    }

    pub fn descriptor(&self, option: DynamicOption) -> Option<&'static OptionDescriptor> {
        self.lookup(option.key())
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Apply a raw key/value payload
    ///
    /// Failures are per key: a value that fails its parser is reported in
    /// `rejected` and the remaining keys are still applied.
    pub fn parse_payload(&self, payload: &HashMap<String, String>) -> PayloadParse {
        let mut result = PayloadParse::default();
        // Sorted so that logs and rejections come out in a stable order
        let ordered: BTreeMap<&String, &String> = payload.iter().collect();

        for (key, raw) in ordered {
            match self.lookup(key) {
                Some(descriptor) => {
                    if let Err(e) = descriptor.apply(raw, &mut result.overrides) {
                        result.rejected.push(e);
                    }
                }
                None => result.unknown_keys.push(key.clone()),
            }
        }
        result
    }
}
