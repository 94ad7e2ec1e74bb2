mod query;
mod request;

pub use query::build_queries;
pub use request::render_request_block;

/// Credentials the query service uses to write into the destination bucket.
///
/// The two mechanisms are mutually exclusive on the wire: a query carries
/// either an `INTEGRATION` clause or a `CREDENTIALS` clause, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Named integration with write access to the bucket.
    Integration { name: String },
    /// IAM role assumed directly by the query service. A missing
    /// `external_id` is rendered as `AWS_EXTERNAL_ID=''`.
    AwsRole {
        role: String,
        external_id: Option<String>,
    },
}

/// Object format for the exported data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[value(name = "JSON")]
    Json,
    #[value(name = "PARQUET")]
    Parquet,
}

impl OutputFormat {
    pub fn as_sql_type(&self) -> &'static str {
        match self {
            OutputFormat::Json => "JSON",
            OutputFormat::Parquet => "PARQUET",
        }
    }
}

/// How many leading hex digits of `_id` to partition the export by.
///
/// Hash-style `_id` values are uniformly distributed over hex digits, so
/// splitting by prefix bounds per-query result size for large collections
/// at the cost of proportionally more request blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum PrefixSplit {
    /// Single unpartitioned query.
    #[default]
    #[value(skip)]
    None,
    /// 16 queries, one per leading hex digit.
    #[value(name = "1")]
    Single,
    /// 256 queries, one per leading hex digit pair.
    #[value(name = "2")]
    Double,
}

impl PrefixSplit {
    pub fn digits(self) -> u32 {
        match self {
            PrefixSplit::None => 0,
            PrefixSplit::Single => 1,
            PrefixSplit::Double => 2,
        }
    }
}

/// Everything one export run needs. Built once by the CLI adapter and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ExportParams {
    pub region: String,
    pub api_key: String,
    pub collection: String,
    pub format: OutputFormat,
    pub credentials: Credentials,
    pub bucket_uri: String,
    pub chunk_size: Option<String>,
    pub synchronous: Option<String>,
    pub split: PrefixSplit,
}

impl ExportParams {
    /// Async flag for the request body: only an explicit case-insensitive
    /// "true" selects a synchronous query, everything else stays async.
    pub fn is_async(&self) -> bool {
        !self
            .synchronous
            .as_deref()
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }
}

/// Render the full export script: one curl request block per generated
/// query, in generation order, each terminated by its heredoc marker and
/// a blank line.
pub fn generate_script(params: &ExportParams) -> String {
    let is_async = params.is_async();

    let mut script = String::new();
    for query in build_queries(params) {
        script.push_str(&render_request_block(params, &query, is_async));
    }
    script
}
