pub mod commands;

use anyhow::Result;
use clap::{ArgGroup, Parser};

use crate::export::{Credentials, ExportParams, OutputFormat, PrefixSplit};

/// At least one of the two credential flags must be present; when both
/// are given the role wins.
#[derive(Debug, Parser)]
#[command(name = "rockset2s3")]
#[command(about = "Generate curl scripts that export a Rockset collection to AWS S3")]
#[command(version)]
#[command(group(
    ArgGroup::new("credentials")
        .required(true)
        .multiple(true)
        .args(["integration_name", "aws_role"])
))]
pub struct Cli {
    /// Output file, created or overwritten
    #[arg(long = "output_file")]
    pub output_file: String,

    /// Rockset region token (api.<region>.rockset.com)
    #[arg(long = "param_RS_region")]
    pub region: String,

    /// Rockset API key
    #[arg(long = "param_RS_apikey", env = "ROCKSET_APIKEY")]
    pub api_key: String,

    /// Source collection, as workspace.collection
    #[arg(long = "param_RS_wsdotcollectionname")]
    pub collection: String,

    /// Export object format
    #[arg(long = "param_RS_outputformat", value_enum)]
    pub output_format: OutputFormat,

    /// Rockset integration with write access to the bucket
    #[arg(long = "param_RS_integrationname")]
    pub integration_name: Option<String>,

    /// AWS IAM role ARN the query service assumes to write the export
    #[arg(long = "param_RS_AWSROLE_credentials")]
    pub aws_role: Option<String>,

    /// External ID attached to the AWS IAM role
    #[arg(long = "param_RS_AWSEXTID_credentials")]
    pub aws_external_id: Option<String>,

    /// Destination S3 bucket URI (root path of the export)
    #[arg(long = "param_AWS_S3bucketuri")]
    pub bucket_uri: String,

    /// Target output object size, inserted into the query verbatim
    #[arg(long = "param_AWS_S3outputchunksize")]
    pub chunk_size: Option<String>,

    /// Run the export query synchronously if TRUE (any case)
    #[arg(long = "param_RS_querysynchronous")]
    pub synchronous: Option<String>,

    /// Split the export by _id hex prefix: 1 = 16 queries, 2 = 256 queries
    #[arg(long = "param_RS_adv_filtercollection_byID", value_enum)]
    pub split: Option<PrefixSplit>,
}

impl Cli {
    /// Fold the two optional credential flags into the tagged union. The
    /// arg group guarantees at least one is present.
    pub fn into_params(self) -> Result<ExportParams> {
        let credentials = match (self.aws_role, self.integration_name) {
            (Some(role), _) => Credentials::AwsRole {
                role,
                external_id: self.aws_external_id,
            },
            (None, Some(name)) => Credentials::Integration { name },
            (None, None) => anyhow::bail!(
                "either --param_RS_integrationname or --param_RS_AWSROLE_credentials must be provided"
            ),
        };

        Ok(ExportParams {
            region: self.region,
            api_key: self.api_key,
            collection: self.collection,
            format: self.output_format,
            credentials,
            bucket_uri: self.bucket_uri,
            chunk_size: self.chunk_size,
            synchronous: self.synchronous,
            split: self.split.unwrap_or_default(),
        })
    }
}
