use super::{Credentials, ExportParams};

const HEX_DIGITS: &str = "0123456789abcdef";

/// `_id` prefixes for a k-digit hex split, in ascending hex order: the
/// single empty prefix for k=0, `0`..`f` for k=1, `00`..`ff` for k=2.
fn id_prefixes(digits: u32) -> Vec<String> {
    let mut prefixes = vec![String::new()];
    for _ in 0..digits {
        prefixes = prefixes
            .iter()
            .flat_map(|prefix| HEX_DIGITS.chars().map(move |d| format!("{prefix}{d}")))
            .collect();
    }
    prefixes
}

fn credential_clause(credentials: &Credentials) -> String {
    match credentials {
        Credentials::AwsRole { role, external_id } => format!(
            "CREDENTIALS=(AWS_ROLE='{}', AWS_EXTERNAL_ID='{}')",
            role,
            external_id.as_deref().unwrap_or_default()
        ),
        Credentials::Integration { name } => format!("INTEGRATION = '{}'", name),
    }
}

/// Build the `INSERT INTO ... SELECT` statements for one export run, one
/// per `_id` prefix partition. Optional values are inserted verbatim; the
/// query service is the authority on whether they make sense.
pub fn build_queries(params: &ExportParams) -> Vec<String> {
    let base = format!(
        "INSERT INTO '{bucket}/{collection}' {credentials} FORMAT = (TYPE='{format}', INCLUDE_QUERY_ID=true) SELECT * FROM {collection}",
        bucket = params.bucket_uri,
        collection = params.collection,
        credentials = credential_clause(&params.credentials),
        format = params.format.as_sql_type(),
    );

    id_prefixes(params.split.digits())
        .into_iter()
        .map(|prefix| {
            let mut query = base.clone();
            if !prefix.is_empty() {
                query.push_str(&format!(" WHERE _id LIKE '{prefix}%'"));
            }
            if let Some(chunk_size) = &params.chunk_size {
                query.push_str(&format!(" HINT(s3_sync_op_output_chunk_size={chunk_size})"));
            }
            query
        })
        .collect()
}
