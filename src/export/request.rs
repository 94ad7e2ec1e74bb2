use super::ExportParams;

/// Render one self-contained curl request against the query API. The JSON
/// body travels through a heredoc, which keeps the embedded SQL free of
/// shell quoting hazards.
pub fn render_request_block(params: &ExportParams, query: &str, is_async: bool) -> String {
    format!(
        r#"curl --request POST \
     --url https://api.{region}.rockset.com/v1/orgs/self/queries \
     --header 'Authorization: ApiKey {api_key}' \
     --header 'accept: application/json' \
     --header 'content-type: application/json' \
     --data @- <<EOF
{{
  "sql": {{
    "query": "{query}"
  }},
  "async": {is_async}
}}
EOF

"#,
        region = params.region,
        api_key = params.api_key,
        query = query,
        is_async = is_async
    )
}
