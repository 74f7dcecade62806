use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::Client;

/// Builds a DynamoDB client from the standard AWS provider chain
///
/// Region and credentials come from the environment, profile files or
/// instance metadata. `endpoint` overrides the service URL, which is how
/// DynamoDB Local is reached during development.
pub async fn build_client(endpoint: Option<&str>) -> Client {
    let shared = aws_config::defaults(BehaviorVersion::latest()).load().await;

    let mut builder = aws_sdk_dynamodb::config::Builder::from(&shared);
    if let Some(endpoint) = endpoint {
        tracing::info!(endpoint, "Using custom DynamoDB endpoint");
        builder = builder.endpoint_url(endpoint);
    }

    Client::from_conf(builder.build())
}
