//! Concurrent resolution against shared procedures.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ruststack_endpoints_core::EndpointProvider;

    use crate::registry;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_should_resolve_concurrently_through_shared_provider() {
        let registry = registry("us-east-1");
        let provider: Arc<dyn EndpointProvider> = Arc::new(registry.get("sts").unwrap().clone());

        let regions = ["us-east-1", "cn-north-1", "us-gov-west-1", "us-west-2-fips"];
        let mut handles = Vec::new();
        for i in 0..32 {
            let provider = Arc::clone(&provider);
            let region = regions[i % regions.len()];
            handles.push(tokio::spawn(async move {
                (region, provider.resolve_endpoint(Some(region)).unwrap())
            }));
        }

        for handle in handles {
            let (region, d) = handle.await.unwrap();
            let expected = provider.resolve_endpoint(Some(region)).unwrap();
            assert_eq!(d, expected);
        }
    }
}
