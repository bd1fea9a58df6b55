//! Compilation of the bundled metadata.

#[cfg(test)]
mod tests {
    use std::fs;

    use ruststack_core::AwsRegion;
    use ruststack_endpoints_core::{
        CompileError, EndpointProvider, EndpointRegistry, SupportedSignatureVersions, compile,
    };
    use ruststack_endpoints_model::{FallbackRule, GlobalRegionBody};

    use crate::{metadata, registry, supported};

    #[test]
    fn test_should_compile_identically_twice() {
        let metadata = metadata();
        for table in metadata.tables().unwrap() {
            let first = compile(&table, &supported()).unwrap();
            let second = compile(&table, &supported()).unwrap();
            assert_eq!(first, second);
            assert_eq!(first.to_json_pretty().unwrap(), second.to_json_pretty().unwrap());
        }
    }

    #[test]
    fn test_should_elide_regions_matching_default() {
        let table = metadata().table("cloudformation").unwrap().unwrap();
        let procedure = compile(&table, &supported()).unwrap();

        let regions: Vec<_> = procedure
            .exceptions()
            .iter()
            .map(|e| e.region.as_str())
            .collect();
        assert_eq!(
            regions,
            vec![
                "cn-north-1",
                "cn-northwest-1",
                "us-east-1-fips",
                "us-east-2-fips",
                "us-iso-east-1",
                "us-iso-west-1",
                "us-isob-east-1",
                "us-west-1-fips",
                "us-west-2-fips",
            ]
        );
        assert!(matches!(procedure.global(), GlobalRegionBody::UseDefaultRegion));
        assert!(matches!(procedure.fallback(), FallbackRule::Rule(_)));
    }

    #[test]
    fn test_should_keep_shared_partition_rules_templated() {
        let table = metadata().table("cloudformation").unwrap().unwrap();
        let procedure = compile(&table, &supported()).unwrap();

        let cn = procedure.exception("cn-north-1").unwrap();
        assert!(cn.is_templated());
        assert_eq!(cn.sign_region, None);

        let iso_b = procedure.exception("us-isob-east-1").unwrap();
        assert!(!iso_b.is_templated());
        assert_eq!(iso_b.sign_region.as_deref(), Some("us-isob-east-1"));
    }

    #[test]
    fn test_should_compile_explicit_only_service_to_unsupported_fallback() {
        let table = metadata().table("sms-voice").unwrap().unwrap();
        let procedure = compile(&table, &supported()).unwrap();

        assert_eq!(procedure.exceptions().len(), 4);
        assert!(matches!(procedure.fallback(), FallbackRule::Unsupported));
    }

    #[test]
    fn test_should_reject_v4_only_client_for_v2_only_service() {
        let table = metadata().table("sdb").unwrap().unwrap();
        let err = compile(&table, &SupportedSignatureVersions::new(["v4"])).unwrap_err();
        assert!(matches!(err, CompileError::DisjointSignatureVersions { .. }));
    }

    #[test]
    fn test_should_resolve_identically_after_loading_generated_files() {
        let compiled = registry("us-west-2");
        let dir = tempfile::tempdir().unwrap();
        for service in compiled.services() {
            let json = compiled.get(service).unwrap().procedure().to_json_pretty().unwrap();
            fs::write(dir.path().join(format!("{service}.json")), json).unwrap();
        }

        let loaded = EndpointRegistry::load_dir(dir.path(), &AwsRegion::new("us-west-2")).unwrap();
        assert_eq!(loaded.services(), compiled.services());

        for service in compiled.services() {
            for region in [None, Some("cn-north-1"), Some("us-east-1-fips"), Some("eu-west-9")] {
                assert_eq!(
                    loaded.get(service).unwrap().resolve_endpoint(region),
                    compiled.get(service).unwrap().resolve_endpoint(region),
                    "{service} {region:?}"
                );
            }
        }
    }
}
