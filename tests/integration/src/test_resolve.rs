//! Resolution over realistic endpoint metadata.

#[cfg(test)]
mod tests {
    use ruststack_endpoints_core::{EndpointProvider, ResolveError};
    use ruststack_endpoints_model::SignatureVersion;

    use crate::registry;

    #[test]
    fn test_should_resolve_main_partition_region_from_template() {
        let registry = registry("us-east-1");
        let d = registry
            .get("cloudformation")
            .unwrap()
            .resolve_endpoint(Some("eu-west-1"))
            .unwrap();

        assert_eq!(d.endpoint, "https://cloudformation.eu-west-1.amazonaws.com");
        assert_eq!(d.sign_region, "eu-west-1");
        assert_eq!(d.sign_service, "cloudformation");
        assert_eq!(d.sign_versions, vec![SignatureVersion::v4()]);
    }

    #[test]
    fn test_should_resolve_other_partitions() {
        let registry = registry("us-east-1");
        let cfn = registry.get("cloudformation").unwrap();

        let cn = cfn.resolve_endpoint(Some("cn-northwest-1")).unwrap();
        assert_eq!(cn.endpoint, "https://cloudformation.cn-northwest-1.amazonaws.com.cn");
        assert_eq!(cn.sign_region, "cn-northwest-1");

        let iso_b = cfn.resolve_endpoint(Some("us-isob-east-1")).unwrap();
        assert_eq!(iso_b.endpoint, "https://cloudformation.us-isob-east-1.sc2s.sgov.gov");

        let gov = cfn.resolve_endpoint(Some("us-gov-west-1")).unwrap();
        assert_eq!(gov.endpoint, "https://cloudformation.us-gov-west-1.amazonaws.com");
        assert_eq!(gov.sign_region, "us-gov-west-1");
    }

    #[test]
    fn test_should_resolve_fips_alias_with_pinned_sign_region() {
        let registry = registry("us-east-1");
        let d = registry
            .get("rekognition")
            .unwrap()
            .resolve_endpoint(Some("us-west-2-fips"))
            .unwrap();

        assert_eq!(d.endpoint, "https://rekognition-fips.us-west-2.amazonaws.com");
        assert_eq!(d.sign_region, "us-west-2");
    }

    #[test]
    fn test_should_use_global_endpoint_without_region() {
        let registry = registry("eu-central-1");
        let sts = registry.get("sts").unwrap();

        let global = sts.resolve_endpoint(None).unwrap();
        assert_eq!(global.endpoint, "https://sts.amazonaws.com");
        assert_eq!(global.sign_region, "us-east-1");

        assert_eq!(sts.resolve_endpoint(Some("aws-global")).unwrap(), global);

        let regional = sts.resolve_endpoint(Some("us-east-1")).unwrap();
        assert_eq!(regional.endpoint, "https://sts.us-east-1.amazonaws.com");
    }

    #[test]
    fn test_should_match_default_region_when_region_absent() {
        for default_region in ["us-east-1", "ap-southeast-2", "cn-north-1", "eu-west-9"] {
            let registry = registry(default_region);
            for service in ["cloudformation", "rekognition", "sdb"] {
                let endpoints = registry.get(service).unwrap();
                assert_eq!(
                    endpoints.resolve_endpoint(None),
                    endpoints.resolve_endpoint(Some(default_region)),
                    "{service} in {default_region}"
                );
            }
        }
    }

    #[test]
    fn test_should_prefer_explicit_region_over_partition_default() {
        let registry = registry("us-east-1");
        let sdb = registry.get("sdb").unwrap();

        let d = sdb.resolve_endpoint(Some("us-east-1")).unwrap();
        assert_eq!(d.endpoint, "https://sdb.amazonaws.com");
        assert_eq!(d.sign_region, "us-east-1");
        assert_eq!(d.sign_versions, vec![SignatureVersion::v2()]);

        let d = sdb.resolve_endpoint(Some("eu-west-1")).unwrap();
        assert_eq!(d.endpoint, "https://sdb.eu-west-1.amazonaws.com");
    }

    #[test]
    fn test_should_fail_for_region_outside_explicit_only_service() {
        let registry = registry("us-east-1");
        let sms = registry.get("sms-voice").unwrap();

        assert_eq!(
            sms.resolve_endpoint(Some("us-west-2")).unwrap().endpoint,
            "https://sms-voice.pinpoint.us-west-2.amazonaws.com"
        );

        let err = sms.resolve_endpoint(Some("sa-east-1")).unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnsupportedRegion {
                service: "sms-voice".to_owned(),
                region: "sa-east-1".to_owned(),
            }
        );
        assert_eq!(
            err.to_string(),
            r#"The region "sa-east-1" is not supported by "sms-voice"."#
        );
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_should_lookup_regions_case_sensitively() {
        let registry = registry("us-east-1");
        let sms = registry.get("sms-voice").unwrap();
        assert!(sms.resolve_endpoint(Some("US-EAST-1")).is_err());
    }

    #[test]
    fn test_should_serialize_descriptor_as_camel_case_json() {
        let registry = registry("us-east-1");
        let d = registry.get("sts").unwrap().resolve_endpoint(None).unwrap();

        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "endpoint": "https://sts.amazonaws.com",
                "signRegion": "us-east-1",
                "signService": "sts",
                "signVersions": ["v4"],
            })
        );
    }
}
