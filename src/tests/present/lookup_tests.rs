    use super::*;

    #[test]
    fn known_result_codes_are_described() {
        let text = describe_result("tesSUCCESS");
        assert!(text.starts_with("tesSUCCESS: "));
        assert!(text.contains("applied"));
    }

    #[test]
    fn unknown_result_codes_pass_through() {
        assert_eq!(describe_result("tecSOMETHING_NEW"), "tecSOMETHING_NEW");
        assert_eq!(describe_result(""), "");
    }

    #[test]
    fn issuer_lookup_with_fallbacks() {
        let dir = IssuerDirectory::default();
        assert_eq!(dir.name("rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B"), Some("Bitstamp"));
        assert_eq!(dir.name_or_empty("rUNKNOWN"), "");
        assert_eq!(dir.name_or_address("rUNKNOWN"), "rUNKNOWN");
    }

    #[test]
    fn extra_issuers_override_builtins() {
        let mut extra = BTreeMap::new();
        extra.insert(
            "rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B".to_string(),
            "BS".to_string(),
        );
        extra.insert("rMINE".to_string(), "Mine".to_string());
        let dir = IssuerDirectory::with_extra(extra);
        assert_eq!(dir.name("rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B"), Some("BS"));
        assert_eq!(dir.name("rMINE"), Some("Mine"));
    }
