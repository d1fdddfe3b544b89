    use super::*;

    fn payment(value: serde_json::Value) -> Payment {
        serde_json::from_value(value).expect("parse payment")
    }

    #[test]
    fn balance_rows_resolve_issuer_names() {
        let balances: Vec<Balance> = serde_json::from_value(serde_json::json!([
            { "currency": "USD", "value": "1.5", "counterparty": "rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B" },
            { "currency": "XRP", "value": "20", "counterparty": "" }
        ]))
        .expect("parse balances");
        let rows = balance_rows(&balances, &IssuerDirectory::default());
        assert_eq!(rows[0], vec!["USD", "1.5", "rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B", "Bitstamp"]);
        assert_eq!(rows[1], vec!["XRP", "20", "", ""]);
    }

    #[test]
    fn trustline_rows_show_rippling_flag() {
        let lines: Vec<TrustLine> = serde_json::from_value(serde_json::json!([
            { "currency": "USD", "limit": "100", "counterparty": "rX", "account_allows_rippling": true }
        ]))
        .expect("parse trustlines");
        let rows = trustline_rows(&lines, &IssuerDirectory::default());
        assert_eq!(rows[0], vec!["USD", "100", "true", "rX", ""]);
    }

    #[test]
    fn order_rows_annotate_currency_and_price() {
        let orders: Vec<Order> = serde_json::from_value(serde_json::json!([
            {
                "sequence": 7,
                "type": "sell",
                "taker_gets": { "currency": "USD", "counterparty": "rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B", "value": "10" },
                "taker_pays": { "currency": "BTC", "counterparty": "rOTHER", "value": "5" }
            },
            {
                "sequence": "8",
                "type": "buy",
                "taker_gets": { "currency": "XRP", "value": "4" },
                "taker_pays": { "currency": "USD", "counterparty": "", "value": "1" }
            }
        ]))
        .expect("parse orders");
        let rows = order_rows(&orders, &IssuerDirectory::default());
        assert_eq!(
            rows[0],
            vec![
                "7",
                "sell",
                "10",
                "USD(Bitstamp)",
                "for",
                "5",
                "BTC(rOTHER)",
                "0.5 BTC per USD"
            ]
        );
        assert_eq!(rows[1][4], "with");
        assert_eq!(rows[1][3], "XRP");
        assert_eq!(rows[1][7], "0.25 USD per XRP");
    }

    #[test]
    fn payment_direction_follows_source_account() {
        let p = payment(serde_json::json!({
            "source_account": "rME",
            "destination_account": "rYOU",
            "destination_amount": { "value": "5", "currency": "USD", "issuer": "rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B" },
            "timestamp": "2015-01-02T03:04:05.000Z",
            "result": "tesSUCCESS"
        }));
        let row = payment_row(&p, "rME", &IssuerDirectory::default(), &Clock::utc());
        assert_eq!(
            row,
            vec![
                "2015-01-02 03:04:05",
                "Sent",
                "5",
                "USD",
                "rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B",
                "Bitstamp",
                "to",
                "rYOU",
                "true"
            ]
        );

        let row = payment_row(&p, "rYOU", &IssuerDirectory::default(), &Clock::utc());
        assert_eq!(row[1], "Received");
        assert_eq!(row[6], "from");
        assert_eq!(row[7], "rME");
    }

    #[test]
    fn failed_payment_and_odd_timestamp() {
        let p = payment(serde_json::json!({
            "source_account": "rME",
            "destination_account": "rYOU",
            "destination_amount": { "value": "5", "currency": "XRP" },
            "timestamp": "",
            "result": "tecPATH_DRY"
        }));
        let row = payment_row(&p, "rME", &IssuerDirectory::default(), &Clock::utc());
        assert_eq!(row[0], "");
        assert_eq!(row[8], "false");
    }

    #[test]
    fn clock_applies_offset_and_names_timezone() -> anyhow::Result<()> {
        let clock = Clock::with_offset(time::UtcOffset::from_hms(9, 0, 0)?);
        assert_eq!(
            clock.format_timestamp("2015-01-02T20:00:00Z"),
            "2015-01-03 05:00:00"
        );
        assert_eq!(clock.timezone(), "UTC+09:00");

        let clock = Clock::with_offset(time::UtcOffset::from_hms(-3, -30, 0)?);
        assert_eq!(clock.timezone(), "UTC-03:30");
        assert_eq!(Clock::utc().timezone(), "UTC+00:00");
        Ok(())
    }
