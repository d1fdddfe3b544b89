    use super::*;

    #[test]
    fn renders_header_rows_and_border() {
        let mut table = Table::new(TableKind::Balance);
        table.replace(vec![
            vec![
                "USD".to_string(),
                "12.5".to_string(),
                "rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B".to_string(),
                "Bitstamp".to_string(),
            ],
            vec![
                "XRP".to_string(),
                "1000".to_string(),
                String::new(),
                String::new(),
            ],
        ]);

        let text = table.render();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with('┌'));
        assert!(lines[4].starts_with('└'));
        assert!(lines[1].contains("Currency"));
        assert!(lines[1].contains("Name"));
        assert!(lines[2].contains("USD"));
        assert!(lines[2].contains("rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B"));
        assert!(lines[2].contains("Bitstamp"));
        assert!(lines[3].contains("1000"));
    }

    #[test]
    fn replace_discards_previous_rows() {
        let mut table = Table::new(TableKind::TrustLine);
        table.replace(vec![vec!["USD".to_string(); 5]]);
        table.replace(vec![vec!["EUR".to_string(); 5]]);
        assert_eq!(table.rows().len(), 1);
        let text = table.render();
        assert!(text.contains("EUR"));
        assert!(!text.contains("USD"));

        table.replace(Vec::new());
        assert_eq!(table.render().lines().count(), 3);
    }

    #[test]
    fn columns_are_wide_enough_for_content() {
        let mut table = Table::new(TableKind::Order);
        let long = "0.00012345678901234567 BTC per USD".to_string();
        table.replace(vec![vec![
            "7".to_string(),
            "sell".to_string(),
            "10".to_string(),
            "USD".to_string(),
            "for".to_string(),
            "1".to_string(),
            "BTC".to_string(),
            long.clone(),
        ]]);
        assert!(table.render().contains(&long));
    }

    #[test]
    fn wide_characters_keep_borders_aligned() {
        let mut table = Table::new(TableKind::Balance);
        table.replace(vec![
            vec![
                "CNY".to_string(),
                "1".to_string(),
                "rX".to_string(),
                "瑞波中国".to_string(),
            ],
            vec![
                "USD".to_string(),
                "2".to_string(),
                "rY".to_string(),
                "Bitstamp".to_string(),
            ],
        ]);

        let text = table.render();
        assert!(text.contains("瑞波中国"));
        let widths = text
            .lines()
            .map(|l| Span::raw(l).width())
            .collect::<Vec<_>>();
        assert_eq!(widths.len(), 5);
        assert!(widths.iter().all(|w| *w == widths[0]), "{:?}\n{}", widths, text);
    }
