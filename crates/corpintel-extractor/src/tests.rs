//! End-to-end pipeline tests against the mock backend

#[cfg(test)]
mod tests {
    use crate::{
        templates, Analyzer, Bindings, CompanyIntel, IntelConfig, IntelError, Lookup,
        PromptTemplate,
    };
    use corpintel_domain::{Identifier, Intent, NOT_AVAILABLE};
    use corpintel_llm::MockProvider;

    fn company_prompt(text: &str) -> String {
        let bindings: Bindings = [("text", text)].into_iter().collect();
        templates::COMPANY_EXTRACTION.render(&bindings).unwrap()
    }

    fn lookup_prompt(template: PromptTemplate, name: &str) -> String {
        let bindings: Bindings = [("company_name", name), ("company_ticker", NOT_AVAILABLE)]
            .into_iter()
            .collect();
        template.render(&bindings).unwrap()
    }

    #[test]
    fn test_extract_companies_sorted_and_clean() {
        let llm = MockProvider::new(r#"["Zebra", "Apple", "", 7, "Microsoft"]"#);
        let intel = CompanyIntel::new(llm, IntelConfig::default());

        let companies = intel
            .extract_companies("Zebra Corp, Apple Inc, and Microsoft LLC")
            .unwrap();
        assert_eq!(companies, vec!["Apple", "Microsoft", "Zebra"]);
    }

    #[test]
    fn test_extract_companies_keeps_duplicates() {
        let llm = MockProvider::new(r#"["Apple", "Apple"]"#);
        let intel = CompanyIntel::new(llm, IntelConfig::default());

        let companies = intel
            .extract_companies("Apple Inc and Apple Corporation")
            .unwrap();
        assert_eq!(companies, vec!["Apple", "Apple"]);
    }

    #[test]
    fn test_suffix_stripped_company_is_returned() {
        let mut llm = MockProvider::new("[]");
        llm.add_response(company_prompt("Apple Inc is a technology company"), r#"["Apple"]"#);
        let intel = CompanyIntel::new(llm, IntelConfig::default());

        let companies = intel
            .extract_companies("Apple Inc is a technology company")
            .unwrap();
        assert!(companies.contains(&"Apple".to_string()));
    }

    #[test]
    fn test_malformed_reply_is_an_error() {
        let llm = MockProvider::new("Sure! Here are the companies: Apple, Google");
        let intel = CompanyIntel::new(llm, IntelConfig::default());

        let result = intel.extract_companies("Apple and Google");
        assert!(matches!(result, Err(IntelError::MalformedResponse(_))));

        let result = intel.find_competitors(&Identifier::CompanyName("Apple".to_string()));
        assert!(matches!(result, Err(IntelError::MalformedResponse(_))));
    }

    #[test]
    fn test_competitors_for_alphabet() {
        let llm = MockProvider::new(
            r#"[
                {"rank": 1, "company_name": "Microsoft", "ticker": "MSFT", "reason": "Search and cloud"},
                {"rank": 2, "company_name": "Amazon", "ticker": "AMZN", "reason": "Cloud and ads"},
                {"rank": 3, "company_name": "Meta Platforms", "ticker": "META"}
            ]"#,
        );
        let intel = CompanyIntel::new(llm, IntelConfig::default());

        let competitors = intel
            .find_competitors(&Identifier::CompanyName("Alphabet".to_string()))
            .unwrap();

        assert_eq!(competitors.len(), 2);
        assert_eq!(competitors[0].rank, 1);
        for competitor in &competitors {
            assert!(!competitor.company_name.is_empty());
            assert!(!competitor.ticker.is_empty());
            assert!(!competitor.reason.is_empty());
        }
    }

    #[test]
    fn test_subsidiaries_keep_required_keys() {
        let llm = MockProvider::new(
            r#"```json
[
    {"company_name": "YouTube LLC", "ticker": "N/A", "details": "Acquired in 2006"},
    {"company_name": "Calico", "ticker": "", "details": "Longevity research"},
    {"ticker": "N/A", "details": "Nameless"}
]
```"#,
        );
        let intel = CompanyIntel::new(llm, IntelConfig::default());

        let subsidiaries = intel
            .find_subsidiaries(&Identifier::from_parts(Some("Alphabet"), Some("GOOGL")))
            .unwrap();

        assert_eq!(subsidiaries.len(), 2);
        assert_eq!(subsidiaries[1].ticker, NOT_AVAILABLE);
    }

    #[test]
    fn test_missing_credential_before_any_call() {
        let llm = MockProvider::without_credential();
        let intel = CompanyIntel::new(llm.clone(), IntelConfig::default());

        let result = intel.find_subsidiaries(&Identifier::Ticker("AAPL".to_string()));
        assert!(matches!(result, Err(IntelError::MissingCredential)));
        assert_eq!(llm.call_count(), 0);

        // Empty input still short-circuits before the credential matters
        assert!(intel.extract_companies("").unwrap().is_empty());
    }

    #[test]
    fn test_blocking_operations_from_sync_test() {
        let llm = MockProvider::new(r#"["Netflix"]"#);
        let analyzer = Analyzer::new(CompanyIntel::new(llm, IntelConfig::default()));

        let companies = tokio_test::block_on(
            analyzer.companies("The company called Netflix is a streaming service"),
        )
        .unwrap();
        assert_eq!(companies, vec!["Netflix"]);
    }

    #[tokio::test]
    async fn test_full_competitor_flow() {
        let prompt = "I want to track news related to alphabet and it's competitors";

        let mut llm = MockProvider::new("[]");
        llm.add_response(company_prompt(prompt), r#"["Microsoft", "Alphabet"]"#);
        llm.add_response(
            lookup_prompt(templates::COMPETITORS, "Alphabet"),
            r#"[{"rank": 1, "company_name": "Microsoft", "ticker": "MSFT", "reason": "Search"}]"#,
        );
        llm.add_response(
            lookup_prompt(templates::COMPETITORS, "Microsoft"),
            r#"[{"rank": 1, "company_name": "Alphabet", "ticker": "GOOGL", "reason": "Cloud"},
                {"rank": 2, "company_name": "Amazon", "ticker": "AMZN", "reason": "Cloud"}]"#,
        );

        let config = IntelConfig {
            max_concurrency: 2,
            ..IntelConfig::default()
        };
        let analyzer = Analyzer::new(CompanyIntel::new(llm.clone(), config));

        let analysis = analyzer.analyze(prompt).await.unwrap();

        assert_eq!(analysis.companies, vec!["Alphabet", "Microsoft"]);
        assert_eq!(analysis.intent, Intent::Competitors);
        assert_eq!(analysis.findings.len(), 2);
        assert_eq!(analysis.findings[0].company, "Alphabet");
        assert_eq!(analysis.findings[1].company, "Microsoft");

        match &analysis.findings[1].lookup {
            Lookup::Competitors(records) => {
                assert_eq!(records.len(), 2);
                assert_eq!(records[0].company_name, "Alphabet");
            }
            other => panic!("Expected competitors, got {:?}", other),
        }

        // One extraction call plus one lookup per company
        assert_eq!(llm.call_count(), 3);
    }

    #[tokio::test]
    async fn test_full_subsidiary_flow() {
        let prompt = "Which subsidiaries does Alphabet own?";

        let mut llm = MockProvider::new("[]");
        llm.add_response(company_prompt(prompt), r#"["Alphabet"]"#);
        llm.add_response(
            lookup_prompt(templates::SUBSIDIARIES, "Alphabet"),
            r#"[{"company_name": "Waymo LLC", "ticker": "N/A", "details": "Self-driving"}]"#,
        );

        let analyzer = Analyzer::new(CompanyIntel::new(llm, IntelConfig::default()));
        let analysis = analyzer.analyze(prompt).await.unwrap();

        assert_eq!(analysis.intent, Intent::Subsidiaries);
        assert_eq!(analysis.findings.len(), 1);
        match &analysis.findings[0].lookup {
            Lookup::Subsidiaries(records) => assert_eq!(records[0].company_name, "Waymo LLC"),
            other => panic!("Expected subsidiaries, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failing_lookup_aborts_analysis() {
        let prompt = "Tesla vs Ford";

        let mut llm = MockProvider::new("[]");
        llm.add_response(company_prompt(prompt), r#"["Ford", "Tesla"]"#);
        llm.add_error(lookup_prompt(templates::COMPETITORS, "Tesla"));

        let analyzer = Analyzer::new(CompanyIntel::new(llm, IntelConfig::default()));
        let result = analyzer.analyze(prompt).await;

        assert!(matches!(result, Err(IntelError::Backend(_))));
    }

    #[tokio::test]
    async fn test_finding_serialises_with_kind_tag() {
        let prompt = "Apple rivals";

        let mut llm = MockProvider::new("[]");
        llm.add_response(company_prompt(prompt), r#"["Apple"]"#);
        llm.add_response(
            lookup_prompt(templates::COMPETITORS, "Apple"),
            r#"[{"rank": 1, "company_name": "Samsung", "ticker": "005930.KS", "reason": "Phones"}]"#,
        );

        let analyzer = Analyzer::new(CompanyIntel::new(llm, IntelConfig::default()));
        let analysis = analyzer.analyze(prompt).await.unwrap();

        let json = serde_json::to_value(&analysis.findings[0]).unwrap();
        assert_eq!(json["company"], "Apple");
        assert_eq!(json["kind"], "competitors");
        assert_eq!(json["records"][0]["rank"], 1);
        assert_eq!(json["records"][0]["ticker"], "005930.KS");
    }
}
