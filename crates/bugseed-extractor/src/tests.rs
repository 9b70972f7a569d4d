//! Cross-module tests for the Extractor

#[cfg(test)]
mod tests {
    use crate::{read_bug_reports, ExtractorConfig, JsonlSink, Pipeline};
    use bugseed_domain::{Document, Entity, OutputRecord, Role, Sentence, Token};
    use bugseed_llm::MockProvider;
    use bugseed_nlp::{NullParser, StaticParser};
    use proptest::prelude::*;

    const CSV: &str = "Bug Report ID,Summary,Steps to Reproduce\n\
BR-1,Upload fails,\"The request failed with HTTP 404 and raised FileNotFoundException at /var/log/app.log\"\n\
BR-2,Crash,\n\
BR-3,Timeout,Wait 30 seconds\n";

    fn read_lines(bytes: Vec<u8>) -> Vec<OutputRecord> {
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_full_extraction_flow() {
        let llm = MockProvider::new(
            r#"[
                {"value": "HTTP 404", "kind": "http_status", "rationale": "reported status", "relevance_score": 5},
                {"value": "/var/log/app.log", "kind": "path", "rationale": "missing file", "relevance_score": 4}
            ]"#,
        );
        let reports = read_bug_reports(CSV.as_bytes()).unwrap();
        let pipeline = Pipeline::new(llm.clone(), NullParser, &ExtractorConfig::default()).unwrap();
        let mut sink = JsonlSink::new(Vec::new());

        let summary = pipeline.run(&reports, &mut sink).unwrap();
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.refined_inputs, 6);
        assert_eq!(llm.call_count(), 3);

        let records = read_lines(sink.into_inner());
        let ids: Vec<&str> = records.iter().map(|r| r.bug_report_id.as_str()).collect();
        assert_eq!(ids, vec!["BR-1", "BR-2", "BR-3"]);
        assert_eq!(records[0].refined_test_inputs[0].value, "HTTP 404");
    }

    #[test]
    fn test_prompt_carries_candidates() {
        let llm = MockProvider::default();
        let reports = read_bug_reports(CSV.as_bytes()).unwrap();
        let pipeline = Pipeline::new(llm.clone(), NullParser, &ExtractorConfig::default()).unwrap();

        pipeline.process(&reports[0]).unwrap();

        let request = llm.last_request().unwrap();
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        let user = &request.messages[1].content;
        assert!(user.contains("Bug Summary: Upload fails\n"));
        assert!(user.contains("\"value\": \"FileNotFoundException\""));
        assert!(user.contains("\"kind\": \"http_status\""));
        assert!(user.contains("\"source\": \"regex\""));
        assert_eq!(request.params.temperature, 0.2);
        assert_eq!(request.params.max_completion_tokens, 600);
    }

    #[test]
    fn test_unparseable_response_yields_empty_record() {
        let llm = MockProvider::new("not json");
        let reports = read_bug_reports(CSV.as_bytes()).unwrap();
        let pipeline = Pipeline::new(llm, NullParser, &ExtractorConfig::default()).unwrap();
        let mut sink = JsonlSink::new(Vec::new());

        let summary = pipeline.run(&reports, &mut sink).unwrap();
        assert_eq!(summary.empty_records, 3);

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            text.lines().nth(1).unwrap(),
            r#"{"bug_report_id":"BR-2","refined_test_inputs":[]}"#
        );
    }

    #[test]
    fn test_linguistic_candidates_follow_literals() {
        let document = Document {
            tokens: vec![
                Token {
                    text: "Wait".to_string(),
                    lemma: "wait".to_string(),
                    pos: "VERB".to_string(),
                    dep: "ROOT".to_string(),
                    head: 0,
                },
                Token {
                    text: "seconds".to_string(),
                    lemma: "second".to_string(),
                    pos: "NOUN".to_string(),
                    dep: "dobj".to_string(),
                    head: 0,
                },
            ],
            sentences: vec![Sentence { start: 0, end: 2 }],
            entities: vec![Entity {
                text: "30 seconds".to_string(),
                label: "TIME".to_string(),
                start: 0,
                end: 2,
            }],
        };
        let pipeline = Pipeline::new(
            MockProvider::default(),
            StaticParser::new(document),
            &ExtractorConfig::default(),
        )
        .unwrap();

        let found = pipeline.candidates("BR-3 Timeout Wait 30 seconds").unwrap();
        let kinds: Vec<String> = found.iter().map(|c| c.kind.to_string()).collect();
        assert_eq!(kinds, vec!["number", "number", "entity_TIME", "action"]);
        assert_eq!(found[3].value, "wait seconds");
    }

    #[test]
    fn test_provider_error_aborts_run() {
        let mut llm = MockProvider::new("[]");
        let reports = read_bug_reports(CSV.as_bytes()).unwrap();
        let pipeline = Pipeline::new(llm.clone(), NullParser, &ExtractorConfig::default()).unwrap();

        // Fail on the second row's prompt
        let candidates = pipeline.candidates(&reports[1].flatten()).unwrap();
        let messages = crate::build_prompt(&reports[1], &candidates).unwrap();
        let failing_prompt = messages[1].content.clone();
        llm.add_error(failing_prompt);

        let mut sink = JsonlSink::new(Vec::new());
        assert!(pipeline.run(&reports, &mut sink).is_err());
        assert_eq!(sink.written(), 1);
    }

    proptest! {
        #[test]
        fn prop_one_record_per_row_in_order(rows in proptest::collection::vec(any::<bool>(), 0..8)) {
            let mut csv = String::from("Bug Report ID,Summary,Steps to Reproduce\n");
            for i in 0..rows.len() {
                csv.push_str(&format!("BR-{i},Report number {i},Step {i}\n"));
            }
            let reports = read_bug_reports(csv.as_bytes()).unwrap();

            let mut llm = MockProvider::default();
            let pipeline = Pipeline::new(llm.clone(), NullParser, &ExtractorConfig::default()).unwrap();
            for (report, parses) in reports.iter().zip(&rows) {
                let candidates = pipeline.candidates(&report.flatten()).unwrap();
                let messages = crate::build_prompt(report, &candidates).unwrap();
                let reply = if *parses {
                    r#"[{"value": "x", "kind": "string", "relevance_score": 3}, {"value": null}]"#
                } else {
                    "not json"
                };
                llm.add_response(messages[1].content.clone(), reply);
            }

            let mut sink = JsonlSink::new(Vec::new());
            let summary = pipeline.run(&reports, &mut sink).unwrap();
            let records = read_lines(sink.into_inner());

            let unparsed = rows.iter().filter(|parses| !**parses).count();
            prop_assert_eq!(summary.rows, rows.len());
            prop_assert_eq!(summary.empty_records, unparsed);
            prop_assert_eq!(summary.refined_inputs, 2 * (rows.len() - unparsed));
            prop_assert_eq!(records.len(), rows.len());
            for (i, (record, parses)) in records.iter().zip(&rows).enumerate() {
                prop_assert_eq!(&record.bug_report_id, &format!("BR-{i}"));
                prop_assert_eq!(record.refined_test_inputs.is_empty(), !*parses);
            }
        }
    }
}
