use answer_gen_tester::clients::{HttpRequest, HttpResponse, Transport, TransportError};
use answer_gen_tester::config::{Config, FileConfig};
use answer_gen_tester::error::InputError;
use answer_gen_tester::{logger, App, AppError, MatchVerdict};
use async_trait::async_trait;
use serde_json::json;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// 按查询内容返回固定响应的假接口
struct FakeAnswerApi {
    calls: AtomicUsize,
}

#[async_trait]
impl Transport for FakeAnswerApi {
    async fn post_json(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let query = request.body["query"].as_str().unwrap_or_default();

        if query.contains("harassment") {
            return Err(TransportError::Network(
                "error sending request: connection reset".to_string(),
            ));
        }

        Ok(HttpResponse {
            status: 200,
            body: json!({
                "response": {
                    "answer": format!("Answer for: {}", query),
                    "answer_payload": {"center_panel": {"data": [
                        {"snippet_content": [
                            {"sources": [{"title": "Kore.ai US Staff Handbook"}, {"title": "Benefits Guide"}]}
                        ]},
                        {"snippet_content": [
                            {"sources": [{"title": "Kore.ai US Staff Handbook"}]}
                        ]}
                    ]}}
                }
            }),
        })
    }
}

fn test_config(output_dir: &Path) -> Config {
    let output_dir = output_dir.display().to_string();
    Config::from_sources(FileConfig::default(), move |name| match name {
        "KORE_ACCOUNT_ID" => Some("test-account".to_string()),
        "KORE_BEARER_TOKEN" => Some("test-token-0123456789".to_string()),
        "ANSWER_API_URL" => Some("http://127.0.0.1:9/answer".to_string()),
        "OUTPUT_DIR" => Some(output_dir.clone()),
        _ => None,
    })
    .expect("配置应该有效")
}

#[tokio::test]
async fn test_batch_end_to_end() {
    logger::init(false);

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("queries.csv");
    std::fs::write(
        &input,
        "id,Query,Source\n\
         1,What is the code of conduct?,Kore.ai-US-Handbook.pdf (pp. 5-7)\n\
         2,How do I report harassment?,Kore.ai-US-Handbook.pdf (pp. 12-14)\n\
         3,,ignored\n\
         4,Where is the cafeteria?,\n\
         5,Which benefits apply?,Travel-Policy.pdf\n",
    )
    .unwrap();

    let api = Arc::new(FakeAnswerApi {
        calls: AtomicUsize::new(0),
    });
    let app = App::with_transport(test_config(dir.path()), api.clone());
    let output = dir.path().join("out/results.csv");

    let report = app
        .run(&input, Some(&output), Duration::from_millis(10))
        .await
        .expect("批处理应该成功");

    assert_eq!(api.calls.load(Ordering::SeqCst), 4);
    assert_eq!(report.records.len(), 4);
    assert_eq!(report.summary.total, 4);
    assert_eq!(report.summary.succeeded, 3);
    assert_eq!(report.summary.failed, 1);
    assert_eq!(report.summary.matched, 1);
    assert_eq!(report.summary.not_matched, 2);

    let verdicts: Vec<MatchVerdict> = report.records.iter().map(|r| r.source_match).collect();
    assert_eq!(
        verdicts,
        vec![
            MatchVerdict::Yes,
            MatchVerdict::No,
            MatchVerdict::NotApplicable,
            MatchVerdict::No
        ]
    );

    let mut reader = csv::Reader::from_path(&output).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
    assert_eq!(
        headers,
        vec![
            "id",
            "Query",
            "Source",
            "API_Success",
            "Status_Code",
            "Answer",
            "Response_Titles",
            "Source_Match",
            "Timestamp",
            "Processing_Time_Seconds"
        ]
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(&rows[0][0], "1");
    assert_eq!(&rows[0][3], "YES");
    assert_eq!(&rows[0][6], "Kore.ai US Staff Handbook; Benefits Guide");
    assert_eq!(&rows[1][3], "NO");
    assert_eq!(&rows[1][4], "NETWORK_ERROR");
    assert_eq!(&rows[1][5], "error sending request: connection reset");
    assert_eq!(&rows[1][6], "No titles found");
    assert_eq!(&rows[2][7], "N/A");
    assert_eq!(rows[3][8].len(), "2025-01-01 00:00:00".len());
}

#[tokio::test]
async fn test_default_output_path_uses_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("queries.csv");
    std::fs::write(&input, "query\nhello\n").unwrap();

    let api = Arc::new(FakeAnswerApi {
        calls: AtomicUsize::new(0),
    });
    let app = App::with_transport(test_config(&dir.path().join("reports")), api);

    let report = app.run(&input, None, Duration::ZERO).await.unwrap();

    assert!(report.output_path.starts_with(dir.path().join("reports")));
    let file_name = report.output_path.file_name().unwrap().to_string_lossy().to_string();
    assert!(file_name.starts_with("answer_results_"));
    assert!(file_name.ends_with(".csv"));
    assert!(report.output_path.exists());
}

#[tokio::test]
async fn test_workbook_in_workbook_out() {
    use calamine::{Reader, Xlsx};

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("queries.xlsx");

    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, " Query ").unwrap();
    sheet.write_string(0, 1, "source_url").unwrap();
    sheet.write_string(1, 0, "What is the code of conduct?").unwrap();
    sheet.write_string(1, 1, "Kore.ai-US-Handbook.pdf (pp. 5-7)").unwrap();
    sheet.write_string(2, 0, "How do I report harassment?").unwrap();
    workbook.save(&input).unwrap();

    let api = Arc::new(FakeAnswerApi {
        calls: AtomicUsize::new(0),
    });
    let app = App::with_transport(test_config(dir.path()), api.clone());
    let output = dir.path().join("results.xlsx");

    let report = app.run(&input, Some(&output), Duration::ZERO).await.unwrap();
    assert_eq!(api.calls.load(Ordering::SeqCst), 2);
    assert_eq!(report.summary.matched, 1);

    let mut results: Xlsx<_> = calamine::open_workbook(&output).unwrap();
    let range = results.worksheet_range_at(0).unwrap().unwrap();
    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0][0], " Query ");
    assert_eq!(rows[0][2], "API_Success");
    assert_eq!(rows[1][6], "YES");
    assert_eq!(rows[2][1], "");
    assert_eq!(rows[2][3], "NETWORK_ERROR");
    assert_eq!(rows[2][6], "N/A");
}

#[tokio::test]
async fn test_missing_query_column_sends_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("queries.csv");
    std::fs::write(&input, "question,source\nhello,x\n").unwrap();

    let api = Arc::new(FakeAnswerApi {
        calls: AtomicUsize::new(0),
    });
    let app = App::with_transport(test_config(dir.path()), api.clone());
    let output = dir.path().join("results.csv");

    let err = app
        .run(&input, Some(&output), Duration::ZERO)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::Input(InputError::MissingQueryColumn { .. })
    ));
    assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    assert!(!output.exists());
}

#[tokio::test]
#[ignore] // 默认忽略，需要真实凭据：cargo test -- --ignored
async fn test_live_answer_api() {
    logger::init(true);

    let config = Config::from_env(None).expect("需要 KORE_ACCOUNT_ID / KORE_BEARER_TOKEN");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("queries.csv");
    std::fs::write(
        &input,
        "query,source\nWhat is the company's code of conduct?,Kore.ai-US-Handbook.pdf (pp. 5-7)\n",
    )
    .unwrap();

    let app = App::initialize(config);
    let report = app
        .run(&input, Some(&dir.path().join("live.json")), Duration::from_secs(1))
        .await
        .expect("批处理应该完成");

    assert_eq!(report.records.len(), 1);
    println!("{:#?}", report.records[0]);
}
