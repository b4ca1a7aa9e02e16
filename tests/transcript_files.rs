use carrinho_voz::transcript::TranscribeDocument;
use carrinho_voz::{Error, parse};
use std::io::Write;

fn write_document(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(json.as_bytes()).expect("Failed to write document");
    file
}

#[test]
fn transcript_file_feeds_the_parser() {
    let file = write_document(
        r#"{"jobName": "job-1", "accountId": "1", "status": "COMPLETED",
            "results": {"transcripts": [{"transcript": "Adicionar vinte e um limões."}], "items": []}}"#,
    );

    let doc = TranscribeDocument::from_path(file.path()).unwrap();
    let text = doc.transcript().unwrap();
    let cmd = parse(&text).outcome.command().cloned().expect("command expected");

    assert_eq!(cmd.item, "limões");
    assert_eq!(cmd.quantity, 21);
}

#[test]
fn failed_job_is_reported() {
    let file = write_document(r#"{"status": "FAILED", "results": {"transcripts": []}}"#);

    let doc = TranscribeDocument::from_path(file.path()).unwrap();
    let err = doc.transcript().unwrap_err();
    assert!(matches!(err, Error::JobNotCompleted(ref s) if s == "FAILED"));
    assert_eq!(err.to_string(), "transcription job did not complete (status: FAILED)");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = TranscribeDocument::from_path(dir.path().join("nope.json"));
    assert!(matches!(result, Err(Error::Io(_))));
}
