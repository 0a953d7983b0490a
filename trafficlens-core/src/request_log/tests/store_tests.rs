use crate::request_log::{MemoryStore, QueryError, RequestFilter, RequestStore};
use pretty_assertions::assert_eq;
use std::io::Cursor;

const LOG: &str = r#"
{"time":"2024-05-15T10:00:00Z","path":"/first","response":200}
{"time":"2024-05-15T11:00:00Z","method":"POST","path":"/second","response":201,"referer":"https://www.google.com/search?q=x","ip":"10.0.0.1","is_ajax":true}

{"time":"2024-05-15T09:00:00Z","path":"/zeroth","response":404,"user_agent":"curl/8.0"}
"#;

#[test]
fn json_lines_load_newest_first() {
    // Arrange / Act
    let store = MemoryStore::from_json_lines(Cursor::new(LOG)).unwrap();

    // Assert
    let records = store.fetch(&RequestFilter::default()).unwrap();
    let paths: Vec<&str> = records.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(store.len(), 3);
    assert_eq!(paths, vec!["/second", "/first", "/zeroth"]);
    assert_eq!(records[0].method, "POST");
    assert_eq!(records[1].method, "GET");
    assert!(records[0].is_ajax);
}

#[test]
fn bad_line_reports_its_number() {
    let log = "{\"time\":\"2024-05-15T10:00:00Z\",\"path\":\"/\",\"response\":200}\n{oops}\n";

    let err = MemoryStore::from_json_lines(Cursor::new(log)).unwrap_err();

    assert!(matches!(err, QueryError::Decode { line: 2, .. }));
}

#[test]
fn empty_log_is_empty_store() {
    let store = MemoryStore::from_json_lines(Cursor::new("")).unwrap();

    assert!(store.is_empty());
}

#[test]
fn equal_timestamps_keep_insertion_order() {
    let log = "{\"time\":\"2024-05-15T10:00:00Z\",\"path\":\"/a\",\"response\":200}\n\
               {\"time\":\"2024-05-15T10:00:00Z\",\"path\":\"/b\",\"response\":200}\n";

    let store = MemoryStore::from_json_lines(Cursor::new(log)).unwrap();
    let records = store.fetch(&RequestFilter::default()).unwrap();

    assert_eq!(records[0].path, "/a");
    assert_eq!(records[1].path, "/b");
}
