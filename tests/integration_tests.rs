//! Integration tests for the pretty formatter
//!
//! These tests verify:
//! - End-to-end rendering of NestJS-style records
//! - Column alignment across consecutive records
//! - Silent drop of malformed records, with diagnostics
//! - Option resolution from host JSON options
//! - Appenders writing to arbitrary destinations

use nest_pretty_formatter::appenders::{Appender, PrettyWriterAppender};
use nest_pretty_formatter::core::colors::{ColorName, ColorTable};
use nest_pretty_formatter::core::config::{FormatterConfig, PrettyOptions};
use nest_pretty_formatter::core::field_formatter::{FieldOptions, FieldSpec};
use nest_pretty_formatter::core::log_level::LogLevel;
use nest_pretty_formatter::core::log_record::LogRecord;
use nest_pretty_formatter::core::renderer::{DiagnosticSink, RecordRenderer};
use nest_pretty_formatter::core::timestamp::ZoneShift;
use std::sync::{Arc, Mutex};
use std::thread;

// 2025-01-08 10:30:45.123 UTC
const FIXED_MILLIS: i64 = 1_736_332_245_123;

fn utc_renderer(config: FormatterConfig) -> RecordRenderer {
    RecordRenderer::new(config.with_zone_shift(ZoneShift::Utc)).expect("valid config")
}

fn nest_record(context: &str, message: &str) -> LogRecord {
    LogRecord::new()
        .with_time(FIXED_MILLIS)
        .with_level(LogLevel::Info)
        .with_pid(1234)
        .with_hostname("h")
        .with_context(context)
        .with_message(message)
}

/// Color table wrapping each part in its color name, so tests can see which
/// color was applied to which substring
fn tagging_colors() -> ColorTable {
    ColorName::ALL
        .into_iter()
        .fold(ColorTable::new(), |table, name| {
            table.with_color(name, move |s| format!("<{}>{}</{}>", name, s, name))
        })
}

#[test]
fn test_end_to_end_info_record() {
    let mut renderer = utc_renderer(FormatterConfig::new());
    let line = renderer
        .render(&nest_record("AppModule", "starting"), &tagging_colors())
        .expect("record renders");

    assert_eq!(
        line,
        "<blue>ᐅ</blue> <white>2025-01-08T10:30:45.123</white> - \
         <greenBright>(1234)</greenBright> <yellow>[AppModule]       </yellow> \
         <blue>starting</blue>"
    );
    assert!(!line.contains('Z'));
}

#[test]
fn test_local_time_shift() {
    let offset = chrono::FixedOffset::east_opt(9 * 3600).unwrap();
    let config = FormatterConfig::new().with_zone_shift(ZoneShift::Fixed(offset));
    let mut renderer = RecordRenderer::new(config).unwrap();

    let line = renderer
        .render(&nest_record("AppModule", "starting"), &ColorTable::plain())
        .unwrap();
    assert!(line.contains(" 2025-01-08T19:30:45.123 - "));
}

#[test]
fn test_columns_stay_aligned() {
    let mut renderer = utc_renderer(FormatterConfig::new());
    let colors = ColorTable::plain();

    let lines: Vec<String> = [
        ("NestFactory", "Starting Nest application..."),
        ("InstanceLoader", "AppModule dependencies initialized"),
        ("RoutesResolver", "AppController {/}:"),
        ("NestApplication", "Nest application successfully started"),
    ]
    .iter()
    .map(|(context, message)| renderer.render(&nest_record(context, message), &colors).unwrap())
    .collect();

    let message_columns: Vec<usize> = lines
        .iter()
        .zip(["Starting", "AppModule", "AppController", "Nest application"])
        .map(|(line, message)| line.rfind(message).unwrap())
        .collect();
    assert!(message_columns.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn test_context_growth_is_capped() {
    let spec = FieldSpec::new(8, "[", "]", FieldOptions::auto_resize().with_length_max(10));
    let mut renderer = utc_renderer(FormatterConfig::new().with_context_field(spec));
    let colors = ColorTable::plain();

    let line = renderer
        .render(&nest_record("VeryLongContextName", "m"), &colors)
        .unwrap();
    assert!(line.contains("[VeryLongC.] m"));

    let line = renderer.render(&nest_record("Short", "m"), &colors).unwrap();
    assert!(line.contains("[Short]      m"));
}

#[test]
fn test_all_decorations() {
    let config = FormatterConfig::new()
        .with_show_host_name(true)
        .with_show_level_label(true)
        .with_worker("4")
        .with_context_root("Api");
    let mut renderer = utc_renderer(config);
    let record = nest_record("Users", "created").with_level(LogLevel::Warn);

    let line = renderer.render(&record, &tagging_colors()).unwrap();
    assert_eq!(
        line,
        "<yellowBright>۩</yellowBright> <white>2025-01-08T10:30:45.123</white> - \
         <greenBright>h:(1234)</greenBright> <magentaBright>#4</magentaBright> \
         <cyanBright>Api</cyanBright> <yellow>[Users]           </yellow> | \
         <yellowBright>WARN</yellowBright> <yellowBright>created</yellowBright>"
    );
}

#[test]
fn test_malformed_records_are_dropped() {
    let reports = Arc::new(Mutex::new(Vec::new()));
    let sink_reports = Arc::clone(&reports);
    let mut renderer = utc_renderer(FormatterConfig::new()).with_diagnostics(DiagnosticSink::new(
        move |error| sink_reports.lock().unwrap().push(error.to_string()),
    ));
    let colors = ColorTable::plain();

    let mut no_level = nest_record("AppModule", "lost");
    no_level.level = None;
    assert!(renderer.render(&no_level, &colors).is_none());

    let mut no_time = nest_record("AppModule", "lost");
    no_time.time = None;
    assert!(renderer.render(&no_time, &colors).is_none());

    assert!(renderer.render_json("{\"level\":", &colors).is_none());

    // a good record still renders afterwards
    assert!(renderer
        .render(&nest_record("AppModule", "kept"), &colors)
        .is_some());

    let reports = reports.lock().unwrap();
    assert_eq!(reports.len(), 3);
    assert!(reports[0].contains("'level'"));
    assert!(reports[1].contains("'time'"));
    assert!(reports[2].starts_with("JSON error"));

    assert_eq!(renderer.metrics().dropped_count(), 3);
    assert_eq!(renderer.metrics().rendered_count(), 1);
    assert_eq!(renderer.metrics().drop_rate(), 75.0);
}

#[test]
fn test_options_drive_rendering() {
    let options = PrettyOptions::from_json(
        r#"{
            "showLevelLabel": true,
            "messageKey": "message",
            "iconLevels": {"info": "i", "default": "?"},
            "customLevels": {"http": 25},
            "colorize": false
        }"#,
    )
    .unwrap();
    let config = options.into_config().unwrap().with_zone_shift(ZoneShift::Utc);
    let mut renderer = RecordRenderer::new(config).unwrap();
    let colors = ColorTable::plain();

    let record = LogRecord::new()
        .with_time(0)
        .with_level_code(25)
        .with_pid(9)
        .with_context("Http")
        .with_field("message", "GET /");
    assert_eq!(
        renderer.render(&record, &colors).unwrap(),
        "? 1970-01-01T00:00:00.000 - (9) [Http]             | HTTP GET /"
    );

    let record = record.with_level(LogLevel::Info);
    assert!(renderer.render(&record, &colors).unwrap().starts_with("i "));
}

#[test]
fn test_writer_appender_from_pino_lines() {
    let options = PrettyOptions::from_json(r#"{"colorize": false, "sync": true}"#).unwrap();
    let config_check = options.clone().into_config().unwrap();
    assert_eq!(config_check.message_key, "msg");

    let renderer = utc_renderer(options.clone().into_config().unwrap());
    let mut appender = PrettyWriterAppender::from_options(Vec::new(), options)
        .unwrap()
        .with_renderer(renderer);

    let lines = [
        r#"{"level":30,"time":0,"pid":42,"hostname":"h","context":"Boot","msg":"up"}"#,
        r#"{"level":50,"time":1000,"pid":42,"hostname":"h","context":"Db","msg":"down"}"#,
        r#"{"time":2000,"msg":"no level"}"#,
    ];
    for line in lines {
        let record = LogRecord::from_json(line).unwrap();
        appender.append(&record).unwrap();
    }
    appender.flush().unwrap();

    assert_eq!(appender.metrics().rendered_count(), 2);
    assert_eq!(appender.metrics().dropped_count(), 1);

    let output = String::from_utf8(appender.into_inner().unwrap()).unwrap();
    assert_eq!(
        output,
        "ᐅ 1970-01-01T00:00:00.000 - (42) [Boot]             up\n\
         ᘿ 1970-01-01T00:00:01.000 - (42) [Db]               down\n"
    );
}

#[test]
fn test_renderer_shared_across_threads() {
    let renderer = Arc::new(Mutex::new(utc_renderer(FormatterConfig::new())));
    let colors = Arc::new(ColorTable::plain());
    let mut handles = vec![];

    for i in 0..4 {
        let renderer = Arc::clone(&renderer);
        let colors = Arc::clone(&colors);
        handles.push(thread::spawn(move || {
            for j in 0..25 {
                let record = nest_record(&format!("Worker{}", i), &format!("job {}", j));
                let line = renderer.lock().unwrap().render(&record, &colors);
                assert!(line.is_some());
            }
        }));
    }

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let renderer = renderer.lock().unwrap();
    assert_eq!(renderer.metrics().rendered_count(), 100);
    assert_eq!(renderer.metrics().dropped_count(), 0);
}
