use apollo_error_builder::Configuration;
use apollo_error_builder::ErrorBuilder;
use apollo_error_builder::Extension;
use apollo_error_builder::GraphQLError;
use apollo_error_builder::with_error;
use apollo_error_builder::with_value;
use serde_json_bytes::Value;
use serde_json_bytes::json;

#[inline(never)]
fn resolve_user(builder: &ErrorBuilder) -> GraphQLError {
    builder.internal_server_error(
        "oops",
        [
            with_value("service", "accounts"),
            with_error(std::io::Error::other("db down")),
        ],
    )
}

fn stacktrace(error: &GraphQLError) -> Option<Vec<String>> {
    let exception = error.extensions.get("exception")?.as_object()?;
    let trace = exception.get("stacktrace")?.as_array()?;
    Some(
        trace
            .iter()
            .map(|entry| entry.as_str().unwrap_or_default().to_string())
            .collect(),
    )
}

#[test]
fn no_stack_trace_by_default() {
    let error = resolve_user(&ErrorBuilder::default());
    assert_eq!(
        Value::Object(error.extensions.clone()),
        json!({
            "code": "INTERNAL_SERVER_ERROR",
            "service": "accounts",
            "exception": { "error": "db down" }
        })
    );
    assert!(stacktrace(&error).is_none());
}

#[test]
fn stack_trace_starts_at_the_caller() {
    let builder = ErrorBuilder::new(Configuration::builder().stack_trace(true).build());
    let error = resolve_user(&builder);

    assert_eq!(error.extensions.get("code"), Some(&json!("INTERNAL_SERVER_ERROR")));
    let trace = stacktrace(&error).expect("stack trace must be captured");
    assert!(!trace.is_empty());
    assert_eq!(trace.len() % 2, 0, "names and locations must alternate");

    for pair in trace.chunks(2) {
        assert!(!pair[0].starts_with(' '), "expected a name, got {:?}", pair[0]);
        assert!(
            pair[1].starts_with("    "),
            "expected a location, got {:?}",
            pair[1]
        );
        assert!(
            !pair[0].starts_with("apollo_error_builder::"),
            "builder frame leaked into the trace: {}",
            pair[0]
        );
    }

    assert!(
        trace[0].contains("resolve_user"),
        "trace should start at the caller, got {}",
        trace[0]
    );
    assert!(
        trace[1].contains("stack_trace.rs:"),
        "caller location should point at this file, got {}",
        trace[1]
    );
}

#[test]
fn stack_trace_from_a_configuration_file() {
    let configuration = Configuration::from_yaml("stack_trace: true").unwrap();
    let error = ErrorBuilder::new(configuration).forbidden_error(
        "no access",
        [with_error(anyhow::anyhow!("token revoked"))],
    );
    let trace = stacktrace(&error).unwrap();
    assert!(trace.iter().any(|entry| entry.contains("stack_trace_from_a_configuration_file")));
}

#[inline(never)]
fn inner_call_site(builder: &ErrorBuilder) -> GraphQLError {
    builder.internal_server_error("inner", [with_error("cache miss")])
}

#[test]
fn nested_build_starts_at_the_inner_caller() {
    let builder = ErrorBuilder::new(Configuration::builder().stack_trace(true).build());
    assert!(builder.configuration().stack_trace);

    let inner_builder = builder.clone();
    let outer = builder.forbidden_error(
        "outer",
        [Extension::from_fn(move |map| {
            let inner = inner_call_site(&inner_builder);
            map.insert("inner", Value::Object(inner.extensions));
        })],
    );

    let inner = outer
        .extensions
        .get("inner")
        .and_then(Value::as_object)
        .expect("inner extensions must be stored");
    let trace: Vec<&str> = inner
        .get("exception")
        .and_then(|exception| exception.get("stacktrace"))
        .and_then(Value::as_array)
        .expect("inner stack trace must be captured")
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert!(
        trace[0].contains("inner_call_site"),
        "trace should start at the inner caller, got {}",
        trace[0]
    );
    assert!(
        trace
            .iter()
            .any(|entry| entry.starts_with("apollo_error_builder::")),
        "the outer build stays in the trace"
    );
}
