//! Call stack capture for `extensions.exception.stacktrace`.

use backtrace::Backtrace;
use backtrace::BacktraceSymbol;

const UNKNOWN: &str = "<unknown>";

/// Symbol prefixes of the frames that belong to the capture itself or to this
/// crate. Leading frames matching one of these are dropped so that the trace
/// starts at the caller of the builder.
const INTERNAL_PREFIXES: &[&str] = &[
    "backtrace::",
    "<backtrace::",
    "apollo_error_builder::",
    "<apollo_error_builder::",
];

/// Capture the current thread's stack as alternating function names and
/// `"    <file>:<line>"` locations.
///
/// Inlined functions share a frame in the native stack but are resolved to
/// their own symbol, so each of them gets its own pair of entries.
///
/// If no symbol can be resolved (a stripped binary), nothing is recognised
/// as internal and the trace is returned whole, starting inside the capture.
pub(crate) fn capture() -> Vec<String> {
    let backtrace = Backtrace::new();
    let symbols: Vec<(String, &BacktraceSymbol)> = backtrace
        .frames()
        .iter()
        .flat_map(|frame| frame.symbols())
        .map(|symbol| (symbol_name(symbol), symbol))
        .collect();
    let names: Vec<&str> = symbols.iter().map(|(name, _)| name.as_str()).collect();
    let start = caller_index(&names);
    let trace = symbols[start..]
        .iter()
        .fold(Vec::new(), |mut trace, (name, symbol)| {
            trace.push(name.clone());
            trace.push(location(symbol));
            trace
        });
    tracing::trace!(frames = trace.len() / 2, "captured stack trace");
    trace
}

fn symbol_name(symbol: &BacktraceSymbol) -> String {
    // The alternate form drops the trailing hash of mangled names.
    symbol
        .name()
        .map(|name| format!("{name:#}"))
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn location(symbol: &BacktraceSymbol) -> String {
    let file = symbol
        .filename()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| UNKNOWN.to_string());
    format!("    {}:{}", file, symbol.lineno().unwrap_or_default())
}

/// Index of the first frame after the innermost run of internal frames.
///
/// The unwinder may report frames of its own above that run. Builds nested
/// in an extension or in an error's `Display` leave more internal frames
/// further out; those belong to the outer build and are kept.
fn caller_index(names: &[&str]) -> usize {
    let Some(first) = names.iter().position(|name| is_internal(name)) else {
        return 0;
    };
    names[first..]
        .iter()
        .position(|name| !is_internal(name))
        .map_or(names.len(), |offset| first + offset)
}

fn is_internal(name: &str) -> bool {
    INTERNAL_PREFIXES
        .iter()
        .any(|prefix| name.starts_with(prefix))
}
