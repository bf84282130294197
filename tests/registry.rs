use lingolog::output::ConsoleSink;
use lingolog::{
    Handler, Level, LoggerFactory, MemoryStream, PlainFormatter, Record, Registry,
    SeverityRange, Stream,
};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

fn memory_handler(range: SeverityRange) -> (Handler, MemoryStream) {
    let memory = MemoryStream::new();
    let handler = Handler::new(
        ConsoleSink::new(Stream::Memory(memory.clone())),
        range,
        Arc::new(PlainFormatter::new().template("{level} {msg}")),
    );
    (handler, memory)
}

#[test]
fn flush_all_without_handlers_is_ok() {
    let registry = Registry::new();
    assert!(registry.is_empty());
    registry.flush_all().unwrap();
}

#[test]
fn dispatch_counts_accepting_handlers() {
    let registry = Registry::new();
    let (all, all_memory) = memory_handler(SeverityRange::all());
    let (errors, error_memory) = memory_handler(SeverityRange::at_least(Level::Error));
    registry.attach(all);
    registry.attach(errors);

    assert_eq!(registry.dispatch(&Record::new(Level::Info, "t", "a")), 1);
    assert_eq!(registry.dispatch(&Record::new(Level::Error, "t", "b")), 2);

    assert_eq!(all_memory.lines(), vec!["INFO a", "ERROR b"]);
    assert_eq!(error_memory.lines(), vec!["ERROR b"]);
    registry.flush_all().unwrap();
}

#[test]
fn concurrent_logging_never_interleaves_lines() {
    let registry = Registry::new();
    let (handler, memory) = memory_handler(SeverityRange::all());
    registry.attach(handler);
    let factory = Arc::new(LoggerFactory::new(Arc::clone(&registry)));

    let threads: Vec<_> = (0..8)
        .map(|t| {
            let factory = Arc::clone(&factory);
            thread::spawn(move || {
                let log = factory.get(&format!("worker-{t}"));
                for i in 0..200 {
                    log.warning(&format!("worker [{t}] message [{i}]"));
                }
            })
        })
        .collect();
    for t in threads {
        t.join().unwrap();
    }

    let lines = memory.lines();
    assert_eq!(lines.len(), 8 * 200);

    let expected: HashSet<String> = (0..8)
        .flat_map(|t| (0..200).map(move |i| format!("WARNING worker [{t}] message [{i}]")))
        .collect();
    let seen: HashSet<String> = lines.into_iter().collect();
    assert_eq!(seen, expected);
}
