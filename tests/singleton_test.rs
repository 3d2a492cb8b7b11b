use motif::creational::singleton::eager::Singleton;
use motif::{InitError, LazySingleton, SingletonRegistry, SingletonValue};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_foo_bar_race() {
    let registry = Arc::new(SingletonRegistry::new());

    let r1 = registry.clone();
    let r2 = registry.clone();
    let t1 = thread::spawn(move || {
        let s = r1.get_instance("FOO");
        (s as *const SingletonValue as usize, s.value().to_string())
    });
    let t2 = thread::spawn(move || {
        let s = r2.get_instance("BAR");
        (s as *const SingletonValue as usize, s.value().to_string())
    });

    let (addr1, value1) = t1.join().unwrap();
    let (addr2, value2) = t2.join().unwrap();

    assert_eq!(addr1, addr2);
    assert_eq!(value1, value2);
    assert!(value1 == "FOO" || value1 == "BAR");
}

#[test]
fn test_many_threads_one_construction() {
    const THREADS: usize = 32;
    let cell = LazySingleton::new();
    let constructed = AtomicUsize::new(0);
    let barrier = Barrier::new(THREADS);

    let results: Vec<(usize, String)> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let (cell, constructed, barrier) = (&cell, &constructed, &barrier);
                s.spawn(move || {
                    barrier.wait();
                    let value = cell.get_or_init(|| {
                        constructed.fetch_add(1, Ordering::SeqCst);
                        SingletonValue::new(format!("caller-{i}"))
                    });
                    (value as *const SingletonValue as usize, value.value().to_string())
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    // Exactly one construction, and every caller agrees on its identity and value.
    assert_eq!(constructed.load(Ordering::SeqCst), 1);
    let (addr, value) = &results[0];
    assert!(value.starts_with("caller-"));
    for (a, v) in &results {
        assert_eq!(a, addr);
        assert_eq!(v, value);
    }
}

#[test]
fn test_later_callers_see_initialized_instance() {
    let registry = SingletonRegistry::new();
    let first = registry.get_instance("first");

    thread::scope(|s| {
        for i in 0..8 {
            let registry = &registry;
            s.spawn(move || {
                assert!(registry.is_initialized());
                let seen = registry.get_instance(format!("late-{i}"));
                assert!(std::ptr::eq(seen, first));
            });
        }
    });
}

#[test]
fn test_concurrent_failures_then_success() {
    const THREADS: usize = 8;
    let registry = SingletonRegistry::new();
    let attempts = AtomicUsize::new(0);
    let barrier = Barrier::new(THREADS);

    let failures = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let (registry, attempts, barrier) = (&registry, &attempts, &barrier);
                s.spawn(move || {
                    barrier.wait();
                    registry.try_get_instance(|| {
                        attempts.fetch_add(1, Ordering::SeqCst);
                        Err::<SingletonValue, _>("backend unavailable")
                    })
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|r| matches!(r, Err(InitError::InitializationFailed(_))))
            .count()
    });

    // Nothing is cached: each caller ran its own initializer and saw its own error.
    assert_eq!(failures, THREADS);
    assert_eq!(attempts.load(Ordering::SeqCst), THREADS);
    assert!(!registry.is_initialized());

    let value = registry
        .try_get_instance(|| Ok::<_, &str>(SingletonValue::new("recovered")))
        .unwrap();
    assert_eq!(value.value(), "recovered");
}

#[test]
fn test_error_display_and_source() {
    let err: InitError<std::io::Error> = InitError::InitializationFailed(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "missing",
    ));
    assert_eq!(err.to_string(), "singleton initialization failed: missing");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_eager_singleton_across_threads() {
    let here = Singleton::instance() as *const Singleton as usize;
    let there = thread::spawn(|| Singleton::instance() as *const Singleton as usize)
        .join()
        .unwrap();
    assert_eq!(here, there);
}

#[test]
fn test_singleton_value_serde() {
    let value = SingletonValue::new("FOO");
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, r#"{"value":"FOO"}"#);
    let back: SingletonValue = serde_json::from_str(&json).unwrap();
    assert_eq!(back, value);
}
