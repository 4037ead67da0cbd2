// Interning across threads and renderers

use kas_text_style::{DefaultPolicy, Renderer, StyleCache, StyleRequest, TextStyle};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn renderers_share_one_cache() {
    let cache = StyleCache::new();
    let a = Renderer::with_cache(&cache);
    let b = Renderer::with_policy(
        &cache,
        DefaultPolicy {
            bold_divisor: 0,
            ..Default::default()
        },
    );

    a.render("Hello Flyweight! ").unwrap();
    b.render("Hello Flyweight! ").unwrap();
    // b only requests the normal style, which a already installed
    assert_eq!(cache.size(), 2);

    let ga = a.glyphs("H").unwrap();
    let gb = b.glyphs("H").unwrap();
    assert!(Arc::ptr_eq(ga[0].style(), gb[0].style()));
}

#[test]
fn concurrent_renders() {
    const THREADS: usize = 100;
    let cache = StyleCache::new();
    let barrier = Barrier::new(THREADS);
    let text = "Hello Flyweight! ".repeat(20);

    let (cache_ref, barrier, text) = (&cache, &barrier, text.as_str());
    let costs: Vec<u64> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(move || {
                    let renderer = Renderer::with_cache(cache_ref);
                    barrier.wait();
                    renderer.render(text).unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(costs.iter().all(|cost| *cost == 20 * 268));
    assert_eq!(cache.size(), 2);
    assert_eq!(cache.stats().misses, 2);
}

#[test]
fn concurrent_distinct_and_shared_keys() {
    const THREADS: usize = 128;
    let cache = StyleCache::new();
    let barrier = Barrier::new(THREADS);

    let (cache_ref, barrier) = (&cache, &barrier);
    let styles: Vec<(usize, Arc<TextStyle>)> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                s.spawn(move || {
                    barrier.wait();
                    let size = i32::try_from(i % 4).unwrap();
                    (i % 4, cache_ref.get_or_create("Inter", size, false).unwrap())
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(cache.size(), 4);
    for (group, style) in &styles {
        let canonical = cache
            .get("Inter", i32::try_from(*group).unwrap(), false)
            .unwrap();
        assert!(Arc::ptr_eq(style, &canonical));
    }
}

#[test]
fn diverse_text_grows_with_styles_not_length() {
    let cache = StyleCache::new();
    let policy = |c: char| StyleRequest {
        font: "Inter",
        size: if c.is_ascii_uppercase() { 18 } else { 12 },
        bold: c.is_ascii_digit(),
    };
    let renderer = Renderer::with_policy(&cache, policy);

    let text = "abc ABC 123 ".repeat(5000);
    let cost = renderer.render(&text).unwrap();
    // per repeat: 3×12 + 3×18 + 3×22 + 3 spaces ×12
    assert_eq!(cost, 5000 * (36 + 54 + 66 + 36));
    assert_eq!(cache.size(), 3);
}
