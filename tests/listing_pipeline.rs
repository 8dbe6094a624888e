use folio::{collect_listings, ArticleStore, ListingOptions, MetaError, StopwordSet};
#[cfg(not(unix))]
use std::time::UNIX_EPOCH;
use tempfile::TempDir;

/// Status-change time of `path` in epoch milliseconds, rounded to nearest.
#[cfg(unix)]
fn ctime_millis(path: &std::path::Path) -> i64 {
    use std::os::unix::fs::MetadataExt;

    let meta = std::fs::metadata(path).unwrap();
    meta.ctime() * 1_000 + (meta.ctime_nsec() + 500_000) / 1_000_000
}

const INTRO: &str = "\
Hello World
===========

Welcome to the site.

Getting Started
---------------

Install things.

Advanced Topics
---------------

Go deeper.
";

fn open_store() -> (TempDir, ArticleStore) {
    let dir = TempDir::new().expect("tempdir");
    let store = ArticleStore::open(dir.path(), "rst").expect("store opens");
    (dir, store)
}

#[test]
fn intro_article_metadata() {
    let (dir, store) = open_store();
    store.write_article("intro", INTRO).unwrap();
    let stopwords = StopwordSet::builtin();

    let listing = collect_listings(&store, &stopwords, ListingOptions::default()).unwrap();
    assert_eq!(listing.articles.len(), 1);
    let meta = &listing.articles[0];

    assert_eq!(meta.name, "intro");
    assert_eq!(meta.title, "Hello World");
    assert_eq!(meta.keywords, vec!["hello", "world", "getting", "started", "advanced"]);

    let heading_words = ["hello", "world", "getting", "started", "advanced", "topics"];
    for keyword in &meta.keywords {
        assert!(heading_words.contains(&keyword.as_str()));
        assert!(!stopwords.contains(keyword));
    }

    #[cfg(unix)]
    assert_eq!(meta.date, ctime_millis(&dir.path().join("intro.rst")));

    #[cfg(not(unix))]
    {
        let modified_ms = std::fs::metadata(dir.path().join("intro.rst"))
            .unwrap()
            .modified()
            .unwrap()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis() as i64;
        assert_eq!(meta.date, modified_ms);
    }
}

#[test]
fn empty_store_yields_empty_listing() {
    let (_dir, store) = open_store();
    let listing = collect_listings(&store, &StopwordSet::builtin(), ListingOptions::default()).unwrap();
    assert!(listing.articles.is_empty());
    assert!(listing.skipped.is_empty());
}

#[test]
fn republishing_does_not_duplicate_entries() {
    let (_dir, store) = open_store();
    store.write_article("intro", INTRO).unwrap();
    store.write_article("intro", INTRO).unwrap();

    let listing = collect_listings(&store, &StopwordSet::builtin(), ListingOptions::default()).unwrap();
    assert_eq!(listing.articles.len(), 1);
    assert_eq!(store.read_article("intro").unwrap(), INTRO);
}

#[test]
fn listing_is_sorted_by_file_name() {
    let (_dir, store) = open_store();
    store.write_article("zeta", "Zeta\n====\n").unwrap();
    store.write_article("alpha", "Alpha\n=====\n").unwrap();
    store.write_article("mid", "Mid\n===\n").unwrap();

    let listing = collect_listings(&store, &StopwordSet::builtin(), ListingOptions::default()).unwrap();
    let names: Vec<&str> = listing.articles.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "mid", "zeta"]);
}

#[test]
fn malformed_articles_are_skipped_by_default() {
    let (dir, store) = open_store();
    store.write_article("good", INTRO).unwrap();
    store.write_article("bad", "no title at all\n").unwrap();
    std::fs::write(dir.path().join("binary.rst"), [0xff, 0xfe, 0x00]).unwrap();

    let listing = collect_listings(&store, &StopwordSet::builtin(), ListingOptions::default()).unwrap();
    assert_eq!(listing.articles.len(), 1);
    assert_eq!(listing.articles[0].name, "good");
    assert_eq!(listing.skipped, vec!["bad.rst", "binary.rst"]);
}

#[test]
fn strict_listing_aborts_on_first_malformed_article() {
    let (_dir, store) = open_store();
    store.write_article("good", INTRO).unwrap();
    store.write_article("bad", "no title at all\n").unwrap();

    let options = ListingOptions {
        skip_malformed: false,
        ..ListingOptions::default()
    };
    let err = collect_listings(&store, &StopwordSet::builtin(), options).unwrap_err();
    assert!(matches!(err, MetaError::Parse { ref name, .. } if name == "bad"));
}

#[test]
fn signature_lines_do_not_make_an_article_malformed() {
    let (_dir, store) = open_store();
    store
        .write_article("letter", "Dear Reader\n===========\n\nThanks.\n\n--\nJohn Smith\n")
        .unwrap();

    let options = ListingOptions {
        skip_malformed: false,
        ..ListingOptions::default()
    };
    let listing = collect_listings(&store, &StopwordSet::builtin(), options).unwrap();
    assert_eq!(listing.articles.len(), 1);
    assert_eq!(listing.articles[0].title, "Dear Reader");
    assert!(listing.skipped.is_empty());
}

#[test]
fn keyword_count_is_configurable() {
    let (_dir, store) = open_store();
    store.write_article("intro", INTRO).unwrap();

    let options = ListingOptions {
        keyword_count: 2,
        ..ListingOptions::default()
    };
    let listing = collect_listings(&store, &StopwordSet::builtin(), options).unwrap();
    assert_eq!(listing.articles[0].keywords, vec!["hello", "world"]);
}
