//! Tests for loading term files from disk.

use crate::config::loader::LoaderSettings;
use crate::config::trie::TrieSettings;
use crate::data_structures::lanai_trie::{LanaiTrie, MismatchPolicy};
use crate::error::load::LoadError;
use crate::loader::{LoadStats, WeightedTermLoader};
use crate::tests::TestFixture;

const TERMS: &str = "\
apple\t10
Apple\t5
application\t3
apply
banana\t1.5

band\t2
";

#[test]
fn test_load_path_fills_trie() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_file("terms.tsv", TERMS).unwrap();

    let mut trie = LanaiTrie::<f32>::new();
    let stats = WeightedTermLoader::default()
        .load_path(&path, &mut trie)
        .unwrap();

    assert_eq!(
        stats,
        LoadStats {
            lines: 7,
            inserted: 5,
            updated: 1,
            skipped: 1,
        }
    );
    assert_eq!(trie.get("apple"), Some(&15.0));
    assert_eq!(trie.get("apply"), Some(&1.0));
    assert_eq!(
        trie.match_prefix("app", -1),
        vec!["apple", "application", "apply"]
    );
}

#[test]
fn test_load_missing_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.temp_dir.path().join("absent.tsv");

    let mut trie = LanaiTrie::<u32>::new();
    let err = WeightedTermLoader::default()
        .load_path(&path, &mut trie)
        .unwrap_err();

    match err {
        LoadError::Open { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
    assert!(trie.is_empty());
}

#[test]
fn test_load_with_configured_trie() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("words.csv", "band,4\nbend,2\nbind,1\nbond,3\nbound,9\n")
        .unwrap();

    let trie_settings = TrieSettings {
        match_almost_diff: 1,
        ..TrieSettings::default()
    };
    let loader_settings = LoaderSettings {
        separator: ",".to_string(),
        ..LoaderSettings::default()
    };

    let mut trie = trie_settings.build_trie::<u32>().unwrap();
    WeightedTermLoader::new(loader_settings)
        .load_path(&path, &mut trie)
        .unwrap();

    assert_eq!(
        trie.match_almost("band", -1, MismatchPolicy::Exact),
        vec!["bend", "bind", "bond"]
    );
    assert_eq!(trie.match_almost("band", 2, MismatchPolicy::UpTo).len(), 2);
}
