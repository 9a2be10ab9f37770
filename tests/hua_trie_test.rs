// Copyright (c) 2025 Huaolelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the Hua Trie through the public library API.

use std::io::Write;
use std::sync::{Arc, RwLock};
use std::thread;

use huaolelo_lib::config::DictionaryConfig;
use huaolelo_lib::data_structures::HuaTrie;
use huaolelo_lib::loader::WordListLoader;

#[test]
fn test_dictionary_basic() {
    let mut dictionary = HuaTrie::new();

    assert!(dictionary.insert("Dog"));
    assert!(!dictionary.insert("dog"));
    assert_eq!(dictionary.size(), 1);

    assert!(dictionary.is_word("dog"));
    assert!(dictionary.is_word("DOG"));
    assert!(!dictionary.is_word("do"));
}

#[test]
fn test_completion_from_word_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for word in ["step", "stem", "stew", "steer", "steep", "stone", "Stem"] {
        writeln!(file, "{word}").unwrap();
    }

    let mut dictionary = HuaTrie::new();
    let report = WordListLoader::new(&DictionaryConfig::default())
        .load_path(&mut dictionary, file.path())
        .unwrap();
    assert_eq!(report.inserted, 6);
    assert_eq!(report.duplicates, 1);

    let completions = dictionary.predict_completions("ste", 4);
    assert_eq!(completions.len(), 4);
    assert_eq!(&completions[..3], &["step", "stem", "stew"]);
    assert!(completions[3] == "steer" || completions[3] == "steep");

    assert!(dictionary.predict_completions("xyz", 5).is_empty());
}

#[test]
fn test_node_navigation() {
    let dictionary: HuaTrie = ["tea", "ten", "to"].into_iter().collect();

    let t = dictionary.root().child_for('t').unwrap();
    assert_eq!(t.text(), "t");
    assert!(!t.is_terminal());
    assert_eq!(t.valid_next_characters().collect::<String>(), "eo");

    let tea = t.child_for('e').and_then(|te| te.child_for('a')).unwrap();
    assert!(tea.is_terminal());
    assert!(tea.is_leaf());
}

/// Readers may run in parallel once writing is done; writes are serialized by
/// the caller's lock.
#[test]
fn test_shared_behind_caller_lock() {
    const THREAD_COUNT: usize = 4;
    const WORDS_PER_THREAD: usize = 25;

    let dictionary = Arc::new(RwLock::new(HuaTrie::new()));

    let writers: Vec<_> = (0..THREAD_COUNT)
        .map(|thread_id| {
            let dictionary = Arc::clone(&dictionary);
            thread::spawn(move || {
                for j in 0..WORDS_PER_THREAD {
                    let word = format!("word{thread_id}x{j}");
                    assert!(dictionary.write().unwrap().insert(&word));
                }
            })
        })
        .collect();
    for handle in writers {
        handle.join().unwrap();
    }

    let readers: Vec<_> = (0..THREAD_COUNT)
        .map(|thread_id| {
            let dictionary = Arc::clone(&dictionary);
            thread::spawn(move || {
                let dictionary = dictionary.read().unwrap();
                assert!(dictionary.is_word(format!("WORD{thread_id}X0")));
                dictionary.predict_completions(format!("word{thread_id}"), 5).len()
            })
        })
        .collect();
    for handle in readers {
        assert_eq!(handle.join().unwrap(), 5);
    }

    assert_eq!(
        dictionary.read().unwrap().size(),
        THREAD_COUNT * WORDS_PER_THREAD
    );
}
