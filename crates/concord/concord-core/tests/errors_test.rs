use concord_core::errors::*;

#[test]
fn conflict_message_carries_pair() {
    let err = ConcordError::Conflict {
        source_word_id: "w-1".into(),
        target_language: "en".into(),
        translated_word: "cat".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("w-1"));
    assert!(msg.contains("cat"));
    assert_eq!(err.code(), "CONFLICT");
}

#[test]
fn index_error_converts_to_index_unavailable() {
    let err: ConcordError = IndexError::Timeout { timeout_ms: 250 }.into();
    assert_eq!(err.code(), "INDEX_UNAVAILABLE");
    assert!(err.to_string().contains("250"));
}

#[test]
fn vote_errors_keep_distinct_codes() {
    let dup: ConcordError = VoteError::DuplicateVote {
        translation_id: "t".into(),
        voter_id: "alice".into(),
    }
    .into();
    let own: ConcordError = VoteError::SelfVote {
        translation_id: "t".into(),
        voter_id: "bob".into(),
    }
    .into();

    assert_eq!(dup.code(), "DUPLICATE_VOTE");
    assert_eq!(own.code(), "SELF_VOTE");
    assert!(dup.is_duplicate_vote());
    assert!(own.is_self_vote());
    assert!(!own.is_duplicate_vote());
}

#[test]
fn storage_error_converts_to_concord_error() {
    let err: ConcordError = StorageError::Backend {
        message: "disk full".into(),
    }
    .into();
    assert_eq!(err.code(), "STORAGE_ERROR");
    assert!(err.to_string().contains("disk full"));
}
