/// Vote rejections raised by the ledger. Neither leaves partial state behind.
#[derive(Debug, thiserror::Error)]
pub enum VoteError {
    #[error("voter {voter_id} already voted on translation {translation_id}")]
    DuplicateVote {
        translation_id: String,
        voter_id: String,
    },

    #[error("voter {voter_id} created translation {translation_id} and cannot vote on it")]
    SelfVote {
        translation_id: String,
        voter_id: String,
    },
}
