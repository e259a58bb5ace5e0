//! Canonical column names for note records, in on-disk order.

/// Unique note identifier (the record-id column)
pub const NOTE_ID: &str = "noteId";
/// Participant that authored the note
pub const NOTE_AUTHOR_PARTICIPANT_ID: &str = "noteAuthorParticipantId";
/// Creation time in milliseconds since the epoch
pub const CREATED_AT_MILLIS: &str = "createdAtMillis";
/// Post the note is attached to
pub const TWEET_ID: &str = "tweetId";
/// Author classification of the post
pub const CLASSIFICATION: &str = "classification";
/// Legacy believability answer
pub const BELIEVABLE: &str = "believable";
/// Legacy harm answer
pub const HARMFUL: &str = "harmful";
/// Legacy validation difficulty answer
pub const VALIDATION_DIFFICULTY: &str = "validationDifficulty";
/// Misleading: other reason
pub const MISLEADING_OTHER: &str = "misleadingOther";
/// Misleading: factual error
pub const MISLEADING_FACTUAL_ERROR: &str = "misleadingFactualError";
/// Misleading: manipulated media
pub const MISLEADING_MANIPULATED_MEDIA: &str = "misleadingManipulatedMedia";
/// Misleading: outdated information
pub const MISLEADING_OUTDATED_INFORMATION: &str = "misleadingOutdatedInformation";
/// Misleading: missing important context
pub const MISLEADING_MISSING_IMPORTANT_CONTEXT: &str = "misleadingMissingImportantContext";
/// Misleading: unverified claim presented as fact
pub const MISLEADING_UNVERIFIED_CLAIM_AS_FACT: &str = "misleadingUnverifiedClaimAsFact";
/// Misleading: satire
pub const MISLEADING_SATIRE: &str = "misleadingSatire";
/// Not misleading: other reason
pub const NOT_MISLEADING_OTHER: &str = "notMisleadingOther";
/// Not misleading: factually correct
pub const NOT_MISLEADING_FACTUALLY_CORRECT: &str = "notMisleadingFactuallyCorrect";
/// Not misleading: outdated but not when written
pub const NOT_MISLEADING_OUTDATED_BUT_NOT_WHEN_WRITTEN: &str =
    "notMisleadingOutdatedButNotWhenWritten";
/// Not misleading: clearly satire
pub const NOT_MISLEADING_CLEARLY_SATIRE: &str = "notMisleadingClearlySatire";
/// Not misleading: personal opinion
pub const NOT_MISLEADING_PERSONAL_OPINION: &str = "notMisleadingPersonalOpinion";
/// Whether the note cites trustworthy sources
pub const TRUSTWORTHY_SOURCES: &str = "trustworthySources";
/// Free-text note body
pub const SUMMARY: &str = "summary";
/// Whether the note applies to media rather than a single post
pub const IS_MEDIA_NOTE: &str = "isMediaNote";
/// Whether the note was written collaboratively.
///
/// Older exports omit this column; it is the one deficit the correctors repair.
pub const IS_COLLABORATIVE_NOTE: &str = "isCollaborativeNote";

/// All note columns in canonical order
pub const NOTE_COLUMNS: [&str; 24] = [
    NOTE_ID,
    NOTE_AUTHOR_PARTICIPANT_ID,
    CREATED_AT_MILLIS,
    TWEET_ID,
    CLASSIFICATION,
    BELIEVABLE,
    HARMFUL,
    VALIDATION_DIFFICULTY,
    MISLEADING_OTHER,
    MISLEADING_FACTUAL_ERROR,
    MISLEADING_MANIPULATED_MEDIA,
    MISLEADING_OUTDATED_INFORMATION,
    MISLEADING_MISSING_IMPORTANT_CONTEXT,
    MISLEADING_UNVERIFIED_CLAIM_AS_FACT,
    MISLEADING_SATIRE,
    NOT_MISLEADING_OTHER,
    NOT_MISLEADING_FACTUALLY_CORRECT,
    NOT_MISLEADING_OUTDATED_BUT_NOT_WHEN_WRITTEN,
    NOT_MISLEADING_CLEARLY_SATIRE,
    NOT_MISLEADING_PERSONAL_OPINION,
    TRUSTWORTHY_SOURCES,
    SUMMARY,
    IS_MEDIA_NOTE,
    IS_COLLABORATIVE_NOTE,
];

/// Value written into the repaired column for every data row
pub const IS_COLLABORATIVE_NOTE_DEFAULT: &str = "0";
