//! Canonical column names for rating records, in on-disk order.

/// Rated note
pub const NOTE_ID: &str = "noteId";
/// Participant that submitted the rating
pub const RATER_PARTICIPANT_ID: &str = "raterParticipantId";
/// Rating time in milliseconds since the epoch
pub const CREATED_AT_MILLIS: &str = "createdAtMillis";
/// Rating form version
pub const VERSION: &str = "version";
/// Legacy agree answer
pub const AGREE: &str = "agree";
/// Legacy disagree answer
pub const DISAGREE: &str = "disagree";
/// Legacy helpful answer
pub const HELPFUL: &str = "helpful";
/// Legacy not-helpful answer
pub const NOT_HELPFUL: &str = "notHelpful";
/// Overall helpfulness level
pub const HELPFULNESS_LEVEL: &str = "helpfulnessLevel";
pub(crate) const HELPFUL_OTHER: &str = "helpfulOther";
pub(crate) const HELPFUL_INFORMATIVE: &str = "helpfulInformative";
pub(crate) const HELPFUL_CLEAR: &str = "helpfulClear";
pub(crate) const HELPFUL_EMPATHETIC: &str = "helpfulEmpathetic";
pub(crate) const HELPFUL_GOOD_SOURCES: &str = "helpfulGoodSources";
pub(crate) const HELPFUL_UNIQUE_CONTEXT: &str = "helpfulUniqueContext";
pub(crate) const HELPFUL_ADDRESSES_CLAIM: &str = "helpfulAddressesClaim";
pub(crate) const HELPFUL_IMPORTANT_CONTEXT: &str = "helpfulImportantContext";
pub(crate) const HELPFUL_UNBIASED_LANGUAGE: &str = "helpfulUnbiasedLanguage";
pub(crate) const NOT_HELPFUL_OTHER: &str = "notHelpfulOther";
pub(crate) const NOT_HELPFUL_INCORRECT: &str = "notHelpfulIncorrect";
pub(crate) const NOT_HELPFUL_SOURCES_MISSING_OR_UNRELIABLE: &str =
    "notHelpfulSourcesMissingOrUnreliable";
pub(crate) const NOT_HELPFUL_OPINION_SPECULATION_OR_BIAS: &str =
    "notHelpfulOpinionSpeculationOrBias";
pub(crate) const NOT_HELPFUL_MISSING_KEY_POINTS: &str = "notHelpfulMissingKeyPoints";
pub(crate) const NOT_HELPFUL_OUTDATED: &str = "notHelpfulOutdated";
pub(crate) const NOT_HELPFUL_HARD_TO_UNDERSTAND: &str = "notHelpfulHardToUnderstand";
pub(crate) const NOT_HELPFUL_ARGUMENTATIVE_OR_BIASED: &str = "notHelpfulArgumentativeOrBiased";
pub(crate) const NOT_HELPFUL_OFF_TOPIC: &str = "notHelpfulOffTopic";
pub(crate) const NOT_HELPFUL_SPAM_HARASSMENT_OR_ABUSE: &str = "notHelpfulSpamHarassmentOrAbuse";
pub(crate) const NOT_HELPFUL_IRRELEVANT_SOURCES: &str = "notHelpfulIrrelevantSources";
pub(crate) const NOT_HELPFUL_OPINION_SPECULATION: &str = "notHelpfulOpinionSpeculation";
pub(crate) const NOT_HELPFUL_NOTE_NOT_NEEDED: &str = "notHelpfulNoteNotNeeded";
/// Post the rater saw the note on
pub const RATED_ON_TWEET_ID: &str = "ratedOnTweetId";
/// Bucketed source of the rating
pub const RATING_SOURCE_BUCKETED: &str = "ratingSourceBucketed";

/// Derived column the scorer computes in memory; exports sometimes carry it along.
pub const CORRELATED_RATER: &str = "correlatedRater";

/// All rating columns in canonical order
pub const RATING_COLUMNS: [&str; 33] = [
    NOTE_ID,
    RATER_PARTICIPANT_ID,
    CREATED_AT_MILLIS,
    VERSION,
    AGREE,
    DISAGREE,
    HELPFUL,
    NOT_HELPFUL,
    HELPFULNESS_LEVEL,
    HELPFUL_OTHER,
    HELPFUL_INFORMATIVE,
    HELPFUL_CLEAR,
    HELPFUL_EMPATHETIC,
    HELPFUL_GOOD_SOURCES,
    HELPFUL_UNIQUE_CONTEXT,
    HELPFUL_ADDRESSES_CLAIM,
    HELPFUL_IMPORTANT_CONTEXT,
    HELPFUL_UNBIASED_LANGUAGE,
    NOT_HELPFUL_OTHER,
    NOT_HELPFUL_INCORRECT,
    NOT_HELPFUL_SOURCES_MISSING_OR_UNRELIABLE,
    NOT_HELPFUL_OPINION_SPECULATION_OR_BIAS,
    NOT_HELPFUL_MISSING_KEY_POINTS,
    NOT_HELPFUL_OUTDATED,
    NOT_HELPFUL_HARD_TO_UNDERSTAND,
    NOT_HELPFUL_ARGUMENTATIVE_OR_BIASED,
    NOT_HELPFUL_OFF_TOPIC,
    NOT_HELPFUL_SPAM_HARASSMENT_OR_ABUSE,
    NOT_HELPFUL_IRRELEVANT_SOURCES,
    NOT_HELPFUL_OPINION_SPECULATION,
    NOT_HELPFUL_NOTE_NOT_NEEDED,
    RATED_ON_TWEET_ID,
    RATING_SOURCE_BUCKETED,
];
