/// Invalid feedback submitted by the caller.
#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    #[error("rating {rating} outside valid range 1..=5")]
    RatingOutOfRange { rating: u8 },

    #[error("item name must not be empty")]
    EmptyItemName,

    #[error("recipe name must not be empty")]
    EmptyRecipeName,
}
