use crate::modules::products::core::events::ProductEvent;
use crate::modules::products::core::intents::ProductIntent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("product already exists")]
    AlreadyExists,

    #[error("product does not exist")]
    NotFound,

    #[error("{0} must not be blank")]
    BlankField(&'static str),

    #[error("product already liked by this user")]
    AlreadyLiked,

    #[error("product is already featured")]
    AlreadyFeatured,
}

#[derive(Debug)]
pub enum Decision {
    Accepted {
        events: Vec<ProductEvent>,
        intents: Vec<ProductIntent>,
    },
    Rejected {
        reason: DecideError,
    },
}

impl Decision {
    pub fn rejected(reason: DecideError) -> Self {
        Decision::Rejected { reason }
    }
}
