// ProductState is the canonical domain state after folding a product stream.
//
// Boundaries
// - No input or output. Framework-free.

use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductState {
    None,
    Listed {
        product_id: String,
        owner_id: String,
        name: String,
        tagline: String,
        logo_url: Option<String>,
        images: Vec<String>,
        is_featured: bool,
        liked_by: BTreeSet<String>,
        submitted_at: i64,
        updated_at: i64,
    },
}

impl ProductState {
    pub fn is_listed(&self) -> bool {
        matches!(self, ProductState::Listed { .. })
    }
}

#[cfg(test)]
mod product_state_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_start_unlisted() {
        assert!(!ProductState::None.is_listed());
    }

    #[rstest]
    fn it_should_report_a_listed_product() {
        let state = ProductState::Listed {
            product_id: "prod-fixed-0001".to_string(),
            owner_id: "founder-fixed-0001".to_string(),
            name: "Shipfast".to_string(),
            tagline: "Launch in a weekend".to_string(),
            logo_url: None,
            images: vec![],
            is_featured: false,
            liked_by: BTreeSet::new(),
            submitted_at: 1_700_000_000_000,
            updated_at: 1_700_000_000_000,
        };
        assert!(state.is_listed());
    }
}
