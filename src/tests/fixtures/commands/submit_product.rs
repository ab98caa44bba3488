// Shared test fixture for the SubmitProduct command, seeded from json/submit_product.json.

use crate::modules::products::use_cases::submit_product::command::SubmitProduct;
use serde::Deserialize;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitProductDto {
    pub product_id: String,
    pub owner_id: String,
    pub name: String,
    pub tagline: String,
    pub logo_url: Option<String>,
    pub images: Vec<String>,
}

pub struct SubmitProductBuilder {
    inner: SubmitProduct,
}

impl Default for SubmitProductBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SubmitProductBuilder {
    pub fn new() -> Self {
        let dto: SubmitProductDto =
            serde_json::from_str(include_str!("json/submit_product.json")).unwrap();

        Self {
            inner: SubmitProduct {
                product_id: dto.product_id,
                owner_id: dto.owner_id,
                name: dto.name,
                tagline: dto.tagline,
                logo_url: dto.logo_url,
                images: dto.images,
                submitted_at: 1_700_000_000_000,
            },
        }
    }

    pub fn product_id(mut self, v: impl Into<String>) -> Self {
        self.inner.product_id = v.into();
        self
    }

    pub fn owner_id(mut self, v: impl Into<String>) -> Self {
        self.inner.owner_id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn tagline(mut self, v: impl Into<String>) -> Self {
        self.inner.tagline = v.into();
        self
    }

    pub fn logo_url(mut self, v: Option<String>) -> Self {
        self.inner.logo_url = v;
        self
    }

    pub fn images(mut self, v: Vec<String>) -> Self {
        self.inner.images = v;
        self
    }

    pub fn submitted_at(mut self, v: i64) -> Self {
        self.inner.submitted_at = v;
        self
    }

    pub fn build(self) -> SubmitProduct {
        self.inner
    }
}

#[cfg(test)]
mod submit_product_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = SubmitProductBuilder::default().build();
        assert_eq!(built.product_id, "prod-fixed-0001");
        assert_eq!(built.owner_id, "founder-fixed-0001");
        assert_eq!(built.name, "Launchpad");
        assert!(built.logo_url.is_some());
        assert_eq!(built.images.len(), 2);
        assert_eq!(built.submitted_at, 1_700_000_000_000);
    }

    #[rstest]
    fn setters_override_fields() {
        let custom = SubmitProductBuilder::new()
            .product_id("p-9")
            .owner_id("o-9")
            .name("Relay")
            .tagline("Ship updates")
            .logo_url(None)
            .images(vec![])
            .submitted_at(42)
            .build();

        assert_eq!(custom.product_id, "p-9");
        assert_eq!(custom.owner_id, "o-9");
        assert_eq!(custom.name, "Relay");
        assert_eq!(custom.tagline, "Ship updates");
        assert_eq!(custom.logo_url, None);
        assert!(custom.images.is_empty());
        assert_eq!(custom.submitted_at, 42);
    }
}
