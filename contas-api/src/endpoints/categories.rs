use std::borrow::Cow;
use tower_api_client::Request;

/// The fixed category names the backend accepts
#[derive(Default, Debug, Clone)]
pub struct ListCategories;

impl ListCategories {
    pub fn new() -> Self {
        Self
    }
}

impl Request for ListCategories {
    type Data = ();
    type Response = Vec<String>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/categorias".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint() {
        assert_eq!(ListCategories::new().endpoint(), "/api/categorias");
    }
}
