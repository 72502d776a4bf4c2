use serde::Serialize;

/// product every synthesized order carries
pub(crate) const PLACEHOLDER_PRODUCT: &str = "Laptop";

#[derive(Debug, PartialEq, Serialize)]
pub(crate) struct Order {
    pub user: String,
    pub order: &'static str,
}

impl Order {
    pub fn for_user(user: String) -> Self {
        Self {
            user,
            order: PLACEHOLDER_PRODUCT,
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub(crate) struct GetOrdersResponse {
    pub orders: Vec<Order>,
}

impl FromIterator<String> for GetOrdersResponse {
    fn from_iter<T: IntoIterator<Item = String>>(users: T) -> Self {
        Self {
            orders: users.into_iter().map(Order::for_user).collect(),
        }
    }
}
