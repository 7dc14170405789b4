/// Query-string parameters accepted by paginated list endpoints.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct PageQuery {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}
