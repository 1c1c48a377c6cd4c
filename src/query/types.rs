/// Parameterized SQL fragment: `$n` placeholders in `query`, values in
/// `params` in placeholder order.
#[derive(Debug, Clone)]
pub struct SqlResult {
    pub query: String,
    pub params: Vec<serde_json::Value>,
}
