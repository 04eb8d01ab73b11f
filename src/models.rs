/// A person record. Fields are public and carry no invariants beyond being set
/// together at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    /// Builds a person from the given parts as-is. Never fails, and does not
    /// trim or reject empty names or non-positive ids.
    pub fn new(id: i64, first_name: &str, last_name: &str) -> Self {
        Self {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }
}
