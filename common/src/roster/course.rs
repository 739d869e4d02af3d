/// A course on offer.
///
/// Immutable once created; the fee is charged in full at enrollment time.
#[derive(Clone, Debug, PartialEq)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub fee: f64,
}

impl Course {
    pub fn new(id: impl Into<String>, name: impl Into<String>, fee: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            fee,
        }
    }
}
