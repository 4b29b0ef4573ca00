pub mod entity;
pub mod entity_type;
pub mod organization;

/// Fields a record exposes for client-side free-text filtering.
///
/// The list controller matches the search term against all three fields; a
/// record with no description can still match on name or code.
pub trait Searchable {
    fn name(&self) -> &str;
    fn code(&self) -> &str;
    fn description(&self) -> Option<&str> {
        None
    }
}
