use crate::commands::CmdResult;
use crate::directory::distinct_states;
use crate::error::Result;
use crate::store::SchoolStore;

/// Distinct states across the whole collection, for populating a filter control.
pub fn run<S: SchoolStore>(store: &S) -> Result<CmdResult> {
    let schools = store.read_all()?;
    Ok(CmdResult::default().with_states(distinct_states(&schools)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_each_state_once_alphabetically() {
        let store = StoreFixture::new()
            .with_school("A", "c", "Kerala")
            .with_school("B", "c", "Bihar")
            .with_school("C", "c", "Kerala")
            .store;
        let result = run(&store).unwrap();
        assert_eq!(result.states, vec!["Bihar", "Kerala"]);
    }

    #[test]
    fn empty_store_has_no_states() {
        let result = run(&InMemoryStore::new()).unwrap();
        assert!(result.states.is_empty());
    }
}
