use crate::commands::CmdResult;
use crate::directory::{DirectoryView, ViewState};
use crate::error::Result;
use crate::store::SchoolStore;
use tracing::debug;

pub fn run<S: SchoolStore>(store: &S, view: &ViewState) -> Result<CmdResult> {
    let schools = store.read_all()?;
    let directory = DirectoryView::build(&schools, view);
    debug!(
        shown = directory.schools.len(),
        total = directory.total,
        sort = %view.sort,
        "derived directory view"
    );
    let states = directory.states.clone();
    Ok(CmdResult::default()
        .with_directory(directory)
        .with_states(states))
}
