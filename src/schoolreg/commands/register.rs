use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ImageUpload, NewSchool, School, SchoolId};
use crate::store::SchoolStore;
use crate::validation::validate_submission;
use chrono::Utc;
use tracing::{info, warn};

/// Validates a submission and appends it to the stored collection.
///
/// Nothing is written when validation fails. The image (if any) is stored before
/// the collection so the record never points at a missing file, and removed again
/// if the collection write fails.
pub fn run<S: SchoolStore>(
    store: &mut S,
    fields: NewSchool,
    image: Option<ImageUpload>,
) -> Result<CmdResult> {
    if let Err(errors) = validate_submission(&fields, image.as_ref()) {
        warn!(fields = errors.len(), "registration rejected");
        return Err(errors.into());
    }

    let mut schools = store.read_all()?;
    let latest = schools.iter().map(|s| s.id).max();
    let id = SchoolId::next(Utc::now(), latest);

    let image_ref = match &image {
        Some(upload) => Some(store.store_image(id, upload)?),
        None => None,
    };

    let school = School::new(id, fields, image_ref);
    schools.push(school.clone());
    if let Err(err) = store.write_all(&schools) {
        if let Some(reference) = school.image.as_deref() {
            if let Err(cleanup) = store.remove_image(reference) {
                warn!(%reference, error = %cleanup, "could not remove orphaned image");
            }
        }
        return Err(err);
    }

    info!(id = %school.id, name = %school.name, "school registered");

    let mut result = CmdResult::default().with_affected_schools(vec![school.clone()]);
    result.add_message(CmdMessage::success(format!(
        "School has been added successfully: {}",
        school.name
    )));
    Ok(result)
}
