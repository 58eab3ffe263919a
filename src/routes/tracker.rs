use std::str::FromStr;

use chrono::Local;
use log::{error, info};
use rocket::form::Form;
use rocket::http::Status;
use rocket::response::Redirect;
use rocket::{get, post, uri, Either, FromForm, State};
use rocket_dyn_templates::Template;

use crate::errors::{CustomResult, Error};
use crate::modules::calculator::{calculate, PaceInput, RaceTime};
use crate::modules::history::SharedStore;
use crate::modules::models::entry::Entry;
use crate::TemplateDataTracker;

/**************************************************************************************************/
/**************** ROUTES **************************************************************************/
/**************************************************************************************************/

#[get("/")]
pub fn index(store: &State<SharedStore>) -> Template {
    Template::render(
        "index",
        TemplateDataTracker::new(None, None, store.load_all()),
    )
}

/// # submit progress or clear the history
/// a request carrying `clear_history` empties the history and redirects back to the page.
/// any other request is parsed, calculated and saved before the page is rendered.
#[post("/", data = "<progress>")]
pub fn submit(
    progress: Form<ProgressForm>,
    store: &State<SharedStore>,
) -> Result<Either<Redirect, (Status, Template)>, Status> {
    if progress.is_clear_request() {
        if let Err(error) = store.clear() {
            error!(target:"routes/tracker:submit", "Error clearing history. (error: {})", error);
            return Err(Status::InternalServerError);
        }

        info!(target:"routes/tracker:submit", "history cleared");
        return Ok(Either::Left(Redirect::to(uri!(index))));
    }

    let result = match progress.parse().and_then(|input| calculate(&input)) {
        Ok(result) => result,
        Err(error) if error.is_user_error() => {
            info!(target:"routes/tracker:submit", "rejected submission: {}", error);

            let page = TemplateDataTracker::new(None, Some(error.to_string()), store.load_all());
            return Ok(Either::Right((
                Status::UnprocessableEntity,
                Template::render("index", page),
            )));
        }
        Err(error) => {
            error!(target:"routes/tracker:submit", "Error calculating pace. (error: {})", error);
            return Err(Status::InternalServerError);
        }
    };

    let entry = Entry::from_result(&result, Local::now().naive_local());
    if let Err(error) = store.append(entry) {
        error!(target:"routes/tracker:submit", "Error saving history entry. (error: {})", error);
        return Err(Status::InternalServerError);
    }

    info!(
        target:"routes/tracker:submit",
        "saved progress: {:.3} km in {} of {} minutes",
        result.covered_distance,
        result.elapsed_time,
        result.target_time
    );

    let page = TemplateDataTracker::new(Some(&result), None, store.load_all());
    Ok(Either::Right((Status::Ok, Template::render("index", page))))
}

/**************************************************************************************************/
/**************** FORMS ***************************************************************************/
/**************************************************************************************************/

/// # raw progress form
/// fields are kept as text so malformed values can be reported instead of rejected by rocket
#[derive(FromForm, Debug, Default, Clone)]
pub struct ProgressForm {
    pub covered_distance: Option<String>,
    pub elapsed_hours: Option<String>,
    pub elapsed_minutes: Option<String>,
    pub target_hours: Option<String>,
    pub target_minutes: Option<String>,
    pub clear_history: Option<String>,
}

impl ProgressForm {
    pub fn is_clear_request(&self) -> bool {
        self.clear_history.is_some()
    }

    pub fn parse(&self) -> CustomResult<PaceInput> {
        let covered_distance: f64 = parse_field("covered_distance", &self.covered_distance)?;
        if !covered_distance.is_finite() {
            return Err(Error::InvalidFormValueError {
                field: "covered_distance".to_string(),
            });
        }

        Ok(PaceInput {
            covered_distance,
            elapsed: RaceTime::new(
                parse_field("elapsed_hours", &self.elapsed_hours)?,
                parse_field("elapsed_minutes", &self.elapsed_minutes)?,
            ),
            target: RaceTime::new(
                parse_field("target_hours", &self.target_hours)?,
                parse_field("target_minutes", &self.target_minutes)?,
            ),
        })
    }
}

fn parse_field<T: FromStr>(field: &str, value: &Option<String>) -> CustomResult<T> {
    value
        .as_deref()
        .map(str::trim)
        .and_then(|raw| raw.parse::<T>().ok())
        .ok_or_else(|| Error::InvalidFormValueError {
            field: field.to_string(),
        })
}
