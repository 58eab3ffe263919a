use rocket::fs::{relative, FileServer};
use rocket::{routes, Build, Rocket};
use rocket_dyn_templates::handlebars::Handlebars;
use rocket_dyn_templates::Template;
use serde::{Deserialize, Serialize};

use crate::modules::calculator::{PaceResult, RACE_DISTANCE};
use crate::modules::helpers::handelbars::format_number::FormatNumberHelper;
use crate::modules::helpers::handelbars::format_speed::FormatSpeedHelper;
use crate::modules::helpers::handelbars::format_time::FormatTimeHelper;
use crate::modules::helpers::math::Math;
use crate::modules::history::SharedStore;
use crate::modules::models::entry::Entry;

pub mod config;
pub mod errors;
pub mod modules;
pub mod routes {
    pub mod tracker;
    pub mod api {
        pub mod history;
    }
}

pub const EXAMPLE_INPUTS: [&str; 3] = [
    "25 km, 2h 30m elapsed, 4h 15m target",
    "30 km, 2h 45m elapsed, 4h 30m target",
    "15 km, 1h 45m elapsed, 4h 00m target",
];

pub fn register_template_helpers(handlebars: &mut Handlebars) {
    handlebars.register_helper("formatSpeed", Box::new(FormatSpeedHelper));
    handlebars.register_helper("formatTime", Box::new(FormatTimeHelper));
    handlebars.register_helper("formatNumber", Box::new(FormatNumberHelper));
}

/// the web app with its routes, templates and the given history store
pub fn build_rocket(store: SharedStore) -> Rocket<Build> {
    rocket::build()
        .attach(Template::custom(|engines| {
            register_template_helpers(&mut engines.handlebars);
            engines.handlebars.set_strict_mode(true);
        }))
        .manage(store)
        .mount(
            "/",
            routes![routes::tracker::index, routes::tracker::submit],
        )
        .mount("/api", routes![routes::api::history::get_all])
        .mount("/static", FileServer::from(relative!("static")))
}

#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct TemplateDataTracker {
    pub error: Option<String>,
    pub result: Option<TemplateDataResult>,
    pub progress_width: f64,
    pub progress_percent: f64,
    /// newest entry first
    pub history: Vec<Entry>,
    pub examples: Vec<String>,
}

#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct TemplateDataResult {
    pub covered_distance: f64,
    pub current_speed: f64,
    pub required_speed: f64,
    pub remaining_distance: f64,
    pub remaining_time: i64,
}

impl TemplateDataTracker {
    /// `history` is expected oldest first, as the store returns it
    pub fn new(result: Option<&PaceResult>, error: Option<String>, history: Vec<Entry>) -> Self {
        let progress_width = result.map_or(0.0, |r| Math::percentage(r.covered_distance, RACE_DISTANCE));

        TemplateDataTracker {
            error,
            result: result.map(|r| TemplateDataResult {
                covered_distance: r.covered_distance,
                current_speed: r.current_speed,
                required_speed: r.required_speed,
                remaining_distance: r.remaining_distance(),
                remaining_time: r.remaining_time(),
            }),
            progress_width,
            progress_percent: Math::round_float_to_n_decimals(progress_width, 1),
            history: history.into_iter().rev().collect(),
            examples: EXAMPLE_INPUTS.iter().map(|e| e.to_string()).collect(),
        }
    }
}
